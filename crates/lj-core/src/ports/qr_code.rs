use crate::ports::QrCodeError;

/// Renders a URL as an image suitable for direct display and download.
pub trait QrCodePort: Send + Sync {
    /// Returns a `data:` URI of the rendered image.
    fn render_data_uri(&self, url: &str) -> Result<String, QrCodeError>;
}
