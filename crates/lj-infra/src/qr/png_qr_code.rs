use std::io::Cursor;

use base64::Engine;
use image::{GrayImage, ImageFormat, Luma};
use qrcode::{Color, QrCode};

use lj_core::ports::{QrCodeError, QrCodePort};

const DARK: Luma<u8> = Luma([0]);
const LIGHT: Luma<u8> = Luma([255]);

/// Renders QR codes as black-on-white PNG images.
#[derive(Debug, Clone, Copy)]
pub struct PngQrCode {
    /// Edge length of one module, in pixels.
    module_px: u32,
    /// Light border around the symbol, in modules.
    quiet_zone: u32,
}

impl Default for PngQrCode {
    fn default() -> Self {
        Self {
            module_px: 8,
            quiet_zone: 4,
        }
    }
}

impl PngQrCode {
    pub fn new(module_px: u32, quiet_zone: u32) -> Self {
        Self {
            module_px: module_px.max(1),
            quiet_zone,
        }
    }

    /// Renders the PNG bytes, used for both the data URI and file downloads.
    pub fn render_png(&self, url: &str) -> Result<Vec<u8>, QrCodeError> {
        let code = QrCode::new(url.as_bytes()).map_err(|e| QrCodeError::Encode(e.to_string()))?;
        let modules = code.width() as u32;
        let colors = code.to_colors();

        let side = (modules + 2 * self.quiet_zone) * self.module_px;
        let image = GrayImage::from_fn(side, side, |x, y| {
            let mx = (x / self.module_px).checked_sub(self.quiet_zone);
            let my = (y / self.module_px).checked_sub(self.quiet_zone);
            match (mx, my) {
                (Some(mx), Some(my)) if mx < modules && my < modules => {
                    match colors[(my * modules + mx) as usize] {
                        Color::Dark => DARK,
                        Color::Light => LIGHT,
                    }
                }
                _ => LIGHT,
            }
        });

        let mut buffer = Cursor::new(Vec::new());
        image
            .write_to(&mut buffer, ImageFormat::Png)
            .map_err(|e| QrCodeError::Render(e.to_string()))?;
        Ok(buffer.into_inner())
    }
}

impl QrCodePort for PngQrCode {
    fn render_data_uri(&self, url: &str) -> Result<String, QrCodeError> {
        let png = self.render_png(url)?;
        let encoded = base64::engine::general_purpose::STANDARD.encode(png);
        Ok(format!("data:image/png;base64,{encoded}"))
    }
}
