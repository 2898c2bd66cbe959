use thiserror::Error;

/// Transport-level failures of the backend API.
///
/// Never shown to the user as-is; use cases map them to domain messages.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("resource not found")]
    NotFound,

    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("invalid response body: {0}")]
    Decode(String),
}

#[derive(Debug, Error)]
pub enum QrCodeError {
    #[error("url cannot be encoded as a QR code: {0}")]
    Encode(String),

    #[error("failed to render QR image: {0}")]
    Render(String),
}

#[derive(Debug, Error)]
pub enum PhotoSourceError {
    #[error("photo not found: {0}")]
    NotFound(String),

    #[error("unsupported photo type: {0}")]
    Unsupported(String),

    #[error("failed to read photo: {0}")]
    Io(#[from] std::io::Error),
}
