mod png_qr_code;

pub use png_qr_code::PngQrCode;
