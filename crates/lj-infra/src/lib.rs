//! Infrastructure adapters: the HTTP backend client, QR code rendering and
//! photo loading from the local filesystem.

pub mod fs;
pub mod http;
pub mod qr;

pub use fs::FsPhotoSource;
pub use http::HttpJourneyApi;
pub use qr::PngQrCode;
