mod photo_loader;

pub use photo_loader::FsPhotoSource;
