pub mod filesystem;

pub use filesystem::FilesystemImageCapture;
