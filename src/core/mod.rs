pub mod file_manager;
pub mod image_format;
pub mod image_loader;
