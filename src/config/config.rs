pub const APP_NAME: &str = "Galería de imágenes";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const WINDOW_SIZE: [f32; 2] = [1024.0, 768.0];
pub const WINDOW_MIN_SIZE: [f32; 2] = [400.0, 300.0];

pub const INLINE_ASPECT_RATIO: f32 = 4.0 / 3.0;
pub const INLINE_MAX_WIDTH: f32 = 640.0;

pub const OVERLAY_BACKDROP_ALPHA: u8 = 242;
pub const OVERLAY_MAX_HEIGHT_RATIO: f32 = 0.85;

pub const DEFAULT_TITLE: &str = "Galería";

pub const DEFAULT_LOG_FILTER: &str = "image_gallery=info";
