//! Image gallery widget for egui: an inline slider that opens into a
//! fullscreen overlay, plus a small eframe host to run it standalone.

pub mod app;
pub mod config;
pub mod core;
pub mod error;
pub mod i18n;
pub mod ui;

pub use crate::core::image_loader::{FileImageResolver, ImageResolver};
pub use crate::error::{Error, Result};
pub use crate::ui::gallery::ImageGallery;
pub use crate::ui::navigation_manager::{GalleryAction, GalleryState, OverlayState};
