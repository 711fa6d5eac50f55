use std::collections::HashMap;
use std::path::Path;

use egui::{ColorImage, Context, TextureHandle, TextureOptions};

use crate::core::image_format::ImageFormat;
use crate::error::{Error, Result};

const MAX_TEXTURE_WIDTH: u32 = 1920;
const MAX_TEXTURE_HEIGHT: u32 = 1080;

/// Turns an image reference into something egui can paint.
pub trait ImageResolver {
    fn resolve(&mut self, ctx: &Context, reference: &str) -> Option<TextureHandle>;
}

pub fn decode_file(path: &Path) -> Result<ColorImage> {
    let reference = path.display().to_string();
    let format = ImageFormat::from_path(path)
        .ok_or_else(|| Error::UnsupportedFormat(reference.clone()))?;

    let mut reader = image::ImageReader::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    reader.set_format(format.to_image_format());

    let img = reader.decode().map_err(|source| Error::Decode {
        reference: reference.clone(),
        source,
    })?;

    let img = if img.width() > MAX_TEXTURE_WIDTH || img.height() > MAX_TEXTURE_HEIGHT {
        img.resize(
            MAX_TEXTURE_WIDTH,
            MAX_TEXTURE_HEIGHT,
            image::imageops::FilterType::Triangle,
        )
    } else {
        img
    };

    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

/// Resolves references as local file paths. Failed references are remembered
/// so they are not decoded again every frame.
#[derive(Default)]
pub struct FileImageResolver {
    textures: HashMap<String, Option<TextureHandle>>,
}

impl FileImageResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.textures.clear();
    }
}

impl ImageResolver for FileImageResolver {
    fn resolve(&mut self, ctx: &Context, reference: &str) -> Option<TextureHandle> {
        if let Some(slot) = self.textures.get(reference) {
            return slot.clone();
        }

        let texture = match decode_file(Path::new(reference)) {
            Ok(color_image) => {
                tracing::debug!(reference, "uploaded texture");
                Some(ctx.load_texture(
                    format!("gallery_{reference}"),
                    color_image,
                    TextureOptions::LINEAR,
                ))
            }
            Err(e) => {
                tracing::warn!(reference, error = %e, "could not load image");
                None
            }
        };
        self.textures.insert(reference.to_owned(), texture.clone());
        texture
    }
}
