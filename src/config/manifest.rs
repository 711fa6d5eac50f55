//! Gallery manifests: a title, an optional badge and an ordered image list.
//!
//! ```toml
//! title = "Villa"
//! badge = "Alquiler / Venta"
//! images = ["fachada.jpg", "salon.png"]
//! ```
//!
//! Relative image paths are resolved against the manifest's directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::file_manager::FileManager;
use crate::core::image_format::ImageFormat;
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryManifest {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl GalleryManifest {
    pub fn new(title: impl Into<String>, images: Vec<String>) -> Self {
        Self {
            title: title.into(),
            badge: None,
            images,
        }
    }

    pub fn from_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|source| Error::ManifestParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut manifest = Self::from_toml(&content, path)?;
        let base = path
            .parent()
            .ok_or_else(|| Error::NoParentDirectory(path.to_path_buf()))?;
        manifest.images = manifest
            .images
            .into_iter()
            .map(|image| resolve_relative(base, &image))
            .collect();
        tracing::info!(
            manifest = %path.display(),
            title = %manifest.title,
            images = manifest.images.len(),
            "loaded gallery manifest"
        );
        Ok(manifest)
    }

    /// Builds a gallery from command-line paths.
    ///
    /// A `.toml` path is read as a manifest and its images appended, taking
    /// its title and badge when the caller gave none. Directories contribute
    /// their supported images in sorted order; image files are used as is.
    /// Anything else is skipped with a warning.
    pub fn from_paths(paths: &[PathBuf], title: Option<String>) -> Result<Self> {
        let mut images = Vec::new();
        let mut manifest_title = None;
        let mut badge = None;

        for path in paths {
            if is_manifest(path) {
                let manifest = Self::load_from_path(path)?;
                manifest_title.get_or_insert(manifest.title);
                if badge.is_none() {
                    badge = manifest.badge;
                }
                images.extend(manifest.images);
            } else if path.is_dir() {
                let found = FileManager::scan_directory(path)?;
                images.extend(FileManager::to_references(&found));
            } else if ImageFormat::is_supported(path) {
                images.push(path.to_string_lossy().into_owned());
            } else {
                tracing::warn!(path = %path.display(), "skipping unsupported path");
            }
        }

        let title = title
            .or(manifest_title)
            .unwrap_or_else(|| crate::config::config::DEFAULT_TITLE.to_owned());
        Ok(Self {
            title,
            badge,
            images,
        })
    }
}

fn is_manifest(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}

fn resolve_relative(base: &Path, image: &str) -> String {
    let candidate = Path::new(image);
    if candidate.is_absolute() {
        image.to_owned()
    } else {
        base.join(candidate).to_string_lossy().into_owned()
    }
}
