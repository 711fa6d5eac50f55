use std::fs;
use std::path::{Path, PathBuf};

use crate::core::image_format::ImageFormat;
use crate::error::{Error, Result};
use crate::i18n::es::FILTER_IMAGES;

pub struct FileManager;

impl FileManager {
    /// Supported images directly inside `dir`, sorted by path.
    pub fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(dir).map_err(|source| Error::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut image_paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|e| e.path())
            .filter(|p| p.is_file() && ImageFormat::is_supported(p))
            .collect();

        image_paths.sort();
        tracing::debug!(dir = %dir.display(), count = image_paths.len(), "scanned directory");
        Ok(image_paths)
    }

    pub fn to_references(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect()
    }

    pub fn get_supported_file_filter() -> (&'static str, Vec<&'static str>) {
        (FILTER_IMAGES, ImageFormat::get_supported_extensions())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn scan_keeps_supported_files_sorted() {
        let dir = tempdir().expect("temp dir");
        for name in ["c.png", "a.JPG", "notes.txt", "b.webp"] {
            fs::write(dir.path().join(name), b"x").expect("write fixture");
        }
        fs::create_dir(dir.path().join("sub.png")).expect("create subdir");

        let found = FileManager::scan_directory(dir.path()).expect("scan");
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.JPG", "b.webp", "c.png"]);
    }

    #[test]
    fn scan_of_missing_directory_is_io_error() {
        let dir = tempdir().expect("temp dir");
        let missing = dir.path().join("nope");
        let err = FileManager::scan_directory(&missing).unwrap_err();
        assert!(matches!(err, Error::Io { path, .. } if path == missing));
    }
}
