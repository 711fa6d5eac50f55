use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid gallery manifest {path}: {source}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{0} has no parent directory")]
    NoParentDirectory(PathBuf),

    #[error("could not decode {reference}: {source}")]
    Decode {
        reference: String,
        #[source]
        source: image::ImageError,
    },

    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, Error>;
