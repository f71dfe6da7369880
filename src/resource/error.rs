use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Cannot list resources at '{location}': scheme '{scheme}' is not supported")]
    UnsupportedScheme { scheme: String, location: String },

    #[error("Malformed archive location: {0}")]
    MalformedArchiveLocation(String),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read archive {}: {source}", path.display())]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("Entry '{entry}' in {} exceeds {max} bytes", path.display())]
    EntryTooLarge {
        path: PathBuf,
        entry: String,
        max: u64,
    },
}

impl ResourceError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn archive(path: impl Into<PathBuf>, source: zip::result::ZipError) -> Self {
        Self::Archive {
            path: path.into(),
            source,
        }
    }
}
