//! Error type shared by every playlist operation

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlaylistError {
    #[error("Playlist file not found: {path:?}")]
    NotFound { path: PathBuf },

    #[error("Failed to read playlist {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed playlist document {path:?}: {source}")]
    MalformedDocument {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write playlist {path:?}: {source}")]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to rename {from:?} to {to:?}: {source}")]
    RenameFailure {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to encode playlist: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlaylistError>;

impl PlaylistError {
    /// Map a read failure, keeping "missing file" distinct from other I/O errors
    pub(crate) fn from_read(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            PlaylistError::NotFound { path }
        } else {
            PlaylistError::Read { path, source }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, PlaylistError::NotFound { .. })
    }
}
