//! Cover image lookup without building a playlist

use super::format::{decode_document, CoverDocument};
use super::store::PlaylistStore;
use crate::error::{PlaylistError, Result};
use crate::fs::FileSystem;
use std::path::Path;

impl<F: FileSystem> PlaylistStore<F> {
    /// Read the raw `image` field of a manifest
    ///
    /// Returns `None` when the field is absent or null. Songs are neither
    /// read nor resolved, and no path hash is computed.
    pub fn load_cover(&self, path: impl AsRef<Path>) -> Result<Option<String>> {
        let path = path.as_ref();
        let raw = self
            .fs()
            .read(path)
            .map_err(|e| PlaylistError::from_read(path.to_path_buf(), e))?;
        let document: CoverDocument = decode_document(path, &raw)?;
        Ok(document.image)
    }
}
