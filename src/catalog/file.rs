//! Catalog file (JSON array of songs) loader

use super::Catalog;
use crate::model::Song;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

impl Catalog {
    /// Load a catalog from a JSON array of song records
    ///
    /// Each record has `key`, `contentHash`, `songName`, and optionally
    /// `directoryId` and `valid` (defaults to `true`).
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to open catalog: {:?}", path))?;
        let songs: Vec<Song> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse catalog: {:?}", path))?;

        log::info!("Loaded {} songs from catalog {:?}", songs.len(), path);
        Ok(songs.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_catalog_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(
            &path,
            r#"[
                {"key": "a", "contentHash": "h1", "songName": "Song A", "directoryId": "d1"},
                {"key": "b", "contentHash": "h2", "songName": "Song B", "valid": false}
            ]"#,
        )
        .unwrap();

        let catalog = Catalog::from_json_file(&path).unwrap();

        assert_eq!(catalog.len(), 2);
        let a = catalog.by_key("a").unwrap();
        assert!(a.valid);
        assert_eq!(a.directory_id, "d1");
        assert!(!catalog.by_key("b").unwrap().valid);
    }

    #[test]
    fn test_missing_catalog_file_errors() {
        let dir = TempDir::new().unwrap();
        let err = Catalog::from_json_file(&dir.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to open catalog"));
    }
}
