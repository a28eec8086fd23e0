//! Playlist store: one filesystem, one configuration

use crate::catalog::Catalog;
use crate::config::StoreConfig;
use crate::error::{PlaylistError, Result};
use crate::fs::{FileSystem, StdFileSystem};
use crate::model::Playlist;
use std::ffi::OsStr;
use std::path::Path;
use walkdir::WalkDir;

/// Loads and saves playlist manifests through a [`FileSystem`]
///
/// Operations run to completion one at a time. A single playlist must not be
/// saved from two places at once; the rename-then-write sequence is not
/// atomic as a pair.
#[derive(Debug, Clone, Default)]
pub struct PlaylistStore<F: FileSystem = StdFileSystem> {
    fs: F,
    config: StoreConfig,
}

impl<F: FileSystem> PlaylistStore<F> {
    /// Create a store with the default configuration
    pub fn new(fs: F) -> Self {
        Self::with_config(fs, StoreConfig::default())
    }

    pub fn with_config(fs: F, config: StoreConfig) -> Self {
        Self { fs, config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub(crate) fn fs(&self) -> &F {
        &self.fs
    }

    /// Load every `*.json` manifest directly inside `dir`, sorted by file name
    ///
    /// Symlinked manifests are followed.
    ///
    /// Files that cannot be read or parsed are logged and skipped. Failing to
    /// list `dir` itself is an error.
    pub fn load_dir(&self, dir: impl AsRef<Path>, catalog: &Catalog) -> Result<Vec<Playlist>> {
        let dir = dir.as_ref();
        let mut playlists = Vec::new();

        for entry in WalkDir::new(dir)
            .follow_links(true)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    return Err(PlaylistError::from_read(dir.to_path_buf(), e.into()));
                }
                Err(e) => {
                    log::warn!("Skipping unreadable entry in {:?}: {}", dir, e);
                    continue;
                }
            };

            let path = entry.path();
            if !entry.file_type().is_file() || path.extension() != Some(OsStr::new("json")) {
                continue;
            }

            match self.parse(path, catalog) {
                Ok(playlist) => playlists.push(playlist),
                Err(e) => log::warn!("Skipping playlist {:?}: {}", path, e),
            }
        }

        log::info!("Loaded {} playlists from {:?}", playlists.len(), dir);
        Ok(playlists)
    }
}

impl Playlist {
    /// Load a manifest from disk with the default store
    pub fn parse(path: impl AsRef<Path>, catalog: &Catalog) -> Result<Playlist> {
        PlaylistStore::<StdFileSystem>::default().parse(path, catalog)
    }

    /// Read a manifest's cover image from disk with the default store
    pub fn load_cover(path: impl AsRef<Path>) -> Result<Option<String>> {
        PlaylistStore::<StdFileSystem>::default().load_cover(path)
    }

    /// Save to disk with the default store
    pub fn save(&mut self, image: &str) -> Result<()> {
        PlaylistStore::<StdFileSystem>::default().save(self, image)
    }
}
