//! Manifest saving
//!
//! Saving first moves the playlist to a `.json` path (renaming the file on
//! disk), then replaces the file's contents with the export document. The two
//! steps are not one transaction: if the write fails after the rename, the
//! file keeps its old contents under the new name. `StoreConfig::atomic_write`
//! narrows this to the rename of the temp file.

use super::format::ExportDocument;
use super::store::PlaylistStore;
use crate::config::MissingSourcePolicy;
use crate::error::{PlaylistError, Result};
use crate::fs::FileSystem;
use crate::model::Playlist;
use std::ffi::{OsStr, OsString};
use std::io;
use std::path::{Path, PathBuf};

/// Extension every saved manifest carries
pub const MANIFEST_EXTENSION: &str = "json";

/// The `.json` path for `path`, or `None` if it already has that extension
///
/// Same directory, same base name; only the last extension is replaced
/// (`mix.old.m3u` becomes `mix.old.json`). The match is case-sensitive.
pub fn json_path_for(path: &Path) -> Option<PathBuf> {
    if path.extension() == Some(OsStr::new(MANIFEST_EXTENSION)) {
        None
    } else {
        Some(path.with_extension(MANIFEST_EXTENSION))
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

impl<F: FileSystem> PlaylistStore<F> {
    /// Save a playlist with the given cover image
    ///
    /// The path (and therefore the hash) may change. `image` is written as-is;
    /// any cover already in the file is replaced.
    pub fn save(&self, playlist: &mut Playlist, image: &str) -> Result<()> {
        self.normalize_extension(playlist)?;

        let json = ExportDocument::from_playlist(playlist, image).to_json(self.config().pretty)?;
        self.write_manifest(playlist.path(), json.as_bytes())?;

        log::info!(
            "Saved playlist {:?} ({} songs) to {:?}",
            playlist.title,
            playlist.valid_songs().count(),
            playlist.path()
        );
        Ok(())
    }

    /// Give the playlist a `.json` path, renaming its file on disk
    ///
    /// Returns `true` if the path changed. With [`MissingSourcePolicy::Skip`]
    /// a missing source file is not an error and only the path is updated.
    pub fn normalize_extension(&self, playlist: &mut Playlist) -> Result<bool> {
        let Some(target) = json_path_for(playlist.path()) else {
            return Ok(false);
        };
        let source = playlist.path().to_path_buf();

        match self.fs().rename(&source, &target) {
            Ok(()) => log::info!("Renamed playlist {:?} to {:?}", source, target),
            Err(e) if e.kind() == io::ErrorKind::NotFound => match self.config().missing_source {
                MissingSourcePolicy::Skip => {
                    log::debug!("No file at {:?}, nothing to rename", source);
                }
                MissingSourcePolicy::Require => {
                    return Err(PlaylistError::NotFound { path: source });
                }
            },
            Err(source_err) => {
                return Err(PlaylistError::RenameFailure {
                    from: source,
                    to: target,
                    source: source_err,
                });
            }
        }

        playlist.set_path(target);
        Ok(true)
    }

    fn write_manifest(&self, path: &Path, contents: &[u8]) -> Result<()> {
        if !self.config().atomic_write {
            return self
                .fs()
                .write(path, contents)
                .map_err(|source| PlaylistError::WriteFailure {
                    path: path.to_path_buf(),
                    source,
                });
        }

        let temp = temp_path_for(path);
        self.fs()
            .write(&temp, contents)
            .map_err(|source| PlaylistError::WriteFailure {
                path: temp.clone(),
                source,
            })?;
        if let Err(source) = self.fs().rename(&temp, path) {
            if let Err(e) = self.fs().remove(&temp) {
                log::warn!("Failed to remove temp file {:?}: {}", temp, e);
            }
            return Err(PlaylistError::RenameFailure {
                from: temp,
                to: path.to_path_buf(),
                source,
            });
        }
        Ok(())
    }
}
