//! Playlist manifest files
//!
//! A manifest is a small JSON document holding playlist metadata, a cover
//! image string and song references. [`PlaylistStore`] loads manifests into
//! [`crate::model::Playlist`] values and writes them back.

mod cover;
mod format;
mod loader;
mod store;
mod writer;

#[cfg(test)]
mod test_fs;

pub use format::{CoverDocument, ExportDocument, ExportedSong, ManifestDocument};
pub use loader::build_playlist;
pub use store::PlaylistStore;
pub use writer::{json_path_for, MANIFEST_EXTENSION};
