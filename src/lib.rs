//! Playlist Manifest - JSON playlist files over an external song catalog
//!
//! A playlist manifest names its songs indirectly (by key, content hash or
//! directory identifier). This library resolves those references against a
//! caller-supplied catalog, keeps each playlist's path hash in step with its
//! path, and writes playlists back as `.json` manifests.

pub mod catalog;
pub mod config;
pub mod error;
pub mod fs;
pub mod hash;
pub mod manifest;
pub mod model;
pub mod resolve;

pub use catalog::Catalog;
pub use config::{MissingSourcePolicy, StoreConfig};
pub use error::{PlaylistError, Result};
pub use fs::{FileSystem, StdFileSystem};
pub use hash::compute_hash;
pub use manifest::PlaylistStore;
pub use model::{Playlist, Song, SongReference};
pub use resolve::{resolve, ResolveStrategy};
