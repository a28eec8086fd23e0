//! Song catalog
//!
//! The catalog is owned outside the playlist layer. This type is the minimal
//! ordered view the resolver needs: three first-match lookups over shared
//! song records.

mod file;

use crate::model::Song;
use std::sync::Arc;

/// Ordered collection of known songs
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    songs: Vec<Arc<Song>>,
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a song and return the shared handle stored in the catalog
    pub fn add_song(&mut self, song: Song) -> Arc<Song> {
        let song = Arc::new(song);
        self.songs.push(Arc::clone(&song));
        song
    }

    /// First song whose key equals `key`
    pub fn by_key(&self, key: &str) -> Option<&Arc<Song>> {
        self.songs.iter().find(|s| s.key == key)
    }

    /// First song whose content hash equals `hash`
    pub fn by_content_hash(&self, hash: &str) -> Option<&Arc<Song>> {
        self.songs.iter().find(|s| s.content_hash == hash)
    }

    /// First song whose directory identifier equals `directory_id`
    pub fn by_directory_id(&self, directory_id: &str) -> Option<&Arc<Song>> {
        self.songs
            .iter()
            .find(|s| !s.directory_id.is_empty() && s.directory_id == directory_id)
    }

    pub fn songs(&self) -> &[Arc<Song>] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

impl FromIterator<Song> for Catalog {
    fn from_iter<I: IntoIterator<Item = Song>>(iter: I) -> Self {
        Self {
            songs: iter.into_iter().map(Arc::new).collect(),
        }
    }
}

impl From<Vec<Arc<Song>>> for Catalog {
    fn from(songs: Vec<Arc<Song>>) -> Self {
        Self { songs }
    }
}
