use super::Song;
use crate::error::Result;
use crate::hash::path_hash;
use crate::manifest::ExportDocument;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A playlist loaded from (or destined for) a manifest file
///
/// `hash` is derived from `path` and is only ever changed through
/// [`Playlist::set_path`] or [`Playlist::recompute_hash`].
#[derive(Debug, Clone)]
pub struct Playlist {
    path: PathBuf,
    hash: String,

    pub title: String,
    pub author: String,
    pub description: String,

    /// Resolved songs in manifest order, shared with the catalog
    pub songs: Vec<Arc<Song>>,
}

impl Playlist {
    /// Create an empty playlist that will live at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let hash = path_hash(&path);
        Self {
            path,
            hash,
            title: String::new(),
            author: String::new(),
            description: String::new(),
            songs: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Five hex characters derived from the current path
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Move the playlist to a new path and rederive its hash
    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = path.into();
        self.recompute_hash();
    }

    pub fn recompute_hash(&mut self) {
        self.hash = path_hash(&self.path);
    }

    pub fn add_song(&mut self, song: Arc<Song>) {
        self.songs.push(song);
    }

    /// Songs that will be written on save
    pub fn valid_songs(&self) -> impl Iterator<Item = &Arc<Song>> {
        self.songs.iter().filter(|s| s.valid)
    }

    /// Encode the exportable subset of this playlist with the given cover image
    pub fn export_json(&self, image: &str) -> Result<String> {
        ExportDocument::from_playlist(self, image).to_json(false)
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::compute_hash;

    #[test]
    fn test_new_playlist_derives_hash() {
        let playlist = Playlist::new("/music/mix.json");
        assert_eq!(playlist.hash(), compute_hash("/music/mix.json"));
        assert!(playlist.is_empty());
        assert_eq!(playlist.title, "");
    }

    #[test]
    fn test_set_path_recomputes_hash() {
        let mut playlist = Playlist::new("/music/mix.m3u");
        let old_hash = playlist.hash().to_string();

        playlist.set_path("/music/mix.json");

        assert_eq!(playlist.path(), Path::new("/music/mix.json"));
        assert_eq!(playlist.hash(), compute_hash("/music/mix.json"));
        assert_ne!(playlist.hash(), old_hash);
    }

    #[test]
    fn test_valid_songs_skips_invalid() {
        let mut playlist = Playlist::new("/music/mix.json");
        playlist.add_song(Arc::new(Song::new("a", "h1", "Song A")));
        playlist.add_song(Arc::new(Song::new("b", "h2", "Song B").invalid()));
        playlist.add_song(Arc::new(Song::new("c", "h3", "Song C")));

        let names: Vec<&str> = playlist
            .valid_songs()
            .map(|s| s.song_name.as_str())
            .collect();
        assert_eq!(names, vec!["Song A", "Song C"]);
        assert_eq!(playlist.len(), 3);
    }
}
