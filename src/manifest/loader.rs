//! Manifest loading and song resolution

use super::format::{decode_document, ManifestDocument};
use super::store::PlaylistStore;
use crate::catalog::Catalog;
use crate::error::{PlaylistError, Result};
use crate::fs::FileSystem;
use crate::model::Playlist;
use crate::resolve::resolve;
use std::path::Path;

/// Turn a parsed manifest into a playlist
///
/// Each song reference is resolved against `catalog`. Unmatched references
/// and matches flagged invalid are dropped; the rest keep manifest order.
pub fn build_playlist(path: &Path, document: ManifestDocument, catalog: &Catalog) -> Playlist {
    let mut playlist = Playlist::new(path);
    playlist.title = document.playlist_title.unwrap_or_default();
    playlist.author = document.playlist_author.unwrap_or_default();
    playlist.description = document.playlist_description.unwrap_or_default();

    let total = document.songs.len();
    for reference in &document.songs {
        match resolve(reference, catalog) {
            Some(song) if song.valid => playlist.add_song(song),
            Some(song) => log::debug!("Dropping invalid song {:?} from {:?}", song.key, path),
            None => log::debug!("No catalog entry for {:?} in {:?}", reference, path),
        }
    }

    if playlist.len() < total {
        log::info!(
            "Playlist {:?}: resolved {} of {} songs",
            path,
            playlist.len(),
            total
        );
    }

    playlist
}

impl<F: FileSystem> PlaylistStore<F> {
    /// Load a playlist manifest and resolve its songs against `catalog`
    pub fn parse(&self, path: impl AsRef<Path>, catalog: &Catalog) -> Result<Playlist> {
        let path = path.as_ref();
        log::debug!("Loading playlist {:?}", path);

        let raw = self
            .fs()
            .read(path)
            .map_err(|e| PlaylistError::from_read(path.to_path_buf(), e))?;
        let document: ManifestDocument = decode_document(path, &raw)?;

        Ok(build_playlist(path, document, catalog))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::path_hash;
    use crate::manifest::test_fs::MemoryFileSystem;
    use crate::model::Song;

    fn catalog() -> Catalog {
        Catalog::from_iter([
            Song::new("a", "h1", "Song A"),
            Song::new("b", "h2", "Song B").invalid(),
            Song::new("c", "h3", "Song C").with_directory_id("dir-c"),
        ])
    }

    #[test]
    fn test_parse_resolves_and_filters() {
        let fs = MemoryFileSystem::new();
        fs.insert(
            "/lists/mix.json",
            r#"{
                "playlistTitle": "  Mix ",
                "playlistAuthor": "Me",
                "playlistDescription": "",
                "image": "img",
                "songs": [
                    {"key": "dir-c", "hash": "x"},
                    {"key": "missing", "hash": "missing"},
                    {"key": "b", "hash": "h2"},
                    {"key": "a", "hash": "h9"}
                ]
            }"#,
        );
        let store = PlaylistStore::new(&fs);

        let playlist = store.parse("/lists/mix.json", &catalog()).unwrap();

        assert_eq!(playlist.title, "  Mix ");
        assert_eq!(playlist.author, "Me");
        assert_eq!(playlist.hash(), path_hash(Path::new("/lists/mix.json")));
        let names: Vec<&str> = playlist.songs.iter().map(|s| s.song_name.as_str()).collect();
        assert_eq!(names, vec!["Song C", "Song A"]);
    }

    #[test]
    fn test_parse_shares_catalog_entries() {
        let fs = MemoryFileSystem::new();
        fs.insert("/lists/mix.json", r#"{"songs":[{"key":"a","hash":"h1"}]}"#);
        let catalog = catalog();

        let playlist = PlaylistStore::new(&fs).parse("/lists/mix.json", &catalog).unwrap();

        assert!(std::sync::Arc::ptr_eq(
            &playlist.songs[0],
            catalog.by_key("a").unwrap()
        ));
    }

    #[test]
    fn test_parse_missing_file_is_not_found() {
        let fs = MemoryFileSystem::new();
        let err = PlaylistStore::new(&fs)
            .parse("/lists/none.json", &catalog())
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_parse_malformed_json() {
        let fs = MemoryFileSystem::new();
        fs.insert("/lists/bad.json", "{not json");
        fs.insert("/lists/shape.json", r#"{"songs": "nope"}"#);
        fs.insert(
            "/lists/array.json",
            r#"["T","A","D","img",[{"key":"a","hash":"h1"}]]"#,
        );
        fs.insert("/lists/nulls.json", "[null,null,null,null,[]]");
        let store = PlaylistStore::new(&fs);

        for path in [
            "/lists/bad.json",
            "/lists/shape.json",
            "/lists/array.json",
            "/lists/nulls.json",
        ] {
            let err = store.parse(path, &catalog()).unwrap_err();
            assert!(matches!(err, PlaylistError::MalformedDocument { .. }));
        }
    }
}
