use serde::{Deserialize, Serialize};

/// A known song as exposed by the catalog
///
/// Playlists never own these; they hold `Arc<Song>` handles into the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    /// Primary catalog key
    pub key: String,

    /// Hash of the song's content
    pub content_hash: String,

    /// Identifier of the directory the song was loaded from
    #[serde(default)]
    pub directory_id: String,

    /// Display name, written to manifests on save
    pub song_name: String,

    /// Whether the catalog considers this song playable
    #[serde(default = "default_valid")]
    pub valid: bool,
}

fn default_valid() -> bool {
    true
}

impl Song {
    /// Create a valid song with no directory identifier
    pub fn new(
        key: impl Into<String>,
        content_hash: impl Into<String>,
        song_name: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            content_hash: content_hash.into(),
            directory_id: String::new(),
            song_name: song_name.into(),
            valid: true,
        }
    }

    pub fn with_directory_id(mut self, directory_id: impl Into<String>) -> Self {
        self.directory_id = directory_id.into();
        self
    }

    pub fn invalid(mut self) -> Self {
        self.valid = false;
        self
    }
}

/// Indirect reference to a song as stored in a manifest
///
/// Only lives while a manifest is being loaded. Manifests written by
/// [`crate::manifest::ExportDocument`] carry `hash` but no `key`, so both
/// fields are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SongReference {
    #[serde(default)]
    pub key: Option<String>,

    #[serde(default)]
    pub hash: Option<String>,
}

impl SongReference {
    pub fn new(key: Option<&str>, hash: Option<&str>) -> Self {
        Self {
            key: key.map(str::to_string),
            hash: hash.map(str::to_string),
        }
    }
}
