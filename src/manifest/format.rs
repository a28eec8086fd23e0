//! Manifest document shapes
//!
//! On read, `songs` holds `{key, hash}` references. On write, it holds
//! `{songName, hash}` where `hash` is the resolved song's content hash.

use crate::error::{PlaylistError, Result};
use crate::model::{Playlist, SongReference};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

/// Decode a manifest that must be a JSON object
///
/// Arrays are rejected even though derived struct impls accept them. When a
/// key repeats, the last value wins.
pub fn decode_document<T: DeserializeOwned>(path: &Path, raw: &[u8]) -> Result<T> {
    let malformed = |source: serde_json::Error| PlaylistError::MalformedDocument {
        path: path.to_path_buf(),
        source,
    };
    let object: Map<String, Value> = serde_json::from_slice(raw).map_err(malformed)?;
    serde_json::from_value(Value::Object(object)).map_err(malformed)
}

/// Manifest as read from disk
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestDocument {
    #[serde(default)]
    pub playlist_title: Option<String>,

    #[serde(default)]
    pub playlist_author: Option<String>,

    #[serde(default)]
    pub playlist_description: Option<String>,

    #[serde(default)]
    pub image: Option<String>,

    pub songs: Vec<SongReference>,
}

/// Only the cover field of a manifest
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoverDocument {
    #[serde(default)]
    pub image: Option<String>,
}

/// Manifest as written by save
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub playlist_title: String,
    pub playlist_author: String,
    pub playlist_description: String,
    pub image: String,
    pub songs: Vec<ExportedSong>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedSong {
    pub song_name: String,
    pub hash: String,
}

impl ExportDocument {
    /// Build the export record; invalid songs are left out
    pub fn from_playlist(playlist: &Playlist, image: &str) -> Self {
        Self {
            playlist_title: playlist.title.clone(),
            playlist_author: playlist.author.clone(),
            playlist_description: playlist.description.clone(),
            image: image.to_string(),
            songs: playlist
                .valid_songs()
                .map(|s| ExportedSong {
                    song_name: s.song_name.clone(),
                    hash: s.content_hash.clone(),
                })
                .collect(),
        }
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}
