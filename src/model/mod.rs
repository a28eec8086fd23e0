//! Playlist and song data model
//!
//! Songs belong to the external catalog; a playlist only points at them.

mod playlist;
mod song;

pub use playlist::Playlist;
pub use song::{Song, SongReference};
