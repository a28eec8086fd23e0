//! Song reference resolution
//!
//! A manifest names songs indirectly. Resolution walks a fixed list of
//! strategies and stops at the first one that finds a catalog entry.

use crate::catalog::Catalog;
use crate::model::{Song, SongReference};
use std::sync::Arc;

/// One way of matching a reference against the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveStrategy {
    /// `ref.key` against `Song::key`
    Key,

    /// `ref.hash` against `Song::content_hash`
    ContentHash,

    /// `ref.key` against `Song::directory_id`
    DirectoryId,
}

impl ResolveStrategy {
    /// Fallback order used when loading manifests
    pub const ORDER: [ResolveStrategy; 3] = [
        ResolveStrategy::Key,
        ResolveStrategy::ContentHash,
        ResolveStrategy::DirectoryId,
    ];

    /// Try this strategy alone
    pub fn lookup<'a>(
        &self,
        reference: &SongReference,
        catalog: &'a Catalog,
    ) -> Option<&'a Arc<Song>> {
        match self {
            ResolveStrategy::Key => catalog.by_key(reference.key.as_deref()?),
            ResolveStrategy::ContentHash => catalog.by_content_hash(reference.hash.as_deref()?),
            ResolveStrategy::DirectoryId => catalog.by_directory_id(reference.key.as_deref()?),
        }
    }
}

/// Resolve a reference to the first catalog entry found by [`ResolveStrategy::ORDER`]
///
/// Validity is not checked here; callers decide what to do with invalid songs.
pub fn resolve(reference: &SongReference, catalog: &Catalog) -> Option<Arc<Song>> {
    ResolveStrategy::ORDER.iter().find_map(|strategy| {
        let song = strategy.lookup(reference, catalog)?;
        log::trace!("Resolved {:?} by {:?} to {:?}", reference, strategy, song.key);
        Some(Arc::clone(song))
    })
}
