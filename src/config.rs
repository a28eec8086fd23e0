//! Playlist store configuration

/// Configuration for saving playlists
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    /// What to do when extension normalization finds no file at the old path
    pub missing_source: MissingSourcePolicy,

    /// Write to a sibling temp file and rename it over the target,
    /// instead of replacing the target in place
    pub atomic_write: bool,

    /// Pretty-print exported manifests (default is compact)
    pub pretty: bool,
}

/// Policy for renaming a playlist file that does not exist yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingSourcePolicy {
    /// Skip the rename but still move the playlist to the `.json` path
    #[default]
    Skip,

    /// Fail with `PlaylistError::NotFound`
    Require,
}

impl StoreConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the missing-source policy
    pub fn with_missing_source(mut self, policy: MissingSourcePolicy) -> Self {
        self.missing_source = policy;
        self
    }

    /// Enable or disable temp-file-then-rename writes
    pub fn with_atomic_write(mut self, atomic: bool) -> Self {
        self.atomic_write = atomic;
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}
