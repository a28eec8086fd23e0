//! Path hash derivation
//!
//! A playlist is identified by a short hash of its file path. The value is a
//! display/lookup identifier, not a security token.

use sha1::{Digest, Sha1};
use std::path::Path;

/// Number of hex characters kept from the SHA-1 digest
pub const PATH_HASH_LEN: usize = 5;

/// Hash a path string: SHA-1 over its UTF-8 bytes, hex-encoded, truncated
pub fn compute_hash(path: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(path.as_bytes());
    let mut digest = hex::encode(hasher.finalize());
    digest.truncate(PATH_HASH_LEN);
    digest
}

/// Hash a filesystem path (non-UTF-8 components are replaced lossily)
pub fn path_hash(path: &Path) -> String {
    compute_hash(&path.to_string_lossy())
}
