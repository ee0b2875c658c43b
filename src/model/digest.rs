//! Digest value type backing the merkle tree, using BLAKE3

use crate::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 32-byte BLAKE3 digest of one data item, or of two concatenated child
/// digests.
///
/// Ordering compares bytes lexicographically, which for a fixed-length
/// byte string is exactly unsigned big-endian integer order. The tree's
/// insertion policy relies on this ordering; membership checks use only
/// equality.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Digest([u8; 32]);

impl Digest {
    /// Digest arbitrary bytes
    pub fn of(data: &[u8]) -> Self {
        let hash = blake3::hash(data);
        Digest(*hash.as_bytes())
    }

    /// Digest the UTF-8 bytes of a string
    pub fn of_str(data: &str) -> Self {
        Digest::of(data.as_bytes())
    }

    /// Digest the concatenation of multiple byte slices
    pub fn of_parts(parts: &[&[u8]]) -> Self {
        let mut hasher = blake3::Hasher::new();
        for part in parts {
            hasher.update(part);
        }
        Digest(*hasher.finalize().as_bytes())
    }

    /// Digest a structured record by bincode-encoding it first
    ///
    /// Fails with [`Error::Encoding`](crate::Error::Encoding) if the value
    /// cannot be encoded (e.g. a map with non-string keys).
    pub fn of_value<T: Serialize>(value: &T) -> Result<Self> {
        let bytes = bincode::serialize(value)?;
        Ok(Digest::of(&bytes))
    }

    /// Create a digest from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Digest(bytes)
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex rendering, two characters per byte, no separators
    ///
    /// For display and diagnostics only; comparison logic works on the raw
    /// bytes.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string
    pub fn from_hex(s: &str) -> std::result::Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        if bytes.len() != 32 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Digest(arr))
    }

    /// Get a short prefix for display (first 7 chars, like git)
    pub fn short(&self) -> String {
        self.to_hex()[..7].to_string()
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.short())
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
