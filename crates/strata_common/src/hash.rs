//! Hashing for ABI fingerprints and file integrity checks.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitXor, BitXorAssign};

/// A 64-bit ABI hash computed with XXH3.
///
/// Hashes of independent inputs combine with XOR, which is symmetric: a set
/// of hashes aggregates to the same value regardless of combination order.
/// The flip side is that an even number of occurrences of the same hash
/// cancels out; callers that need multiset semantics must deduplicate first.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AbiHash(u64);

impl AbiHash {
    /// The identity element for XOR aggregation.
    pub const ZERO: AbiHash = AbiHash(0);

    /// Computes the content hash of a byte slice using XXH3-64.
    pub fn from_bytes(data: &[u8]) -> Self {
        Self(xxhash_rust::xxh3::xxh3_64(data))
    }

    /// Creates a hash from a raw `u64` value.
    ///
    /// Primarily intended for deserialization and testing.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw `u64` value of this hash.
    pub fn as_raw(self) -> u64 {
        self.0
    }
}

impl BitXor for AbiHash {
    type Output = AbiHash;

    fn bitxor(self, rhs: AbiHash) -> AbiHash {
        AbiHash(self.0 ^ rhs.0)
    }
}

impl BitXorAssign for AbiHash {
    fn bitxor_assign(&mut self, rhs: AbiHash) {
        self.0 ^= rhs.0;
    }
}

impl fmt::Display for AbiHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

impl fmt::Debug for AbiHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AbiHash({:08x}..)", (self.0 >> 32) as u32)
    }
}

/// A 128-bit content hash computed using XXH3, used for integrity checks.
///
/// Two payloads with the same `ContentHash` are assumed to have identical
/// content. The persistence layer stores one per snapshot file to detect
/// corruption before decoding the payload.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentHash([u8; 16]);

impl ContentHash {
    /// Computes a content hash from a byte slice using XXH3-128.
    pub fn from_bytes(data: &[u8]) -> Self {
        let hash = xxhash_rust::xxh3::xxh3_128(data);
        Self(hash.to_le_bytes())
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentHash({:02x}{:02x}..)", self.0[0], self.0[1])
    }
}
