//! Snapshot output model.

use serde::{Deserialize, Serialize};
use strata_common::AbiHash;

/// Structural fingerprint of one class on the classpath.
///
/// Snapshots are produced positionally: output `i` corresponds to input
/// record `i`. Consumers zip the list against a previous run's output to
/// compute a diff, so order stability is a wire-level contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassSnapshot {
    /// The class cannot be referenced from other compilation units; no
    /// structural data is retained.
    Inaccessible,

    /// Structural hash material of an accessible class.
    Regular(RegularSnapshot),
}

impl ClassSnapshot {
    /// Returns `true` for the [`ClassSnapshot::Inaccessible`] marker.
    pub fn is_inaccessible(&self) -> bool {
        matches!(self, ClassSnapshot::Inaccessible)
    }
}

/// Hash material describing a class's externally-visible ABI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegularSnapshot {
    /// Hash of the class-level ABI: supertypes, member signatures, and
    /// inline-function ABI hashes folded together.
    pub class_abi_hash: AbiHash,

    /// Per-member hashes; empty at class-level granularity.
    pub member_hashes: Vec<MemberHash>,
}

/// Hash of a single member's externally-visible declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberHash {
    /// Member name and descriptor as emitted by the class-file reader.
    pub signature: String,

    /// Structural hash of the declaration.
    pub hash: AbiHash,
}
