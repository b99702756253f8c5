//! The injected structural-hashing boundary.

use strata_classfile::{ClassContents, ClassId};
use strata_common::AbiHash;

use crate::settings::HashGranularity;
use crate::snapshot::RegularSnapshot;

/// Turns class bytes and header metadata into structural hash material.
///
/// Implemented by the class-file analysis layer outside this crate; the
/// snapshotters only orchestrate calls into it and fold its outputs.
pub trait StructuralHasher {
    /// Hashes an ordinary class.
    ///
    /// `inline_hasher` is called back once per inline function the hasher
    /// encounters, so the caller can fold inlined-class ABI hashes into the
    /// function's own hash.
    fn snapshot_class(
        &self,
        id: &ClassId,
        contents: &ClassContents,
        granularity: HashGranularity,
        inline_hasher: &dyn InlineFunctionHasher,
    ) -> RegularSnapshot;

    /// Hashes a platform class, which carries no language header and hence
    /// no inline functions.
    fn snapshot_platform_class(
        &self,
        id: &ClassId,
        contents: &ClassContents,
        granularity: HashGranularity,
    ) -> RegularSnapshot;
}

/// Computes the ABI-hash contribution of one inline function.
pub trait InlineFunctionHasher {
    /// Returns the final hash for an inline function, given the name prefix
    /// shared by classes generated from its body and the hash of the
    /// function declaration itself.
    fn inline_function_hash(
        &self,
        inlined_class_prefix: &str,
        own_function_hash: AbiHash,
    ) -> AbiHash;
}

/// Inline-function hasher that keeps the function's own hash unchanged.
///
/// Used by the plain snapshotter, which does not track inlined classes.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainInlineFunctionHasher;

impl InlineFunctionHasher for PlainInlineFunctionHasher {
    fn inline_function_hash(
        &self,
        _inlined_class_prefix: &str,
        own_function_hash: AbiHash,
    ) -> AbiHash {
        own_function_hash
    }
}
