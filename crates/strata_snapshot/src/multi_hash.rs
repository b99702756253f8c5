//! Sorted index of nested-class content hashes for inline-function folding.

use strata_classfile::ClassName;
use strata_common::{strict_prefix_range, AbiHash};

use crate::error::SnapshotError;
use crate::metrics::{measure, MetricsReporter, SnapshotMetric};
use crate::store::RecordStore;

/// Answers aggregate ABI hashes for the classes an inline function uses.
///
/// Some of those classes may reference other classes, so implementations
/// must combine the whole matched set with a symmetric operation: matches
/// have to aggregate identically regardless of discovery order.
pub trait ClassMultiHashProvider {
    /// Combined hash of every indexed class generated under
    /// `inlined_class_prefix`, or [`AbiHash::ZERO`] when there are none.
    fn full_abi_hash_of_used_classes(&self, inlined_class_prefix: &str) -> AbiHash;
}

/// Sorted index from nested-class name to its content-only hash.
///
/// Built eagerly before snapshot recursion begins. Because the index is flat
/// and total by the time any inline function is hashed, answering a prefix
/// query can never re-enter snapshot computation — which is what makes
/// cyclic inline references between classes safe.
pub struct InnerClassIndex {
    /// Entries sorted ascending by name.
    entries: Vec<(ClassName, AbiHash)>,
}

impl InnerClassIndex {
    /// Indexes every nested-class record in the store.
    ///
    /// Loads each nested class eagerly and hashes its raw contents. It is
    /// not possible to define a top-level class inside an inline function,
    /// so top-level records are skipped entirely. Nested classes are assumed
    /// light-weight; loading them again later for their own structural
    /// snapshot is an accepted cost.
    pub fn build(
        store: &RecordStore,
        metrics: &dyn MetricsReporter,
    ) -> Result<Self, SnapshotError> {
        let mut entries = Vec::new();
        for (index, record) in store.iter() {
            if !record.id().name.is_nested() {
                continue;
            }
            let contents = store.load(index, metrics)?;
            let hash = measure(metrics, SnapshotMetric::SnapshotInlinedClasses, || {
                AbiHash::from_bytes(&contents.bytes)
            });
            entries.push((record.id().name.clone(), hash));
        }
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(Self { entries })
    }

    /// Builds an index directly from `(name, hash)` pairs.
    pub fn from_entries(mut entries: Vec<(ClassName, AbiHash)>) -> Self {
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Self { entries }
    }

    /// Number of indexed nested classes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no nested classes were indexed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ClassMultiHashProvider for InnerClassIndex {
    fn full_abi_hash_of_used_classes(&self, inlined_class_prefix: &str) -> AbiHash {
        // An exact name match is a declaration colliding with the generated
        // naming scheme, not an inline artifact; strict_prefix_range skips it.
        strict_prefix_range(&self.entries, inlined_class_prefix, |(name, _)| {
            name.as_str()
        })
        .fold(AbiHash::ZERO, |aggregate, (_, hash)| aggregate ^ *hash)
    }
}
