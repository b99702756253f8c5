//! Snapshot computation aware of classes defined inside inline functions.
//!
//! An inline function's body is copied into call sites at compile time, so
//! the local and anonymous classes defined inside it become part of callers'
//! effective ABI — across module boundaries. The plain snapshotter misses
//! those: a changed lambda inside an inline function leaves every member
//! signature intact.
//!
//! Tracking inlined classes adds its own restrictions:
//!
//! 1. Most classes in a jar are not defined inside an inline function, so
//!    the inlined hash must not be computed for every class.
//! 2. Which local classes an inline function uses is only known while that
//!    function is being hashed, so nested classes are indexed up front and
//!    may be loaded twice (once for the raw content hash, once for their own
//!    structural snapshot).
//! 3. Inlined classes can reference each other, and inline functions from
//!    different classes can reference each other's outer class; resolution
//!    must be robust against such cycles.

use strata_classfile::{ClassKind, ClassRecord};
use strata_common::AbiHash;

use crate::accessibility::is_inaccessible;
use crate::error::SnapshotError;
use crate::hasher::{InlineFunctionHasher, StructuralHasher};
use crate::metrics::{measure, MetricsReporter, NoopMetrics, SnapshotMetric};
use crate::multi_hash::{ClassMultiHashProvider, InnerClassIndex};
use crate::settings::SnapshotSettings;
use crate::snapshot::ClassSnapshot;
use crate::store::RecordStore;

/// Folds the aggregated hash of a function's inlined classes into the
/// function's own structural hash.
pub struct FoldingInlineFunctionHasher<'a, P: ?Sized> {
    provider: &'a P,
}

impl<'a, P: ?Sized> FoldingInlineFunctionHasher<'a, P> {
    /// Creates a hasher folding aggregates from `provider`.
    pub fn new(provider: &'a P) -> Self {
        Self { provider }
    }
}

impl<P: ClassMultiHashProvider + ?Sized> InlineFunctionHasher for FoldingInlineFunctionHasher<'_, P> {
    fn inline_function_hash(
        &self,
        inlined_class_prefix: &str,
        own_function_hash: AbiHash,
    ) -> AbiHash {
        own_function_hash ^ self.provider.full_abi_hash_of_used_classes(inlined_class_prefix)
    }
}

/// Computes one snapshot per input record, folding inlined-class hashes into
/// inline-function ABI hashes.
///
/// Works in two phases. Phase 1 indexes every nested class's content hash,
/// eagerly and before any recursion. Phase 2 runs the same memoized
/// outer-first recursion as [`PlainSnapshotter`](crate::plain::PlainSnapshotter),
/// answering each inline function's prefix query from the flat phase-1 index
/// — resolution never re-enters snapshot computation, which keeps cyclic
/// inline references from recursing forever.
pub struct InlinedSnapshotter<'a, H> {
    store: RecordStore,
    settings: SnapshotSettings,
    hasher: &'a H,
    metrics: &'a dyn MetricsReporter,
    cache: Vec<Option<ClassSnapshot>>,
}

impl<'a, H: StructuralHasher> InlinedSnapshotter<'a, H> {
    /// Creates a session over `records` with no metrics reporting.
    pub fn new(records: Vec<ClassRecord>, settings: SnapshotSettings, hasher: &'a H) -> Self {
        Self::with_metrics(records, settings, hasher, &NoopMetrics)
    }

    /// Creates a session that reports phase timings to `metrics`.
    pub fn with_metrics(
        records: Vec<ClassRecord>,
        settings: SnapshotSettings,
        hasher: &'a H,
        metrics: &'a dyn MetricsReporter,
    ) -> Self {
        let store = RecordStore::new(records);
        let cache = vec![None; store.len()];
        Self {
            store,
            settings,
            hasher,
            metrics,
            cache,
        }
    }

    /// Snapshots every record, preserving input order.
    pub fn snapshot(mut self) -> Result<Vec<ClassSnapshot>, SnapshotError> {
        let index = InnerClassIndex::build(&self.store, self.metrics)?;

        for position in 0..self.store.len() {
            self.ensure_snapshot(position, &index)?;
        }
        Ok(self
            .cache
            .into_iter()
            .map(|slot| slot.expect("every record snapshotted above"))
            .collect())
    }

    fn ensure_snapshot(
        &mut self,
        position: usize,
        index: &InnerClassIndex,
    ) -> Result<(), SnapshotError> {
        if self.cache[position].is_some() {
            return Ok(());
        }

        let contents = self.store.load(position, self.metrics)?;

        // Outer first, as in the plain snapshotter: inaccessibility
        // propagates down the nesting chain, and a missing outer record
        // counts as having no outer.
        let outer_name = self.store.get(position).id().outer.clone();
        let outer_position = outer_name.and_then(|outer| self.store.lookup(&outer));
        let outer_inaccessible = match outer_position {
            Some(outer_position) => {
                self.ensure_snapshot(outer_position, index)?;
                matches!(
                    self.cache[outer_position],
                    Some(ClassSnapshot::Inaccessible)
                )
            }
            None => false,
        };

        let record = self.store.get(position);
        let snapshot = if is_inaccessible(record.header()) || outer_inaccessible {
            ClassSnapshot::Inaccessible
        } else {
            ClassSnapshot::Regular(match record.header().kind {
                ClassKind::Platform => {
                    measure(self.metrics, SnapshotMetric::SnapshotPlatformClasses, || {
                        self.hasher.snapshot_platform_class(
                            record.id(),
                            &contents,
                            self.settings.granularity,
                        )
                    })
                }
                _ => measure(self.metrics, SnapshotMetric::SnapshotClasses, || {
                    self.hasher.snapshot_class(
                        record.id(),
                        &contents,
                        self.settings.granularity,
                        &FoldingInlineFunctionHasher::new(index),
                    )
                }),
            })
        };

        self.cache[position] = Some(snapshot);
        Ok(())
    }
}
