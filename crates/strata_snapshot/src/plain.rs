//! Single-pass snapshot computation without inlined-class tracking.

use strata_classfile::{ClassKind, ClassRecord};

use crate::accessibility::is_inaccessible;
use crate::error::SnapshotError;
use crate::hasher::{PlainInlineFunctionHasher, StructuralHasher};
use crate::metrics::{measure, MetricsReporter, NoopMetrics, SnapshotMetric};
use crate::settings::SnapshotSettings;
use crate::snapshot::ClassSnapshot;
use crate::store::RecordStore;

/// Computes one snapshot per input record, in input order.
///
/// A single-threaded session object: the memoization cache lives for one run
/// and [`snapshot`](Self::snapshot) consumes the session. Each class is
/// snapshotted at most once, whether it is reached directly from the input
/// list or recursively as another class's outer.
pub struct PlainSnapshotter<'a, H> {
    store: RecordStore,
    settings: SnapshotSettings,
    hasher: &'a H,
    metrics: &'a dyn MetricsReporter,
    cache: Vec<Option<ClassSnapshot>>,
}

impl<'a, H: StructuralHasher> PlainSnapshotter<'a, H> {
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
    ///
    /// Output `i` always corresponds to input `i`; callers zip the result
    /// against a parallel list.
    pub fn snapshot(mut self) -> Result<Vec<ClassSnapshot>, SnapshotError> {
        for index in 0..self.store.len() {
            self.ensure_snapshot(index)?;
        }
        Ok(self
            .cache
            .into_iter()
            .map(|slot| slot.expect("every record snapshotted above"))
            .collect())
    }

    fn ensure_snapshot(&mut self, index: usize) -> Result<(), SnapshotError> {
        if self.cache[index].is_some() {
            return Ok(());
        }

        let contents = self.store.load(index, self.metrics)?;

        // Snapshot the outer class first: a class is transitively
        // inaccessible when its outer class is. The outer may be absent from
        // the input set (faulty jars); that counts as having no outer.
        let outer_name = self.store.get(index).id().outer.clone();
        let outer_index = outer_name.and_then(|outer| self.store.lookup(&outer));
        let outer_inaccessible = match outer_index {
            Some(outer_index) => {
                self.ensure_snapshot(outer_index)?;
                matches!(self.cache[outer_index], Some(ClassSnapshot::Inaccessible))
            }
            None => false,
        };

        let record = self.store.get(index);
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
                        &PlainInlineFunctionHasher,
                    )
                }),
            })
        };

        self.cache[index] = Some(snapshot);
        Ok(())
    }
}
