//! Ordered store of the class records under snapshot.

use std::collections::HashMap;

use strata_classfile::{ClassContents, ClassName, ClassRecord};

use crate::error::SnapshotError;
use crate::metrics::{measure, MetricsReporter, SnapshotMetric};

/// The fixed, ordered set of class records for one snapshot run.
///
/// Offers positional access (output order must mirror input order) and name
/// lookup for resolving outer-class references. Contents are loaded on
/// demand through each record's provider and never retained here, keeping
/// the live working set independent of classpath size.
pub struct RecordStore {
    records: Vec<ClassRecord>,
    by_name: HashMap<ClassName, usize>,
}

impl RecordStore {
    /// Builds the store, indexing records by class name.
    ///
    /// When two records share a name (possible with faulty archives), the
    /// later one wins the lookup; both keep their positional slots.
    pub fn new(records: Vec<ClassRecord>) -> Self {
        // Sized up front so inserts never rehash mid-build.
        let mut by_name = HashMap::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            by_name.insert(record.id().name.clone(), index);
        }
        Self { records, by_name }
    }

    /// Number of records, in input order.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at input position `index`.
    pub fn get(&self, index: usize) -> &ClassRecord {
        &self.records[index]
    }

    /// Position of the record named `name`, if present in the input set.
    pub fn lookup(&self, name: &ClassName) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// Iterates records in input order with their positions.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &ClassRecord)> {
        self.records.iter().enumerate()
    }

    /// Loads a record's contents, attributing the time to
    /// [`SnapshotMetric::LoadClassContents`] and any failure to the class.
    pub fn load(
        &self,
        index: usize,
        metrics: &dyn MetricsReporter,
    ) -> Result<ClassContents, SnapshotError> {
        let record = self.get(index);
        measure(metrics, SnapshotMetric::LoadClassContents, || {
            record.load_contents()
        })
        .map_err(|source| SnapshotError::Load {
            class: record.id().name.clone(),
            source,
        })
    }
}
