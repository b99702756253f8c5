//! Incremental classpath snapshotting.
//!
//! Computes stable, structural fingerprints of the compiled classes in a
//! classpath entry. Downstream build planners zip the per-class snapshots of
//! two builds together to decide which source files must be recompiled after
//! a dependency changes; the engine itself only produces fingerprints and
//! classifies classes as snapshot-worthy or structurally irrelevant.
//!
//! Two snapshotters are provided. [`PlainSnapshotter`] computes one snapshot
//! per class in a single memoized pass. [`InlinedSnapshotter`] additionally
//! folds the content hashes of classes defined inside inline functions into
//! those functions' ABI hashes, so that changing an inlined lambda in one
//! module invalidates its callers in other modules.
//!
//! A few key restrictions shape the design:
//!
//! 1. Loaded class contents are never all held in memory at once — a
//!    classpath entry can easily be a 400 MB fat jar, and several entries
//!    may be snapshotted in one build.
//! 2. Ill-formed jars must be handled gracefully. An archive can be
//!    purposefully edited or simply corrupt; if it is good enough for the
//!    compiler, it must be good enough for the snapshotter too.

#![warn(missing_docs)]

pub mod accessibility;
pub mod error;
pub mod hasher;
pub mod inlined;
pub mod metrics;
pub mod multi_hash;
pub mod persist;
pub mod plain;
pub mod settings;
pub mod snapshot;
pub mod store;

pub use accessibility::is_inaccessible;
pub use error::SnapshotError;
pub use hasher::{InlineFunctionHasher, PlainInlineFunctionHasher, StructuralHasher};
pub use inlined::{FoldingInlineFunctionHasher, InlinedSnapshotter};
pub use metrics::{MetricsReporter, NoopMetrics, SnapshotMetric};
pub use multi_hash::{ClassMultiHashProvider, InnerClassIndex};
pub use persist::{read_snapshot_list, write_snapshot_list};
pub use plain::PlainSnapshotter;
pub use settings::{HashGranularity, SnapshotSettings};
pub use snapshot::{ClassSnapshot, MemberHash, RegularSnapshot};
pub use store::RecordStore;
