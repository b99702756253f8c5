//! Optional timing metrics for snapshot runs.

use std::time::{Duration, Instant};

/// Phases measured during a snapshot run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnapshotMetric {
    /// Loading raw class contents through a provider.
    LoadClassContents,

    /// Structurally hashing ordinary classes.
    SnapshotClasses,

    /// Structurally hashing platform classes.
    SnapshotPlatformClasses,

    /// Content-hashing nested classes for the multi-hash index.
    SnapshotInlinedClasses,
}

/// Receives phase timings from a snapshot run.
///
/// Implementations must be cheap: `record` is called once per measured
/// closure, potentially tens of thousands of times per classpath entry.
pub trait MetricsReporter {
    /// Records one measured duration for `metric`.
    fn record(&self, metric: SnapshotMetric, elapsed: Duration);
}

/// Reporter that discards all measurements.
///
/// The default collaborator when no metrics sink is supplied.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopMetrics;

impl MetricsReporter for NoopMetrics {
    fn record(&self, _metric: SnapshotMetric, _elapsed: Duration) {}
}

/// Times `f` and reports the elapsed duration under `metric`.
pub fn measure<T>(
    metrics: &dyn MetricsReporter,
    metric: SnapshotMetric,
    f: impl FnOnce() -> T,
) -> T {
    let start = Instant::now();
    let value = f();
    metrics.record(metric, start.elapsed());
    value
}
