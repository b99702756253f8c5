//! Error types for the class-file boundary.

use std::path::PathBuf;

/// Errors surfaced by class contents providers.
///
/// Load failures are never swallowed by the snapshotting core; they
/// propagate so that a higher layer can decide whether to mark the whole
/// classpath entry as unusable.
#[derive(Debug, thiserror::Error)]
pub enum ClassfileError {
    /// Reading the backing file failed.
    #[error("failed to read class file {path}: {source}")]
    Io {
        /// The path that caused the error.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The archive entry for a class is corrupt or truncated.
    #[error("malformed class {name}: {reason}")]
    Malformed {
        /// Internal name of the affected class.
        name: String,
        /// Description of the corruption.
        reason: String,
    },
}
