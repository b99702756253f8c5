//! Error types for snapshot computation and persistence.

use std::path::PathBuf;

use strata_classfile::{ClassName, ClassfileError};

/// Errors surfaced while computing or persisting snapshots.
///
/// Snapshot-file reads are fail-safe and do not use this enum: corruption
/// there is a cache miss, not an error.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The contents of a specific class could not be loaded.
    ///
    /// Propagated, never swallowed; a higher layer may decide to mark the
    /// whole classpath entry as unusable.
    #[error("failed to load contents of class {class}: {source}")]
    Load {
        /// Internal name of the class whose load failed.
        class: ClassName,
        /// The underlying provider error.
        source: ClassfileError,
    },

    /// An I/O error occurred while writing a snapshot file.
    #[error("snapshot I/O error at {path}: {source}")]
    Io {
        /// The path that caused the error.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A snapshot payload could not be serialized.
    #[error("snapshot serialization error: {reason}")]
    Serialization {
        /// Description of the failure.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_error_display() {
        let err = SnapshotError::Load {
            class: ClassName::new("com/example/Foo"),
            source: ClassfileError::Malformed {
                name: "com/example/Foo".to_string(),
                reason: "truncated entry".to_string(),
            },
        };
        let msg = err.to_string();
        assert!(msg.contains("failed to load contents"));
        assert!(msg.contains("com/example/Foo"));
    }

    #[test]
    fn io_error_display() {
        let err = SnapshotError::Io {
            path: PathBuf::from("/out/entry.snapshot"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("snapshot I/O error"));
        assert!(msg.contains("entry.snapshot"));
    }

    #[test]
    fn serialization_error_display() {
        let err = SnapshotError::Serialization {
            reason: "payload too deep".to_string(),
        };
        assert!(err.to_string().contains("payload too deep"));
    }
}
