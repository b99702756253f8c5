//! On-disk persistence for snapshot lists.
//!
//! A run's output is written next to the classpath entry it describes and
//! compared against on the next build. Files carry a length-prefixed binary
//! header (magic bytes, format version, tool version, checksum). Reads are
//! fail-safe: a missing or corrupt file is a cache miss that forces a fresh
//! snapshot run, never an error.

use std::path::Path;

use serde::{Deserialize, Serialize};
use strata_common::ContentHash;

use crate::error::SnapshotError;
use crate::snapshot::ClassSnapshot;

/// Magic bytes identifying a snapshot-list file.
const SNAPSHOT_MAGIC: [u8; 4] = *b"STSN";

/// Current snapshot file format version. Increment on breaking changes to
/// the header or payload encoding.
const SNAPSHOT_FORMAT_VERSION: u32 = 1;

/// Header prepended to every snapshot file for validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SnapshotFileHeader {
    /// Magic bytes: must be `b"STSN"`.
    magic: [u8; 4],

    /// Snapshot file format version.
    format_version: u32,

    /// Tool version that produced this file. Stored for inspection; the
    /// format version alone decides compatibility.
    tool_version: String,

    /// Content hash of the payload (for integrity checks).
    checksum: ContentHash,
}

/// Writes `snapshots` to `path` with a validated binary header.
///
/// The positional order of the list is preserved byte-for-byte; a reader
/// zips the decoded list against a later run's output.
pub fn write_snapshot_list(
    path: &Path,
    snapshots: &[ClassSnapshot],
    tool_version: &str,
) -> Result<(), SnapshotError> {
    let payload = bincode::serde::encode_to_vec(snapshots, bincode::config::standard()).map_err(
        |e| SnapshotError::Serialization {
            reason: e.to_string(),
        },
    )?;

    let header = SnapshotFileHeader {
        magic: SNAPSHOT_MAGIC,
        format_version: SNAPSHOT_FORMAT_VERSION,
        tool_version: tool_version.to_string(),
        checksum: ContentHash::from_bytes(&payload),
    };
    let header_bytes = bincode::serde::encode_to_vec(&header, bincode::config::standard())
        .map_err(|e| SnapshotError::Serialization {
            reason: e.to_string(),
        })?;

    // Layout: 4-byte header length (little-endian) + header + payload
    let header_len = header_bytes.len() as u32;
    let mut output = Vec::with_capacity(4 + header_bytes.len() + payload.len());
    output.extend_from_slice(&header_len.to_le_bytes());
    output.extend_from_slice(&header_bytes);
    output.extend_from_slice(&payload);

    std::fs::write(path, &output).map_err(|e| SnapshotError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Reads a snapshot list from `path`, validating its header.
///
/// Returns `None` if the file doesn't exist, the header is invalid, the
/// format version doesn't match, or the checksum doesn't verify.
pub fn read_snapshot_list(path: &Path) -> Option<Vec<ClassSnapshot>> {
    let raw = std::fs::read(path).ok()?;

    // Need at least 4 bytes for the header length
    if raw.len() < 4 {
        return None;
    }

    let header_len = u32::from_le_bytes(raw[..4].try_into().ok()?) as usize;
    if raw.len() < 4 + header_len {
        return None;
    }

    let header: SnapshotFileHeader =
        bincode::serde::decode_from_slice(&raw[4..4 + header_len], bincode::config::standard())
            .ok()?
            .0;

    if header.magic != SNAPSHOT_MAGIC {
        return None;
    }
    if header.format_version != SNAPSHOT_FORMAT_VERSION {
        return None;
    }

    let payload = &raw[4 + header_len..];
    if ContentHash::from_bytes(payload) != header.checksum {
        return None;
    }

    bincode::serde::decode_from_slice(payload, bincode::config::standard())
        .ok()
        .map(|(snapshots, _)| snapshots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{MemberHash, RegularSnapshot};
    use strata_common::AbiHash;

    fn sample_snapshots() -> Vec<ClassSnapshot> {
        vec![
            ClassSnapshot::Regular(RegularSnapshot {
                class_abi_hash: AbiHash::from_bytes(b"class A"),
                member_hashes: vec![MemberHash {
                    signature: "run()V".to_string(),
                    hash: AbiHash::from_bytes(b"run"),
                }],
            }),
            ClassSnapshot::Inaccessible,
            ClassSnapshot::Regular(RegularSnapshot {
                class_abi_hash: AbiHash::from_bytes(b"class C"),
                member_hashes: vec![],
            }),
        ]
    }

    #[test]
    fn write_and_read_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entry.snapshot");
        let snapshots = sample_snapshots();

        write_snapshot_list(&path, &snapshots, "0.1.0").unwrap();
        let read_back = read_snapshot_list(&path).unwrap();
        assert_eq!(read_back, snapshots);
    }

    #[test]
    fn roundtrip_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entry.snapshot");
        write_snapshot_list(&path, &sample_snapshots(), "0.1.0").unwrap();

        let read_back = read_snapshot_list(&path).unwrap();
        assert!(!read_back[0].is_inaccessible());
        assert!(read_back[1].is_inaccessible());
        assert!(!read_back[2].is_inaccessible());
    }

    #[test]
    fn read_missing_file_returns_none() {
        assert!(read_snapshot_list(Path::new("/nonexistent/entry.snapshot")).is_none());
    }

    #[test]
    fn read_garbage_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.snapshot");
        std::fs::write(&path, b"not a snapshot file").unwrap();
        assert!(read_snapshot_list(&path).is_none());
    }

    #[test]
    fn read_truncated_file_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("truncated.snapshot");
        // Only 2 bytes — not enough for the header length
        std::fs::write(&path, b"ST").unwrap();
        assert!(read_snapshot_list(&path).is_none());
    }

    #[test]
    fn read_wrong_magic_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("badmagic.snapshot");

        let payload =
            bincode::serde::encode_to_vec(sample_snapshots(), bincode::config::standard()).unwrap();
        let header = SnapshotFileHeader {
            magic: *b"BAAD",
            format_version: SNAPSHOT_FORMAT_VERSION,
            tool_version: "0.1.0".to_string(),
            checksum: ContentHash::from_bytes(&payload),
        };
        let header_bytes =
            bincode::serde::encode_to_vec(&header, bincode::config::standard()).unwrap();
        let mut output = Vec::new();
        output.extend_from_slice(&(header_bytes.len() as u32).to_le_bytes());
        output.extend_from_slice(&header_bytes);
        output.extend_from_slice(&payload);
        std::fs::write(&path, &output).unwrap();

        assert!(read_snapshot_list(&path).is_none());
    }

    #[test]
    fn read_wrong_version_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("oldver.snapshot");

        let payload =
            bincode::serde::encode_to_vec(sample_snapshots(), bincode::config::standard()).unwrap();
        let header = SnapshotFileHeader {
            magic: SNAPSHOT_MAGIC,
            format_version: 999,
            tool_version: "0.1.0".to_string(),
            checksum: ContentHash::from_bytes(&payload),
        };
        let header_bytes =
            bincode::serde::encode_to_vec(&header, bincode::config::standard()).unwrap();
        let mut output = Vec::new();
        output.extend_from_slice(&(header_bytes.len() as u32).to_le_bytes());
        output.extend_from_slice(&header_bytes);
        output.extend_from_slice(&payload);
        std::fs::write(&path, &output).unwrap();

        assert!(read_snapshot_list(&path).is_none());
    }

    #[test]
    fn read_checksum_mismatch_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tampered.snapshot");
        write_snapshot_list(&path, &sample_snapshots(), "0.1.0").unwrap();

        // Flip the last payload byte.
        let mut raw = std::fs::read(&path).unwrap();
        let last = raw.len() - 1;
        raw[last] ^= 0xff;
        std::fs::write(&path, &raw).unwrap();

        assert!(read_snapshot_list(&path).is_none());
    }

    #[test]
    fn empty_list_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.snapshot");
        write_snapshot_list(&path, &[], "0.1.0").unwrap();
        assert_eq!(read_snapshot_list(&path).unwrap(), vec![]);
    }
}
