//! Class records pairing parsed headers with lazily-loaded contents.

use std::path::PathBuf;

use crate::error::ClassfileError;
use crate::header::ClassHeader;
use crate::name::ClassId;

/// Lazily loads the raw bytes of a single class.
///
/// Implemented by the archive/file-system layer. A provider may be invoked
/// more than once within a snapshot run (nested classes are read a second
/// time when building the multi-hash index) and must return identical
/// contents each time.
pub trait ContentsProvider {
    /// Reads the raw class-file bytes.
    fn load_contents(&self) -> Result<Vec<u8>, ClassfileError>;
}

/// Provider reading a class file from disk on demand.
pub struct FileContents {
    path: PathBuf,
}

impl FileContents {
    /// Creates a provider for the class file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ContentsProvider for FileContents {
    fn load_contents(&self) -> Result<Vec<u8>, ClassfileError> {
        std::fs::read(&self.path).map_err(|e| ClassfileError::Io {
            path: self.path.clone(),
            source: e,
        })
    }
}

/// Provider serving bytes already held in memory.
///
/// Used for in-memory archives and tests.
pub struct InMemoryContents {
    bytes: Vec<u8>,
}

impl InMemoryContents {
    /// Creates a provider over the given bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }
}

impl ContentsProvider for InMemoryContents {
    fn load_contents(&self) -> Result<Vec<u8>, ClassfileError> {
        Ok(self.bytes.clone())
    }
}

/// One class on the classpath: identifier, parsed header, lazy contents.
///
/// The record set is fixed for the duration of one snapshot run and
/// discarded afterwards.
pub struct ClassRecord {
    id: ClassId,
    header: ClassHeader,
    provider: Box<dyn ContentsProvider>,
}

impl ClassRecord {
    /// Creates a record from reader output.
    pub fn new(id: ClassId, header: ClassHeader, provider: Box<dyn ContentsProvider>) -> Self {
        Self {
            id,
            header,
            provider,
        }
    }

    /// The class identifier.
    pub fn id(&self) -> &ClassId {
        &self.id
    }

    /// The parsed header.
    pub fn header(&self) -> &ClassHeader {
        &self.header
    }

    /// Loads the class contents through the provider.
    pub fn load_contents(&self) -> Result<ClassContents, ClassfileError> {
        let bytes = self.provider.load_contents()?;
        Ok(ClassContents {
            header: self.header,
            bytes,
        })
    }
}

/// A class's raw bytes together with its parsed header.
///
/// Dropped as soon as the snapshot (or content hash) derived from it is
/// cached, keeping the working set a fraction of total classpath size.
#[derive(Debug)]
pub struct ClassContents {
    /// The record's parsed header.
    pub header: ClassHeader,

    /// Raw class-file bytes.
    pub bytes: Vec<u8>,
}
