//! Class names and identifiers as reported by the class-file reader.

use std::fmt;

/// Separator between an outer class and the classes nested inside it in
/// internal names.
pub const NESTING_SEPARATOR: char = '$';

/// A JVM internal class name, e.g. `com/example/Outer$Inner`.
///
/// Packages are separated by `/` and nested classes by `$`. Names compare
/// and sort lexicographically, which the multi-hash index relies on for its
/// prefix range queries.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClassName(String);

impl ClassName {
    /// Creates a class name from an internal-name string.
    pub fn new(internal_name: impl Into<String>) -> Self {
        Self(internal_name.into())
    }

    /// Returns the internal name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the name denotes a nested, local, or anonymous
    /// class.
    ///
    /// Classes synthesized for lambdas and anonymous bodies share their
    /// enclosing declaration's name up to a `$` separator, so the test is
    /// purely structural. Shortened names are supported; fully obfuscated
    /// ones are not.
    pub fn is_nested(&self) -> bool {
        self.0.contains(NESTING_SEPARATOR)
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifies a class and its position in the nesting forest.
///
/// Containment never cycles: classes form a forest via nesting, even though
/// the inline-reference graph between them can.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassId {
    /// The class's own internal name.
    pub name: ClassName,

    /// Internal name of the immediately enclosing class, if any.
    ///
    /// Taken from parsed metadata, not derived from `name`: faulty archives
    /// can declare an outer class that is absent from the input set.
    pub outer: Option<ClassName>,
}

impl ClassId {
    /// Identifier for a top-level class.
    pub fn top_level(name: ClassName) -> Self {
        Self { name, outer: None }
    }

    /// Identifier for a class enclosed in `outer`.
    pub fn nested(name: ClassName, outer: ClassName) -> Self {
        Self {
            name,
            outer: Some(outer),
        }
    }
}
