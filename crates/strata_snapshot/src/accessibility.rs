//! Classification of classes that cannot affect other compilation units.

use strata_classfile::{ClassHeader, ClassKind};

/// Returns `true` if the class is inaccessible, and `false` otherwise (or if
/// we don't know).
///
/// An inaccessible class can't be referenced from other source files, so a
/// change to it never requires recompiling other files and it is exempt from
/// structural hashing. Note that this only examines the class's own header;
/// transitive inaccessibility through the outer-class chain is handled by
/// the snapshotters.
pub fn is_inaccessible(header: &ClassHeader) -> bool {
    match header.kind {
        ClassKind::Synthetic => true,
        ClassKind::Ordinary | ClassKind::Platform => {
            let flags = header.flags;
            flags.is_private || flags.is_local || flags.is_anonymous || flags.is_synthetic
        }
        // Unrecognized kinds are not provably safe to skip.
        ClassKind::Unknown => false,
    }
}
