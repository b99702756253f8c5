//! Snapshot run configuration.

/// How finely class ABIs are hashed.
///
/// Threaded through to the structural hasher; the snapshotters themselves
/// never examine it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HashGranularity {
    /// One hash per class.
    ClassLevel,

    /// One hash per externally-visible member.
    #[default]
    MemberLevel,
}

/// Settings for one snapshot run.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnapshotSettings {
    /// Hash granularity forwarded to the structural hasher.
    pub granularity: HashGranularity,
}

impl SnapshotSettings {
    /// Settings using the given granularity.
    pub fn with_granularity(granularity: HashGranularity) -> Self {
        Self { granularity }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_granularity_is_member_level() {
        assert_eq!(
            SnapshotSettings::default().granularity,
            HashGranularity::MemberLevel
        );
    }

    #[test]
    fn with_granularity_overrides() {
        let settings = SnapshotSettings::with_granularity(HashGranularity::ClassLevel);
        assert_eq!(settings.granularity, HashGranularity::ClassLevel);
    }
}
