//! Documented defaults for optional questionnaire keys.
//!
//! One central table shared by the validator and the evaluators, so a
//! default can never silently diverge between the two. Keys not listed
//! here are required and have no default.

use std::collections::BTreeSet;

use crate::domain::foundation::OrganizationLevel;

use super::values::AcquisitionChannel;

/// `organization_level` defaults to the midpoint of the 1-5 scale.
pub const DEFAULT_ORGANIZATION_LEVEL: OrganizationLevel = OrganizationLevel::MIDPOINT;

/// `main_channels` defaults to no channels selected.
pub fn default_channels() -> BTreeSet<AcquisitionChannel> {
    BTreeSet::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn organization_level_defaults_to_midpoint() {
        assert_eq!(DEFAULT_ORGANIZATION_LEVEL.value(), 3);
    }

    #[test]
    fn channels_default_to_empty() {
        assert!(default_channels().is_empty());
    }
}
