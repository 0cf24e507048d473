//! Organization level value object (1-5 ordinal scale).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Self-assessed process organization level: 1 (ad hoc) to 5 (fully
/// structured).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct OrganizationLevel(u8);

impl OrganizationLevel {
    /// Lowest level: nothing is written down.
    pub const MIN: Self = Self(1);

    /// Midpoint of the scale.
    pub const MIDPOINT: Self = Self(3);

    /// Highest level: processes fully mapped and followed.
    pub const MAX: Self = Self(5);

    /// Creates an OrganizationLevel, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, String> {
        if !(1..=5).contains(&value) {
            return Err(format!(
                "organization level must be between 1 and 5, got {}",
                value
            ));
        }
        Ok(Self(value))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for OrganizationLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<OrganizationLevel> for u8 {
    fn from(level: OrganizationLevel) -> u8 {
        level.0
    }
}

impl fmt::Display for OrganizationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
