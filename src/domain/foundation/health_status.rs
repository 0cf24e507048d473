//! Health status classification assigned to a theme.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Health classification of a theme: critical, warning, or good.
///
/// Ordering runs from worst to best, so `min` over statuses yields the
/// most severe one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    /// Requires immediate intervention.
    Critical,
    /// Works, but with clear gaps.
    Warning,
    /// Solid, nothing urgent.
    Good,
}

impl HealthStatus {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            HealthStatus::Critical => "Critical",
            HealthStatus::Warning => "Warning",
            HealthStatus::Good => "Good",
        }
    }

    /// Returns true if this status is critical.
    pub fn is_critical(&self) -> bool {
        matches!(self, HealthStatus::Critical)
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
