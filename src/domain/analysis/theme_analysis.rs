//! ThemeAnalysis output type and the ordered status-rule table.

use serde::{Deserialize, Serialize};

use crate::domain::answers::AnswerSet;
use crate::domain::foundation::{HealthStatus, Theme};

/// Health classification of one theme plus its explanatory points.
///
/// Created fresh per call and never persisted by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeAnalysis {
    pub theme: Theme,
    pub title: String,
    pub status: HealthStatus,
    pub summary: String,
    pub points: Vec<String>,
}

impl ThemeAnalysis {
    /// Creates a theme analysis; the title is derived from the theme.
    pub fn new(
        theme: Theme,
        status: HealthStatus,
        summary: impl Into<String>,
        points: Vec<String>,
    ) -> Self {
        Self {
            theme,
            title: theme.title().to_string(),
            status,
            summary: summary.into(),
            points,
        }
    }
}

/// One row of a theme's decision table.
///
/// Rows are evaluated in declaration order; critical rows are listed
/// before warning rows, so the first satisfied row is always the most
/// severe applicable status.
pub(crate) struct StatusRule {
    pub status: HealthStatus,
    pub applies: fn(&AnswerSet) -> bool,
}

/// Resolves a theme's status from its ordered rule table.
///
/// First satisfied row wins; a table with no satisfied row resolves to
/// `Good`. Every theme therefore gets exactly one status.
pub(crate) fn resolve_status(rules: &[StatusRule], answers: &AnswerSet) -> HealthStatus {
    rules
        .iter()
        .find(|rule| (rule.applies)(answers))
        .map(|rule| rule.status)
        .unwrap_or(HealthStatus::Good)
}
