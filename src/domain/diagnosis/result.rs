//! DiagnosisResult - the assembled output of one evaluation.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::{Recommendation, ThemeAnalysis};
use crate::domain::foundation::{HealthStatus, Theme};

/// The constant next-steps script appended to every diagnosis.
pub const NEXT_STEPS: [&str; 4] = [
    "Present the diagnosis to the client in a professional format.",
    "Prioritize the critical points surfaced by the diagnosis.",
    "Draft a commercial proposal covering the recommended interventions.",
    "Define a phased implementation timeline with the client.",
];

/// The complete diagnosis for one answer set.
///
/// A value object scoped to one invocation: the engine retains nothing
/// after returning it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisResult {
    /// The four theme analyses, in fixed presentation order.
    pub theme_analyses: Vec<ThemeAnalysis>,
    /// Cross-theme risk points, ordered and deduplicated.
    pub critical_points: Vec<String>,
    /// Cross-theme opportunities, ordered and deduplicated.
    pub opportunities: Vec<String>,
    /// Matching recommendations, in rule priority order.
    pub recommendations: Vec<Recommendation>,
    /// The constant four-item next-steps script.
    pub next_steps: Vec<String>,
}

impl DiagnosisResult {
    /// Returns the analysis for a given theme, if present.
    pub fn theme(&self, theme: Theme) -> Option<&ThemeAnalysis> {
        self.theme_analyses
            .iter()
            .find(|analysis| analysis.theme == theme)
    }

    /// Returns the status of a given theme, if present.
    pub fn status_of(&self, theme: Theme) -> Option<HealthStatus> {
        self.theme(theme).map(|analysis| analysis.status)
    }

    /// Returns true if any theme resolved critical.
    pub fn has_critical_theme(&self) -> bool {
        self.theme_analyses
            .iter()
            .any(|analysis| analysis.status.is_critical())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> DiagnosisResult {
        DiagnosisResult {
            theme_analyses: vec![
                ThemeAnalysis::new(Theme::Infrastructure, HealthStatus::Good, "Fine.", vec![]),
                ThemeAnalysis::new(Theme::Operations, HealthStatus::Critical, "Bad.", vec![]),
            ],
            critical_points: vec!["a point".to_string()],
            opportunities: vec![],
            recommendations: vec![],
            next_steps: NEXT_STEPS.iter().map(|step| step.to_string()).collect(),
        }
    }

    #[test]
    fn next_steps_script_has_four_fixed_items() {
        assert_eq!(NEXT_STEPS.len(), 4);
        assert!(NEXT_STEPS[0].contains("Present the diagnosis"));
        assert!(NEXT_STEPS[3].contains("timeline"));
    }

    #[test]
    fn theme_lookup_finds_the_matching_analysis() {
        let result = sample_result();
        assert_eq!(
            result.status_of(Theme::Operations),
            Some(HealthStatus::Critical)
        );
        assert_eq!(result.status_of(Theme::Maturity), None);
    }

    #[test]
    fn has_critical_theme_detects_any_critical() {
        assert!(sample_result().has_critical_theme());
    }
}
