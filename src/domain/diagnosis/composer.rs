//! ResultComposer - assembly and ordering only, no business rules.

use crate::domain::analysis::{Recommendation, SignalSummary, ThemeAnalysis};

use super::result::{DiagnosisResult, NEXT_STEPS};

/// Assembles the parts of a diagnosis into one result.
pub struct ResultComposer;

impl ResultComposer {
    /// Merges the theme analyses, the aggregate lists, and the
    /// recommendations with the constant next-steps script.
    ///
    /// Theme analyses are ordered by the fixed presentation order
    /// regardless of the order they arrive in; everything else is kept
    /// exactly as produced upstream.
    pub fn compose(
        mut theme_analyses: Vec<ThemeAnalysis>,
        signals: SignalSummary,
        recommendations: Vec<Recommendation>,
    ) -> DiagnosisResult {
        theme_analyses.sort_by_key(|analysis| analysis.theme);
        DiagnosisResult {
            theme_analyses,
            critical_points: signals.critical_points,
            opportunities: signals.opportunities,
            recommendations,
            next_steps: NEXT_STEPS.iter().map(|step| step.to_string()).collect(),
        }
    }
}
