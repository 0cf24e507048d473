//! Diagnosis entry point - wires validation, evaluation, and assembly.
//!
//! One synchronous pure computation per call: no I/O, no retained
//! state, no locking. The four theme evaluators, the signal
//! aggregator, and the recommendation selector all read the same
//! immutable answer set and never each other's output, so the
//! sequencing below is presentation order, not a data dependency.

use tracing::debug;

use crate::domain::analysis::{
    AcquisitionEvaluator, InfrastructureEvaluator, MaturityEvaluator, OperationsEvaluator,
    PriorityClassifier, RecommendationSelector, SignalAggregator,
};
use crate::domain::answers::{AnswerSet, RawAnswers};
use crate::domain::diagnosis::{DiagnosisResult, ResultComposer};
use crate::domain::foundation::ValidationError;

/// Evaluates a raw answer record into a complete diagnosis.
///
/// Fails with a [`ValidationError`] naming the first theme with
/// missing required answers; there is no partial output.
pub fn evaluate(raw: &RawAnswers) -> Result<DiagnosisResult, ValidationError> {
    let answers = AnswerSet::from_raw(raw)?;

    let theme_analyses = vec![
        InfrastructureEvaluator::evaluate(&answers),
        OperationsEvaluator::evaluate(&answers),
        AcquisitionEvaluator::evaluate(&answers),
        MaturityEvaluator::evaluate(&answers),
    ];
    for analysis in &theme_analyses {
        debug!(theme = %analysis.theme, status = %analysis.status, "theme evaluated");
    }

    let signals = SignalAggregator::aggregate(&answers);
    debug!(
        critical_points = signals.critical_points.len(),
        opportunities = signals.opportunities.len(),
        "signals aggregated"
    );

    let recommendations = RecommendationSelector::select(&answers);
    debug!(count = recommendations.len(), "recommendations selected");

    if let Some(solution) = PriorityClassifier::classify(&answers) {
        debug!(%solution, "priority solution identified");
    }

    Ok(ResultComposer::compose(theme_analyses, signals, recommendations))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{HealthStatus, Theme};

    fn raw_from(json: &str) -> RawAnswers {
        serde_json::from_str(json).unwrap()
    }

    fn complete_raw() -> RawAnswers {
        raw_from(
            r#"{
                "has_website": "outdated",
                "website_converts": "partial",
                "has_app_system": "simple",
                "uses_digital_tools": "few",
                "organization_level": 4,
                "manual_dependency": "medium",
                "service_capacity": "ok",
                "main_channels": ["organic", "referral"],
                "referral_dependency": "medium",
                "digital_presence": "limited",
                "post_sale_relationship": "basic",
                "maturity_level": "intermediate",
                "automation_potential": "medium",
                "scalability_potential": "medium"
            }"#,
        )
    }

    #[test]
    fn returns_all_four_themes_in_fixed_order() {
        let result = evaluate(&complete_raw()).unwrap();
        let themes: Vec<Theme> = result
            .theme_analyses
            .iter()
            .map(|analysis| analysis.theme)
            .collect();
        assert_eq!(themes, Theme::ALL.to_vec());
    }

    #[test]
    fn every_theme_resolves_to_exactly_one_status() {
        let result = evaluate(&complete_raw()).unwrap();
        for analysis in &result.theme_analyses {
            assert!(matches!(
                analysis.status,
                HealthStatus::Critical | HealthStatus::Warning | HealthStatus::Good
            ));
        }
    }

    #[test]
    fn missing_required_answer_refuses_evaluation() {
        let mut raw = complete_raw();
        raw.service_capacity = None;

        let err = evaluate(&raw).unwrap_err();
        assert_eq!(err.theme, Theme::Operations);
        assert_eq!(err.missing, vec!["service_capacity"]);
    }

    #[test]
    fn next_steps_are_always_the_constant_script() {
        let result = evaluate(&complete_raw()).unwrap();
        assert_eq!(result.next_steps.len(), 4);
    }

    #[test]
    fn evaluation_is_deterministic() {
        let raw = complete_raw();
        assert_eq!(evaluate(&raw).unwrap(), evaluate(&raw).unwrap());
    }
}
