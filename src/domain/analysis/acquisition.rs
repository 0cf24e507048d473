//! Acquisition & Relationship evaluator.

use crate::domain::answers::{AnswerSet, DigitalPresence, Level, PostSaleRelationship};
use crate::domain::foundation::{HealthStatus, Theme};

use super::theme_analysis::{resolve_status, StatusRule, ThemeAnalysis};

/// Decision table. Critical rows before warning rows; first match wins.
///
/// The critical row is a two-part conjunction, unlike the
/// single-condition rows of the other themes: heavy referral reliance
/// only counts when no other channel backs it up.
const STATUS_RULES: &[StatusRule] = &[
    StatusRule {
        status: HealthStatus::Critical,
        applies: |a| a.referral_dependency == Level::High && a.channel_count() <= 1,
    },
    StatusRule {
        status: HealthStatus::Warning,
        applies: |a| a.digital_presence == DigitalPresence::None,
    },
    StatusRule {
        status: HealthStatus::Warning,
        applies: |a| a.post_sale_relationship == PostSaleRelationship::None,
    },
];

/// Evaluates the Acquisition & Relationship theme.
pub struct AcquisitionEvaluator;

impl AcquisitionEvaluator {
    /// Pure function: AnswerSet -> ThemeAnalysis.
    pub fn evaluate(answers: &AnswerSet) -> ThemeAnalysis {
        let status = resolve_status(STATUS_RULES, answers);
        let points = vec![
            channels_point(answers),
            referral_point(answers.referral_dependency).to_string(),
            presence_point(answers.digital_presence).to_string(),
            post_sale_point(answers.post_sale_relationship).to_string(),
        ];
        ThemeAnalysis::new(Theme::Acquisition, status, summary(status), points)
    }
}

fn summary(status: HealthStatus) -> &'static str {
    match status {
        HealthStatus::Critical => {
            "New business depends on a single fragile source; acquisition needs rebuilding."
        }
        HealthStatus::Warning => {
            "Customers arrive, but the acquisition and relationship engine has clear gaps."
        }
        HealthStatus::Good => "Acquisition is diversified and relationships are cultivated.",
    }
}

fn channels_point(answers: &AnswerSet) -> String {
    if answers.main_channels.is_empty() {
        return "No acquisition channel is being worked consistently.".to_string();
    }
    let labels: Vec<&str> = answers
        .main_channels
        .iter()
        .map(|channel| channel.label())
        .collect();
    format!("Acquisition currently runs on: {}.", labels.join(", "))
}

fn referral_point(dependency: Level) -> &'static str {
    match dependency {
        Level::High => "New business depends heavily on referrals.",
        Level::Medium => "Referrals are an important but not exclusive source of business.",
        Level::Low => "The business does not rely on referrals to win customers.",
    }
}

fn presence_point(presence: DigitalPresence) -> &'static str {
    match presence {
        DigitalPresence::None => "The business has no digital presence where customers search.",
        DigitalPresence::Limited => "Digital presence exists but reaches few people.",
        DigitalPresence::Strong => "The business maintains a strong digital presence.",
    }
}

fn post_sale_point(relationship: PostSaleRelationship) -> &'static str {
    match relationship {
        PostSaleRelationship::None => "There is no relationship with customers after the sale.",
        PostSaleRelationship::Basic => "Post-sale contact happens, but without structure.",
        PostSaleRelationship::Structured => "A structured post-sale relationship is in place.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::answers::RawAnswers;

    fn answers_with(
        channels: &str,
        referral: &str,
        presence: &str,
        post_sale: &str,
    ) -> AnswerSet {
        let raw: RawAnswers = serde_json::from_str(&format!(
            r#"{{
                "has_website": "functional",
                "website_converts": "yes",
                "has_app_system": "yes",
                "uses_digital_tools": "yes",
                "manual_dependency": "low",
                "service_capacity": "ok",
                "main_channels": {channels},
                "referral_dependency": "{referral}",
                "digital_presence": "{presence}",
                "post_sale_relationship": "{post_sale}",
                "maturity_level": "advanced",
                "automation_potential": "low",
                "scalability_potential": "low"
            }}"#
        ))
        .unwrap();
        AnswerSet::from_raw(&raw).unwrap()
    }

    #[test]
    fn referral_concentration_is_critical() {
        let analysis = AcquisitionEvaluator::evaluate(&answers_with(
            r#"["referral"]"#,
            "high",
            "strong",
            "structured",
        ));
        assert_eq!(analysis.status, HealthStatus::Critical);
    }

    #[test]
    fn zero_channels_with_high_referral_dependency_is_critical() {
        let analysis =
            AcquisitionEvaluator::evaluate(&answers_with("[]", "high", "strong", "structured"));
        assert_eq!(analysis.status, HealthStatus::Critical);
    }

    #[test]
    fn high_referral_dependency_alone_is_not_critical() {
        // Two channels back up the referral reliance: the conjunction
        // does not fire.
        let analysis = AcquisitionEvaluator::evaluate(&answers_with(
            r#"["referral", "organic"]"#,
            "high",
            "strong",
            "structured",
        ));
        assert_eq!(analysis.status, HealthStatus::Good);
    }

    #[test]
    fn missing_digital_presence_is_warning() {
        let analysis = AcquisitionEvaluator::evaluate(&answers_with(
            r#"["organic", "paid"]"#,
            "low",
            "none",
            "structured",
        ));
        assert_eq!(analysis.status, HealthStatus::Warning);
    }

    #[test]
    fn missing_post_sale_relationship_is_warning() {
        let analysis = AcquisitionEvaluator::evaluate(&answers_with(
            r#"["organic", "paid"]"#,
            "low",
            "strong",
            "none",
        ));
        assert_eq!(analysis.status, HealthStatus::Warning);
    }

    #[test]
    fn diversified_relationship_driven_acquisition_is_good() {
        let analysis = AcquisitionEvaluator::evaluate(&answers_with(
            r#"["organic", "paid", "events"]"#,
            "low",
            "strong",
            "structured",
        ));
        assert_eq!(analysis.status, HealthStatus::Good);
    }

    #[test]
    fn critical_takes_precedence_over_warning() {
        // Satisfies both the conjunction and the no-presence warning.
        let analysis =
            AcquisitionEvaluator::evaluate(&answers_with(r#"["referral"]"#, "high", "none", "none"));
        assert_eq!(analysis.status, HealthStatus::Critical);
    }

    #[test]
    fn points_name_the_channels_in_use() {
        let analysis = AcquisitionEvaluator::evaluate(&answers_with(
            r#"["organic", "referral"]"#,
            "low",
            "strong",
            "structured",
        ));
        assert!(analysis.points[0].contains("organic search"));
        assert!(analysis.points[0].contains("referrals"));
    }

    #[test]
    fn empty_channel_set_gets_its_own_point() {
        let analysis =
            AcquisitionEvaluator::evaluate(&answers_with("[]", "low", "strong", "structured"));
        assert_eq!(
            analysis.points[0],
            "No acquisition channel is being worked consistently."
        );
    }
}
