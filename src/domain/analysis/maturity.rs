//! Digital Maturity evaluator.

use crate::domain::answers::{AnswerSet, Level, MaturityLevel};
use crate::domain::foundation::{HealthStatus, Theme};

use super::theme_analysis::{resolve_status, StatusRule, ThemeAnalysis};

/// Decision table: the maturity answer maps directly to a status.
const STATUS_RULES: &[StatusRule] = &[
    StatusRule {
        status: HealthStatus::Critical,
        applies: |a| a.maturity_level == MaturityLevel::Beginner,
    },
    StatusRule {
        status: HealthStatus::Warning,
        applies: |a| a.maturity_level == MaturityLevel::Intermediate,
    },
];

/// Evaluates the Digital Maturity theme.
pub struct MaturityEvaluator;

impl MaturityEvaluator {
    /// Pure function: AnswerSet -> ThemeAnalysis.
    pub fn evaluate(answers: &AnswerSet) -> ThemeAnalysis {
        let status = resolve_status(STATUS_RULES, answers);
        let points = vec![
            maturity_point(answers.maturity_level).to_string(),
            automation_point(answers.automation_potential).to_string(),
            scalability_point(answers.scalability_potential).to_string(),
        ];
        ThemeAnalysis::new(Theme::Maturity, status, summary(status), points)
    }
}

fn summary(status: HealthStatus) -> &'static str {
    match status {
        HealthStatus::Critical => {
            "The business is at the beginning of its digital journey; foundations come first."
        }
        HealthStatus::Warning => {
            "Digital practices exist but are not yet consolidated across the business."
        }
        HealthStatus::Good => "The business operates with mature digital practices.",
    }
}

fn maturity_point(maturity: MaturityLevel) -> &'static str {
    match maturity {
        MaturityLevel::Beginner => "The team classifies its digital maturity as beginner.",
        MaturityLevel::Intermediate => "The team classifies its digital maturity as intermediate.",
        MaturityLevel::Advanced => "The team classifies its digital maturity as advanced.",
    }
}

fn automation_point(potential: Level) -> &'static str {
    match potential {
        Level::High => "A large share of current work could be automated.",
        Level::Medium => "Parts of the current work could be automated.",
        Level::Low => "Little of the current work would benefit from automation.",
    }
}

fn scalability_point(potential: Level) -> &'static str {
    match potential {
        Level::High => "The business model could scale well beyond current volume.",
        Level::Medium => "The business model has moderate room to scale.",
        Level::Low => "The business model has limited room to scale as-is.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::answers::RawAnswers;

    fn answers_with(maturity: &str, automation: &str, scalability: &str) -> AnswerSet {
        let raw: RawAnswers = serde_json::from_str(&format!(
            r#"{{
                "has_website": "functional",
                "website_converts": "yes",
                "has_app_system": "yes",
                "uses_digital_tools": "yes",
                "manual_dependency": "low",
                "service_capacity": "ok",
                "referral_dependency": "low",
                "digital_presence": "strong",
                "post_sale_relationship": "structured",
                "maturity_level": "{maturity}",
                "automation_potential": "{automation}",
                "scalability_potential": "{scalability}"
            }}"#
        ))
        .unwrap();
        AnswerSet::from_raw(&raw).unwrap()
    }

    #[test]
    fn beginner_maps_to_critical() {
        let analysis = MaturityEvaluator::evaluate(&answers_with("beginner", "low", "low"));
        assert_eq!(analysis.status, HealthStatus::Critical);
    }

    #[test]
    fn intermediate_maps_to_warning() {
        let analysis = MaturityEvaluator::evaluate(&answers_with("intermediate", "low", "low"));
        assert_eq!(analysis.status, HealthStatus::Warning);
    }

    #[test]
    fn advanced_maps_to_good() {
        let analysis = MaturityEvaluator::evaluate(&answers_with("advanced", "low", "low"));
        assert_eq!(analysis.status, HealthStatus::Good);
    }

    #[test]
    fn points_restate_the_three_answers() {
        let analysis = MaturityEvaluator::evaluate(&answers_with("beginner", "high", "medium"));
        assert_eq!(analysis.points.len(), 3);
        assert!(analysis.points[0].contains("beginner"));
        assert!(analysis.points[1].contains("could be automated"));
        assert!(analysis.points[2].contains("moderate room to scale"));
    }
}
