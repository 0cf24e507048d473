//! Operations evaluator.

use crate::domain::answers::{AnswerSet, Level, ServiceCapacity};
use crate::domain::foundation::{HealthStatus, Theme};

use super::theme_analysis::{resolve_status, StatusRule, ThemeAnalysis};

/// Shown when the bottleneck question was left blank.
const NO_BOTTLENECK_PLACEHOLDER: &str = "No specific operational bottleneck was described.";

/// Decision table. Critical rows before warning rows; first match wins.
const STATUS_RULES: &[StatusRule] = &[
    StatusRule {
        status: HealthStatus::Critical,
        applies: |a| a.organization_level.value() <= 2,
    },
    StatusRule {
        status: HealthStatus::Critical,
        applies: |a| a.manual_dependency == Level::High,
    },
    StatusRule {
        status: HealthStatus::Warning,
        applies: |a| a.organization_level.value() == 3,
    },
    StatusRule {
        status: HealthStatus::Warning,
        applies: |a| a.manual_dependency == Level::Medium,
    },
];

/// Evaluates the Operations theme.
pub struct OperationsEvaluator;

impl OperationsEvaluator {
    /// Pure function: AnswerSet -> ThemeAnalysis.
    pub fn evaluate(answers: &AnswerSet) -> ThemeAnalysis {
        let status = resolve_status(STATUS_RULES, answers);
        let points = vec![
            format!(
                "Process organization self-assessed at {} of 5.",
                answers.organization_level
            ),
            dependency_point(answers.manual_dependency).to_string(),
            bottleneck_point(answers),
            capacity_point(answers.service_capacity).to_string(),
        ];
        ThemeAnalysis::new(Theme::Operations, status, summary(status), points)
    }
}

fn summary(status: HealthStatus) -> &'static str {
    match status {
        HealthStatus::Critical => {
            "The operation runs on improvisation and manual effort; delivery is at risk as volume grows."
        }
        HealthStatus::Warning => {
            "The operation functions, but organization and manual work still limit consistency."
        }
        HealthStatus::Good => "The operation is organized and can absorb growth.",
    }
}

fn dependency_point(dependency: Level) -> &'static str {
    match dependency {
        Level::High => "The operation depends heavily on manual work.",
        Level::Medium => "A meaningful share of the operation is still manual.",
        Level::Low => "Manual work plays a minor role in the operation.",
    }
}

fn bottleneck_point(answers: &AnswerSet) -> String {
    match answers.bottleneck_text() {
        Some(text) => format!("Reported bottleneck: {}.", text),
        None => NO_BOTTLENECK_PLACEHOLDER.to_string(),
    }
}

fn capacity_point(capacity: ServiceCapacity) -> &'static str {
    match capacity {
        ServiceCapacity::Limited => "Service capacity is at its limit.",
        ServiceCapacity::Ok => "Service capacity is adequate for current demand.",
        ServiceCapacity::Scalable => "Service capacity can scale with demand.",
    }
}
