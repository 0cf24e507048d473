//! Digital Infrastructure evaluator.

use crate::domain::answers::{
    AnswerSet, ConversionLevel, SystemAdoption, ToolAdoption, WebsitePresence,
};
use crate::domain::foundation::{HealthStatus, Theme};

use super::theme_analysis::{resolve_status, StatusRule, ThemeAnalysis};

/// Decision table. Critical rows before warning rows; first match wins.
const STATUS_RULES: &[StatusRule] = &[
    StatusRule {
        status: HealthStatus::Critical,
        applies: |a| a.has_website == WebsitePresence::No,
    },
    StatusRule {
        status: HealthStatus::Critical,
        applies: |a| a.website_converts == ConversionLevel::No,
    },
    StatusRule {
        status: HealthStatus::Warning,
        applies: |a| a.has_website == WebsitePresence::Outdated,
    },
    StatusRule {
        status: HealthStatus::Warning,
        applies: |a| a.website_converts == ConversionLevel::Partial,
    },
];

/// Evaluates the Digital Infrastructure theme.
pub struct InfrastructureEvaluator;

impl InfrastructureEvaluator {
    /// Pure function: AnswerSet -> ThemeAnalysis.
    pub fn evaluate(answers: &AnswerSet) -> ThemeAnalysis {
        let status = resolve_status(STATUS_RULES, answers);
        let points = vec![
            website_point(answers.has_website).to_string(),
            conversion_point(answers.website_converts).to_string(),
            system_point(answers.has_app_system).to_string(),
            tools_point(answers.uses_digital_tools).to_string(),
        ];
        ThemeAnalysis::new(Theme::Infrastructure, status, summary(status), points)
    }
}

fn summary(status: HealthStatus) -> &'static str {
    match status {
        HealthStatus::Critical => {
            "The digital foundation is holding the business back and needs immediate attention."
        }
        HealthStatus::Warning => {
            "The digital foundation works, but it is leaving conversions on the table."
        }
        HealthStatus::Good => "The digital foundation is solid and ready to build on.",
    }
}

fn website_point(presence: WebsitePresence) -> &'static str {
    match presence {
        WebsitePresence::No => "The business has no website of its own.",
        WebsitePresence::Outdated => "The website exists but has fallen out of date.",
        WebsitePresence::Functional => "The website is current and working.",
    }
}

fn conversion_point(conversion: ConversionLevel) -> &'static str {
    match conversion {
        ConversionLevel::No => "The website does not turn visitors into leads or sales.",
        ConversionLevel::Partial => "The website converts visitors only occasionally.",
        ConversionLevel::Yes => "The website consistently converts visitors into business.",
    }
}

fn system_point(system: SystemAdoption) -> &'static str {
    match system {
        SystemAdoption::No => "No proprietary system or app supports the operation.",
        SystemAdoption::Simple => "A simple internal system or app is in place.",
        SystemAdoption::Yes => "A proprietary system or app supports the operation.",
    }
}

fn tools_point(tools: ToolAdoption) -> &'static str {
    match tools {
        ToolAdoption::No => "Day-to-day work happens without digital tools.",
        ToolAdoption::Few => "Only a few digital tools are in use.",
        ToolAdoption::Yes => "Digital tools are used throughout the operation.",
    }
}
