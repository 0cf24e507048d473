//! PrioritySolutionClassifier - the single headline recommendation.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::answers::AnswerSet;

use super::recommendations::RECOMMENDATION_RULES;

/// The headline solution label, one per diagnosis at most.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrioritySolution {
    Site,
    System,
    ProcessOrganization,
    Positioning,
    RelationshipAutomation,
}

impl PrioritySolution {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            PrioritySolution::Site => "Conversion-focused website",
            PrioritySolution::System => "Internal system and automation",
            PrioritySolution::ProcessOrganization => "Process mapping and organization",
            PrioritySolution::Positioning => "Digital positioning and channel mix",
            PrioritySolution::RelationshipAutomation => "Structured post-sale relationship",
        }
    }
}

impl fmt::Display for PrioritySolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Picks the headline solution for an answer set.
pub struct PriorityClassifier;

impl PriorityClassifier {
    /// Returns the label of the highest-priority matching
    /// recommendation rule, or `None` when no rule matches.
    ///
    /// Walks the same table the selector emits from, so the single
    /// pick can never contradict the full list.
    pub fn classify(answers: &AnswerSet) -> Option<PrioritySolution> {
        RECOMMENDATION_RULES
            .iter()
            .find(|rule| (rule.applies)(answers))
            .map(|rule| rule.solution)
    }
}
