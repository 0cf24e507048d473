//! RecommendationSelector - ordered, guarded recommendation rules.
//!
//! The rule table is the single source of truth for recommendation
//! priority: the selector emits every matching rule in table order, and
//! the priority classifier reads the first matching row of the same
//! table, so the two can never disagree.

use serde::{Deserialize, Serialize};

use crate::domain::answers::{
    AnswerSet, ConversionLevel, DigitalPresence, Level, PostSaleRelationship, SystemAdoption,
    WebsitePresence,
};

use super::priority::PrioritySolution;

/// A justified, actionable intervention suggested by the diagnosis.
///
/// `target_action` is an opaque slug the caller maps onto its own
/// action catalog (proposal templates, project types, and so on).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub title: String,
    pub description: String,
    pub justification: String,
    pub target_action: String,
}

/// One guarded recommendation rule.
///
/// `justify` derives the justification sentence from the answers that
/// actually triggered the guard; it is only called when `applies` holds.
pub(crate) struct RecommendationRule {
    pub solution: PrioritySolution,
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub target_action: &'static str,
    pub applies: fn(&AnswerSet) -> bool,
    pub justify: fn(&AnswerSet) -> String,
}

/// The fixed rule table, in priority order: site first, then internal
/// systems, process organization, positioning, and finally marketing
/// automation.
pub(crate) const RECOMMENDATION_RULES: &[RecommendationRule] = &[
    RecommendationRule {
        solution: PrioritySolution::Site,
        id: "rec-site",
        title: "Conversion-focused website",
        description: "Build or rebuild the website around a clear conversion path for visitors.",
        target_action: "site_project",
        applies: |a| {
            a.has_website != WebsitePresence::Functional || a.website_converts == ConversionLevel::No
        },
        justify: |a| {
            if a.has_website == WebsitePresence::No {
                "The business has no website, so every digital effort lacks a destination."
                    .to_string()
            } else if a.has_website == WebsitePresence::Outdated {
                "The current website is outdated and undermines credibility with prospects."
                    .to_string()
            } else {
                "The website receives visitors but does not convert them into business."
                    .to_string()
            }
        },
    },
    RecommendationRule {
        solution: PrioritySolution::System,
        id: "rec-system",
        title: "Internal system and automation",
        description: "Introduce a proprietary system to absorb repetitive operational work.",
        target_action: "system_project",
        applies: |a| {
            a.has_app_system == SystemAdoption::No
                && (a.automation_potential == Level::High || a.manual_dependency == Level::High)
        },
        justify: |a| {
            if a.manual_dependency == Level::High {
                "Routine work is done by hand even though a system could absorb it.".to_string()
            } else {
                "Automation potential is high and no internal system captures it yet.".to_string()
            }
        },
    },
    RecommendationRule {
        solution: PrioritySolution::ProcessOrganization,
        id: "rec-process",
        title: "Process mapping and organization",
        description: "Map, document, and standardize the core operational processes.",
        target_action: "process_project",
        applies: |a| a.organization_level.value() <= 2 || a.manual_dependency == Level::High,
        justify: |a| {
            if a.organization_level.value() <= 2 {
                format!(
                    "Process organization is rated {} of 5, below the minimum for stable delegation.",
                    a.organization_level
                )
            } else {
                "High manual dependency signals processes that only live in people's heads."
                    .to_string()
            }
        },
    },
    RecommendationRule {
        solution: PrioritySolution::Positioning,
        id: "rec-positioning",
        title: "Digital positioning and channel mix",
        description: "Establish a findable digital presence and diversify acquisition beyond referrals.",
        target_action: "positioning_project",
        applies: |a| {
            a.digital_presence == DigitalPresence::None
                || (a.referral_dependency == Level::High && a.channel_count() <= 1)
        },
        justify: |a| {
            if a.digital_presence == DigitalPresence::None {
                "The business has no digital presence where prospects could find it.".to_string()
            } else {
                "Acquisition leans on referrals through a single channel, a fragile position."
                    .to_string()
            }
        },
    },
    RecommendationRule {
        solution: PrioritySolution::RelationshipAutomation,
        id: "rec-relationship",
        title: "Structured post-sale relationship",
        description: "Set up a structured post-sale routine with automated follow-ups.",
        target_action: "relationship_project",
        applies: |a| a.post_sale_relationship != PostSaleRelationship::Structured,
        justify: |a| {
            if a.post_sale_relationship == PostSaleRelationship::None {
                "There is no post-sale relationship, so repeat business is left to chance."
                    .to_string()
            } else {
                "Post-sale contact is only basic and does not nurture repeat business."
                    .to_string()
            }
        },
    },
];

/// Evaluates the recommendation rule table against an answer set.
pub struct RecommendationSelector;

impl RecommendationSelector {
    /// Emits every matching recommendation, in priority order.
    ///
    /// This is "every match, in priority order," not "first match
    /// wins": identical input always produces an identical id sequence,
    /// bounded by the fixed rule count.
    pub fn select(answers: &AnswerSet) -> Vec<Recommendation> {
        RECOMMENDATION_RULES
            .iter()
            .filter(|rule| (rule.applies)(answers))
            .map(|rule| Recommendation {
                id: rule.id.to_string(),
                title: rule.title.to_string(),
                description: rule.description.to_string(),
                justification: (rule.justify)(answers),
                target_action: rule.target_action.to_string(),
            })
            .collect()
    }
}
