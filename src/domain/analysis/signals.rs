//! SignalAggregator - cross-theme trigger rules.
//!
//! Scans the whole answer set with one fixed, ordered rule table and
//! produces the flat critical-point and opportunity lists. Wording is
//! kept independent of the theme evaluators' wording; the two must not
//! be unified.

use serde::{Deserialize, Serialize};

use crate::domain::answers::{
    AnswerSet, ConversionLevel, DigitalPresence, Level, PostSaleRelationship, ServiceCapacity,
    SystemAdoption, WebsitePresence,
};

/// Which list a trigger feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    CriticalPoint,
    Opportunity,
}

/// One cross-theme trigger: a predicate over the whole answer set and
/// the message it contributes when satisfied.
pub struct TriggerRule {
    pub kind: SignalKind,
    pub message: &'static str,
    pub applies: fn(&AnswerSet) -> bool,
}

/// The fixed trigger table, evaluated once per rule, in order.
pub const TRIGGER_RULES: &[TriggerRule] = &[
    // Critical points
    TriggerRule {
        kind: SignalKind::CriticalPoint,
        message: "Missing website: the business is invisible to customers searching online.",
        applies: |a| a.has_website == WebsitePresence::No,
    },
    TriggerRule {
        kind: SignalKind::CriticalPoint,
        message: "The current website attracts visitors but does not convert them.",
        applies: |a| {
            a.has_website != WebsitePresence::No && a.website_converts == ConversionLevel::No
        },
    },
    TriggerRule {
        kind: SignalKind::CriticalPoint,
        message: "High dependency on manual work exposes the operation to errors and burnout.",
        applies: |a| a.manual_dependency == Level::High,
    },
    TriggerRule {
        kind: SignalKind::CriticalPoint,
        message: "Largely unstructured processes make growth chaotic.",
        applies: |a| a.organization_level.value() <= 2,
    },
    TriggerRule {
        kind: SignalKind::CriticalPoint,
        message: "Customer acquisition is concentrated on referrals with almost no other channel.",
        applies: |a| a.referral_dependency == Level::High && a.channel_count() <= 1,
    },
    TriggerRule {
        kind: SignalKind::CriticalPoint,
        message: "Service capacity is maxed out, capping revenue growth.",
        applies: |a| a.service_capacity == ServiceCapacity::Limited,
    },
    // Opportunities
    TriggerRule {
        kind: SignalKind::Opportunity,
        message: "High automation potential: repetitive work can be systematized quickly.",
        applies: |a| a.automation_potential == Level::High,
    },
    TriggerRule {
        kind: SignalKind::Opportunity,
        message: "High scalability potential: the offer can grow without growing costs in step.",
        applies: |a| a.scalability_potential == Level::High,
    },
    TriggerRule {
        kind: SignalKind::Opportunity,
        message: "No internal system yet, so early systematization gains are still available.",
        applies: |a| a.has_app_system == SystemAdoption::No,
    },
    TriggerRule {
        kind: SignalKind::Opportunity,
        message: "Digital presence can be expanded to reach audiences competitors already serve.",
        applies: |a| a.digital_presence != DigitalPresence::Strong,
    },
    TriggerRule {
        kind: SignalKind::Opportunity,
        message: "Post-sale relationship can be structured to drive repeat business.",
        applies: |a| a.post_sale_relationship != PostSaleRelationship::Structured,
    },
];

/// The two aggregate lists produced by a scan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignalSummary {
    pub critical_points: Vec<String>,
    pub opportunities: Vec<String>,
}

/// Scans the answer set with the trigger table.
pub struct SignalAggregator;

impl SignalAggregator {
    /// Evaluates every trigger once, in table order, deduplicating
    /// messages while preserving first-occurrence order.
    pub fn aggregate(answers: &AnswerSet) -> SignalSummary {
        let mut summary = SignalSummary::default();
        for rule in TRIGGER_RULES {
            if !(rule.applies)(answers) {
                continue;
            }
            let bucket = match rule.kind {
                SignalKind::CriticalPoint => &mut summary.critical_points,
                SignalKind::Opportunity => &mut summary.opportunities,
            };
            if !bucket.iter().any(|message| message == rule.message) {
                bucket.push(rule.message.to_string());
            }
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::answers::RawAnswers;

    fn healthy_answers() -> AnswerSet {
        let raw: RawAnswers = serde_json::from_str(
            r#"{
                "has_website": "functional",
                "website_converts": "yes",
                "has_app_system": "yes",
                "uses_digital_tools": "yes",
                "organization_level": 5,
                "manual_dependency": "low",
                "service_capacity": "scalable",
                "main_channels": ["organic", "paid", "events"],
                "referral_dependency": "low",
                "digital_presence": "strong",
                "post_sale_relationship": "structured",
                "maturity_level": "advanced",
                "automation_potential": "low",
                "scalability_potential": "low"
            }"#,
        )
        .unwrap();
        AnswerSet::from_raw(&raw).unwrap()
    }

    fn struggling_answers() -> AnswerSet {
        let raw: RawAnswers = serde_json::from_str(
            r#"{
                "has_website": "no",
                "website_converts": "no",
                "has_app_system": "no",
                "uses_digital_tools": "no",
                "organization_level": 1,
                "manual_dependency": "high",
                "service_capacity": "limited",
                "main_channels": ["referral"],
                "referral_dependency": "high",
                "digital_presence": "none",
                "post_sale_relationship": "none",
                "maturity_level": "beginner",
                "automation_potential": "high",
                "scalability_potential": "low"
            }"#,
        )
        .unwrap();
        AnswerSet::from_raw(&raw).unwrap()
    }

    #[test]
    fn healthy_business_raises_no_critical_points() {
        let summary = SignalAggregator::aggregate(&healthy_answers());
        assert!(summary.critical_points.is_empty());
        assert!(summary.opportunities.is_empty());
    }

    #[test]
    fn struggling_business_raises_the_expected_critical_points() {
        let summary = SignalAggregator::aggregate(&struggling_answers());
        assert!(summary
            .critical_points
            .iter()
            .any(|point| point.contains("Missing website")));
        assert!(summary
            .critical_points
            .iter()
            .any(|point| point.contains("manual work")));
        assert!(summary
            .critical_points
            .iter()
            .any(|point| point.contains("concentrated on referrals")));
        assert!(summary
            .critical_points
            .iter()
            .any(|point| point.contains("capacity is maxed out")));
    }

    #[test]
    fn website_conversion_trigger_requires_a_website() {
        // With no website at all, the no-conversion trigger stays
        // silent; the missing-website trigger covers it.
        let summary = SignalAggregator::aggregate(&struggling_answers());
        assert!(!summary
            .critical_points
            .iter()
            .any(|point| point.contains("does not convert")));
    }

    #[test]
    fn high_automation_potential_is_an_opportunity() {
        let summary = SignalAggregator::aggregate(&struggling_answers());
        assert!(summary
            .opportunities
            .iter()
            .any(|opp| opp.contains("automation potential")));
    }

    #[test]
    fn lists_preserve_table_order() {
        let summary = SignalAggregator::aggregate(&struggling_answers());
        // Missing website is the first critical trigger in the table.
        assert!(summary.critical_points[0].contains("Missing website"));
    }

    #[test]
    fn messages_are_never_duplicated() {
        let summary = SignalAggregator::aggregate(&struggling_answers());
        let mut seen = std::collections::HashSet::new();
        for point in summary
            .critical_points
            .iter()
            .chain(summary.opportunities.iter())
        {
            assert!(seen.insert(point.clone()), "duplicate message: {point}");
        }
    }

    #[test]
    fn aggregation_is_deterministic() {
        let answers = struggling_answers();
        assert_eq!(
            SignalAggregator::aggregate(&answers),
            SignalAggregator::aggregate(&answers)
        );
    }
}
