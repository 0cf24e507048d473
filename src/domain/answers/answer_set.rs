//! Normalized AnswerSet and its validator.
//!
//! `AnswerSet::from_raw` is the only way to obtain an `AnswerSet`:
//! required keys must all be present, optional keys are resolved from
//! the central defaults table, and a theme with incomplete required
//! answers refuses evaluation outright.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{OrganizationLevel, Theme, ValidationError};

use super::defaults;
use super::keys;
use super::raw::RawAnswers;
use super::values::{
    AcquisitionChannel, ConversionLevel, DigitalPresence, Level, MaturityLevel,
    PostSaleRelationship, ServiceCapacity, SystemAdoption, ToolAdoption, WebsitePresence,
};

/// Fully-populated, validated questionnaire answers.
///
/// Immutable input shared by every evaluator; the engine never mutates
/// or retains it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerSet {
    // Digital infrastructure
    pub has_website: WebsitePresence,
    pub website_converts: ConversionLevel,
    pub has_app_system: SystemAdoption,
    pub uses_digital_tools: ToolAdoption,

    // Operations
    pub organization_level: OrganizationLevel,
    pub manual_dependency: Level,
    pub operational_bottlenecks: Option<String>,
    pub service_capacity: ServiceCapacity,

    // Acquisition & relationship
    pub main_channels: BTreeSet<AcquisitionChannel>,
    pub referral_dependency: Level,
    pub digital_presence: DigitalPresence,
    pub post_sale_relationship: PostSaleRelationship,

    // Maturity
    pub maturity_level: MaturityLevel,
    pub automation_potential: Level,
    pub scalability_potential: Level,
}

impl AnswerSet {
    /// Validates and normalizes a raw answer record.
    ///
    /// Themes are checked in presentation order; the first theme with
    /// missing required keys fails the whole call, carrying that
    /// theme's complete missing-key list.
    pub fn from_raw(raw: &RawAnswers) -> Result<Self, ValidationError> {
        let (has_website, website_converts, has_app_system, uses_digital_tools) =
            Self::infrastructure_answers(raw)?;
        let (manual_dependency, service_capacity) = Self::operations_answers(raw)?;
        let (referral_dependency, digital_presence, post_sale_relationship) =
            Self::acquisition_answers(raw)?;
        let (maturity_level, automation_potential, scalability_potential) =
            Self::maturity_answers(raw)?;

        Ok(Self {
            has_website,
            website_converts,
            has_app_system,
            uses_digital_tools,
            organization_level: raw
                .organization_level
                .unwrap_or(defaults::DEFAULT_ORGANIZATION_LEVEL),
            manual_dependency,
            operational_bottlenecks: raw.operational_bottlenecks.clone(),
            service_capacity,
            main_channels: raw
                .main_channels
                .clone()
                .unwrap_or_else(defaults::default_channels),
            referral_dependency,
            digital_presence,
            post_sale_relationship,
            maturity_level,
            automation_potential,
            scalability_potential,
        })
    }

    /// Number of acquisition channels actively selected.
    pub fn channel_count(&self) -> usize {
        self.main_channels.len()
    }

    /// The bottleneck free text, if a non-blank answer was given.
    pub fn bottleneck_text(&self) -> Option<&str> {
        self.operational_bottlenecks
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }

    fn infrastructure_answers(
        raw: &RawAnswers,
    ) -> Result<(WebsitePresence, ConversionLevel, SystemAdoption, ToolAdoption), ValidationError>
    {
        match (
            raw.has_website,
            raw.website_converts,
            raw.has_app_system,
            raw.uses_digital_tools,
        ) {
            (Some(website), Some(converts), Some(system), Some(tools)) => {
                Ok((website, converts, system, tools))
            }
            _ => {
                let mut missing = Vec::new();
                if raw.has_website.is_none() {
                    missing.push(keys::HAS_WEBSITE);
                }
                if raw.website_converts.is_none() {
                    missing.push(keys::WEBSITE_CONVERTS);
                }
                if raw.has_app_system.is_none() {
                    missing.push(keys::HAS_APP_SYSTEM);
                }
                if raw.uses_digital_tools.is_none() {
                    missing.push(keys::USES_DIGITAL_TOOLS);
                }
                Err(ValidationError::missing_answers(
                    Theme::Infrastructure,
                    missing,
                ))
            }
        }
    }

    fn operations_answers(raw: &RawAnswers) -> Result<(Level, ServiceCapacity), ValidationError> {
        match (raw.manual_dependency, raw.service_capacity) {
            (Some(dependency), Some(capacity)) => Ok((dependency, capacity)),
            _ => {
                let mut missing = Vec::new();
                if raw.manual_dependency.is_none() {
                    missing.push(keys::MANUAL_DEPENDENCY);
                }
                if raw.service_capacity.is_none() {
                    missing.push(keys::SERVICE_CAPACITY);
                }
                Err(ValidationError::missing_answers(Theme::Operations, missing))
            }
        }
    }

    fn acquisition_answers(
        raw: &RawAnswers,
    ) -> Result<(Level, DigitalPresence, PostSaleRelationship), ValidationError> {
        match (
            raw.referral_dependency,
            raw.digital_presence,
            raw.post_sale_relationship,
        ) {
            (Some(referral), Some(presence), Some(post_sale)) => {
                Ok((referral, presence, post_sale))
            }
            _ => {
                let mut missing = Vec::new();
                if raw.referral_dependency.is_none() {
                    missing.push(keys::REFERRAL_DEPENDENCY);
                }
                if raw.digital_presence.is_none() {
                    missing.push(keys::DIGITAL_PRESENCE);
                }
                if raw.post_sale_relationship.is_none() {
                    missing.push(keys::POST_SALE_RELATIONSHIP);
                }
                Err(ValidationError::missing_answers(
                    Theme::Acquisition,
                    missing,
                ))
            }
        }
    }

    fn maturity_answers(raw: &RawAnswers) -> Result<(MaturityLevel, Level, Level), ValidationError> {
        match (
            raw.maturity_level,
            raw.automation_potential,
            raw.scalability_potential,
        ) {
            (Some(maturity), Some(automation), Some(scalability)) => {
                Ok((maturity, automation, scalability))
            }
            _ => {
                let mut missing = Vec::new();
                if raw.maturity_level.is_none() {
                    missing.push(keys::MATURITY_LEVEL);
                }
                if raw.automation_potential.is_none() {
                    missing.push(keys::AUTOMATION_POTENTIAL);
                }
                if raw.scalability_potential.is_none() {
                    missing.push(keys::SCALABILITY_POTENTIAL);
                }
                Err(ValidationError::missing_answers(Theme::Maturity, missing))
            }
        }
    }
}
