//! Raw answer record as submitted by the questionnaire.
//!
//! Every field is optional; the validator decides which absences are
//! legal. Field names are exactly the question keys, so the record
//! deserializes directly from the questionnaire payload.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::OrganizationLevel;

use super::values::{
    AcquisitionChannel, ConversionLevel, DigitalPresence, Level, MaturityLevel,
    PostSaleRelationship, ServiceCapacity, SystemAdoption, ToolAdoption, WebsitePresence,
};

/// The raw questionnaire answers, before validation and defaulting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawAnswers {
    // Digital infrastructure
    pub has_website: Option<WebsitePresence>,
    pub website_converts: Option<ConversionLevel>,
    pub has_app_system: Option<SystemAdoption>,
    pub uses_digital_tools: Option<ToolAdoption>,

    // Operations
    pub organization_level: Option<OrganizationLevel>,
    pub manual_dependency: Option<Level>,
    pub operational_bottlenecks: Option<String>,
    pub service_capacity: Option<ServiceCapacity>,

    // Acquisition & relationship
    pub main_channels: Option<BTreeSet<AcquisitionChannel>>,
    pub referral_dependency: Option<Level>,
    pub digital_presence: Option<DigitalPresence>,
    pub post_sale_relationship: Option<PostSaleRelationship>,

    // Maturity
    pub maturity_level: Option<MaturityLevel>,
    pub automation_potential: Option<Level>,
    pub scalability_potential: Option<Level>,
}
