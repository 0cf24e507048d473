//! Answer vocabulary - the closed value domains of the questionnaire.
//!
//! Every categorical question deserializes into one of these enums, so
//! an out-of-domain value is rejected at the boundary and the engine
//! only ever sees legal answers.

use serde::{Deserialize, Serialize};

/// Website presence (`has_website`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WebsitePresence {
    /// No website at all.
    No,
    /// A website exists but has not kept up.
    Outdated,
    /// A current, working website.
    Functional,
}

/// Whether the website turns visitors into business (`website_converts`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionLevel {
    No,
    Partial,
    Yes,
}

/// Proprietary system or app adoption (`has_app_system`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemAdoption {
    No,
    Simple,
    Yes,
}

/// Day-to-day digital tool adoption (`uses_digital_tools`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolAdoption {
    No,
    Few,
    Yes,
}

/// Shared high/medium/low scale.
///
/// Used for manual dependency, referral dependency, automation
/// potential, and scalability potential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    High,
    Medium,
    Low,
}

/// Current service capacity (`service_capacity`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceCapacity {
    /// At its limit; more demand cannot be absorbed.
    Limited,
    /// Adequate for current demand.
    Ok,
    /// Can grow with demand.
    Scalable,
}

/// Acquisition channel (multi-select `main_channels`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcquisitionChannel {
    Organic,
    Paid,
    Social,
    Referral,
    Partnerships,
    Events,
    Cold,
}

impl AcquisitionChannel {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            AcquisitionChannel::Organic => "organic search",
            AcquisitionChannel::Paid => "paid media",
            AcquisitionChannel::Social => "social media",
            AcquisitionChannel::Referral => "referrals",
            AcquisitionChannel::Partnerships => "partnerships",
            AcquisitionChannel::Events => "events",
            AcquisitionChannel::Cold => "cold outreach",
        }
    }
}

/// Digital presence strength (`digital_presence`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DigitalPresence {
    None,
    Limited,
    Strong,
}

/// Post-sale relationship maturity (`post_sale_relationship`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostSaleRelationship {
    None,
    Basic,
    Structured,
}

/// Self-declared digital maturity (`maturity_level`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaturityLevel {
    Beginner,
    Intermediate,
    Advanced,
}
