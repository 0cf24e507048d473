//! Question key constants - single source of truth for key names.
//!
//! Validation errors and the raw record's serde field names both refer
//! to these literals.

pub const HAS_WEBSITE: &str = "has_website";
pub const WEBSITE_CONVERTS: &str = "website_converts";
pub const HAS_APP_SYSTEM: &str = "has_app_system";
pub const USES_DIGITAL_TOOLS: &str = "uses_digital_tools";

pub const ORGANIZATION_LEVEL: &str = "organization_level";
pub const MANUAL_DEPENDENCY: &str = "manual_dependency";
pub const OPERATIONAL_BOTTLENECKS: &str = "operational_bottlenecks";
pub const SERVICE_CAPACITY: &str = "service_capacity";

pub const MAIN_CHANNELS: &str = "main_channels";
pub const REFERRAL_DEPENDENCY: &str = "referral_dependency";
pub const DIGITAL_PRESENCE: &str = "digital_presence";
pub const POST_SALE_RELATIONSHIP: &str = "post_sale_relationship";

pub const MATURITY_LEVEL: &str = "maturity_level";
pub const AUTOMATION_POTENTIAL: &str = "automation_potential";
pub const SCALABILITY_POTENTIAL: &str = "scalability_potential";

/// Required keys per theme, used to report complete missing-key lists.
pub const REQUIRED_INFRASTRUCTURE: &[&str] = &[
    HAS_WEBSITE,
    WEBSITE_CONVERTS,
    HAS_APP_SYSTEM,
    USES_DIGITAL_TOOLS,
];

pub const REQUIRED_OPERATIONS: &[&str] = &[MANUAL_DEPENDENCY, SERVICE_CAPACITY];

pub const REQUIRED_ACQUISITION: &[&str] = &[
    REFERRAL_DEPENDENCY,
    DIGITAL_PRESENCE,
    POST_SALE_RELATIONSHIP,
];

pub const REQUIRED_MATURITY: &[&str] = &[
    MATURITY_LEVEL,
    AUTOMATION_POTENTIAL,
    SCALABILITY_POTENTIAL,
];
