//! Theme enum - the four fixed question groupings of the diagnosis.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four fixed diagnosis themes.
///
/// Declaration order is the fixed presentation order used everywhere a
/// result lists themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Infrastructure,
    Operations,
    Acquisition,
    Maturity,
}

impl Theme {
    /// All themes in presentation order.
    pub const ALL: [Theme; 4] = [
        Theme::Infrastructure,
        Theme::Operations,
        Theme::Acquisition,
        Theme::Maturity,
    ];

    /// Returns the display title for this theme.
    pub fn title(&self) -> &'static str {
        match self {
            Theme::Infrastructure => "Digital Infrastructure",
            Theme::Operations => "Operations",
            Theme::Acquisition => "Acquisition & Relationship",
            Theme::Maturity => "Digital Maturity",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}
