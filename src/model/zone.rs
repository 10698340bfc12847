use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative Glycemic Load bucket derived from a food's rating tag.
///
/// `Unknown` is a regular zone, not an error: any tag that is not one of
/// `low`, `med` or `high` lands here and still has a defined rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    Low,
    Medium,
    High,
    Unknown,
}

impl Zone {
    /// All zones, ordered from lowest to highest load with `Unknown` last.
    pub const ALL: [Zone; 4] = [Zone::Low, Zone::Medium, Zone::High, Zone::Unknown];

    /// Classifies a rating tag that is known to be present.
    pub fn from_rating(rating: &str) -> Self {
        crate::classify::classify_zone(Some(rating))
    }

    /// Human readable label, e.g. `"Medium"`.
    pub fn label(self) -> &'static str {
        match self {
            Zone::Low => "Low",
            Zone::Medium => "Medium",
            Zone::High => "High",
            Zone::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
