use super::zone::Zone;
use serde::{Deserialize, Serialize};

/// A single row of the food catalog.
///
/// Field names serialize to the catalog's column headers so that a record
/// written out as JSON reads the same as the source table.
///
/// # Examples
///
/// ```
/// use glucosavor::{FoodRecord, Zone};
///
/// let apple = FoodRecord::new("Apple", 36.0, 5.4, "low");
/// assert_eq!(apple.zone(), Zone::Low);
/// assert!(apple.matches("app"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRecord {
    /// Display label. `None` when the source cell was empty.
    #[serde(rename = "Food")]
    pub name: Option<String>,
    /// Glycemic Index
    #[serde(rename = "GI")]
    pub gi: f64,
    /// Glycemic Load
    #[serde(rename = "GL")]
    pub gl: f64,
    /// Raw rating tag as it appeared in the source, untrimmed.
    #[serde(rename = "GL_Rating")]
    pub gl_rating: Option<String>,
}

impl FoodRecord {
    pub fn new(name: impl Into<String>, gi: f64, gl: f64, gl_rating: impl Into<String>) -> Self {
        FoodRecord {
            name: Some(name.into()),
            gi,
            gl,
            gl_rating: Some(gl_rating.into()),
        }
    }

    /// Returns the name, or an empty string when the source had none.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Zone derived from the rating tag.
    pub fn zone(&self) -> Zone {
        crate::classify::classify_zone(self.gl_rating.as_deref())
    }

    /// Returns true if the name contains `keyword_lower`.
    ///
    /// The keyword must already be lowercased; the name is lowercased here.
    /// A record without a name never matches, not even the empty keyword.
    pub fn matches(&self, keyword_lower: &str) -> bool {
        self.name
            .as_deref()
            .map(|name| name.to_lowercase().contains(keyword_lower))
            .unwrap_or(false)
    }
}
