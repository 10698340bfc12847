//! Detail view of a single selected food.

use crate::classify::GaugeScale;
use crate::model::{FoodRecord, Zone};
use serde::Serialize;

/// The four fields of a record together with everything derived from them
/// that a detail view needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodDetail {
    pub name: Option<String>,
    pub gi: f64,
    pub gl: f64,
    pub gl_rating: Option<String>,
    pub zone: Zone,
    pub scale: GaugeScale,
    /// Where `gl` sits on `scale`, in `[0, 1]`.
    pub gauge_position: f64,
}

impl FoodDetail {
    pub fn from_record(record: &FoodRecord) -> Self {
        Self::with_scale(record, GaugeScale::default())
    }

    pub fn with_scale(record: &FoodRecord, scale: GaugeScale) -> Self {
        FoodDetail {
            name: record.name.clone(),
            gi: record.gi,
            gl: record.gl,
            gl_rating: record.gl_rating.clone(),
            zone: record.zone(),
            scale,
            gauge_position: scale.position(record.gl),
        }
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

impl From<&FoodRecord> for FoodDetail {
    fn from(record: &FoodRecord) -> Self {
        FoodDetail::from_record(record)
    }
}
