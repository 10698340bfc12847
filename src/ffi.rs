//! UniFFI bindings for cross-platform support (iOS, Android, desktop GUIs).
//!
//! This module provides FFI-safe types and functions for use with UniFFI.
//! Borrowed library types are converted to owned records at the boundary.

use crate::catalog::{Catalog, CatalogLoadError};
use crate::classify::{
    classify_zone as classify_zone_internal, gauge_position as gauge_position_internal,
    GaugeScale,
};
use crate::detail::FoodDetail;
use crate::model::{FoodRecord, Zone};
use crate::search::{search as search_internal, SearchOutcome};
use std::sync::Arc;

/// FFI-safe error type for catalog loading.
#[derive(Debug, uniffi::Error, thiserror::Error)]
pub enum GlucoError {
    #[error("Catalog not found: {message}")]
    NotFound { message: String },

    #[error("IO error: {message}")]
    IoError { message: String },

    #[error("Schema error: {message}")]
    SchemaError { message: String },

    #[error("Parse error: {message}")]
    ParseError { message: String },
}

impl From<CatalogLoadError> for GlucoError {
    fn from(e: CatalogLoadError) -> Self {
        let message = e.to_string();
        match e {
            CatalogLoadError::NotFound(_) => GlucoError::NotFound { message },
            CatalogLoadError::Io(_) => GlucoError::IoError { message },
            CatalogLoadError::MissingColumn(_)
            | CatalogLoadError::InvalidValue { .. }
            | CatalogLoadError::MissingValue { .. } => GlucoError::SchemaError { message },
            CatalogLoadError::Parse(_) => GlucoError::ParseError { message },
        }
    }
}

/// FFI-safe zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiZone {
    Low,
    Medium,
    High,
    Unknown,
}

impl From<Zone> for FfiZone {
    fn from(zone: Zone) -> Self {
        match zone {
            Zone::Low => FfiZone::Low,
            Zone::Medium => FfiZone::Medium,
            Zone::High => FfiZone::High,
            Zone::Unknown => FfiZone::Unknown,
        }
    }
}

/// FFI-safe representation of a catalog row.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiFoodRecord {
    pub name: Option<String>,
    pub gi: f64,
    pub gl: f64,
    pub gl_rating: Option<String>,
    /// Zone derived from `gl_rating`
    pub zone: FfiZone,
}

impl From<&FoodRecord> for FfiFoodRecord {
    fn from(r: &FoodRecord) -> Self {
        FfiFoodRecord {
            name: r.name.clone(),
            gi: r.gi,
            gl: r.gl,
            gl_rating: r.gl_rating.clone(),
            zone: r.zone().into(),
        }
    }
}

impl From<FfiFoodRecord> for FoodRecord {
    fn from(r: FfiFoodRecord) -> Self {
        FoodRecord {
            name: r.name,
            gi: r.gi,
            gl: r.gl,
            gl_rating: r.gl_rating,
        }
    }
}

/// FFI-safe search result, with an explicit marker for an empty search.
#[derive(Debug, Clone, PartialEq, uniffi::Enum)]
pub enum FfiSearchOutcome {
    Matches { records: Vec<FfiFoodRecord> },
    NoResults,
}

impl From<SearchOutcome<'_>> for FfiSearchOutcome {
    fn from(outcome: SearchOutcome<'_>) -> Self {
        match outcome {
            SearchOutcome::Matches(records) => FfiSearchOutcome::Matches {
                records: records.into_iter().map(FfiFoodRecord::from).collect(),
            },
            SearchOutcome::NoResults => FfiSearchOutcome::NoResults,
        }
    }
}

/// FFI-safe representation of the detail view.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiFoodDetail {
    pub name: Option<String>,
    pub gi: f64,
    pub gl: f64,
    pub gl_rating: Option<String>,
    pub zone: FfiZone,
    pub scale_min: f64,
    pub scale_max: f64,
    /// Marker position on the gauge, in `[0, 1]`
    pub gauge_position: f64,
    /// The whole detail as JSON for hosts that prefer it
    pub raw_json: String,
}

impl From<&FoodDetail> for FfiFoodDetail {
    fn from(d: &FoodDetail) -> Self {
        let raw_json = serde_json::to_string(d).unwrap_or_default();

        FfiFoodDetail {
            name: d.name.clone(),
            gi: d.gi,
            gl: d.gl,
            gl_rating: d.gl_rating.clone(),
            zone: d.zone.into(),
            scale_min: d.scale.min,
            scale_max: d.scale.max,
            gauge_position: d.gauge_position,
            raw_json,
        }
    }
}

/// FFI-safe handle to a loaded, read-only catalog.
#[derive(uniffi::Object)]
pub struct FfiCatalog {
    inner: Catalog,
}

#[uniffi::export]
impl FfiCatalog {
    /// Returns the number of records.
    pub fn len(&self) -> u64 {
        self.inner.len() as u64
    }

    /// Returns true if the catalog has no records.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns where the catalog was loaded from.
    pub fn source(&self) -> String {
        self.inner.source().to_string()
    }

    /// Returns all records in catalog order.
    pub fn records(&self) -> Vec<FfiFoodRecord> {
        self.inner.iter().map(FfiFoodRecord::from).collect()
    }

    /// Returns the record at `index`, if any.
    pub fn get(&self, index: u64) -> Option<FfiFoodRecord> {
        self.inner.get(index as usize).map(FfiFoodRecord::from)
    }

    /// Case-insensitive substring search over food names.
    ///
    /// An empty list means no results.
    pub fn search(&self, keyword: String) -> Vec<FfiFoodRecord> {
        search_internal(&self.inner, &keyword)
            .into_iter()
            .map(FfiFoodRecord::from)
            .collect()
    }

    /// Same as `search`, but reports `NoResults` instead of an empty list.
    pub fn search_outcome(&self, keyword: String) -> FfiSearchOutcome {
        SearchOutcome::from(search_internal(&self.inner, &keyword)).into()
    }
}

// ============================================================================
// Exported FFI Functions
// ============================================================================

/// Loads a catalog from a delimited file with `Food`, `GI`, `GL` and
/// `GL_Rating` columns.
#[uniffi::export]
pub fn load_catalog(path: String) -> Result<Arc<FfiCatalog>, GlucoError> {
    let catalog = Catalog::from_path(path.as_str())?;
    Ok(Arc::new(FfiCatalog { inner: catalog }))
}

/// Parses a catalog from table content, e.g. an asset bundled with the app.
#[uniffi::export]
pub fn catalog_from_content(content: String) -> Result<Arc<FfiCatalog>, GlucoError> {
    let catalog = Catalog::from_content(content)?;
    Ok(Arc::new(FfiCatalog { inner: catalog }))
}

/// Maps a rating tag to its zone. Never fails.
#[uniffi::export]
pub fn classify_zone(rating: Option<String>) -> FfiZone {
    classify_zone_internal(rating.as_deref()).into()
}

/// Position of a GL value on a bounded scale, clamped to `[0, 1]`.
#[uniffi::export]
pub fn gauge_position(gl_value: f64, scale_min: f64, scale_max: f64) -> f64 {
    gauge_position_internal(gl_value, scale_min, scale_max)
}

/// Builds the detail view for a selected record on the default `0..30` scale.
#[uniffi::export]
pub fn food_detail(record: FfiFoodRecord) -> FfiFoodDetail {
    let record = FoodRecord::from(record);
    FfiFoodDetail::from(&FoodDetail::with_scale(&record, GaugeScale::default()))
}

/// Returns the library version.
#[uniffi::export]
pub fn library_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
