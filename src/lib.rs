pub mod catalog;
pub mod classify;
pub mod detail;
pub mod display;
pub mod ffi;
pub mod model;
pub mod search;

uniffi::setup_scaffolding!();

pub use catalog::{Catalog, CatalogLoadError, CatalogSource};
pub use classify::{classify_zone, gauge_position, GaugeScale, GlBand};
pub use detail::FoodDetail;
pub use model::*;
pub use search::{search, search_outcome, SearchOutcome};
