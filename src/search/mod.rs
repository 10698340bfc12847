use crate::{Catalog, FoodRecord};
use tracing::debug;

mod model;

pub use model::SearchOutcome;

/// Search the catalog for foods whose name contains `keyword`, ignoring case.
///
/// The keyword is matched literally. Results keep catalog order and are not
/// ranked or deduplicated; an empty keyword returns every named record.
pub fn search<'a>(catalog: &'a Catalog, keyword: &str) -> Vec<&'a FoodRecord> {
    let keyword_lower = keyword.to_lowercase();
    let results: Vec<&FoodRecord> = catalog
        .iter()
        .filter(|record| record.matches(&keyword_lower))
        .collect();

    debug!(keyword, matches = results.len(), "Searched catalog");
    results
}

/// Like [`search`], but returns [`SearchOutcome::NoResults`] when nothing matches.
pub fn search_outcome<'a>(catalog: &'a Catalog, keyword: &str) -> SearchOutcome<'a> {
    search(catalog, keyword).into()
}
