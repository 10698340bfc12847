use crate::FoodRecord;
use serde::Serialize;

/// Result of a query as handed to a presentation layer.
///
/// `NoResults` is the explicit marker for an empty search, so callers do not
/// have to special-case an empty list themselves.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "records", rename_all = "snake_case")]
pub enum SearchOutcome<'a> {
    Matches(Vec<&'a FoodRecord>),
    NoResults,
}

impl<'a> From<Vec<&'a FoodRecord>> for SearchOutcome<'a> {
    fn from(matches: Vec<&'a FoodRecord>) -> Self {
        if matches.is_empty() {
            SearchOutcome::NoResults
        } else {
            SearchOutcome::Matches(matches)
        }
    }
}

impl<'a> SearchOutcome<'a> {
    /// Matching records in catalog order; empty for `NoResults`.
    pub fn records(&self) -> &[&'a FoodRecord] {
        match self {
            SearchOutcome::Matches(records) => records,
            SearchOutcome::NoResults => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, SearchOutcome::NoResults)
    }
}
