//! Catalog loading.
//!
//! The catalog is read once from a comma-delimited table with a header row
//! and is immutable afterwards. Any problem with the source is reported as a
//! [`CatalogLoadError`]; callers are expected to treat it as fatal.

use crate::model::{FoodRecord, Zone};
use camino::{Utf8Path, Utf8PathBuf};
use polars::prelude::*;
use std::fmt;
use std::io::Cursor;
use thiserror::Error;
use tracing::{debug, warn};

pub const FOOD_COLUMN: &str = "Food";
pub const GI_COLUMN: &str = "GI";
pub const GL_COLUMN: &str = "GL";
pub const RATING_COLUMN: &str = "GL_Rating";

/// Errors that can occur while loading a catalog.
#[derive(Error, Debug)]
pub enum CatalogLoadError {
    #[error("Catalog file not found: {0}")]
    NotFound(Utf8PathBuf),

    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog is missing required column: {0}")]
    MissingColumn(String),

    #[error("Column {column} contains a non-numeric value: {reason}")]
    InvalidValue { column: String, reason: String },

    #[error("Column {column} is empty in data row {row}")]
    MissingValue { column: String, row: usize },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] PolarsError),
}

/// Where a catalog was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Path(Utf8PathBuf),
    Content,
    Memory,
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Path(path) => write!(f, "{path}"),
            CatalogSource::Content => f.write_str("<content>"),
            CatalogSource::Memory => f.write_str("<memory>"),
        }
    }
}

/// An ordered, read-only collection of food records.
///
/// Row order is the order of the source table and is never changed, so
/// search results come back in catalog order. Share between threads with
/// `Arc<Catalog>`.
///
/// # Examples
///
/// ```no_run
/// use glucosavor::{search, Catalog};
///
/// let catalog = Catalog::from_path("gi_gl_data.csv")?;
/// for food in search(&catalog, "apple") {
///     println!("{} -> {}", food.display_name(), food.zone());
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<FoodRecord>,
    source: CatalogSource,
}

impl Catalog {
    /// Loads a catalog from a delimited file on disk.
    pub fn from_path<P: AsRef<Utf8Path>>(path: P) -> Result<Self, CatalogLoadError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(CatalogLoadError::NotFound(path.to_path_buf()));
        }

        let bytes = std::fs::read(path)?;
        let catalog = parse_table(bytes, CatalogSource::Path(path.to_path_buf()))?;
        debug!(path = %path, records = catalog.len(), "Loaded catalog");
        Ok(catalog)
    }

    /// Parses a catalog from table content held in memory.
    pub fn from_content(content: impl Into<String>) -> Result<Self, CatalogLoadError> {
        let catalog = parse_table(content.into().into_bytes(), CatalogSource::Content)?;
        debug!(records = catalog.len(), "Parsed catalog content");
        Ok(catalog)
    }

    /// Builds a catalog from records that are already typed.
    pub fn from_records(records: Vec<FoodRecord>) -> Self {
        Catalog {
            records,
            source: CatalogSource::Memory,
        }
    }

    pub fn records(&self) -> &[FoodRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FoodRecord> {
        self.records.iter()
    }

    pub fn get(&self, index: usize) -> Option<&FoodRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a FoodRecord;
    type IntoIter = std::slice::Iter<'a, FoodRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn parse_table(bytes: Vec<u8>, source: CatalogSource) -> Result<Catalog, CatalogLoadError> {
    // Every cell is read as text; numeric typing happens in `numeric_column`.
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()?;

    let names = text_column(&df, FOOD_COLUMN)?;
    let gi = numeric_column(&df, GI_COLUMN)?;
    let gl = numeric_column(&df, GL_COLUMN)?;
    let ratings = text_column(&df, RATING_COLUMN)?;

    let records: Vec<FoodRecord> = names
        .into_iter()
        .zip(gi)
        .zip(gl)
        .zip(ratings)
        .map(|(((name, gi), gl), gl_rating)| FoodRecord {
            name,
            gi,
            gl,
            gl_rating,
        })
        .collect();

    let unrated = records
        .iter()
        .filter(|r| r.zone() == Zone::Unknown)
        .count();
    if unrated > 0 {
        warn!(
            source = %source,
            count = unrated,
            "Catalog has records with an unrecognised GL rating"
        );
    }

    Ok(Catalog { records, source })
}

fn require_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Series, CatalogLoadError> {
    df.column(name)
        .map(|column| column.as_materialized_series())
        .map_err(|_| CatalogLoadError::MissingColumn(name.to_string()))
}

fn text_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>, CatalogLoadError> {
    let series = require_column(df, name)?.cast(&DataType::String)?;
    let values = series
        .str()?
        .into_iter()
        .map(|value| value.map(str::to_string))
        .collect();
    Ok(values)
}

fn numeric_column(df: &DataFrame, name: &str) -> Result<Vec<f64>, CatalogLoadError> {
    let series = require_column(df, name)?
        .strict_cast(&DataType::Float64)
        .map_err(|e| CatalogLoadError::InvalidValue {
            column: name.to_string(),
            reason: e.to_string(),
        })?;

    series
        .f64()?
        .into_iter()
        .enumerate()
        .map(|(row, value)| {
            value.ok_or_else(|| CatalogLoadError::MissingValue {
                column: name.to_string(),
                row: row + 1,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use std::fs;
    use tempfile::TempDir;

    const SAMPLE: &str = indoc! {"
        Food,GI,GL,GL_Rating
        Apple,36,5.4,low
        White Bread,75,10,high
        apple pie,40,12,med
    "};

    #[test]
    fn test_from_content_preserves_order() {
        let catalog = Catalog::from_content(SAMPLE).unwrap();

        assert_eq!(catalog.len(), 3);
        assert_eq!(*catalog.source(), CatalogSource::Content);
        let names: Vec<&str> = catalog.iter().map(|r| r.display_name()).collect();
        assert_eq!(names, vec!["Apple", "White Bread", "apple pie"]);
    }

    #[test]
    fn test_numeric_columns_accept_integers_and_decimals() {
        let catalog = Catalog::from_content(SAMPLE).unwrap();

        let apple = catalog.get(0).unwrap();
        assert_eq!(apple.gi, 36.0);
        assert_eq!(apple.gl, 5.4);
        assert_eq!(apple.gl_rating.as_deref(), Some("low"));
    }

    #[test]
    fn test_extra_columns_and_order_ignored() {
        let content = indoc! {"
            GL_Rating,Notes,GL,Food,GI
            high,toasted,10,White Bread,75
        "};
        let catalog = Catalog::from_content(content).unwrap();

        let bread = catalog.get(0).unwrap();
        assert_eq!(bread.display_name(), "White Bread");
        assert_eq!(bread.gi, 75.0);
        assert_eq!(bread.zone(), Zone::High);
    }

    #[test]
    fn test_missing_column() {
        let content = indoc! {"
            Food,GI,GL
            Apple,36,5.4
        "};
        let err = Catalog::from_content(content).unwrap_err();
        assert!(matches!(err, CatalogLoadError::MissingColumn(ref c) if c == "GL_Rating"));
    }

    #[test]
    fn test_non_numeric_value_rejected() {
        let content = indoc! {"
            Food,GI,GL,GL_Rating
            Apple,thirty-six,5.4,low
        "};
        let err = Catalog::from_content(content).unwrap_err();
        assert!(matches!(err, CatalogLoadError::InvalidValue { ref column, .. } if column == "GI"));
    }

    #[test]
    fn test_empty_numeric_cell_rejected() {
        let content = indoc! {"
            Food,GI,GL,GL_Rating
            Apple,36,5.4,low
            Pear,38,,low
        "};
        let err = Catalog::from_content(content).unwrap_err();
        assert!(matches!(
            err,
            CatalogLoadError::MissingValue { ref column, row: 2 } if column == "GL"
        ));
    }

    #[test]
    fn test_empty_text_cells_tolerated() {
        let content = indoc! {"
            Food,GI,GL,GL_Rating
            ,50,8,low
            Mystery,60,15,
        "};
        let catalog = Catalog::from_content(content).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0).unwrap().name, None);
        assert_eq!(catalog.get(1).unwrap().gl_rating, None);
        assert_eq!(catalog.get(1).unwrap().zone(), Zone::Unknown);
    }

    fn long_table(last_row: &str) -> String {
        let mut content = String::from("Food,GI,GL,GL_Rating\n");
        for i in 0..150 {
            content.push_str(&format!("Food {i},50,10,med\n"));
        }
        content.push_str(last_row);
        content.push('\n');
        content
    }

    #[test]
    fn test_decimal_after_many_whole_number_rows() {
        let catalog = Catalog::from_content(long_table("Apple,36,5.4,low")).unwrap();

        assert_eq!(catalog.len(), 151);
        let apple = catalog.get(150).unwrap();
        assert_eq!(apple.display_name(), "Apple");
        assert_eq!(apple.gi, 36.0);
        assert_eq!(apple.gl, 5.4);
        assert_eq!(catalog.get(0).unwrap().gl, 10.0);
    }

    #[test]
    fn test_non_numeric_value_after_many_rows_rejected() {
        let err = Catalog::from_content(long_table("Apple,36,lots,low")).unwrap_err();
        assert!(matches!(err, CatalogLoadError::InvalidValue { ref column, .. } if column == "GL"));

        let err = Catalog::from_content(long_table("Apple,n/a,5.4,low")).unwrap_err();
        assert!(matches!(err, CatalogLoadError::InvalidValue { ref column, .. } if column == "GI"));
    }

    #[test]
    fn test_empty_numeric_cell_after_many_rows_rejected() {
        let err = Catalog::from_content(long_table("Apple,,5.4,low")).unwrap_err();
        assert!(matches!(
            err,
            CatalogLoadError::MissingValue { ref column, row: 151 } if column == "GI"
        ));
    }

    #[test]
    fn test_from_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = Utf8PathBuf::from_path_buf(temp_dir.path().join("gi_gl_data.csv")).unwrap();
        fs::write(&path, SAMPLE).unwrap();

        let catalog = Catalog::from_path(&path).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(*catalog.source(), CatalogSource::Path(path.clone()));
        assert_eq!(catalog.source().to_string(), path.to_string());
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = Catalog::from_path("/nonexistent/gi_gl_data.csv").unwrap_err();
        assert!(matches!(err, CatalogLoadError::NotFound(_)));
    }

    #[test]
    fn test_from_records() {
        let catalog = Catalog::from_records(vec![FoodRecord::new("Rice", 73.0, 29.0, "high")]);
        assert_eq!(catalog.len(), 1);
        assert!(!catalog.is_empty());
        assert_eq!(*catalog.source(), CatalogSource::Memory);
        assert_eq!((&catalog).into_iter().count(), 1);
    }
}
