//! Delimited-file loading for catalogs.

use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use super::{Catalog, CatalogItem};
use crate::error::{RecommendError, Result};

/// Default title column name.
pub const DEFAULT_TITLE_COLUMN: &str = "movie_title";

/// Default combined-features column name.
pub const DEFAULT_FEATURES_COLUMN: &str = "comb";

/// Layout of a delimited catalog file.
///
/// The file must have a header row naming at least the title and features
/// columns; other columns are ignored.
///
/// # Examples
///
/// ```
/// use cinematch::data::{Catalog, CatalogOptions};
///
/// let data = "id;name;tags\n1;Alien;space horror\n";
/// let options = CatalogOptions::new()
///     .with_delimiter(b';')
///     .with_title_column("name")
///     .with_features_column("tags");
///
/// let catalog = Catalog::from_reader(data.as_bytes(), &options).expect("valid catalog");
/// assert_eq!(catalog.len(), 1);
/// assert_eq!(catalog.items()[0].combined_features, "space horror");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogOptions {
    delimiter: u8,
    title_column: String,
    features_column: String,
}

impl CatalogOptions {
    /// Comma-delimited with `movie_title` and `comb` columns.
    #[must_use]
    pub fn new() -> Self {
        Self {
            delimiter: b',',
            title_column: DEFAULT_TITLE_COLUMN.to_string(),
            features_column: DEFAULT_FEATURES_COLUMN.to_string(),
        }
    }

    /// Set the field delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the title column name.
    #[must_use]
    pub fn with_title_column(mut self, column: impl Into<String>) -> Self {
        self.title_column = column.into();
        self
    }

    /// Set the combined-features column name.
    #[must_use]
    pub fn with_features_column(mut self, column: impl Into<String>) -> Self {
        self.features_column = column.into();
        self
    }

    /// Field delimiter.
    #[must_use]
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Title column name.
    #[must_use]
    pub fn title_column(&self) -> &str {
        &self.title_column
    }

    /// Combined-features column name.
    #[must_use]
    pub fn features_column(&self) -> &str {
        &self.features_column
    }

    fn reader_builder(&self) -> csv::ReaderBuilder {
        let mut builder = csv::ReaderBuilder::new();
        builder.delimiter(self.delimiter).has_headers(true);
        builder
    }
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Load a catalog from a delimited file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, a required column is
    /// missing, or any row is malformed. An empty catalog is not an error
    /// here; building an index over it is.
    pub fn from_path<P: AsRef<Path>>(path: P, options: &CatalogOptions) -> Result<Self> {
        let path = path.as_ref();
        let reader = options.reader_builder().from_path(path)?;
        let catalog = read_catalog(reader, options)?;

        info!(
            path = %path.display(),
            rows = catalog.len(),
            duplicates = catalog.duplicate_titles(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// Load a catalog from any reader of delimited text.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Catalog::from_path`].
    pub fn from_reader<R: Read>(reader: R, options: &CatalogOptions) -> Result<Self> {
        read_catalog(options.reader_builder().from_reader(reader), options)
    }
}

fn column_position(headers: &csv::StringRecord, column: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim() == column)
        .ok_or_else(|| RecommendError::MissingColumn {
            column: column.to_string(),
            available: headers.iter().map(ToString::to_string).collect(),
        })
}

fn read_catalog<R: Read>(mut reader: csv::Reader<R>, options: &CatalogOptions) -> Result<Catalog> {
    let headers = reader.headers()?.clone();
    let title_idx = column_position(&headers, &options.title_column)?;
    let features_idx = column_position(&headers, &options.features_column)?;
    debug!(title_idx, features_idx, "resolved catalog columns");

    let mut items = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map_or(0, csv::Position::line);
        let field = |idx: usize, column: &str| {
            record
                .get(idx)
                .map(ToString::to_string)
                .ok_or_else(|| RecommendError::Csv {
                    line,
                    message: format!("missing field '{column}'"),
                })
        };
        items.push(CatalogItem {
            title: field(title_idx, &options.title_column)?,
            combined_features: field(features_idx, &options.features_column)?,
        });
    }

    Ok(Catalog::new(items))
}
