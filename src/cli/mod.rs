//! Command-line front end: argument types, commands and output rendering.

use clap::Args;
use std::path::PathBuf;

use cinematch::data::{Catalog, CatalogOptions, DEFAULT_FEATURES_COLUMN, DEFAULT_TITLE_COLUMN};
use cinematch::recommend::SimilarityIndex;
use cinematch::text::vectorize::CountVectorizer;

pub(crate) mod commands;
pub(crate) mod error;
pub(crate) mod output;

use error::Result;

/// Catalog location and index-building options shared by every command.
#[derive(Args, Debug, Clone)]
pub(crate) struct DataArgs {
    /// Catalog file (delimited text with a header row)
    #[arg(short, long, value_name = "FILE")]
    pub data: PathBuf,

    /// Field delimiter: a single ASCII character, or "tab"
    #[arg(long, default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// Column holding item titles
    #[arg(long, default_value = DEFAULT_TITLE_COLUMN)]
    pub title_column: String,

    /// Column holding combined features
    #[arg(long, default_value = DEFAULT_FEATURES_COLUMN)]
    pub features_column: String,

    /// Ignore feature terms shorter than this many characters
    #[arg(long, default_value_t = 1)]
    pub min_token_len: usize,
}

impl DataArgs {
    fn catalog_options(&self) -> CatalogOptions {
        CatalogOptions::new()
            .with_delimiter(self.delimiter)
            .with_title_column(self.title_column.as_str())
            .with_features_column(self.features_column.as_str())
    }

    /// Load the catalog and build its similarity index.
    pub(crate) fn load_index(&self) -> Result<SimilarityIndex> {
        let catalog = Catalog::from_path(&self.data, &self.catalog_options())?;
        let vectorizer = CountVectorizer::new().with_min_token_len(self.min_token_len);
        Ok(SimilarityIndex::build_with(catalog, vectorizer)?)
    }
}

fn parse_delimiter(s: &str) -> std::result::Result<u8, String> {
    match s {
        "tab" | "\\t" => Ok(b'\t'),
        _ => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii() => Ok(c as u8),
                _ => Err(format!("expected a single ASCII character, got '{s}'")),
            }
        }
    }
}
