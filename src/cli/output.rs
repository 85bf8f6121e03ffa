//! Rendering of query results and catalog statistics.

use clap::ValueEnum;
use serde::Serialize;
use std::io::Write;

use cinematch::recommend::Recommendation;

use super::error::Result;

/// Message shown for blank queries.
pub(crate) const BLANK_QUERY: &str = "Please enter a movie name.";

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable lines
    Text,
    /// One JSON object per result line
    Json,
}

#[derive(Serialize)]
struct QueryReport<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    recommendations: Option<&'a [Recommendation]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

/// Catalog and index statistics for `info`.
#[derive(Debug, Serialize)]
pub(crate) struct CatalogInfo {
    pub path: String,
    pub items: usize,
    pub vocabulary: usize,
    pub duplicate_titles: usize,
    pub empty_feature_rows: usize,
}

/// Write the recommendations for one query.
pub(crate) fn write_recommendations<W: Write>(
    out: &mut W,
    format: OutputFormat,
    query: &str,
    recommendations: &[Recommendation],
    scores: bool,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "Movies similar to {}:", query.trim().to_uppercase())?;
            for (rank, rec) in recommendations.iter().enumerate() {
                if scores {
                    writeln!(out, "  {}. {} ({:.3})", rank + 1, rec.title, rec.score)?;
                } else {
                    writeln!(out, "  {}. {}", rank + 1, rec.title)?;
                }
            }
        }
        OutputFormat::Json => {
            let report = QueryReport {
                query: query.trim(),
                recommendations: Some(recommendations),
                error: None,
            };
            serde_json::to_writer(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Report a query that produced no recommendations.
///
/// Text goes to `err`, JSON stays on `out` so the stream keeps one object
/// per query.
pub(crate) fn write_query_failure<W: Write, E: Write>(
    out: &mut W,
    err: &mut E,
    format: OutputFormat,
    query: &str,
    message: &str,
) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(err, "{message}")?,
        OutputFormat::Json => {
            let report = QueryReport {
                query: query.trim(),
                recommendations: None,
                error: Some(message),
            };
            serde_json::to_writer(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Write catalog statistics.
pub(crate) fn write_info<W: Write>(out: &mut W, format: OutputFormat, info: &CatalogInfo) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "Catalog:          {}", info.path)?;
            writeln!(out, "Items:            {}", info.items)?;
            writeln!(out, "Vocabulary:       {}", info.vocabulary)?;
            writeln!(out, "Duplicate titles: {}", info.duplicate_titles)?;
            writeln!(out, "Empty features:   {}", info.empty_feature_rows)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, info)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recs() -> Vec<Recommendation> {
        vec![
            Recommendation {
                row: 1,
                title: "interstellar".to_string(),
                score: 0.75,
            },
            Recommendation {
                row: 4,
                title: "the prestige".to_string(),
                score: 0.5,
            },
        ]
    }

    #[test]
    fn test_text_recommendations() {
        let mut out = Vec::new();
        write_recommendations(&mut out, OutputFormat::Text, " inception ", &recs(), false)
            .expect("write to vec");

        let text = String::from_utf8(out).expect("utf8");
        assert_eq!(
            text,
            "Movies similar to INCEPTION:\n  1. interstellar\n  2. the prestige\n"
        );
    }

    #[test]
    fn test_text_recommendations_with_scores() {
        let mut out = Vec::new();
        write_recommendations(&mut out, OutputFormat::Text, "inception", &recs(), true)
            .expect("write to vec");

        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains("1. interstellar (0.750)"));
    }

    #[test]
    fn test_json_recommendations() {
        let mut out = Vec::new();
        write_recommendations(&mut out, OutputFormat::Json, "Inception", &recs(), false)
            .expect("write to vec");

        let value: serde_json::Value = serde_json::from_slice(&out).expect("valid json");
        assert_eq!(value["query"], "Inception");
        assert_eq!(value["recommendations"][0]["title"], "interstellar");
        assert_eq!(value["recommendations"][1]["row"], 4);
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_failure_text_goes_to_err() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        write_query_failure(&mut out, &mut err, OutputFormat::Text, "x", "not found")
            .expect("write to vec");

        assert!(out.is_empty());
        assert_eq!(String::from_utf8(err).expect("utf8"), "not found\n");
    }

    #[test]
    fn test_failure_json_goes_to_out() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        write_query_failure(&mut out, &mut err, OutputFormat::Json, "x", "not found")
            .expect("write to vec");

        assert!(err.is_empty());
        let value: serde_json::Value = serde_json::from_slice(&out).expect("valid json");
        assert_eq!(value["error"], "not found");
        assert!(value.get("recommendations").is_none());
    }

    #[test]
    fn test_info_text() {
        let info = CatalogInfo {
            path: "movies.csv".to_string(),
            items: 3,
            vocabulary: 12,
            duplicate_titles: 0,
            empty_feature_rows: 1,
        };
        let mut out = Vec::new();
        write_info(&mut out, OutputFormat::Text, &info).expect("write to vec");

        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains("Items:            3"));
        assert!(text.contains("Empty features:   1"));
    }
}
