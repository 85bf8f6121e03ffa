//! Command implementations.

use std::io::{self, BufRead, Write};

use tracing::info;

use cinematch::recommend::ContentRecommender;
use cinematch::RecommendError;

use super::error::{CliError, Result};
use super::output::{self, CatalogInfo, OutputFormat, BLANK_QUERY};
use super::DataArgs;

/// Outcome of a single query.
enum Answer {
    Answered,
    Unanswered,
}

fn answer<W: Write, E: Write>(
    recommender: &ContentRecommender,
    query: &str,
    scores: bool,
    format: OutputFormat,
    out: &mut W,
    err: &mut E,
) -> Result<Answer> {
    if query.trim().is_empty() {
        output::write_query_failure(out, err, format, query, BLANK_QUERY)?;
        return Ok(Answer::Unanswered);
    }

    match recommender.recommend_with_scores(query) {
        Ok(recommendations) => {
            output::write_recommendations(out, format, query, &recommendations, scores)?;
            Ok(Answer::Answered)
        }
        Err(e @ RecommendError::NotFound { .. }) => {
            output::write_query_failure(out, err, format, query, &e.to_string())?;
            Ok(Answer::Unanswered)
        }
        Err(e) => Err(e.into()),
    }
}

fn build_recommender(data: &DataArgs, top_k: usize) -> Result<ContentRecommender> {
    let index = data.load_index()?;
    Ok(ContentRecommender::new(index).with_top_k(top_k)?)
}

/// `recommend`: answer each title given on the command line.
pub(crate) fn recommend(
    data: &DataArgs,
    titles: &[String],
    top_k: usize,
    scores: bool,
    format: OutputFormat,
) -> Result<()> {
    let recommender = build_recommender(data, top_k)?;

    let stdout = io::stdout();
    let stderr = io::stderr();
    let (mut out, mut err) = (stdout.lock(), stderr.lock());

    let mut failed = 0;
    for title in titles {
        let outcome = answer(&recommender, title, scores, format, &mut out, &mut err)?;
        if let Answer::Unanswered = outcome {
            failed += 1;
        }
    }
    out.flush()?;

    if failed > 0 {
        return Err(CliError::QueriesFailed {
            failed,
            total: titles.len(),
        });
    }
    Ok(())
}

/// `interactive`: answer titles read from stdin until EOF.
///
/// Unknown and blank titles are reported and skipped; the session keeps
/// going.
pub(crate) fn interactive(
    data: &DataArgs,
    top_k: usize,
    scores: bool,
    format: OutputFormat,
) -> Result<()> {
    let recommender = build_recommender(data, top_k)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    let (mut out, mut err) = (stdout.lock(), stderr.lock());

    let (mut total, mut failed) = (0usize, 0usize);
    for line in stdin.lock().lines() {
        let line = line?;
        total += 1;
        let outcome = answer(&recommender, &line, scores, format, &mut out, &mut err)?;
        if let Answer::Unanswered = outcome {
            failed += 1;
        }
        out.flush()?;
    }

    info!(total, failed, "interactive session finished");
    Ok(())
}

/// `info`: print catalog and index statistics.
pub(crate) fn info(data: &DataArgs, format: OutputFormat) -> Result<()> {
    let index = data.load_index()?;

    let empty_feature_rows = (0..index.len())
        .filter(|&row| index.similarity(row, row) == Some(0.0))
        .count();
    let stats = CatalogInfo {
        path: data.data.display().to_string(),
        items: index.len(),
        vocabulary: index.vocabulary_size(),
        duplicate_titles: index.catalog().duplicate_titles(),
        empty_feature_rows,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    output::write_info(&mut out, format, &stats)?;
    out.flush()?;
    Ok(())
}
