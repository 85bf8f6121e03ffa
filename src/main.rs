//! cinematch - content-based movie recommendations
//!
//! Usage:
//!   cinematch recommend --data movies.csv Inception      # Top 5 similar titles
//!   cinematch recommend --data movies.csv -k 10 Avatar   # Top 10
//!   cinematch interactive --data movies.csv              # One title per stdin line
//!   cinematch info --data movies.csv                     # Catalog statistics

use clap::{ArgAction, Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;

use cinematch::recommend::DEFAULT_TOP_K;
use cli::{commands, output::OutputFormat, DataArgs};

/// cinematch - find movies similar to the ones you like
///
/// Builds a bag-of-words cosine-similarity index over a catalog's combined
/// features and answers title queries against it.
#[derive(Parser)]
#[command(name = "cinematch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend titles similar to each given title
    Recommend {
        #[command(flatten)]
        data: DataArgs,

        /// Titles to look up (case-insensitive, exact match)
        #[arg(required = true, value_name = "TITLE")]
        titles: Vec<String>,

        /// Number of recommendations per title
        #[arg(short = 'k', long, default_value_t = DEFAULT_TOP_K)]
        top_k: usize,

        /// Show similarity scores
        #[arg(long)]
        scores: bool,
    },

    /// Read titles from stdin, one per line, and recommend for each
    Interactive {
        #[command(flatten)]
        data: DataArgs,

        /// Number of recommendations per title
        #[arg(short = 'k', long, default_value_t = DEFAULT_TOP_K)]
        top_k: usize,

        /// Show similarity scores
        #[arg(long)]
        scores: bool,
    },

    /// Show catalog and index statistics
    Info {
        #[command(flatten)]
        data: DataArgs,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}={level}", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Recommend {
            data,
            titles,
            top_k,
            scores,
        } => commands::recommend(&data, &titles, top_k, scores, cli.format),

        Commands::Interactive {
            data,
            top_k,
            scores,
        } => commands::interactive(&data, top_k, scores, cli.format),

        Commands::Info { data } => commands::info(&data, cli.format),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            e.exit_code()
        }
    }
}
