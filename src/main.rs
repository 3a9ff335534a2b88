//! findex - Read and search mlocate.db file indexes.
//!
//! Usage:
//!   findex search DB PATTERN   Search indexed paths
//!   findex list DB             List every indexed path
//!   findex stats DB            Show database statistics
//!   findex --help              Show help

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Context, Result};

use findex_db::{Database, DatabaseSummary};
use findex_search::{MatchMode, SearchQuery, search};

#[derive(Parser)]
#[command(
    name = "findex",
    version,
    about = "Read and search mlocate.db file indexes",
    long_about = "findex decodes the binary databases produced by mlocate's \
                  updatedb and searches the paths they contain.\n\n\
                  It never builds or modifies an index; point it at an \
                  existing mlocate.db file."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search indexed paths by substring, glob, or regex
    Search {
        /// Path to the mlocate.db file
        db: PathBuf,

        /// Pattern to search for
        pattern: String,

        /// Case-insensitive matching
        #[arg(short = 'i', long)]
        ignore_case: bool,

        /// Treat the pattern as a shell glob (e.g. "*.txt")
        #[arg(short, long, conflicts_with = "regex")]
        glob: bool,

        /// Treat the pattern as a regular expression
        #[arg(short, long, conflicts_with = "glob")]
        regex: bool,

        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print only the number of matches
        #[arg(short, long)]
        count: bool,

        /// Write results to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List every indexed path
    List {
        /// Path to the mlocate.db file
        db: PathBuf,

        /// Maximum number of paths to print
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show database statistics
    Stats {
        /// Path to the mlocate.db file
        db: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    match cli.command {
        Command::Search {
            db,
            pattern,
            ignore_case,
            glob,
            regex,
            limit,
            count,
            output,
        } => {
            let mode = if glob {
                MatchMode::Glob
            } else if regex {
                MatchMode::Regex
            } else {
                MatchMode::Substring
            };
            run_search(&db, &pattern, mode, ignore_case, limit, count, output)?;
        }
        Command::List { db, limit } => {
            run_list(&db, limit)?;
        }
        Command::Stats { db, format } => {
            run_stats(&db, format)?;
        }
    }

    Ok(())
}

/// Decode the database and print matching paths.
fn run_search(
    db_path: &PathBuf,
    pattern: &str,
    mode: MatchMode,
    ignore_case: bool,
    limit: Option<usize>,
    count: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    let db = Database::open(db_path).context("Failed to read database")?;

    let query = SearchQuery {
        pattern: pattern.to_string(),
        mode,
        case_insensitive: ignore_case,
        limit,
    };
    let results = search(db.paths().iter(), &query)?;

    if count {
        println!("{}", results.len());
        return Ok(());
    }

    match output {
        Some(output_path) => {
            let mut contents = results.join("\n");
            if !contents.is_empty() {
                contents.push('\n');
            }
            std::fs::write(&output_path, contents).context("Failed to write output file")?;
            eprintln!("Saved {} results to {}", results.len(), output_path.display());
        }
        None => {
            for path in &results {
                println!("{path}");
            }
            if results.is_empty() {
                eprintln!("No results for: {pattern}");
            } else {
                eprintln!("{} result(s)", results.len());
            }
        }
    }

    Ok(())
}

/// Decode the database and print every path.
fn run_list(db_path: &PathBuf, limit: Option<usize>) -> Result<()> {
    let db = Database::open(db_path).context("Failed to read database")?;

    let limit = limit.unwrap_or(usize::MAX);
    for path in db.paths().iter().take(limit) {
        println!("{path}");
    }

    Ok(())
}

/// Show database statistics.
fn run_stats(db_path: &PathBuf, format: OutputFormat) -> Result<()> {
    let summary = DatabaseSummary::for_file(db_path).context("Failed to read database")?;

    match format {
        OutputFormat::Text => {
            println!();
            println!("{}", "─".repeat(50));
            println!(" Database Statistics");
            println!("{}", "─".repeat(50));
            println!(" File        : {}", summary.file_name());
            println!(
                " Size        : {} ({} bytes)",
                format_size(summary.size_bytes),
                summary.size_bytes
            );
            println!(" Format ver  : {}", summary.version);
            println!(" Root path   : {}", summary.root_path);
            println!(" Total paths : {}", summary.total_paths);
            println!("{}", "─".repeat(50));
            println!();
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}

/// Format size in human-readable form.
fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}
