//! LookSee CLI - profile a tabular file from the command line
//!
//! Usage:
//!   looksee metadata <file> [--table <name>] [--output json|text]
//!   looksee summary <file> <column> [--table <name>] [--output json|text]
//!   looksee columns <file>
//!   looksee formats
//!
//! Examples:
//!   looksee metadata data/sales.parquet
//!   looksee summary data/people.csv age --output json
//!   looksee --config ./looksee.toml formats

use clap::{Parser, Subcommand, ValueEnum};
use looksee::config::Settings;
use looksee::error::ProfileResult;
use looksee::logging;
use looksee::profile::{ColumnSummary, DatasetMetadata};
use looksee::LookSee;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "looksee")]
#[command(about = "LookSee - Ingest a CSV/Parquet/JSON file and profile its columns")]
#[command(version)]
struct Cli {
    /// Path to a looksee.toml (defaults to the standard search locations)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Relation name to load the file into (overrides settings.default_table_name)
    #[arg(short, long, global = true)]
    table: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Row count plus per-column null and distinct counts
    Metadata {
        /// Path to the data file
        file: PathBuf,
    },

    /// Summary statistics for one column
    Summary {
        /// Path to the data file
        file: PathBuf,

        /// Column to summarize (exact name)
        column: String,
    },

    /// List the columns of a data file
    Columns {
        /// Path to the data file
        file: PathBuf,
    },

    /// List the configured file formats
    Formats,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable table
    Text,
    /// Pretty-printed JSON
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::from_file(path),
        None => Settings::load(),
    };
    let mut settings = match settings {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(table) = cli.table {
        settings.settings.default_table_name = table;
    }

    if let Err(e) = logging::init(&settings) {
        match logging::init_stderr(&settings) {
            Ok(()) => tracing::warn!("file logging disabled: {}", e),
            Err(_) => eprintln!("Warning: logging disabled: {}", e),
        }
    }

    let output = cli.output;
    match cli.command {
        Commands::Metadata { file } => run(settings, &file, |tool| {
            let metadata = tool.metadata()?;
            Ok(emit(output, &metadata, print_metadata))
        }),
        Commands::Summary { file, column } => run(settings, &file, |tool| {
            let summary = tool.summarize(&column)?;
            Ok(emit(output, &summary, print_summary))
        }),
        Commands::Columns { file } => run(settings, &file, |tool| {
            let columns = tool.columns()?;
            Ok(emit(output, &columns, |columns| {
                for column in columns {
                    println!("{:<24} {:<10} {}", column.name, column.declared_type, column.native_type);
                }
            }))
        }),
        Commands::Formats => cmd_formats(settings, output),
    }
}

/// Load `file` into a fresh tool, run `action`, then close the session.
fn run<F>(settings: Settings, file: &Path, action: F) -> ExitCode
where
    F: FnOnce(&LookSee) -> ProfileResult<ExitCode>,
{
    let mut tool = match LookSee::new(settings) {
        Ok(tool) => tool,
        Err(e) => {
            eprintln!("Error starting engine: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = tool.load(file).map(|_| ()).and_then(|()| action(&tool));
    let closed = tool.close();

    match (result, closed) {
        (Ok(code), Ok(())) => code,
        (Err(e), _) | (Ok(_), Err(e)) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_formats(settings: Settings, output: OutputFormat) -> ExitCode {
    let resolver = looksee::ingest::FormatResolver::from_settings(&settings);
    let strategies: Vec<_> = resolver.strategies().collect();
    emit(output, &strategies, |strategies| {
        for strategy in strategies {
            println!("{:<10} {}", strategy.extension, strategy.read_function);
        }
    })
}

fn emit<T: Serialize + ?Sized>(output: OutputFormat, value: &T, text: impl FnOnce(&T)) -> ExitCode {
    match render(output, value, text) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error serializing output: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn render<T: Serialize + ?Sized>(
    output: OutputFormat,
    value: &T,
    text: impl FnOnce(&T),
) -> Result<(), serde_json::Error> {
    match output {
        OutputFormat::Text => text(value),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}

fn print_metadata(metadata: &DatasetMetadata) {
    println!("Table: {}", metadata.table_name);
    println!("Rows:  {}", metadata.row_count);
    println!();
    println!(
        "{:<24} {:<10} {:<16} {:>10} {:>10}",
        "column", "type", "native", "nulls", "distinct"
    );
    for column in &metadata.columns {
        println!(
            "{:<24} {:<10} {:<16} {:>10} {:>10}",
            column.name,
            column.declared_type.as_str(),
            column.native_type,
            column.null_count,
            column.distinct_count
        );
    }
}

fn print_summary(summary: &ColumnSummary) {
    println!("Column:   {} ({}, {})", summary.name, summary.declared_type, summary.native_type);
    println!("Rows:     {}", summary.row_count);
    println!("Nulls:    {}", summary.null_count);
    println!("Distinct: {}", summary.distinct_count);
    if let Some(min) = &summary.min {
        println!("Min:      {}", min);
    }
    if let Some(max) = &summary.max {
        println!("Max:      {}", max);
    }
    if let Some(mean) = summary.mean {
        println!("Mean:     {}", mean);
    }
    if let Some(stddev) = summary.stddev {
        println!("Stddev:   {}", stddev);
    }
}
