use anyhow::Result;
use clap::{Parser, Subcommand};
use puzzle_core::acquire::{self, HttpSource, Pacer};
use puzzle_core::dataset::layout::{DEFAULT_DATA_DIR, DEFAULT_INDEX_FILE};
use puzzle_core::dataset::{validate_dataset, DatasetLayout};
use puzzle_core::storage::FsStorage;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "puzzle", version, about = "Puzzle dataset tooling")]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the index and every record document, stopping at the first problem
    Validate {
        #[arg(long, env = "PUZZLE_DATASET_ROOT", default_value = ".")]
        root: PathBuf,
        #[arg(long, env = "PUZZLE_INDEX_FILE", default_value = DEFAULT_INDEX_FILE)]
        index: PathBuf,
        #[arg(long, env = "PUZZLE_DATA_DIR", default_value = DEFAULT_DATA_DIR)]
        data_dir: PathBuf,
    },
    /// Download problems by id into <out>/<id>.json, one request at a time
    Fetch {
        #[arg(long)]
        start: u32,
        #[arg(long)]
        end: u32,
        #[arg(long, env = "PUZZLE_FETCH_DELAY_MS", default_value_t = 5000)]
        delay_ms: u64,
        #[arg(long, env = "PUZZLE_FETCH_BASE_URL", default_value = acquire::http::DEFAULT_BASE_URL)]
        base_url: String,
        #[arg(long, default_value = DEFAULT_DATA_DIR)]
        out: PathBuf,
    },
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    // fetch reports every id as it goes; validate stays at one line
    init_tracing(match cli.cmd {
        Commands::Fetch { .. } => "info",
        Commands::Validate { .. } => "warn",
    });

    match cli.cmd {
        Commands::Validate { root, index, data_dir } => {
            let storage = FsStorage::new(root);
            let layout = DatasetLayout { index_file: index, data_dir };
            match validate_dataset(&storage, &layout) {
                Ok(summary) => {
                    println!(
                        "Validation successful: all files and data structures are correct ({} records: {})",
                        summary.records, summary.difficulties
                    );
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Commands::Fetch { start, end, delay_ms, base_url, out } => {
            let source = HttpSource::new(base_url)?;
            let mut pacer = Pacer::new(Duration::from_millis(delay_ms));
            let report = acquire::acquire(&source, &out, start..=end, &mut pacer).await?;
            println!(
                "All problems fetched: {} written, {} failed",
                report.fetched.len(),
                report.failed.len()
            );
        }
    }

    Ok(ExitCode::SUCCESS)
}
