use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use log_extract::{build_index, init_tracing, run_query, Config, LogExtractError, Result};

#[derive(Parser)]
#[command(author, version, about = "Extract all log lines for one date", long_about = None)]
struct Cli {
    /// date to extract, compared byte-for-byte with the log's leading token (e.g. 2024-01-31)
    date: String,

    /// JSON config file; command-line paths override it
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    log_file: Option<PathBuf>,

    #[arg(long)]
    index_file: Option<PathBuf>,

    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// rebuild the index even if one already exists
    #[arg(long)]
    reindex: bool,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let base = match &cli.config {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };
    let config = base.with_overrides(cli.log_file, cli.index_file, cli.output_dir);
    let date = cli.date;

    if cli.reindex || !config.index_file.exists() {
        println!("Creating index...");
        build_index(&config)?;
        println!(
            "Index file '{}' created successfully.",
            config.index_file.display()
        );
    }

    match run_query(&config, &date)? {
        Some(path) => println!("Logs for {} have been saved to {}", date, path.display()),
        None => println!("{}", LogExtractError::NoMatch(date)),
    }
    Ok(())
}
