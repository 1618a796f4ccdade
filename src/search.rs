use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use log_extract::{init_tracing, write_output, Config, LogExtractError, QuerySession, Result};

#[derive(Parser)]
#[command(author, version, about = "Interactive date search over an indexed log", long_about = None)]
struct Cli {
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    log_file: Option<PathBuf>,

    #[arg(long)]
    index_file: Option<PathBuf>,

    #[arg(long)]
    output_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
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
    let mut session = QuerySession::open(config)?;

    println!("Search Agent started. {} dates indexed.", session.index().len());
    println!("Type a date to search, 'save <date>' to write it out, 'index' for a summary, or 'exit' to quit.\n");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    loop {
        print!("search> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();

        match line.split_once(' ') {
            _ if line.is_empty() => continue,
            _ if line == "exit" || line == "quit" => {
                println!("Exiting search agent.");
                break;
            }
            _ if line == "index" => print_summary(&session),
            Some(("save", date)) => {
                let date = date.trim();
                let logs = session.query(date)?;
                if logs.is_empty() {
                    println!("{}", LogExtractError::NoMatch(date.to_string()));
                } else {
                    let path = write_output(&session.config().output_dir, date, &logs)?;
                    println!("Logs for {} have been saved to {}", date, path.display());
                }
            }
            _ => {
                let logs = session.query(line)?;
                if logs.is_empty() {
                    println!("{}", LogExtractError::NoMatch(line.to_string()));
                    continue;
                }
                for l in &logs {
                    println!("{l}");
                }
                println!("({} lines)", logs.len());
            }
        }
    }

    Ok(())
}

fn print_summary(session: &QuerySession) {
    let index = session.index();
    match (index.first(), index.last()) {
        (Some(first), Some(last)) => println!(
            "{} dates indexed, {} .. {}",
            index.len(),
            first.date,
            last.date
        ),
        _ => println!("Index is empty."),
    }
}
