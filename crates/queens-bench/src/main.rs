use std::path::PathBuf;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing::info;

use queens_bench::config::SearchConfig;
use queens_bench::logging::init_logging;
use queens_bench::report::RunReport;
use queens_bench::search::SearchRunner;

const USAGE: &str =
    "Invalid number of command line arguments.\nFormat should be nqueens <n>\n\n";

/// Counts N-Queens solutions by decoding every permutation index in parallel.
#[derive(Debug, Parser)]
#[command(
    name = "nqueens",
    author,
    version,
    about = "Parallel permutation-index N-Queens solution counter"
)]
struct Cli {
    /// Board size N. Any other number of positionals prints the usage text.
    #[arg(value_name = "N")]
    positionals: Vec<String>,

    /// Optional YAML configuration file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Number of parallel workers (defaults to available parallelism).
    #[arg(short, long, value_name = "COUNT")]
    workers: Option<usize>,

    /// Override the tracing level (trace, debug, info, warn, error).
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Write structured JSON logs to this file.
    #[arg(long, value_name = "FILE")]
    log_json: Option<String>,

    /// Write a JSON run report ({board_size} is substituted).
    #[arg(long, value_name = "FILE")]
    report: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = match cli.config.as_ref() {
        Some(path) => SearchConfig::from_path(path)?,
        None => SearchConfig::default(),
    };

    if let Some(workers) = cli.workers {
        config.workers = Some(workers);
    }

    if let Some(level) = cli.log_level {
        config.logging.tracing_level = level;
    }

    if let Some(path) = cli.log_json {
        config.logging.enable_structured = true;
        config.logging.log_path = path;
    }

    if let Some(report) = cli.report {
        config.outputs.report = Some(report);
    }

    config.validate()?;

    let logging_guard = init_logging(&config.logging)?;
    if let Some(guard) = logging_guard.as_ref() {
        info!(path = %guard.log_path.display(), "structured logging enabled");
    }

    let board_size = match cli.positionals.as_slice() {
        [value] => Some(parse_board_size(value)),
        _ => None,
    };

    if board_size.is_none() {
        print!("{USAGE}");
    }

    let runner = SearchRunner::new(board_size, config.resolved_workers())?;
    let outcome = runner.run()?;
    print!("{}", outcome.render());

    if let Some(path) = config.resolved_outputs(board_size).report {
        RunReport::from(&outcome)
            .write(&path)
            .with_context(|| format!("writing run report to {}", path.display()))?;
        info!(path = %path.display(), "run report written");
    }

    Ok(())
}

/// Exits through clap's error path when N is not a non-negative integer.
fn parse_board_size(value: &str) -> usize {
    value.trim().parse().unwrap_or_else(|err| {
        Cli::command()
            .error(
                ErrorKind::ValueValidation,
                format!("invalid value '{value}' for '<N>': {err}"),
            )
            .exit()
    })
}
