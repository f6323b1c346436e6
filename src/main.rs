//! 隣接リストのファイルを読み, 最小全域木を表示する.
//!
//! ```bash
//! spantree cities.csv
//! spantree cities.csv --unit km --parallel-sort -v
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use spantree::{parse_adjacency, MstBuilder, MstConfig, MstError, ParseError, Report};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "spantree")]
#[command(author, version, about = "Minimum spanning tree of a city distance list", long_about = None)]
struct Cli {
    /// Adjacency list: `city,neighbor,distance,neighbor,distance,...` per line
    file: PathBuf,

    /// Distance unit shown in the report
    #[arg(short, long, default_value = "miles")]
    unit: String,

    /// Sort candidate edges in parallel
    #[arg(long)]
    parallel_sort: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Mst(#[from] MstError),
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let file = File::open(&cli.file).map_err(|source| CliError::Open {
        path: cli.file.clone(),
        source,
    })?;
    let graph = parse_adjacency(BufReader::new(file))?;
    info!(
        vertices = graph.vertex_count(),
        edges = graph.edges().len(),
        "loaded {}",
        cli.file.display()
    );

    let builder = MstBuilder::new(MstConfig::new().with_parallel_sort(cli.parallel_sort));
    match builder.build(&graph) {
        Ok(tree) => {
            println!("{}", Report::new(&tree).unit(&cli.unit));
            Ok(())
        }
        Err(MstError::DisconnectedGraph { forest, components }) => {
            println!("{}", Report::new(&forest).unit(&cli.unit));
            Err(MstError::DisconnectedGraph { forest, components }.into())
        }
        Err(e) => Err(e.into()),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
