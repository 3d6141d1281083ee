//! od-csv-matrix — export a solved OD cost matrix layer to CSV.
//!
//! Reads the layer file, expands the deduplicated result back to one row per
//! origin name and one column per destination name, and writes next to the
//! layer (or into `--output-dir`):
//!
//! - `<stem>_ODCostFlatTable_OptimizedOn_<impedance>.csv`
//! - `<stem>_ODCostMatrix_<OptimizedOn|AccumulationOf>_<attribute>.csv`, one
//!   per cost attribute
//!
//! Logging goes to stderr; `RUST_LOG` overrides the level chosen by `-v`.

mod pipeline;


use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::error;

use od_core::{RunConfig, UnresolvedPolicy};

#[derive(Parser)]
#[command(author, version, about = "Export a solved OD cost matrix layer to CSV", long_about = None)]
struct Cli {
    /// Solved network-analysis layer file
    #[arg(value_name = "LAYER_FILE")]
    layer: PathBuf,

    /// Directory for the CSV files (defaults to the layer's directory)
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Fail on origin or destination rows that have no network location
    #[arg(long)]
    strict: bool,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> RunConfig {
        let mut config = RunConfig::new(&self.layer);
        config.output_dir = self.output_dir.clone();
        if self.strict {
            config.unresolved = UnresolvedPolicy::Reject;
        }
        config
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .target(env_logger::Target::Stderr)
        .init();

    match pipeline::run(&cli.config()) {
        Ok(written) => {
            for path in written {
                println!("{}", path.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
