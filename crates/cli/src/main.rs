//! graphmon — line-protocol shell over `graphmon-core`.
//!
//! Reads commands from stdin (or `--input FILE`), mutates an in-memory
//! [`GraphStore`], and prints `report` output to stdout.

mod driver;
mod parse;

use std::fs::File;
use std::io::{self, BufReader};
use std::process;

use clap::Parser;
use graphmon_core::{GraphStore, StoreConfig};

/// In-memory monitor over a dynamic set of named entities and typed
/// directed relationships between them.
#[derive(Parser, Debug)]
#[command(name = "graphmon", about, version)]
struct Args {
    /// Initial capacity hint for the entity registry.
    #[arg(long, default_value_t = StoreConfig::default().entity_capacity)]
    entity_capacity: usize,

    /// Initial capacity hint for the relation store's relation-name table.
    #[arg(long, default_value_t = StoreConfig::default().relation_capacity)]
    relation_capacity: usize,

    /// Initial capacity hint for each relation's inner destination map.
    #[arg(long, default_value_t = StoreConfig::default().inner_capacity)]
    inner_capacity: usize,

    /// Read commands from this file instead of standard input.
    #[arg(long, value_name = "FILE")]
    input: Option<std::path::PathBuf>,

    /// Enable verbose (debug-level) logging to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = StoreConfig {
        entity_capacity: args.entity_capacity,
        relation_capacity: args.relation_capacity,
        inner_capacity: args.inner_capacity,
    };
    let mut store = GraphStore::new(config);

    let stdout = io::stdout();
    let result = match &args.input {
        Some(path) => match File::open(path) {
            Ok(file) => driver::run(&mut store, BufReader::new(file), stdout.lock()),
            Err(e) => {
                eprintln!("graphmon: cannot open {}: {}", path.display(), e);
                process::exit(1);
            }
        },
        None => driver::run(&mut store, io::stdin().lock(), stdout.lock()),
    };

    if let Err(e) = result {
        eprintln!("graphmon: {}", e);
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
