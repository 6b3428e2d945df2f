//! `strand` — command-line front end for the strand sequence toolkit.
//!
//! Every subcommand reads its input from stdin and writes one result to
//! stdout. Positions are printed 1-based; the library itself is 0-based.
//!
//! ```bash
//! printf 'GATATATGCATATACTT\nATAT\n' | strand subs     # 2 4 10
//! echo AAAACCCGGT | strand revc                          # ACCGGGTTTT
//! echo '2 2 2' | strand iprb                             # 0.78333
//! echo AAAACCCGGT | strand --format json dna             # {"ok":{"a":4,...}}
//! ```

mod commands;
mod input;
mod output;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::{debug, info};

use commands::Commands;
use output::OutputFormat;

/// Nucleotide sequence analysis primitives.
#[derive(Parser, Debug)]
#[command(name = "strand")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Log progress at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(cli.log_filter())).init();

    info!("running strand {} {}", env!("CARGO_PKG_VERSION"), cli.command.name());

    let raw = io::read_to_string(io::stdin().lock()).context("failed to read stdin")?;
    debug!("read {} bytes from stdin", raw.len());

    let report = cli.command.run(&raw)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    output::write_report(&mut out, &report, cli.format)?;
    out.flush().context("failed to flush stdout")?;
    Ok(())
}
