//! # BoxScript
//!
//! Run a BoxScript program, list it, or draw one in the editor.
//!

use boxscript::mach::{Memory, DEFAULT_CYCLE_LIMIT};
use boxscript::term::{self, Options};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Program to run; the editor starts when omitted
    file: Option<String>,

    /// Seed a memory cell before running, as ADDRESS:VALUE
    #[arg(short, long, value_name = "ADDRESS:VALUE", value_parser = parse_cell)]
    mem: Vec<(i64, i64)>,

    /// Steps a run may take before it is stopped
    #[arg(short, long, default_value_t = DEFAULT_CYCLE_LIMIT)]
    cycles: usize,

    /// Print the highlighted program instead of running it
    #[arg(short, long)]
    list: bool,

    /// Refuse programs with malformed lines
    #[arg(long)]
    strict: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_cell(s: &str) -> Result<(i64, i64), String> {
    let (address, value) = s
        .split_once(':')
        .ok_or_else(|| format!("expected ADDRESS:VALUE, found `{}`", s))?;
    let address = address.trim().parse::<i64>().map_err(|e| e.to_string())?;
    let value = value.trim().parse::<i64>().map_err(|e| e.to_string())?;
    Ok((address, value))
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(error) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", error);
    }

    let memory: Memory = cli.mem.iter().copied().collect();
    debug!("seeded {} memory cells", memory.len());

    term::main(Options {
        file: cli.file,
        memory,
        cycle_limit: cli.cycles,
        list: cli.list,
        strict: cli.strict,
    });
}

