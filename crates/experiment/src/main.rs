use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use experiment::{Cli, Command, ExperimentConfig, run_compare, run_demo, run_pivots};
use log::{LevelFilter, info};

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG, when set, takes precedence over -v.
    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = ExperimentConfig::load(&cli)?;
    info!("configuration: {config:?}");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command.unwrap_or_default() {
        Command::Compare => run_compare(&config, &mut out)?,
        Command::Pivots { .. } => run_pivots(&config, &mut out)?,
        Command::Demo => run_demo(&mut out)?,
    }
    out.flush()?;
    Ok(())
}
