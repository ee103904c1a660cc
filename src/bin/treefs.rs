//! Treefs CLI Binary
//!
//! Interactive shell over the in-memory namespace. Commands are read from
//! standard input, one per line.

use anyhow::Context;
use clap::Parser;
use std::process;
use treefs::cli::Cli;
use treefs::logging::init_logging;
use treefs::shell::{self, Session};
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", shell::map_error(&e));
            process::exit(1);
        }
    };

    if let Err(e) = init_logging(Some(&config.logging)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!(order = config.namespace.order, "Treefs starting");

    if let Err(e) = run(config) {
        error!("Shell failed: {:#}", e);
        eprintln!("{:#}", e);
        process::exit(1);
    }
}

fn run(config: treefs::config::TreefsConfig) -> anyhow::Result<()> {
    let mut session = Session::new(config).context("Failed to create the root directory")?;
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    shell::run(&mut session, stdin.lock(), &mut stdout).context("Shell I/O failed")?;
    Ok(())
}
