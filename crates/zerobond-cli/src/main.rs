//! zerobond - interactive zero-coupon bond pricer.
//!
//! # Usage
//!
//! ```bash
//! # Interactive exchange on stdin/stdout
//! zerobond
//!
//! # 20 significant digits, JSON report
//! zerobond --precision 20 --format json
//!
//! # Allow two re-prompts per field
//! zerobond --retries 2
//! ```

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use zerobond_core::BondPricer;

mod cli;
mod error;
mod logging;
mod output;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::print_error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.pricer_config()?;
    tracing::debug!(?config, "resolved configuration");

    let pricer = BondPricer::new(config)?;
    pricer.run(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
