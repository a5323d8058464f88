//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use zerobond_core::{PricerConfig, ReportFormat};

use crate::error::{CliError, CliResult};

/// zerobond - Zero-coupon bond pricer
///
/// Prompts for face value, interest rate and year fraction, then prints
/// the continuously discounted price.
#[derive(Parser, Debug)]
#[command(name = "zerobond")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Significant digits in the text report (15-120)
    #[arg(short, long)]
    pub precision: Option<u32>,

    /// Print numbers in the shortest form that parses back exactly
    #[arg(long, conflicts_with = "precision")]
    pub shortest: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Extra attempts per field after a malformed line
    #[arg(short, long)]
    pub retries: Option<u32>,

    /// Print the zeroed quote before prompting
    #[arg(long)]
    pub show_initial: bool,

    /// Load settings from a TOML file; flags override it
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Labelled text report
    #[default]
    Text,
    /// JSON object
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => ReportFormat::Text,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

impl Cli {
    /// Builds the pricer configuration: file (if any), then flags.
    pub fn pricer_config(&self) -> CliResult<PricerConfig> {
        let mut config = match &self.config {
            Some(path) => PricerConfig::from_file(path).map_err(|source| CliError::ConfigFile {
                path: path.display().to_string(),
                source,
            })?,
            None => PricerConfig::default(),
        };

        if let Some(precision) = self.precision {
            config.precision = precision;
        }
        if self.shortest {
            config.shortest = true;
        }
        if let Some(format) = self.format {
            config.format = format.into();
        }
        if let Some(retries) = self.retries {
            config.max_attempts = retries.saturating_add(1);
        }
        if self.show_initial {
            config.show_initial = true;
        }

        config.validate()?;
        Ok(config)
    }
}
