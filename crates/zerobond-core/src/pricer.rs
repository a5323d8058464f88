//! The input, compute, report pipeline.

use std::io::{BufRead, Write};

use crate::config::PricerConfig;
use crate::error::PricerResult;
use crate::input::Console;
use crate::quote::BondQuote;
use crate::report::render_report;

/// Prices one zero-coupon bond per run over a console exchange.
///
/// # Example
///
/// ```rust
/// use zerobond_core::{BondPricer, PricerConfig};
///
/// let pricer = BondPricer::new(PricerConfig::default()).unwrap();
/// let mut out = Vec::new();
/// let quote = pricer.run("1000\n0\n5\n".as_bytes(), &mut out).unwrap();
///
/// assert_eq!(quote.price(), Some(1000.0));
/// assert!(String::from_utf8(out).unwrap().ends_with("Price : 1000\n"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BondPricer {
    config: PricerConfig,
}

impl BondPricer {
    /// Creates a pricer from a validated configuration.
    pub fn new(config: PricerConfig) -> PricerResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Renders a quote according to the configuration.
    pub fn render(&self, quote: &BondQuote) -> PricerResult<String> {
        render_report(quote, self.config.format, self.config.precision_mode())
    }

    /// Reads the inputs, prices the bond and writes the report.
    ///
    /// Returns the priced quote. Any input error aborts the run before a
    /// price is computed or a report is written.
    pub fn run<R: BufRead, W: Write>(&self, reader: R, writer: W) -> PricerResult<BondQuote> {
        let mut console = Console::new(reader, writer).with_max_attempts(self.config.max_attempts);
        let mut quote = BondQuote::default();

        if self.config.show_initial {
            console.write_str(&self.render(&quote)?)?;
        }

        console.read_inputs(&mut quote)?;
        quote.compute_price();

        console.write_str(&self.render(&quote)?)?;
        tracing::info!(price = ?quote.price(), "zero-coupon pricing complete");
        Ok(quote)
    }
}
