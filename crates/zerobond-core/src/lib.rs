//! # zerobond Core
//!
//! Zero-coupon bond pricing under continuous discounting.
//!
//! A zero-coupon bond pays its face value once, at maturity, and is worth
//! the discounted value of that payment today:
//!
//! ```text
//! Price = FaceValue * exp(-InterestRate * YearFraction)
//! ```
//!
//! This crate provides:
//!
//! - [`BondQuote`]: the inputs and the derived price
//! - [`zero_coupon_price`] / [`discount_factor`]: the closed-form formula
//! - [`Console`]: the interactive prompt/read exchange
//! - [`format_report`] / [`render_report`]: text and JSON reports
//! - [`BondPricer`]: the input, compute, report pipeline
//! - [`PricerConfig`]: TOML-loadable settings
//!
//! ## Example
//!
//! ```rust
//! use zerobond_core::prelude::*;
//!
//! let quote = BondQuote::priced(100.0, 0.05, 2.0);
//! let report = format_report(&quote, Precision::Significant(15));
//! assert!(report.starts_with("Face Value : 100\n"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::float_cmp)]

pub mod config;
pub mod error;
pub mod format;
pub mod input;
pub mod pricer;
pub mod quote;
pub mod report;

pub use config::PricerConfig;
pub use error::{PricerError, PricerResult};
pub use format::Precision;
pub use input::{parse_real, Console};
pub use pricer::BondPricer;
pub use quote::{discount_factor, zero_coupon_price, BondQuote, Field};
pub use report::{format_report, render_report, ReportFormat};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::PricerConfig;
    pub use crate::error::{PricerError, PricerResult};
    pub use crate::format::Precision;
    pub use crate::input::Console;
    pub use crate::pricer::BondPricer;
    pub use crate::quote::{zero_coupon_price, BondQuote, Field};
    pub use crate::report::{format_report, ReportFormat};
}
