//! The zero-coupon bond quote and its pricing formula.
//!
//! A zero-coupon bond pays its face value once, at maturity. Under
//! continuous discounting its present value is
//!
//! ```text
//! Price = FaceValue * exp(-InterestRate * YearFraction)
//! ```

use std::fmt;

use serde::Serialize;

use crate::format::Precision;
use crate::report::format_report;

/// Continuous discount factor `exp(-rate * t)`.
///
/// Negative rates are valid and yield factors above one.
#[must_use]
pub fn discount_factor(rate: f64, year_fraction: f64) -> f64 {
    (-rate * year_fraction).exp()
}

/// Present value of a zero-coupon bond under continuous discounting.
///
/// Total over the reals. Extreme `rate * t` products underflow to zero,
/// or overflow to infinity for large negative rates; neither is an error.
///
/// # Example
///
/// ```rust
/// use zerobond_core::zero_coupon_price;
///
/// let price = zero_coupon_price(100.0, 0.05, 2.0);
/// assert!((price - 90.4837418036).abs() < 1e-9);
/// ```
#[must_use]
pub fn zero_coupon_price(face_value: f64, rate: f64, year_fraction: f64) -> f64 {
    face_value * discount_factor(rate, year_fraction)
}

/// One of the three independent inputs of a [`BondQuote`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Redemption amount at maturity.
    FaceValue,
    /// Continuously-compounded annual rate.
    InterestRate,
    /// Time to maturity in years.
    YearFraction,
}

impl Field {
    /// All input fields, in prompt order.
    pub const ALL: [Field; 3] = [Field::FaceValue, Field::InterestRate, Field::YearFraction];

    /// Interactive prompt written before the field is read.
    ///
    /// Spacing differs between fields and is part of the console contract.
    #[must_use]
    pub fn prompt(&self) -> &'static str {
        match self {
            Field::FaceValue => "Face Value : ",
            Field::InterestRate => "Interest Rate  :",
            Field::YearFraction => "Year Fraction :",
        }
    }

    /// Label used in the report.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Field::FaceValue => "Face Value",
            Field::InterestRate => "Interest Rate",
            Field::YearFraction => "Year Fraction",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Field::FaceValue => "face value",
            Field::InterestRate => "interest rate",
            Field::YearFraction => "year fraction",
        };
        write!(f, "{s}")
    }
}

/// A zero-coupon bond quote.
///
/// Holds the three pricing inputs and the derived price. The price is
/// `None` until [`BondQuote::compute_price`] runs and is cleared by every
/// input change, so a stale price cannot be observed.
///
/// # Example
///
/// ```rust
/// use zerobond_core::BondQuote;
///
/// let mut quote = BondQuote::new(1000.0, 0.0, 5.0);
/// assert_eq!(quote.price(), None);
///
/// assert_eq!(quote.compute_price(), 1000.0);
/// assert_eq!(quote.price(), Some(1000.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct BondQuote {
    face_value: f64,
    interest_rate: f64,
    year_fraction: f64,
    price: Option<f64>,
}

impl BondQuote {
    /// Creates an unpriced quote.
    #[must_use]
    pub fn new(face_value: f64, interest_rate: f64, year_fraction: f64) -> Self {
        Self {
            face_value,
            interest_rate,
            year_fraction,
            price: None,
        }
    }

    /// Creates a quote and prices it.
    #[must_use]
    pub fn priced(face_value: f64, interest_rate: f64, year_fraction: f64) -> Self {
        let mut quote = Self::new(face_value, interest_rate, year_fraction);
        quote.compute_price();
        quote
    }

    /// Returns the face value.
    #[must_use]
    pub fn face_value(&self) -> f64 {
        self.face_value
    }

    /// Returns the continuously-compounded interest rate.
    #[must_use]
    pub fn interest_rate(&self) -> f64 {
        self.interest_rate
    }

    /// Returns the year fraction.
    #[must_use]
    pub fn year_fraction(&self) -> f64 {
        self.year_fraction
    }

    /// Returns the price, or `None` if it has not been computed.
    #[must_use]
    pub fn price(&self) -> Option<f64> {
        self.price
    }

    /// Returns true once the price has been computed.
    #[must_use]
    pub fn is_priced(&self) -> bool {
        self.price.is_some()
    }

    /// Returns the value of an input field.
    #[must_use]
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::FaceValue => self.face_value,
            Field::InterestRate => self.interest_rate,
            Field::YearFraction => self.year_fraction,
        }
    }

    /// Sets an input field and invalidates the price.
    pub fn set(&mut self, field: Field, value: f64) {
        match field {
            Field::FaceValue => self.face_value = value,
            Field::InterestRate => self.interest_rate = value,
            Field::YearFraction => self.year_fraction = value,
        }
        self.price = None;
    }

    /// Recomputes the price from the inputs, stores and returns it.
    pub fn compute_price(&mut self) -> f64 {
        let price = zero_coupon_price(self.face_value, self.interest_rate, self.year_fraction);
        tracing::debug!(
            face_value = self.face_value,
            interest_rate = self.interest_rate,
            year_fraction = self.year_fraction,
            price,
            "priced zero-coupon bond"
        );
        self.price = Some(price);
        price
    }
}

impl fmt::Display for BondQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_report(self, Precision::default()))
    }
}
