//! Number rendering for reports.
//!
//! `Significant(n)` follows C `%g` rules: `n` significant digits, fixed
//! notation when the decimal exponent lies in `[-5, n)`, scientific
//! notation otherwise, trailing zeros removed. Large `n` prints the exact
//! binary expansion of the double, as a C stream does.

/// Default number of significant digits; enough to round-trip any f64.
pub const DEFAULT_SIGNIFICANT_DIGITS: u32 = 17;

/// How numbers are rendered in the text report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precision {
    /// Fixed number of significant digits, `%g` style.
    Significant(u32),
    /// Shortest representation that parses back to the same value.
    Shortest,
}

impl Default for Precision {
    fn default() -> Self {
        Precision::Significant(DEFAULT_SIGNIFICANT_DIGITS)
    }
}

impl Precision {
    /// Renders a value.
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return format_non_finite(value);
        }
        match self {
            Precision::Significant(digits) => format_significant(value, *digits as usize),
            Precision::Shortest => format!("{value}"),
        }
    }
}

fn format_non_finite(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value.is_sign_negative() {
        "-inf".to_string()
    } else {
        "inf".to_string()
    }
}

/// `%.{digits}g` for a finite value.
fn format_significant(value: f64, digits: usize) -> String {
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }
    let digits = digits.max(1);

    // Round once in scientific form; the rounded exponent picks the style.
    let scientific = format!("{:.*e}", digits - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i64 = exponent.parse().unwrap_or(0);

    if exponent < -5 || exponent >= digits as i64 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (digits as i64 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
