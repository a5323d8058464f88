//! Report rendering.

use serde::{Deserialize, Serialize};

use crate::error::{PricerError, PricerResult};
use crate::format::Precision;
use crate::quote::{BondQuote, Field};

/// Rule printed between the inputs and the price.
pub const SECTION_RULE: &str = "=============";

/// Rendered in place of a price that has not been computed.
pub const UNPRICED: &str = "n/a";

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Fixed-layout labelled text.
    #[default]
    Text,
    /// Pretty-printed JSON object.
    Json,
}

/// Renders the fixed-layout text report.
///
/// ```text
/// Face Value : 1000
/// Interest Rate : 0
/// Year Fraction : 5
/// =============
/// Price : 1000
/// ```
#[must_use]
pub fn format_report(quote: &BondQuote, precision: Precision) -> String {
    let mut out = String::new();
    for field in Field::ALL {
        out.push_str(&format!(
            "{} : {}\n",
            field.label(),
            precision.format(quote.get(field))
        ));
    }
    let price = quote
        .price()
        .map_or_else(|| UNPRICED.to_string(), |p| precision.format(p));
    out.push_str(&format!("{SECTION_RULE}\nPrice : {price}\n"));
    out
}

/// Renders the report in the requested format.
///
/// JSON ignores `precision`; numbers use the shortest round-trip form and
/// non-finite values become `null`.
pub fn render_report(
    quote: &BondQuote,
    format: ReportFormat,
    precision: Precision,
) -> PricerResult<String> {
    match format {
        ReportFormat::Text => Ok(format_report(quote, precision)),
        ReportFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(quote).map_err(|e| PricerError::Serialization {
                    reason: e.to_string(),
                })?;
            json.push('\n');
            Ok(json)
        }
    }
}
