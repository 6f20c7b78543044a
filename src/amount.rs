//! Lenient parsing of monetary amount cells.
//!
//! The source reports mix Latin-American (`1.234,56`) and US (`1234.56`)
//! numeric conventions, sometimes with currency symbols. Parsing never
//! fails: a cell that cannot be read as a number contributes 0.0, so one
//! malformed value cannot abort the batch.

/// Parses a raw amount cell into an `f64`.
///
/// Handles the separator layouts found in the reports:
///
/// - `"1234.56"` -> 1234.56
/// - `"1.234,56"` -> 1234.56
/// - `"1234,56"` -> 1234.56
///
/// Currency symbols (`$`, `€`) and embedded spaces are removed before
/// parsing. When both separators appear, `.` is taken as the thousands
/// separator and `,` as the decimal mark. Empty or unparseable input
/// yields 0.0.
///
/// # Examples
///
/// ```
/// use rendicion::parse_amount;
///
/// assert_eq!(parse_amount("$ 1.234,56"), 1234.56);
/// assert_eq!(parse_amount("abc"), 0.0);
/// ```
pub fn parse_amount(raw: &str) -> f64 {
    let mut s: String = raw.trim().replace(['$', '€', ' '], "");
    if s.is_empty() {
        return 0.0;
    }

    if s.contains('.') && s.contains(',') {
        s = s.replace('.', "").replace(',', ".");
    } else if s.contains(',') {
        s = s.replace(',', ".");
    }

    if let Ok(value) = s.parse::<f64>() {
        return value;
    }

    // Last resort: keep digits, '.' and '-', and try once more.
    let cleaned: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | '-'))
        .collect();
    if cleaned.is_empty() {
        0.0
    } else {
        cleaned.parse::<f64>().unwrap_or(0.0)
    }
}

/// Renders a parsed amount in the fixed two-decimal form used by the
/// `Importe` column of the income sheet.
pub fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}
