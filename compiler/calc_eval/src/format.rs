//! Decimal rendering of results.
//!
//! Values are rounded to [`FRACTION_DIGITS`] places with Rust's precision
//! formatting (correctly rounded from the exact binary value, exact ties to
//! even). Trailing fractional zeros and a bare trailing `.` are removed, and
//! a result that rounds to zero from below prints as `0` rather than `-0`.
//! Output never uses exponent notation or digit grouping, so large values
//! print every integer digit of the exact binary value.

/// Maximum number of digits printed after the decimal point.
pub const FRACTION_DIGITS: usize = 2;

/// Format an evaluation result as text.
pub fn format_number(value: f64) -> String {
    let mut text = format!("{:.*}", FRACTION_DIGITS, value);

    if text.contains('.') {
        let kept = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(kept);
    }

    if text == "-0" {
        text.remove(0);
    }

    text
}
