//! Decimal text conversion with a guaranteed rounding direction.
//!
//! The output format is `0.d1d2...dnE±xxx` for nonnegative values and
//! `-.d1d2...dnE±xxx` for negative values, where the value is `0.d1d2...dn * 10^xxx`.

use crate::decimal::DecimalDigits;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::strtod::parse_f64_with;

/// The greatest double not greater than the decimal value of `s`.
///
/// ## Errors
///
///  - InvalidFormat: the string is not a number.
pub fn parse_floor(s: &str) -> Result<f64, Error> {
    parse_f64_with(s, RoundingMode::Floor)
}

/// The least double not less than the decimal value of `s`.
///
/// ## Errors
///
///  - InvalidFormat: the string is not a number.
pub fn parse_ceiling(s: &str) -> Result<f64, Error> {
    parse_f64_with(s, RoundingMode::Ceiling)
}

/// Formats `x` with `precision` significant digits, rounding toward negative infinity.
///
/// ## Panics
///
/// Panics if `precision` is zero.
pub fn format_floor(x: f64, precision: usize) -> String {
    format_directed(x, precision, RoundingMode::Floor)
}

/// Formats `x` with `precision` significant digits, rounding toward positive infinity.
///
/// ## Panics
///
/// Panics if `precision` is zero.
pub fn format_ceiling(x: f64, precision: usize) -> String {
    format_directed(x, precision, RoundingMode::Ceiling)
}

/// Width of a formatted finite number with `precision` digits.
pub(crate) fn formatted_width(precision: usize) -> usize {
    precision + 7
}

// Zero digits with the given lead, used for zero bounds.
pub(crate) fn format_zero(lead: &str, precision: usize) -> String {
    let mut s = String::with_capacity(formatted_width(precision));
    s.push_str(lead);
    for _ in 0..precision {
        s.push('0');
    }
    s.push_str("E+000");
    s
}

fn format_directed(x: f64, precision: usize, rm: RoundingMode) -> String {
    assert!(precision >= 1, "precision must be at least 1");

    if x.is_nan() {
        return String::from("NaN");
    }

    if x.is_infinite() {
        return String::from(if x > 0.0 { "Infinity" } else { "-Infinity" });
    }

    if x == 0.0 {
        return format_zero("0.", precision);
    }

    // precision is positive and rm is directed, so no error is possible
    let d = DecimalDigits::from_f64_fixed(x, precision, rm)
        .expect("Directed rounding of a finite value");

    let mut s = String::with_capacity(formatted_width(precision));
    s.push_str(if d.sign().is_negative() { "-." } else { "0." });
    for v in d.digits() {
        s.push((b'0' + v) as char);
    }

    let e = d.dec_exponent();
    s.push_str(&format!("E{}{:03}", if e < 0 { '-' } else { '+' }, e.unsigned_abs()));

    s
}
