//! Text form of intervals.
//!
//! An interval is written as `[lower,upper]` where the lower bound is rounded down
//! and the upper bound is rounded up, so that parsing the text back gives an
//! interval containing the original one.

use super::ExtendedInterval;
use super::EMPTY;
use super::ENTIRE;
use crate::decimal::DecimalDigits;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::directed::format_ceiling;
use crate::directed::format_floor;
use crate::directed::format_zero;
use crate::directed::formatted_width;
use core::cmp::Ordering;
use core::fmt::Display;
use core::fmt::Formatter;
use core::str::FromStr;

/// Number of significant digits of a bound when no precision is given.
pub const DEFAULT_PRECISION: usize = 16;

const EMPTY_WORD: &str = "EMPTY";

impl ExtendedInterval {
    fn write_bound(f: &mut Formatter<'_>, x: f64, upper: bool, p: usize) -> core::fmt::Result {
        let w = formatted_width(p);
        if x.is_infinite() {
            let s = if x > 0.0 { "Infinity" } else { "-Infinity" };
            write!(f, "{:>w$}", s, w = w)
        } else if x == 0.0 {
            f.write_str(&format_zero(if upper { "0." } else { "-." }, p))
        } else if upper {
            f.write_str(&format_ceiling(x, p))
        } else {
            f.write_str(&format_floor(x, p))
        }
    }

    /// Parses an interval from a string.
    ///
    /// Accepted forms are `[x]`, `[lower,upper]` and `[EMPTY]`, with optional whitespace
    /// around the bounds. A bound is a decimal number, `Infinity`, or `NaN`.
    /// `[x]` gives the sharpest interval containing the decimal value `x`.
    /// NaN bounds or a lower bound greater than the upper bound give ENTIRE.
    ///
    /// ## Errors
    ///
    ///  - InvalidFormat: the string is not an interval.
    pub fn parse(s: &str) -> Result<Self, Error> {
        let s = s.trim();
        let body = s
            .strip_prefix('[')
            .and_then(|b| b.strip_suffix(']'))
            .ok_or(Error::InvalidFormat)?;

        let (ls, rs) = match body.split_once(',') {
            Some((l, r)) => (l.trim(), Some(r.trim())),
            None => (body.trim(), None),
        };

        if ls == EMPTY_WORD || rs == Some(EMPTY_WORD) {
            return if rs.is_none() {
                Ok(EMPTY)
            } else {
                Err(Error::InvalidFormat)
            };
        }

        let lb = DecimalDigits::parse(ls)?;
        let ub = match rs {
            Some(rs) => DecimalDigits::parse(rs)?,
            None => lb.clone(),
        };

        if lb.is_nan() || ub.is_nan() || cmp_decimal(&lb, &ub) == Ordering::Greater {
            return Ok(ENTIRE);
        }

        let inf = lb.to_f64_with(RoundingMode::Floor)?;
        let sup = ub.to_f64_with(RoundingMode::Ceiling)?;

        Ok(Self::new(inf, sup))
    }
}

// Orders non-NaN decimal values.
fn cmp_decimal(a: &DecimalDigits, b: &DecimalDigits) -> Ordering {
    let sig = |d: &DecimalDigits| -> i32 {
        if d.is_zero() {
            0
        } else if d.sign().is_negative() {
            -1
        } else {
            1
        }
    };

    let (sa, sb) = (sig(a), sig(b));
    if sa != sb || sa == 0 {
        return sa.cmp(&sb);
    }

    let mag = match (a.is_inf(), b.is_inf()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a
            .dec_exponent()
            .cmp(&b.dec_exponent())
            .then_with(|| a.digits().cmp(b.digits())),
    };

    if sa < 0 {
        mag.reverse()
    } else {
        mag
    }
}

impl Display for ExtendedInterval {
    /// Writes `[lower,upper]` with 16 significant digits per bound,
    /// or the number of digits given as the formatting precision.
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let p = f.precision().unwrap_or(DEFAULT_PRECISION).max(1);

        if self.is_empty() {
            let w = 2 * formatted_width(p) + 1 - EMPTY_WORD.len();
            return write!(f, "[{}{:w$}]", EMPTY_WORD, "", w = w);
        }

        f.write_str("[")?;
        Self::write_bound(f, self.inf, false, p)?;
        f.write_str(",")?;
        Self::write_bound(f, self.sup, true, p)?;
        f.write_str("]")
    }
}

impl FromStr for ExtendedInterval {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExtendedInterval::parse(s)
    }
}
