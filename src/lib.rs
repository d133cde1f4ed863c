//! Correctly rounded conversion between IEEE-754 numbers and decimal text,
//! and sound interval arithmetic over doubles built on top of it.
//!
//! The crate has two parts.
//!
//! The first part converts `f64` and `f32` values to the shortest decimal digits that read back
//! to the same value, and parses decimal text to the correctly rounded value in any of the
//! rounding modes of [`RoundingMode`]. Directed variants give the greatest double below or the
//! least double above a decimal value, and format a double with a fixed number of digits
//! rounded in a given direction.
//!
//! The second part is [`ExtendedInterval`], a closed interval of doubles. Each operation returns an
//! interval that contains every exact result for every choice of operands from the input intervals.
//! The operations are total: division by an interval containing zero gives the whole line,
//! and the empty interval absorbs everything.
//!
//! ## Examples
//!
//! ```
//! use ival::{DecimalDigits, ExtendedInterval, RoundingMode, parse_f64_with, next};
//!
//! let d = DecimalDigits::from_f64(0.1);
//! assert_eq!(d.to_string(), "0.1");
//!
//! let lo = parse_f64_with("0.1", RoundingMode::Floor).unwrap();
//! let hi = parse_f64_with("0.1", RoundingMode::Ceiling).unwrap();
//! assert_eq!(next(lo), hi);
//!
//! let x: ExtendedInterval = "[0.1, 0.2]".parse().unwrap();
//! let s = x + x;
//! assert!(s.contains(0.2) && s.contains(0.4));
//!
//! let q = ExtendedInterval::from(1) / ExtendedInterval::from(0);
//! assert!(q.is_entire());
//! ```

#![deny(clippy::suspicious)]
#![allow(clippy::comparison_chain)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::collapsible_else_if)]

mod common;
mod decimal;
mod defs;
mod directed;
mod dtoa;
mod interval;
mod parser;
mod strtod;
mod ulp;

#[cfg(feature = "serde")]
mod for_3rd;

pub use crate::common::int::BigDigits;
pub use crate::decimal::DecimalDigits;
pub use crate::decimal::Flavor;
pub use crate::defs::Error;
pub use crate::defs::RoundingMode;
pub use crate::defs::Sign;
pub use crate::directed::format_ceiling;
pub use crate::directed::format_floor;
pub use crate::directed::parse_ceiling;
pub use crate::directed::parse_floor;
pub use crate::interval::ExtendedInterval;
pub use crate::interval::DEFAULT_PRECISION;
pub use crate::interval::EMPTY;
pub use crate::interval::ENTIRE;
pub use crate::interval::NEG_INF;
pub use crate::interval::ONE;
pub use crate::interval::POS_INF;
pub use crate::interval::ZERO;
pub use crate::strtod::parse_f32;
pub use crate::strtod::parse_f32_with;
pub use crate::strtod::parse_f64;
pub use crate::strtod::parse_f64_with;
pub use crate::ulp::next;
pub use crate::ulp::next_f32;
pub use crate::ulp::prev;
pub use crate::ulp::prev_f32;
pub use crate::ulp::ulp;
pub use crate::ulp::Ieee754;

pub use crate::defs::MAX_ULP;
pub use crate::defs::MAX_VALUE;
pub use crate::defs::MIN_NORMAL;
pub use crate::defs::MIN_VALUE;
pub use crate::defs::MIN_VALUE_F32;

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_scenarios() {
        let d = DecimalDigits::from_f64(1.0);
        assert!(d.digits() == [1] && d.dec_exponent() == 1 && d.sign() == Sign::Pos);

        let n = parse_f64_with("0.1", RoundingMode::HalfEven).unwrap();
        assert!(n == 0.1);
        assert!(parse_f64_with("0.1", RoundingMode::Floor).unwrap() == prev(n));

        assert!((ONE / ZERO).is_entire());

        let x = ExtendedInterval::new(0.1, 0.2);
        assert!((x + x).superset(&ExtendedInterval::new(0.2, 0.4)));

        assert!(ONE.to_string() == "[0.1000000000000000E+001,0.1000000000000000E+001]");
    }
}
