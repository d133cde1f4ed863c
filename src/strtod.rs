//! Conversion of decimal digits to binary floating point values.

use crate::common::consts::BIG_10_POW;
use crate::common::consts::MAX_SMALL_DIGITS;
use crate::common::consts::SINGLE_MAX_SMALL_DIGITS;
use crate::common::consts::SINGLE_SMALL_10_POW;
use crate::common::consts::SMALL_10_POW;
use crate::common::consts::TINY_10_POW;
use crate::common::int::BigDigits;
use crate::decimal::DecimalDigits;
use crate::decimal::Flavor;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::defs::Sign;
use crate::defs::MAX_VALUE;
use crate::defs::MIN_VALUE;
use crate::ulp::Ieee754;
use core::cmp::Ordering;

// Decimal exponents (of the form 0.d * 10^e) beyond which a value saturates.
const DOUBLE_OVERFLOW_EXP: i32 = 310;
const DOUBLE_UNDERFLOW_EXP: i32 = -324;
const FLOAT_OVERFLOW_EXP: i32 = 40;
const FLOAT_UNDERFLOW_EXP: i32 = -46;

// Binary values never exceed 2^1025 or go below 2^-1076, so a decimal value
// with an exponent this far out compares without big integers.
const CMP_EXP_LIMIT: i32 = 400;

/// Exact value `d * 10^p10` of a finite nonzero decimal.
struct Exact {
    d: BigDigits,
    p10: i32,
    dec_exponent: i32,
}

impl Exact {
    fn new(digits: &[u8], dec_exponent: i32) -> Self {
        Exact {
            d: BigDigits::from_digits(0, digits, 0, digits.len()),
            p10: dec_exponent - digits.len() as i32,
            dec_exponent,
        }
    }

    /// Compares the exact value with `m * 2^e2`.
    fn cmp_bin(&self, m: u64, e2: i32) -> Ordering {
        if m == 0 {
            return Ordering::Greater;
        }

        if self.dec_exponent > CMP_EXP_LIMIT {
            return Ordering::Greater;
        } else if self.dec_exponent < -CMP_EXP_LIMIT {
            return Ordering::Less;
        }

        // d * 5^p10 * 2^p10 against m * 2^e2
        let (l5, r5) = if self.p10 >= 0 {
            (self.p10 as usize, 0)
        } else {
            (0, (-self.p10) as usize)
        };

        let mut l2 = self.p10.max(0) + (-e2).max(0);
        let mut r2 = (-self.p10).max(0) + e2.max(0);
        let common2 = l2.min(r2);
        l2 -= common2;
        r2 -= common2;

        let lhs = self.d.mult_pow52(l5, l2 as usize);
        let rhs = BigDigits::from_u64(m).mult_pow52(r5, r2 as usize);

        lhs.cmp(&rhs)
    }

    /// Compares the exact value with a nonnegative value.
    fn cmp<T: Ieee754>(&self, v: T) -> Ordering {
        if v.is_infinite() {
            return Ordering::Less;
        }
        let (m, e) = v.decompose();
        self.cmp_bin(m, e)
    }

    /// Compares the exact value with the midpoint between `v` and its successor.
    fn cmp_mid<T: Ieee754>(&self, v: T) -> Ordering {
        let (m, e) = v.decompose();
        self.cmp_bin(2 * m + 1, e - 1)
    }
}

/// Moves the positive estimate `v` one unit at a time toward the exact value
/// until it is the nearest value, ties to even.
/// Returns the result and the exact value compared with the result.
fn correct<T: Ieee754>(exact: &Exact, mut v: T) -> (T, Ordering) {
    loop {
        match exact.cmp(v) {
            Ordering::Equal => return (v, Ordering::Equal),
            Ordering::Greater => {
                let hi = v.next();
                if !hi.is_infinite() {
                    match exact.cmp(hi) {
                        Ordering::Greater => {
                            v = hi;
                            continue;
                        }
                        Ordering::Equal => return (hi, Ordering::Equal),
                        Ordering::Less => {}
                    }
                }
                return match exact.cmp_mid(v) {
                    Ordering::Less => (v, Ordering::Greater),
                    Ordering::Greater => (hi, Ordering::Less),
                    Ordering::Equal if v.is_even() => (v, Ordering::Greater),
                    Ordering::Equal => (hi, Ordering::Less),
                };
            }
            Ordering::Less => {
                let lo = v.prev();
                if lo > T::ZERO {
                    match exact.cmp(lo) {
                        Ordering::Less => {
                            v = lo;
                            continue;
                        }
                        Ordering::Equal => return (lo, Ordering::Equal),
                        Ordering::Greater => {}
                    }
                }
                return match exact.cmp_mid(lo) {
                    Ordering::Greater => (v, Ordering::Less),
                    Ordering::Less => (lo, Ordering::Greater),
                    Ordering::Equal if lo.is_even() => (lo, Ordering::Greater),
                    Ordering::Equal => (v, Ordering::Less),
                };
            }
        }
    }
}

// Integer value of the digits, which must fit into 64 bits.
fn small_value(digits: &[u8]) -> u64 {
    digits.iter().fold(0u64, |acc, d| acc * 10 + *d as u64)
}

/// Scaled estimate of a decimal value; it may be off by a few units.
fn estimate(digits: &[u8], dec_exponent: i32) -> f64 {
    let k = digits.len().min(MAX_SMALL_DIGITS + 1);
    let mut v = small_value(&digits[..k]) as f64;
    let exp = dec_exponent - k as i32;

    if exp > 0 {
        v *= SMALL_10_POW[(exp & 15) as usize];
        let mut e = exp >> 4;
        let mut j = 0;
        while e > 0 {
            if e & 1 != 0 {
                v *= BIG_10_POW[j];
            }
            e >>= 1;
            j += 1;
        }
    } else if exp < 0 {
        let exp = -exp;
        v /= SMALL_10_POW[(exp & 15) as usize];
        let mut e = exp >> 4;
        let mut j = 0;
        while e > 0 {
            if e & 1 != 0 {
                v *= TINY_10_POW[j];
            }
            e >>= 1;
            j += 1;
        }
    }

    // the correction works only on finite nonzero values
    if v.is_infinite() {
        MAX_VALUE
    } else if v == 0.0 {
        MIN_VALUE
    } else {
        v
    }
}

/// Nearest double to the magnitude of a finite nonzero decimal.
/// Returns the exact value compared with the result when it is known.
fn nearest_f64(digits: &[u8], dec_exponent: i32) -> (f64, Option<Ordering>) {
    if dec_exponent > DOUBLE_OVERFLOW_EXP {
        return (f64::INFINITY, Some(Ordering::Less));
    }

    if dec_exponent <= DOUBLE_UNDERFLOW_EXP {
        return (0.0, Some(Ordering::Greater));
    }

    let n = digits.len();
    let exp = dec_exponent - n as i32;

    if n <= MAX_SMALL_DIGITS {
        // one rounding at most
        let v = small_value(digits) as f64;
        let max_exp = SMALL_10_POW.len() as i32 - 1;

        if exp == 0 {
            return (v, Some(Ordering::Equal));
        } else if exp > 0 {
            if exp <= max_exp {
                return (v * SMALL_10_POW[exp as usize], None);
            }
            let slop = (MAX_SMALL_DIGITS - n) as i32;
            if exp <= max_exp + slop {
                let v = v * SMALL_10_POW[slop as usize];
                return (v * SMALL_10_POW[(exp - slop) as usize], None);
            }
        } else if exp >= -max_exp {
            return (v / SMALL_10_POW[(-exp) as usize], None);
        }
    }

    let exact = Exact::new(digits, dec_exponent);
    let (v, dir) = correct(&exact, estimate(digits, dec_exponent));

    (v, Some(dir))
}

/// Nearest float to the magnitude of a finite nonzero decimal.
fn nearest_f32(digits: &[u8], dec_exponent: i32) -> (f32, Option<Ordering>) {
    if dec_exponent > FLOAT_OVERFLOW_EXP {
        return (f32::INFINITY, Some(Ordering::Less));
    }

    if dec_exponent <= FLOAT_UNDERFLOW_EXP {
        return (0.0, Some(Ordering::Greater));
    }

    let n = digits.len();
    let exp = dec_exponent - n as i32;

    if n <= SINGLE_MAX_SMALL_DIGITS {
        let v = small_value(digits) as f32;
        let max_exp = SINGLE_SMALL_10_POW.len() as i32 - 1;

        if exp == 0 {
            return (v, Some(Ordering::Equal));
        } else if exp > 0 {
            if exp <= max_exp {
                return (v * SINGLE_SMALL_10_POW[exp as usize], None);
            }
            let slop = (SINGLE_MAX_SMALL_DIGITS - n) as i32;
            if exp <= max_exp + slop {
                let v = v * SINGLE_SMALL_10_POW[slop as usize];
                return (v * SINGLE_SMALL_10_POW[(exp - slop) as usize], None);
            }
        } else if exp >= -max_exp {
            return (v / SINGLE_SMALL_10_POW[(-exp) as usize], None);
        }
    }

    if n <= MAX_SMALL_DIGITS && exp >= 0 && n as i32 + exp <= MAX_SMALL_DIGITS as i32 {
        // the integer is exact as a double
        let v = small_value(digits) as f64 * SMALL_10_POW[exp as usize];
        return (v as f32, None);
    }

    // The nearest double rounded to odd carries a sticky bit, so the
    // narrowing below is a single correct rounding.
    let exact = Exact::new(digits, dec_exponent);
    let (mut d, dir) = nearest_f64(digits, dec_exponent);
    let dir = dir.unwrap_or_else(|| exact.cmp(d));

    if dir != Ordering::Equal && d.is_even() {
        d = if dir == Ordering::Greater {
            d.next()
        } else {
            d.prev()
        };
    }

    let v = d as f32;
    (v, Some(exact.cmp(v)))
}

/// Selects the neighbour of the nearest magnitude `v` under the rounding mode.
/// `dir` is the exact value compared with `v`.
fn directed<T: Ieee754>(
    exact: &Exact,
    sign: Sign,
    v: T,
    dir: Ordering,
    rm: RoundingMode,
) -> Result<T, Error> {
    if dir == Ordering::Equal {
        return Ok(v);
    }

    if rm == RoundingMode::HalfEven {
        return Ok(v);
    }

    let (lo, hi) = if dir == Ordering::Greater {
        (v, v.next())
    } else {
        (v.prev(), v)
    };

    let half = match rm {
        RoundingMode::HalfUp | RoundingMode::HalfDown => exact.cmp_mid(lo),
        _ => Ordering::Less,
    };

    if rm.round_away(sign, !lo.is_even(), half, true)? {
        Ok(hi)
    } else {
        Ok(lo)
    }
}

// Magnitude of a saturated result outside of the exponent range.
fn saturated<T: Ieee754>(sign: Sign, v: T, rm: RoundingMode) -> Result<T, Error> {
    if rm == RoundingMode::Unnecessary {
        return Err(Error::RoundingRequired);
    }

    if v.is_infinite() {
        if rm.overflows_to_inf(sign) {
            Ok(T::INFINITY)
        } else {
            Ok(T::MAX)
        }
    } else if rm.round_away(sign, false, Ordering::Less, true)? {
        Ok(T::ZERO.next())
    } else {
        Ok(T::ZERO)
    }
}

fn apply_sign<T: Ieee754>(sign: Sign, v: T) -> T {
    if sign.is_negative() {
        -v
    } else {
        v
    }
}

impl DecimalDigits {
    // Special values, or None for a finite nonzero value.
    fn special<T: Ieee754>(&self) -> Option<T> {
        match self.flavor() {
            Flavor::NaN => Some(T::NAN),
            Flavor::Inf => Some(apply_sign(self.sign(), T::INFINITY)),
            Flavor::Finite if self.is_zero() => Some(apply_sign(self.sign(), T::ZERO)),
            Flavor::Finite => None,
        }
    }

    /// The double nearest to the decimal value, ties to even.
    pub fn to_f64(&self) -> f64 {
        match self.special() {
            Some(v) => v,
            None => apply_sign(
                self.sign(),
                nearest_f64(self.digits(), self.dec_exponent()).0,
            ),
        }
    }

    /// The float nearest to the decimal value, ties to even.
    pub fn to_f32(&self) -> f32 {
        match self.special() {
            Some(v) => v,
            None => apply_sign(
                self.sign(),
                nearest_f32(self.digits(), self.dec_exponent()).0,
            ),
        }
    }

    /// The double selected from the two neighbours of the decimal value by the rounding mode.
    ///
    /// ## Errors
    ///
    ///  - RoundingRequired: `rm` is `Unnecessary` and the value is not exactly representable.
    pub fn to_f64_with(&self, rm: RoundingMode) -> Result<f64, Error> {
        if let Some(v) = self.special() {
            return Ok(v);
        }

        let (digits, e) = (self.digits(), self.dec_exponent());
        let sign = self.sign();
        let (v, dir) = nearest_f64(digits, e);

        if e > DOUBLE_OVERFLOW_EXP || e <= DOUBLE_UNDERFLOW_EXP {
            return Ok(apply_sign(sign, saturated(sign, v, rm)?));
        }

        let exact = Exact::new(digits, e);
        let dir = dir.unwrap_or_else(|| exact.cmp(v));
        let r = directed(&exact, sign, v, dir, rm)?;

        Ok(apply_sign(sign, r))
    }

    /// The float selected from the two neighbours of the decimal value by the rounding mode.
    ///
    /// ## Errors
    ///
    ///  - RoundingRequired: `rm` is `Unnecessary` and the value is not exactly representable.
    pub fn to_f32_with(&self, rm: RoundingMode) -> Result<f32, Error> {
        if let Some(v) = self.special() {
            return Ok(v);
        }

        let (digits, e) = (self.digits(), self.dec_exponent());
        let sign = self.sign();
        let (v, dir) = nearest_f32(digits, e);

        if e > FLOAT_OVERFLOW_EXP || e <= FLOAT_UNDERFLOW_EXP {
            return Ok(apply_sign(sign, saturated(sign, v, rm)?));
        }

        let exact = Exact::new(digits, e);
        let dir = dir.unwrap_or_else(|| exact.cmp(v));
        let r = directed(&exact, sign, v, dir, rm)?;

        Ok(apply_sign(sign, r))
    }
}

/// Parses a decimal number to the nearest double.
///
/// ## Errors
///
///  - InvalidFormat: the string is not a number.
pub fn parse_f64(s: &str) -> Result<f64, Error> {
    Ok(DecimalDigits::parse(s)?.to_f64())
}

/// Parses a decimal number to the nearest float.
///
/// ## Errors
///
///  - InvalidFormat: the string is not a number.
pub fn parse_f32(s: &str) -> Result<f32, Error> {
    Ok(DecimalDigits::parse(s)?.to_f32())
}

/// Parses a decimal number to a double using the rounding mode `rm`.
///
/// ## Errors
///
///  - InvalidFormat: the string is not a number.
///  - RoundingRequired: `rm` is `Unnecessary` and the value is not exactly representable.
pub fn parse_f64_with(s: &str, rm: RoundingMode) -> Result<f64, Error> {
    DecimalDigits::parse(s)?.to_f64_with(rm)
}

/// Parses a decimal number to a float using the rounding mode `rm`.
///
/// ## Errors
///
///  - InvalidFormat: the string is not a number.
///  - RoundingRequired: `rm` is `Unnecessary` and the value is not exactly representable.
pub fn parse_f32_with(s: &str, rm: RoundingMode) -> Result<f32, Error> {
    DecimalDigits::parse(s)?.to_f32_with(rm)
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::{MIN_NORMAL, MIN_VALUE_F32};
    use crate::ulp::{next, prev};
    use rand::random;

    fn random_decimal(max_digits: usize, min_exp: i32, max_exp: i32) -> String {
        let n = 1 + random::<usize>() % max_digits;
        let mut s = String::new();
        if random::<bool>() {
            s.push('-');
        }
        for i in 0..n {
            if i == 1 {
                s.push('.');
            }
            s.push((b'0' + random::<u8>() % 10) as char);
        }
        let e = min_exp + (random::<u32>() % (max_exp - min_exp + 1) as u32) as i32;
        s + "e" + &e.to_string()
    }

    #[test]
    fn test_parse_nearest() {
        assert!(parse_f64("0.1").unwrap() == 0.1);
        assert!(parse_f64("-0").unwrap().is_sign_negative());
        assert!(parse_f64("NaN").unwrap().is_nan());
        assert!(parse_f64("-Infinity").unwrap() == f64::NEG_INFINITY);
        assert!(parse_f64("1e400").unwrap() == f64::INFINITY);
        assert!(parse_f64("1e-400").unwrap() == 0.0);
        assert!(parse_f64("4.9e-324").unwrap() == MIN_VALUE);
        assert!(parse_f64("2.4703282292062327e-324").unwrap() == 0.0);
        assert!(parse_f64("2.4703282292062328e-324").unwrap() == MIN_VALUE);
        assert!(parse_f64("1.7976931348623158e308").unwrap() == MAX_VALUE);
        assert!(parse_f64("1.7976931348623159e308").unwrap() == f64::INFINITY);
        assert!(parse_f64("2.2250738585072014e-308").unwrap() == MIN_NORMAL);
        assert!(parse_f64("9007199254740993").unwrap() == 9007199254740992.0);
        assert!(parse_f64("9007199254740995").unwrap() == 9007199254740996.0);
        assert!(parse_f64("123456789012345678901234567890").unwrap() == 1.2345678901234568e29);
        assert!(parse_f64("1x") == Err(Error::InvalidFormat));

        for _ in 0..10000 {
            let s = random_decimal(25, -345, 320);
            let expected: f64 = s.parse().unwrap();
            let v = parse_f64(&s).unwrap();
            assert!(v.to_bits() == expected.to_bits(), "{}", s);
        }
    }

    #[test]
    fn test_parse_f32() {
        assert!(parse_f32("0.1").unwrap() == 0.1f32);
        assert!(parse_f32("16777217").unwrap() == 16777216.0);
        assert!(parse_f32("3.4028235e38").unwrap() == f32::MAX);
        assert!(parse_f32("1e39").unwrap() == f32::INFINITY);
        assert!(parse_f32("1.4e-45").unwrap() == MIN_VALUE_F32);
        assert!(parse_f32("1e-46").unwrap() == 0.0);

        // above the tie of 1 and 1 + 2^-23 by a margin far below a double unit
        assert!(parse_f32("1.000000059604644775390626").unwrap() == 1.0 + f32::EPSILON);
        assert!(parse_f32("1.000000059604644775390625").unwrap() == 1.0);

        for _ in 0..10000 {
            let s = random_decimal(20, -50, 40);
            let expected: f32 = s.parse().unwrap();
            let v = parse_f32(&s).unwrap();
            assert!(v.to_bits() == expected.to_bits(), "{}", s);
        }
    }

    #[test]
    fn test_round_trip() {
        for _ in 0..10000 {
            let x = f64::from_bits(random());
            if x.is_nan() {
                continue;
            }
            assert!(DecimalDigits::from_f64(x).to_f64().to_bits() == x.to_bits());

            let y = f32::from_bits(random());
            if y.is_nan() {
                continue;
            }
            assert!(DecimalDigits::from_f32(y).to_f32().to_bits() == y.to_bits());
        }
    }

    #[test]
    fn test_parse_directed() {
        use RoundingMode::*;

        let n = parse_f64("0.1").unwrap();
        assert!(parse_f64_with("0.1", HalfEven).unwrap() == n);
        assert!(parse_f64_with("0.1", Floor).unwrap() == prev(n));
        assert!(parse_f64_with("0.1", Ceiling).unwrap() == n);
        assert!(parse_f64_with("0.1", Down).unwrap() == prev(n));
        assert!(parse_f64_with("-0.1", Floor).unwrap() == -n);
        assert!(parse_f64_with("-0.1", Ceiling).unwrap() == -prev(n));
        assert!(parse_f64_with("-0.1", Up).unwrap() == -n);
        assert!(parse_f64_with("0.1", Unnecessary) == Err(Error::RoundingRequired));
        assert!(parse_f64_with("0.375", Unnecessary).unwrap() == 0.375);

        // ties
        assert!(parse_f64_with("9007199254740993", HalfUp).unwrap() == 9007199254740994.0);
        assert!(parse_f64_with("9007199254740993", HalfDown).unwrap() == 9007199254740992.0);
        assert!(parse_f64_with("9007199254740993", HalfEven).unwrap() == 9007199254740992.0);
        assert!(parse_f64_with("-9007199254740993", HalfUp).unwrap() == -9007199254740994.0);
        assert!(parse_f32_with("16777217", HalfUp).unwrap() == 16777218.0);
        assert!(parse_f32_with("16777217", HalfDown).unwrap() == 16777216.0);
        assert!(parse_f32_with("16777217", Ceiling).unwrap() == 16777218.0);

        // saturation
        assert!(parse_f64_with("1e400", HalfEven).unwrap() == f64::INFINITY);
        assert!(parse_f64_with("1e400", Down).unwrap() == MAX_VALUE);
        assert!(parse_f64_with("1e400", Floor).unwrap() == MAX_VALUE);
        assert!(parse_f64_with("-1e400", Floor).unwrap() == f64::NEG_INFINITY);
        assert!(parse_f64_with("-1e400", Ceiling).unwrap() == -MAX_VALUE);
        assert!(parse_f64_with("1.7976931348623158e308", Up).unwrap() == f64::INFINITY);
        assert!(parse_f64_with("1.7976931348623158e308", Down).unwrap() == MAX_VALUE);
        assert!(parse_f64_with("1e400", Unnecessary) == Err(Error::RoundingRequired));
        assert!(parse_f64_with("1e-400", Up).unwrap() == MIN_VALUE);
        assert!(parse_f64_with("1e-400", HalfUp).unwrap() == 0.0);
        assert!(parse_f64_with("-1e-400", Floor).unwrap() == -MIN_VALUE);
        assert!(parse_f64_with("-1e-400", Ceiling).unwrap() == 0.0);
        assert!(parse_f64_with("1e-330", Ceiling).unwrap() == MIN_VALUE);
        assert!(parse_f32_with("1e39", Down).unwrap() == f32::MAX);
        assert!(parse_f32_with("1e-50", Up).unwrap() == MIN_VALUE_F32);

        assert!(parse_f64_with("Infinity", Floor).unwrap() == f64::INFINITY);
        assert!(parse_f64_with("nan", Ceiling).unwrap().is_nan());

        for _ in 0..5000 {
            let s = random_decimal(22, -330, 310);
            let fl = parse_f64_with(&s, Floor).unwrap();
            let ce = parse_f64_with(&s, Ceiling).unwrap();
            let ne = parse_f64(&s).unwrap();
            assert!(fl <= ne && ne <= ce, "{}", s);
            if fl == ce {
                assert!(parse_f64_with(&s, Unnecessary).unwrap() == ne);
            } else {
                assert!(next(fl) == ce, "{}", s);
                assert!(parse_f64_with(&s, Unnecessary) == Err(Error::RoundingRequired));
            }

            let (dn, up) = if s.starts_with('-') { (ce, fl) } else { (fl, ce) };
            assert!(parse_f64_with(&s, Down).unwrap() == dn);
            assert!(parse_f64_with(&s, Up).unwrap() == up);
        }
    }
}
