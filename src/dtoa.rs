//! Conversion of binary floating point values to decimal digits.

use crate::common::consts::LONG_5_POW;
use crate::common::consts::N_5_BITS;
use crate::common::int::BigDigits;
use crate::common::util::count_significant_bits;
use crate::decimal::DecimalDigits;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::defs::Sign;
use crate::defs::DOUBLE_EXP_BIAS;
use crate::defs::DOUBLE_EXP_MASK;
use crate::defs::DOUBLE_EXP_ONE;
use crate::defs::DOUBLE_FRACT_BITS;
use crate::defs::DOUBLE_FRACT_HOB;
use crate::defs::DOUBLE_FRACT_MASK;
use crate::defs::DOUBLE_SIGNIFICANT_BITS;
use crate::defs::DOUBLE_SIGN_MASK;
use crate::defs::FLOAT_EXP_BIAS;
use crate::defs::FLOAT_EXP_MASK;
use crate::defs::FLOAT_FRACT_BITS;
use crate::defs::FLOAT_FRACT_MASK;
use crate::defs::FLOAT_SIGNIFICANT_BITS;
use crate::defs::FLOAT_SIGN_MASK;
use crate::ulp::Ieee754;
use core::cmp::Ordering;

/// Selection of the digit generation algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DigitPath {
    /// Use the narrowest arithmetic that fits.
    Auto,

    /// Always use big integers.
    #[cfg(test)]
    Reference,
}

// Value split into sign, unbiased exponent, mantissa with the hidden bit at
// DOUBLE_FRACT_BITS, and the number of significant bits of the source format.
// `narrow_below` marks a power of two whose lower neighbour is half as far as the upper one.
enum Decomposed {
    Zero,
    Inf,
    NaN,
    Finite {
        bin_exp: i32,
        fract_bits: u64,
        n_significant_bits: i32,
        narrow_below: bool,
    },
}

fn decompose_f64(x: f64) -> (Sign, Decomposed) {
    let bits = x.to_bits();
    let sign = Sign::from_negative(bits & DOUBLE_SIGN_MASK != 0);
    let mut bin_exp = ((bits & DOUBLE_EXP_MASK) >> DOUBLE_FRACT_BITS) as i32;
    let mut fract_bits = bits & DOUBLE_FRACT_MASK;

    if bin_exp == (DOUBLE_EXP_MASK >> DOUBLE_FRACT_BITS) as i32 {
        let d = if fract_bits == 0 {
            Decomposed::Inf
        } else {
            Decomposed::NaN
        };
        return (sign, d);
    }

    let n_significant_bits;
    let narrow_below;
    if bin_exp == 0 {
        if fract_bits == 0 {
            return (sign, Decomposed::Zero);
        }
        while fract_bits & DOUBLE_FRACT_HOB == 0 {
            fract_bits <<= 1;
            bin_exp -= 1;
        }
        n_significant_bits = DOUBLE_FRACT_BITS as i32 + bin_exp + 1;
        narrow_below = false;
        bin_exp += 1;
    } else {
        narrow_below = fract_bits == 0 && bin_exp > 1;
        fract_bits |= DOUBLE_FRACT_HOB;
        n_significant_bits = DOUBLE_SIGNIFICANT_BITS as i32;
    }

    (
        sign,
        Decomposed::Finite {
            bin_exp: bin_exp - DOUBLE_EXP_BIAS,
            fract_bits,
            n_significant_bits,
            narrow_below,
        },
    )
}

fn decompose_f32(x: f32) -> (Sign, Decomposed) {
    let bits = x.to_bits();
    let sign = Sign::from_negative(bits & FLOAT_SIGN_MASK != 0);
    let mut bin_exp = ((bits & FLOAT_EXP_MASK) >> FLOAT_FRACT_BITS) as i32;
    let mut fract_bits = bits & FLOAT_FRACT_MASK;
    let hob = 1u32 << FLOAT_FRACT_BITS;

    if bin_exp == (FLOAT_EXP_MASK >> FLOAT_FRACT_BITS) as i32 {
        let d = if fract_bits == 0 {
            Decomposed::Inf
        } else {
            Decomposed::NaN
        };
        return (sign, d);
    }

    let n_significant_bits;
    let narrow_below;
    if bin_exp == 0 {
        if fract_bits == 0 {
            return (sign, Decomposed::Zero);
        }
        while fract_bits & hob == 0 {
            fract_bits <<= 1;
            bin_exp -= 1;
        }
        n_significant_bits = FLOAT_FRACT_BITS as i32 + bin_exp + 1;
        narrow_below = false;
        bin_exp += 1;
    } else {
        narrow_below = fract_bits == 0 && bin_exp > 1;
        fract_bits |= hob;
        n_significant_bits = FLOAT_SIGNIFICANT_BITS as i32;
    }

    (
        sign,
        Decomposed::Finite {
            bin_exp: bin_exp - FLOAT_EXP_BIAS,
            fract_bits: (fract_bits as u64) << (DOUBLE_FRACT_BITS - FLOAT_FRACT_BITS),
            n_significant_bits,
            narrow_below,
        },
    )
}

fn shortest(sign: Sign, d: Decomposed, path: DigitPath) -> DecimalDigits {
    match d {
        Decomposed::Zero => DecimalDigits::zero(sign),
        Decomposed::Inf => DecimalDigits::inf(sign),
        Decomposed::NaN => DecimalDigits::nan(),
        Decomposed::Finite {
            bin_exp,
            fract_bits,
            n_significant_bits,
            narrow_below,
        } => {
            let (e, digits) = dtoa(bin_exp, fract_bits, n_significant_bits, narrow_below, path);
            DecimalDigits::new(sign, e, digits)
        }
    }
}

impl DecimalDigits {
    /// Shortest digits that convert back to exactly `x` under round-to-nearest.
    pub fn from_f64(x: f64) -> Self {
        let (s, d) = decompose_f64(x);
        shortest(s, d, DigitPath::Auto)
    }

    /// Shortest digits that convert back to exactly `x` under round-to-nearest.
    pub fn from_f32(x: f32) -> Self {
        let (s, d) = decompose_f32(x);
        shortest(s, d, DigitPath::Auto)
    }

    #[cfg(test)]
    pub(crate) fn from_f64_with_path(x: f64, path: DigitPath) -> Self {
        let (s, d) = decompose_f64(x);
        shortest(s, d, path)
    }

    /// Exactly `n` significant digits of the binary value of `x`, rounded with `rm`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `n` is zero.
    ///  - RoundingRequired: `rm` is `Unnecessary` and `x` does not fit in `n` digits.
    pub fn from_f64_fixed(x: f64, n: usize, rm: RoundingMode) -> Result<Self, Error> {
        if n == 0 {
            return Err(Error::InvalidArgument);
        }

        let sign = Sign::from_negative(x.is_sign_negative());

        if x.is_nan() {
            return Ok(Self::nan());
        }

        if x.is_infinite() {
            return Ok(Self::inf(sign));
        }

        if x == 0.0 {
            return Ok(Self::new(sign, 0, vec![0; n]));
        }

        let (m, e) = x.abs().decompose();
        let (exact, dec_shift) = if e >= 0 {
            (BigDigits::from_u64(m).mult_pow52(0, e as usize), 0)
        } else {
            (BigDigits::from_u64(m).mult_pow52((-e) as usize, 0), e)
        };

        let all = exact.to_decimal();
        let mut dec_exponent = all.len() as i32 + dec_shift;

        let (mut kept, tail) = if all.len() > n {
            (all[..n].to_vec(), &all[n..])
        } else {
            let mut v = all.clone();
            v.resize(n, 0);
            (v, &all[all.len()..])
        };

        let nonzero_tail = tail.iter().any(|d| *d != 0);
        let tail_cmp = match tail.first() {
            None => Ordering::Less,
            Some(d) if *d != 5 => d.cmp(&5),
            Some(_) => {
                if tail[1..].iter().any(|d| *d != 0) {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            }
        };
        let odd = kept[n - 1] & 1 != 0;

        if rm.round_away(sign, odd, tail_cmp, nonzero_tail)? && increment(&mut kept) {
            dec_exponent += 1;
        }

        Ok(Self::new(sign, dec_exponent, kept))
    }
}

impl From<f64> for DecimalDigits {
    fn from(x: f64) -> Self {
        Self::from_f64(x)
    }
}

impl From<f32> for DecimalDigits {
    fn from(x: f32) -> Self {
        Self::from_f32(x)
    }
}

// Adds one unit in the last digit. On carry out of the first digit the digits
// become 100..0 of the same length and true is returned.
fn increment(digits: &mut [u8]) -> bool {
    for d in digits.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return false;
        }
    }
    digits[0] = 1;
    true
}

#[inline]
fn n_5_bits(p: i32) -> i32 {
    if (p as usize) < N_5_BITS.len() {
        N_5_BITS[p as usize]
    } else {
        p * 3
    }
}

// Digits of an exact integer value without trailing zeroes.
fn develop_long_digits(mut lvalue: u64) -> (i32, Vec<u8>) {
    let mut dec_exponent = 0;

    while lvalue % 10 == 0 {
        lvalue /= 10;
        dec_exponent += 1;
    }

    let mut digits = Vec::with_capacity(20);
    while lvalue != 0 {
        digits.push((lvalue % 10) as u8);
        lvalue /= 10;
    }
    digits.reverse();

    dec_exponent += digits.len() as i32;

    (dec_exponent, digits)
}

/// State of the digit generation loop.
struct DigitLoop {
    dec_exp: i32,
    digits: Vec<u8>,
    // the mantissa is even, values halfway to a neighbour read back to it
    even: bool,
    low: bool,
    high: bool,
    low_digit_difference: Ordering,
}

impl DigitLoop {
    fn new(dec_exp: i32, even: bool) -> Self {
        DigitLoop {
            dec_exp,
            digits: Vec::with_capacity(20),
            even,
            low: false,
            high: false,
            low_digit_difference: Ordering::Equal,
        }
    }

    // `low_cmp` compares the remainder with the gap below,
    // `high_cmp` compares the remainder plus the gap above with the next digit unit.
    fn set_flags(&mut self, low_cmp: Ordering, high_cmp: Ordering) {
        self.low = low_cmp == Ordering::Less || self.even && low_cmp == Ordering::Equal;
        self.high = high_cmp == Ordering::Greater || self.even && high_cmp == Ordering::Equal;
    }

    fn first_digit(&mut self, q: u32) {
        debug_assert!(q < 10);
        if q == 0 && !self.high {
            // the estimate of the exponent was one too large
            self.dec_exp -= 1;
        } else {
            self.digits.push(q as u8);
        }

        // scientific notation gets at least one digit after the point
        if self.dec_exp <= -3 || self.dec_exp >= 8 {
            self.low = false;
            self.high = false;
        }
    }

    fn finish(mut self) -> (i32, Vec<u8>) {
        let mut dec_exponent = self.dec_exp + 1;

        if self.high {
            let round_up = if self.low {
                match self.low_digit_difference {
                    Ordering::Equal => self.digits.last().map_or(false, |d| d & 1 != 0),
                    Ordering::Greater => true,
                    Ordering::Less => false,
                }
            } else {
                true
            };

            if round_up && increment(&mut self.digits) {
                dec_exponent += 1;
            }
        }

        while self.digits.len() > 1 && self.digits.last() == Some(&0) {
            self.digits.pop();
        }

        debug_assert!(!self.digits.is_empty());

        (dec_exponent, self.digits)
    }
}

// Digit generation in fixed width arithmetic.
// The caller guarantees that b and 10*s fit into the type.
macro_rules! fixed_width_digits {
    ($name:ident, $t:ty) => {
        #[allow(clippy::too_many_arguments)]
        fn $name(
            fract_bits: u64,
            b5: usize,
            b2: u32,
            s5: usize,
            s2: u32,
            m2: u32,
            m2_hi: u32,
            state: &mut DigitLoop,
        ) {
            let mut b: $t = (fract_bits as $t * LONG_5_POW[b5] as $t) << b2;
            let s: $t = (LONG_5_POW[s5] as $t) << s2;
            let mut m_lo: Option<$t> = Some((LONG_5_POW[b5] as $t) << m2);
            let mut m_hi: Option<$t> = Some((LONG_5_POW[b5] as $t) << m2_hi);
            let tens: $t = s * 10;

            // a gap that no longer fits is larger than any remainder
            let step = |b: &mut $t,
                        m_lo: &mut Option<$t>,
                        m_hi: &mut Option<$t>,
                        state: &mut DigitLoop|
             -> u32 {
                let q = *b / s;
                *b = 10 * (*b % s);
                *m_lo = m_lo.and_then(|v| v.checked_mul(10));
                *m_hi = m_hi.and_then(|v| v.checked_mul(10));
                let low_cmp = m_lo.map_or(Ordering::Less, |v| (*b).cmp(&v));
                let high_cmp = m_hi
                    .and_then(|v| b.checked_add(v))
                    .map_or(Ordering::Greater, |v| v.cmp(&tens));
                state.set_flags(low_cmp, high_cmp);
                q as u32
            };

            let q = step(&mut b, &mut m_lo, &mut m_hi, state);
            state.first_digit(q);

            while !state.low && !state.high {
                let q = step(&mut b, &mut m_lo, &mut m_hi, state);
                debug_assert!(q < 10);
                state.digits.push(q as u8);
            }

            // compare 2b with 10s, b < 10s
            state.low_digit_difference = b.cmp(&(tens - b));
        }
    };
}

fixed_width_digits!(int_digits, u32);
fixed_width_digits!(long_digits, u64);

/// Shortest digits of `fract_bits * 2^(bin_exp - 52)`.
///
/// `fract_bits` has its highest bit at position 52, `n_significant_bits` is the
/// precision of the source format at this exponent, `narrow_below` is set for a
/// power of two whose gap below is half the gap above.
/// Returns the decimal exponent and the digits.
pub(crate) fn dtoa(
    bin_exp: i32,
    fract_bits: u64,
    n_significant_bits: i32,
    narrow_below: bool,
    path: DigitPath,
) -> (i32, Vec<u8>) {
    let n_fract_bits = count_significant_bits(fract_bits);
    let n_tiny_bits = (n_fract_bits - bin_exp - 1).max(0);

    if path == DigitPath::Auto && n_tiny_bits == 0 && bin_exp < n_significant_bits {
        // an integer with a unit gap at most, its digits are exact
        return develop_long_digits(fract_bits >> (DOUBLE_FRACT_BITS as i32 - bin_exp));
    }

    // Values with fractional bits always go through the ratio B/S below,
    // even when they would fit the integer shortcut after scaling.

    let dec_exp = estimate_dec_exp(fract_bits, bin_exp);

    let b5 = (-dec_exp).max(0);
    let mut b2 = b5 + n_tiny_bits + bin_exp;

    let s5 = dec_exp.max(0);
    let mut s2 = s5 + n_tiny_bits;

    let m5 = b5;
    let mut m2 = b2 - n_significant_bits;

    // drop trailing zero bits of the mantissa
    let fract_bits = fract_bits >> (DOUBLE_FRACT_BITS as i32 + 1 - n_fract_bits);
    b2 -= n_fract_bits - 1;

    let common2 = b2.min(s2);
    b2 -= common2;
    s2 -= common2;
    m2 -= common2;

    // m is the half gap below, the half gap above is twice as large here
    if narrow_below {
        m2 -= 1;
    }

    if m2 < 0 {
        b2 -= m2;
        s2 -= m2;
        m2 = 0;
    }

    debug_assert!(b5 >= 0 && b2 >= 0 && s5 >= 0 && s2 >= 0 && m2 >= 0);

    let bbits = n_fract_bits + b2 + n_5_bits(b5);
    let ten_sbits = s2 + 1 + n_5_bits(s5 + 1);

    let m2_hi = if narrow_below { m2 + 1 } else { m2 };

    let mut state = DigitLoop::new(dec_exp, n_fract_bits < n_significant_bits);

    if path == DigitPath::Auto && bbits < 32 && ten_sbits < 32 {
        int_digits(
            fract_bits,
            b5 as usize,
            b2 as u32,
            s5 as usize,
            s2 as u32,
            m2 as u32,
            m2_hi as u32,
            &mut state,
        );
    } else if path == DigitPath::Auto && bbits < 64 && ten_sbits < 64 {
        long_digits(
            fract_bits,
            b5 as usize,
            b2 as u32,
            s5 as usize,
            s2 as u32,
            m2 as u32,
            m2_hi as u32,
            &mut state,
        );
    } else {
        big_digits(
            fract_bits,
            b5 as usize,
            b2 as usize,
            s5 as usize,
            s2 as usize,
            m5 as usize,
            m2 as usize,
            m2_hi as usize,
            &mut state,
        );
    }

    state.finish()
}

// Upper estimate of floor(log10(value)), too large by at most one.
fn estimate_dec_exp(fract_bits: u64, bin_exp: i32) -> i32 {
    let d2 = f64::from_bits(DOUBLE_EXP_ONE | (fract_bits & !DOUBLE_FRACT_HOB));
    let d = (d2 - 1.5) * 0.289529654 + 0.176091259 + bin_exp as f64 * 0.301029995663981;
    d.floor() as i32
}

#[allow(clippy::too_many_arguments)]
fn big_digits(
    fract_bits: u64,
    b5: usize,
    b2: usize,
    s5: usize,
    s2: usize,
    m5: usize,
    m2: usize,
    m2_hi: usize,
    state: &mut DigitLoop,
) {
    let mut bval = BigDigits::from_u64(fract_bits).mult_pow52(b5, b2);
    let mut sval = BigDigits::from_pow52(s5, s2);
    let mut m_lo = BigDigits::from_pow52(m5, m2);
    let mut m_hi = BigDigits::from_pow52(m5, m2_hi);

    let shift_bias = sval.normalize_me();
    bval.lshift_me(shift_bias);
    m_lo.lshift_me(shift_bias);
    m_hi.lshift_me(shift_bias);

    let ten_sval = sval.mult_small(10);

    let step = |bval: &mut BigDigits,
                m_lo: &mut BigDigits,
                m_hi: &mut BigDigits,
                state: &mut DigitLoop|
     -> u32 {
        let q = bval.quo_rem_iteration(&sval);
        *m_lo = m_lo.mult_small(10);
        *m_hi = m_hi.mult_small(10);
        let low_cmp = (*bval).cmp(&*m_lo);
        let high_cmp = bval.add(m_hi).cmp(&ten_sval);
        state.set_flags(low_cmp, high_cmp);
        q
    };

    let q = step(&mut bval, &mut m_lo, &mut m_hi, state);
    state.first_digit(q);

    while !state.low && !state.high {
        let q = step(&mut bval, &mut m_lo, &mut m_hi, state);
        state.digits.push(q as u8);
    }

    if state.high && state.low {
        bval.lshift_me(1);
        state.low_digit_difference = bval.cmp(&ten_sval);
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::{MAX_VALUE, MIN_NORMAL, MIN_VALUE};
    use crate::strtod::parse_f64;
    use rand::random;

    fn digits_str(d: &DecimalDigits) -> String {
        d.digits().iter().map(|v| (b'0' + v) as char).collect()
    }

    #[test]
    fn test_to_digits() {
        let d = DecimalDigits::from_f64(1.0);
        assert!(digits_str(&d) == "1");
        assert!(d.dec_exponent() == 1);
        assert!(d.sign() == Sign::Pos);

        let d = DecimalDigits::from_f64(-0.0);
        assert!(digits_str(&d) == "0" && d.sign() == Sign::Neg);

        assert!(DecimalDigits::from_f64(f64::NAN).is_nan());
        let d = DecimalDigits::from_f64(f64::NEG_INFINITY);
        assert!(d.is_inf() && d.sign() == Sign::Neg);

        let cases = [
            (0.1, "1", 0),
            (0.3, "3", 0),
            (123.456, "123456", 3),
            (1e23, "1", 24),
            (2e23, "2", 24),
            (8.41e21, "841", 22),
            (2.438676483245851e16, "2438676483245851", 17),
            (2e-3, "2", -2),
            (MIN_VALUE, "49", -323),
            (1e-323, "99", -322),
            (2.5e-8, "25", -7),
            (MAX_VALUE, "17976931348623157", 309),
            (MIN_NORMAL, "22250738585072014", -307),
            (9007199254740993.0, "9007199254740992", 16),
            (1.0e7, "1", 8),
            (0.1 + 0.2, "30000000000000004", 0),
        ];

        for (x, digits, e) in cases {
            let d = DecimalDigits::from_f64(x);
            assert!(digits_str(&d) == digits, "{:e}: {}", x, digits_str(&d));
            assert!(d.dec_exponent() == e, "{:e}: {}", x, d.dec_exponent());
        }

        let d = DecimalDigits::from_f32(0.1);
        assert!(digits_str(&d) == "1" && d.dec_exponent() == 0);
        let d = DecimalDigits::from_f32(f32::MAX);
        assert!(digits_str(&d) == "34028235" && d.dec_exponent() == 39);
        let d = DecimalDigits::from_f32(1.0e-45);
        assert!(digits_str(&d) == "14" && d.dec_exponent() == -44);
    }

    #[test]
    fn test_display_forms() {
        assert!(DecimalDigits::from_f64(1.0).to_string() == "1.0");
        assert!(DecimalDigits::from_f64(1e10).to_string() == "1.0E10");
        assert!(DecimalDigits::from_f64(-1.5e-7).to_string() == "-1.5E-7");
        assert!(DecimalDigits::from_f64(0.001).to_string() == "0.001");
        assert!(DecimalDigits::from_f64(100.0).to_string() == "100.0");
        assert!(DecimalDigits::from_f64(MIN_VALUE).to_string() == "4.9E-324");
        assert!(DecimalDigits::from_f64(3e-10).to_string() == "3.0E-10");
        assert!(DecimalDigits::from_f32(1.0e-45).to_string() == "1.4E-45");
    }

    #[test]
    fn test_paths_agree() {
        // magnitude sweep over values that take each of the fast paths
        let mut x = MIN_VALUE;
        while x < MAX_VALUE {
            for v in [x, x * 1.1, x * 3.0, x * 7.7] {
                if v.is_finite() {
                    assert!(
                        DecimalDigits::from_f64_with_path(v, DigitPath::Auto)
                            == DecimalDigits::from_f64_with_path(v, DigitPath::Reference),
                        "{:e}",
                        v
                    );
                }
            }
            x *= 1.7;
        }

        for _ in 0..20000 {
            let v = (random::<u32>() as f64) / (1u64 << (random::<u32>() % 40)) as f64;
            assert!(
                DecimalDigits::from_f64_with_path(v, DigitPath::Auto)
                    == DecimalDigits::from_f64_with_path(v, DigitPath::Reference),
                "{:e}",
                v
            );
        }
    }

    #[test]
    fn test_round_trip() {
        for _ in 0..2000 {
            let x = f64::from_bits(random::<u64>() >> 1);
            if !x.is_finite() || x == 0.0 {
                continue;
            }
            let d = DecimalDigits::from_f64(x);
            let s = d.to_string();
            assert!(s.parse::<f64>().unwrap() == x, "{}", s);
            assert!(d.n_digits() <= 17);
        }
    }

    // Asserts that `x` reads back from its digits and that no string with one digit
    // less does, except where scientific notation needs a second digit.
    fn assert_shortest(x: f64) {
        let d = DecimalDigits::from_f64(x);
        assert!(parse_f64(&d.to_string()).unwrap() == x, "{:e}: {}", x, d);

        let n = d.n_digits();
        let e = d.dec_exponent() - 1;
        let min_digits = if e <= -3 || e >= 8 { 2 } else { 1 };
        if n > min_digits {
            for rm in [RoundingMode::Floor, RoundingMode::Ceiling] {
                let c = DecimalDigits::from_f64_fixed(x, n - 1, rm).unwrap();
                assert!(parse_f64(&c.to_string()).unwrap() != x, "{:e}: {} {}", x, d, c);
            }
        }
    }

    #[test]
    fn test_shortest() {
        for x in [1e23, 2e23, 8.41e21, 2.438676483245851e16, 5e-324, 1e-323, 0.1, 1.0 / 3.0] {
            assert_shortest(x);
        }

        // powers of two have a narrower gap below
        let mut x = MIN_VALUE;
        while x.is_finite() {
            assert_shortest(x);
            x *= 2.0;
        }

        for _ in 0..20000 {
            let x = f64::from_bits(random::<u64>() >> 1);
            if x.is_finite() && x != 0.0 {
                assert_shortest(x);
            }
        }

        for _ in 0..20000 {
            // integers and short decimals near the boundaries of the fast paths
            let x = (random::<u64>() % 100000) as f64 * 10f64.powi(random::<i32>() % 25);
            if x != 0.0 {
                assert_shortest(x);
            }
        }
    }

    #[test]
    fn test_fixed() {
        let d = DecimalDigits::from_f64_fixed(1.0, 16, RoundingMode::Floor).unwrap();
        assert!(digits_str(&d) == "1000000000000000" && d.dec_exponent() == 1);

        // 0.1 = 0.1000000000000000055511151231257827...
        let d = DecimalDigits::from_f64_fixed(0.1, 16, RoundingMode::Floor).unwrap();
        assert!(digits_str(&d) == "1000000000000000" && d.dec_exponent() == 0);
        let d = DecimalDigits::from_f64_fixed(0.1, 16, RoundingMode::Ceiling).unwrap();
        assert!(digits_str(&d) == "1000000000000001");
        let d = DecimalDigits::from_f64_fixed(-0.1, 16, RoundingMode::Floor).unwrap();
        assert!(digits_str(&d) == "1000000000000001" && d.sign() == Sign::Neg);
        let d = DecimalDigits::from_f64_fixed(0.1, 20, RoundingMode::HalfEven).unwrap();
        assert!(digits_str(&d) == "10000000000000000555");

        // carry into a new digit
        let d = DecimalDigits::from_f64_fixed(9.99, 2, RoundingMode::HalfUp).unwrap();
        assert!(digits_str(&d) == "10" && d.dec_exponent() == 2);

        // ties
        let d = DecimalDigits::from_f64_fixed(2.5, 1, RoundingMode::HalfEven).unwrap();
        assert!(digits_str(&d) == "2");
        let d = DecimalDigits::from_f64_fixed(2.5, 1, RoundingMode::HalfUp).unwrap();
        assert!(digits_str(&d) == "3");
        let d = DecimalDigits::from_f64_fixed(2.5, 1, RoundingMode::HalfDown).unwrap();
        assert!(digits_str(&d) == "2");
        let d = DecimalDigits::from_f64_fixed(-2.5, 1, RoundingMode::Up).unwrap();
        assert!(digits_str(&d) == "3");
        let d = DecimalDigits::from_f64_fixed(-2.5, 1, RoundingMode::Down).unwrap();
        assert!(digits_str(&d) == "2");

        assert!(DecimalDigits::from_f64_fixed(2.5, 1, RoundingMode::Unnecessary) == Err(Error::RoundingRequired));
        assert!(DecimalDigits::from_f64_fixed(2.5, 2, RoundingMode::Unnecessary).is_ok());
        assert!(DecimalDigits::from_f64_fixed(2.5, 0, RoundingMode::Floor) == Err(Error::InvalidArgument));

        let d = DecimalDigits::from_f64_fixed(0.0, 3, RoundingMode::Floor).unwrap();
        assert!(digits_str(&d) == "000" && d.dec_exponent() == 0);

        let d = DecimalDigits::from_f64_fixed(MIN_VALUE, 3, RoundingMode::Ceiling).unwrap();
        assert!(digits_str(&d) == "495" && d.dec_exponent() == -323);
    }
}
