//! Successor, predecessor, and unit in the last place of IEEE-754 numbers.
//!
//! All functions work on the bit representation and never depend on the
//! floating point environment.

use core::fmt::Debug;
use core::ops::Neg;

/// Bit level stepping over the values of an IEEE-754 binary format.
pub trait Ieee754: Copy + PartialOrd + Debug + Neg<Output = Self> {
    /// Number of significant bits including the hidden one.
    const SIGNIFICANT_BITS: u32;

    /// The largest finite value.
    const MAX: Self;

    /// Positive infinity.
    const INFINITY: Self;

    /// Positive zero.
    const ZERO: Self;

    /// Not a number.
    const NAN: Self;

    /// The smallest value strictly greater than `self`.
    ///
    /// `next(+Inf) = +Inf`, `next(-Inf) = -MAX`, `next(±0) = MIN_VALUE`, `next(NaN) = NaN`.
    fn next(self) -> Self;

    /// The greatest value strictly less than `self`.
    ///
    /// `prev(-Inf) = -Inf`, `prev(+Inf) = MAX`, `prev(±0) = -MIN_VALUE`, `prev(NaN) = NaN`.
    fn prev(self) -> Self;

    /// Positive distance from `self` to the neighbour of larger magnitude.
    ///
    /// `ulp(±0) = MIN_VALUE`, `ulp(±MAX)` is the gap as if the exponent range were unbounded,
    /// `ulp(±Inf) = +Inf`, `ulp(NaN) = NaN`.
    fn ulp(self) -> Self;

    /// Magnitude of a finite value as `m * 2^e`, with `m` below `2^SIGNIFICANT_BITS`.
    fn decompose(self) -> (u64, i32);

    /// True if the lowest bit of the mantissa field is zero.
    fn is_even(self) -> bool;

    fn is_nan(self) -> bool;

    fn is_infinite(self) -> bool;

    fn is_sign_negative(self) -> bool;

    /// Exact conversion to a double.
    fn to_f64(self) -> f64;
}

macro_rules! impl_ieee754 {
    ($t:ty, $bits:ty, $fract_bits:expr, $exp_mask:expr, $bias:expr) => {
        impl Ieee754 for $t {
            const SIGNIFICANT_BITS: u32 = $fract_bits + 1;
            const MAX: Self = <$t>::MAX;
            const INFINITY: Self = <$t>::INFINITY;
            const ZERO: Self = 0.0;
            const NAN: Self = <$t>::NAN;

            fn next(self) -> Self {
                if self.is_nan() || self == <$t>::INFINITY {
                    self
                } else if self == 0.0 {
                    <$t>::from_bits(1)
                } else if self > 0.0 {
                    <$t>::from_bits(self.to_bits() + 1)
                } else {
                    <$t>::from_bits(self.to_bits() - 1)
                }
            }

            fn prev(self) -> Self {
                if self.is_nan() || self == <$t>::NEG_INFINITY {
                    self
                } else if self == 0.0 {
                    -<$t>::from_bits(1)
                } else if self > 0.0 {
                    <$t>::from_bits(self.to_bits() - 1)
                } else {
                    <$t>::from_bits(self.to_bits() + 1)
                }
            }

            fn ulp(self) -> Self {
                let a = self.abs();
                if a.is_nan() || a.is_infinite() {
                    a
                } else if a == <$t>::MAX {
                    // the exponent of MAX with the mantissa of one unit
                    let e: $bits = ($exp_mask >> $fract_bits) - 1 - $fract_bits;
                    <$t>::from_bits(e << $fract_bits)
                } else {
                    a.next() - a
                }
            }

            fn decompose(self) -> (u64, i32) {
                let bits = self.to_bits();
                let e = ((bits & $exp_mask) >> $fract_bits) as i32;
                let f = (bits & ((1 << $fract_bits) - 1)) as u64;
                if e == 0 {
                    (f, 1 - $bias - $fract_bits as i32)
                } else {
                    (f | 1 << $fract_bits, e - $bias - $fract_bits as i32)
                }
            }

            #[inline]
            fn is_even(self) -> bool {
                self.to_bits() & 1 == 0
            }

            #[inline]
            fn is_nan(self) -> bool {
                <$t>::is_nan(self)
            }

            #[inline]
            fn is_infinite(self) -> bool {
                <$t>::is_infinite(self)
            }

            #[inline]
            fn is_sign_negative(self) -> bool {
                <$t>::is_sign_negative(self)
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    };
}

impl_ieee754!(f64, u64, 52, 0x7ff0_0000_0000_0000u64, 1023);
impl_ieee754!(f32, u32, 23, 0x7f80_0000u32, 127);

/// Smallest double strictly greater than `x`.
#[inline]
pub fn next(x: f64) -> f64 {
    x.next()
}

/// Greatest double strictly less than `x`.
#[inline]
pub fn prev(x: f64) -> f64 {
    x.prev()
}

/// Unit in the last place of `x`.
#[inline]
pub fn ulp(x: f64) -> f64 {
    Ieee754::ulp(x)
}

/// Smallest float strictly greater than `x`.
#[inline]
pub fn next_f32(x: f32) -> f32 {
    x.next()
}

/// Greatest float strictly less than `x`.
#[inline]
pub fn prev_f32(x: f32) -> f32 {
    x.prev()
}
