//! Extended interval arithmetic over doubles.
//!
//! An interval is a pair of doubles `[inf, sup]`. Every operation returns an
//! interval that encloses all exact results for all choices of operands from the
//! input intervals. Bounds computed to nearest are stepped one unit in the last place
//! outward whenever the rounding may have moved them inward.
//!
//! Besides bounded intervals there are four special kinds:
//!
//!  - EMPTY, the empty set, represented by NaN bounds;
//!  - ENTIRE, the whole extended real line `[-Inf, +Inf]`;
//!  - `[+INF]`, the positive infinity point, represented by `[MAX, +Inf]`;
//!  - `[-INF]`, the negative infinity point, represented by `[-Inf, -MAX]`.
//!
//! All operations are total: division by an interval containing zero gives ENTIRE,
//! operations with EMPTY give EMPTY.

mod arith;
mod io;
mod ops;
mod rel;
mod set;

pub use io::DEFAULT_PRECISION;

use crate::defs::MAX_VALUE;
use crate::ulp::next;
use crate::ulp::prev;

/// EMPTY interval.
pub const EMPTY: ExtendedInterval = ExtendedInterval {
    inf: f64::NAN,
    sup: f64::NAN,
};

/// The whole extended real line.
pub const ENTIRE: ExtendedInterval = ExtendedInterval {
    inf: f64::NEG_INFINITY,
    sup: f64::INFINITY,
};

/// Point interval `[0, 0]`.
pub const ZERO: ExtendedInterval = ExtendedInterval { inf: 0.0, sup: 0.0 };

/// Point interval `[1, 1]`.
pub const ONE: ExtendedInterval = ExtendedInterval { inf: 1.0, sup: 1.0 };

/// Positive infinity point.
pub const POS_INF: ExtendedInterval = ExtendedInterval {
    inf: MAX_VALUE,
    sup: f64::INFINITY,
};

/// Negative infinity point.
pub const NEG_INF: ExtendedInterval = ExtendedInterval {
    inf: f64::NEG_INFINITY,
    sup: -MAX_VALUE,
};

// Integers of larger magnitude may be inexact as doubles.
const EXACT_I64: u64 = 1 << 53;

/// Closed interval of doubles with sound outward rounding.
///
/// Equality is set equality: two intervals are equal if they have the same bounds,
/// or if both are EMPTY.
#[derive(Debug, Clone, Copy)]
pub struct ExtendedInterval {
    inf: f64,
    sup: f64,
}

impl ExtendedInterval {
    /// Interval `[inf, sup]`.
    ///
    /// NaN bounds or `inf > sup` give ENTIRE.
    /// A `+Inf` lower bound becomes MAX, a `-Inf` upper bound becomes `-MAX`.
    pub fn new(inf: f64, sup: f64) -> Self {
        if inf <= sup {
            ExtendedInterval {
                inf: if inf == f64::INFINITY { MAX_VALUE } else { inf },
                sup: if sup == f64::NEG_INFINITY {
                    -MAX_VALUE
                } else {
                    sup
                },
            }
        } else {
            ENTIRE
        }
    }

    /// Point interval containing `x`.
    ///
    /// Infinities give the infinity points, NaN gives ENTIRE.
    pub fn from_f64(x: f64) -> Self {
        if x.is_nan() {
            ENTIRE
        } else if x == f64::INFINITY {
            POS_INF
        } else if x == f64::NEG_INFINITY {
            NEG_INF
        } else {
            ExtendedInterval { inf: x, sup: x }
        }
    }

    /// The sharpest interval of doubles containing the integer `x`.
    pub fn from_i64(x: i64) -> Self {
        let xd = x as f64;
        let mut ret = ExtendedInterval { inf: xd, sup: xd };
        if x.unsigned_abs() > EXACT_I64 {
            let back = xd as i128;
            let exact = x as i128;
            if back > exact {
                ret.inf = prev(xd);
            } else if back < exact {
                ret.sup = next(xd);
            }
        }
        ret
    }

    pub(crate) const fn from_bounds(inf: f64, sup: f64) -> Self {
        ExtendedInterval { inf, sup }
    }

    /// Lower bound. NaN for EMPTY.
    #[inline]
    pub fn inf(&self) -> f64 {
        self.inf
    }

    /// Upper bound. NaN for EMPTY.
    #[inline]
    pub fn sup(&self) -> f64 {
        self.sup
    }

    /// Returns true if the interval contains no numbers.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inf.is_nan()
    }

    /// Returns true if the interval is `[-Inf, +Inf]`.
    pub fn is_entire(&self) -> bool {
        self.inf == f64::NEG_INFINITY && self.sup == f64::INFINITY
    }

    /// Returns true if both bounds are equal.
    pub fn is_point(&self) -> bool {
        self.inf == self.sup
    }

    /// Returns true if either bound is infinite.
    pub fn is_infinite(&self) -> bool {
        self.inf == f64::NEG_INFINITY || self.sup == f64::INFINITY
    }

    /// Returns true if the interval is bounded and at most `n` ulps wide,
    /// counting the doubles from the lower bound up.
    pub fn has_ulp_acc(&self, n: usize) -> bool {
        if self.is_empty() || self.is_infinite() {
            return false;
        }
        // bounds are ordered, so the difference is in 0..2^64
        let steps = ordered_bits(self.sup).wrapping_sub(ordered_bits(self.inf)) as u64;
        steps <= n as u64
    }

    /// Midpoint of the interval.
    ///
    /// The result lies within the interval. ENTIRE gives 0, a one-sided infinite
    /// interval gives its infinite bound, EMPTY gives NaN.
    pub fn mid(&self) -> f64 {
        if self.is_empty() {
            return f64::NAN;
        }
        if self.is_point() {
            return self.inf;
        }
        if self.is_entire() {
            return 0.0;
        }
        let mut m = 0.5 * (self.inf + self.sup);
        if !m.is_finite() {
            m = 0.5 * self.inf + 0.5 * self.sup;
        }
        m.clamp(self.inf, self.sup)
    }

    /// Width `sup - inf` rounded up.
    pub fn wid(&self) -> f64 {
        add_up(self.sup, -self.inf)
    }

    /// An upper bound of the distance from `mid()` to either bound.
    pub fn rad(&self) -> f64 {
        if self.is_empty() {
            return f64::NAN;
        }
        if self.is_infinite() {
            return f64::INFINITY;
        }
        let m = self.mid();
        add_up(self.sup, -m).max(add_up(m, -self.inf))
    }

    /// Mignitude: the smallest absolute value of the interval's numbers.
    pub fn mig(&self) -> f64 {
        if self.inf <= 0.0 && self.sup >= 0.0 {
            0.0
        } else if self.inf < 0.0 {
            -self.sup
        } else {
            self.inf
        }
    }

    /// Magnitude: the largest absolute value of the interval's numbers.
    pub fn mag(&self) -> f64 {
        if -self.inf > self.sup {
            -self.inf
        } else {
            self.sup
        }
    }

    /// Hausdorff distance between `self` and `y` rounded up.
    ///
    /// NaN if either interval is EMPTY, infinity if the intervals differ and either is infinite.
    pub fn dist(&self, y: &Self) -> f64 {
        if self.is_empty() || y.is_empty() {
            f64::NAN
        } else if self.inf == y.inf && self.sup == y.sup {
            0.0
        } else if self.is_infinite() || y.is_infinite() {
            f64::INFINITY
        } else {
            let d_inf = if self.inf > y.inf {
                add_up(self.inf, -y.inf)
            } else {
                add_up(y.inf, -self.inf)
            };
            let d_sup = if self.sup > y.sup {
                add_up(self.sup, -y.sup)
            } else {
                add_up(y.sup, -self.sup)
            };
            d_inf.max(d_sup)
        }
    }
}

// Maps doubles to integers in the same order, neighbouring doubles to neighbouring integers.
// Both zeroes map to 0.
#[inline]
fn ordered_bits(x: f64) -> i64 {
    let b = x.to_bits() as i64;
    if b < 0 {
        -(b & i64::MAX)
    } else {
        b
    }
}

/// Error of the rounded sum `s = a + b` of finite values: `a + b = s + err` exactly.
#[inline]
fn two_sum_err(a: f64, b: f64, s: f64) -> f64 {
    // with the larger operand first `s - a` is exact and cannot overflow
    let (a, b) = if a.abs() >= b.abs() { (a, b) } else { (b, a) };
    b - (s - a)
}

/// `a + b` rounded toward negative infinity.
/// A finite sum never rounds to `+Inf`.
pub(crate) fn add_down(a: f64, b: f64) -> f64 {
    let s = a + b;
    if s.is_nan() {
        s
    } else if s.is_infinite() {
        if s > 0.0 && a.is_finite() && b.is_finite() {
            MAX_VALUE
        } else {
            s
        }
    } else if two_sum_err(a, b, s) < 0.0 {
        prev(s)
    } else {
        s
    }
}

/// `a + b` rounded toward positive infinity.
/// A finite sum never rounds to `-Inf`.
pub(crate) fn add_up(a: f64, b: f64) -> f64 {
    let s = a + b;
    if s.is_nan() {
        s
    } else if s.is_infinite() {
        if s < 0.0 && a.is_finite() && b.is_finite() {
            -MAX_VALUE
        } else {
            s
        }
    } else if two_sum_err(a, b, s) > 0.0 {
        next(s)
    } else {
        s
    }
}

impl PartialEq for ExtendedInterval {
    fn eq(&self, other: &Self) -> bool {
        self.seq(other)
    }
}

impl Eq for ExtendedInterval {}

impl Default for ExtendedInterval {
    fn default() -> Self {
        ZERO
    }
}

impl From<f64> for ExtendedInterval {
    fn from(x: f64) -> Self {
        ExtendedInterval::from_f64(x)
    }
}

impl From<f32> for ExtendedInterval {
    fn from(x: f32) -> Self {
        ExtendedInterval::from_f64(x as f64)
    }
}

impl From<i32> for ExtendedInterval {
    fn from(x: i32) -> Self {
        let xd = x as f64;
        ExtendedInterval { inf: xd, sup: xd }
    }
}

impl From<i64> for ExtendedInterval {
    fn from(x: i64) -> Self {
        ExtendedInterval::from_i64(x)
    }
}

impl From<(f64, f64)> for ExtendedInterval {
    fn from(b: (f64, f64)) -> Self {
        ExtendedInterval::new(b.0, b.1)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::{MIN_NORMAL, MIN_VALUE};

    #[test]
    fn test_constructors() {
        let x = ExtendedInterval::new(1.0, 2.0);
        assert!(x.inf() == 1.0 && x.sup() == 2.0);

        assert!(ExtendedInterval::new(2.0, 1.0).is_entire());
        assert!(ExtendedInterval::new(f64::NAN, 1.0).is_entire());
        assert!(ExtendedInterval::new(1.0, f64::NAN).is_entire());

        let x = ExtendedInterval::new(f64::INFINITY, f64::INFINITY);
        assert!(x.inf() == MAX_VALUE && x.sup() == f64::INFINITY);
        assert!(x == POS_INF);

        let x = ExtendedInterval::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        assert!(x == NEG_INF);

        assert!(ExtendedInterval::from(f64::NAN).is_entire());
        assert!(ExtendedInterval::from(f64::INFINITY) == POS_INF);
        assert!(ExtendedInterval::from(f64::NEG_INFINITY) == NEG_INF);
        assert!(ExtendedInterval::from(-3) == ExtendedInterval::new(-3.0, -3.0));
        assert!(ExtendedInterval::from(0.5f32) == ExtendedInterval::new(0.5, 0.5));
        assert!(ExtendedInterval::from((1.0, 0.0)).is_entire());
        assert!(ExtendedInterval::default() == ZERO);
    }

    #[test]
    fn test_from_i64() {
        let x = ExtendedInterval::from(1i64 << 53);
        assert!(x.is_point());

        // 2^53 + 1 is not a double
        let v = (1i64 << 53) + 1;
        let x = ExtendedInterval::from(v);
        assert!(x.inf() == 9007199254740992.0);
        assert!(x.sup() == 9007199254740994.0);
        assert!(x.contains_i64(v));

        let x = ExtendedInterval::from(i64::MAX);
        assert!(x.sup() == 9223372036854775808.0);
        assert!(x.inf() == prev(x.sup()));
        assert!(x.contains_i64(i64::MAX));

        let x = ExtendedInterval::from(i64::MIN);
        assert!(x.is_point());
        assert!(x.contains_i64(i64::MIN));

        let x = ExtendedInterval::from(-v);
        assert!(x.inf() == -9007199254740994.0);
        assert!(x.sup() == -9007199254740992.0);
    }

    #[test]
    fn test_classification() {
        assert!(EMPTY.is_empty());
        assert!(!EMPTY.is_entire() && !EMPTY.is_point() && !EMPTY.is_infinite());
        assert!(ENTIRE.is_entire() && ENTIRE.is_infinite());
        assert!(POS_INF.is_infinite() && !POS_INF.is_entire());
        assert!(NEG_INF.is_infinite());
        assert!(ONE.is_point() && !ONE.is_infinite());

        assert!(ONE.has_ulp_acc(0));
        let x = ExtendedInterval::new(1.0, next(next(1.0)));
        assert!(!x.has_ulp_acc(1));
        assert!(x.has_ulp_acc(2));
        assert!(x.has_ulp_acc(5));
        assert!(!POS_INF.has_ulp_acc(100));
        assert!(!EMPTY.has_ulp_acc(100));

        // counted across zero and over the whole range
        let x = ExtendedInterval::new(-MIN_VALUE, MIN_VALUE);
        assert!(x.has_ulp_acc(2) && !x.has_ulp_acc(1));
        assert!(ExtendedInterval::new(-0.0, 0.0).has_ulp_acc(0));
        let x = ExtendedInterval::new(-MAX_VALUE, MAX_VALUE);
        assert!(x.has_ulp_acc(usize::MAX));
        assert!(!x.has_ulp_acc(1 << 40));
        let x = ExtendedInterval::new(prev(MIN_NORMAL), next(MIN_NORMAL));
        assert!(x.has_ulp_acc(2) && !x.has_ulp_acc(1));
    }

    #[test]
    fn test_mid_rad() {
        let x = ExtendedInterval::new(1.0, 3.0);
        assert!(x.mid() == 2.0);
        assert!(x.rad() == 1.0);
        assert!(x.wid() == 2.0);

        assert!(ENTIRE.mid() == 0.0);
        assert!(ENTIRE.rad() == f64::INFINITY);
        assert!(POS_INF.mid() == f64::INFINITY);
        assert!(NEG_INF.mid() == f64::NEG_INFINITY);
        assert!(EMPTY.mid().is_nan());
        assert!(EMPTY.rad().is_nan());

        let x = ExtendedInterval::new(MAX_VALUE / 2.0, MAX_VALUE);
        let m = x.mid();
        assert!(m.is_finite() && m >= x.inf() && m <= x.sup());

        let x = ExtendedInterval::new(-MAX_VALUE, MAX_VALUE);
        assert!(x.mid() == 0.0);
        assert!(x.wid() == f64::INFINITY);

        let x = ExtendedInterval::new(MIN_VALUE, MIN_VALUE);
        assert!(x.mid() == MIN_VALUE);

        let x = ExtendedInterval::new(MIN_VALUE, 2.0 * MIN_VALUE);
        let m = x.mid();
        assert!(m >= x.inf() && m <= x.sup());
        assert!(x.rad() >= m - x.inf() && x.rad() >= x.sup() - m);

        // the width rounds up
        let x = ExtendedInterval::new(-0.1, 1.0);
        assert!(x.wid() >= 1.1);
        assert!(x.wid() == next(1.0 + 0.1) || x.wid() == 1.0 + 0.1);

        let x = ExtendedInterval::new(MIN_NORMAL, 1.0);
        assert!(x.wid() == 1.0);
    }

    #[test]
    fn test_mig_mag() {
        let x = ExtendedInterval::new(-2.0, 3.0);
        assert!(x.mig() == 0.0 && x.mag() == 3.0);

        let x = ExtendedInterval::new(-5.0, -3.0);
        assert!(x.mig() == 3.0 && x.mag() == 5.0);

        let x = ExtendedInterval::new(2.0, 4.0);
        assert!(x.mig() == 2.0 && x.mag() == 4.0);

        assert!(ENTIRE.mag() == f64::INFINITY);
        assert!(EMPTY.mag().is_nan());
    }

    #[test]
    fn test_dist() {
        let x = ExtendedInterval::new(1.0, 2.0);
        let y = ExtendedInterval::new(1.5, 4.0);
        assert!(x.dist(&y) == 2.0);
        assert!(x.dist(&x) == 0.0);
        assert!(x.dist(&EMPTY).is_nan());
        assert!(ENTIRE.dist(&ENTIRE) == 0.0);
        assert!(x.dist(&POS_INF) == f64::INFINITY);

        let y = ExtendedInterval::new(1.0, 2.1);
        assert!(x.dist(&y) >= 2.1 - 2.0);
    }

    #[test]
    fn test_directed_add() {
        // 0.1 + 0.2 rounds up to 0.30000000000000004
        assert!(two_sum_err(0.1, 0.2, 0.1 + 0.2) < 0.0);
        assert!(add_down(0.1, 0.2) == prev(0.1 + 0.2));
        assert!(add_up(0.1, 0.2) == 0.1 + 0.2);

        assert!(add_down(1.0, 2.0) == 3.0);
        assert!(add_up(1.0, 2.0) == 3.0);

        assert!(add_down(MAX_VALUE, MAX_VALUE) == MAX_VALUE);
        assert!(add_up(MAX_VALUE, MAX_VALUE) == f64::INFINITY);
        assert!(add_up(-MAX_VALUE, -MAX_VALUE) == -MAX_VALUE);
        assert!(add_down(-MAX_VALUE, -MAX_VALUE) == f64::NEG_INFINITY);

        assert!(add_down(f64::INFINITY, 1.0) == f64::INFINITY);
        assert!(add_up(f64::NEG_INFINITY, 1.0) == f64::NEG_INFINITY);

        assert!(add_down(1.0, -MIN_VALUE) == prev(1.0));

        // the tie rounds up to an even mantissa, s - x alone would overflow
        let x = -(2f64.powi(1022) + 3.0 * 2f64.powi(970));
        let s = x + MAX_VALUE;
        assert!(two_sum_err(x, MAX_VALUE, s) == -2f64.powi(970));
        assert!(two_sum_err(MAX_VALUE, x, s) == -2f64.powi(970));
        assert!(add_down(x, MAX_VALUE) == prev(s));
        assert!(add_up(x, MAX_VALUE) == s);
        assert!(add_up(1.0, MIN_VALUE) == next(1.0));
        assert!(add_down(1.0, MIN_VALUE) == 1.0);
    }
}
