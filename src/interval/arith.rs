//! Arithmetic and elementary functions.

use super::add_down;
use super::add_up;
use super::ExtendedInterval;
use super::EMPTY;
use super::ENTIRE;
use crate::defs::MIN_VALUE;
use crate::ulp::next;
use crate::ulp::prev;

// Steps a rounded-to-nearest product or quotient outward.
// `None` means the bound is undefined and the result is ENTIRE.
#[inline]
fn lower_outward(l: f64, zero_exact: bool) -> Option<f64> {
    if l.is_nan() {
        None
    } else if l == 0.0 {
        Some(if zero_exact { 0.0 } else { -MIN_VALUE })
    } else {
        Some(prev(l))
    }
}

#[inline]
fn upper_outward(h: f64, zero_exact: bool) -> Option<f64> {
    if h.is_nan() {
        None
    } else if h == 0.0 {
        Some(if zero_exact { 0.0 } else { MIN_VALUE })
    } else {
        Some(next(h))
    }
}

impl ExtendedInterval {
    /// Returns the negated interval `[-sup, -inf]`.
    pub fn neg(&self) -> Self {
        Self::from_bounds(-self.sup, -self.inf)
    }

    /// Adds `y` to `self` and returns the sum.
    pub fn add(&self, y: &Self) -> Self {
        Self::from_bounds(add_down(self.inf, y.inf), add_up(self.sup, y.sup))
    }

    /// Subtracts `y` from `self` and returns the difference.
    pub fn sub(&self, y: &Self) -> Self {
        Self::from_bounds(add_down(self.inf, -y.sup), add_up(self.sup, -y.inf))
    }

    /// Multiplies `self` by `y` and returns the product.
    ///
    /// A product of zero and an infinite bound is undefined and gives ENTIRE.
    pub fn mul(&self, y: &Self) -> Self {
        if self.is_empty() || y.is_empty() {
            return EMPTY;
        }

        let (x, y) = (self, y);
        let (l, h) = if y.inf > 0.0 {
            if x.inf > 0.0 {
                (x.inf * y.inf, x.sup * y.sup)
            } else if x.sup < 0.0 {
                (x.inf * y.sup, x.sup * y.inf)
            } else {
                (x.inf * y.sup, x.sup * y.sup)
            }
        } else if y.sup < 0.0 {
            if x.inf > 0.0 {
                (x.sup * y.inf, x.inf * y.sup)
            } else if x.sup < 0.0 {
                (x.sup * y.sup, x.inf * y.inf)
            } else {
                (x.sup * y.inf, x.inf * y.inf)
            }
        } else if x.inf > 0.0 {
            (x.sup * y.inf, x.sup * y.sup)
        } else if x.sup < 0.0 {
            (x.inf * y.sup, x.inf * y.inf)
        } else {
            // zero in both
            let (l1, l2) = (x.sup * y.inf, x.inf * y.sup);
            let (h1, h2) = (x.inf * y.inf, x.sup * y.sup);
            (
                if l1 > l2 || l2.is_nan() { l2 } else { l1 },
                if h1 < h2 || h2.is_nan() { h2 } else { h1 },
            )
        };

        let l0 = x.inf >= 0.0 && y.inf >= 0.0 || x.sup <= 0.0 && y.sup <= 0.0;
        let h0 = x.inf >= 0.0 && y.sup <= 0.0 || x.sup <= 0.0 && y.inf >= 0.0;

        match (lower_outward(l, l0), upper_outward(h, h0)) {
            (Some(l), Some(h)) => Self::from_bounds(l, h),
            _ => ENTIRE,
        }
    }

    /// Divides `self` by `y` and returns the quotient.
    ///
    /// Division by an interval containing zero gives ENTIRE.
    pub fn div(&self, y: &Self) -> Self {
        if self.is_empty() || y.is_empty() {
            return EMPTY;
        }

        let (x, y) = (self, y);
        let (l, h) = if y.inf > 0.0 {
            if x.inf > 0.0 {
                (x.inf / y.sup, x.sup / y.inf)
            } else if x.sup < 0.0 {
                (x.inf / y.inf, x.sup / y.sup)
            } else {
                (x.inf / y.inf, x.sup / y.inf)
            }
        } else if y.sup < 0.0 {
            if x.inf > 0.0 {
                (x.sup / y.sup, x.inf / y.inf)
            } else if x.sup < 0.0 {
                (x.sup / y.inf, x.inf / y.sup)
            } else {
                (x.sup / y.sup, x.inf / y.sup)
            }
        } else {
            return ENTIRE;
        };

        let l0 = x.inf >= 0.0 && y.inf > 0.0 || x.sup <= 0.0 && y.sup < 0.0;
        let h0 = x.inf >= 0.0 && y.sup < 0.0 || x.sup <= 0.0 && y.inf > 0.0;

        match (lower_outward(l, l0), upper_outward(h, h0)) {
            (Some(l), Some(h)) => Self::from_bounds(l, h),
            _ => ENTIRE,
        }
    }

    /// Adds the number `y`, treated as a point interval.
    ///
    /// NaN is treated as ENTIRE.
    pub fn add_f64(&self, y: f64) -> Self {
        self.add(&Self::from_f64(y))
    }

    /// Subtracts the number `y`, treated as a point interval.
    pub fn sub_f64(&self, y: f64) -> Self {
        self.sub(&Self::from_f64(y))
    }

    /// Multiplies by the number `y`, treated as a point interval.
    pub fn mul_f64(&self, y: f64) -> Self {
        self.mul(&Self::from_f64(y))
    }

    /// Divides by the number `y`, treated as a point interval.
    pub fn div_f64(&self, y: f64) -> Self {
        self.div(&Self::from_f64(y))
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        if self.sup <= 0.0 {
            Self::from_bounds(-self.sup, -self.inf)
        } else if self.inf < 0.0 {
            Self::from_bounds(0.0, (-self.inf).max(self.sup))
        } else {
            *self
        }
    }

    /// Set of minimums `min(a, b)` for `a` in `self` and `b` in `y`.
    pub fn min(&self, y: &Self) -> Self {
        if self.is_empty() || y.is_empty() {
            return EMPTY;
        }
        Self::from_bounds(self.inf.min(y.inf), self.sup.min(y.sup))
    }

    /// Set of maximums `max(a, b)` for `a` in `self` and `b` in `y`.
    pub fn max(&self, y: &Self) -> Self {
        if self.is_empty() || y.is_empty() {
            return EMPTY;
        }
        Self::from_bounds(self.inf.max(y.inf), self.sup.max(y.sup))
    }

    /// Enclosure of the exponential.
    ///
    /// The bounds are the library exponential stepped one ulp outward,
    /// which requires the library function to be faithful.
    pub fn exp(&self) -> Self {
        let mut l = self.inf.exp();
        if l > 0.0 {
            l = prev(l);
        }
        let mut h = self.sup.exp();
        if h > 0.0 {
            h = next(h);
        } else if h == 0.0 {
            h = MIN_VALUE;
        }
        Self::from_bounds(l, h)
    }

    /// Enclosure of the natural logarithm over the positive part of the interval.
    ///
    /// An interval with no positive numbers other than zero gives `[-INF]`,
    /// an interval of negative numbers gives EMPTY.
    pub fn ln(&self) -> Self {
        let mut l = self.inf.ln();
        let mut h = self.sup.ln();
        if l.is_nan() {
            if !h.is_nan() {
                l = f64::NEG_INFINITY;
            }
        } else if l != 0.0 {
            l = prev(l);
        }
        if h != 0.0 {
            h = next(h);
        }
        if l.is_nan() || h.is_nan() {
            EMPTY
        } else {
            Self::from_bounds(l, h)
        }
    }

    /// Replaces `self` with `-self`.
    pub fn neg_mut(&mut self) -> &mut Self {
        *self = self.neg();
        self
    }

    /// Replaces `self` with `self + y`.
    pub fn add_mut(&mut self, y: &Self) -> &mut Self {
        *self = self.add(y);
        self
    }

    /// Replaces `self` with `self - y`.
    pub fn sub_mut(&mut self, y: &Self) -> &mut Self {
        *self = self.sub(y);
        self
    }

    /// Replaces `self` with `self * y`.
    pub fn mul_mut(&mut self, y: &Self) -> &mut Self {
        *self = self.mul(y);
        self
    }

    /// Replaces `self` with `self / y`.
    pub fn div_mut(&mut self, y: &Self) -> &mut Self {
        *self = self.div(y);
        self
    }

    /// Replaces `self` with its absolute value.
    pub fn abs_mut(&mut self) -> &mut Self {
        *self = self.abs();
        self
    }

    /// Replaces `self` with its exponential.
    pub fn exp_mut(&mut self) -> &mut Self {
        *self = self.exp();
        self
    }

    /// Replaces `self` with its natural logarithm.
    pub fn ln_mut(&mut self) -> &mut Self {
        *self = self.ln();
        self
    }
}
