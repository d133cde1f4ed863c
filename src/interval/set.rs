//! Set operations.

use super::ExtendedInterval;
use super::EMPTY;
use super::ENTIRE;

impl ExtendedInterval {
    /// Intersection of `self` and `y`.
    pub fn intersect(&self, y: &Self) -> Self {
        if self.is_empty() || y.is_empty() {
            return EMPTY;
        }
        let l = self.inf.max(y.inf);
        let h = self.sup.min(y.sup);
        if l > h {
            EMPTY
        } else {
            Self::from_bounds(l, h)
        }
    }

    /// The smallest interval containing both `self` and `y`.
    pub fn hull(&self, y: &Self) -> Self {
        if self.is_empty() {
            *y
        } else if y.is_empty() {
            *self
        } else {
            Self::from_bounds(self.inf.min(y.inf), self.sup.max(y.sup))
        }
    }

    /// The smallest interval containing both `self` and the number `y`.
    ///
    /// NaN gives ENTIRE.
    pub fn hull_f64(&self, y: f64) -> Self {
        if y.is_nan() {
            ENTIRE
        } else {
            self.hull(&Self::from_f64(y))
        }
    }

    /// Replaces `self` with the intersection of `self` and `y`.
    pub fn intersect_mut(&mut self, y: &Self) -> &mut Self {
        *self = self.intersect(y);
        self
    }

    /// Replaces `self` with the hull of `self` and `y`.
    pub fn hull_mut(&mut self, y: &Self) -> &mut Self {
        *self = self.hull(y);
        self
    }

    /// Returns true if `self` and `y` have no common numbers.
    pub fn disjoint(&self, y: &Self) -> bool {
        !(self.inf <= y.sup && y.inf <= self.sup)
    }

    /// Returns true if `y` is a member of `self`.
    pub fn contains(&self, y: f64) -> bool {
        y >= self.inf && y <= self.sup
    }

    /// Returns true if the integer `y` is a member of `self`.
    ///
    /// The comparison is exact for integers that have no double representation.
    pub fn contains_i64(&self, y: i64) -> bool {
        let yd = y as f64;
        if yd < self.inf || yd > self.sup {
            return false;
        }
        if yd > self.inf && yd < self.sup {
            return true;
        }
        // y rounds to a bound, compare exactly
        let (yi, back) = (y as i128, yd as i128);
        (yd != self.inf || yi >= back) && (yd != self.sup || yi <= back)
    }

    /// Returns true if `self` is contained in the interior of `y`.
    ///
    /// EMPTY is interior to every interval.
    pub fn interior(&self, y: &Self) -> bool {
        self.inf > y.inf && self.sup < y.sup || self.is_empty()
    }

    /// Returns true if `self` is a subset of `y`.
    pub fn subset(&self, y: &Self) -> bool {
        self.inf >= y.inf && self.sup <= y.sup || self.is_empty()
    }

    /// Returns true if `self` is a subset of `y` and not equal to it.
    pub fn proper_subset(&self, y: &Self) -> bool {
        self.inf >= y.inf && self.sup <= y.sup && (self.inf != y.inf || self.sup != y.sup)
            || self.is_empty() && !y.is_empty()
    }

    /// Returns true if `self` is a superset of `y`.
    pub fn superset(&self, y: &Self) -> bool {
        y.subset(self)
    }

    /// Returns true if `self` is a superset of `y` and not equal to it.
    pub fn proper_superset(&self, y: &Self) -> bool {
        y.proper_subset(self)
    }
}
