//! Relations between intervals.
//!
//! Certainly relations hold for every choice of numbers from the two intervals,
//! possibly relations hold for at least one choice, set relations compare the
//! bounds. A certainly or possibly relation is false when an operand is EMPTY,
//! except `cne` and `pne`, which are true.

use super::ExtendedInterval;

impl ExtendedInterval {
    /// Set equality. EMPTY equals EMPTY.
    pub fn seq(&self, y: &Self) -> bool {
        self.inf == y.inf && self.sup == y.sup || self.is_empty() && y.is_empty()
    }

    /// Set inequality.
    pub fn sne(&self, y: &Self) -> bool {
        !self.seq(y)
    }

    /// Both bounds of `self` are greater or equal. True for EMPTY against EMPTY.
    pub fn sge(&self, y: &Self) -> bool {
        self.inf >= y.inf && self.sup >= y.sup || self.is_empty() && y.is_empty()
    }

    /// Both bounds of `self` are greater.
    pub fn sgt(&self, y: &Self) -> bool {
        self.inf > y.inf && self.sup > y.sup
    }

    /// Both bounds of `self` are less or equal. True for EMPTY against EMPTY.
    pub fn sle(&self, y: &Self) -> bool {
        self.inf <= y.inf && self.sup <= y.sup || self.is_empty() && y.is_empty()
    }

    /// Both bounds of `self` are less.
    pub fn slt(&self, y: &Self) -> bool {
        self.inf < y.inf && self.sup < y.sup
    }

    /// Every pair of members is equal, i.e. both are the same point.
    pub fn ceq(&self, y: &Self) -> bool {
        self.sup <= y.inf && self.inf >= y.sup
    }

    /// No pair of members is equal.
    pub fn cne(&self, y: &Self) -> bool {
        !(self.inf <= y.sup && y.inf <= self.sup)
    }

    pub fn cge(&self, y: &Self) -> bool {
        self.inf >= y.sup
    }

    pub fn cgt(&self, y: &Self) -> bool {
        self.inf > y.sup
    }

    pub fn cle(&self, y: &Self) -> bool {
        self.sup <= y.inf
    }

    pub fn clt(&self, y: &Self) -> bool {
        self.sup < y.inf
    }

    /// Some pair of members is equal.
    pub fn peq(&self, y: &Self) -> bool {
        self.inf <= y.sup && self.sup >= y.inf
    }

    /// Some pair of members differs.
    pub fn pne(&self, y: &Self) -> bool {
        !(self.sup <= y.inf && self.inf >= y.sup)
    }

    pub fn pge(&self, y: &Self) -> bool {
        self.sup >= y.inf
    }

    pub fn pgt(&self, y: &Self) -> bool {
        self.sup > y.inf
    }

    pub fn ple(&self, y: &Self) -> bool {
        self.inf <= y.sup
    }

    pub fn plt(&self, y: &Self) -> bool {
        self.inf < y.sup
    }
}
