//! Operator traits.

use super::ExtendedInterval;
use core::ops::Add;
use core::ops::AddAssign;
use core::ops::Div;
use core::ops::DivAssign;
use core::ops::Mul;
use core::ops::MulAssign;
use core::ops::Neg;
use core::ops::Sub;
use core::ops::SubAssign;

macro_rules! impl_op {
    ($tr:ident, $f:ident, $tra:ident, $fa:ident, $fs:ident) => {
        impl $tr for ExtendedInterval {
            type Output = Self;
            fn $f(self, rhs: Self) -> Self::Output {
                ExtendedInterval::$f(&self, &rhs)
            }
        }

        impl $tr<&ExtendedInterval> for ExtendedInterval {
            type Output = Self;
            fn $f(self, rhs: &ExtendedInterval) -> Self::Output {
                ExtendedInterval::$f(&self, rhs)
            }
        }

        impl $tr<&ExtendedInterval> for &ExtendedInterval {
            type Output = ExtendedInterval;
            fn $f(self, rhs: &ExtendedInterval) -> Self::Output {
                ExtendedInterval::$f(self, rhs)
            }
        }

        impl $tr<f64> for ExtendedInterval {
            type Output = Self;
            fn $f(self, rhs: f64) -> Self::Output {
                ExtendedInterval::$fs(&self, rhs)
            }
        }

        impl $tra for ExtendedInterval {
            fn $fa(&mut self, rhs: Self) {
                *self = ExtendedInterval::$f(self, &rhs)
            }
        }

        impl $tra<&ExtendedInterval> for ExtendedInterval {
            fn $fa(&mut self, rhs: &ExtendedInterval) {
                *self = ExtendedInterval::$f(self, rhs)
            }
        }

        impl $tra<f64> for ExtendedInterval {
            fn $fa(&mut self, rhs: f64) {
                *self = ExtendedInterval::$fs(self, rhs)
            }
        }
    };
}

impl_op!(Add, add, AddAssign, add_assign, add_f64);
impl_op!(Sub, sub, SubAssign, sub_assign, sub_f64);
impl_op!(Mul, mul, MulAssign, mul_assign, mul_f64);
impl_op!(Div, div, DivAssign, div_assign, div_f64);

impl Neg for ExtendedInterval {
    type Output = Self;
    fn neg(self) -> Self::Output {
        ExtendedInterval::neg(&self)
    }
}

impl Neg for &ExtendedInterval {
    type Output = ExtendedInterval;
    fn neg(self) -> Self::Output {
        ExtendedInterval::neg(self)
    }
}
