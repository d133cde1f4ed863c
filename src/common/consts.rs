//! Static constants and the shared cache of powers of five.

use super::int::BigDigits;
use lazy_static::lazy_static;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;

/// 5^n fitting in a word.
pub const SMALL_5_POW: [u32; 14] = [
    1, 5, 25, 125,
    625, 3_125, 15_625, 78_125,
    390_625, 1_953_125, 9_765_625, 48_828_125,
    244_140_625, 1_220_703_125,
];

/// 5^n fitting in a signed 64-bit integer.
pub const LONG_5_POW: [u64; 28] = [
    1, 5, 25,
    125, 625, 3_125,
    15_625, 78_125, 390_625,
    1_953_125, 9_765_625, 48_828_125,
    244_140_625, 1_220_703_125, 6_103_515_625,
    30_517_578_125, 152_587_890_625, 762_939_453_125,
    3_814_697_265_625, 19_073_486_328_125, 95_367_431_640_625,
    476_837_158_203_125, 2_384_185_791_015_625, 11_920_928_955_078_125,
    59_604_644_775_390_625, 298_023_223_876_953_125, 1_490_116_119_384_765_625,
    7_450_580_596_923_828_125,
];

/// Bit length of 5^n, with 0 for 5^0.
pub const N_5_BITS: [i32; 27] = [
    0, 3, 5, 7, 10, 12, 14, 17, 19, 21, 24, 26, 28, 31,
    33, 35, 38, 40, 42, 45, 47, 49, 52, 54, 56, 59, 61,
];

/// Exact powers of ten as doubles.
pub const SMALL_10_POW: [f64; 23] = [
    1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 1e11,
    1e12, 1e13, 1e14, 1e15, 1e16, 1e17, 1e18, 1e19, 1e20, 1e21, 1e22,
];

/// Exact powers of ten as floats.
pub const SINGLE_SMALL_10_POW: [f32; 11] = [
    1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10,
];

/// 10^(16 * 2^n).
pub const BIG_10_POW: [f64; 5] = [1e16, 1e32, 1e64, 1e128, 1e256];

/// 10^-(16 * 2^n).
pub const TINY_10_POW: [f64; 5] = [1e-16, 1e-32, 1e-64, 1e-128, 1e-256];

/// Largest number of decimal digits that converts exactly through a double.
pub const MAX_SMALL_DIGITS: usize = 15;

/// Largest number of decimal digits that converts exactly through a float.
pub const SINGLE_MAX_SMALL_DIGITS: usize = 7;

lazy_static! {

    /// Powers of five computed so far, indexed by exponent.
    /// Entries are never modified once published.
    static ref BIG_5_POW: Mutex<Vec<Option<Arc<BigDigits>>>> = Mutex::new(Vec::new());
}

/// Returns 5^p from the shared cache, computing it on first use.
///
/// The returned value is shared; clone it before any in-place modification.
pub fn big_5_pow(p: usize) -> Arc<BigDigits> {
    {
        let cache = BIG_5_POW.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(Some(v)) = cache.get(p) {
            return Arc::clone(v);
        }
    }

    // computed outside of the lock, the recursion takes it again
    let v = if p < LONG_5_POW.len() {
        BigDigits::from_u64(LONG_5_POW[p])
    } else {
        let q = p >> 1;
        let r = p - q;
        let bq = big_5_pow(q);
        if r < SMALL_5_POW.len() {
            bq.mult_small(SMALL_5_POW[r])
        } else {
            bq.mult(&big_5_pow(r))
        }
    };

    let mut cache = BIG_5_POW.lock().unwrap_or_else(PoisonError::into_inner);
    if cache.len() <= p {
        cache.resize(p + 1, None);
    }

    Arc::clone(cache[p].get_or_insert_with(|| Arc::new(v)))
}
