//! Auxiliary functions.

use crate::defs::DoubleWord;
use crate::defs::Word;
use crate::defs::WORD_BASE;

#[inline(always)]
pub fn add_carry(a: Word, b: Word, c: Word, r: &mut Word) -> Word {
    #[cfg(target_arch = "x86_64")]
    {
        unsafe { core::arch::x86_64::_addcarry_u32(c as u8, a, b, r) as Word }
    }

    #[cfg(target_arch = "x86")]
    {
        unsafe { core::arch::x86::_addcarry_u32(c as u8, a, b, r) as Word }
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "x86")))]
    {
        let s = c as DoubleWord + a as DoubleWord + b as DoubleWord;
        *r = s as Word;
        (s >> crate::defs::WORD_BIT_SIZE) as Word
    }
}

#[inline(always)]
pub fn sub_borrow(a: Word, b: Word, c: Word, r: &mut Word) -> Word {
    #[cfg(target_arch = "x86_64")]
    {
        unsafe { core::arch::x86_64::_subborrow_u32(c as u8, a, b, r) as Word }
    }

    #[cfg(target_arch = "x86")]
    {
        unsafe { core::arch::x86::_subborrow_u32(c as u8, a, b, r) as Word }
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "x86")))]
    {
        let v1 = a as DoubleWord;
        let v2 = b as DoubleWord + c as DoubleWord;

        if v1 < v2 {
            *r = (v1 + WORD_BASE - v2) as Word;
            1
        } else {
            *r = (v1 - v2) as Word;
            0
        }
    }
}

/// Computes `a * b + c + r`, stores the low word in `r` and returns the high word.
#[inline(always)]
pub fn mul_add_carry(a: Word, b: Word, c: Word, r: &mut Word) -> Word {
    let p = a as DoubleWord * b as DoubleWord + c as DoubleWord + *r as DoubleWord;
    *r = p as Word;
    (p / WORD_BASE) as Word
}

/// Number of bits between the highest and the lowest set bit, inclusive.
/// Returns 0 for 0.
#[inline]
pub fn count_significant_bits(v: u64) -> i32 {
    if v == 0 {
        0
    } else {
        64 - v.leading_zeros() as i32 - v.trailing_zeros() as i32
    }
}
