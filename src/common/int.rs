//! Unsigned big integer tailored to decimal conversion.

use super::buf::WordBuf;
use super::consts::big_5_pow;
use super::consts::SMALL_5_POW;
use super::util::add_carry;
use super::util::mul_add_carry;
use super::util::sub_borrow;
use crate::defs::DoubleWord;
use crate::defs::SignedWord;
use crate::defs::Word;
use crate::defs::WORD_BIT_SIZE;
use crate::defs::WORD_NORMALIZED_BIT;
use core::cmp::Ordering;
use itertools::izip;

/// Unsigned integer of arbitrary size stored as little-endian words.
///
/// Operations keep the value free of high-order zero words.
/// The only exception is `quo_rem_iteration`, which keeps the word count of the divisor.
#[derive(Debug, Clone)]
pub struct BigDigits {
    m: WordBuf,
}

impl BigDigits {
    /// Zero value.
    pub fn zero() -> Self {
        BigDigits { m: WordBuf::new(0) }
    }

    pub fn from_u32(v: u32) -> Self {
        let mut ret = BigDigits {
            m: WordBuf::from_slice(&[v]),
        };
        ret.m.trunc_leading_zeroes();
        ret
    }

    pub fn from_u64(v: u64) -> Self {
        let mut ret = BigDigits {
            m: WordBuf::from_slice(&[v as Word, (v >> WORD_BIT_SIZE) as Word]),
        };
        ret.m.trunc_leading_zeroes();
        ret
    }

    /// Builds `seed` followed by the decimal digits `digits[nd0..nd]`.
    ///
    /// Digits are values in 0..=9. They are consumed five at a time, so the
    /// accumulated chunk never exceeds a word.
    pub fn from_digits(seed: u64, digits: &[u8], nd0: usize, nd: usize) -> Self {
        let mut ret = Self::from_u64(seed);
        let mut i = nd0;

        while i + 5 < nd {
            let mut v = 0;
            for d in &digits[i..i + 5] {
                v = v * 10 + *d as Word;
            }
            ret.multadd_me(100000, v);
            i += 5;
        }

        let mut factor = 1;
        let mut v = 0;
        for d in &digits[i..nd] {
            v = v * 10 + *d as Word;
            factor *= 10;
        }
        if factor != 1 {
            ret.multadd_me(factor, v);
        }

        ret
    }

    /// Builds 5^p5 * 2^p2.
    pub fn from_pow52(p5: usize, p2: usize) -> Self {
        let mut ret = (*big_5_pow(p5)).clone();
        ret.lshift_me(p2);
        ret
    }

    /// Returns self * 5^p5 * 2^p2.
    pub fn mult_pow52(&self, p5: usize, p2: usize) -> Self {
        let mut ret = if p5 == 0 {
            self.clone()
        } else if p5 < SMALL_5_POW.len() {
            self.mult_small(SMALL_5_POW[p5])
        } else {
            self.mult(&big_5_pow(p5))
        };
        ret.lshift_me(p2);
        ret
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.m.iter().all(|v| *v == 0)
    }

    /// Number of words in use.
    #[inline]
    pub fn len(&self) -> usize {
        self.m.len()
    }

    #[cfg(test)]
    pub(crate) fn words(&self) -> &[Word] {
        &self.m
    }

    /// Returns the value if it fits in 64 bits.
    pub fn to_u64(&self) -> Option<u64> {
        match self.significant_len() {
            0 => Some(0),
            1 => Some(self.m[0] as u64),
            2 => Some(self.m[0] as u64 | (self.m[1] as u64) << WORD_BIT_SIZE),
            _ => None,
        }
    }

    fn significant_len(&self) -> usize {
        self.m.iter().rposition(|v| *v != 0).map_or(0, |p| p + 1)
    }

    /// Shift left by `c` bits in place.
    pub fn lshift_me(&mut self, c: usize) {
        let n = self.m.len();
        if c == 0 || n == 0 {
            return;
        }

        let wordcount = c / WORD_BIT_SIZE;
        let bitcount = c % WORD_BIT_SIZE;

        if bitcount == 0 {
            self.m.shift_limbs_up(wordcount);
            return;
        }

        let mut r = WordBuf::new(n + wordcount + 1);
        let anticount = WORD_BIT_SIZE - bitcount;
        for (i, v) in self.m.iter().enumerate() {
            r[i + wordcount] |= *v << bitcount;
            r[i + wordcount + 1] = *v >> anticount;
        }
        r.trunc_leading_zeroes();

        self.m = r;
    }

    /// Shift left in place so that the highest set bit of the top word lands on
    /// bit `WORD_NORMALIZED_BIT`. Returns the applied shift.
    ///
    /// ## Panics
    ///
    /// Panics if the value is zero.
    pub fn normalize_me(&mut self) -> usize {
        self.m.trunc_leading_zeroes();
        assert!(self.m.len() > 0, "zero value cannot be normalized");

        let top = self.m[self.m.len() - 1];
        let lz = top.leading_zeros() as usize;
        let shift = (lz + WORD_NORMALIZED_BIT + 1) % WORD_BIT_SIZE;
        self.lshift_me(shift);

        shift
    }

    /// Returns self * v.
    pub fn mult_small(&self, v: Word) -> Self {
        let mut r = WordBuf::new(self.m.len() + 1);
        let mut c = 0;

        for (a, x) in self.m.iter().zip(r.iter_mut()) {
            c = mul_add_carry(*a, v, c, x);
        }

        let n = self.m.len();
        r[n] = c;
        r.trunc_leading_zeroes();

        BigDigits { m: r }
    }

    /// Returns self * other.
    pub fn mult(&self, other: &Self) -> Self {
        let n1 = self.m.len();
        let n2 = other.m.len();
        let mut r = WordBuf::new(n1 + n2);

        for (i, a) in self.m.iter().enumerate() {
            let mut c = 0;
            for (b, x) in other.m.iter().zip(r[i..i + n2].iter_mut()) {
                c = mul_add_carry(*a, *b, c, x);
            }
            r[i + n2] = c;
        }
        r.trunc_leading_zeroes();

        BigDigits { m: r }
    }

    /// In place `self = self * factor + addend`.
    pub fn multadd_me(&mut self, factor: Word, addend: Word) {
        let mut c = addend;

        for x in self.m.iter_mut() {
            let mut lo = 0;
            c = mul_add_carry(*x, factor, c, &mut lo);
            *x = lo;
        }

        if c != 0 {
            self.m.push(c);
        }
    }

    /// Returns self + other.
    pub fn add(&self, other: &Self) -> Self {
        let (short, long) = if self.m.len() < other.m.len() {
            (&self.m, &other.m)
        } else {
            (&other.m, &self.m)
        };

        let mut r = WordBuf::new(long.len() + 1);
        let mut c = 0;

        let mut iter2 = long.iter();
        let mut iter3 = r.iter_mut();

        for (a, b, x) in izip!(short.iter(), iter2.by_ref(), iter3.by_ref()) {
            c = add_carry(*a, *b, c, x);
        }

        for (b, x) in iter2.zip(iter3.by_ref()) {
            c = add_carry(0, *b, c, x);
        }

        if let Some(x) = iter3.next() {
            *x = c;
        }

        r.trunc_leading_zeroes();

        BigDigits { m: r }
    }

    /// Returns self - other.
    ///
    /// ## Panics
    ///
    /// Panics if other is greater than self.
    pub fn sub(&self, other: &Self) -> Self {
        assert!(*self >= *other, "negative result of subtraction");

        let mut r = WordBuf::new(self.m.len());
        let mut c = 0;

        let mut iter1 = self.m.iter();
        let mut iter3 = r.iter_mut();

        for (b, a, d) in izip!(other.m.iter(), iter1.by_ref(), iter3.by_ref()) {
            c = sub_borrow(*a, *b, c, d);
        }

        for (a, d) in iter1.zip(iter3) {
            c = sub_borrow(*a, 0, c, d);
        }

        debug_assert!(c == 0);
        r.trunc_leading_zeroes();

        BigDigits { m: r }
    }

    /// One step of the long division producing decimal digits.
    ///
    /// `s` must be normalized and self must be less than `10 * s`.
    /// Returns `q = self / s` and sets self to `10 * (self % s)`.
    /// Self keeps the word count of `s`.
    ///
    /// ## Panics
    ///
    /// Panics if the operands are out of the required range.
    pub fn quo_rem_iteration(&mut self, s: &Self) -> u32 {
        let n = s.m.len();

        self.m.trunc_leading_zeroes();
        if self.m.len() < n {
            self.m.resize(n);
        }
        assert!(self.m.len() == n && n > 0, "disparate values");

        // the top word of s has 4 spare bits, so this is at most a few units too large
        let mut q = (self.m[n - 1] / s.m[n - 1]) as SignedWord;

        let mut diff: SignedWord = 0;
        for (x, d) in self.m.iter_mut().zip(s.m.iter()) {
            diff += *x as SignedWord - q * *d as SignedWord;
            *x = diff as Word;
            diff >>= WORD_BIT_SIZE;
        }

        while diff != 0 {
            let mut sum: SignedWord = 0;
            for (x, d) in self.m.iter_mut().zip(s.m.iter()) {
                sum += *x as SignedWord + *d as SignedWord;
                *x = sum as Word;
                sum >>= WORD_BIT_SIZE;
            }
            diff += sum;
            q -= 1;
            assert!(q >= 0, "quotient estimate did not converge");
        }

        let mut p: DoubleWord = 0;
        for x in self.m.iter_mut() {
            p += *x as DoubleWord * 10;
            *x = p as Word;
            p >>= WORD_BIT_SIZE;
        }
        assert!(p == 0, "carry out of the remainder scaling");
        assert!(q < 10, "quotient digit out of range");

        q as u32
    }

    /// Divide by `d` in place, returning the remainder.
    pub fn div_by_word(&mut self, d: Word) -> Word {
        debug_assert!(d != 0);

        let d = d as DoubleWord;
        let mut rh: DoubleWord = 0;

        for v in self.m.iter_mut().rev() {
            let qh = (rh << WORD_BIT_SIZE) | *v as DoubleWord;
            *v = (qh / d) as Word;
            rh = qh % d;
        }
        self.m.trunc_leading_zeroes();

        rh as Word
    }

    /// Exact decimal digits, most significant first. Zero is a single 0.
    pub fn to_decimal(&self) -> Vec<u8> {
        const CHUNK: Word = 1_000_000_000;

        let mut v = self.clone();
        v.m.trunc_leading_zeroes();

        let mut chunks = Vec::with_capacity(v.len() * 10 / 9 + 1);
        while !v.is_zero() {
            chunks.push(v.div_by_word(CHUNK));
        }

        let mut ret = Vec::with_capacity(chunks.len() * 9 + 1);
        for (i, c) in chunks.iter().rev().enumerate() {
            let mut buf = [0u8; 9];
            let mut c = *c;
            for d in buf.iter_mut().rev() {
                *d = (c % 10) as u8;
                c /= 10;
            }
            if i == 0 {
                let lead = buf.iter().position(|d| *d != 0).unwrap_or(8);
                ret.extend_from_slice(&buf[lead..]);
            } else {
                ret.extend_from_slice(&buf);
            }
        }

        if ret.is_empty() {
            ret.push(0);
        }

        ret
    }
}

impl From<u64> for BigDigits {
    fn from(v: u64) -> Self {
        Self::from_u64(v)
    }
}

impl PartialEq for BigDigits {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BigDigits {}

impl PartialOrd for BigDigits {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigDigits {
    /// Unsigned comparison of magnitudes.
    fn cmp(&self, other: &Self) -> Ordering {
        let l1 = self.significant_len();
        let l2 = other.significant_len();

        if l1 != l2 {
            return l1.cmp(&l2);
        }

        for (a, b) in self.m[..l1].iter().rev().zip(other.m[..l2].iter().rev()) {
            match a.cmp(b) {
                Ordering::Equal => {}
                o => return o,
            }
        }

        Ordering::Equal
    }
}
