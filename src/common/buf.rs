//! Buffer for holding big integer limbs.

use crate::defs::Word;
use core::ops::Deref;
use core::ops::DerefMut;
use core::ops::Index;
use core::ops::IndexMut;
use core::slice::SliceIndex;
use smallvec::SmallVec;

// Enough for any significand scaled by a moderate power of five without spilling to the heap.
const STATIC_ALLOCATION: usize = 5;

/// Buffer for holding big integer limbs, least significant limb first.
#[derive(Debug, Clone, Default)]
pub struct WordBuf {
    inner: SmallVec<[Word; STATIC_ALLOCATION]>,
}

impl WordBuf {
    /// New zero-filled buffer of `sz` limbs.
    #[inline]
    pub fn new(sz: usize) -> Self {
        WordBuf {
            inner: SmallVec::from_elem(0, sz),
        }
    }

    #[inline]
    pub fn from_slice(s: &[Word]) -> Self {
        WordBuf {
            inner: SmallVec::from_slice(s),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn push(&mut self, d: Word) {
        self.inner.push(d);
    }

    /// Change the number of limbs, filling new high limbs with 0.
    #[inline]
    pub fn resize(&mut self, n: usize) {
        self.inner.resize(n, 0);
    }

    /// Insert `n` zero limbs at the low end.
    pub fn shift_limbs_up(&mut self, n: usize) {
        if n > 0 {
            let l = self.inner.len();
            self.inner.resize(l + n, 0);
            self.inner.rotate_right(n);
        }
    }

    // Remove leading limbs containing zeroes.
    pub fn trunc_leading_zeroes(&mut self) {
        let mut n = 0;

        for v in self.inner.iter().rev() {
            if *v == 0 {
                n += 1;
            } else {
                break;
            }
        }

        let sz = self.len();
        self.inner.truncate(sz - n);
    }
}

impl<I: SliceIndex<[Word]>> IndexMut<I> for WordBuf {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        self.inner.index_mut(index)
    }
}

impl<I: SliceIndex<[Word]>> Index<I> for WordBuf {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        self.inner.index(index)
    }
}

impl Deref for WordBuf {
    type Target = [Word];

    #[inline]
    fn deref(&self) -> &[Word] {
        self.inner.deref()
    }
}

impl DerefMut for WordBuf {
    #[inline]
    fn deref_mut(&mut self) -> &mut [Word] {
        self.inner.deref_mut()
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_word_buf() {
        let mut b = WordBuf::from_slice(&[1, 2, 0, 0]);
        b.trunc_leading_zeroes();
        assert!(b.len() == 2);
        assert!(b[..] == [1, 2]);

        b.shift_limbs_up(2);
        assert!(b[..] == [0, 0, 1, 2]);

        b.resize(5);
        assert!(b[4] == 0);

        let mut z = WordBuf::new(3);
        z.trunc_leading_zeroes();
        assert!(z.len() == 0);
    }
}
