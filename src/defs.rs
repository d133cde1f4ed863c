//! Definitions.

use core::fmt::Display;
use core::fmt::Formatter;

/// A word.
pub type Word = u32;

/// Doubled word.
pub type DoubleWord = u64;

/// Word with sign.
pub type SignedWord = i64;

/// Maximum value of a word.
pub const WORD_MAX: Word = Word::MAX;

/// Base of words.
pub const WORD_BASE: DoubleWord = WORD_MAX as DoubleWord + 1;

/// Size of a word in bits.
pub const WORD_BIT_SIZE: usize = core::mem::size_of::<Word>() * 8;

/// Bit position of the most significant bit of a normalized top word.
/// The four bits above it leave room for a multiplication by 10 without carry-out.
pub const WORD_NORMALIZED_BIT: usize = 27;

/// Number of explicitly stored mantissa bits of a double.
pub const DOUBLE_FRACT_BITS: usize = 52;

/// Number of significant bits of a double.
pub const DOUBLE_SIGNIFICANT_BITS: usize = DOUBLE_FRACT_BITS + 1;

/// Exponent bias of a double.
pub const DOUBLE_EXP_BIAS: i32 = 1023;

/// Sign bit of a double.
pub const DOUBLE_SIGN_MASK: u64 = 0x8000_0000_0000_0000;

/// Exponent bits of a double.
pub const DOUBLE_EXP_MASK: u64 = 0x7ff0_0000_0000_0000;

/// Mantissa bits of a double.
pub const DOUBLE_FRACT_MASK: u64 = !(DOUBLE_SIGN_MASK | DOUBLE_EXP_MASK);

/// The hidden bit of a normalized double.
pub const DOUBLE_FRACT_HOB: u64 = 1 << DOUBLE_FRACT_BITS;

/// Bit pattern of the exponent of 1.0.
pub const DOUBLE_EXP_ONE: u64 = 0x3ff0_0000_0000_0000;

/// Number of explicitly stored mantissa bits of a float.
pub const FLOAT_FRACT_BITS: usize = 23;

/// Number of significant bits of a float.
pub const FLOAT_SIGNIFICANT_BITS: usize = FLOAT_FRACT_BITS + 1;

/// Exponent bias of a float.
pub const FLOAT_EXP_BIAS: i32 = 127;

/// Sign bit of a float.
pub const FLOAT_SIGN_MASK: u32 = 0x8000_0000;

/// Exponent bits of a float.
pub const FLOAT_EXP_MASK: u32 = 0x7f80_0000;

/// Mantissa bits of a float.
pub const FLOAT_FRACT_MASK: u32 = !(FLOAT_SIGN_MASK | FLOAT_EXP_MASK);

/// Smallest positive normal double, 2^-1022.
pub const MIN_NORMAL: f64 = f64::MIN_POSITIVE;

/// Smallest positive subnormal double, 2^-1074.
pub const MIN_VALUE: f64 = 4.9406564584124654e-324;

/// Largest finite double.
pub const MAX_VALUE: f64 = f64::MAX;

/// Gap between `MAX_VALUE` and the next larger magnitude, 2^971.
pub const MAX_ULP: f64 = 1.9958403095347198e292;

/// Smallest positive subnormal float, 2^-149.
pub const MIN_VALUE_F32: f32 = 1.0e-45;

/// Sign.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Sign {
    Neg = -1,
    Pos = 1,
}

impl Sign {
    /// Changes the sign to the opposite.
    pub fn invert(&self) -> Self {
        match *self {
            Sign::Pos => Sign::Neg,
            Sign::Neg => Sign::Pos,
        }
    }

    /// Returns true if the sign is negative.
    pub fn is_negative(&self) -> bool {
        *self == Sign::Neg
    }

    pub(crate) fn from_negative(neg: bool) -> Self {
        if neg {
            Sign::Neg
        } else {
            Sign::Pos
        }
    }
}

/// Possible errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Text is not a valid decimal number, sentinel, or interval literal.
    InvalidFormat,

    /// Rounding mode `Unnecessary` was requested, but the value is not exactly representable.
    RoundingRequired,

    /// Invalid argument.
    InvalidArgument,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidFormat => f.write_str("invalid number format"),
            Error::RoundingRequired => f.write_str("rounding necessary"),
            Error::InvalidArgument => f.write_str("invalid argument"),
        }
    }
}

impl std::error::Error for Error {}

/// Rounding policy of a conversion.
///
/// The semantics are those of decimal rounding: the modes are applied to
/// the exact value, and the result is one of its two neighbours in the
/// target format.
#[derive(Eq, PartialEq, Debug, Copy, Clone)]
pub enum RoundingMode {
    /// Round away from zero.
    Up,

    /// Round toward zero.
    Down,

    /// Round toward positive infinity.
    Ceiling,

    /// Round toward negative infinity.
    Floor,

    /// Round to nearest, ties away from zero.
    HalfUp,

    /// Round to nearest, ties toward zero.
    HalfDown,

    /// Round to nearest, ties to even.
    HalfEven,

    /// Assert that the value is exact; any rounding is an error.
    Unnecessary,
}

impl RoundingMode {
    /// Decides whether an inexact magnitude must be incremented (rounded away from zero).
    ///
    /// `tail` is the discarded part compared with half a unit of the last kept position,
    /// `odd` tells if the last kept digit or bit is odd.
    /// `tail` equal to `Less` with `nonzero_tail` false means exact.
    pub(crate) fn round_away(
        &self,
        sign: Sign,
        odd: bool,
        tail: core::cmp::Ordering,
        nonzero_tail: bool,
    ) -> Result<bool, Error> {
        use core::cmp::Ordering;

        if !nonzero_tail {
            return Ok(false);
        }

        Ok(match self {
            RoundingMode::Up => true,
            RoundingMode::Down => false,
            RoundingMode::Ceiling => sign == Sign::Pos,
            RoundingMode::Floor => sign == Sign::Neg,
            RoundingMode::HalfUp => tail != Ordering::Less,
            RoundingMode::HalfDown => tail == Ordering::Greater,
            RoundingMode::HalfEven => match tail {
                Ordering::Greater => true,
                Ordering::Equal => odd,
                Ordering::Less => false,
            },
            RoundingMode::Unnecessary => return Err(Error::RoundingRequired),
        })
    }

    /// Returns true if overflow under the mode produces infinity rather than the largest finite value.
    pub(crate) fn overflows_to_inf(&self, sign: Sign) -> bool {
        match self {
            RoundingMode::Up
            | RoundingMode::HalfUp
            | RoundingMode::HalfDown
            | RoundingMode::HalfEven
            | RoundingMode::Unnecessary => true,
            RoundingMode::Down => false,
            RoundingMode::Ceiling => sign == Sign::Pos,
            RoundingMode::Floor => sign == Sign::Neg,
        }
    }
}
