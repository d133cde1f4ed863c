//! Decimal digits of a binary floating point value.

use crate::defs::Error;
use crate::defs::Sign;
use crate::parser;
use core::fmt::Display;
use core::fmt::Formatter;
use core::fmt::Write;
use core::str::FromStr;

/// Kind of a decimal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    /// A finite number, possibly zero.
    Finite,

    /// Infinity of either sign.
    Inf,

    /// Not a number.
    NaN,
}

/// Decimal representation `±0.d1d2...dn * 10^dec_exponent`.
///
/// A value produced by shortest conversion or by parsing has no leading and no
/// trailing zero digits, except the value zero, which is the single digit 0.
/// A value produced by fixed precision conversion has exactly the requested number of digits.
/// Infinity and NaN carry no digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalDigits {
    sign: Sign,
    flavor: Flavor,
    dec_exponent: i32,
    digits: Vec<u8>,
}

impl DecimalDigits {
    pub(crate) fn new(sign: Sign, dec_exponent: i32, digits: Vec<u8>) -> Self {
        debug_assert!(!digits.is_empty());
        DecimalDigits {
            sign,
            flavor: Flavor::Finite,
            dec_exponent,
            digits,
        }
    }

    /// Zero with the given sign.
    pub fn zero(sign: Sign) -> Self {
        Self::new(sign, 0, vec![0])
    }

    /// Infinity with the given sign.
    pub fn inf(sign: Sign) -> Self {
        DecimalDigits {
            sign,
            flavor: Flavor::Inf,
            dec_exponent: 0,
            digits: Vec::new(),
        }
    }

    /// Not a number.
    pub fn nan() -> Self {
        DecimalDigits {
            sign: Sign::Pos,
            flavor: Flavor::NaN,
            dec_exponent: 0,
            digits: Vec::new(),
        }
    }

    /// Parses a decimal number with an optional sign and exponent,
    /// or one of `NaN`, `Inf`, `Infinity` ignoring case.
    ///
    /// ## Errors
    ///
    ///  - InvalidFormat: the string is not a number.
    pub fn parse(s: &str) -> Result<Self, Error> {
        let ps = parser::parse(s);

        if !ps.is_valid() {
            return Err(Error::InvalidFormat);
        }

        if ps.is_nan() {
            return Ok(Self::nan());
        }

        if ps.is_inf() {
            return Ok(Self::inf(ps.sign()));
        }

        let (sign, digits, e) = ps.into_parts();
        if digits.is_empty() {
            Ok(Self::zero(sign))
        } else {
            Ok(Self::new(sign, e, digits))
        }
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// True for infinity and NaN.
    pub fn is_exceptional(&self) -> bool {
        self.flavor != Flavor::Finite
    }

    pub fn is_nan(&self) -> bool {
        self.flavor == Flavor::NaN
    }

    pub fn is_inf(&self) -> bool {
        self.flavor == Flavor::Inf
    }

    /// True if the value is a finite zero.
    pub fn is_zero(&self) -> bool {
        self.flavor == Flavor::Finite && self.digits.iter().all(|d| *d == 0)
    }

    /// Decimal exponent `e` of the representation `0.d1d2... * 10^e`.
    pub fn dec_exponent(&self) -> i32 {
        self.dec_exponent
    }

    /// Digits as values in 0..=9, most significant first.
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    pub fn n_digits(&self) -> usize {
        self.digits.len()
    }

    fn push_digits(f: &mut Formatter<'_>, d: &[u8]) -> core::fmt::Result {
        for v in d {
            f.write_char((b'0' + v) as char)?;
        }
        Ok(())
    }
}

impl Display for DecimalDigits {
    /// Compact scientific form: `123.45`, `0.00123`, `1.0E-5`, `1.2345E10`.
    /// The plain form is used for exponents of 10^-3 up to below 10^7.
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self.flavor {
            Flavor::NaN => return f.write_str("NaN"),
            Flavor::Inf => {
                return f.write_str(if self.sign.is_negative() {
                    "-Infinity"
                } else {
                    "Infinity"
                })
            }
            Flavor::Finite => {}
        }

        if self.sign.is_negative() {
            f.write_char('-')?;
        }

        let d = &self.digits[..];
        let e = self.dec_exponent;

        if e > 0 && e < 8 {
            let int_len = e as usize;
            if d.len() > int_len {
                Self::push_digits(f, &d[..int_len])?;
                f.write_char('.')?;
                Self::push_digits(f, &d[int_len..])
            } else {
                Self::push_digits(f, d)?;
                for _ in d.len()..int_len {
                    f.write_char('0')?;
                }
                f.write_str(".0")
            }
        } else if e <= 0 && e > -3 {
            f.write_str("0.")?;
            for _ in e..0 {
                f.write_char('0')?;
            }
            Self::push_digits(f, d)
        } else {
            Self::push_digits(f, &d[..1])?;
            f.write_char('.')?;
            if d.len() > 1 {
                Self::push_digits(f, &d[1..])?;
            } else {
                f.write_char('0')?;
            }
            write!(f, "E{}", e - 1)
        }
    }
}

impl FromStr for DecimalDigits {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
