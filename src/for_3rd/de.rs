//! Deserialization of ExtendedInterval and DecimalDigits.
//!
//! Strings are parsed in the text form. Numbers become point intervals
//! or the shortest digits of the number.

use core::fmt::Formatter;

use crate::{DecimalDigits, ExtendedInterval};
use serde::de::Error;
use serde::de::Visitor;
use serde::{Deserialize, Deserializer};

pub struct ExtendedIntervalVisitor {}

impl<'de> Deserialize<'de> for ExtendedInterval {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ExtendedIntervalVisitor {})
    }
}

impl<'de> Visitor<'de> for ExtendedIntervalVisitor {
    type Value = ExtendedInterval;

    fn expecting(&self, formatter: &mut Formatter) -> core::fmt::Result {
        write!(formatter, "expect `String` or `Number`")
    }

    fn visit_i64<E: Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(ExtendedInterval::from_i64(v))
    }

    fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
        match i64::try_from(v) {
            Ok(v) => Ok(ExtendedInterval::from_i64(v)),
            Err(_) => self.visit_str(&v.to_string()),
        }
    }

    fn visit_f64<E: Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(ExtendedInterval::from_f64(v))
    }

    fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
        let s = v.trim();
        let r = if s.starts_with('[') {
            ExtendedInterval::parse(s)
        } else {
            // a bare number is enclosed like a single bound
            ExtendedInterval::parse(&format!("[{}]", s))
        };
        match r {
            Ok(o) => Ok(o),
            Err(e) => Err(Error::custom(format!("{e:?}"))),
        }
    }

    fn visit_string<E: Error>(self, v: String) -> Result<Self::Value, E> {
        self.visit_str(&v)
    }
}

pub struct DecimalDigitsVisitor {}

impl<'de> Deserialize<'de> for DecimalDigits {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DecimalDigitsVisitor {})
    }
}

impl<'de> Visitor<'de> for DecimalDigitsVisitor {
    type Value = DecimalDigits;

    fn expecting(&self, formatter: &mut Formatter) -> core::fmt::Result {
        write!(formatter, "expect `String` or `Number`")
    }

    fn visit_i64<E: Error>(self, v: i64) -> Result<Self::Value, E> {
        self.visit_str(&v.to_string())
    }

    fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
        self.visit_str(&v.to_string())
    }

    fn visit_f64<E: Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(DecimalDigits::from_f64(v))
    }

    fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
        match DecimalDigits::parse(v) {
            Ok(o) => Ok(o),
            Err(e) => Err(Error::custom(format!("{e:?}"))),
        }
    }

    fn visit_string<E: Error>(self, v: String) -> Result<Self::Value, E> {
        self.visit_str(&v)
    }
}

#[cfg(test)]
mod tests {

    use serde_json::from_str;

    use crate::{DecimalDigits, ExtendedInterval, ONE};

    #[test]
    fn from_json() {
        assert!(from_str::<ExtendedInterval>("1").unwrap() == ONE);
        assert!(from_str::<ExtendedInterval>("-3").unwrap() == ExtendedInterval::new(-3.0, -3.0));
        assert!(from_str::<ExtendedInterval>("0.5").unwrap() == ExtendedInterval::new(0.5, 0.5));

        let x = from_str::<ExtendedInterval>("\"[0.1, 0.2]\"").unwrap();
        assert!(x.contains(0.1) && x.contains(0.2));

        // a decimal string is enclosed, a JSON number is rounded to nearest first
        let x = from_str::<ExtendedInterval>("\"0.1\"").unwrap();
        assert!(!x.is_point() && x.contains(0.1));

        assert!(from_str::<ExtendedInterval>("\"[EMPTY]\"").unwrap().is_empty());
        assert!(from_str::<ExtendedInterval>("\"[2,1]\"").unwrap().is_entire());
        assert!(from_str::<ExtendedInterval>("\"[1\"").is_err());
        assert!(from_str::<ExtendedInterval>("true").is_err());

        let d = from_str::<DecimalDigits>("0.3").unwrap();
        assert!(d.digits() == [3] && d.dec_exponent() == 0);
        let d = from_str::<DecimalDigits>("\"-1.25e3\"").unwrap();
        assert!(d.to_string() == "-1250.0");
        let d = from_str::<DecimalDigits>("42").unwrap();
        assert!(d.digits() == [4, 2] && d.dec_exponent() == 2);
        assert!(from_str::<DecimalDigits>("\"x\"").is_err());
    }

    #[test]
    fn round_trip() {
        for x in [ONE, ExtendedInterval::new(-2.5, 1e300), crate::ENTIRE, crate::POS_INF] {
            let s = serde_json::to_string(&x).unwrap();
            let y = from_str::<ExtendedInterval>(&s).unwrap();
            assert!(y.superset(&x));
        }

        let d = DecimalDigits::from_f64(6.02214076e23);
        let s = serde_json::to_string(&d).unwrap();
        assert!(from_str::<DecimalDigits>(&s).unwrap() == d);
    }
}
