//! Serialization of ExtendedInterval and DecimalDigits.
//! Both serialize to their text form.

use crate::{DecimalDigits, ExtendedInterval};
use serde::{Serialize, Serializer};

impl Serialize for ExtendedInterval {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl Serialize for DecimalDigits {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
