//! Building blocks shared by the conversion routines.

pub mod buf;
pub mod consts;
pub mod int;
pub mod util;
