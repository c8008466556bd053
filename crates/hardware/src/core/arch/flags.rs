//! Condition flags.
//!
//! Only `CMP` writes the flags and only `B.cond` reads them. `LT`/`GE` look at
//! the Negative flag alone; there is no overflow flag.

use std::fmt;

use crate::isa::legv8::Cond;

/// The Zero and Negative condition flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Flags {
    /// Last compare produced zero.
    pub zero: bool,
    /// Last compare produced a negative signed result.
    pub negative: bool,
}

impl Flags {
    /// Flags resulting from a compare whose difference is `diff`.
    pub const fn from_result(diff: u64) -> Self {
        Self {
            zero: diff == 0,
            negative: (diff as i64) < 0,
        }
    }

    /// Evaluates `cond` against these flags.
    pub const fn satisfies(self, cond: Cond) -> bool {
        match cond {
            Cond::Eq => self.zero,
            Cond::Ne => !self.zero,
            Cond::Lt => self.negative,
            Cond::Ge => !self.negative,
        }
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Z={} N={}", u8::from(self.zero), u8::from(self.negative))
    }
}
