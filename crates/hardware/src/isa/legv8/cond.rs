//! Branch Condition Codes.
//!
//! Condition codes of the custom `B.cond` format, stored in bits `[23:20]`.
//! The branch offset lives below them in `[19:5]`, so the two fields never
//! overlap and conditional branches reach ±2^14 words.

/// Condition tested by `B.cond` against the flags left by the last `CMP`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cond {
    /// Equal: Zero set.
    Eq = 0,
    /// Not equal: Zero clear.
    Ne = 1,
    /// Signed less than: Negative set (overflow is not modelled).
    Lt = 2,
    /// Signed greater or equal: Negative clear.
    Ge = 3,
}

impl Cond {
    /// Decodes a condition field value. Returns `None` for unassigned codes.
    pub const fn from_bits(bits: u32) -> Option<Self> {
        Some(match bits {
            0 => Self::Eq,
            1 => Self::Ne,
            2 => Self::Lt,
            3 => Self::Ge,
            _ => return None,
        })
    }

    /// Returns the condition field value.
    pub const fn bits(self) -> u32 {
        self as u32
    }

    /// Returns the upper-case suffix used after `B.`.
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Eq => "EQ",
            Self::Ne => "NE",
            Self::Lt => "LT",
            Self::Ge => "GE",
        }
    }

    /// Parses an upper-case suffix such as `"LT"`.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "EQ" => Some(Self::Eq),
            "NE" => Some(Self::Ne),
            "LT" => Some(Self::Lt),
            "GE" => Some(Self::Ge),
            _ => None,
        }
    }
}
