//! Extended-Format Function Codes.
//!
//! The custom extended format shares one 11-bit opcode between several
//! register-register operations. The operation is selected by the 6-bit funct
//! field at bits `[15:10]`, the slot the R-format uses for its shift amount.

/// Operation selected by the funct field of an extended-format word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum XFunct {
    /// Set flags from `Rn - Rm`; no register is written.
    Cmp = 0,
    /// Bitwise AND.
    And = 1,
    /// Bitwise inclusive OR.
    Orr = 2,
    /// Bitwise exclusive OR.
    Eor = 3,
    /// Logical shift left by the amount held in the Rm slot.
    Lsl = 4,
    /// Logical shift right by the amount held in the Rm slot.
    Lsr = 5,
    /// Wrapping 64-bit multiply.
    Mul = 6,
    /// Jump to the address in Rn.
    Ret = 7,
}

impl XFunct {
    /// Decodes a funct field value. Returns `None` for unassigned codes.
    pub const fn from_bits(bits: u32) -> Option<Self> {
        Some(match bits {
            0 => Self::Cmp,
            1 => Self::And,
            2 => Self::Orr,
            3 => Self::Eor,
            4 => Self::Lsl,
            5 => Self::Lsr,
            6 => Self::Mul,
            7 => Self::Ret,
            _ => return None,
        })
    }

    /// Returns the funct field value.
    pub const fn bits(self) -> u32 {
        self as u32
    }

    /// Returns the upper-case mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Cmp => "CMP",
            Self::And => "AND",
            Self::Orr => "ORR",
            Self::Eor => "EOR",
            Self::Lsl => "LSL",
            Self::Lsr => "LSR",
            Self::Mul => "MUL",
            Self::Ret => "RET",
        }
    }
}
