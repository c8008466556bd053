//! LEGv8 Opcodes.
//!
//! Defines the opcode field values for every supported format. Each constant is
//! the full opcode field for its format, right-aligned (a 6-bit B-format opcode
//! is compared against bits `[31:26]`, an 11-bit R-format opcode against
//! `[31:21]`, and so on).
//!
//! The base values come from the LEGv8 reference sheet. `OP_BCOND` and `OP_XEXT`
//! are custom extensions placed in opcode space the sheet leaves unused, and
//! `OP_BL` is the AArch64 `BL` opcode.
//!
//! No word may match more than one pattern; [`CATALOG`] lists every pattern with
//! its width so that property can be checked exhaustively.

/// Unconditional branch (B-format, 6 bits).
pub const OP_B: u32 = 0b000101;

/// Branch with link (B-format, 6 bits).
pub const OP_BL: u32 = 0b100101;

/// Compare and branch if zero (CB-format, 8 bits).
pub const OP_CBZ: u32 = 0b10110100;

/// Compare and branch if not zero (CB-format, 8 bits).
pub const OP_CBNZ: u32 = 0b10110101;

/// Flag-conditional branch `B.cond` (custom, 8 bits).
pub const OP_BCOND: u32 = 0b10110110;

/// Add immediate (I-format, 10 bits).
pub const OP_ADDI: u32 = 0b1001000100;

/// Subtract immediate (I-format, 10 bits).
pub const OP_SUBI: u32 = 0b1101000100;

/// Add (R-format, 11 bits).
pub const OP_ADD: u32 = 0b10001011000;

/// Subtract (R-format, 11 bits).
pub const OP_SUB: u32 = 0b11001011000;

/// Load register, unscaled offset (D-format, 11 bits).
pub const OP_LDUR: u32 = 0b11111000010;

/// Store register, unscaled offset (D-format, 11 bits).
pub const OP_STUR: u32 = 0b11111000000;

/// Extended register-register group selected by funct (custom, 11 bits).
pub const OP_XEXT: u32 = 0b10101010101;

/// Width in bits of B-format opcodes.
pub const OP_B_WIDTH: u32 = 6;
/// Width in bits of CB-format and conditional-branch opcodes.
pub const OP_CB_WIDTH: u32 = 8;
/// Width in bits of I-format opcodes.
pub const OP_I_WIDTH: u32 = 10;
/// Width in bits of R-, D- and extended-format opcodes.
pub const OP_R_WIDTH: u32 = 11;

/// One opcode pattern of the format catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpcodeEntry {
    /// Mnemonic (or mnemonic group) selected by the pattern.
    pub name: &'static str,
    /// Opcode field width in bits; the field always ends at bit 31.
    pub width: u32,
    /// Right-aligned opcode value.
    pub pattern: u32,
}

impl OpcodeEntry {
    /// Returns true if `word`'s leading `width` bits equal this pattern.
    #[inline]
    pub const fn matches(&self, word: u32) -> bool {
        word >> (32 - self.width) == self.pattern
    }
}

/// Every opcode pattern, in decode order (narrowest field first).
pub const CATALOG: [OpcodeEntry; 12] = [
    OpcodeEntry { name: "B", width: OP_B_WIDTH, pattern: OP_B },
    OpcodeEntry { name: "BL", width: OP_B_WIDTH, pattern: OP_BL },
    OpcodeEntry { name: "CBZ", width: OP_CB_WIDTH, pattern: OP_CBZ },
    OpcodeEntry { name: "CBNZ", width: OP_CB_WIDTH, pattern: OP_CBNZ },
    OpcodeEntry { name: "B.cond", width: OP_CB_WIDTH, pattern: OP_BCOND },
    OpcodeEntry { name: "ADDI", width: OP_I_WIDTH, pattern: OP_ADDI },
    OpcodeEntry { name: "SUBI", width: OP_I_WIDTH, pattern: OP_SUBI },
    OpcodeEntry { name: "ADD", width: OP_R_WIDTH, pattern: OP_ADD },
    OpcodeEntry { name: "SUB", width: OP_R_WIDTH, pattern: OP_SUB },
    OpcodeEntry { name: "LDUR", width: OP_R_WIDTH, pattern: OP_LDUR },
    OpcodeEntry { name: "STUR", width: OP_R_WIDTH, pattern: OP_STUR },
    OpcodeEntry { name: "XEXT", width: OP_R_WIDTH, pattern: OP_XEXT },
];
