//! Instruction encoding and decoding utilities.
//!
//! Provides the bit-field layer (field extraction, insertion and sign extension)
//! and a trait for pulling named LEGv8 fields out of a 32-bit instruction word.
//!
//! Bit ranges are written `[hi:lo]`, inclusive on both ends, bit 31 being the
//! most significant bit of the word.

use crate::common::constants::WORD_BITS;
use crate::isa::legv8::{Cond, XFunct};

/// Returns a mask with the low `bits` bits set. `bits >= 32` yields all ones.
#[inline(always)]
pub const fn mask(bits: u32) -> u32 {
    if bits >= WORD_BITS {
        u32::MAX
    } else {
        (1u32 << bits) - 1
    }
}

/// Extracts the unsigned value of bits `[hi:lo]` of `word`.
///
/// # Arguments
///
/// * `word` - The 32-bit word to read from.
/// * `hi` - Most significant bit of the field (at most 31).
/// * `lo` - Least significant bit of the field (at most `hi`).
#[inline(always)]
pub const fn get_field(word: u32, hi: u32, lo: u32) -> u32 {
    debug_assert!(hi >= lo && hi < WORD_BITS);
    (word >> lo) & mask(hi - lo + 1)
}

/// Returns `word` with bits `[hi:lo]` replaced by `value`.
///
/// `value` is masked to the field width before insertion, so oversized values
/// are silently truncated. Bits outside the field are preserved.
#[inline(always)]
pub const fn set_field(word: u32, hi: u32, lo: u32, value: u32) -> u32 {
    debug_assert!(hi >= lo && hi < WORD_BITS);
    let field = mask(hi - lo + 1) << lo;
    (word & !field) | ((value << lo) & field)
}

/// Sign extends the low `width` bits of `value` to a 64-bit signed integer.
///
/// Bits of `value` above `width` are ignored.
///
/// # Arguments
///
/// * `value` - Raw field value.
/// * `width` - Field width in bits, 1 through 32.
#[inline(always)]
pub const fn sign_extend(value: u32, width: u32) -> i64 {
    debug_assert!(width >= 1 && width <= WORD_BITS);
    let shift = 64 - width;
    (((value & mask(width)) as u64) << shift) as i64 >> shift
}

/// Opcode field `[31:26]` (B-format).
pub const OP6: (u32, u32) = (31, 26);
/// Opcode field `[31:24]` (CB-format and custom conditional branch).
pub const OP8: (u32, u32) = (31, 24);
/// Opcode field `[31:22]` (I-format).
pub const OP10: (u32, u32) = (31, 22);
/// Opcode field `[31:21]` (R-, D- and custom extended formats).
pub const OP11: (u32, u32) = (31, 21);

/// Destination / target register `[4:0]`.
pub const RD: (u32, u32) = (4, 0);
/// First source register `[9:5]`.
pub const RN: (u32, u32) = (9, 5);
/// Second source register `[20:16]`.
pub const RM: (u32, u32) = (20, 16);
/// Shift amount (R-format) and function code (extended format) `[15:10]`.
pub const SHAMT: (u32, u32) = (15, 10);
/// Unsigned I-format immediate `[21:10]`.
pub const IMM12: (u32, u32) = (21, 10);
/// Signed D-format address offset `[20:12]`.
pub const IMM9: (u32, u32) = (20, 12);
/// Signed B-format word offset `[25:0]`.
pub const IMM26: (u32, u32) = (25, 0);
/// Signed CB-format word offset `[23:5]`.
pub const IMM19: (u32, u32) = (23, 5);
/// Condition code of the custom conditional branch `[23:20]`.
pub const COND: (u32, u32) = (23, 20);
/// Signed word offset of the custom conditional branch `[19:5]`.
pub const IMM15: (u32, u32) = (19, 5);

/// Width of the B-format offset.
pub const IMM26_BITS: u32 = 26;
/// Width of the CB-format offset.
pub const IMM19_BITS: u32 = 19;
/// Width of the conditional-branch offset.
pub const IMM15_BITS: u32 = 15;
/// Width of the D-format offset.
pub const IMM9_BITS: u32 = 9;
/// Width of the I-format immediate.
pub const IMM12_BITS: u32 = 12;

/// Trait for extracting named fields from an encoded instruction word.
pub trait InstructionBits {
    /// 6-bit opcode `[31:26]`.
    fn op6(&self) -> u32;
    /// 8-bit opcode `[31:24]`.
    fn op8(&self) -> u32;
    /// 10-bit opcode `[31:22]`.
    fn op10(&self) -> u32;
    /// 11-bit opcode `[31:21]`.
    fn op11(&self) -> u32;
    /// Register field `[4:0]` (Rd, or Rt in D/CB formats).
    fn rd(&self) -> usize;
    /// Register field `[9:5]`.
    fn rn(&self) -> usize;
    /// Register field `[20:16]`.
    fn rm(&self) -> usize;
    /// Six-bit field `[15:10]` (shamt or funct).
    fn shamt(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn op6(&self) -> u32 {
        get_field(*self, OP6.0, OP6.1)
    }

    #[inline(always)]
    fn op8(&self) -> u32 {
        get_field(*self, OP8.0, OP8.1)
    }

    #[inline(always)]
    fn op10(&self) -> u32 {
        get_field(*self, OP10.0, OP10.1)
    }

    #[inline(always)]
    fn op11(&self) -> u32 {
        get_field(*self, OP11.0, OP11.1)
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        get_field(*self, RD.0, RD.1) as usize
    }

    #[inline(always)]
    fn rn(&self) -> usize {
        get_field(*self, RN.0, RN.1) as usize
    }

    #[inline(always)]
    fn rm(&self) -> usize {
        get_field(*self, RM.0, RM.1) as usize
    }

    #[inline(always)]
    fn shamt(&self) -> u32 {
        get_field(*self, SHAMT.0, SHAMT.1)
    }
}

/// Add or subtract, shared by the I- and R-format arithmetic instructions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArithOp {
    /// `ADD` / `ADDI`.
    Add,
    /// `SUB` / `SUBI`.
    Sub,
}

/// Direction of a D-format memory access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MemOp {
    /// `LDUR`: word load, zero-extended into Rt.
    Load,
    /// `STUR`: store of the low 32 bits of Rt.
    Store,
}

/// A decoded instruction.
///
/// Every valid word decodes to exactly one variant; execution and disassembly
/// match over this closed set instead of re-testing opcode bits. Offsets are
/// already sign-extended and count 4-byte words.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// Advance PC only.
    Nop,
    /// Stop execution.
    Halt,
    /// `B` / `BL` (B-format).
    Branch {
        /// `BL`: write the return address into X30 first.
        link: bool,
        /// Signed word offset, 26-bit range.
        offset: i64,
    },
    /// `CBZ` / `CBNZ` (CB-format).
    CompareBranch {
        /// `CBNZ` when set, `CBZ` otherwise.
        nonzero: bool,
        /// Register tested against zero.
        rt: usize,
        /// Signed word offset, 19-bit range.
        offset: i64,
    },
    /// `B.cond` (custom conditional branch).
    CondBranch {
        /// Condition tested against the flags.
        cond: Cond,
        /// Signed word offset, 15-bit range.
        offset: i64,
    },
    /// `ADDI` / `SUBI` (I-format).
    Immediate {
        /// Add or subtract.
        op: ArithOp,
        /// Destination.
        rd: usize,
        /// Source.
        rn: usize,
        /// Unsigned 12-bit immediate.
        imm: u32,
    },
    /// `ADD` / `SUB` (R-format).
    Register {
        /// Add or subtract.
        op: ArithOp,
        /// Destination.
        rd: usize,
        /// First source.
        rn: usize,
        /// Second source.
        rm: usize,
        /// Shift amount field; carried through encoding but not applied.
        shamt: u32,
    },
    /// `LDUR` / `STUR` (D-format).
    Memory {
        /// Load or store.
        op: MemOp,
        /// Data register.
        rt: usize,
        /// Base register.
        rn: usize,
        /// Signed byte offset, 9-bit range.
        offset: i64,
    },
    /// Extended register-register group (custom format).
    ///
    /// For `LSL`/`LSR` the `rm` slot holds the shift amount; `CMP` ignores
    /// `rd`; `RET` uses only `rn`.
    Extended {
        /// Operation selector.
        funct: XFunct,
        /// Destination.
        rd: usize,
        /// First source (or jump target for `RET`).
        rn: usize,
        /// Second source, or shift amount.
        rm: usize,
    },
}

impl Instruction {
    /// Returns true for instructions that may redirect control flow.
    pub const fn is_branch(&self) -> bool {
        matches!(
            self,
            Self::Branch { .. }
                | Self::CompareBranch { .. }
                | Self::CondBranch { .. }
                | Self::Extended { funct: XFunct::Ret, .. }
        )
    }
}
