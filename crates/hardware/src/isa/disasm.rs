//! Instruction Disassembler for LEGv8.
//!
//! Converts a 32-bit instruction word into the same mnemonic syntax the
//! assembler accepts, for state renderers, logging and test diagnostics.
//! Disassembly never fails: a word that decodes to nothing renders as its raw
//! value, `0x` followed by eight upper-case hex digits.
//!
//! # Usage
//!
//! ```
//! use legv8_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0x9100_1401), "ADDI X1, X0, #5");
//! assert_eq!(disassemble(0x1234_5678), "0x12345678");
//! ```

use std::fmt;

use crate::isa::decode::try_decode;
use crate::isa::instruction::{ArithOp, Instruction, MemOp};
use crate::isa::legv8::XFunct;

/// Disassembles an instruction word into a human-readable string.
///
/// # Arguments
///
/// * `word` - The raw 32-bit instruction encoding.
pub fn disassemble(word: u32) -> String {
    try_decode(word).map_or_else(|| format!("0x{word:08X}"), |inst| inst.to_string())
}

/// Disassembles the word stored at `pc`.
///
/// `pc` is informational; branch targets are rendered as relative word
/// offsets, exactly as they are written in assembly.
pub fn disassemble_at(word: u32, _pc: u64) -> String {
    disassemble(word)
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Nop => f.write_str("NOP"),
            Self::Halt => f.write_str("HALT"),
            Self::Branch { link, offset } => {
                write!(f, "{} #{offset}", if link { "BL" } else { "B" })
            }
            Self::CompareBranch {
                nonzero,
                rt,
                offset,
            } => {
                let mn = if nonzero { "CBNZ" } else { "CBZ" };
                write!(f, "{mn} X{rt}, #{offset}")
            }
            Self::CondBranch { cond, offset } => write!(f, "B.{} #{offset}", cond.suffix()),
            Self::Immediate { op, rd, rn, imm } => {
                let mn = match op {
                    ArithOp::Add => "ADDI",
                    ArithOp::Sub => "SUBI",
                };
                write!(f, "{mn} X{rd}, X{rn}, #{imm}")
            }
            Self::Register { op, rd, rn, rm, .. } => {
                let mn = match op {
                    ArithOp::Add => "ADD",
                    ArithOp::Sub => "SUB",
                };
                write!(f, "{mn} X{rd}, X{rn}, X{rm}")
            }
            Self::Memory { op, rt, rn, offset } => {
                let mn = match op {
                    MemOp::Load => "LDUR",
                    MemOp::Store => "STUR",
                };
                write!(f, "{mn} X{rt}, [X{rn}, #{offset}]")
            }
            Self::Extended { funct, rd, rn, rm } => {
                let mn = funct.mnemonic();
                match funct {
                    XFunct::Cmp => write!(f, "{mn} X{rn}, X{rm}"),
                    XFunct::Ret => write!(f, "{mn} X{rn}"),
                    XFunct::Lsl | XFunct::Lsr => write!(f, "{mn} X{rd}, X{rn}, #{rm}"),
                    XFunct::And | XFunct::Orr | XFunct::Eor | XFunct::Mul => {
                        write!(f, "{mn} X{rd}, X{rn}, X{rm}")
                    }
                }
            }
        }
    }
}
