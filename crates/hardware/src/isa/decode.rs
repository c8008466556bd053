//! LEGv8 Instruction Decoder.
//!
//! This module decodes 32-bit instruction words into the closed [`Instruction`]
//! variant set. The sentinel words are recognised first; after that the opcode
//! fields are tested from the narrowest to the widest (6, 8, 10, then 11 bits)
//! so a wider pattern is never shadowed by an accidental narrow match.

use crate::common::constants::{HALT_WORD, NOP_WORD};
use crate::common::error::Trap;
use crate::isa::instruction::{
    ArithOp, COND, IMM9, IMM9_BITS, IMM12, IMM15, IMM15_BITS, IMM19, IMM19_BITS, IMM26,
    IMM26_BITS, Instruction, InstructionBits, MemOp, get_field, sign_extend,
};
use crate::isa::legv8::opcodes::{
    OP_ADD, OP_ADDI, OP_B, OP_BCOND, OP_BL, OP_CBNZ, OP_CBZ, OP_LDUR, OP_STUR, OP_SUB, OP_SUBI,
    OP_XEXT,
};
use crate::isa::legv8::{Cond, XFunct};

/// Decodes an instruction word.
///
/// # Arguments
///
/// * `word` - The 32-bit instruction encoding to decode.
///
/// # Returns
///
/// The decoded [`Instruction`].
///
/// # Errors
///
/// [`Trap::IllegalInstruction`] (with a zero `pc`) if the word matches no format.
pub fn decode(word: u32) -> Result<Instruction, Trap> {
    decode_at(word, 0)
}

/// Decodes an instruction word fetched from `pc`.
///
/// Identical to [`decode`] except that an illegal word reports `pc`.
///
/// # Errors
///
/// [`Trap::IllegalInstruction`] carrying `word` and `pc`.
pub fn decode_at(word: u32, pc: u64) -> Result<Instruction, Trap> {
    try_decode(word).ok_or(Trap::IllegalInstruction { word, pc })
}

/// Decodes an instruction word, returning `None` when no format matches.
pub fn try_decode(word: u32) -> Option<Instruction> {
    match word {
        HALT_WORD => return Some(Instruction::Halt),
        NOP_WORD => return Some(Instruction::Nop),
        _ => {}
    }

    match word.op6() {
        OP_B | OP_BL => {
            return Some(Instruction::Branch {
                link: word.op6() == OP_BL,
                offset: sign_extend(get_field(word, IMM26.0, IMM26.1), IMM26_BITS),
            });
        }
        _ => {}
    }

    match word.op8() {
        OP_CBZ | OP_CBNZ => {
            return Some(Instruction::CompareBranch {
                nonzero: word.op8() == OP_CBNZ,
                rt: word.rd(),
                offset: sign_extend(get_field(word, IMM19.0, IMM19.1), IMM19_BITS),
            });
        }
        OP_BCOND => {
            let cond = Cond::from_bits(get_field(word, COND.0, COND.1))?;
            return Some(Instruction::CondBranch {
                cond,
                offset: sign_extend(get_field(word, IMM15.0, IMM15.1), IMM15_BITS),
            });
        }
        _ => {}
    }

    match word.op10() {
        OP_ADDI | OP_SUBI => {
            let op = if word.op10() == OP_ADDI {
                ArithOp::Add
            } else {
                ArithOp::Sub
            };
            return Some(Instruction::Immediate {
                op,
                rd: word.rd(),
                rn: word.rn(),
                imm: get_field(word, IMM12.0, IMM12.1),
            });
        }
        _ => {}
    }

    match word.op11() {
        OP_ADD | OP_SUB => Some(Instruction::Register {
            op: if word.op11() == OP_ADD {
                ArithOp::Add
            } else {
                ArithOp::Sub
            },
            rd: word.rd(),
            rn: word.rn(),
            rm: word.rm(),
            shamt: word.shamt(),
        }),
        OP_LDUR | OP_STUR => Some(Instruction::Memory {
            op: if word.op11() == OP_LDUR {
                MemOp::Load
            } else {
                MemOp::Store
            },
            rt: word.rd(),
            rn: word.rn(),
            offset: sign_extend(get_field(word, IMM9.0, IMM9.1), IMM9_BITS),
        }),
        OP_XEXT => Some(Instruction::Extended {
            funct: XFunct::from_bits(word.shamt())?,
            rd: word.rd(),
            rn: word.rn(),
            rm: word.rm(),
        }),
        _ => None,
    }
}
