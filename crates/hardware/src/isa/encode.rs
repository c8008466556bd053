//! LEGv8 Instruction Encoder.
//!
//! Packs an [`Instruction`] into its 32-bit word. Each field is masked to its
//! width on insertion, so out-of-range values are truncated rather than
//! rejected; range checking is the assembler's job.

use crate::common::constants::{HALT_WORD, NOP_WORD, REG_31};
use crate::isa::instruction::{
    ArithOp, COND, IMM9, IMM12, IMM15, IMM19, IMM26, Instruction, MemOp, OP6, OP8, OP10, OP11, RD,
    RM, RN, SHAMT, set_field,
};
use crate::isa::legv8::opcodes::{
    OP_ADD, OP_ADDI, OP_B, OP_BCOND, OP_BL, OP_CBNZ, OP_CBZ, OP_LDUR, OP_STUR, OP_SUB, OP_SUBI,
    OP_XEXT,
};

/// Encodes an instruction into its 32-bit word.
pub fn encode(inst: &Instruction) -> u32 {
    match *inst {
        Instruction::Nop => NOP_WORD,
        Instruction::Halt => HALT_WORD,
        Instruction::Branch { link, offset } => {
            let w = set_field(0, OP6.0, OP6.1, if link { OP_BL } else { OP_B });
            set_field(w, IMM26.0, IMM26.1, offset as u32)
        }
        Instruction::CompareBranch {
            nonzero,
            rt,
            offset,
        } => {
            let w = set_field(0, OP8.0, OP8.1, if nonzero { OP_CBNZ } else { OP_CBZ });
            let w = set_field(w, IMM19.0, IMM19.1, offset as u32);
            set_field(w, RD.0, RD.1, rt as u32)
        }
        Instruction::CondBranch { cond, offset } => {
            let w = set_field(0, OP8.0, OP8.1, OP_BCOND);
            let w = set_field(w, COND.0, COND.1, cond.bits());
            let w = set_field(w, IMM15.0, IMM15.1, offset as u32);
            set_field(w, RD.0, RD.1, REG_31 as u32)
        }
        Instruction::Immediate { op, rd, rn, imm } => {
            let opcode = match op {
                ArithOp::Add => OP_ADDI,
                ArithOp::Sub => OP_SUBI,
            };
            let w = set_field(0, OP10.0, OP10.1, opcode);
            let w = set_field(w, IMM12.0, IMM12.1, imm);
            let w = set_field(w, RN.0, RN.1, rn as u32);
            set_field(w, RD.0, RD.1, rd as u32)
        }
        Instruction::Register {
            op,
            rd,
            rn,
            rm,
            shamt,
        } => {
            let opcode = match op {
                ArithOp::Add => OP_ADD,
                ArithOp::Sub => OP_SUB,
            };
            encode_r(opcode, rm as u32, shamt, rn as u32, rd as u32)
        }
        Instruction::Memory { op, rt, rn, offset } => {
            let opcode = match op {
                MemOp::Load => OP_LDUR,
                MemOp::Store => OP_STUR,
            };
            let w = set_field(0, OP11.0, OP11.1, opcode);
            let w = set_field(w, IMM9.0, IMM9.1, offset as u32);
            let w = set_field(w, RN.0, RN.1, rn as u32);
            set_field(w, RD.0, RD.1, rt as u32)
        }
        Instruction::Extended { funct, rd, rn, rm } => {
            encode_r(OP_XEXT, rm as u32, funct.bits(), rn as u32, rd as u32)
        }
    }
}

/// Packs the R-format layout shared by `ADD`/`SUB` and the extended group.
const fn encode_r(opcode: u32, rm: u32, shamt: u32, rn: u32, rd: u32) -> u32 {
    let w = set_field(0, OP11.0, OP11.1, opcode);
    let w = set_field(w, RM.0, RM.1, rm);
    let w = set_field(w, SHAMT.0, SHAMT.1, shamt);
    let w = set_field(w, RN.0, RN.1, rn);
    set_field(w, RD.0, RD.1, rd)
}
