//! Fetch-Decode-Execute Step.
//!
//! This module implements the single-instruction step of the CPU. It performs the following:
//! 1. **Fetch:** Loads the word at PC; alignment and bounds faults propagate unchanged.
//! 2. **Decode:** Parses the word once into an [`Instruction`] variant.
//! 3. **Execute:** Matches exhaustively over the variant and updates registers, flags, PC and memory.
//!
//! Arithmetic wraps at 64 bits. Only `CMP` writes the flags. A faulting step
//! leaves the CPU unchanged.

use tracing::{debug, trace};

use super::{Cpu, CpuState};
use crate::common::constants::{LINK_REG, WORD_BYTES};
use crate::common::error::Trap;
use crate::core::arch::Flags;
use crate::isa::decode::decode_at;
use crate::isa::instruction::{ArithOp, Instruction, MemOp};
use crate::isa::legv8::XFunct;
use crate::soc::Memory;

/// Shift amounts are taken modulo 64.
const SHIFT_MASK: usize = 63;

/// What a single step did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// `HALT` was fetched; nothing changed.
    Halted,
    /// An instruction retired.
    Retired {
        /// The executed instruction.
        inst: Instruction,
        /// For branches, whether control was redirected. Always false otherwise.
        taken: bool,
    },
}

impl StepOutcome {
    /// Returns false for [`StepOutcome::Halted`].
    pub const fn is_running(&self) -> bool {
        !matches!(self, Self::Halted)
    }
}

impl Cpu {
    /// Executes one instruction.
    ///
    /// # Returns
    ///
    /// `true` if still running, `false` if the word at PC is `HALT` (in which
    /// case registers, flags and PC are untouched).
    ///
    /// # Errors
    ///
    /// Fetch and data-access faults, and [`Trap::IllegalInstruction`] for a
    /// word that matches no format.
    pub fn step(&mut self, mem: &mut Memory) -> Result<bool, Trap> {
        self.step_outcome(mem).map(|outcome| outcome.is_running())
    }

    /// Executes one instruction and reports what it did.
    ///
    /// Same semantics as [`Cpu::step`].
    pub fn step_outcome(&mut self, mem: &mut Memory) -> Result<StepOutcome, Trap> {
        let pc = self.pc;
        let word = mem.load_word(pc)?;
        let inst = decode_at(word, pc)?;

        if inst == Instruction::Halt {
            debug!(pc = format_args!("{pc:#x}"), "halt");
            self.state = CpuState::Halted;
            return Ok(StepOutcome::Halted);
        }

        trace!(
            pc = format_args!("{pc:#x}"),
            word = format_args!("{word:#010x}"),
            "{inst}"
        );
        let taken = self.execute(inst, mem)?;
        self.state = CpuState::Running;
        Ok(StepOutcome::Retired { inst, taken })
    }

    /// Applies `inst` to the machine state. Returns whether control was redirected.
    fn execute(&mut self, inst: Instruction, mem: &mut Memory) -> Result<bool, Trap> {
        let pc = self.pc;
        let next = pc.wrapping_add(WORD_BYTES);
        let branch_to = |offset: i64| pc.wrapping_add_signed(offset.wrapping_mul(WORD_BYTES as i64));

        let target = match inst {
            Instruction::Nop | Instruction::Halt => None,
            Instruction::Branch { link, offset } => {
                if link {
                    self.regs.write(LINK_REG, next)?;
                }
                Some(branch_to(offset))
            }
            Instruction::CompareBranch {
                nonzero,
                rt,
                offset,
            } => {
                let is_zero = self.regs.read(rt)? == 0;
                (is_zero != nonzero).then(|| branch_to(offset))
            }
            Instruction::CondBranch { cond, offset } => {
                self.flags.satisfies(cond).then(|| branch_to(offset))
            }
            Instruction::Immediate { op, rd, rn, imm } => {
                let a = self.regs.read(rn)?;
                self.regs.write(rd, arith(op, a, u64::from(imm)))?;
                None
            }
            Instruction::Register { op, rd, rn, rm, .. } => {
                let (a, b) = (self.regs.read(rn)?, self.regs.read(rm)?);
                self.regs.write(rd, arith(op, a, b))?;
                None
            }
            Instruction::Memory { op, rt, rn, offset } => {
                let addr = self.regs.read(rn)?.wrapping_add_signed(offset);
                match op {
                    MemOp::Load => {
                        let val = mem.load_word(addr)?;
                        self.regs.write(rt, u64::from(val))?;
                    }
                    MemOp::Store => mem.store_word(addr, self.regs.read(rt)? as u32)?,
                }
                None
            }
            Instruction::Extended { funct, rd, rn, rm } => self.execute_extended(funct, rd, rn, rm)?,
        };

        self.pc = target.unwrap_or(next);
        Ok(target.is_some())
    }

    /// Executes the extended register-register group. Returns a jump target for `RET`.
    fn execute_extended(
        &mut self,
        funct: XFunct,
        rd: usize,
        rn: usize,
        rm: usize,
    ) -> Result<Option<u64>, Trap> {
        let a = self.regs.read(rn)?;
        let result = match funct {
            XFunct::Ret => return Ok(Some(a)),
            XFunct::Cmp => {
                self.flags = Flags::from_result(a.wrapping_sub(self.regs.read(rm)?));
                return Ok(None);
            }
            // rm holds the shift amount, not a register index
            XFunct::Lsl => a << (rm & SHIFT_MASK),
            XFunct::Lsr => a >> (rm & SHIFT_MASK),
            XFunct::And => a & self.regs.read(rm)?,
            XFunct::Orr => a | self.regs.read(rm)?,
            XFunct::Eor => a ^ self.regs.read(rm)?,
            XFunct::Mul => a.wrapping_mul(self.regs.read(rm)?),
        };
        self.regs.write(rd, result)?;
        Ok(None)
    }
}

const fn arith(op: ArithOp, a: u64, b: u64) -> u64 {
    match op {
        ArithOp::Add => a.wrapping_add(b),
        ArithOp::Sub => a.wrapping_sub(b),
    }
}
