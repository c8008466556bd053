//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which holds the entire
//! programmer-visible processor state. It coordinates the following:
//! 1. **State Management:** Maintains registers, program counter and condition flags.
//! 2. **Run State:** Tracks whether the last step observed `HALT`.
//! 3. **Debug Access:** Checked register pokes and explicit reset operations.
//!
//! Memory is not owned by the CPU; it is borrowed into every [`Cpu::step`].

/// Fetch-decode-execute step.
pub mod execution;

use crate::common::error::Trap;
use crate::core::arch::{Flags, Gpr};

pub use execution::StepOutcome;

/// Run state of the processor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CpuState {
    /// The next step will fetch and execute.
    #[default]
    Running,
    /// The last step fetched `HALT`.
    Halted,
}

/// Main CPU structure containing all processor state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cpu {
    regs: Gpr,
    pc: u64,
    flags: Flags,
    state: CpuState,
}

impl Cpu {
    /// Creates a CPU in the initial state: running, PC 0, registers and flags zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets registers, flags, PC and run state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Zeroes the register file only; PC, flags and run state are kept.
    pub fn clear_registers(&mut self) {
        self.regs.clear();
    }

    /// Reads register `X<idx>`.
    ///
    /// # Errors
    ///
    /// [`Trap::RegisterIndex`] if `idx` is not in 0..=31.
    pub fn x(&self, idx: usize) -> Result<u64, Trap> {
        self.regs.read(idx)
    }

    /// Writes register `X<idx>`.
    ///
    /// # Errors
    ///
    /// [`Trap::RegisterIndex`] if `idx` is not in 0..=31.
    pub fn set_x(&mut self, idx: usize, val: u64) -> Result<(), Trap> {
        self.regs.write(idx, val)
    }

    /// The register file.
    pub const fn regs(&self) -> &Gpr {
        &self.regs
    }

    /// Current program counter.
    pub const fn pc(&self) -> u64 {
        self.pc
    }

    /// Moves the program counter. Alignment is checked by the next fetch.
    pub const fn set_pc(&mut self, pc: u64) {
        self.pc = pc;
    }

    /// Current condition flags.
    pub const fn flags(&self) -> Flags {
        self.flags
    }

    /// Overwrites the condition flags.
    pub const fn set_flags(&mut self, flags: Flags) {
        self.flags = flags;
    }

    /// Current run state.
    pub const fn state(&self) -> CpuState {
        self.state
    }

    /// Returns true if the last step fetched `HALT`.
    pub const fn is_halted(&self) -> bool {
        matches!(self.state, CpuState::Halted)
    }
}
