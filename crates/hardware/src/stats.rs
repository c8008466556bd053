//! Simulation statistics collection and reporting.
//!
//! This module tracks execution counts for a simulator session. It provides:
//! 1. **Retirement:** Total instructions retired and `HALT` fetches observed.
//! 2. **Instruction mix:** Loads, stores and branches.
//! 3. **Branch outcome:** Taken versus not-taken redirects.

use std::fmt;

use crate::core::cpu::StepOutcome;
use crate::isa::instruction::{Instruction, MemOp};

/// Simulation statistics structure.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Number of instructions retired (`HALT` fetches excluded).
    pub instructions_retired: u64,
    /// Count of `LDUR` instructions retired.
    pub inst_load: u64,
    /// Count of `STUR` instructions retired.
    pub inst_store: u64,
    /// Count of branch instructions (including `RET`) retired.
    pub inst_branch: u64,
    /// Branches that redirected control.
    pub branches_taken: u64,
    /// Conditional branches that fell through.
    pub branches_not_taken: u64,
    /// Steps that fetched `HALT`.
    pub halts: u64,
}

impl SimStats {
    /// Accounts for one step.
    pub const fn record(&mut self, outcome: &StepOutcome) {
        let (inst, taken) = match *outcome {
            StepOutcome::Halted => {
                self.halts += 1;
                return;
            }
            StepOutcome::Retired { inst, taken } => (inst, taken),
        };

        self.instructions_retired += 1;
        match inst {
            Instruction::Memory { op: MemOp::Load, .. } => self.inst_load += 1,
            Instruction::Memory { op: MemOp::Store, .. } => self.inst_store += 1,
            _ if inst.is_branch() => {
                self.inst_branch += 1;
                if taken {
                    self.branches_taken += 1;
                } else {
                    self.branches_not_taken += 1;
                }
            }
            _ => {}
        }
    }

    /// Zeroes every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "sim_insts                {}", self.instructions_retired)?;
        writeln!(f, "  op.load                {}", self.inst_load)?;
        writeln!(f, "  op.store               {}", self.inst_store)?;
        writeln!(f, "  op.branch              {}", self.inst_branch)?;
        writeln!(f, "  branch.taken           {}", self.branches_taken)?;
        writeln!(f, "  branch.not_taken       {}", self.branches_not_taken)?;
        write!(f, "halts                    {}", self.halts)
    }
}
