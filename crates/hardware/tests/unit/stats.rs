//! # Statistics Tests
//!
//! Accounting of step outcomes into the instruction-mix and branch counters.

use legv8_core::core::cpu::StepOutcome;
use legv8_core::isa::instruction::{ArithOp, Instruction, MemOp};
use legv8_core::isa::legv8::{Cond, XFunct};
use legv8_core::stats::SimStats;

fn retired(inst: Instruction, taken: bool) -> StepOutcome {
    StepOutcome::Retired { inst, taken }
}

#[test]
fn test_record_instruction_mix() {
    let mut stats = SimStats::default();
    stats.record(&retired(
        Instruction::Memory {
            op: MemOp::Load,
            rt: 1,
            rn: 2,
            offset: 0,
        },
        false,
    ));
    stats.record(&retired(
        Instruction::Memory {
            op: MemOp::Store,
            rt: 1,
            rn: 2,
            offset: 0,
        },
        false,
    ));
    stats.record(&retired(
        Instruction::Immediate {
            op: ArithOp::Add,
            rd: 1,
            rn: 1,
            imm: 1,
        },
        false,
    ));
    stats.record(&StepOutcome::Halted);

    assert_eq!(stats.instructions_retired, 3);
    assert_eq!(stats.inst_load, 1);
    assert_eq!(stats.inst_store, 1);
    assert_eq!(stats.inst_branch, 0);
    assert_eq!(stats.halts, 1);
}

#[test]
fn test_record_branch_outcomes() {
    let mut stats = SimStats::default();
    stats.record(&retired(
        Instruction::CondBranch {
            cond: Cond::Eq,
            offset: 2,
        },
        true,
    ));
    stats.record(&retired(
        Instruction::CondBranch {
            cond: Cond::Ne,
            offset: 2,
        },
        false,
    ));
    stats.record(&retired(
        Instruction::Extended {
            funct: XFunct::Ret,
            rd: 0,
            rn: 30,
            rm: 0,
        },
        true,
    ));
    // CMP is not a branch
    stats.record(&retired(
        Instruction::Extended {
            funct: XFunct::Cmp,
            rd: 31,
            rn: 1,
            rm: 2,
        },
        false,
    ));

    assert_eq!(stats.inst_branch, 3);
    assert_eq!(stats.branches_taken, 2);
    assert_eq!(stats.branches_not_taken, 1);
    assert_eq!(stats.instructions_retired, 4);
}

#[test]
fn test_report_and_reset() {
    let mut stats = SimStats::default();
    stats.record(&StepOutcome::Halted);
    let report = stats.to_string();
    assert!(report.starts_with("sim_insts                0"));
    assert!(report.ends_with("halts                    1"));

    stats.reset();
    assert_eq!(stats, SimStats::default());
}
