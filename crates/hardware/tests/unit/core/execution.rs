//! # CPU Execution Tests
//!
//! Fetch-decode-execute semantics for every instruction group, the literal
//! execution scenarios, and fault propagation.

use legv8_core::common::error::Trap;
use legv8_core::core::Cpu;
use legv8_core::core::arch::Flags;
use legv8_core::core::cpu::{CpuState, StepOutcome};
use legv8_core::isa::instruction::Instruction;
use pretty_assertions::assert_eq;

use crate::common::harness::TestContext;

// ══════════════════════════════════════════════════════════
// Scenarios
// ══════════════════════════════════════════════════════════

#[test]
fn test_scenario_addi_chain() {
    let mut ctx = TestContext::new().load_asm(&["ADDI X1, X0, #5", "ADDI X2, X1, #10"]);
    ctx.run(2);
    assert_eq!(ctx.get_reg(1), 5);
    assert_eq!(ctx.get_reg(2), 15);
    assert_eq!(ctx.cpu.pc(), 8);
}

#[test]
fn test_scenario_cmp_then_b_lt() {
    let mut ctx = TestContext::new().load_asm(&["CMP X1, X2", "B.LT #2"]);
    ctx.set_reg(1, 3);
    ctx.set_reg(2, 5);

    ctx.run(1);
    assert!(ctx.cpu.flags().negative);
    assert!(!ctx.cpu.flags().zero);
    assert_eq!(ctx.cpu.pc(), 4);

    ctx.run(1);
    assert_eq!(ctx.cpu.pc(), 12);
}

#[test]
fn test_scenario_store_then_load() {
    let mut ctx = TestContext::new().load_asm(&["STUR X5, [X0, #8]", "LDUR X6, [X0, #8]"]);
    ctx.set_reg(0, 0);
    ctx.set_reg(5, 0x1234);
    ctx.run(2);
    assert_eq!(ctx.get_reg(6), 0x1234);
    assert_eq!(ctx.mem.load_word(8), Ok(0x1234));
}

#[test]
fn test_scenario_halt_changes_nothing() {
    let mut ctx = TestContext::new().load_asm(&["HALT"]);
    ctx.set_reg(3, 42);
    let before = ctx.cpu.clone();

    assert!(!ctx.step());
    assert_eq!(ctx.cpu.pc(), 0);
    assert_eq!(ctx.cpu.regs(), before.regs());
    assert_eq!(ctx.cpu.flags(), before.flags());
    assert!(ctx.cpu.is_halted());

    // Still halted on the next step
    assert!(!ctx.step());
    assert_eq!(ctx.cpu.pc(), 0);
}

#[test]
fn test_scenario_ret_to_link_register() {
    let mut ctx = TestContext::new().load_asm(&["RET"]);
    ctx.set_reg(30, 0x40);
    assert!(ctx.step());
    assert_eq!(ctx.cpu.pc(), 0x40);
}

// ══════════════════════════════════════════════════════════
// Control flow
// ══════════════════════════════════════════════════════════

#[test]
fn test_nop_advances_pc_only() {
    let mut ctx = TestContext::new().load_asm(&["NOP"]);
    ctx.run(1);
    assert_eq!(ctx.cpu.pc(), 4);
    assert_eq!(ctx.cpu.regs(), Cpu::new().regs());
}

#[test]
fn test_backward_branch() {
    let mut ctx = TestContext::new().load_asm(&["NOP", "NOP", "B #-2"]);
    ctx.run(3);
    assert_eq!(ctx.cpu.pc(), 0);
}

#[test]
fn test_bl_links_and_ret_returns() {
    // 0: BL #2 -> 8; 8: ADDI X1, X1, #1; 12: RET -> 4
    let mut ctx = TestContext::new().load_asm(&["BL #2", "HALT", "ADDI X1, X1, #1", "RET"]);
    ctx.run(1);
    assert_eq!(ctx.cpu.pc(), 8);
    assert_eq!(ctx.get_reg(30), 4);

    ctx.run(2);
    assert_eq!(ctx.cpu.pc(), 4);
    assert_eq!(ctx.get_reg(1), 1);
    assert!(!ctx.step());
}

#[test]
fn test_cbz_and_cbnz() {
    let mut ctx = TestContext::new().load_asm(&["CBZ X1, #4", "CBNZ X1, #4"]);
    ctx.set_reg(1, 7);
    ctx.run(1);
    assert_eq!(ctx.cpu.pc(), 4, "CBZ falls through on non-zero");
    ctx.run(1);
    assert_eq!(ctx.cpu.pc(), 20, "CBNZ branches on non-zero");

    let mut ctx = TestContext::new().load_asm(&["CBZ X1, #3"]);
    ctx.run(1);
    assert_eq!(ctx.cpu.pc(), 12);
}

#[test]
fn test_conditions_read_flags() {
    let cases = [
        ("B.EQ #3", Flags { zero: true, negative: false }, 12),
        ("B.EQ #3", Flags { zero: false, negative: false }, 4),
        ("B.NE #3", Flags { zero: false, negative: true }, 12),
        ("B.LT #3", Flags { zero: false, negative: false }, 4),
        ("B.GE #3", Flags { zero: true, negative: false }, 12),
        ("B.GE #3", Flags { zero: false, negative: true }, 4),
    ];
    for (line, flags, pc) in cases {
        let mut ctx = TestContext::new().load_asm(&[line]);
        ctx.cpu.set_flags(flags);
        ctx.run(1);
        assert_eq!(ctx.cpu.pc(), pc, "{line} with {flags}");
    }
}

// ══════════════════════════════════════════════════════════
// Data processing
// ══════════════════════════════════════════════════════════

#[test]
fn test_arithmetic_wraps_and_leaves_flags() {
    let mut ctx = TestContext::new().load_asm(&[
        "SUBI X1, X0, #1",
        "ADD X2, X1, X1",
        "SUB X3, X0, X1",
        "ADDI X4, X1, #1",
    ]);
    ctx.run(4);
    assert_eq!(ctx.get_reg(1), u64::MAX);
    assert_eq!(ctx.get_reg(2), u64::MAX - 1);
    assert_eq!(ctx.get_reg(3), 1);
    assert_eq!(ctx.get_reg(4), 0);
    assert_eq!(ctx.cpu.flags(), Flags::default());
}

#[test]
fn test_logic_and_multiply() {
    let mut ctx = TestContext::new().load_asm(&[
        "AND X3, X1, X2",
        "ORR X4, X1, X2",
        "EOR X5, X1, X2",
        "MUL X6, X1, X2",
        "MUL X7, X8, X8",
    ]);
    ctx.set_reg(1, 0b1100);
    ctx.set_reg(2, 0b1010);
    ctx.set_reg(8, 1 << 32);
    ctx.run(5);
    assert_eq!(ctx.get_reg(3), 0b1000);
    assert_eq!(ctx.get_reg(4), 0b1110);
    assert_eq!(ctx.get_reg(5), 0b0110);
    assert_eq!(ctx.get_reg(6), 120);
    assert_eq!(ctx.get_reg(7), 0, "MUL wraps");
}

#[test]
fn test_shifts_use_immediate_amount() {
    let mut ctx = TestContext::new().load_asm(&["LSL X2, X1, #4", "LSR X3, X1, #31"]);
    ctx.set_reg(1, 0x8000_0001);
    // X4 would be read if the shift amount were treated as a register
    ctx.set_reg(4, 99);
    ctx.run(2);
    assert_eq!(ctx.get_reg(2), 0x8_0000_0010);
    assert_eq!(ctx.get_reg(3), 1);
}

#[test]
fn test_cmp_equal_sets_zero_and_keeps_x31() {
    let mut ctx = TestContext::new().load_asm(&["CMP X1, X2"]);
    ctx.set_reg(1, 9);
    ctx.set_reg(2, 9);
    ctx.set_reg(31, 0x77);
    ctx.run(1);
    assert_eq!(ctx.cpu.flags(), Flags { zero: true, negative: false });
    assert_eq!(ctx.get_reg(31), 0x77);
}

#[test]
fn test_ldur_zero_extends() {
    let mut ctx = TestContext::new().load_asm(&["LDUR X1, [X2, #-4]"]);
    ctx.mem.store_word(16, 0xFFFF_FFFF).unwrap();
    ctx.set_reg(2, 20);
    ctx.set_reg(1, u64::MAX);
    ctx.run(1);
    assert_eq!(ctx.get_reg(1), 0xFFFF_FFFF);
}

#[test]
fn test_stur_stores_low_word() {
    let mut ctx = TestContext::new().load_asm(&["STUR X1, [X2, #0]"]);
    ctx.set_reg(1, 0x1122_3344_5566_7788);
    ctx.set_reg(2, 32);
    ctx.run(1);
    assert_eq!(ctx.mem.load_word(32), Ok(0x5566_7788));
}

// ══════════════════════════════════════════════════════════
// Faults
// ══════════════════════════════════════════════════════════

#[test]
fn test_illegal_word_faults_with_pc() {
    let mut ctx = TestContext::new().load_program(4, &[0x0000_0000]);
    assert_eq!(
        ctx.cpu.step(&mut ctx.mem),
        Err(Trap::IllegalInstruction { word: 0, pc: 4 })
    );
    assert_eq!(ctx.cpu.pc(), 4);
}

#[test]
fn test_misaligned_load_faults_without_side_effects() {
    let mut ctx = TestContext::new().load_asm(&["LDUR X1, [X2, #2]"]);
    ctx.set_reg(1, 5);
    assert_eq!(ctx.cpu.step(&mut ctx.mem), Err(Trap::MisalignedAccess(2)));
    assert_eq!(ctx.get_reg(1), 5);
    assert_eq!(ctx.cpu.pc(), 0);
}

#[test]
fn test_out_of_bounds_store_faults() {
    let mut ctx = TestContext::new().with_memory(4).load_asm(&["STUR X1, [X0, #16]"]);
    assert_eq!(ctx.cpu.step(&mut ctx.mem), Err(Trap::OutOfBounds(16)));
}

#[test]
fn test_fetch_faults_propagate() {
    let mut ctx = TestContext::new().with_memory(2);
    ctx.cpu.set_pc(8);
    assert_eq!(ctx.cpu.step(&mut ctx.mem), Err(Trap::OutOfBounds(8)));
    ctx.cpu.set_pc(2);
    assert_eq!(ctx.cpu.step(&mut ctx.mem), Err(Trap::MisalignedAccess(2)));
}

// ══════════════════════════════════════════════════════════
// State control
// ══════════════════════════════════════════════════════════

#[test]
fn test_step_outcome_reports_branch_taken() {
    let mut ctx = TestContext::new().load_asm(&["CBNZ X1, #2"]);
    let outcome = ctx.cpu.step_outcome(&mut ctx.mem).unwrap();
    assert_eq!(
        outcome,
        StepOutcome::Retired {
            inst: Instruction::CompareBranch {
                nonzero: true,
                rt: 1,
                offset: 2
            },
            taken: false
        }
    );
}

#[test]
fn test_reset_and_clear_registers() {
    let mut cpu = Cpu::new();
    cpu.set_x(4, 4).unwrap();
    cpu.set_pc(0x20);
    cpu.set_flags(Flags { zero: true, negative: true });

    cpu.clear_registers();
    assert_eq!(cpu.x(4), Ok(0));
    assert_eq!(cpu.pc(), 0x20);
    assert!(cpu.flags().zero);

    cpu.reset();
    assert_eq!(cpu, Cpu::new());
    assert_eq!(cpu.state(), CpuState::Running);
}

#[test]
fn test_register_poke_out_of_range() {
    let mut cpu = Cpu::new();
    assert_eq!(cpu.set_x(40, 1), Err(Trap::RegisterIndex(40)));
    assert_eq!(cpu.x(32), Err(Trap::RegisterIndex(32)));
}
