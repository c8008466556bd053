//! # Simulator Session Tests
//!
//! Assembly into memory at PC, bounded runs, clearing and statistics.

use legv8_core::common::error::{SimError, Trap};
use legv8_core::config::Config;
use legv8_core::sim::{ClearTarget, RunOutcome, Simulator};
use pretty_assertions::assert_eq;

fn session(lines: &[&str]) -> Simulator {
    let mut sim = Simulator::default();
    for line in lines {
        let _ = sim.assemble_at_pc(line).unwrap();
    }
    sim.cpu_mut().set_pc(0);
    sim
}

#[test]
fn test_assemble_at_pc_stores_and_advances() {
    let mut sim = Simulator::default();
    assert_eq!(sim.assemble_at_pc("ADDI X1, X0, #5").unwrap(), Some(0x9100_1401));
    assert_eq!(sim.cpu().pc(), 4);
    assert_eq!(sim.memory().word_at(0), Ok(0x9100_1401));

    // Typed instructions are stored, not executed
    assert_eq!(sim.cpu().x(1), Ok(0));
}

#[test]
fn test_assemble_at_pc_ignores_blank_lines() {
    let mut sim = Simulator::default();
    assert_eq!(sim.assemble_at_pc("   ; nothing").unwrap(), None);
    assert_eq!(sim.cpu().pc(), 0);
}

#[test]
fn test_assemble_at_pc_error_keeps_pc() {
    let mut sim = Simulator::default();
    assert!(matches!(sim.assemble_at_pc("ADD X1"), Err(SimError::Asm(_))));
    assert_eq!(sim.cpu().pc(), 0);

    sim.cpu_mut().set_pc(256);
    assert!(matches!(
        sim.assemble_at_pc("NOP"),
        Err(SimError::Trap(Trap::OutOfBounds(256)))
    ));
    assert_eq!(sim.cpu().pc(), 256);
}

#[test]
fn test_run_until_halt() {
    let mut sim = session(&["ADDI X1, X0, #5", "ADDI X2, X1, #10", "HALT"]);
    assert_eq!(sim.run(None), Ok(RunOutcome::Halted { steps: 2 }));
    assert_eq!(sim.cpu().x(2), Ok(15));
    assert_eq!(sim.cpu().pc(), 8);
    assert!(sim.cpu().is_halted());
}

#[test]
fn test_run_stops_at_step_limit() {
    let mut sim = session(&["B #0"]);
    assert_eq!(sim.run(Some(10)), Ok(RunOutcome::StepLimit { steps: 10 }));
    assert_eq!(sim.stats().instructions_retired, 10);
    assert_eq!(sim.stats().branches_taken, 10);
}

#[test]
fn test_run_uses_configured_ceiling() {
    let mut config = Config::default();
    config.general.max_steps = 3;
    let mut sim = Simulator::new(config).unwrap();
    let _ = sim.assemble_at_pc("NOP").unwrap();
    let _ = sim.assemble_at_pc("B #-1").unwrap();
    sim.cpu_mut().set_pc(0);
    assert_eq!(sim.run(None).map(|o| o.steps()), Ok(3));
}

#[test]
fn test_run_propagates_fault() {
    let mut sim = session(&["ADDI X1, X0, #1", "LDUR X2, [X1, #0]"]);
    assert_eq!(sim.run(None), Err(Trap::MisalignedAccess(1)));
    assert_eq!(sim.cpu().x(1), Ok(1));
    assert_eq!(sim.cpu().pc(), 4);
}

#[test]
fn test_step_records_stats() {
    let mut sim = session(&["STUR X1, [X0, #32]", "LDUR X2, [X0, #32]", "CBZ X3, #0", "HALT"]);
    sim.cpu_mut().set_x(3, 1).unwrap();
    assert!(sim.step().unwrap());
    assert!(sim.step().unwrap());
    assert!(sim.step().unwrap());
    assert!(!sim.step().unwrap());

    let stats = sim.stats();
    assert_eq!(stats.instructions_retired, 3);
    assert_eq!(stats.inst_load, 1);
    assert_eq!(stats.inst_store, 1);
    assert_eq!(stats.inst_branch, 1);
    assert_eq!(stats.branches_not_taken, 1);
    assert_eq!(stats.halts, 1);
}

#[test]
fn test_clear_targets() {
    let mut sim = session(&["ADDI X1, X0, #7"]);
    let _ = sim.run(Some(1)).unwrap();

    sim.clear(ClearTarget::Registers);
    assert_eq!(sim.cpu().x(1), Ok(0));
    assert_eq!(sim.cpu().pc(), 4);
    assert_eq!(sim.memory().word_at(0), Ok(0x9100_1C01));

    sim.clear(ClearTarget::Memory);
    assert_eq!(sim.memory().word_at(0), Ok(0));

    sim.cpu_mut().set_x(2, 2).unwrap();
    sim.clear(ClearTarget::All);
    assert_eq!(sim.cpu().x(2), Ok(0));
    assert_eq!(sim.cpu().pc(), 0);
    assert_eq!(sim.stats().instructions_retired, 0);
}

#[test]
fn test_new_rejects_invalid_config() {
    let mut config = Config::default();
    config.memory.size_words = 0;
    assert!(matches!(
        Simulator::new(config),
        Err(SimError::InvalidConfig(_))
    ));
}

#[test]
fn test_start_pc_applies() {
    let mut config = Config::default();
    config.general.start_pc = 16;
    let mut sim = Simulator::new(config).unwrap();
    assert_eq!(sim.cpu().pc(), 16);
    assert_eq!(sim.load_words(&[0xFFFF_FFFF]), Ok(1));
    assert_eq!(sim.cpu().pc(), 16);
}
