//! Core processor implementation.
//!
//! This module contains the architectural state (register file and flags) and
//! the CPU that steps through memory one instruction at a time. There is no
//! pipeline and no timing model; every step retires exactly one instruction.

/// Architecture-specific components (register file, condition flags).
pub mod arch;

/// CPU core implementation and the execution step.
pub mod cpu;

pub use self::cpu::Cpu;
