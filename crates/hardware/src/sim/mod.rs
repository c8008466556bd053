//! Simulation session and program files.
//!
//! Provides the session driver that owns the machine state for one user
//! session, and the loader that moves hexadecimal program images between
//! memory and disk.

/// Program file reading and writing.
pub mod loader;

/// Session driver: assembly into memory, stepping and bounded runs.
pub mod simulator;

pub use simulator::{ClearTarget, RunOutcome, Simulator};
