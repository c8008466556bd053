//! LEGv8 architectural state.
//!
//! This module contains the programmer-visible state the execution engine mutates:
//! 1. **GPRs:** The 32-entry 64-bit general-purpose register file.
//! 2. **Flags:** The Zero and Negative condition flags written by `CMP`.

/// Condition flags and condition evaluation.
pub mod flags;

/// General-Purpose Register file implementation.
pub mod gpr;

pub use flags::Flags;
pub use gpr::Gpr;
