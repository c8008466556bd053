//! Common utilities and types used throughout the simulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the simulator. It includes:
//! 1. **Constants:** Word sizes, sentinel encodings, register roles and default capacities.
//! 2. **Error Handling:** Runtime traps, assembler errors and session errors.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types and trap definitions.
pub mod error;

pub use constants::{HALT_WORD, NOP_WORD, WORD_BYTES};
pub use error::{AsmError, AsmErrorKind, SimError, SourceError, Trap};
