//! Global System Constants.
//!
//! This module defines system-wide constants used across the simulator. It includes:
//! 1. **Word Constants:** Instruction and memory word sizes.
//! 2. **Sentinel Words:** Fixed full-word encodings that bypass format decoding.
//! 3. **Register Constants:** Register file size and conventional register roles.
//! 4. **Simulation Constants:** Default memory capacity and run-loop ceiling.

/// Size of one instruction (and one memory word) in bytes.
pub const WORD_BYTES: u64 = 4;

/// Width of an instruction word in bits.
pub const WORD_BITS: u32 = 32;

/// Encoding of `NOP` (the AArch64 hint-space NOP). Advances PC only.
pub const NOP_WORD: u32 = 0xD503_201F;

/// Encoding of `HALT`. Stops execution without touching PC.
pub const HALT_WORD: u32 = 0xFFFF_FFFF;

/// Number of general-purpose registers.
pub const NUM_REGS: usize = 32;

/// Link register written by `BL` and used by a bare `RET`.
pub const LINK_REG: usize = 30;

/// Register 31. An ordinary register here, used as the discard target of `CMP`
/// and the fixed `Rt` of conditional branches.
pub const REG_31: usize = 31;

/// Default memory capacity in words (256 bytes).
pub const DEFAULT_MEMORY_WORDS: usize = 64;

/// Default ceiling on steps executed by a single run-until-halt.
pub const DEFAULT_MAX_STEPS: u64 = 1_000_000;

/// Extension appended to program files that have none.
pub const PROGRAM_FILE_EXTENSION: &str = "arm";

/// Comment line written at the top of saved program files.
pub const PROGRAM_FILE_HEADER: &str = "; saved by legv8sim";
