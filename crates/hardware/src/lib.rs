//! LEGv8 instruction-set simulator library.
//!
//! This crate implements a small 64-bit LEGv8-style machine for architecture
//! coursework with the following:
//! 1. **ISA:** Bit-exact encoding, decoding, assembly and disassembly of the base and custom formats.
//! 2. **Core:** 32 general-purpose registers, PC, Zero/Negative flags and a fetch-decode-execute step.
//! 3. **Memory:** A bounded word array with aligned byte addressing and hexadecimal program images.
//! 4. **Simulation:** A session driver with bounded runs, program files, configuration and statistics.
//!
//! # Example
//!
//! ```
//! use legv8_core::Simulator;
//!
//! let mut sim = Simulator::default();
//! sim.assemble_at_pc("ADDI X1, X0, #5").unwrap();
//! sim.assemble_at_pc("ADDI X2, X1, #10").unwrap();
//! sim.assemble_at_pc("HALT").unwrap();
//! sim.cpu_mut().set_pc(0);
//!
//! let outcome = sim.run(None).unwrap();
//! assert_eq!(outcome.steps(), 2);
//! assert_eq!(sim.cpu().x(2).unwrap(), 15);
//! ```

/// Common types and constants (sentinel words, register roles, errors).
pub mod common;
/// Simulator configuration (defaults and hierarchical config structures).
pub mod config;
/// CPU core (register file, flags, execution step).
pub mod core;
/// Instruction set (bit fields, format catalog, decode, encode, assembler, disassembler).
pub mod isa;
/// Session driver and program file loader.
pub mod sim;
/// System memory.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or parse JSON with `Config::from_json`.
pub use crate::config::Config;
/// Main CPU type; holds registers, PC and flags.
pub use crate::core::Cpu;
/// Session driver owning CPU, memory, configuration and statistics.
pub use crate::sim::Simulator;
/// Word-addressed main memory.
pub use crate::soc::Memory;
