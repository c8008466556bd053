//! # ISA Unit Tests
//!
//! This module contains unit tests for the instruction set layer: bit fields,
//! the format catalog, decoding, assembly and disassembly.




/// Disassembler text for every mnemonic.
pub mod disasm;
