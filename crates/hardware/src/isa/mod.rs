//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the format catalog, the bit-field layer and the translation between
//! assembly text, decoded instructions and 32-bit instruction words.
//!
//! # Formats
//!
//! * B, CB, I, R, D: base formats from the LEGv8 reference sheet.
//! * Conditional branch and extended register-register: custom formats placed
//!   in opcode space the sheet leaves unused.

/// Line assembler (text to instruction word).
pub mod asm;

/// Instruction decoding for all formats.
pub mod decode;

/// Instruction disassembler for renderers, tracing and diagnostics.
pub mod disasm;

/// Instruction encoding (decoded instruction to word).
pub mod encode;

/// Bit-field utilities, field extraction and the decoded instruction type.
pub mod instruction;

/// Opcode, function and condition code catalog.
pub mod legv8;

pub use asm::{assemble, assemble_source};
pub use decode::decode;
pub use disasm::disassemble;
pub use encode::encode;
pub use instruction::Instruction;
