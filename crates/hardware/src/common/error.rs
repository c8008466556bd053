//! Trap and Error definitions.
//!
//! This module defines the error handling for the simulator. It provides:
//! 1. **Trap Representation:** Runtime faults raised by memory accesses, decoding and register pokes.
//! 2. **Assembler Errors:** Recoverable user-input problems reported while assembling text.
//! 3. **Session Errors:** A union of the above plus file I/O and configuration failures.
//!
//! The core never recovers from any of these; they surface to the immediate caller.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Runtime faults raised by the memory system and the execution engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Trap {
    /// A word access used a byte address that is not a multiple of 4.
    #[error("misaligned word access at {0:#x} (address must be a multiple of 4)")]
    MisalignedAccess(u64),

    /// A word access fell outside the memory's capacity.
    #[error("memory access out of bounds at {0:#x}")]
    OutOfBounds(u64),

    /// The fetched word matches no instruction format.
    #[error("illegal instruction {word:#010x} at pc {pc:#x}")]
    IllegalInstruction {
        /// The offending instruction word.
        word: u32,
        /// Address it was fetched from (zero when decoded outside a fetch).
        pc: u64,
    },

    /// A register index outside 0..=31 was passed to a register accessor.
    #[error("register index {0} out of range (X0..X31)")]
    RegisterIndex(usize),

    /// A program image holds more words than the memory can store.
    #[error("program too large for memory ({capacity} words)")]
    ProgramTooLarge {
        /// Memory capacity in words.
        capacity: usize,
    },
}

/// Category of an [`AsmError`], independent of its message payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AsmErrorKind {
    /// Malformed line structure.
    Syntax,
    /// Wrong number of operands for the mnemonic.
    Arity,
    /// An operand token could not be parsed.
    InvalidOperand,
    /// A numeric operand lies outside its field's legal range.
    Range,
    /// The mnemonic is not part of the instruction set.
    UnknownInstruction,
}

/// Assembler failures. All are recoverable: the caller reports and continues.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AsmError {
    /// The line is structurally malformed.
    #[error("syntax error: {0}")]
    Syntax(String),

    /// The mnemonic received the wrong number of operands.
    #[error("{mnemonic} expects: {expected}")]
    Arity {
        /// Upper-cased mnemonic.
        mnemonic: String,
        /// Expected operand shape, e.g. `ADD Xd, Xn, Xm`.
        expected: &'static str,
    },

    /// An operand token is not a valid register or immediate.
    #[error("invalid operand `{operand}`: {reason}")]
    InvalidOperand {
        /// The token as written.
        operand: String,
        /// What was expected instead.
        reason: &'static str,
    },

    /// An immediate does not fit its encoding field.
    #[error("{what} {value} out of range ({min}..={max})")]
    Range {
        /// Field description.
        what: &'static str,
        /// Value as written.
        value: i64,
        /// Smallest legal value.
        min: i64,
        /// Largest legal value.
        max: i64,
    },

    /// The mnemonic is unknown.
    #[error("unknown or unsupported instruction: {0}")]
    UnknownInstruction(String),
}

impl AsmError {
    /// Returns the category of this error.
    pub const fn kind(&self) -> AsmErrorKind {
        match self {
            Self::Syntax(_) => AsmErrorKind::Syntax,
            Self::Arity { .. } => AsmErrorKind::Arity,
            Self::InvalidOperand { .. } => AsmErrorKind::InvalidOperand,
            Self::Range { .. } => AsmErrorKind::Range,
            Self::UnknownInstruction(_) => AsmErrorKind::UnknownInstruction,
        }
    }
}

/// An [`AsmError`] located within multi-line source text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("line {line}: {source}")]
pub struct SourceError {
    /// 1-based line number.
    pub line: usize,
    /// The underlying assembler error.
    pub source: AsmError,
}

/// Errors surfaced by a simulator session.
#[derive(Debug, Error)]
pub enum SimError {
    /// Single-line assembly failed.
    #[error(transparent)]
    Asm(#[from] AsmError),

    /// Source-file assembly failed.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// The machine faulted.
    #[error(transparent)]
    Trap(#[from] Trap),

    /// A program file could not be read or written.
    #[error("{}: {source}", path.display())]
    Io {
        /// File involved.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// The configuration parsed but holds an unusable value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
