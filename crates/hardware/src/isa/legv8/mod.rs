//! LEGv8 Instruction Format Catalog.
//!
//! Fixed opcode constants and sub-opcode codes for the base LEGv8 formats
//! (R, I, D, B, CB) and the custom extensions (conditional branch and the
//! extended register-register group).
//!
//! # Structure
//!
//! - `opcodes`: Opcode field values and the catalog used to check disjointness.
//! - `xfunct`: Function codes of the extended format.
//! - `cond`: Condition codes of the conditional branch.

/// Condition codes for `B.cond`.
pub mod cond;

/// Opcode field values for every format.
pub mod opcodes;

/// Function codes of the extended register-register format.
pub mod xfunct;

pub use cond::Cond;
pub use xfunct::XFunct;
