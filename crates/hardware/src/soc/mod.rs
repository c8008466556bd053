//! System-on-Chip (SoC) Components.
//!
//! The simulated machine has a single memory shared by instruction fetch and
//! data access; there is no bus, cache or device model between CPU and memory.

/// Word-addressed main memory.
pub mod memory;

pub use memory::Memory;
