//! LEGv8 General-Purpose Register File.
//!
//! This module implements the General-Purpose Register (GPR) file. It performs the following:
//! 1. **Storage:** Maintains 32 integer registers (`X0`-`X31`).
//! 2. **Index Checking:** Rejects indices outside 0..=31 with [`Trap::RegisterIndex`].
//! 3. **Debugging:** Provides utilities for rendering the complete register state.
//!
//! There is no hardwired zero register. `X31` reads and writes like any other
//! register; `CMP` and `RET` rely on that.

use crate::common::constants::NUM_REGS;
use crate::common::error::Trap;

/// General-Purpose Register file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u64; NUM_REGS],
}

impl Gpr {
    /// Creates a new general-purpose register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    ///
    /// # Returns
    ///
    /// The 64-bit value stored in the register.
    ///
    /// # Errors
    ///
    /// [`Trap::RegisterIndex`] if `idx` is not in 0..=31.
    pub fn read(&self, idx: usize) -> Result<u64, Trap> {
        self.regs.get(idx).copied().ok_or(Trap::RegisterIndex(idx))
    }

    /// Writes a value to a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `val` - The 64-bit value to write.
    ///
    /// # Errors
    ///
    /// [`Trap::RegisterIndex`] if `idx` is not in 0..=31.
    pub fn write(&mut self, idx: usize, val: u64) -> Result<(), Trap> {
        let slot = self.regs.get_mut(idx).ok_or(Trap::RegisterIndex(idx))?;
        *slot = val;
        Ok(())
    }

    /// Zeroes every register.
    pub const fn clear(&mut self) {
        self.regs = [0; NUM_REGS];
    }

    /// Returns all register values, `X0` first.
    pub const fn as_slice(&self) -> &[u64; NUM_REGS] {
        &self.regs
    }

    /// Renders the register file in pairs, one pair per line.
    pub fn dump(&self) -> Vec<String> {
        (0..NUM_REGS)
            .step_by(2)
            .map(|i| {
                format!(
                    "X{:<2}={:#018x} X{:<2}={:#018x}",
                    i,
                    self.regs[i],
                    i + 1,
                    self.regs[i + 1]
                )
            })
            .collect()
    }
}
