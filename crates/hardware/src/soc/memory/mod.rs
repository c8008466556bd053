//! Word-Addressed System Memory.
//!
//! This module implements the flat memory the CPU fetches from and loads/stores to. It provides:
//! 1. **Storage:** A fixed-capacity array of 32-bit words, zeroed on creation and on clear.
//! 2. **Access:** Byte-addressed word loads and stores with alignment and bounds checks.
//! 3. **Images:** Line-oriented hexadecimal program load and dump (see [`image`]).

/// Hexadecimal program image load/dump.
pub mod image;

use crate::common::constants::{DEFAULT_MEMORY_WORDS, WORD_BYTES};
use crate::common::error::Trap;

/// Fixed-capacity word memory.
///
/// Addresses are byte addresses; every access must be 4-byte aligned and fall
/// inside the capacity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    words: Vec<u32>,
}

impl Memory {
    /// Creates a zeroed memory holding `size_words` words.
    pub fn new(size_words: usize) -> Self {
        Self {
            words: vec![0; size_words],
        }
    }

    /// Zeroes every word.
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Returns the capacity in words.
    pub const fn size_words(&self) -> usize {
        self.words.len()
    }

    /// Returns the capacity in bytes.
    pub const fn size_bytes(&self) -> u64 {
        self.words.len() as u64 * WORD_BYTES
    }

    /// Returns all words, index 0 first.
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Loads the word at byte address `addr`.
    ///
    /// # Errors
    ///
    /// [`Trap::MisalignedAccess`] if `addr` is not a multiple of 4,
    /// [`Trap::OutOfBounds`] if it lies past the end of memory.
    pub fn load_word(&self, addr: u64) -> Result<u32, Trap> {
        let idx = self.index_of(addr)?;
        Ok(self.words[idx])
    }

    /// Stores `value` at byte address `addr`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Memory::load_word`].
    pub fn store_word(&mut self, addr: u64, value: u32) -> Result<(), Trap> {
        let idx = self.index_of(addr)?;
        self.words[idx] = value;
        Ok(())
    }

    /// Reads the word at word index `idx`.
    ///
    /// # Errors
    ///
    /// [`Trap::OutOfBounds`] with the byte address of `idx` if it is past the end.
    pub fn word_at(&self, idx: usize) -> Result<u32, Trap> {
        self.words
            .get(idx)
            .copied()
            .ok_or(Trap::OutOfBounds(idx as u64 * WORD_BYTES))
    }

    /// Writes the word at word index `idx`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Memory::word_at`].
    pub fn set_word_at(&mut self, idx: usize, value: u32) -> Result<(), Trap> {
        let slot = self
            .words
            .get_mut(idx)
            .ok_or(Trap::OutOfBounds(idx as u64 * WORD_BYTES))?;
        *slot = value;
        Ok(())
    }

    /// Converts a byte address into a word index, enforcing alignment and bounds.
    fn index_of(&self, addr: u64) -> Result<usize, Trap> {
        if addr % WORD_BYTES != 0 {
            return Err(Trap::MisalignedAccess(addr));
        }
        usize::try_from(addr / WORD_BYTES)
            .ok()
            .filter(|&idx| idx < self.words.len())
            .ok_or(Trap::OutOfBounds(addr))
    }
}

impl Default for Memory {
    /// A 64-word (256-byte) memory.
    fn default() -> Self {
        Self::new(DEFAULT_MEMORY_WORDS)
    }
}
