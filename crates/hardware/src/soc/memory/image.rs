//! Hexadecimal Program Images.
//!
//! The on-disk program format is plain text with one hexadecimal word per
//! line. Loading is forgiving: each line may carry an optional `0x` prefix and
//! a trailing comment introduced by `;` or `#`, and lines that do not parse as
//! a word (blank, comment-only, junk, more than 32 bits) are skipped rather
//! than zero-filled. A bare token made only of hex letters, such as `ADD`, is
//! a word like any other.
//! Dumping writes `0xHHHHHHHH`, upper-case and zero-padded.

use tracing::debug;

use super::Memory;
use crate::common::error::Trap;

impl Memory {
    /// Clears memory and fills it from `lines`, starting at word index 0.
    ///
    /// # Returns
    ///
    /// The number of words loaded.
    ///
    /// # Errors
    ///
    /// [`Trap::ProgramTooLarge`] if the lines hold more words than the capacity.
    /// Memory is left cleared in that case.
    pub fn load_program<I, S>(&mut self, lines: I) -> Result<usize, Trap>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<u32> = lines
            .into_iter()
            .filter_map(|l| parse_hex_word(l.as_ref()))
            .collect();
        self.load_words(&words)
    }

    /// Clears memory and copies `words` in from word index 0.
    ///
    /// # Errors
    ///
    /// [`Trap::ProgramTooLarge`] if `words` is longer than the capacity.
    pub fn load_words(&mut self, words: &[u32]) -> Result<usize, Trap> {
        self.clear();
        let capacity = self.size_words();
        if words.len() > capacity {
            return Err(Trap::ProgramTooLarge { capacity });
        }
        self.words[..words.len()].copy_from_slice(words);
        debug!(words = words.len(), capacity, "program loaded");
        Ok(words.len())
    }

    /// Renders memory as one `0xHHHHHHHH` line per word.
    ///
    /// # Arguments
    ///
    /// * `max_words` - Dump only the first `n` words; `None` dumps everything.
    pub fn dump_program(&self, max_words: Option<usize>) -> Vec<String> {
        let n = max_words.map_or(self.size_words(), |m| m.min(self.size_words()));
        self.words[..n].iter().map(|w| format!("0x{w:08X}")).collect()
    }
}

/// Parses one image line. Returns `None` for lines holding no word or a value wider than 32 bits.
pub fn parse_hex_word(line: &str) -> Option<u32> {
    let end = line.find([';', '#']).unwrap_or(line.len());
    let text = line[..end].trim();
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}
