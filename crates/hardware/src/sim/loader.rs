//! Program File Loader.
//!
//! This module moves program images between disk and memory. It performs:
//! 1. **Path normalisation:** Appends the `.arm` extension to paths that carry none.
//! 2. **Loading:** Reads a text file and hands its lines to [`Memory::load_program`].
//! 3. **Saving:** Writes a comment header followed by one `0xHHHHHHHH` line per word.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::common::constants::{PROGRAM_FILE_EXTENSION, PROGRAM_FILE_HEADER};
use crate::common::error::SimError;
use crate::soc::Memory;

/// Returns `path` with the program extension appended when it has none.
///
/// # Arguments
///
/// * `path` - User-supplied file path.
pub fn program_path(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(PROGRAM_FILE_EXTENSION)
    }
}

/// Reads the program file at `path` into `mem`.
///
/// # Returns
///
/// The number of words loaded.
///
/// # Errors
///
/// [`SimError::Io`] if the file cannot be read, [`SimError::Trap`] if the
/// program does not fit.
pub fn load_program_file(mem: &mut Memory, path: impl AsRef<Path>) -> Result<usize, SimError> {
    let path = program_path(path);
    let text = fs::read_to_string(&path).map_err(|source| SimError::Io {
        path: path.clone(),
        source,
    })?;
    let count = mem.load_program(text.lines())?;
    debug!(path = %path.display(), words = count, "program file loaded");
    Ok(count)
}

/// Writes every word of `mem` to the program file at `path`.
///
/// # Returns
///
/// The path actually written, with the extension applied.
///
/// # Errors
///
/// [`SimError::Io`] if the file cannot be written.
pub fn save_program_file(mem: &Memory, path: impl AsRef<Path>) -> Result<PathBuf, SimError> {
    let path = program_path(path);
    let mut text = String::from(PROGRAM_FILE_HEADER);
    text.push('\n');
    for line in mem.dump_program(None) {
        text.push_str(&line);
        text.push('\n');
    }
    fs::write(&path, text).map_err(|source| SimError::Io {
        path: path.clone(),
        source,
    })?;
    debug!(path = %path.display(), words = mem.size_words(), "program file saved");
    Ok(path)
}
