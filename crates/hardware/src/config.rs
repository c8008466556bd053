//! Configuration system for the LEGv8 simulator.
//!
//! This module defines the configuration structures used to parameterize a
//! simulator session. It provides:
//! 1. **Defaults:** Baseline memory capacity, start address and run-loop ceiling.
//! 2. **Structures:** Hierarchical config for general settings and memory.
//! 3. **Validation:** Rejection of values the machine cannot run with.
//!
//! Configuration is supplied as JSON (`Config::from_json`) or built with
//! `Config::default()`. Every field is optional in JSON.

use serde::Deserialize;

use crate::common::constants::{DEFAULT_MAX_STEPS, DEFAULT_MEMORY_WORDS, WORD_BYTES};
use crate::common::error::SimError;

/// Default configuration constants for the simulator.
mod defaults {
    use super::{DEFAULT_MAX_STEPS, DEFAULT_MEMORY_WORDS};

    /// Execution starts at the first memory word.
    pub const START_PC: u64 = 0;

    /// Ceiling on steps per run-until-halt.
    pub const MAX_STEPS: u64 = DEFAULT_MAX_STEPS;

    /// Memory capacity in 32-bit words.
    pub const MEMORY_WORDS: usize = DEFAULT_MEMORY_WORDS;
}

/// Top-level simulator configuration.
///
/// # Example
///
/// ```
/// use legv8_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_instructions": true, "max_steps": 500 },
///     "memory": { "size_words": 128 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.start_pc, 0);
/// assert_eq!(config.general.max_steps, 500);
/// assert_eq!(config.memory.size_words, 128);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Main memory configuration
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// [`SimError::Config`] for malformed JSON, [`SimError::InvalidConfig`]
    /// when [`Config::validate`] rejects a value.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration describes a runnable machine.
    ///
    /// # Errors
    ///
    /// [`SimError::InvalidConfig`] naming the offending field.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.memory.size_words == 0 {
            return Err(SimError::InvalidConfig(
                "memory.size_words must be at least 1".into(),
            ));
        }
        if self.general.max_steps == 0 {
            return Err(SimError::InvalidConfig(
                "general.max_steps must be at least 1".into(),
            ));
        }
        if self.general.start_pc % WORD_BYTES != 0 {
            return Err(SimError::InvalidConfig(format!(
                "general.start_pc {:#x} is not word aligned",
                self.general.start_pc
            )));
        }
        Ok(())
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Log every executed instruction at `trace` level
    #[serde(default)]
    pub trace_instructions: bool,

    /// Initial PC value
    #[serde(default = "GeneralConfig::default_start_pc")]
    pub start_pc: u64,

    /// Steps a run may take before it stops without reaching `HALT`
    #[serde(default = "GeneralConfig::default_max_steps")]
    pub max_steps: u64,
}

impl GeneralConfig {
    /// Returns the default starting program counter.
    const fn default_start_pc() -> u64 {
        defaults::START_PC
    }

    /// Returns the default run-loop ceiling.
    const fn default_max_steps() -> u64 {
        defaults::MAX_STEPS
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            start_pc: defaults::START_PC,
            max_steps: defaults::MAX_STEPS,
        }
    }
}

/// Main memory configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemoryConfig {
    /// Capacity in 32-bit words
    #[serde(default = "MemoryConfig::default_size_words")]
    pub size_words: usize,
}

impl MemoryConfig {
    /// Returns the default capacity in words.
    const fn default_size_words() -> usize {
        defaults::MEMORY_WORDS
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            size_words: defaults::MEMORY_WORDS,
        }
    }
}
