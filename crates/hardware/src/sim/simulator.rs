//! Simulator Session Driver.
//!
//! A [`Simulator`] owns the complete machine for one session (CPU, memory,
//! configuration and statistics) and exposes the operations a front end
//! issues against it:
//! 1. **Assembly into memory:** Typed lines are encoded and stored at PC, not executed.
//! 2. **Execution:** Single steps and bounded runs that stop at `HALT` or a step ceiling.
//! 3. **Housekeeping:** Clearing state and moving programs to and from disk.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::common::constants::WORD_BYTES;
use crate::common::error::{SimError, Trap};
use crate::config::Config;
use crate::core::Cpu;
use crate::core::cpu::StepOutcome;
use crate::isa::asm::assemble;
use crate::sim::loader;
use crate::soc::Memory;
use crate::stats::SimStats;

/// How a bounded run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// `HALT` was fetched after `steps` instructions retired.
    Halted {
        /// Instructions retired during the run.
        steps: u64,
    },
    /// The step ceiling was reached first.
    StepLimit {
        /// Instructions retired during the run (equal to the ceiling).
        steps: u64,
    },
}

impl RunOutcome {
    /// Instructions retired during the run.
    pub const fn steps(&self) -> u64 {
        match *self {
            Self::Halted { steps } | Self::StepLimit { steps } => steps,
        }
    }
}

/// State selected by [`Simulator::clear`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClearTarget {
    /// CPU, memory and statistics.
    All,
    /// The register file only.
    Registers,
    /// Memory only.
    Memory,
}

/// One simulator session.
#[derive(Clone, Debug)]
pub struct Simulator {
    cpu: Cpu,
    mem: Memory,
    config: Config,
    stats: SimStats,
}

impl Simulator {
    /// Creates a session from a validated configuration.
    ///
    /// # Errors
    ///
    /// [`SimError::InvalidConfig`] if `config` fails validation.
    pub fn new(config: Config) -> Result<Self, SimError> {
        config.validate()?;
        let mut cpu = Cpu::new();
        cpu.set_pc(config.general.start_pc);
        Ok(Self {
            cpu,
            mem: Memory::new(config.memory.size_words),
            config,
            stats: SimStats::default(),
        })
    }

    /// The CPU.
    pub const fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    /// The CPU, for register and PC pokes.
    pub const fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    /// The memory.
    pub const fn memory(&self) -> &Memory {
        &self.mem
    }

    /// The memory, for direct word pokes.
    pub const fn memory_mut(&mut self) -> &mut Memory {
        &mut self.mem
    }

    /// The session configuration.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Counters accumulated since creation or the last full clear.
    pub const fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// Assembles `line` and stores the word at PC, then advances PC by 4.
    ///
    /// Blank and comment-only lines store nothing and leave PC alone.
    ///
    /// # Returns
    ///
    /// The stored word, if any.
    ///
    /// # Errors
    ///
    /// [`SimError::Asm`] for bad input, [`SimError::Trap`] if PC does not
    /// address a memory word. PC is unchanged on error.
    pub fn assemble_at_pc(&mut self, line: &str) -> Result<Option<u32>, SimError> {
        let Some(word) = assemble(line)? else {
            return Ok(None);
        };
        let pc = self.cpu.pc();
        self.mem.store_word(pc, word)?;
        self.cpu.set_pc(pc.wrapping_add(WORD_BYTES));
        Ok(Some(word))
    }

    /// Executes one instruction and updates the statistics.
    ///
    /// # Returns
    ///
    /// `false` if `HALT` was fetched.
    ///
    /// # Errors
    ///
    /// Any fault raised by the CPU; state is left as it was before the step.
    pub fn step(&mut self) -> Result<bool, Trap> {
        let outcome = self.cpu.step_outcome(&mut self.mem)?;
        self.stats.record(&outcome);
        Ok(outcome.is_running())
    }

    /// Steps until `HALT` or until `limit` instructions retire.
    ///
    /// # Arguments
    ///
    /// * `limit` - Step ceiling; `None` uses `general.max_steps`.
    ///
    /// # Errors
    ///
    /// The first fault; instructions retired before it stay retired.
    pub fn run(&mut self, limit: Option<u64>) -> Result<RunOutcome, Trap> {
        let limit = limit.unwrap_or(self.config.general.max_steps);
        let mut steps = 0;
        while steps < limit {
            let outcome = self.cpu.step_outcome(&mut self.mem)?;
            self.stats.record(&outcome);
            if outcome == StepOutcome::Halted {
                debug!(steps, pc = format_args!("{:#x}", self.cpu.pc()), "run halted");
                return Ok(RunOutcome::Halted { steps });
            }
            steps += 1;
        }
        warn!(
            limit,
            pc = format_args!("{:#x}", self.cpu.pc()),
            "run stopped at step limit without reaching HALT"
        );
        Ok(RunOutcome::StepLimit { steps })
    }

    /// Clears the selected state.
    ///
    /// A full clear also returns PC to `general.start_pc` and zeroes the statistics.
    pub fn clear(&mut self, target: ClearTarget) {
        match target {
            ClearTarget::All => {
                self.cpu.reset();
                self.cpu.set_pc(self.config.general.start_pc);
                self.mem.clear();
                self.stats.reset();
            }
            ClearTarget::Registers => self.cpu.clear_registers(),
            ClearTarget::Memory => self.mem.clear(),
        }
    }

    /// Loads a program file into memory and moves PC to `general.start_pc`.
    ///
    /// # Errors
    ///
    /// See [`loader::load_program_file`].
    pub fn load_program_file(&mut self, path: impl AsRef<Path>) -> Result<usize, SimError> {
        let count = loader::load_program_file(&mut self.mem, path)?;
        self.cpu.set_pc(self.config.general.start_pc);
        Ok(count)
    }

    /// Replaces memory with already-assembled `words` and moves PC to `general.start_pc`.
    ///
    /// # Errors
    ///
    /// [`Trap::ProgramTooLarge`] if the words do not fit.
    pub fn load_words(&mut self, words: &[u32]) -> Result<usize, Trap> {
        let count = self.mem.load_words(words)?;
        self.cpu.set_pc(self.config.general.start_pc);
        Ok(count)
    }

    /// Saves all of memory to a program file.
    ///
    /// # Errors
    ///
    /// See [`loader::save_program_file`].
    pub fn save_program_file(&self, path: impl AsRef<Path>) -> Result<PathBuf, SimError> {
        loader::save_program_file(&self.mem, path)
    }
}

impl Default for Simulator {
    /// A session with the default 64-word memory.
    fn default() -> Self {
        let config = Config::default();
        Self {
            cpu: Cpu::new(),
            mem: Memory::new(config.memory.size_words),
            config,
            stats: SimStats::default(),
        }
    }
}
