//! LEGv8 assembler and simulator CLI.
//!
//! This binary is a batch front end over `legv8-core`. It performs:
//! 1. **Assemble:** Translate an assembly source file into a hexadecimal program file.
//! 2. **Disassemble:** List a program file with addresses and mnemonics.
//! 3. **Run:** Load a program (hex or assembly), run it to `HALT` or the step ceiling, and print the machine state.
//!
//! Logging goes to stderr through `tracing`; `RUST_LOG` selects the level and
//! `--trace` turns on per-instruction tracing.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use legv8_core::common::error::SimError;
use legv8_core::config::Config;
use legv8_core::isa::{assemble_source, disasm::disassemble};
use legv8_core::sim::{RunOutcome, Simulator};
use legv8_core::soc::Memory;
use legv8_core::soc::memory::image::parse_hex_word;

#[derive(Parser, Debug)]
#[command(
    name = "legv8sim",
    author,
    version,
    about = "LEGv8 assembler and instruction-set simulator",
    long_about = "Assemble, disassemble and run LEGv8 programs.\n\nExamples:\n  legv8sim assemble prog.s -o prog.arm\n  legv8sim disasm prog.arm\n  legv8sim run prog.arm --max-steps 1000\n  legv8sim run prog.s --asm --trace"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Assemble a source file into a hexadecimal program.
    Assemble {
        /// Assembly source, one instruction per line.
        source: PathBuf,

        /// Output program file (`.arm` is appended when no extension is given).
        /// Prints to stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Disassemble a hexadecimal program file.
    Disasm {
        /// Program file.
        program: PathBuf,
    },

    /// Run a program until HALT or the step ceiling.
    Run {
        /// Program file (hexadecimal, or assembly with `--asm`).
        program: PathBuf,

        /// Treat the input as assembly source.
        #[arg(long)]
        asm: bool,

        /// Step ceiling (defaults to `general.max_steps`).
        #[arg(long)]
        max_steps: Option<u64>,

        /// Memory capacity in words (overrides the config file).
        #[arg(long)]
        mem_words: Option<usize>,

        /// JSON configuration file.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Log every executed instruction.
        #[arg(long)]
        trace: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Assemble { source, output } => {
            init_logging(false);
            cmd_assemble(&source, output.as_deref())
        }
        Commands::Disasm { program } => {
            init_logging(false);
            cmd_disasm(&program)
        }
        Commands::Run {
            program,
            asm,
            max_steps,
            mem_words,
            config,
            trace,
        } => cmd_run(
            &program,
            asm,
            max_steps,
            mem_words,
            config.as_deref(),
            trace,
        ),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[!] {e}");
            ExitCode::FAILURE
        }
    }
}

/// Installs the stderr subscriber. `trace` forces per-instruction logging for the core.
fn init_logging(trace: bool) {
    let filter = if trace {
        EnvFilter::new("legv8_core=trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn read_text(path: &Path) -> Result<String, SimError> {
    fs::read_to_string(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn cmd_assemble(source: &Path, output: Option<&Path>) -> Result<(), SimError> {
    let words = assemble_source(&read_text(source)?)?;

    let Some(output) = output else {
        for word in &words {
            println!("0x{word:08X}");
        }
        return Ok(());
    };

    let mut mem = Memory::new(words.len());
    let _ = mem.load_words(&words)?;
    let path = legv8_core::sim::loader::save_program_file(&mem, output)?;
    println!("[*] {} words written to {}", words.len(), path.display());
    Ok(())
}

fn cmd_disasm(program: &Path) -> Result<(), SimError> {
    let path = legv8_core::sim::loader::program_path(program);
    let text = read_text(&path)?;
    for (idx, word) in text.lines().filter_map(parse_hex_word).enumerate() {
        println!("{:#06x}: 0x{word:08X}  {}", idx * 4, disassemble(word));
    }
    Ok(())
}

fn cmd_run(
    program: &Path,
    asm: bool,
    max_steps: Option<u64>,
    mem_words: Option<usize>,
    config_path: Option<&Path>,
    trace: bool,
) -> Result<(), SimError> {
    let mut config = match config_path {
        Some(path) => Config::from_json(&read_text(path)?)?,
        None => Config::default(),
    };
    if let Some(words) = mem_words {
        config.memory.size_words = words;
    }
    init_logging(trace || config.general.trace_instructions);

    let mut sim = Simulator::new(config)?;
    let loaded = if asm {
        let words = assemble_source(&read_text(program)?)?;
        sim.load_words(&words)?
    } else {
        sim.load_program_file(program)?
    };
    debug!(words = loaded, asm, "program loaded");
    println!(
        "[*] {loaded} words loaded, memory {} words, start pc {:#x}",
        sim.memory().size_words(),
        sim.cpu().pc()
    );

    let outcome = sim.run(max_steps);
    if let Ok(done) = &outcome {
        info!(steps = done.steps(), pc = sim.cpu().pc(), "run finished");
    }
    print_state(&sim);
    match outcome? {
        RunOutcome::Halted { steps } => println!("[*] HALT after {steps} steps"),
        RunOutcome::StepLimit { steps } => println!("[*] stopped at step limit ({steps} steps)"),
    }
    Ok(())
}

fn print_state(sim: &Simulator) {
    let cpu = sim.cpu();
    println!();
    println!("PC = {:#018x}   {}", cpu.pc(), cpu.flags());
    for line in cpu.regs().dump() {
        println!("{line}");
    }
    println!("----------------------------------------------------------");
    println!("{}", sim.stats());
}
