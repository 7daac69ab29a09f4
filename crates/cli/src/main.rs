//! MIPS32 I-type interpreter CLI.
//!
//! This binary provides two entry points:
//! 1. **Run:** Load a raw little-endian image at the RAM base and step it.
//! 2. **Disasm:** Print the assembly text of every word in an image.

use std::path::PathBuf;
use std::{fs, process};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mipsim_core::config::Config;
use mipsim_core::core::Cpu;
use mipsim_core::isa::abi::AbiNames;
use mipsim_core::isa::disasm::disassemble;

#[derive(Parser, Debug)]
#[command(
    name = "mipsim",
    author,
    version,
    about = "MIPS32 I-type interpreter",
    long_about = "Run or disassemble a raw little-endian MIPS32 image.\n\nExamples:\n  mipsim run prog.bin --steps 1000 --trace\n  mipsim run prog.bin --config cfg.json\n  mipsim disasm prog.bin --base 0x1000"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load an image at the RAM base and execute it.
    Run {
        /// Raw binary image.
        image: PathBuf,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Maximum number of instructions to execute.
        #[arg(short, long, default_value_t = 1_000_000)]
        steps: u64,

        /// Trace every retired instruction (overrides the config).
        #[arg(long)]
        trace: bool,
    },

    /// Disassemble an image word by word.
    Disasm {
        /// Raw binary image.
        image: PathBuf,

        /// Address of the first word.
        #[arg(long, default_value = "0", value_parser = parse_addr)]
        base: u32,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            image,
            config,
            steps,
            trace,
        } => cmd_run(&image, config.as_deref(), steps, trace),
        Commands::Disasm { image, base } => cmd_disasm(&image, base),
    }
}

/// Installs the `tracing` subscriber, honoring `RUST_LOG`.
fn init_tracing(trace: bool) {
    let default = if trace { "mipsim_core=trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Parses a decimal or `0x`-prefixed hexadecimal address.
fn parse_addr(s: &str) -> Result<u32, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(&hex.replace('_', ""), 16),
        None => s.replace('_', "").parse(),
    };
    parsed.map_err(|e| format!("invalid address '{s}': {e}"))
}

/// Reads a file or exits with a diagnostic.
fn read_image(path: &std::path::Path) -> Vec<u8> {
    fs::read(path).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: could not read '{}': {e}", path.display());
        process::exit(1);
    })
}

/// Loads the image, steps until the budget or a trap, then dumps state.
///
/// Exits with code 1 if execution stopped on a trap.
fn cmd_run(image: &std::path::Path, config: Option<&std::path::Path>, steps: u64, trace: bool) {
    let mut config = match config {
        Some(path) => Config::from_file(path).unwrap_or_else(|e| {
            eprintln!("[!] FATAL: {e}");
            process::exit(1);
        }),
        None => Config::default(),
    };
    config.general.trace_instructions |= trace;
    init_tracing(config.general.trace_instructions);

    let bytes = read_image(image);
    let mut cpu = Cpu::new(&config);
    if let Err(trap) = cpu.load_program(config.memory.ram_base, &bytes) {
        eprintln!("[!] FATAL: image does not fit in RAM: {trap}");
        process::exit(1);
    }

    println!(
        "[*] Loaded {} bytes at {:#010x}, start PC {:#010x}",
        bytes.len(),
        config.memory.ram_base,
        cpu.pc
    );

    let outcome = cpu.run(steps);

    println!();
    println!("PC = {:#010x}  retired = {}", cpu.pc, cpu.retired);
    print!("{}", cpu.regs.dump());

    if let Err(trap) = outcome {
        eprintln!("[!] Stopped on trap: {trap}");
        process::exit(1);
    }
}

/// Prints the listing for an image.
fn cmd_disasm(image: &std::path::Path, base: u32) {
    let bytes = read_image(image);
    if bytes.len() % 4 != 0 {
        eprintln!(
            "[!] WARNING: {} trailing byte(s) do not form a full word",
            bytes.len() % 4
        );
    }
    for line in disasm_listing(&bytes, base) {
        println!("{line}");
    }
}

/// Renders `addr: word  text` for every complete word, then a `.byte` line
/// for any trailing partial word.
fn disasm_listing(bytes: &[u8], base: u32) -> Vec<String> {
    let chunks = bytes.chunks_exact(4);
    let tail = chunks.remainder();
    let mut lines: Vec<String> = chunks
        .enumerate()
        .map(|(i, chunk)| {
            let word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
            let addr = base.wrapping_add((i as u32).wrapping_mul(4));
            let text =
                disassemble(word, &AbiNames).unwrap_or_else(|| format!(".word {word:#010x}"));
            format!("{addr:#010x}: {word:08x}  {text}")
        })
        .collect();

    if !tail.is_empty() {
        let addr = base.wrapping_add((bytes.len() - tail.len()) as u32);
        let hex: Vec<String> = tail.iter().map(|b| format!("{b:#04x}")).collect();
        lines.push(format!("{addr:#010x}: .byte {}", hex.join(", ")));
    }
    lines
}
