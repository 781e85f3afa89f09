use crate::vm::DEFAULT_STACK_SIZE;
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// A vm implementation for mini plc0.
#[derive(Debug, Parser)]
#[command(name = "plc0-debugger", version)]
#[command(group(
    ArgGroup::new("mode")
        .required(true)
        .args(["debug", "run", "interprete", "assemble", "decompile"])
))]
pub struct Cli {
    /// The input file. `-` reads stdin.
    #[arg(short, long, default_value = "-")]
    pub input: PathBuf,

    /// The output file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Debug the program file.
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Run the program file.
    #[arg(short = 'R', long)]
    pub run: bool,

    /// Interpret an assembler text file directly.
    #[arg(short = 'I', long)]
    pub interprete: bool,

    /// Assemble a text file into a program file.
    #[arg(short = 'A', long, requires = "output")]
    pub assemble: bool,

    /// Decompile a program file without running it.
    #[arg(short = 'D', long)]
    pub decompile: bool,

    /// Stack capacity of the machine, in values.
    #[arg(long, default_value_t = DEFAULT_STACK_SIZE)]
    pub stack_size: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Debug,
    Run,
    Interprete,
    Assemble,
    Decompile,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.debug {
            Mode::Debug
        } else if self.decompile {
            Mode::Decompile
        } else if self.run {
            Mode::Run
        } else if self.assemble {
            Mode::Assemble
        } else {
            Mode::Interprete
        }
    }

    pub fn reads_stdin(&self) -> bool {
        self.input.as_os_str() == "-"
    }
}
