mod assembler;
mod file;

pub use assembler::{assemble, decompile, is_comment, parse_instruction};
pub use file::Program;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProgramError {
    #[error("line {line}: bad instruction `{text}`")]
    Syntax { line: usize, text: String },
    #[error("entry point {entry} is outside a program of {len} instructions")]
    EntryOutOfRange { entry: usize, len: usize },
    #[error("malformed program file: {0}")]
    Format(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
