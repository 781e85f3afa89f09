use super::ProgramError;
use crate::vm::Instruction;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

/// A compiled program: instructions plus the entry point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub entry: usize,
    pub instructions: Vec<Instruction>,
}

impl Program {
    pub fn new(instructions: Vec<Instruction>, entry: usize) -> Result<Self, ProgramError> {
        let program = Self {
            entry,
            instructions,
        };
        program.validate()?;
        Ok(program)
    }

    fn validate(&self) -> Result<(), ProgramError> {
        // An empty program may only start at 0.
        if self.entry > 0 && self.entry >= self.instructions.len() {
            return Err(ProgramError::EntryOutOfRange {
                entry: self.entry,
                len: self.instructions.len(),
            });
        }
        Ok(())
    }

    pub fn read_from<R: Read>(reader: R) -> Result<Self, ProgramError> {
        let program: Program = serde_json::from_reader(reader)?;
        program.validate()?;
        log::info!(
            "Loaded program: {} instructions, entry {}",
            program.instructions.len(),
            program.entry
        );
        Ok(program)
    }

    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<(), ProgramError> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}
