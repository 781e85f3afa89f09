use crate::debugger::{DebugSession, Termination};
use crate::program::{self, Program, ProgramError};
use crate::vm::{Machine, VmError};
use std::io::{self, BufRead, Read, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExecError {
    #[error(transparent)]
    Program(#[from] ProgramError),
    #[error("{fault}\n{dump}")]
    Fault { fault: VmError, dump: String },
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Load a program into a fresh machine at its entry point.
pub fn load(program: Program, stack_size: usize) -> Machine {
    Machine::new(program.instructions, program.entry, stack_size)
}

/// Drive the machine until it halts, writing program output as it appears.
pub fn run_machine<W: Write>(machine: &mut Machine, out: &mut W) -> Result<(), ExecError> {
    loop {
        let result = machine.step();
        for value in machine.take_output() {
            writeln!(out, "{}", value)?;
        }
        match result {
            Ok(()) => {}
            Err(e) if e.is_halt() => break,
            Err(fault) => {
                log::warn!("Run aborted: {}", fault);
                return Err(ExecError::Fault {
                    fault,
                    dump: machine.to_string(),
                });
            }
        }
    }
    out.flush()?;
    Ok(())
}

/// Execute a program file to completion.
pub fn run<R: Read, W: Write>(input: R, stack_size: usize, out: &mut W) -> Result<(), ExecError> {
    let program = Program::read_from(input)?;
    let mut machine = load(program, stack_size);
    run_machine(&mut machine, out)
}

/// Assemble text and execute it from instruction 0.
pub fn interpret<W: Write>(text: &str, stack_size: usize, out: &mut W) -> Result<(), ExecError> {
    let instructions = program::assemble(text)?;
    let mut machine = Machine::new(instructions, 0, stack_size);
    run_machine(&mut machine, out)
}

/// Turn assembler text into a program file.
pub fn assemble<W: Write>(text: &str, out: W) -> Result<(), ExecError> {
    let instructions = program::assemble(text)?;
    log::info!("Assembled {} instructions", instructions.len());
    Program::new(instructions, 0)?.write_to(out)?;
    Ok(())
}

/// Print a program file back as assembler text.
pub fn decompile<R: Read, W: Write>(input: R, mut out: W) -> Result<(), ExecError> {
    let program = Program::read_from(input)?;
    out.write_all(program::decompile(&program.instructions).as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Load a program file and hand it to an interactive debug session.
pub fn debug<P: Read, R: BufRead, W: Write>(
    program: P,
    stack_size: usize,
    input: R,
    output: W,
) -> Result<Termination, ExecError> {
    let program = Program::read_from(program)?;
    let machine = load(program, stack_size);
    let mut session = DebugSession::new(machine, input, output);
    Ok(session.run()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vm::DEFAULT_STACK_SIZE;

    #[test]
    fn test_interpret_writes_output() {
        let mut out = Vec::new();
        interpret("LIT 2\nLIT 3\nMUL\nWRT\n", DEFAULT_STACK_SIZE, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "6\n");
    }

    #[test]
    fn test_interpret_fault_carries_dump() {
        let mut out = Vec::new();
        let err = interpret("LIT 1\nLIT 0\nDIV\n", DEFAULT_STACK_SIZE, &mut out).unwrap_err();
        match err {
            ExecError::Fault { fault, dump } => {
                assert_eq!(fault, VmError::DivisionByZero { ip: 2 });
                assert!(dump.starts_with("IP=2 SP=2"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_assemble_then_decompile() {
        let mut file = Vec::new();
        assemble("lit 7\nwrt\n", &mut file).unwrap();
        let mut text = Vec::new();
        decompile(file.as_slice(), &mut text).unwrap();
        assert_eq!(String::from_utf8(text).unwrap(), "LIT 7\nWRT\n");
    }
}
