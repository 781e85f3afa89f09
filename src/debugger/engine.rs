use crate::vm::{Instruction, Machine, VmError};
use std::fmt::Display;

/// What the debugger needs from an execution engine.
///
/// The `Display` impl is the full state dump printed on a fatal fault.
pub trait Engine: Display {
    /// Advance exactly one instruction.
    fn step(&mut self) -> Result<(), VmError>;

    fn pc(&self) -> usize;

    fn sp(&self) -> usize;

    fn instructions(&self) -> &[Instruction];

    /// Live stack values, bottom first.
    fn stack(&self) -> &[i32];

    fn next_instruction(&self) -> Instruction;

    fn stack_top(&self) -> Option<i32>;

    /// Program output produced since the last call.
    fn take_output(&mut self) -> Vec<i32>;
}

impl Engine for Machine {
    fn step(&mut self) -> Result<(), VmError> {
        Machine::step(self)
    }

    fn pc(&self) -> usize {
        self.ip()
    }

    fn sp(&self) -> usize {
        Machine::sp(self)
    }

    fn instructions(&self) -> &[Instruction] {
        Machine::instructions(self)
    }

    fn stack(&self) -> &[i32] {
        Machine::stack(self)
    }

    fn next_instruction(&self) -> Instruction {
        Machine::next_instruction(self)
    }

    fn stack_top(&self) -> Option<i32> {
        Machine::stack_top(self)
    }

    fn take_output(&mut self) -> Vec<i32> {
        Machine::take_output(self)
    }
}
