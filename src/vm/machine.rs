use super::{Instruction, VmError};
use std::fmt;

pub const DEFAULT_STACK_SIZE: usize = 1024;

/// The miniplc0 stack machine.
#[derive(Debug, Clone)]
pub struct Machine {
    instructions: Vec<Instruction>,
    stack: Vec<i32>,
    capacity: usize,
    ip: usize,
    output: Vec<i32>,
}

impl Machine {
    pub fn new(instructions: Vec<Instruction>, entry: usize, capacity: usize) -> Self {
        Self {
            instructions,
            stack: Vec::with_capacity(capacity.min(DEFAULT_STACK_SIZE)),
            capacity,
            ip: entry,
            output: Vec::new(),
        }
    }

    pub fn with_default_stack(instructions: Vec<Instruction>, entry: usize) -> Self {
        Self::new(instructions, entry, DEFAULT_STACK_SIZE)
    }

    pub fn ip(&self) -> usize {
        self.ip
    }

    pub fn sp(&self) -> usize {
        self.stack.len()
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn stack(&self) -> &[i32] {
        &self.stack
    }

    /// The instruction at IP, or `ILL` once IP has left the program.
    pub fn next_instruction(&self) -> Instruction {
        self.instructions
            .get(self.ip)
            .copied()
            .unwrap_or(Instruction::Ill)
    }

    pub fn stack_top(&self) -> Option<i32> {
        self.stack.last().copied()
    }

    /// Drain the values written by `WRT` since the last call.
    pub fn take_output(&mut self) -> Vec<i32> {
        std::mem::take(&mut self.output)
    }

    /// Execute exactly one instruction.
    ///
    /// On error IP stays on the offending instruction, so stepping again
    /// reports the same error.
    pub fn step(&mut self) -> Result<(), VmError> {
        let ip = self.ip;
        let inst = match self.instructions.get(ip) {
            Some(inst) => *inst,
            None => return Err(VmError::IllegalInstruction { ip }),
        };

        // Every check runs before the stack is touched, so a fault leaves
        // the machine as it was.
        let mut next = ip + 1;

        match inst {
            Instruction::Ill => return Err(VmError::IllegalInstruction { ip }),
            Instruction::Lit(x) => {
                self.check_room()?;
                self.stack.push(x);
            }
            Instruction::Lod(addr) => {
                let idx = Self::address(ip, addr, self.stack.len())?;
                self.check_room()?;
                let value = self.stack[idx];
                self.stack.push(value);
            }
            Instruction::Sto(addr) => {
                let value = self.peek(0)?;
                let idx = Self::address(ip, addr, self.stack.len() - 1)?;
                self.stack.pop();
                self.stack[idx] = value;
            }
            Instruction::Add | Instruction::Sub | Instruction::Mul | Instruction::Div => {
                let rhs = self.peek(0)?;
                let lhs = self.peek(1)?;
                let result = match inst {
                    Instruction::Add => lhs.checked_add(rhs),
                    Instruction::Sub => lhs.checked_sub(rhs),
                    Instruction::Mul => lhs.checked_mul(rhs),
                    _ => {
                        if rhs == 0 {
                            return Err(VmError::DivisionByZero { ip });
                        }
                        lhs.checked_div(rhs)
                    }
                };
                let value = result.ok_or(VmError::ArithmeticOverflow { ip })?;
                self.stack.pop();
                if let Some(top) = self.stack.last_mut() {
                    *top = value;
                }
            }
            Instruction::Wrt => {
                let value = self.peek(0)?;
                self.stack.pop();
                self.output.push(value);
            }
            Instruction::Jmp(target) => next = Self::target(ip, target)?,
            Instruction::Je(target)
            | Instruction::Jne(target)
            | Instruction::Jl(target)
            | Instruction::Jge(target)
            | Instruction::Jg(target)
            | Instruction::Jle(target) => {
                let value = self.peek(0)?;
                let taken = match inst {
                    Instruction::Je(_) => value == 0,
                    Instruction::Jne(_) => value != 0,
                    Instruction::Jl(_) => value < 0,
                    Instruction::Jge(_) => value >= 0,
                    Instruction::Jg(_) => value > 0,
                    _ => value <= 0,
                };
                if taken {
                    next = Self::target(ip, target)?;
                }
                self.stack.pop();
            }
        }

        self.ip = next;
        Ok(())
    }

    /// Step until the program halts. Faults are returned as errors.
    pub fn run(&mut self) -> Result<(), VmError> {
        loop {
            match self.step() {
                Ok(()) => {}
                Err(e) if e.is_halt() => return Ok(()),
                Err(e) => return Err(e),
            }
        }
    }

    fn check_room(&self) -> Result<(), VmError> {
        if self.stack.len() >= self.capacity {
            return Err(VmError::StackOverflow {
                ip: self.ip,
                capacity: self.capacity,
            });
        }
        Ok(())
    }

    /// The value `depth` slots below the top, without popping it.
    fn peek(&self, depth: usize) -> Result<i32, VmError> {
        self.stack
            .len()
            .checked_sub(depth + 1)
            .map(|idx| self.stack[idx])
            .ok_or(VmError::StackUnderflow { ip: self.ip })
    }

    fn address(ip: usize, addr: i32, len: usize) -> Result<usize, VmError> {
        usize::try_from(addr)
            .ok()
            .filter(|idx| *idx < len)
            .ok_or(VmError::InvalidAddress { ip, addr })
    }

    fn target(ip: usize, target: i32) -> Result<usize, VmError> {
        usize::try_from(target).map_err(|_| VmError::InvalidAddress { ip, addr: target })
    }
}

impl fmt::Display for Machine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "IP={} SP={} capacity={}", self.ip, self.sp(), self.capacity)?;
        writeln!(f, "Instructions ({}):", self.instructions.len())?;
        for (i, inst) in self.instructions.iter().enumerate() {
            let marker = if i == self.ip { "->" } else { "  " };
            writeln!(f, "{} {:>4}: {}", marker, i, inst)?;
        }
        write!(f, "Stack ({}):", self.stack.len())?;
        for (i, value) in self.stack.iter().enumerate().rev() {
            write!(f, "\n   {:>4}: {}", i, value)?;
        }
        Ok(())
    }
}
