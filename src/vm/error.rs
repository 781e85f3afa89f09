use thiserror::Error;

/// Faults reported by the machine while stepping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VmError {
    #[error("illegal instruction at IP={ip}")]
    IllegalInstruction { ip: usize },
    #[error("stack overflow at IP={ip} (capacity {capacity})")]
    StackOverflow { ip: usize, capacity: usize },
    #[error("stack underflow at IP={ip}")]
    StackUnderflow { ip: usize },
    #[error("invalid address {addr} at IP={ip}")]
    InvalidAddress { ip: usize, addr: i32 },
    #[error("division by zero at IP={ip}")]
    DivisionByZero { ip: usize },
    #[error("arithmetic overflow at IP={ip}")]
    ArithmeticOverflow { ip: usize },
}

impl VmError {
    /// The program ran into ILL or off its end. Everything else is a fault.
    pub fn is_halt(&self) -> bool {
        matches!(self, VmError::IllegalInstruction { .. })
    }
}
