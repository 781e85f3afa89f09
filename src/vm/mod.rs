mod error;
mod instruction;
mod machine;

pub use error::VmError;
pub use instruction::Instruction;
pub use machine::{Machine, DEFAULT_STACK_SIZE};
