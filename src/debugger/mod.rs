mod command;
mod engine;
pub mod inspect;
mod session;
mod stepping;

pub use command::{
    Command, CommandKind, WindowDefaults, DEFAULT_LIST_COUNT, DEFAULT_STACK_COUNT,
};
pub use engine::Engine;
pub use session::{DebugSession, SessionConfig, Termination, HELP};
pub use stepping::{step_once, StepOutcome};
