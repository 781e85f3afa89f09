pub mod cli;
pub mod debugger;
pub mod executor;
pub mod program;
pub mod vm;
