mod runner;

pub use runner::{assemble, debug, decompile, interpret, load, run, run_machine, ExecError};
