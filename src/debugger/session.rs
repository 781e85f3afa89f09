use super::command::{Command, CommandKind, WindowDefaults};
use super::inspect;
use super::stepping::{step_once, StepOutcome};
use super::Engine;
use crate::vm::VmError;
use std::io::{self, BufRead, Write};

pub const HELP: &str = "\
Simple miniplc0 debugger.
You can use the abbreviation of a command.
[H]elp -- Show this message.
[N]ext -- Run a single instruction.
[L]ist n -- List n instructions.
[S]tack n -- Show n stack elements.
[I]nformation -- Show current information.
[Q]uit -- Quit the debugger.
";

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub prompt: String,
    /// Print the help text once before the first prompt.
    pub banner: bool,
    /// Sizes for `list` and `stack` given without a count.
    pub windows: WindowDefaults,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            prompt: ">".to_string(),
            banner: true,
            windows: WindowDefaults::default(),
        }
    }
}

/// Why a session stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Termination {
    Quit,
    EndOfInput,
    /// The engine hit a fault the debugger has no policy for. The caller is
    /// expected to end the process.
    EngineFault(VmError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum SessionState {
    Running,
    Terminated(Termination),
}

/// The read-parse-dispatch loop over one engine.
pub struct DebugSession<E, R, W> {
    engine: E,
    input: R,
    output: W,
    config: SessionConfig,
    state: SessionState,
}

impl<E: Engine, R: BufRead, W: Write> DebugSession<E, R, W> {
    pub fn new(engine: E, input: R, output: W) -> Self {
        Self::with_config(engine, input, output, SessionConfig::default())
    }

    pub fn with_config(engine: E, input: R, output: W, config: SessionConfig) -> Self {
        Self {
            engine,
            input,
            output,
            config,
            state: SessionState::Running,
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    pub fn termination(&self) -> Option<&Termination> {
        match &self.state {
            SessionState::Running => None,
            SessionState::Terminated(t) => Some(t),
        }
    }

    /// Run until a terminating command, end of input or an engine fault.
    pub fn run(&mut self) -> io::Result<Termination> {
        log::info!(
            "Debug session started: {} instructions, entry {}",
            self.engine.instructions().len(),
            self.engine.pc()
        );

        if self.config.banner {
            self.output.write_all(HELP.as_bytes())?;
        }

        let termination = loop {
            if let Some(t) = self.termination() {
                break t.clone();
            }

            write!(self.output, "{}", self.config.prompt)?;
            self.output.flush()?;

            let mut buf = Vec::new();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                self.state = SessionState::Terminated(Termination::EndOfInput);
                continue;
            }
            match String::from_utf8(buf) {
                Ok(line) => self.dispatch(&line)?,
                Err(e) => {
                    log::debug!("Rejected non UTF-8 input: {:?}", e.as_bytes());
                    self.reject()?;
                }
            }
        };

        self.output.flush()?;
        log::info!("Debug session ended: {:?}", termination);
        Ok(termination)
    }

    /// Handle one line of operator input.
    pub fn dispatch(&mut self, line: &str) -> io::Result<()> {
        match Command::parse_with(line, self.config.windows) {
            Some(cmd) => self.execute(cmd),
            None => {
                log::debug!("Rejected input {:?}", line.trim_end());
                self.reject()
            }
        }
    }

    fn reject(&mut self) -> io::Result<()> {
        writeln!(self.output, "Wrong format.")?;
        writeln!(self.output, "Type 'help' to see more.")
    }

    /// Carry out one parsed command.
    pub fn execute(&mut self, cmd: Command) -> io::Result<()> {
        log::debug!("Dispatching {:?}", cmd);

        match cmd.kind {
            CommandKind::Help => self.output.write_all(HELP.as_bytes())?,
            CommandKind::Quit | CommandKind::Restart => {
                self.state = SessionState::Terminated(Termination::Quit);
            }
            CommandKind::Next => self.next()?,
            CommandKind::Information => {
                let text = inspect::information(&self.engine);
                self.output.write_all(text.as_bytes())?;
            }
            CommandKind::List => {
                let text = inspect::instruction_window(&self.engine, cmd.count);
                self.output.write_all(text.as_bytes())?;
            }
            CommandKind::Stack => {
                let text = inspect::stack_window(&self.engine, cmd.count);
                self.output.write_all(text.as_bytes())?;
            }
        }
        Ok(())
    }

    fn next(&mut self) -> io::Result<()> {
        let outcome = step_once(&mut self.engine);
        log::debug!("Step outcome: {:?}", outcome);

        for value in self.engine.take_output() {
            writeln!(self.output, "{}", value)?;
        }

        match outcome {
            StepOutcome::Advanced => {
                writeln!(
                    self.output,
                    "Next instruction: {}",
                    self.engine.next_instruction()
                )?;
            }
            StepOutcome::Halted => {
                writeln!(self.output, "The program has stopped.")?;
            }
            StepOutcome::Fatal(err) => {
                log::warn!("Engine fault: {}", err);
                writeln!(self.output, "{}", err)?;
                writeln!(self.output, "{}", self.engine)?;
                self.state = SessionState::Terminated(Termination::EngineFault(err));
            }
        }
        Ok(())
    }
}
