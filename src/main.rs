use anyhow::{bail, Context, Result};
use clap::Parser;
use plc0_debugger::cli::{Cli, Mode};
use plc0_debugger::debugger::Termination;
use plc0_debugger::executor;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    log::debug!("Args: {:?}", cli);

    let input = open_input(&cli)?;

    match cli.mode() {
        Mode::Debug => {
            if cli.reads_stdin() {
                bail!("debug mode needs a program file (--input); stdin is the command line");
            }
            let termination =
                executor::debug(input, cli.stack_size, io::stdin().lock(), io::stdout().lock())?;
            if let Termination::EngineFault(_) = termination {
                // The fault and the dump are already on screen.
                std::process::exit(0);
            }
        }
        Mode::Run => executor::run(input, cli.stack_size, &mut io::stdout().lock())?,
        Mode::Interprete => {
            let text = read_text(input)?;
            executor::interpret(&text, cli.stack_size, &mut io::stdout().lock())?;
        }
        Mode::Assemble => {
            let text = read_text(input)?;
            let path = cli.output.as_ref().context("--assemble needs --output")?;
            let out = File::create(path)
                .with_context(|| format!("Could not create {}", path.display()))?;
            executor::assemble(&text, BufWriter::new(out))?;
        }
        Mode::Decompile => match &cli.output {
            Some(path) => {
                let out = File::create(path)
                    .with_context(|| format!("Could not create {}", path.display()))?;
                executor::decompile(input, BufWriter::new(out))?;
            }
            None => executor::decompile(input, io::stdout().lock())?,
        },
    }

    Ok(())
}

fn open_input(cli: &Cli) -> Result<Box<dyn Read>> {
    if cli.reads_stdin() {
        return Ok(Box::new(io::stdin()));
    }
    let file = File::open(&cli.input)
        .with_context(|| format!("Could not open {}", cli.input.display()))?;
    Ok(Box::new(BufReader::new(file)))
}

fn read_text(mut input: Box<dyn Read>) -> Result<String> {
    let mut text = String::new();
    input
        .read_to_string(&mut text)
        .context("Could not read input")?;
    Ok(text)
}
