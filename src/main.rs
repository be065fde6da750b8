//! The CLI interface for resz
//!
//! Run with `/?` to see the available commands.
use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use color_eyre::eyre::Result;
use resz::{NativeDisplay, cli};

/// Entry point for `resz`.
fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().skip(1).collect();

    let command = match cli::parse(&args) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("{err}");
            eprintln!();
            eprintln!("{}", cli::USAGE);
            return Ok(ExitCode::FAILURE);
        }
    };

    log::debug!("Parsed command: {:?}", command);

    let api = NativeDisplay::new();
    let mut stdout = io::stdout().lock();

    match command {
        cli::Command::Help => writeln!(stdout, "{}", cli::USAGE)?,
        cli::Command::List => cli::run_list(&api, &mut stdout)?,
        cli::Command::Modes { monitor } => cli::run_modes(&api, monitor, &mut stdout)?,
        cli::Command::Set { monitor, request } => {
            cli::run_set(&api, monitor, &request, &mut stdout)?
        }
    }

    Ok(ExitCode::SUCCESS)
}
