//! The slash-command surface of `resz`.
//!
//! Commands follow the DOS convention (`/list`, `/modes`, `/set`, `/?`) and
//! are matched ASCII case-insensitively. Monitor indices are 1-based on the
//! command line and converted to 0-based enumeration slots internally.

use std::io::{self, Write};

use thiserror::Error;

use crate::{
    backend::{Device, DisplayApi},
    catalog::ModeCatalog,
    types::{ChangeRequest, Resolution},
};

/// Usage text printed by `/?` and after usage errors
pub const USAGE: &str = "\
Usage:
  resz                  list monitors and their current settings
  resz /list            same as above
  resz /modes <monitor>
                        list the display modes a monitor supports
  resz /set <monitor> <width> <height> [depth [frequency]]
                        switch a monitor to the given mode
  resz /? | /help       show this help

Monitors are numbered from 1 in the order the system reports them; the
primary monitor is marked with *. Depth is in bits per pixel, frequency
in Hz. /set is skipped if the monitor already uses the requested values.";

/// A parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List devices and their current settings (also the default)
    List,
    /// List the mode table of one monitor
    Modes { monitor: usize },
    /// Switch one monitor to the requested settings
    Set {
        monitor: usize,
        request: ChangeRequest,
    },
    /// Print the usage text
    Help,
}

/// Errors that occur while parsing the command line
#[derive(Error, Debug)]
pub enum UsageError {
    #[error("Unrecognized command: {0}")]
    UnknownCommand(String),
    #[error("{command} expects {expected} ({got} given)")]
    ArgCount {
        command: &'static str,
        expected: &'static str,
        got: usize,
    },
    #[error("Not a number: {0}")]
    NotANumber(String),
    #[error("Monitor indices start at 1")]
    MonitorIndexZero,
}

/// Parses the command line (without the program name) into a [`Command`]
pub fn parse(args: &[String]) -> Result<Command, UsageError> {
    let Some(command) = args.first() else {
        return Ok(Command::List);
    };
    let rest = &args[1..];

    match command.to_ascii_lowercase().as_str() {
        "/?" | "/help" => Ok(Command::Help),
        "/list" => {
            if !rest.is_empty() {
                return Err(UsageError::ArgCount {
                    command: "/list",
                    expected: "no arguments",
                    got: rest.len(),
                });
            }
            Ok(Command::List)
        }
        "/modes" => match rest {
            [monitor] => Ok(Command::Modes {
                monitor: parse_monitor(monitor)?,
            }),
            _ => Err(UsageError::ArgCount {
                command: "/modes",
                expected: "<monitor>",
                got: rest.len(),
            }),
        },
        "/set" => match rest {
            [monitor, width, height] => Ok(Command::Set {
                monitor: parse_monitor(monitor)?,
                request: ChangeRequest::new(parse_resolution(width, height)?),
            }),
            [monitor, width, height, depth] => Ok(Command::Set {
                monitor: parse_monitor(monitor)?,
                request: ChangeRequest::new(parse_resolution(width, height)?)
                    .with_bit_depth(parse_number(depth)?),
            }),
            [monitor, width, height, depth, frequency] => Ok(Command::Set {
                monitor: parse_monitor(monitor)?,
                request: ChangeRequest::new(parse_resolution(width, height)?)
                    .with_bit_depth(parse_number(depth)?)
                    .with_frequency(parse_number(frequency)?),
            }),
            _ => Err(UsageError::ArgCount {
                command: "/set",
                expected: "<monitor> <width> <height> [depth [frequency]]",
                got: rest.len(),
            }),
        },
        _ => Err(UsageError::UnknownCommand(command.clone())),
    }
}

fn parse_number(token: &str) -> Result<u32, UsageError> {
    token
        .parse()
        .map_err(|_| UsageError::NotANumber(token.to_string()))
}

fn parse_resolution(width: &str, height: &str) -> Result<Resolution, UsageError> {
    Ok(Resolution::new(parse_number(width)?, parse_number(height)?))
}

fn parse_monitor(token: &str) -> Result<usize, UsageError> {
    let monitor: usize = token
        .parse()
        .map_err(|_| UsageError::NotANumber(token.to_string()))?;
    if monitor == 0 {
        return Err(UsageError::MonitorIndexZero);
    }
    Ok(monitor)
}

/// Prints the monitor table: index, device, current resolution, depth, rate
pub fn run_list(api: &impl DisplayApi, out: &mut impl Write) -> io::Result<()> {
    let devices = match api.devices() {
        Ok(devices) => devices,
        Err(err) => {
            writeln!(out, "Failed to enumerate display devices: {err}")?;
            return Ok(());
        }
    };

    if devices.is_empty() {
        writeln!(out, "No display devices found.")?;
        return Ok(());
    }

    writeln!(
        out,
        "{:>4}  {:<16} {:>11} {:>8} {:>8}",
        "#", "Device", "Resolution", "Depth", "Refresh"
    )?;

    for (slot, device) in devices.iter().enumerate() {
        let index = format!("{}{}", slot + 1, if device.primary { "*" } else { " " });

        if !device.active {
            writeln!(out, "{index:>4}  {:<16} (inactive)", device.name)?;
            continue;
        }

        match api.current_mode(&device.name) {
            Ok(mode) => writeln!(
                out,
                "{index:>4}  {:<16} {:>11} {:>8} {:>8}",
                device.name,
                mode.resolution.to_string(),
                format!("{} bit", mode.bit_depth),
                format!("{} Hz", mode.frequency),
            )?,
            Err(err) => writeln!(out, "{index:>4}  {:<16} ({err})", device.name)?,
        }
    }

    Ok(())
}

/// Prints the deduplicated, sorted mode table of the given monitor
pub fn run_modes(api: &impl DisplayApi, monitor: usize, out: &mut impl Write) -> io::Result<()> {
    let Some(device) = find_device(api, monitor, out)? else {
        return Ok(());
    };

    let reported = match api.modes(&device.name) {
        Ok(reported) => reported,
        Err(err) => {
            writeln!(out, "Failed to query the modes of {}: {err}", device.name)?;
            return Ok(());
        }
    };

    let mut catalog = ModeCatalog::new();
    for mode in reported {
        catalog.ingest(mode);
    }

    if catalog.is_empty() {
        writeln!(out, "{} reported no display modes.", device.name)?;
        return Ok(());
    }

    writeln!(
        out,
        "{} supports {} distinct modes:",
        device.name,
        catalog.len()
    )?;
    writeln!(out)?;
    writeln!(out, "{:>11} {:>8} {:>8}", "Resolution", "Depth", "Refresh")?;

    for mode in catalog.sorted_modes() {
        writeln!(
            out,
            "{:>11} {:>8} {:>8}",
            mode.resolution.to_string(),
            format!("{} bit", mode.bit_depth),
            format!("{} Hz", mode.frequency),
        )?;
    }

    Ok(())
}

/// Switches the given monitor to the requested settings, unless the current
/// settings already satisfy the request
pub fn run_set(
    api: &impl DisplayApi,
    monitor: usize,
    request: &ChangeRequest,
    out: &mut impl Write,
) -> io::Result<()> {
    let Some(device) = find_device(api, monitor, out)? else {
        return Ok(());
    };

    let current = match api.current_mode(&device.name) {
        Ok(current) => current,
        Err(err) => {
            writeln!(
                out,
                "Failed to query the current settings of {}: {err}",
                device.name
            )?;
            return Ok(());
        }
    };

    log::debug!("{}: current settings are {}", device.name, current);

    if request.is_satisfied_by(&current) {
        writeln!(
            out,
            "Monitor {monitor} is already using the requested settings ({current})."
        )?;
        return Ok(());
    }

    match api.apply(&device.name, request, true, true) {
        Ok(status) => {
            if status.is_success() {
                log::info!("{}: changed to {}", device.name, request);
            }
            writeln!(out, "Monitor {monitor}: {status}")?;
        }
        Err(err) => writeln!(
            out,
            "Failed to change the settings of {}: {err}",
            device.name
        )?,
    }

    Ok(())
}

/// Resolves a 1-based monitor index against the enumeration, reporting
/// enumeration failures and out-of-range indices to `out`
fn find_device(
    api: &impl DisplayApi,
    monitor: usize,
    out: &mut impl Write,
) -> io::Result<Option<Device>> {
    let devices = match api.devices() {
        Ok(devices) => devices,
        Err(err) => {
            writeln!(out, "Failed to enumerate display devices: {err}")?;
            return Ok(None);
        }
    };

    let slot = monitor.checked_sub(1);
    match slot.and_then(|slot| devices.into_iter().nth(slot)) {
        Some(device) => Ok(Some(device)),
        None => {
            writeln!(out, "Monitor {monitor} not found.")?;
            Ok(None)
        }
    }
}
