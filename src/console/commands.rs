//! Command registry and execution

use core::fmt::Write;

use super::parser::{classify, diagnose, Command};
use super::ConsoleError;
use crate::hal::{BusScanner, BusTransport};
use crate::numeral::{parse_byte, render, DisplayMode};
use crate::session::Session;

/// Command descriptor
pub struct CommandDescriptor {
    pub name: &'static str,
    pub usage: &'static str,
    pub brief: &'static str,
}

/// All available commands
pub static COMMANDS: &[CommandDescriptor] = &[
    CommandDescriptor { name: "to", usage: "to <addr>", brief: "Set device address" },
    CommandDescriptor { name: "r", usage: "r <reg>", brief: "Read a register" },
    CommandDescriptor { name: "w", usage: "w <reg> <data>", brief: "Write a register" },
    CommandDescriptor { name: "out", usage: "out <h|b|d|t|o>", brief: "Set output format" },
    CommandDescriptor { name: "scan", usage: "scan", brief: "Scan the bus" },
    CommandDescriptor { name: "help", usage: "help", brief: "Show this help" },
    CommandDescriptor { name: "exit", usage: "exit", brief: "Leave the terminal" },
];

/// Get all command names for completion
pub fn command_names() -> impl Iterator<Item = &'static str> + Clone {
    COMMANDS.iter().map(|c| c.name)
}

/// What the input loop does after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Session plus the bus it talks to
pub struct Terminal<B, S> {
    session: Session,
    bus: B,
    scanner: S,
}

impl<B: BusTransport, S: BusScanner> Terminal<B, S> {
    pub fn new(session: Session, bus: B, scanner: S) -> Self {
        Self { session, bus, scanner }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn scanner(&self) -> &S {
        &self.scanner
    }

    /// Classify and execute one line
    pub fn run_line(&mut self, line: &str, out: &mut dyn Write) -> Result<Flow, ConsoleError> {
        let cmd = classify(line)?;
        self.execute(&cmd, out)
    }

    /// Execute a classified command
    ///
    /// Session state only changes when the command succeeds.
    pub fn execute(&mut self, cmd: &Command<'_>, out: &mut dyn Write) -> Result<Flow, ConsoleError> {
        match *cmd {
            Command::Exit => return Ok(Flow::Exit),
            Command::Help => print_help(out),
            Command::Blank => {}
            Command::SetDisplayMode { mode_token } => self.set_display_mode(mode_token, out)?,
            Command::SetTargetAddress { address_token } => {
                self.session.set_target_address(address_token);
                let _ = writeln!(out, "device set to {}", address_token);
            }
            Command::ReadRegister { register_token } => self.read(register_token, out)?,
            Command::WriteRegister { register_token, data_token } => {
                self.write(register_token, data_token)?
            }
            Command::ScanBus => self.scanner.scan(self.session.bus_id(), out)?,
            Command::Unrecognized { raw_text } => return Err(diagnose(raw_text)),
        }
        Ok(Flow::Continue)
    }

    fn set_display_mode(&mut self, token: &str, out: &mut dyn Write) -> Result<(), ConsoleError> {
        let mode = DisplayMode::from_tag(token).ok_or_else(|| ConsoleError::InvalidDisplayMode {
            token: token.to_string(),
        })?;
        self.session.set_display_mode(mode);
        let _ = writeln!(out, "out: {}", mode.name());
        Ok(())
    }

    fn read(&mut self, register_token: &str, out: &mut dyn Write) -> Result<(), ConsoleError> {
        let device = self.session.device()?;
        let register = parse_byte(register_token)?;

        let value = self.bus.read_register(device, register).inspect_err(|e| {
            log::warn!("{}", e);
        })?;
        log::debug!("read dev={:#04x} reg={:#04x} -> {:#04x}", device, register, value);

        let _ = writeln!(out, "{}", render(value, self.session.display_mode()));
        Ok(())
    }

    fn write(&mut self, register_token: &str, data_token: &str) -> Result<(), ConsoleError> {
        let device = self.session.device()?;
        let register = parse_byte(register_token)?;
        let data = parse_byte(data_token)?;

        self.bus.write_register(device, register, data).inspect_err(|e| {
            log::warn!("{}", e);
        })?;
        log::debug!("write dev={:#04x} reg={:#04x} <- {:#04x}", device, register, data);
        Ok(())
    }
}

fn print_help(out: &mut dyn Write) {
    let _ = writeln!(out, "Set the device address first, then read or write its registers.");
    let _ = writeln!(out);
    for c in COMMANDS {
        let _ = writeln!(out, "  {:<18} {}", c.usage, c.brief);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Numbers: 0x.. hex, 0b.. binary, 0o.. octal, plain digits decimal.");
    let _ = write!(out, "Output forms:");
    for mode in DisplayMode::ALL {
        let _ = write!(out, " {}={}", mode.tag(), mode.name());
    }
    let _ = writeln!(out);
}
