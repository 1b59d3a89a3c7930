//! Module: config
//!
//! Purpose: Startup configuration for the terminal.
//!
//! Architecture:
//! - `Cli`: command-line arguments (clap derive), with env fallbacks
//! - `TerminalConfig`: validated settings the front end builds from
//!
//! Only startup values live here; at runtime the session is changed
//! solely by `to` and `out`.

use clap::Parser;

use crate::console::ConsoleError;
use crate::hal::scan::DEFAULT_SCAN_PROGRAM;
use crate::numeral::{parse_byte, DisplayMode};
use crate::session::Session;

/// Default I2C bus (`/dev/i2c-1`)
pub const DEFAULT_BUS: u32 = 1;

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(name = "i2cterm", version, about = "Interactive I2C register terminal", long_about = None)]
pub struct Cli {
    /// I2C bus number, opened as /dev/i2c-<BUS>.
    #[arg(short, long, env = "I2CTERM_BUS", default_value_t = DEFAULT_BUS)]
    pub bus: u32,

    /// Device address to start with (0x.., 0b.., 0o.. or decimal).
    #[arg(short, long)]
    pub device: Option<String>,

    /// Output form for reads: h, b, d, t or o.
    #[arg(short, long, default_value = "h", value_parser = parse_display_mode)]
    pub out: DisplayMode,

    /// Program run by the `scan` command.
    #[arg(long, env = "I2CTERM_SCAN_PROGRAM", default_value = DEFAULT_SCAN_PROGRAM)]
    pub scan_program: String,

    /// Enable debug logging.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

fn parse_display_mode(tag: &str) -> Result<DisplayMode, String> {
    DisplayMode::from_tag(tag).ok_or_else(|| format!("'{}' is not one of h, b, d, t, o", tag))
}

/// Validated startup settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalConfig {
    pub bus_id: u32,
    pub device: Option<String>,
    pub display_mode: DisplayMode,
    pub scan_program: String,
    pub verbose: bool,
}

impl TerminalConfig {
    /// Check the arguments that the parser cannot.
    ///
    /// A `--device` given on the command line must already be a valid
    /// address, unlike one set later with `to`.
    pub fn from_cli(cli: Cli) -> Result<Self, ConsoleError> {
        if let Some(device) = &cli.device {
            parse_byte(device)?;
        }

        Ok(Self {
            bus_id: cli.bus,
            device: cli.device,
            display_mode: cli.out,
            scan_program: cli.scan_program,
            verbose: cli.verbose,
        })
    }

    /// Initial session for these settings
    pub fn session(&self) -> Session {
        let session = Session::new(self.bus_id).with_display_mode(self.display_mode);
        match &self.device {
            Some(device) => session.with_target_address(device.as_str()),
            None => session,
        }
    }
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            bus_id: DEFAULT_BUS,
            device: None,
            display_mode: DisplayMode::default(),
            scan_program: DEFAULT_SCAN_PROGRAM.to_string(),
            verbose: false,
        }
    }
}
