//! i2cterm - interactive I2C register terminal
//!
//! Opens the bus once, then reads commands until `exit` or end of input.
//! Failing to open the bus is the only fatal error.

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::Parser;

use i2c_term::config::{Cli, TerminalConfig};
use i2c_term::console::{Console, Terminal};
use i2c_term::hal::{self, I2cDetect};
use i2c_term::{logging, tty};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = TerminalConfig::from_cli(cli).context("invalid startup arguments")?;
    logging::init(config.verbose);
    log::debug!("{:?}", config);

    let bus = hal::open(config.bus_id)
        .with_context(|| format!("failed to open I2C bus {}", config.bus_id))?;
    let scanner = I2cDetect::new(config.scan_program.as_str());
    log::debug!("bus scan runs {}", scanner.program());

    let terminal = Terminal::new(config.session(), bus, scanner);
    let mut console = Console::new(terminal);

    if io::stdin().is_terminal() {
        tty::run_interactive(&mut console).context("terminal I/O failed")?;
    } else {
        tty::run_lines(&mut console, io::stdin().lock(), io::stdout())
            .context("terminal I/O failed")?;
    }

    Ok(())
}
