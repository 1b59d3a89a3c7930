//! Bus enumeration through the external `i2cdetect` tool.

use core::fmt::Write;
use std::process::Command;

use super::BusError;

/// Default scan tool (from i2c-tools)
pub const DEFAULT_SCAN_PROGRAM: &str = "i2cdetect";

/// Lists the devices present on a bus.
pub trait BusScanner {
    /// Scan bus `bus_id` and write the report to `out`.
    fn scan(&mut self, bus_id: u32, out: &mut dyn Write) -> Result<(), BusError>;
}

/// Runs `<program> -y <bus_id>` and passes its output through.
///
/// The exit status is not interpreted; whatever the tool prints,
/// including its own errors, is the report.
#[derive(Debug, Clone)]
pub struct I2cDetect {
    program: String,
}

impl I2cDetect {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for I2cDetect {
    fn default() -> Self {
        Self::new(DEFAULT_SCAN_PROGRAM)
    }
}

impl BusScanner for I2cDetect {
    fn scan(&mut self, bus_id: u32, out: &mut dyn Write) -> Result<(), BusError> {
        log::debug!("running {} -y {}", self.program, bus_id);

        let output = Command::new(&self.program)
            .arg("-y")
            .arg(bus_id.to_string())
            .output()
            .map_err(|e| BusError::Scan(format!("{}: {}", self.program, e)))?;

        if !output.status.success() {
            log::debug!("{} exited with {}", self.program, output.status);
        }

        let _ = out.write_str(&String::from_utf8_lossy(&output.stdout));
        let _ = out.write_str(&String::from_utf8_lossy(&output.stderr));
        Ok(())
    }
}
