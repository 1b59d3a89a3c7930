//! # i2c-term
//!
//! Interactive register terminal for I2C peripherals.
//!
//! ## Architecture
//!
//! Every input line flows through the same path:
//! - [`console::Console`] edits bytes into a line
//! - [`console::classify`] turns the line into a [`console::Command`]
//! - [`console::Terminal`] resolves numerals and issues one bus transaction
//! - [`numeral::render`] formats a read result in the session's display mode
//!
//! The bus and the scan tool sit behind [`hal::BusTransport`] and
//! [`hal::BusScanner`], so the interpreter runs without hardware.

pub mod config;
pub mod console;
pub mod hal;
pub mod logging;
pub mod numeral;
pub mod session;
pub mod tty;

pub use console::{Console, ConsoleError, Flow, Terminal};
pub use hal::{BusError, BusScanner, BusTransport};
pub use numeral::{parse_byte, parse_numeral, render, DisplayMode, Radix};
pub use session::Session;
