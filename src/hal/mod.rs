//! Hardware Abstraction Layer for i2c-term.
//!
//! Thin wrappers around the I2C bus and the bus-scan tool.
//! Parsing and session logic stays in the console, HAL is just I/O.

pub mod i2c;
#[cfg(target_os = "linux")]
pub mod linux;
pub mod scan;

pub use i2c::I2cBus;
pub use scan::{BusScanner, I2cDetect};

/// Bus transport error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BusError {
    /// Bus device could not be opened
    #[error("cannot open {path}: {reason}")]
    Open { path: String, reason: String },
    /// Register read failed
    #[error("read of register {register:#04x} on device {device:#04x} failed: {reason}")]
    Read { device: u8, register: u8, reason: String },
    /// Register write failed
    #[error("write of register {register:#04x} on device {device:#04x} failed: {reason}")]
    Write { device: u8, register: u8, reason: String },
    /// Scan tool could not be started
    #[error("bus scan failed: {0}")]
    Scan(String),
    /// No I2C support on this platform
    #[error("I2C bus access is not supported on this platform")]
    Unsupported,
}

/// Single-register transactions against a device on the bus.
pub trait BusTransport {
    /// Read one byte from `register` of `device`.
    fn read_register(&mut self, device: u8, register: u8) -> Result<u8, BusError>;

    /// Write `data` to `register` of `device`.
    fn write_register(&mut self, device: u8, register: u8, data: u8) -> Result<(), BusError>;
}

impl<T: BusTransport + ?Sized> BusTransport for Box<T> {
    fn read_register(&mut self, device: u8, register: u8) -> Result<u8, BusError> {
        (**self).read_register(device, register)
    }

    fn write_register(&mut self, device: u8, register: u8, data: u8) -> Result<(), BusError> {
        (**self).write_register(device, register, data)
    }
}

/// Open the system I2C bus `bus_id`.
#[cfg(target_os = "linux")]
pub fn open(bus_id: u32) -> Result<Box<dyn BusTransport>, BusError> {
    Ok(Box::new(linux::open(bus_id)?))
}

/// Open the system I2C bus `bus_id`.
#[cfg(not(target_os = "linux"))]
pub fn open(_bus_id: u32) -> Result<Box<dyn BusTransport>, BusError> {
    Err(BusError::Unsupported)
}
