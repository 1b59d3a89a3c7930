//! Test doubles for the bus and the scan tool

#![allow(dead_code)]

use core::fmt::Write;
use std::collections::HashMap;

use i2c_term::console::{Console, Terminal};
use i2c_term::hal::{BusError, BusScanner, BusTransport};
use i2c_term::session::Session;

/// Register map keyed by (device, register); absent devices NACK.
#[derive(Default)]
pub struct FakeBus {
    pub devices: Vec<u8>,
    pub regs: HashMap<(u8, u8), u8>,
    pub reads: Vec<(u8, u8)>,
    pub writes: Vec<(u8, u8, u8)>,
}

impl FakeBus {
    pub fn with_device(device: u8) -> Self {
        Self { devices: vec![device], ..Self::default() }
    }

    pub fn set(mut self, device: u8, register: u8, value: u8) -> Self {
        self.regs.insert((device, register), value);
        self
    }
}

impl BusTransport for FakeBus {
    fn read_register(&mut self, device: u8, register: u8) -> Result<u8, BusError> {
        self.reads.push((device, register));
        if !self.devices.contains(&device) {
            return Err(BusError::Read { device, register, reason: "NoAcknowledge".into() });
        }
        Ok(self.regs.get(&(device, register)).copied().unwrap_or(0))
    }

    fn write_register(&mut self, device: u8, register: u8, data: u8) -> Result<(), BusError> {
        self.writes.push((device, register, data));
        if !self.devices.contains(&device) {
            return Err(BusError::Write { device, register, reason: "NoAcknowledge".into() });
        }
        self.regs.insert((device, register), data);
        Ok(())
    }
}

/// Records scans and prints a fixed report
#[derive(Default)]
pub struct FakeScanner {
    pub scanned: Vec<u32>,
}

impl BusScanner for FakeScanner {
    fn scan(&mut self, bus_id: u32, out: &mut dyn Write) -> Result<(), BusError> {
        self.scanned.push(bus_id);
        let _ = writeln!(out, "40: -- -- -- -- -- -- -- -- -- -- -- -- -- -- 4e --");
        Ok(())
    }
}

pub fn terminal(bus: FakeBus) -> Terminal<FakeBus, FakeScanner> {
    Terminal::new(Session::new(1), bus, FakeScanner::default())
}

pub fn console(bus: FakeBus) -> Console<FakeBus, FakeScanner> {
    Console::new(terminal(bus))
}

/// Feed every byte of `input`, collecting output and results
pub fn type_bytes(
    console: &mut Console<FakeBus, FakeScanner>,
    input: &str,
    out: &mut String,
) -> Vec<Result<i2c_term::Flow, i2c_term::ConsoleError>> {
    input
        .bytes()
        .filter_map(|b| console.process_byte(b, out))
        .collect()
}
