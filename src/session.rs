//! Session state: the device in focus and how reads are shown.

use crate::console::ConsoleError;
use crate::numeral::{parse_byte, DisplayMode};

/// Per-process terminal state, changed only by `to` and `out`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    bus_id: u32,
    target_address: Option<String>,
    display_mode: DisplayMode,
}

impl Session {
    /// Fresh session on `bus_id` with no device and hex output.
    pub fn new(bus_id: u32) -> Self {
        Self {
            bus_id,
            target_address: None,
            display_mode: DisplayMode::default(),
        }
    }

    pub fn with_target_address(mut self, address: impl Into<String>) -> Self {
        self.target_address = Some(address.into());
        self
    }

    pub fn with_display_mode(mut self, mode: DisplayMode) -> Self {
        self.display_mode = mode;
        self
    }

    pub fn bus_id(&self) -> u32 {
        self.bus_id
    }

    /// Device address as the operator typed it.
    pub fn target_address(&self) -> Option<&str> {
        self.target_address.as_deref()
    }

    /// Store the address text as-is; it is validated when first used.
    pub fn set_target_address(&mut self, address: &str) {
        self.target_address = Some(address.to_string());
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        self.display_mode = mode;
    }

    /// Resolve the stored address to a bus byte.
    pub fn device(&self) -> Result<u8, ConsoleError> {
        let text = self.target_address.as_deref().ok_or(ConsoleError::NoDevice)?;
        parse_byte(text)
    }
}
