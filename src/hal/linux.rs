//! Linux `/dev/i2c-N` bus via linux-embedded-hal.

use linux_embedded_hal::I2cdev;

use super::{BusError, I2cBus};

/// Character device path for bus `bus_id`.
pub fn device_path(bus_id: u32) -> String {
    format!("/dev/i2c-{}", bus_id)
}

/// Open `/dev/i2c-<bus_id>` for register transactions.
pub fn open(bus_id: u32) -> Result<I2cBus<I2cdev>, BusError> {
    let path = device_path(bus_id);
    let dev = I2cdev::new(&path).map_err(|e| BusError::Open {
        path: path.clone(),
        reason: e.to_string(),
    })?;
    log::info!("opened {}", path);
    Ok(I2cBus::new(dev))
}
