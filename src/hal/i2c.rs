//! Register access over any embedded-hal I2C bus
//!
//! Read is SMBus "read byte data": write the register, repeated start,
//! read one byte. Write is SMBus "write byte data": `[register, data]`.

use embedded_hal::i2c::{Error as _, I2c};

use super::{BusError, BusTransport};

/// Register transport backed by an `embedded_hal::i2c::I2c` implementation.
pub struct I2cBus<I> {
    i2c: I,
}

impl<I: I2c> I2cBus<I> {
    pub fn new(i2c: I) -> Self {
        Self { i2c }
    }

    /// Give back the underlying bus
    pub fn release(self) -> I {
        self.i2c
    }
}

impl<I: I2c> BusTransport for I2cBus<I> {
    fn read_register(&mut self, device: u8, register: u8) -> Result<u8, BusError> {
        let mut buf = [0u8; 1];
        self.i2c
            .write_read(device, &[register], &mut buf)
            .map_err(|e| BusError::Read {
                device,
                register,
                reason: format!("{:?}", e.kind()),
            })?;
        Ok(buf[0])
    }

    fn write_register(&mut self, device: u8, register: u8, data: u8) -> Result<(), BusError> {
        self.i2c
            .write(device, &[register, data])
            .map_err(|e| BusError::Write {
                device,
                register,
                reason: format!("{:?}", e.kind()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::{ErrorKind, ErrorType, NoAcknowledgeSource, Operation};

    /// One device at `addr` with 256 byte-wide registers and a register pointer.
    struct FakeI2c {
        addr: u8,
        regs: [u8; 256],
        pointer: u8,
    }

    impl FakeI2c {
        fn new(addr: u8) -> Self {
            Self { addr, regs: [0u8; 256], pointer: 0 }
        }
    }

    impl ErrorType for FakeI2c {
        type Error = ErrorKind;
    }

    impl I2c for FakeI2c {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if address != self.addr {
                return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
            }
            for op in operations {
                match op {
                    Operation::Write(bytes) => {
                        if let Some((&reg, rest)) = bytes.split_first() {
                            self.pointer = reg;
                            for (i, b) in rest.iter().enumerate() {
                                self.regs[reg.wrapping_add(i as u8) as usize] = *b;
                            }
                        }
                    }
                    Operation::Read(buf) => {
                        for b in buf.iter_mut() {
                            *b = self.regs[self.pointer as usize];
                            self.pointer = self.pointer.wrapping_add(1);
                        }
                    }
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_write_then_read_register() {
        let mut bus = I2cBus::new(FakeI2c::new(0x4e));

        bus.write_register(0x4e, 0x12, 0x9b).unwrap();
        assert_eq!(bus.read_register(0x4e, 0x12), Ok(0x9b));
        assert_eq!(bus.release().regs[0x12], 0x9b);
    }

    #[test]
    fn test_read_sets_register_pointer() {
        let mut fake = FakeI2c::new(0x18);
        fake.regs[0xfd] = 0x83;
        let mut bus = I2cBus::new(fake);

        assert_eq!(bus.read_register(0x18, 0xfd), Ok(0x83));
    }

    #[test]
    fn test_absent_device_maps_to_bus_error() {
        let mut bus = I2cBus::new(FakeI2c::new(0x4e));

        match bus.read_register(0x20, 0x00) {
            Err(BusError::Read { device, register, .. }) => {
                assert_eq!(device, 0x20);
                assert_eq!(register, 0x00);
            }
            other => panic!("expected read error, got {:?}", other),
        }
        assert!(matches!(
            bus.write_register(0x20, 0x01, 0xff),
            Err(BusError::Write { device: 0x20, register: 0x01, .. })
        ));
    }
}
