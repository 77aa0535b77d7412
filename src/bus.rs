//! Bus transports
//!
//! The driver only ever needs two primitives: read `n` consecutive registers
//! starting at an address, and write `n` consecutive registers starting at an
//! address. Both rely on the device auto-incrementing the register address
//! (`CTRL3_C.IF_INC`, set at power-up).

use hal::i2c::{I2c, Operation as I2cOperation};
use hal::spi::{Operation as SpiOperation, SpiDevice};

/// Register-level access to the device
pub trait RegisterBus {
    /// Error reported by the underlying transport
    type Error;

    /// Reads `buffer.len()` consecutive registers starting at `reg`
    fn read_registers(&mut self, reg: u8, buffer: &mut [u8]) -> Result<(), Self::Error>;

    /// Writes `data.len()` consecutive registers starting at `reg`
    fn write_registers(&mut self, reg: u8, data: &[u8]) -> Result<(), Self::Error>;
}

/// 7-bit I2C address, selected by the SDO/SA0 pin
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum I2cAddress {
    /// SDO/SA0 tied to ground
    I2cAddL = 0x6A,
    /// SDO/SA0 tied to supply
    I2cAddH = 0x6B,
}

impl Default for I2cAddress {
    fn default() -> Self {
        I2cAddress::I2cAddH
    }
}

impl I2cAddress {
    /// 7-bit address on the bus
    pub fn addr(self) -> u8 {
        self as u8
    }
}

/// I2C transport
#[derive(Debug)]
pub struct I2cBus<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cBus<I2C>
where
    I2C: I2c,
{
    /// Wraps an I2C peripheral talking to the device at `address`
    pub fn new(i2c: I2C, address: I2cAddress) -> Self {
        I2cBus {
            i2c,
            address: address.addr(),
        }
    }

    /// Destroys the transport and returns the I2C peripheral
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> RegisterBus for I2cBus<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn read_registers(&mut self, reg: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        self.i2c.write_read(self.address, &[reg], buffer)
    }

    fn write_registers(&mut self, reg: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.i2c.transaction(
            self.address,
            &mut [I2cOperation::Write(&[reg]), I2cOperation::Write(data)],
        )
    }
}

/// SPI transport
#[derive(Debug)]
pub struct SpiBus<SPI> {
    spi: SPI,
}

impl<SPI> SpiBus<SPI>
where
    SPI: SpiDevice,
{
    // MSB of the address byte selects the direction
    const READ: u8 = 0x80;

    /// Wraps an SPI device (chip select handled by the device)
    pub fn new(spi: SPI) -> Self {
        SpiBus { spi }
    }

    /// Destroys the transport and returns the SPI device
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI> RegisterBus for SpiBus<SPI>
where
    SPI: SpiDevice,
{
    type Error = SPI::Error;

    fn read_registers(&mut self, reg: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        self.spi.transaction(&mut [
            SpiOperation::Write(&[reg | Self::READ]),
            SpiOperation::Read(buffer),
        ])
    }

    fn write_registers(&mut self, reg: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.spi.transaction(&mut [
            SpiOperation::Write(&[reg & !Self::READ]),
            SpiOperation::Write(data),
        ])
    }
}
