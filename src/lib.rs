//! A platform agnostic driver to interface with the IIS3DWB (wideband
//! vibration accelerometer)
//!
//! This driver was built using [`embedded-hal`] traits. The device is reached
//! either over I2C ([`I2cBus`]) or over a 4-wire SPI device ([`SpiBus`]); any
//! other transport can be plugged in through [`RegisterBus`].
//!
//! Every setter is a read-modify-write of the owning register: reserved bits
//! and sibling fields are preserved. Getters map unknown encodings to the
//! documented default variant of the enumeration instead of failing.
//!
//! ```ignore
//! let mut iis3dwb = Iis3dwb::new_spi(spi, delay);
//! assert_eq!(iis3dwb.device_id_get()?, iis3dwb::ID);
//!
//! iis3dwb.reset_and_wait(10)?;
//! iis3dwb.configure(
//!     Config::new()
//!         .block_data_update(true)
//!         .full_scale(FullScale::_4G)
//!         .data_rate(DataRate::_26k7_Hz),
//! )?;
//!
//! if iis3dwb.xl_flag_data_ready_get()? {
//!     let [x, y, z] = iis3dwb.acceleration_raw_get()?;
//!     let x_mg = FullScale::_4G.to_mg(x);
//! }
//! ```
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal

#![deny(missing_docs)]
#![no_std]

extern crate cast;
extern crate embedded_hal as hal;

mod bus;
mod conf;
mod data;
pub mod fifo;
mod interrupt;
mod register;
mod units;

use core::fmt;

use hal::delay::DelayNs;
use hal::i2c::I2c;
use hal::spi::SpiDevice;

pub use bus::{I2cAddress, I2cBus, RegisterBus, SpiBus};
pub use conf::{
    AxisSelection, Config, DataRate, DataReadyMode, FifoMode, FilterPath, FullScale,
    HpPathInternal, I2cInterface, IntNotification, OffsetWeight, PinMode, PinPolarity, Rounding,
    SdoPullUp, SelfTest, SpiMode, TempBatch, TimestampBatch, WakeThsWeight, XlBatch,
};
pub use data::{AllIntSrc, AllSources, StatusReg, WakeUpSrc};
pub use fifo::{FifoRecord, FifoRecords, FifoSample, FifoStatus, FifoTag};
pub use interrupt::{PinInt1Route, PinInt2Route};
pub use register::{BitOrder, Field, Register, ID, TIMESTAMP_RESET};
pub use units::{
    from_fs16g_to_mg, from_fs2g_to_mg, from_fs4g_to_mg, from_fs8g_to_mg, from_lsb_to_celsius,
    from_lsb_to_nsec,
};

use conf::RegisterField;

/// IIS3DWB errors
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The transport reported a failure
    Bus(E),
    /// No bus is attached to the driver
    InvalidContext,
}

impl<E> fmt::Display for Error<E>
where
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Bus(e) => write!(f, "bus error: {:?}", e),
            Error::InvalidContext => f.write_str("no bus attached"),
        }
    }
}

/// IIS3DWB driver
pub struct Iis3dwb<B, T> {
    bus: Option<B>,
    tim: T,
}

impl<I2C, T> Iis3dwb<I2cBus<I2C>, T>
where
    I2C: I2c,
    T: DelayNs,
{
    /// Creates a new driver from a I2C peripheral
    pub fn new_i2c(i2c: I2C, address: I2cAddress, tim: T) -> Self {
        Iis3dwb::from_bus(I2cBus::new(i2c, address), tim)
    }
}

impl<SPI, T> Iis3dwb<SpiBus<SPI>, T>
where
    SPI: SpiDevice,
    T: DelayNs,
{
    /// Creates a new driver from a SPI device
    pub fn new_spi(spi: SPI, tim: T) -> Self {
        Iis3dwb::from_bus(SpiBus::new(spi), tim)
    }
}

impl<B, T> Iis3dwb<B, T>
where
    B: RegisterBus,
{
    /// Creates a new driver from any register transport
    pub fn from_bus(bus: B, tim: T) -> Self {
        Iis3dwb {
            bus: Some(bus),
            tim,
        }
    }

    /// Takes the bus out of the driver.
    ///
    /// Until a bus is attached again every operation fails with
    /// [`Error::InvalidContext`].
    pub fn detach(&mut self) -> Option<B> {
        self.bus.take()
    }

    /// Attaches a bus, returning the previous one if any
    pub fn attach(&mut self, bus: B) -> Option<B> {
        self.bus.replace(bus)
    }

    /// Checks if a bus is attached
    pub fn is_attached(&self) -> bool {
        self.bus.is_some()
    }

    /// Destroys the driver and returns the bus (if attached) and the delay
    pub fn release(self) -> (Option<B>, T) {
        (self.bus, self.tim)
    }

    /// Reads `buffer.len()` consecutive registers starting at `reg`
    pub fn read_reg(&mut self, reg: Register, buffer: &mut [u8]) -> Result<(), Error<B::Error>> {
        self.read_registers(reg, buffer)
    }

    /// Writes `data` to consecutive registers starting at `reg`
    pub fn write_reg(&mut self, reg: Register, data: &[u8]) -> Result<(), Error<B::Error>> {
        self.write_registers(reg, data)
    }

    /// Applies every setting present in `config`.
    ///
    /// Settings are written in a fixed order, output data rate last; the first
    /// failure aborts the sequence.
    pub fn configure(&mut self, config: &Config) -> Result<(), Error<B::Error>> {
        if let Some(enable) = config.block_data_update {
            self.block_data_update_set(enable)?;
        }
        if let Some(full_scale) = config.full_scale {
            self.xl_full_scale_set(full_scale)?;
        }
        if let Some(axis_selection) = config.axis_selection {
            self.xl_axis_selection_set(axis_selection)?;
        }
        if let Some(filter_path) = config.filter_path {
            self.xl_filt_path_on_out_set(filter_path)?;
        }
        if let Some(enable) = config.timestamp {
            self.timestamp_set(enable)?;
        }
        if let Some(watermark) = config.fifo_watermark {
            self.fifo_watermark_set(watermark)?;
        }
        if let Some(batch) = config.fifo_xl_batch {
            self.fifo_xl_batch_set(batch)?;
        }
        if let Some(batch) = config.fifo_temp_batch {
            self.fifo_temp_batch_set(batch)?;
        }
        if let Some(batch) = config.fifo_timestamp_batch {
            self.fifo_timestamp_batch_set(batch)?;
        }
        if let Some(mode) = config.fifo_mode {
            self.fifo_mode_set(mode)?;
        }
        if let Some(data_rate) = config.data_rate {
            self.xl_data_rate_set(data_rate)?;
        }

        Ok(())
    }

    /// Device identification (`WHO_AM_I`), [`ID`] for a genuine IIS3DWB
    pub fn device_id_get(&mut self) -> Result<u8, Error<B::Error>> {
        self.read_register(Register::WHO_AM_I)
    }

    /// Sets accelerometer full scale
    pub fn xl_full_scale_set(&mut self, full_scale: FullScale) -> Result<(), Error<B::Error>> {
        self.write_register_with_mask(full_scale)
    }

    /// Accelerometer full scale
    pub fn xl_full_scale_get(&mut self) -> Result<FullScale, Error<B::Error>> {
        self.read_register_field()
    }

    /// Sets accelerometer output data rate
    pub fn xl_data_rate_set(&mut self, odr: DataRate) -> Result<(), Error<B::Error>> {
        self.write_register_with_mask(odr)
    }

    /// Accelerometer output data rate
    pub fn xl_data_rate_get(&mut self) -> Result<DataRate, Error<B::Error>> {
        self.read_register_field()
    }

    /// Block data update: output registers are not updated until both
    /// bytes of a sample have been read
    pub fn block_data_update_set(&mut self, enable: bool) -> Result<(), Error<B::Error>> {
        self.write_flag(Register::CTRL3_C, register::BDU, enable)
    }

    /// Block data update
    pub fn block_data_update_get(&mut self) -> Result<bool, Error<B::Error>> {
        self.read_flag(Register::CTRL3_C, register::BDU)
    }

    /// Software reset. Restores the default values of the user registers.
    pub fn reset_set(&mut self, enable: bool) -> Result<(), Error<B::Error>> {
        self.write_flag(Register::CTRL3_C, register::SW_RESET, enable)
    }

    /// Software reset in progress
    pub fn reset_get(&mut self) -> Result<bool, Error<B::Error>> {
        self.read_flag(Register::CTRL3_C, register::SW_RESET)
    }

    /// Register address automatically incremented during multiple byte
    /// access
    pub fn auto_increment_set(&mut self, enable: bool) -> Result<(), Error<B::Error>> {
        self.write_flag(Register::CTRL3_C, register::IF_INC, enable)
    }

    /// Register address auto-increment
    pub fn auto_increment_get(&mut self) -> Result<bool, Error<B::Error>> {
        self.read_flag(Register::CTRL3_C, register::IF_INC)
    }

    /// Reboots memory content (trimming parameters)
    pub fn boot_set(&mut self, enable: bool) -> Result<(), Error<B::Error>> {
        self.write_flag(Register::CTRL3_C, register::BOOT, enable)
    }

    /// Reboot in progress
    pub fn boot_get(&mut self) -> Result<bool, Error<B::Error>> {
        self.read_flag(Register::CTRL3_C, register::BOOT)
    }

    fn bus(&mut self) -> Result<&mut B, Error<B::Error>> {
        self.bus.as_mut().ok_or(Error::InvalidContext)
    }

    pub(crate) fn read_registers(
        &mut self,
        reg: Register,
        buffer: &mut [u8],
    ) -> Result<(), Error<B::Error>> {
        let bus = self.bus()?;

        #[cfg(feature = "defmt")]
        defmt::trace!("read {=u8:#x} len {=usize}", reg.addr(), buffer.len());

        bus.read_registers(reg.addr(), buffer).map_err(Error::Bus)
    }

    pub(crate) fn read_register(&mut self, reg: Register) -> Result<u8, Error<B::Error>> {
        let mut buffer = [0];
        self.read_registers(reg, &mut buffer)?;
        Ok(buffer[0])
    }

    pub(crate) fn write_registers(
        &mut self,
        reg: Register,
        data: &[u8],
    ) -> Result<(), Error<B::Error>> {
        let bus = self.bus()?;

        #[cfg(feature = "defmt")]
        defmt::trace!("write {=u8:#x} {=[u8]:#x}", reg.addr(), data);

        bus.write_registers(reg.addr(), data).map_err(Error::Bus)
    }

    pub(crate) fn write_register(&mut self, reg: Register, byte: u8) -> Result<(), Error<B::Error>> {
        self.write_registers(reg, &[byte])
    }

    pub(crate) fn modify_register<F>(&mut self, reg: Register, f: F) -> Result<(), Error<B::Error>>
    where
        F: FnOnce(u8) -> u8,
    {
        let r = self.read_register(reg)?;
        self.write_register(reg, f(r))
    }

    pub(crate) fn write_field(
        &mut self,
        reg: Register,
        field: Field,
        value: u8,
    ) -> Result<(), Error<B::Error>> {
        self.modify_register(reg, |r| field.set(r, value))
    }

    pub(crate) fn read_field(&mut self, reg: Register, field: Field) -> Result<u8, Error<B::Error>> {
        self.read_register(reg).map(|r| field.get(r))
    }

    pub(crate) fn write_flag(
        &mut self,
        reg: Register,
        field: Field,
        enable: bool,
    ) -> Result<(), Error<B::Error>> {
        self.write_field(reg, field, enable as u8)
    }

    pub(crate) fn read_flag(&mut self, reg: Register, field: Field) -> Result<bool, Error<B::Error>> {
        self.read_register(reg).map(|r| field.is_set(r))
    }

    fn write_register_with_mask<RF>(&mut self, v: RF) -> Result<(), Error<B::Error>>
    where
        RF: RegisterField,
    {
        self.write_field(RF::REGISTER, RF::FIELD, v.value())
    }

    fn read_register_field<RF>(&mut self) -> Result<RF, Error<B::Error>>
    where
        RF: RegisterField,
    {
        self.read_field(RF::REGISTER, RF::FIELD)
            .map(RF::from_value)
    }
}

impl<B, T> Iis3dwb<B, T>
where
    B: RegisterBus,
    T: DelayNs,
{
    /// Software reset, then polls every millisecond until the device
    /// reports completion.
    ///
    /// Returns `false` if the reset flag is still set after `max_polls`
    /// polls.
    pub fn reset_and_wait(&mut self, max_polls: u32) -> Result<bool, Error<B::Error>> {
        self.reset_set(true)?;

        for _ in 0..max_polls {
            self.tim.delay_ms(1);
            if !self.reset_get()? {
                return Ok(true);
            }
        }

        Ok(false)
    }
}
