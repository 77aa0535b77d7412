//! Unit tests for I2C and SPI framing

use crate::common::test_utils::MockDelay;
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
use embedded_hal_mock::eh1::spi::{Mock as SpiMock, Transaction as SpiTransaction};
use iis3dwb::{FullScale, I2cAddress, Iis3dwb, ID};

#[test]
fn test_i2c_read_is_write_read() {
    let expectations = [I2cTransaction::write_read(0x6B, vec![0x0F], vec![ID])];
    let i2c = I2cMock::new(&expectations);

    let mut driver = Iis3dwb::new_i2c(i2c, I2cAddress::I2cAddH, MockDelay);
    assert_eq!(driver.device_id_get().unwrap(), ID);

    let (bus, _) = driver.release();
    bus.unwrap().release().done();
}

#[test]
fn test_i2c_write_is_address_then_data() {
    let expectations = [
        I2cTransaction::transaction_start(0x6A),
        I2cTransaction::write(0x6A, vec![0x73]),
        I2cTransaction::write(0x6A, vec![0xFF]),
        I2cTransaction::transaction_end(0x6A),
    ];
    let i2c = I2cMock::new(&expectations);

    let mut driver = Iis3dwb::new_i2c(i2c, I2cAddress::I2cAddL, MockDelay);
    driver.xl_usr_offset_x_set(-1).unwrap();

    let (bus, _) = driver.release();
    bus.unwrap().release().done();
}

#[test]
fn test_i2c_read_modify_write() {
    let expectations = [
        I2cTransaction::write_read(0x6B, vec![0x10], vec![0xA0]),
        I2cTransaction::transaction_start(0x6B),
        I2cTransaction::write(0x6B, vec![0x10]),
        I2cTransaction::write(0x6B, vec![0xA8]),
        I2cTransaction::transaction_end(0x6B),
    ];
    let i2c = I2cMock::new(&expectations);

    let mut driver = Iis3dwb::new_i2c(i2c, I2cAddress::I2cAddH, MockDelay);
    driver.xl_full_scale_set(FullScale::_4G).unwrap();

    let (bus, _) = driver.release();
    bus.unwrap().release().done();
}

#[test]
fn test_spi_read_sets_the_read_bit() {
    let expectations = [
        SpiTransaction::transaction_start(),
        SpiTransaction::write(0xA8),
        SpiTransaction::read_vec(vec![0x01, 0x00, 0x02, 0x00, 0x03, 0x00]),
        SpiTransaction::transaction_end(),
    ];
    let spi = SpiMock::new(&expectations);

    let mut driver = Iis3dwb::new_spi(spi, MockDelay);
    assert_eq!(driver.acceleration_raw_get().unwrap(), [1, 2, 3]);

    let (bus, _) = driver.release();
    bus.unwrap().release().done();
}

#[test]
fn test_spi_write_clears_the_read_bit() {
    let expectations = [
        SpiTransaction::transaction_start(),
        SpiTransaction::write(0x42),
        SpiTransaction::write(0xAA),
        SpiTransaction::transaction_end(),
    ];
    let spi = SpiMock::new(&expectations);

    let mut driver = Iis3dwb::new_spi(spi, MockDelay);
    driver.timestamp_rst().unwrap();

    let (bus, _) = driver.release();
    bus.unwrap().release().done();
}

#[test]
fn test_spi_fifo_burst() {
    let mut bytes = vec![0x10, 0x01, 0x00, 0x02, 0x00, 0x03, 0x00];
    bytes.extend_from_slice(&[0x18, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00]);
    let expectations = [
        SpiTransaction::transaction_start(),
        SpiTransaction::write(0xF8),
        SpiTransaction::read_vec(bytes),
        SpiTransaction::transaction_end(),
    ];
    let spi = SpiMock::new(&expectations);

    let mut driver = Iis3dwb::new_spi(spi, MockDelay);
    let mut buffer = [0; 14];
    assert_eq!(driver.fifo_out_multi_raw_get(&mut buffer).unwrap().count(), 2);

    let (bus, _) = driver.release();
    bus.unwrap().release().done();
}
