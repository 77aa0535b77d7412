//! Unit tests for single-register field accessors

use crate::common::{create_mock_driver, Operation};
use iis3dwb::*;

#[test]
fn test_full_scale_round_trip() {
    let (mut driver, _bus) = create_mock_driver();

    for fs in [FullScale::_2G, FullScale::_4G, FullScale::_8G, FullScale::_16G] {
        driver.xl_full_scale_set(fs).unwrap();
        assert_eq!(driver.xl_full_scale_get().unwrap(), fs);
    }
}

#[test]
fn test_full_scale_encoding() {
    let (mut driver, bus) = create_mock_driver();

    driver.xl_full_scale_set(FullScale::_16G).unwrap();
    assert_eq!(bus.register(0x10), 0b0000_0100);

    driver.xl_full_scale_set(FullScale::_8G).unwrap();
    assert_eq!(bus.register(0x10), 0b0000_1100);
}

#[test]
fn test_set_is_one_read_and_one_write() {
    let (mut driver, bus) = create_mock_driver();
    bus.set_register(0x10, 0xA0);

    driver.xl_full_scale_set(FullScale::_4G).unwrap();

    assert_eq!(
        bus.operations(),
        vec![
            Operation::Read {
                address: 0x10,
                len: 1
            },
            Operation::Write {
                address: 0x10,
                data: vec![0xA8]
            },
        ]
    );
}

#[test]
fn test_sibling_fields_are_preserved() {
    let (mut driver, bus) = create_mock_driver();

    // CTRL1_XL: xl_en (7-5), fs_xl (3-2), lpf2_xl_en (1), reserved (4, 0)
    bus.set_register(0x10, 0xFF);
    driver.xl_full_scale_set(FullScale::_2G).unwrap();
    assert_eq!(bus.register(0x10), 0xF3);

    driver.xl_data_rate_set(DataRate::Off).unwrap();
    assert_eq!(bus.register(0x10), 0x13);

    driver.xl_data_rate_set(DataRate::_26k7_Hz).unwrap();
    assert_eq!(bus.register(0x10), 0xB3);
    assert_eq!(driver.xl_full_scale_get().unwrap(), FullScale::_2G);
}

#[test]
fn test_flag_isolation_in_ctrl3_c() {
    let (mut driver, bus) = create_mock_driver();
    bus.set_register(0x12, 0x00);

    driver.block_data_update_set(true).unwrap();
    driver.auto_increment_set(true).unwrap();
    driver.spi_mode_set(SpiMode::ThreeWire).unwrap();
    driver.pin_mode_set(PinMode::OpenDrain).unwrap();
    driver.pin_polarity_set(PinPolarity::ActiveLow).unwrap();
    assert_eq!(bus.register(0x12), 0b0111_1100);

    driver.spi_mode_set(SpiMode::FourWire).unwrap();
    assert_eq!(bus.register(0x12), 0b0111_0100);
    assert!(driver.block_data_update_get().unwrap());
    assert!(driver.auto_increment_get().unwrap());
    assert_eq!(driver.pin_mode_get().unwrap(), PinMode::OpenDrain);
    assert_eq!(driver.pin_polarity_get().unwrap(), PinPolarity::ActiveLow);
}

#[test]
fn test_enum_round_trips() {
    let (mut driver, _bus) = create_mock_driver();

    for mode in [
        FifoMode::Bypass,
        FifoMode::Fifo,
        FifoMode::StreamToFifo,
        FifoMode::BypassToStream,
        FifoMode::Stream,
        FifoMode::BypassToFifo,
    ] {
        driver.fifo_mode_set(mode).unwrap();
        assert_eq!(driver.fifo_mode_get().unwrap(), mode);
    }

    for st in [SelfTest::Disable, SelfTest::Positive, SelfTest::Negative] {
        driver.xl_self_test_set(st).unwrap();
        assert_eq!(driver.xl_self_test_get().unwrap(), st);
    }

    for ts in [
        TimestampBatch::NoDecimation,
        TimestampBatch::Dec1,
        TimestampBatch::Dec8,
        TimestampBatch::Dec32,
    ] {
        driver.fifo_timestamp_batch_set(ts).unwrap();
        assert_eq!(driver.fifo_timestamp_batch_get().unwrap(), ts);
    }

    driver.fifo_xl_batch_set(XlBatch::BatchedAt26k7_Hz).unwrap();
    assert_eq!(driver.fifo_xl_batch_get().unwrap(), XlBatch::BatchedAt26k7_Hz);

    driver.fifo_temp_batch_set(TempBatch::BatchedAt104_Hz).unwrap();
    assert_eq!(driver.fifo_temp_batch_get().unwrap(), TempBatch::BatchedAt104_Hz);

    driver.rounding_mode_set(Rounding::Round).unwrap();
    assert_eq!(driver.rounding_mode_get().unwrap(), Rounding::Round);

    driver.xl_offset_weight_set(OffsetWeight::_16_mg).unwrap();
    assert_eq!(driver.xl_offset_weight_get().unwrap(), OffsetWeight::_16_mg);

    driver.data_ready_mode_set(DataReadyMode::Pulsed).unwrap();
    assert_eq!(driver.data_ready_mode_get().unwrap(), DataReadyMode::Pulsed);

    driver.xl_hp_path_internal_set(HpPathInternal::UseHpf).unwrap();
    assert_eq!(driver.xl_hp_path_internal_get().unwrap(), HpPathInternal::UseHpf);

    driver.sdo_sa0_mode_set(SdoPullUp::Connected).unwrap();
    assert_eq!(driver.sdo_sa0_mode_get().unwrap(), SdoPullUp::Connected);

    driver.i2c_interface_set(I2cInterface::Disable).unwrap();
    assert_eq!(driver.i2c_interface_get().unwrap(), I2cInterface::Disable);

    driver.int_notification_set(IntNotification::Latched).unwrap();
    assert_eq!(driver.int_notification_get().unwrap(), IntNotification::Latched);

    driver.wkup_ths_weight_set(WakeThsWeight::FsDiv256).unwrap();
    assert_eq!(driver.wkup_ths_weight_get().unwrap(), WakeThsWeight::FsDiv256);
}

#[test]
fn test_fifo_ctrl4_fields_are_independent() {
    let (mut driver, bus) = create_mock_driver();
    bus.set_register(0x0A, 0x08);

    driver.fifo_mode_set(FifoMode::Stream).unwrap();
    driver.fifo_temp_batch_set(TempBatch::BatchedAt104_Hz).unwrap();
    driver.fifo_timestamp_batch_set(TimestampBatch::Dec8).unwrap();
    assert_eq!(bus.register(0x0A), 0b1011_1110);

    driver.fifo_temp_batch_set(TempBatch::NotBatched).unwrap();
    assert_eq!(driver.fifo_mode_get().unwrap(), FifoMode::Stream);
    assert_eq!(driver.fifo_timestamp_batch_get().unwrap(), TimestampBatch::Dec8);
    assert_eq!(bus.register(0x0A), 0b1000_1110);
}

#[test]
fn test_unknown_encodings_read_as_default() {
    let (mut driver, bus) = create_mock_driver();

    // xl_en = 0b011
    bus.set_register(0x10, 0b0110_0000);
    assert_eq!(driver.xl_data_rate_get().unwrap(), DataRate::Off);

    // fifo_mode = 0b010, odr_t_batch = 0b01
    bus.set_register(0x0A, 0b0001_0010);
    assert_eq!(driver.fifo_mode_get().unwrap(), FifoMode::Bypass);
    assert_eq!(driver.fifo_temp_batch_get().unwrap(), TempBatch::NotBatched);

    // st_xl = 0b11
    bus.set_register(0x14, 0b0000_0011);
    assert_eq!(driver.xl_self_test_get().unwrap(), SelfTest::Disable);

    // bdr_xl = 0b0101
    bus.set_register(0x09, 0b0000_0101);
    assert_eq!(driver.fifo_xl_batch_get().unwrap(), XlBatch::NotBatched);
}

#[test]
fn test_raw_field_round_trips() {
    let (mut driver, _bus) = create_mock_driver();

    for ths in 0..=63 {
        driver.wkup_threshold_set(ths).unwrap();
        assert_eq!(driver.wkup_threshold_get().unwrap(), ths);
    }
    for dur in 0..=3 {
        driver.wkup_dur_set(dur).unwrap();
        assert_eq!(driver.wkup_dur_get().unwrap(), dur);
    }
    for dur in 0..=15 {
        driver.act_sleep_dur_set(dur).unwrap();
        assert_eq!(driver.act_sleep_dur_get().unwrap(), dur);
    }
}

#[test]
fn test_raw_field_is_masked_to_its_width() {
    let (mut driver, bus) = create_mock_driver();
    bus.set_register(0x5C, 0b1001_0000);

    driver.act_sleep_dur_set(0xFF).unwrap();
    assert_eq!(driver.act_sleep_dur_get().unwrap(), 0x0F);
    assert_eq!(bus.register(0x5C), 0b1001_1111);

    driver.wkup_dur_set(0x07).unwrap();
    assert_eq!(bus.register(0x5C), 0b1111_1111);
    assert_eq!(driver.wkup_ths_weight_get().unwrap(), WakeThsWeight::FsDiv256);
}

#[test]
fn test_boolean_fields() {
    let (mut driver, bus) = create_mock_driver();

    driver.timestamp_set(true).unwrap();
    assert_eq!(bus.register(0x19), 0x20);
    assert!(driver.timestamp_get().unwrap());

    driver.usr_offset_block_set(true).unwrap();
    assert_eq!(bus.register(0x16), 0x02);
    assert!(driver.usr_offset_block_get().unwrap());

    driver.xl_fast_settling_set(true).unwrap();
    assert_eq!(bus.register(0x17), 0x08);
    assert!(driver.xl_fast_settling_get().unwrap());

    driver.filter_settling_mask_set(true).unwrap();
    driver.all_on_int1_set(true).unwrap();
    assert_eq!(bus.register(0x13), 0x28);
    assert!(driver.filter_settling_mask_get().unwrap());
    assert!(driver.all_on_int1_get().unwrap());

    driver.fifo_stop_on_wtm_set(true).unwrap();
    assert_eq!(bus.register(0x08), 0x80);
    assert!(driver.fifo_stop_on_wtm_get().unwrap());

    driver.rst_batch_counter_set(true).unwrap();
    assert_eq!(bus.register(0x0B), 0x40);
    assert!(driver.rst_batch_counter_get().unwrap());

    driver.xl_usr_offset_on_wkup_set(true).unwrap();
    assert_eq!(bus.register(0x5B), 0x40);
    assert!(driver.xl_usr_offset_on_wkup_get().unwrap());

    driver.boot_set(true).unwrap();
    assert!(driver.boot_get().unwrap());
    driver.boot_set(false).unwrap();
    assert!(!driver.boot_get().unwrap());
}

#[test]
fn test_configure_applies_present_settings_only() {
    let (mut driver, bus) = create_mock_driver();

    driver.configure(&Config::new()).unwrap();
    assert!(bus.operations().is_empty());

    driver
        .configure(
            Config::new()
                .block_data_update(true)
                .full_scale(FullScale::_8G)
                .fifo_watermark(300)
                .fifo_xl_batch(XlBatch::BatchedAt26k7_Hz)
                .fifo_mode(FifoMode::Stream)
                .data_rate(DataRate::_26k7_Hz),
        )
        .unwrap();

    assert!(driver.block_data_update_get().unwrap());
    assert_eq!(driver.xl_full_scale_get().unwrap(), FullScale::_8G);
    assert_eq!(driver.fifo_watermark_get().unwrap(), 300);
    assert_eq!(driver.fifo_xl_batch_get().unwrap(), XlBatch::BatchedAt26k7_Hz);
    assert_eq!(driver.fifo_mode_get().unwrap(), FifoMode::Stream);
    assert_eq!(driver.xl_data_rate_get().unwrap(), DataRate::_26k7_Hz);
    assert_eq!(driver.fifo_temp_batch_get().unwrap(), TempBatch::NotBatched);
}

#[test]
fn test_configure_turns_data_rate_on_last() {
    let (mut driver, bus) = create_mock_driver();

    driver
        .configure(
            Config::new()
                .data_rate(DataRate::_26k7_Hz)
                .axis_selection(AxisSelection::OnlyZOnAllOutReg)
                .fifo_mode(FifoMode::Fifo),
        )
        .unwrap();

    let last_write = bus
        .operations()
        .into_iter()
        .rev()
        .find(|op| matches!(op, Operation::Write { .. }));
    assert_eq!(
        last_write,
        Some(Operation::Write {
            address: 0x10,
            data: vec![0xA0]
        })
    );
}
