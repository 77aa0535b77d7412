//! Unit tests for data output, status and device control

use crate::common::{create_mock_driver, Operation};
use iis3dwb::{AllIntSrc, FullScale, Register, StatusReg, WakeUpSrc, ID};

#[test]
fn test_device_id() {
    let (mut driver, _bus) = create_mock_driver();
    assert_eq!(driver.device_id_get().unwrap(), ID);
}

#[test]
fn test_timestamp_assembly() {
    let (mut driver, bus) = create_mock_driver();

    bus.set_registers(0x40, &[0x01, 0x00, 0x00, 0x00]);
    assert_eq!(driver.timestamp_raw_get().unwrap(), 1);

    bus.set_registers(0x40, &[0xFF, 0xFF, 0xFF, 0xFF]);
    assert_eq!(driver.timestamp_raw_get().unwrap(), 4_294_967_295);

    bus.set_registers(0x40, &[0x78, 0x56, 0x34, 0x12]);
    assert_eq!(driver.timestamp_raw_get().unwrap(), 0x1234_5678);
}

#[test]
fn test_timestamp_is_a_single_burst() {
    let (mut driver, bus) = create_mock_driver();

    driver.timestamp_raw_get().unwrap();
    assert_eq!(
        bus.operations(),
        vec![Operation::Read {
            address: 0x40,
            len: 4
        }]
    );
}

#[test]
fn test_timestamp_reset() {
    let (mut driver, bus) = create_mock_driver();

    driver.timestamp_rst().unwrap();
    assert_eq!(
        bus.operations(),
        vec![Operation::Write {
            address: 0x42,
            data: vec![0xAA]
        }]
    );
}

#[test]
fn test_acceleration_raw() {
    let (mut driver, bus) = create_mock_driver();
    bus.set_registers(0x28, &[0x10, 0x27, 0xF0, 0xD8, 0x00, 0x80]);

    assert_eq!(driver.acceleration_raw_get().unwrap(), [10000, -10000, i16::MIN]);
    assert_eq!(
        bus.operations(),
        vec![Operation::Read {
            address: 0x28,
            len: 6
        }]
    );
}

#[test]
fn test_acceleration_in_mg() {
    let (mut driver, bus) = create_mock_driver();
    bus.set_registers(0x28, &[0xE8, 0x03, 0x18, 0xFC, 0x00, 0x00]);

    let [x, y, z] = driver.acceleration_raw_get().unwrap();
    assert_eq!(FullScale::_2G.to_mg(x), 61.0);
    assert_eq!(FullScale::_16G.to_mg(x), 488.0);
    assert_eq!(FullScale::_2G.to_mg(y), -61.0);
    assert_eq!(FullScale::_8G.to_mg(z), 0.0);
}

#[test]
fn test_temperature_raw() {
    let (mut driver, bus) = create_mock_driver();
    bus.set_registers(0x20, &[0x00, 0x01]);

    let raw = driver.temperature_raw_get().unwrap();
    assert_eq!(raw, 256);
    assert_eq!(iis3dwb::from_lsb_to_celsius(raw), 26.0);

    bus.set_registers(0x20, &[0x00, 0xFF]);
    assert_eq!(driver.temperature_raw_get().unwrap(), -256);
}

#[test]
fn test_user_offsets_are_full_register_writes() {
    let (mut driver, bus) = create_mock_driver();

    driver.xl_usr_offset_x_set(-1).unwrap();
    driver.xl_usr_offset_y_set(127).unwrap();
    driver.xl_usr_offset_z_set(-127).unwrap();

    assert_eq!(
        bus.operations(),
        vec![
            Operation::Write {
                address: 0x73,
                data: vec![0xFF]
            },
            Operation::Write {
                address: 0x74,
                data: vec![0x7F]
            },
            Operation::Write {
                address: 0x75,
                data: vec![0x81]
            },
        ]
    );

    assert_eq!(driver.xl_usr_offset_x_get().unwrap(), -1);
    assert_eq!(driver.xl_usr_offset_y_get().unwrap(), 127);
    assert_eq!(driver.xl_usr_offset_z_get().unwrap(), -127);
}

#[test]
fn test_odr_calibration() {
    let (mut driver, bus) = create_mock_driver();

    driver.odr_cal_reg_set(-8).unwrap();
    assert_eq!(bus.register(0x63), 0xF8);
    assert_eq!(driver.odr_cal_reg_get().unwrap(), -8);
}

#[test]
fn test_status_flags() {
    let (mut driver, bus) = create_mock_driver();

    bus.set_register(0x1E, 0x01);
    assert!(driver.xl_flag_data_ready_get().unwrap());
    assert!(!driver.temp_flag_data_ready_get().unwrap());

    bus.set_register(0x1E, 0x04);
    assert_eq!(
        driver.status_reg_get().unwrap(),
        StatusReg {
            xlda: false,
            tda: true
        }
    );
}

#[test]
fn test_all_sources() {
    let (mut driver, bus) = create_mock_driver();
    bus.set_register(0x1A, 0b1000_0010);
    bus.set_register(0x1B, 0b0001_1100);
    bus.set_register(0x1E, 0x05);

    let sources = driver.all_sources_get().unwrap();

    assert_eq!(
        sources.all_int_src,
        AllIntSrc {
            wu_ia: true,
            sleep_change_ia: false,
            timestamp_endcount: true
        }
    );
    assert_eq!(
        sources.wake_up_src,
        WakeUpSrc {
            x_wu: true,
            wu_ia: true,
            sleep_state_ia: true,
            ..WakeUpSrc::default()
        }
    );
    assert!(sources.status_reg.xlda && sources.status_reg.tda);
    assert_eq!(
        bus.operations(),
        vec![
            Operation::Read {
                address: 0x1A,
                len: 1
            },
            Operation::Read {
                address: 0x1B,
                len: 1
            },
            Operation::Read {
                address: 0x1E,
                len: 1
            },
        ]
    );
}

#[test]
fn test_reset_and_wait_completes() {
    let (mut driver, bus) = create_mock_driver();
    bus.set_reset_duration(2);

    assert!(driver.reset_and_wait(10).unwrap());
    assert!(!driver.reset_get().unwrap());
    // IF_INC survives the read-modify-write
    assert!(driver.auto_increment_get().unwrap());
}

#[test]
fn test_reset_and_wait_times_out() {
    let (mut driver, bus) = create_mock_driver();
    bus.set_reset_duration(5);

    assert!(!driver.reset_and_wait(3).unwrap());
}

#[test]
fn test_reset_and_wait_with_no_polls() {
    let (mut driver, bus) = create_mock_driver();

    assert!(!driver.reset_and_wait(0).unwrap());
    assert_eq!(bus.register(0x12) & 0x01, 0x01);
}

#[test]
fn test_raw_register_access() {
    let (mut driver, bus) = create_mock_driver();

    driver
        .write_reg(Register::X_OFS_USR, &[0x01, 0x02, 0x03])
        .unwrap();
    assert_eq!(bus.register(0x74), 0x02);

    let mut buffer = [0; 3];
    driver.read_reg(Register::X_OFS_USR, &mut buffer).unwrap();
    assert_eq!(buffer, [0x01, 0x02, 0x03]);
}
