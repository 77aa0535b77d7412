//! Data generation, data output and status
use cast::u16;

use crate::conf::{AxisSelection, FilterPath, HpPathInternal, OffsetWeight, Rounding, SelfTest};
use crate::register::{self, Register};
use crate::{DataReadyMode, Error, I2cInterface, Iis3dwb, RegisterBus, SdoPullUp, SpiMode};

/// `STATUS_REG` view
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusReg {
    /// New accelerometer sample available
    pub xlda: bool,
    /// New temperature sample available
    pub tda: bool,
}

impl From<u8> for StatusReg {
    fn from(r: u8) -> Self {
        StatusReg {
            xlda: register::XLDA.is_set(r),
            tda: register::TDA.is_set(r),
        }
    }
}

/// `WAKE_UP_SRC` view
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WakeUpSrc {
    /// Wake-up event on Z
    pub z_wu: bool,
    /// Wake-up event on Y
    pub y_wu: bool,
    /// Wake-up event on X
    pub x_wu: bool,
    /// Wake-up event detected
    pub wu_ia: bool,
    /// Sleep status
    pub sleep_state_ia: bool,
    /// Activity/inactivity status changed
    pub sleep_change_ia: bool,
}

impl From<u8> for WakeUpSrc {
    fn from(r: u8) -> Self {
        WakeUpSrc {
            z_wu: register::Z_WU.is_set(r),
            y_wu: register::Y_WU.is_set(r),
            x_wu: register::X_WU.is_set(r),
            wu_ia: register::WU_IA.is_set(r),
            sleep_state_ia: register::SLEEP_STATE_IA.is_set(r),
            sleep_change_ia: register::SLEEP_CHANGE_IA.is_set(r),
        }
    }
}

/// `ALL_INT_SRC` view
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AllIntSrc {
    /// Wake-up event
    pub wu_ia: bool,
    /// Activity/inactivity status changed
    pub sleep_change_ia: bool,
    /// Timestamp counter reached its end value
    pub timestamp_endcount: bool,
}

impl From<u8> for AllIntSrc {
    fn from(r: u8) -> Self {
        AllIntSrc {
            wu_ia: register::ALL_WU_IA.is_set(r),
            sleep_change_ia: register::ALL_SLEEP_CHANGE.is_set(r),
            timestamp_endcount: register::TIMESTAMP_ENDCOUNT.is_set(r),
        }
    }
}

/// Every interrupt and status source
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AllSources {
    /// `ALL_INT_SRC`
    pub all_int_src: AllIntSrc,
    /// `WAKE_UP_SRC`
    pub wake_up_src: WakeUpSrc,
    /// `STATUS_REG`
    pub status_reg: StatusReg,
}

fn le_i16(lo: u8, hi: u8) -> i16 {
    (u16(lo) | (u16(hi) << 8)) as i16
}

impl<B, T> Iis3dwb<B, T>
where
    B: RegisterBus,
{
    /// Sets the weight of the user offset words
    pub fn xl_offset_weight_set(&mut self, weight: OffsetWeight) -> Result<(), Error<B::Error>> {
        self.write_register_with_mask(weight)
    }

    /// Weight of the user offset words
    pub fn xl_offset_weight_get(&mut self) -> Result<OffsetWeight, Error<B::Error>> {
        self.read_register_field()
    }

    /// Selects the axes available on the output registers.
    ///
    /// Both `CTRL4_C` and `CTRL6_C` are read before either is written.
    pub fn xl_axis_selection_set(&mut self, val: AxisSelection) -> Result<(), Error<B::Error>> {
        let ctrl4_c = self.read_register(Register::CTRL4_C)?;
        let ctrl6_c = self.read_register(Register::CTRL6_C)?;

        let ctrl4_c = register::ONE_AX_TO_3REGOUT.set(ctrl4_c, val.one_ax_to_3regout());
        let ctrl6_c = register::XL_AXIS_SEL.set(ctrl6_c, val.xl_axis_sel());

        self.write_register(Register::CTRL4_C, ctrl4_c)?;
        self.write_register(Register::CTRL6_C, ctrl6_c)
    }

    /// Axes available on the output registers
    pub fn xl_axis_selection_get(&mut self) -> Result<AxisSelection, Error<B::Error>> {
        let ctrl4_c = self.read_register(Register::CTRL4_C)?;
        let ctrl6_c = self.read_register(Register::CTRL6_C)?;

        let key = AxisSelection::compose(
            register::ONE_AX_TO_3REGOUT.get(ctrl4_c),
            register::XL_AXIS_SEL.get(ctrl6_c),
        );
        Ok(AxisSelection::try_from(key).unwrap_or_default())
    }

    /// Reads `ALL_INT_SRC`, `WAKE_UP_SRC` and `STATUS_REG`, in this order
    pub fn all_sources_get(&mut self) -> Result<AllSources, Error<B::Error>> {
        let all_int_src = self.read_register(Register::ALL_INT_SRC)?;
        let wake_up_src = self.read_register(Register::WAKE_UP_SRC)?;
        let status_reg = self.read_register(Register::STATUS_REG)?;

        Ok(AllSources {
            all_int_src: all_int_src.into(),
            wake_up_src: wake_up_src.into(),
            status_reg: status_reg.into(),
        })
    }

    /// `STATUS_REG`
    pub fn status_reg_get(&mut self) -> Result<StatusReg, Error<B::Error>> {
        self.read_register(Register::STATUS_REG).map(StatusReg::from)
    }

    /// New accelerometer sample available
    pub fn xl_flag_data_ready_get(&mut self) -> Result<bool, Error<B::Error>> {
        self.read_flag(Register::STATUS_REG, register::XLDA)
    }

    /// New temperature sample available
    pub fn temp_flag_data_ready_get(&mut self) -> Result<bool, Error<B::Error>> {
        self.read_flag(Register::STATUS_REG, register::TDA)
    }

    /// Applies the user offsets to the output registers
    pub fn usr_offset_block_set(&mut self, enable: bool) -> Result<(), Error<B::Error>> {
        self.write_flag(Register::CTRL7_C, register::USR_OFF_ON_OUT, enable)
    }

    /// User offsets applied to the output registers
    pub fn usr_offset_block_get(&mut self) -> Result<bool, Error<B::Error>> {
        self.read_flag(Register::CTRL7_C, register::USR_OFF_ON_OUT)
    }

    /// X-axis user offset, two's complement in [-127, 127]
    pub fn xl_usr_offset_x_set(&mut self, offset: i8) -> Result<(), Error<B::Error>> {
        self.write_register(Register::X_OFS_USR, offset as u8)
    }

    /// X-axis user offset
    pub fn xl_usr_offset_x_get(&mut self) -> Result<i8, Error<B::Error>> {
        self.read_register(Register::X_OFS_USR).map(|r| r as i8)
    }

    /// Y-axis user offset, two's complement in [-127, 127]
    pub fn xl_usr_offset_y_set(&mut self, offset: i8) -> Result<(), Error<B::Error>> {
        self.write_register(Register::Y_OFS_USR, offset as u8)
    }

    /// Y-axis user offset
    pub fn xl_usr_offset_y_get(&mut self) -> Result<i8, Error<B::Error>> {
        self.read_register(Register::Y_OFS_USR).map(|r| r as i8)
    }

    /// Z-axis user offset, two's complement in [-127, 127]
    pub fn xl_usr_offset_z_set(&mut self, offset: i8) -> Result<(), Error<B::Error>> {
        self.write_register(Register::Z_OFS_USR, offset as u8)
    }

    /// Z-axis user offset
    pub fn xl_usr_offset_z_get(&mut self) -> Result<i8, Error<B::Error>> {
        self.read_register(Register::Z_OFS_USR).map(|r| r as i8)
    }

    /// Resets the timestamp counter
    pub fn timestamp_rst(&mut self) -> Result<(), Error<B::Error>> {
        self.write_register(Register::TIMESTAMP2, register::TIMESTAMP_RESET)
    }

    /// Enables the timestamp counter
    pub fn timestamp_set(&mut self, enable: bool) -> Result<(), Error<B::Error>> {
        self.write_flag(Register::CTRL10_C, register::TIMESTAMP_EN, enable)
    }

    /// Timestamp counter enabled
    pub fn timestamp_get(&mut self) -> Result<bool, Error<B::Error>> {
        self.read_flag(Register::CTRL10_C, register::TIMESTAMP_EN)
    }

    /// Timestamp counter, 1 LSB = 25 us
    pub fn timestamp_raw_get(&mut self) -> Result<u32, Error<B::Error>> {
        let mut buffer = [0; 4];
        self.read_registers(Register::TIMESTAMP0, &mut buffer)?;
        Ok(u32::from_le_bytes(buffer))
    }

    /// Circular burst-mode read of the output registers
    pub fn rounding_mode_set(&mut self, rounding: Rounding) -> Result<(), Error<B::Error>> {
        self.write_register_with_mask(rounding)
    }

    /// Circular burst-mode read of the output registers
    pub fn rounding_mode_get(&mut self) -> Result<Rounding, Error<B::Error>> {
        self.read_register_field()
    }

    /// Raw temperature sample
    pub fn temperature_raw_get(&mut self) -> Result<i16, Error<B::Error>> {
        let mut buffer = [0; 2];
        self.read_registers(Register::OUT_TEMP_L, &mut buffer)?;
        Ok(le_i16(buffer[0], buffer[1]))
    }

    /// Raw accelerometer sample, X Y Z
    pub fn acceleration_raw_get(&mut self) -> Result<[i16; 3], Error<B::Error>> {
        let mut buffer = [0; 6];
        self.read_registers(Register::OUTX_L_A, &mut buffer)?;

        Ok([
            le_i16(buffer[0], buffer[1]),
            le_i16(buffer[2], buffer[3]),
            le_i16(buffer[4], buffer[5]),
        ])
    }

    /// Fine-tunes the internal oscillator frequency (`INTERNAL_FREQ_FINE`)
    pub fn odr_cal_reg_set(&mut self, val: i8) -> Result<(), Error<B::Error>> {
        self.write_register(Register::INTERNAL_FREQ_FINE, val as u8)
    }

    /// Internal oscillator frequency trimming
    pub fn odr_cal_reg_get(&mut self) -> Result<i8, Error<B::Error>> {
        self.read_register(Register::INTERNAL_FREQ_FINE)
            .map(|r| r as i8)
    }

    /// Data-ready signal mode
    pub fn data_ready_mode_set(&mut self, mode: DataReadyMode) -> Result<(), Error<B::Error>> {
        self.write_register_with_mask(mode)
    }

    /// Data-ready signal mode
    pub fn data_ready_mode_get(&mut self) -> Result<DataReadyMode, Error<B::Error>> {
        self.read_register_field()
    }

    /// Accelerometer self-test
    pub fn xl_self_test_set(&mut self, st: SelfTest) -> Result<(), Error<B::Error>> {
        self.write_register_with_mask(st)
    }

    /// Accelerometer self-test
    pub fn xl_self_test_get(&mut self) -> Result<SelfTest, Error<B::Error>> {
        self.read_register_field()
    }

    /// Masks the data-ready signal until the filters have settled
    pub fn filter_settling_mask_set(&mut self, enable: bool) -> Result<(), Error<B::Error>> {
        self.write_flag(Register::CTRL4_C, register::DRDY_MASK, enable)
    }

    /// Data-ready masked during filter settling
    pub fn filter_settling_mask_get(&mut self) -> Result<bool, Error<B::Error>> {
        self.read_flag(Register::CTRL4_C, register::DRDY_MASK)
    }

    /// Selects the filter chain on the output registers and FIFO.
    ///
    /// `CTRL1_XL` and `CTRL8_XL` are both read before either is written.
    pub fn xl_filt_path_on_out_set(&mut self, val: FilterPath) -> Result<(), Error<B::Error>> {
        let ctrl1_xl = self.read_register(Register::CTRL1_XL)?;
        let ctrl8_xl = self.read_register(Register::CTRL8_XL)?;

        let ctrl1_xl = register::LPF2_XL_EN.set(ctrl1_xl, val.lpf2_xl_en());
        let mut ctrl8_xl = register::FDS.set(ctrl8_xl, val.fds());
        ctrl8_xl = register::HP_REF_MODE_XL.set(ctrl8_xl, val.hp_ref_mode_xl());
        ctrl8_xl = register::HPCF_XL.set(ctrl8_xl, val.hpcf_xl());

        self.write_register(Register::CTRL1_XL, ctrl1_xl)?;
        self.write_register(Register::CTRL8_XL, ctrl8_xl)
    }

    /// Filter chain on the output registers and FIFO
    pub fn xl_filt_path_on_out_get(&mut self) -> Result<FilterPath, Error<B::Error>> {
        let ctrl1_xl = self.read_register(Register::CTRL1_XL)?;
        let ctrl8_xl = self.read_register(Register::CTRL8_XL)?;

        let key = FilterPath::compose(
            register::LPF2_XL_EN.get(ctrl1_xl),
            register::HP_REF_MODE_XL.get(ctrl8_xl),
            register::FDS.get(ctrl8_xl),
            register::HPCF_XL.get(ctrl8_xl),
        );
        Ok(FilterPath::try_from(key).unwrap_or_default())
    }

    /// Fast settling of the accelerometer digital filters
    pub fn xl_fast_settling_set(&mut self, enable: bool) -> Result<(), Error<B::Error>> {
        self.write_flag(Register::CTRL8_XL, register::FASTSETTL_MODE_XL, enable)
    }

    /// Fast settling of the accelerometer digital filters
    pub fn xl_fast_settling_get(&mut self) -> Result<bool, Error<B::Error>> {
        self.read_flag(Register::CTRL8_XL, register::FASTSETTL_MODE_XL)
    }

    /// HPF or slope filter on the wake-up path
    pub fn xl_hp_path_internal_set(&mut self, val: HpPathInternal) -> Result<(), Error<B::Error>> {
        self.write_register_with_mask(val)
    }

    /// HPF or slope filter on the wake-up path
    pub fn xl_hp_path_internal_get(&mut self) -> Result<HpPathInternal, Error<B::Error>> {
        self.read_register_field()
    }

    /// Pull-up on the SDO pin
    pub fn sdo_sa0_mode_set(&mut self, val: SdoPullUp) -> Result<(), Error<B::Error>> {
        self.write_register_with_mask(val)
    }

    /// Pull-up on the SDO pin
    pub fn sdo_sa0_mode_get(&mut self) -> Result<SdoPullUp, Error<B::Error>> {
        self.read_register_field()
    }

    /// SPI serial interface mode
    pub fn spi_mode_set(&mut self, val: SpiMode) -> Result<(), Error<B::Error>> {
        self.write_register_with_mask(val)
    }

    /// SPI serial interface mode
    pub fn spi_mode_get(&mut self) -> Result<SpiMode, Error<B::Error>> {
        self.read_register_field()
    }

    /// Enables or disables the I2C interface
    pub fn i2c_interface_set(&mut self, val: I2cInterface) -> Result<(), Error<B::Error>> {
        self.write_register_with_mask(val)
    }

    /// I2C interface state
    pub fn i2c_interface_get(&mut self) -> Result<I2cInterface, Error<B::Error>> {
        self.read_register_field()
    }
}
