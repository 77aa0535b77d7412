//! Interrupt pins, wake-up and activity detection
use crate::register::{self, Register};
use crate::{
    Error, Iis3dwb, IntNotification, PinMode, PinPolarity, RegisterBus, WakeThsWeight,
};

/// Signals routed on the INT1 pin
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinInt1Route {
    /// Accelerometer data ready
    pub drdy_xl: bool,
    /// Boot status
    pub boot: bool,
    /// FIFO watermark reached
    pub fifo_th: bool,
    /// FIFO overrun
    pub fifo_ovr: bool,
    /// FIFO full
    pub fifo_full: bool,
    /// Batch counter threshold reached
    pub fifo_bdr: bool,
    /// Wake-up event
    pub wake_up: bool,
    /// Activity/inactivity change
    pub sleep_change: bool,
    /// Activity/inactivity status. Routing it also routes `sleep_change`.
    pub sleep_status: bool,
}

/// Signals routed on the INT2 pin
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinInt2Route {
    /// Accelerometer data ready
    pub drdy_xl: bool,
    /// Temperature data ready
    pub drdy_temp: bool,
    /// FIFO watermark reached
    pub fifo_th: bool,
    /// FIFO overrun
    pub fifo_ovr: bool,
    /// FIFO full
    pub fifo_full: bool,
    /// Batch counter threshold reached
    pub fifo_bdr: bool,
    /// Timestamp overflow
    pub timestamp: bool,
    /// Wake-up event
    pub wake_up: bool,
    /// Activity/inactivity change
    pub sleep_change: bool,
    /// Activity/inactivity status. Routing it also routes `sleep_change`.
    pub sleep_status: bool,
}

// `SLOPE_EN.SLEEP_STATUS_ON_INT` takes precedence over the MDx sleep change bit
fn sleep_route(md_sleep_change: bool, sleep_status_on_int: bool) -> (bool, bool) {
    if sleep_status_on_int {
        (false, true)
    } else {
        (md_sleep_change, false)
    }
}

impl<B, T> Iis3dwb<B, T>
where
    B: RegisterBus,
{
    /// Routes signals on the INT1 pin.
    ///
    /// `INT1_CTRL`, `MD1_CFG` and `SLOPE_EN` are all read before any of them
    /// is written back, in this order.
    pub fn pin_int1_route_set(&mut self, val: &PinInt1Route) -> Result<(), Error<B::Error>> {
        let mut int1_ctrl = self.read_register(Register::INT1_CTRL)?;
        let mut md1_cfg = self.read_register(Register::MD1_CFG)?;
        let mut slope_en = self.read_register(Register::SLOPE_EN)?;

        int1_ctrl = register::INT1_DRDY_XL.set(int1_ctrl, val.drdy_xl as u8);
        int1_ctrl = register::INT1_BOOT.set(int1_ctrl, val.boot as u8);
        int1_ctrl = register::INT1_FIFO_TH.set(int1_ctrl, val.fifo_th as u8);
        int1_ctrl = register::INT1_FIFO_OVR.set(int1_ctrl, val.fifo_ovr as u8);
        int1_ctrl = register::INT1_FIFO_FULL.set(int1_ctrl, val.fifo_full as u8);
        int1_ctrl = register::INT1_CNT_BDR.set(int1_ctrl, val.fifo_bdr as u8);
        md1_cfg = register::INT1_WU.set(md1_cfg, val.wake_up as u8);
        md1_cfg = register::INT1_SLEEP_CHANGE
            .set(md1_cfg, (val.sleep_change | val.sleep_status) as u8);
        slope_en = register::SLEEP_STATUS_ON_INT.set(slope_en, val.sleep_status as u8);

        self.write_register(Register::INT1_CTRL, int1_ctrl)?;
        self.write_register(Register::MD1_CFG, md1_cfg)?;
        self.write_register(Register::SLOPE_EN, slope_en)
    }

    /// Signals routed on the INT1 pin
    pub fn pin_int1_route_get(&mut self) -> Result<PinInt1Route, Error<B::Error>> {
        let int1_ctrl = self.read_register(Register::INT1_CTRL)?;
        let md1_cfg = self.read_register(Register::MD1_CFG)?;
        let slope_en = self.read_register(Register::SLOPE_EN)?;

        let (sleep_change, sleep_status) = sleep_route(
            register::INT1_SLEEP_CHANGE.is_set(md1_cfg),
            register::SLEEP_STATUS_ON_INT.is_set(slope_en),
        );

        Ok(PinInt1Route {
            drdy_xl: register::INT1_DRDY_XL.is_set(int1_ctrl),
            boot: register::INT1_BOOT.is_set(int1_ctrl),
            fifo_th: register::INT1_FIFO_TH.is_set(int1_ctrl),
            fifo_ovr: register::INT1_FIFO_OVR.is_set(int1_ctrl),
            fifo_full: register::INT1_FIFO_FULL.is_set(int1_ctrl),
            fifo_bdr: register::INT1_CNT_BDR.is_set(int1_ctrl),
            wake_up: register::INT1_WU.is_set(md1_cfg),
            sleep_change,
            sleep_status,
        })
    }

    /// Routes signals on the INT2 pin.
    ///
    /// `INT2_CTRL`, `MD2_CFG` and `SLOPE_EN` are all read before any of them
    /// is written back, in this order.
    pub fn pin_int2_route_set(&mut self, val: &PinInt2Route) -> Result<(), Error<B::Error>> {
        let mut int2_ctrl = self.read_register(Register::INT2_CTRL)?;
        let mut md2_cfg = self.read_register(Register::MD2_CFG)?;
        let mut slope_en = self.read_register(Register::SLOPE_EN)?;

        int2_ctrl = register::INT2_DRDY_XL.set(int2_ctrl, val.drdy_xl as u8);
        int2_ctrl = register::INT2_DRDY_TEMP.set(int2_ctrl, val.drdy_temp as u8);
        int2_ctrl = register::INT2_FIFO_TH.set(int2_ctrl, val.fifo_th as u8);
        int2_ctrl = register::INT2_FIFO_OVR.set(int2_ctrl, val.fifo_ovr as u8);
        int2_ctrl = register::INT2_FIFO_FULL.set(int2_ctrl, val.fifo_full as u8);
        int2_ctrl = register::INT2_CNT_BDR.set(int2_ctrl, val.fifo_bdr as u8);
        md2_cfg = register::INT2_TIMESTAMP.set(md2_cfg, val.timestamp as u8);
        md2_cfg = register::INT2_WU.set(md2_cfg, val.wake_up as u8);
        md2_cfg = register::INT2_SLEEP_CHANGE
            .set(md2_cfg, (val.sleep_change | val.sleep_status) as u8);
        slope_en = register::SLEEP_STATUS_ON_INT.set(slope_en, val.sleep_status as u8);

        self.write_register(Register::INT2_CTRL, int2_ctrl)?;
        self.write_register(Register::MD2_CFG, md2_cfg)?;
        self.write_register(Register::SLOPE_EN, slope_en)
    }

    /// Signals routed on the INT2 pin
    pub fn pin_int2_route_get(&mut self) -> Result<PinInt2Route, Error<B::Error>> {
        let int2_ctrl = self.read_register(Register::INT2_CTRL)?;
        let md2_cfg = self.read_register(Register::MD2_CFG)?;
        let slope_en = self.read_register(Register::SLOPE_EN)?;

        let (sleep_change, sleep_status) = sleep_route(
            register::INT2_SLEEP_CHANGE.is_set(md2_cfg),
            register::SLEEP_STATUS_ON_INT.is_set(slope_en),
        );

        Ok(PinInt2Route {
            drdy_xl: register::INT2_DRDY_XL.is_set(int2_ctrl),
            drdy_temp: register::INT2_DRDY_TEMP.is_set(int2_ctrl),
            fifo_th: register::INT2_FIFO_TH.is_set(int2_ctrl),
            fifo_ovr: register::INT2_FIFO_OVR.is_set(int2_ctrl),
            fifo_full: register::INT2_FIFO_FULL.is_set(int2_ctrl),
            fifo_bdr: register::INT2_CNT_BDR.is_set(int2_ctrl),
            timestamp: register::INT2_TIMESTAMP.is_set(md2_cfg),
            wake_up: register::INT2_WU.is_set(md2_cfg),
            sleep_change,
            sleep_status,
        })
    }

    /// Interrupt pins output stage
    pub fn pin_mode_set(&mut self, mode: PinMode) -> Result<(), Error<B::Error>> {
        self.write_register_with_mask(mode)
    }

    /// Interrupt pins output stage
    pub fn pin_mode_get(&mut self) -> Result<PinMode, Error<B::Error>> {
        self.read_register_field()
    }

    /// Interrupt pins polarity
    pub fn pin_polarity_set(&mut self, polarity: PinPolarity) -> Result<(), Error<B::Error>> {
        self.write_register_with_mask(polarity)
    }

    /// Interrupt pins polarity
    pub fn pin_polarity_get(&mut self) -> Result<PinPolarity, Error<B::Error>> {
        self.read_register_field()
    }

    /// Routes every interrupt signal on INT1 as well
    pub fn all_on_int1_set(&mut self, enable: bool) -> Result<(), Error<B::Error>> {
        self.write_flag(Register::CTRL4_C, register::INT2_ON_INT1, enable)
    }

    /// Every interrupt signal available on INT1
    pub fn all_on_int1_get(&mut self) -> Result<bool, Error<B::Error>> {
        self.read_flag(Register::CTRL4_C, register::INT2_ON_INT1)
    }

    /// Latched or pulsed interrupt notification
    pub fn int_notification_set(&mut self, val: IntNotification) -> Result<(), Error<B::Error>> {
        self.write_register_with_mask(val)
    }

    /// Interrupt notification mode
    pub fn int_notification_get(&mut self) -> Result<IntNotification, Error<B::Error>> {
        self.read_register_field()
    }

    /// Weight of 1 LSB of the wake-up threshold
    pub fn wkup_ths_weight_set(&mut self, weight: WakeThsWeight) -> Result<(), Error<B::Error>> {
        self.write_register_with_mask(weight)
    }

    /// Weight of 1 LSB of the wake-up threshold
    pub fn wkup_ths_weight_get(&mut self) -> Result<WakeThsWeight, Error<B::Error>> {
        self.read_register_field()
    }

    /// Wake-up threshold (6 bits). Also enables the basic interrupts
    /// (`INTERRUPTS_EN`).
    pub fn wkup_threshold_set(&mut self, ths: u8) -> Result<(), Error<B::Error>> {
        self.write_field(Register::WAKE_UP_THS, register::WK_THS, ths)?;
        self.write_flag(Register::INTERRUPTS_EN, register::INTERRUPTS_ENABLE, true)
    }

    /// Wake-up threshold
    pub fn wkup_threshold_get(&mut self) -> Result<u8, Error<B::Error>> {
        self.read_field(Register::WAKE_UP_THS, register::WK_THS)
    }

    /// Applies the user offsets to the wake-up function
    pub fn xl_usr_offset_on_wkup_set(&mut self, enable: bool) -> Result<(), Error<B::Error>> {
        self.write_flag(Register::WAKE_UP_THS, register::USR_OFF_ON_WU, enable)
    }

    /// User offsets applied to the wake-up function
    pub fn xl_usr_offset_on_wkup_get(&mut self) -> Result<bool, Error<B::Error>> {
        self.read_flag(Register::WAKE_UP_THS, register::USR_OFF_ON_WU)
    }

    /// Wake-up duration (2 bits), 1 LSB = 1 ODR period
    pub fn wkup_dur_set(&mut self, dur: u8) -> Result<(), Error<B::Error>> {
        self.write_field(Register::WAKE_UP_DUR, register::WAKE_DUR, dur)
    }

    /// Wake-up duration
    pub fn wkup_dur_get(&mut self) -> Result<u8, Error<B::Error>> {
        self.read_field(Register::WAKE_UP_DUR, register::WAKE_DUR)
    }

    /// Duration before going to sleep (4 bits), 1 LSB = 512 ODR periods
    pub fn act_sleep_dur_set(&mut self, dur: u8) -> Result<(), Error<B::Error>> {
        self.write_field(Register::WAKE_UP_DUR, register::SLEEP_DUR, dur)
    }

    /// Duration before going to sleep
    pub fn act_sleep_dur_get(&mut self) -> Result<u8, Error<B::Error>> {
        self.read_field(Register::WAKE_UP_DUR, register::SLEEP_DUR)
    }
}
