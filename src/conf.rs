use crate::register::{self, Field, Register};
use crate::units;

/// A typed value stored in a single bit-field of one register
pub(crate) trait RegisterField: Copy + Default {
    const REGISTER: Register;
    const FIELD: Field;

    fn value(&self) -> u8;

    /// Unknown or reserved encodings decode to the default variant
    fn from_value(value: u8) -> Self;
}

macro_rules! field_enum {
    (
        $(#[$meta:meta])*
        pub enum $Name:ident in $Reg:ident.$Field:ident {
            $(
                $(#[$vmeta:meta])*
                $Variant:ident = $value:literal,
            )+
        }
        default $Default:ident
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, PartialEq, Eq)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        #[allow(non_camel_case_types)]
        #[repr(u8)]
        pub enum $Name {
            $(
                $(#[$vmeta])*
                $Variant = $value,
            )+
        }

        impl Default for $Name {
            fn default() -> Self {
                $Name::$Default
            }
        }

        impl TryFrom<u8> for $Name {
            type Error = u8;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                match value {
                    $( $value => Ok($Name::$Variant), )+
                    other => Err(other),
                }
            }
        }

        impl RegisterField for $Name {
            const REGISTER: Register = Register::$Reg;
            const FIELD: Field = register::$Field;

            fn value(&self) -> u8 {
                *self as u8
            }

            fn from_value(value: u8) -> Self {
                $Name::try_from(value).unwrap_or_default()
            }
        }
    };
}

field_enum! {
    /// Accelerometer full scale.
    ///
    /// The encoding of 16g sits between 2g and 4g on the device.
    pub enum FullScale in CTRL1_XL.FS_XL {
        /// +/- 2g
        _2G = 0,
        /// +/- 16g
        _16G = 1,
        /// +/- 4g
        _4G = 2,
        /// +/- 8g
        _8G = 3,
    }
    default _2G
}

impl FullScale {
    /// Weight of one LSB in milli-g
    pub fn sensitivity(&self) -> f32 {
        match self {
            FullScale::_2G => 0.061,
            FullScale::_4G => 0.122,
            FullScale::_8G => 0.244,
            FullScale::_16G => 0.488,
        }
    }

    /// Converts a raw sample taken at this full scale to milli-g
    pub fn to_mg(&self, lsb: i16) -> f32 {
        match self {
            FullScale::_2G => units::from_fs2g_to_mg(lsb),
            FullScale::_4G => units::from_fs4g_to_mg(lsb),
            FullScale::_8G => units::from_fs8g_to_mg(lsb),
            FullScale::_16G => units::from_fs16g_to_mg(lsb),
        }
    }
}

field_enum! {
    /// Accelerometer output data rate
    pub enum DataRate in CTRL1_XL.XL_EN {
        /// Power down
        Off = 0,
        /// 26.7 kHz
        _26k7_Hz = 5,
    }
    default Off
}

field_enum! {
    /// Weight of the user offset registers `X_OFS_USR`, `Y_OFS_USR`, `Z_OFS_USR`
    pub enum OffsetWeight in CTRL6_C.USR_OFF_W {
        /// 2^-10 g/LSB
        _1_mg = 0,
        /// 2^-6 g/LSB
        _16_mg = 1,
    }
    default _1_mg
}

field_enum! {
    /// Circular burst-mode (rounding) read of the output registers
    pub enum Rounding in CTRL5_C.ROUNDING {
        /// No rounding
        NoRound = 0,
        /// Accelerometer output registers are read in a loop
        Round = 1,
    }
    default NoRound
}

field_enum! {
    /// Data-ready signal mode
    pub enum DataReadyMode in COUNTER_BDR_REG1.DATAREADY_PULSED {
        /// Latched until the output is read
        Latched = 0,
        /// 75 us pulse
        Pulsed = 1,
    }
    default Latched
}

field_enum! {
    /// Accelerometer self-test
    pub enum SelfTest in CTRL5_C.ST_XL {
        /// Normal mode
        Disable = 0,
        /// Positive sign self-test
        Positive = 1,
        /// Negative sign self-test
        Negative = 2,
    }
    default Disable
}

field_enum! {
    /// HPF or slope filter on the wake-up path
    pub enum HpPathInternal in SLOPE_EN.SLOPE_FDS {
        /// Slope filter
        UseSlope = 0,
        /// High-pass filter
        UseHpf = 1,
    }
    default UseSlope
}

field_enum! {
    /// Pull-up on the SDO/SA0 pin
    pub enum SdoPullUp in PIN_CTRL.SDO_PU_EN {
        /// Pull-up disconnected
        Disconnected = 0,
        /// Pull-up connected
        Connected = 1,
    }
    default Disconnected
}

field_enum! {
    /// SPI serial interface mode
    pub enum SpiMode in CTRL3_C.SIM {
        /// 4-wire interface
        FourWire = 0,
        /// 3-wire interface
        ThreeWire = 1,
    }
    default FourWire
}

field_enum! {
    /// I2C interface state
    pub enum I2cInterface in CTRL4_C.I2C_DISABLE {
        /// SPI and I2C enabled
        Enable = 0,
        /// I2C disabled, SPI only
        Disable = 1,
    }
    default Enable
}

field_enum! {
    /// Interrupt pins output stage
    pub enum PinMode in CTRL3_C.PP_OD {
        /// Push-pull
        PushPull = 0,
        /// Open-drain
        OpenDrain = 1,
    }
    default PushPull
}

field_enum! {
    /// Interrupt pins polarity
    pub enum PinPolarity in CTRL3_C.H_LACTIVE {
        /// Active high
        ActiveHigh = 0,
        /// Active low
        ActiveLow = 1,
    }
    default ActiveHigh
}

field_enum! {
    /// Interrupt notification mode
    pub enum IntNotification in SLOPE_EN.LIR {
        /// Pulsed
        Pulsed = 0,
        /// Latched until the source register is read
        Latched = 1,
    }
    default Pulsed
}

field_enum! {
    /// Weight of one LSB of the wake-up threshold
    pub enum WakeThsWeight in WAKE_UP_DUR.WAKE_THS_W {
        /// FS / 2^6
        FsDiv64 = 0,
        /// FS / 2^8
        FsDiv256 = 1,
    }
    default FsDiv64
}

field_enum! {
    /// Accelerometer batch data rate in FIFO
    pub enum XlBatch in FIFO_CTRL3.BDR_XL {
        /// Not batched
        NotBatched = 0,
        /// Batched at 26.7 kHz
        BatchedAt26k7_Hz = 10,
    }
    default NotBatched
}

field_enum! {
    /// FIFO operating mode
    pub enum FifoMode in FIFO_CTRL4.FIFO_MODE {
        /// FIFO disabled
        Bypass = 0,
        /// Stops collecting data when full
        Fifo = 1,
        /// Stream until trigger, then FIFO
        StreamToFifo = 3,
        /// Bypass until trigger, then stream
        BypassToStream = 4,
        /// Older data is overwritten when full
        Stream = 6,
        /// Bypass until trigger, then FIFO
        BypassToFifo = 7,
    }
    default Bypass
}

field_enum! {
    /// Temperature batch data rate in FIFO
    pub enum TempBatch in FIFO_CTRL4.ODR_T_BATCH {
        /// Not batched
        NotBatched = 0,
        /// Batched at 104 Hz
        BatchedAt104_Hz = 3,
    }
    default NotBatched
}

field_enum! {
    /// Timestamp decimation in FIFO
    pub enum TimestampBatch in FIFO_CTRL4.ODR_TS_BATCH {
        /// Timestamp not batched
        NoDecimation = 0,
        /// Every batch data rate period
        Dec1 = 1,
        /// Every 8 batch data rate periods
        Dec8 = 2,
        /// Every 32 batch data rate periods
        Dec32 = 3,
    }
    default NoDecimation
}

field_enum! {
    /// Sensor that produced a FIFO record
    pub enum FifoTag in FIFO_DATA_OUT_TAG.TAG_SENSOR {
        /// Accelerometer sample
        Accelerometer = 2,
        /// Temperature sample
        Temperature = 3,
        /// Timestamp
        Timestamp = 4,
    }
    default Accelerometer
}

/// Accelerometer axis selection.
///
/// The encoding combines `CTRL4_C._1AX_TO_3REGOUT` (weighted 0x10) with
/// `CTRL6_C.XL_AXIS_SEL`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AxisSelection {
    /// All three axes
    EnableAll = 0x00,
    /// Only X, on one output register
    OnlyXOnOneOutReg = 0x01,
    /// Only Y, on one output register
    OnlyYOnOneOutReg = 0x02,
    /// Only Z, on one output register
    OnlyZOnOneOutReg = 0x03,
    /// Only X, copied on all output registers
    OnlyXOnAllOutReg = 0x11,
    /// Only Y, copied on all output registers
    OnlyYOnAllOutReg = 0x12,
    /// Only Z, copied on all output registers
    OnlyZOnAllOutReg = 0x13,
}

impl Default for AxisSelection {
    fn default() -> Self {
        AxisSelection::EnableAll
    }
}

impl TryFrom<u8> for AxisSelection {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x00 => Ok(AxisSelection::EnableAll),
            0x01 => Ok(AxisSelection::OnlyXOnOneOutReg),
            0x02 => Ok(AxisSelection::OnlyYOnOneOutReg),
            0x03 => Ok(AxisSelection::OnlyZOnOneOutReg),
            0x11 => Ok(AxisSelection::OnlyXOnAllOutReg),
            0x12 => Ok(AxisSelection::OnlyYOnAllOutReg),
            0x13 => Ok(AxisSelection::OnlyZOnAllOutReg),
            other => Err(other),
        }
    }
}

impl AxisSelection {
    pub(crate) fn compose(one_ax_to_3regout: u8, xl_axis_sel: u8) -> u8 {
        (one_ax_to_3regout << 4) + xl_axis_sel
    }

    pub(crate) fn one_ax_to_3regout(&self) -> u8 {
        (*self as u8 & 0x10) >> 4
    }

    pub(crate) fn xl_axis_sel(&self) -> u8 {
        *self as u8 & 0x03
    }
}

/// Accelerometer output filter path.
///
/// The encoding combines `CTRL1_XL.LPF2_XL_EN` (weighted 0x80) with
/// `CTRL8_XL.HP_REF_MODE_XL` (0x20), `CTRL8_XL.FDS` (0x10) and
/// `CTRL8_XL.HPCF_XL`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(non_camel_case_types)]
#[repr(u8)]
pub enum FilterPath {
    /// Slope filter, ODR/4
    SlopeOdrDiv4 = 0x10,
    /// High-pass reference mode
    HpRefMode = 0x37,
    /// High-pass, ODR/10
    HpOdrDiv10 = 0x11,
    /// High-pass, ODR/20
    HpOdrDiv20 = 0x12,
    /// High-pass, ODR/45
    HpOdrDiv45 = 0x13,
    /// High-pass, ODR/100
    HpOdrDiv100 = 0x14,
    /// High-pass, ODR/200
    HpOdrDiv200 = 0x15,
    /// High-pass, ODR/400
    HpOdrDiv400 = 0x16,
    /// High-pass, ODR/800
    HpOdrDiv800 = 0x17,
    /// Low-pass, 6.3 kHz (LPF2 bypassed)
    Lp6k3_Hz = 0x00,
    /// Low-pass, ODR/4
    LpOdrDiv4 = 0x80,
    /// Low-pass, ODR/10
    LpOdrDiv10 = 0x81,
    /// Low-pass, ODR/20
    LpOdrDiv20 = 0x82,
    /// Low-pass, ODR/45
    LpOdrDiv45 = 0x83,
    /// Low-pass, ODR/100
    LpOdrDiv100 = 0x84,
    /// Low-pass, ODR/200
    LpOdrDiv200 = 0x85,
    /// Low-pass, ODR/400
    LpOdrDiv400 = 0x86,
    /// Low-pass, ODR/800
    LpOdrDiv800 = 0x87,
}

impl Default for FilterPath {
    fn default() -> Self {
        FilterPath::HpRefMode
    }
}

impl TryFrom<u8> for FilterPath {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x10 => Ok(FilterPath::SlopeOdrDiv4),
            0x37 => Ok(FilterPath::HpRefMode),
            0x11 => Ok(FilterPath::HpOdrDiv10),
            0x12 => Ok(FilterPath::HpOdrDiv20),
            0x13 => Ok(FilterPath::HpOdrDiv45),
            0x14 => Ok(FilterPath::HpOdrDiv100),
            0x15 => Ok(FilterPath::HpOdrDiv200),
            0x16 => Ok(FilterPath::HpOdrDiv400),
            0x17 => Ok(FilterPath::HpOdrDiv800),
            0x00 => Ok(FilterPath::Lp6k3_Hz),
            0x80 => Ok(FilterPath::LpOdrDiv4),
            0x81 => Ok(FilterPath::LpOdrDiv10),
            0x82 => Ok(FilterPath::LpOdrDiv20),
            0x83 => Ok(FilterPath::LpOdrDiv45),
            0x84 => Ok(FilterPath::LpOdrDiv100),
            0x85 => Ok(FilterPath::LpOdrDiv200),
            0x86 => Ok(FilterPath::LpOdrDiv400),
            0x87 => Ok(FilterPath::LpOdrDiv800),
            other => Err(other),
        }
    }
}

impl FilterPath {
    pub(crate) fn compose(lpf2_xl_en: u8, hp_ref_mode_xl: u8, fds: u8, hpcf_xl: u8) -> u8 {
        (lpf2_xl_en << 7) + (hp_ref_mode_xl << 5) + (fds << 4) + hpcf_xl
    }

    pub(crate) fn lpf2_xl_en(&self) -> u8 {
        (*self as u8 & 0x80) >> 7
    }

    pub(crate) fn hp_ref_mode_xl(&self) -> u8 {
        (*self as u8 & 0x20) >> 5
    }

    pub(crate) fn fds(&self) -> u8 {
        (*self as u8 & 0x10) >> 4
    }

    pub(crate) fn hpcf_xl(&self) -> u8 {
        *self as u8 & 0x07
    }
}

/// Configuration of Iis3dwb
#[derive(Copy, Clone, Debug, Default)]
pub struct Config {
    pub(crate) full_scale: Option<FullScale>,
    pub(crate) data_rate: Option<DataRate>,
    pub(crate) block_data_update: Option<bool>,
    pub(crate) axis_selection: Option<AxisSelection>,
    pub(crate) filter_path: Option<FilterPath>,
    pub(crate) timestamp: Option<bool>,
    pub(crate) fifo_watermark: Option<u16>,
    pub(crate) fifo_xl_batch: Option<XlBatch>,
    pub(crate) fifo_temp_batch: Option<TempBatch>,
    pub(crate) fifo_timestamp_batch: Option<TimestampBatch>,
    pub(crate) fifo_mode: Option<FifoMode>,
}

impl Config {
    /// Creates an empty configuration: applying it leaves every register
    /// untouched
    pub fn new() -> Self {
        Config::default()
    }

    /// Sets accelerometer full scale ([`FullScale`])
    pub fn full_scale(&mut self, full_scale: FullScale) -> &mut Self {
        self.full_scale = Some(full_scale);
        self
    }

    /// Sets accelerometer output data rate ([`DataRate`])
    pub fn data_rate(&mut self, data_rate: DataRate) -> &mut Self {
        self.data_rate = Some(data_rate);
        self
    }

    /// Sets block data update
    pub fn block_data_update(&mut self, enable: bool) -> &mut Self {
        self.block_data_update = Some(enable);
        self
    }

    /// Sets accelerometer axis selection ([`AxisSelection`])
    pub fn axis_selection(&mut self, axis_selection: AxisSelection) -> &mut Self {
        self.axis_selection = Some(axis_selection);
        self
    }

    /// Sets accelerometer output filter path ([`FilterPath`])
    pub fn filter_path(&mut self, filter_path: FilterPath) -> &mut Self {
        self.filter_path = Some(filter_path);
        self
    }

    /// Enables or disables the timestamp counter
    pub fn timestamp(&mut self, enable: bool) -> &mut Self {
        self.timestamp = Some(enable);
        self
    }

    /// Sets FIFO watermark threshold (9 bits)
    pub fn fifo_watermark(&mut self, watermark: u16) -> &mut Self {
        self.fifo_watermark = Some(watermark);
        self
    }

    /// Sets accelerometer FIFO batching ([`XlBatch`])
    pub fn fifo_xl_batch(&mut self, batch: XlBatch) -> &mut Self {
        self.fifo_xl_batch = Some(batch);
        self
    }

    /// Sets temperature FIFO batching ([`TempBatch`])
    pub fn fifo_temp_batch(&mut self, batch: TempBatch) -> &mut Self {
        self.fifo_temp_batch = Some(batch);
        self
    }

    /// Sets timestamp FIFO batching ([`TimestampBatch`])
    pub fn fifo_timestamp_batch(&mut self, batch: TimestampBatch) -> &mut Self {
        self.fifo_timestamp_batch = Some(batch);
        self
    }

    /// Sets FIFO mode ([`FifoMode`])
    pub fn fifo_mode(&mut self, mode: FifoMode) -> &mut Self {
        self.fifo_mode = Some(mode);
        self
    }
}
