//! Register map of the IIS3DWB.
//!
//! Addresses and bit-field layouts are fixed by the device. Every field is
//! described by a [`Field`] (offset + width) and is read and written with
//! explicit masking, never through a memory overlay.

/// Device identification value returned by `WHO_AM_I`
pub const ID: u8 = 0x7B;

/// Value written to `TIMESTAMP2` to reset the timestamp counter
pub const TIMESTAMP_RESET: u8 = 0xAA;

#[allow(non_camel_case_types)]
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    PIN_CTRL = 0x02,
    FIFO_CTRL1 = 0x07,
    FIFO_CTRL2 = 0x08,
    FIFO_CTRL3 = 0x09,
    FIFO_CTRL4 = 0x0A,
    COUNTER_BDR_REG1 = 0x0B,
    COUNTER_BDR_REG2 = 0x0C,
    INT1_CTRL = 0x0D,
    INT2_CTRL = 0x0E,
    WHO_AM_I = 0x0F,
    CTRL1_XL = 0x10,
    CTRL3_C = 0x12,
    CTRL4_C = 0x13,
    CTRL5_C = 0x14,
    CTRL6_C = 0x15,
    CTRL7_C = 0x16,
    CTRL8_XL = 0x17,
    CTRL10_C = 0x19,
    ALL_INT_SRC = 0x1A,
    WAKE_UP_SRC = 0x1B,
    STATUS_REG = 0x1E,
    OUT_TEMP_L = 0x20,
    OUT_TEMP_H = 0x21,
    OUTX_L_A = 0x28,
    OUTX_H_A = 0x29,
    OUTY_L_A = 0x2A,
    OUTY_H_A = 0x2B,
    OUTZ_L_A = 0x2C,
    OUTZ_H_A = 0x2D,
    FIFO_STATUS1 = 0x3A,
    FIFO_STATUS2 = 0x3B,
    TIMESTAMP0 = 0x40,
    TIMESTAMP1 = 0x41,
    TIMESTAMP2 = 0x42,
    TIMESTAMP3 = 0x43,
    SLOPE_EN = 0x56,
    INTERRUPTS_EN = 0x58,
    WAKE_UP_THS = 0x5B,
    WAKE_UP_DUR = 0x5C,
    MD1_CFG = 0x5E,
    MD2_CFG = 0x5F,
    INTERNAL_FREQ_FINE = 0x63,
    X_OFS_USR = 0x73,
    Y_OFS_USR = 0x74,
    Z_OFS_USR = 0x75,
    FIFO_DATA_OUT_TAG = 0x78,
    FIFO_DATA_OUT_X_L = 0x79,
    FIFO_DATA_OUT_X_H = 0x7A,
    FIFO_DATA_OUT_Y_L = 0x7B,
    FIFO_DATA_OUT_Y_H = 0x7C,
    FIFO_DATA_OUT_Z_L = 0x7D,
    FIFO_DATA_OUT_Z_H = 0x7E,
}

impl Register {
    /// Address of the register on the bus
    pub fn addr(self) -> u8 {
        self as u8
    }

    /// Checks if the register is read-only
    pub fn is_read_only(self) -> bool {
        matches!(
            self,
            Register::WHO_AM_I
                | Register::ALL_INT_SRC
                | Register::WAKE_UP_SRC
                | Register::STATUS_REG
                | Register::OUT_TEMP_L
                | Register::OUT_TEMP_H
                | Register::OUTX_L_A
                | Register::OUTX_H_A
                | Register::OUTY_L_A
                | Register::OUTY_H_A
                | Register::OUTZ_L_A
                | Register::OUTZ_H_A
                | Register::FIFO_STATUS1
                | Register::FIFO_STATUS2
                | Register::TIMESTAMP0
                | Register::TIMESTAMP1
                | Register::TIMESTAMP3
                | Register::FIFO_DATA_OUT_TAG
                | Register::FIFO_DATA_OUT_X_L
                | Register::FIFO_DATA_OUT_X_H
                | Register::FIFO_DATA_OUT_Y_L
                | Register::FIFO_DATA_OUT_Y_H
                | Register::FIFO_DATA_OUT_Z_L
                | Register::FIFO_DATA_OUT_Z_H
        )
    }
}

/// Bit numbering convention used to declare a [`Field`]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitOrder {
    /// Bit 0 is the least significant bit of the register
    Lsb0,
    /// Bit 0 is the most significant bit of the register
    Msb0,
}

/// A bit-field inside an 8-bit register.
///
/// The descriptor always stores the physical shift from the least
/// significant bit, whichever numbering it was declared with.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Field {
    shift: u8,
    width: u8,
}

impl Field {
    /// Declares a field starting at bit `pos` numbered with `order`,
    /// `width` bits wide (towards the MSB for `Lsb0`, towards the LSB for
    /// `Msb0`).
    pub const fn new(order: BitOrder, pos: u8, width: u8) -> Self {
        assert!(width >= 1 && width <= 8);
        assert!(pos + width <= 8);
        let shift = match order {
            BitOrder::Lsb0 => pos,
            BitOrder::Msb0 => 8 - pos - width,
        };
        Field { shift, width }
    }

    /// Field declared with LSB-0 numbering
    pub const fn lsb0(pos: u8, width: u8) -> Self {
        Self::new(BitOrder::Lsb0, pos, width)
    }

    /// Field declared with MSB-0 numbering
    pub const fn msb0(pos: u8, width: u8) -> Self {
        Self::new(BitOrder::Msb0, pos, width)
    }

    /// Shift of the field from bit 0 (LSB)
    pub const fn shift(self) -> u8 {
        self.shift
    }

    /// Width of the field in bits
    pub const fn width(self) -> u8 {
        self.width
    }

    /// Largest value the field can hold
    pub const fn max(self) -> u8 {
        ((1u16 << self.width) - 1) as u8
    }

    /// Mask of the field bits inside the register
    pub const fn mask(self) -> u8 {
        self.max() << self.shift
    }

    /// Extracts the field from a register value
    pub const fn get(self, reg: u8) -> u8 {
        (reg & self.mask()) >> self.shift
    }

    /// Replaces the field in `reg`, leaving every other bit untouched.
    /// Bits of `value` above the field width are dropped.
    pub const fn set(self, reg: u8, value: u8) -> u8 {
        (reg & !self.mask()) | ((value & self.max()) << self.shift)
    }

    /// Extracts a single-bit field as a flag
    pub const fn is_set(self, reg: u8) -> bool {
        self.get(reg) != 0
    }
}

// PIN_CTRL
pub(crate) const SDO_PU_EN: Field = Field::lsb0(6, 1);

// FIFO_CTRL1
pub(crate) const WTM_LOW: Field = Field::lsb0(0, 8);

// FIFO_CTRL2
pub(crate) const WTM_HIGH: Field = Field::lsb0(0, 1);
pub(crate) const STOP_ON_WTM: Field = Field::lsb0(7, 1);

// FIFO_CTRL3
pub(crate) const BDR_XL: Field = Field::lsb0(0, 4);

// FIFO_CTRL4
pub(crate) const FIFO_MODE: Field = Field::lsb0(0, 3);
pub(crate) const ODR_T_BATCH: Field = Field::lsb0(4, 2);
pub(crate) const ODR_TS_BATCH: Field = Field::lsb0(6, 2);

// COUNTER_BDR_REG1
pub(crate) const CNT_BDR_TH_HIGH: Field = Field::lsb0(0, 3);
pub(crate) const RST_COUNTER_BDR: Field = Field::lsb0(6, 1);
pub(crate) const DATAREADY_PULSED: Field = Field::lsb0(7, 1);

// COUNTER_BDR_REG2
pub(crate) const CNT_BDR_TH_LOW: Field = Field::lsb0(0, 8);

// INT1_CTRL
pub(crate) const INT1_DRDY_XL: Field = Field::lsb0(0, 1);
pub(crate) const INT1_BOOT: Field = Field::lsb0(2, 1);
pub(crate) const INT1_FIFO_TH: Field = Field::lsb0(3, 1);
pub(crate) const INT1_FIFO_OVR: Field = Field::lsb0(4, 1);
pub(crate) const INT1_FIFO_FULL: Field = Field::lsb0(5, 1);
pub(crate) const INT1_CNT_BDR: Field = Field::lsb0(6, 1);

// INT2_CTRL
pub(crate) const INT2_DRDY_XL: Field = Field::lsb0(0, 1);
pub(crate) const INT2_DRDY_TEMP: Field = Field::lsb0(2, 1);
pub(crate) const INT2_FIFO_TH: Field = Field::lsb0(3, 1);
pub(crate) const INT2_FIFO_OVR: Field = Field::lsb0(4, 1);
pub(crate) const INT2_FIFO_FULL: Field = Field::lsb0(5, 1);
pub(crate) const INT2_CNT_BDR: Field = Field::lsb0(6, 1);

// CTRL1_XL
pub(crate) const LPF2_XL_EN: Field = Field::lsb0(1, 1);
pub(crate) const FS_XL: Field = Field::lsb0(2, 2);
pub(crate) const XL_EN: Field = Field::lsb0(5, 3);

// CTRL3_C
pub(crate) const SW_RESET: Field = Field::lsb0(0, 1);
pub(crate) const IF_INC: Field = Field::lsb0(2, 1);
pub(crate) const SIM: Field = Field::lsb0(3, 1);
pub(crate) const PP_OD: Field = Field::lsb0(4, 1);
pub(crate) const H_LACTIVE: Field = Field::lsb0(5, 1);
pub(crate) const BDU: Field = Field::lsb0(6, 1);
pub(crate) const BOOT: Field = Field::lsb0(7, 1);

// CTRL4_C
pub(crate) const ONE_AX_TO_3REGOUT: Field = Field::lsb0(0, 1);
pub(crate) const I2C_DISABLE: Field = Field::lsb0(2, 1);
pub(crate) const DRDY_MASK: Field = Field::lsb0(3, 1);
pub(crate) const INT2_ON_INT1: Field = Field::lsb0(5, 1);

// CTRL5_C
pub(crate) const ST_XL: Field = Field::lsb0(0, 2);
pub(crate) const ROUNDING: Field = Field::lsb0(5, 2);

// CTRL6_C
pub(crate) const XL_AXIS_SEL: Field = Field::lsb0(0, 2);
pub(crate) const USR_OFF_W: Field = Field::lsb0(3, 1);

// CTRL7_C
pub(crate) const USR_OFF_ON_OUT: Field = Field::lsb0(1, 1);

// CTRL8_XL
pub(crate) const FDS: Field = Field::lsb0(2, 1);
pub(crate) const FASTSETTL_MODE_XL: Field = Field::lsb0(3, 1);
pub(crate) const HP_REF_MODE_XL: Field = Field::lsb0(4, 1);
pub(crate) const HPCF_XL: Field = Field::lsb0(5, 3);

// CTRL10_C
pub(crate) const TIMESTAMP_EN: Field = Field::lsb0(5, 1);

// ALL_INT_SRC
pub(crate) const ALL_WU_IA: Field = Field::lsb0(1, 1);
pub(crate) const ALL_SLEEP_CHANGE: Field = Field::lsb0(5, 1);
pub(crate) const TIMESTAMP_ENDCOUNT: Field = Field::lsb0(7, 1);

// WAKE_UP_SRC
pub(crate) const Z_WU: Field = Field::lsb0(0, 1);
pub(crate) const Y_WU: Field = Field::lsb0(1, 1);
pub(crate) const X_WU: Field = Field::lsb0(2, 1);
pub(crate) const WU_IA: Field = Field::lsb0(3, 1);
pub(crate) const SLEEP_STATE_IA: Field = Field::lsb0(4, 1);
pub(crate) const SLEEP_CHANGE_IA: Field = Field::lsb0(6, 1);

// STATUS_REG
pub(crate) const XLDA: Field = Field::lsb0(0, 1);
pub(crate) const TDA: Field = Field::lsb0(2, 1);

// FIFO_STATUS2
pub(crate) const DIFF_FIFO_HIGH: Field = Field::lsb0(0, 2);
pub(crate) const FIFO_OVR_LATCHED: Field = Field::lsb0(3, 1);
pub(crate) const COUNTER_BDR_IA: Field = Field::lsb0(4, 1);
pub(crate) const FIFO_FULL_IA: Field = Field::lsb0(5, 1);
pub(crate) const FIFO_OVR_IA: Field = Field::lsb0(6, 1);
pub(crate) const FIFO_WTM_IA: Field = Field::lsb0(7, 1);

// SLOPE_EN
pub(crate) const LIR: Field = Field::lsb0(0, 1);
pub(crate) const SLOPE_FDS: Field = Field::lsb0(4, 1);
pub(crate) const SLEEP_STATUS_ON_INT: Field = Field::lsb0(5, 1);

// INTERRUPTS_EN
pub(crate) const INTERRUPTS_ENABLE: Field = Field::lsb0(7, 1);

// WAKE_UP_THS
pub(crate) const WK_THS: Field = Field::lsb0(0, 6);
pub(crate) const USR_OFF_ON_WU: Field = Field::lsb0(6, 1);

// WAKE_UP_DUR
pub(crate) const SLEEP_DUR: Field = Field::lsb0(0, 4);
pub(crate) const WAKE_THS_W: Field = Field::lsb0(4, 1);
pub(crate) const WAKE_DUR: Field = Field::lsb0(5, 2);

// MD1_CFG
pub(crate) const INT1_WU: Field = Field::lsb0(5, 1);
pub(crate) const INT1_SLEEP_CHANGE: Field = Field::lsb0(7, 1);

// MD2_CFG
pub(crate) const INT2_TIMESTAMP: Field = Field::lsb0(0, 1);
pub(crate) const INT2_WU: Field = Field::lsb0(5, 1);
pub(crate) const INT2_SLEEP_CHANGE: Field = Field::lsb0(7, 1);

// FIFO_DATA_OUT_TAG, numbered from the MSB as in the FIFO wire format
pub(crate) const TAG_SENSOR: Field = Field::msb0(0, 5);
pub(crate) const TAG_CNT: Field = Field::msb0(5, 2);
pub(crate) const TAG_PARITY: Field = Field::msb0(7, 1);
