//! Raw sample to physical unit conversions

use cast::f32;

const TEMP_SENSITIVITY: f32 = 256.0;
const TEMP_ZERO_OFFSET: f32 = 25.0;
const TIMESTAMP_TICK_NS: f32 = 25000.0;

/// Acceleration in mg, +/- 2g full scale
pub fn from_fs2g_to_mg(lsb: i16) -> f32 {
    f32(lsb) * 0.061
}

/// Acceleration in mg, +/- 4g full scale
pub fn from_fs4g_to_mg(lsb: i16) -> f32 {
    f32(lsb) * 0.122
}

/// Acceleration in mg, +/- 8g full scale
pub fn from_fs8g_to_mg(lsb: i16) -> f32 {
    f32(lsb) * 0.244
}

/// Acceleration in mg, +/- 16g full scale
pub fn from_fs16g_to_mg(lsb: i16) -> f32 {
    f32(lsb) * 0.488
}

/// Temperature in Celsius
pub fn from_lsb_to_celsius(lsb: i16) -> f32 {
    f32(lsb) / TEMP_SENSITIVITY + TEMP_ZERO_OFFSET
}

/// Timestamp ticks to nanoseconds
pub fn from_lsb_to_nsec(lsb: u32) -> f32 {
    f32(lsb) * TIMESTAMP_TICK_NS
}
