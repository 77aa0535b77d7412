//! FIFO configuration, status and record decoding
//!
//! The FIFO is drained through `FIFO_DATA_OUT_TAG`: every entry is 7 bytes,
//! a tag byte followed by a 6 byte payload, and a burst read returns
//! consecutive entries. The tag byte carries the sensor tag (bits 7-3), a
//! rolling counter (bits 2-1) and a parity bit (bit 0).

use core::slice::ChunksExact;

use cast::u16;

use crate::conf::{FifoMode, RegisterField, TempBatch, TimestampBatch, XlBatch};
use crate::register::{self, Register};
use crate::{Error, Iis3dwb, RegisterBus};

pub use crate::conf::FifoTag;

/// Size in bytes of one FIFO entry
pub const RECORD_LEN: usize = 7;

/// FIFO status, read in a single burst from `FIFO_STATUS1` and `FIFO_STATUS2`
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FifoStatus {
    /// Number of unread entries (10 bits)
    pub fifo_level: u16,
    /// Batch counter threshold reached
    pub fifo_bdr: bool,
    /// FIFO full
    pub fifo_full: bool,
    /// FIFO overrun, current or latched
    pub fifo_ovr: bool,
    /// Watermark reached
    pub fifo_th: bool,
}

/// Payload of a FIFO entry, interpreted according to its tag
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FifoSample {
    /// Raw accelerometer sample, X Y Z
    Acceleration([i16; 3]),
    /// Raw temperature sample
    Temperature(i16),
    /// Timestamp, 1 LSB = 25 us
    Timestamp(u32),
}

/// One raw FIFO entry: tag byte followed by 6 payload bytes
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FifoRecord(pub [u8; RECORD_LEN]);

impl FifoRecord {
    /// Sensor that produced the entry. Unknown tags read as
    /// [`FifoTag::Accelerometer`].
    pub fn tag(&self) -> FifoTag {
        FifoTag::from_value(self.raw_tag())
    }

    /// Sensor tag as stored in the tag byte (5 bits)
    pub fn raw_tag(&self) -> u8 {
        register::TAG_SENSOR.get(self.0[0])
    }

    /// Rolling 2-bit counter of the batch the entry belongs to
    pub fn tag_counter(&self) -> u8 {
        register::TAG_CNT.get(self.0[0])
    }

    /// Parity bit of the tag byte
    pub fn tag_parity(&self) -> bool {
        register::TAG_PARITY.is_set(self.0[0])
    }

    /// The 6 payload bytes
    pub fn payload(&self) -> &[u8] {
        &self.0[1..]
    }

    /// Payload decoded according to [`FifoRecord::tag`]
    pub fn sample(&self) -> FifoSample {
        let p = self.payload();
        let word = |i: usize| (u16(p[i]) | (u16(p[i + 1]) << 8)) as i16;

        match self.tag() {
            FifoTag::Accelerometer => FifoSample::Acceleration([word(0), word(2), word(4)]),
            FifoTag::Temperature => FifoSample::Temperature(word(0)),
            FifoTag::Timestamp => {
                FifoSample::Timestamp(u32::from_le_bytes([p[0], p[1], p[2], p[3]]))
            }
        }
    }
}

/// Iterator over the entries of a FIFO burst
#[derive(Clone, Debug)]
pub struct FifoRecords<'a> {
    chunks: ChunksExact<'a, u8>,
}

impl<'a> Iterator for FifoRecords<'a> {
    type Item = FifoRecord;

    fn next(&mut self) -> Option<FifoRecord> {
        self.chunks.next().map(|chunk| {
            let mut raw = [0; RECORD_LEN];
            raw.copy_from_slice(chunk);
            FifoRecord(raw)
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl<'a> ExactSizeIterator for FifoRecords<'a> {}

/// Splits a FIFO burst into entries. Trailing bytes that do not form a whole
/// entry are ignored.
pub fn decode(bytes: &[u8]) -> FifoRecords<'_> {
    FifoRecords {
        chunks: bytes.chunks_exact(RECORD_LEN),
    }
}

impl<B, T> Iis3dwb<B, T>
where
    B: RegisterBus,
{
    /// FIFO watermark threshold (9 bits), 1 LSB = 1 entry.
    ///
    /// The low byte goes to `FIFO_CTRL1` first, then bit 8 to `FIFO_CTRL2`.
    pub fn fifo_watermark_set(&mut self, wtm: u16) -> Result<(), Error<B::Error>> {
        let wtm = wtm & 0x01FF;
        let fifo_ctrl2 = self.read_register(Register::FIFO_CTRL2)?;

        self.write_register(Register::FIFO_CTRL1, (wtm & 0x00FF) as u8)?;
        self.write_register(
            Register::FIFO_CTRL2,
            register::WTM_HIGH.set(fifo_ctrl2, (wtm >> 8) as u8),
        )
    }

    /// FIFO watermark threshold
    pub fn fifo_watermark_get(&mut self) -> Result<u16, Error<B::Error>> {
        let low = self.read_field(Register::FIFO_CTRL1, register::WTM_LOW)?;
        let high = self.read_field(Register::FIFO_CTRL2, register::WTM_HIGH)?;

        Ok((u16(high) << 8) + u16(low))
    }

    /// Limits the FIFO depth to the watermark threshold
    pub fn fifo_stop_on_wtm_set(&mut self, enable: bool) -> Result<(), Error<B::Error>> {
        self.write_flag(Register::FIFO_CTRL2, register::STOP_ON_WTM, enable)
    }

    /// FIFO depth limited to the watermark threshold
    pub fn fifo_stop_on_wtm_get(&mut self) -> Result<bool, Error<B::Error>> {
        self.read_flag(Register::FIFO_CTRL2, register::STOP_ON_WTM)
    }

    /// Accelerometer batch data rate
    pub fn fifo_xl_batch_set(&mut self, batch: XlBatch) -> Result<(), Error<B::Error>> {
        self.write_register_with_mask(batch)
    }

    /// Accelerometer batch data rate
    pub fn fifo_xl_batch_get(&mut self) -> Result<XlBatch, Error<B::Error>> {
        self.read_register_field()
    }

    /// FIFO mode
    pub fn fifo_mode_set(&mut self, mode: FifoMode) -> Result<(), Error<B::Error>> {
        self.write_register_with_mask(mode)
    }

    /// FIFO mode
    pub fn fifo_mode_get(&mut self) -> Result<FifoMode, Error<B::Error>> {
        self.read_register_field()
    }

    /// Temperature batch data rate
    pub fn fifo_temp_batch_set(&mut self, batch: TempBatch) -> Result<(), Error<B::Error>> {
        self.write_register_with_mask(batch)
    }

    /// Temperature batch data rate
    pub fn fifo_temp_batch_get(&mut self) -> Result<TempBatch, Error<B::Error>> {
        self.read_register_field()
    }

    /// Timestamp decimation
    pub fn fifo_timestamp_batch_set(&mut self, batch: TimestampBatch) -> Result<(), Error<B::Error>> {
        self.write_register_with_mask(batch)
    }

    /// Timestamp decimation
    pub fn fifo_timestamp_batch_get(&mut self) -> Result<TimestampBatch, Error<B::Error>> {
        self.read_register_field()
    }

    /// Resets the internal batch event counter
    pub fn rst_batch_counter_set(&mut self, enable: bool) -> Result<(), Error<B::Error>> {
        self.write_flag(Register::COUNTER_BDR_REG1, register::RST_COUNTER_BDR, enable)
    }

    /// Batch event counter reset pending
    pub fn rst_batch_counter_get(&mut self) -> Result<bool, Error<B::Error>> {
        self.read_flag(Register::COUNTER_BDR_REG1, register::RST_COUNTER_BDR)
    }

    /// Batch event counter threshold (11 bits).
    ///
    /// Bits 10-8 go to `COUNTER_BDR_REG1` first, then the low byte to
    /// `COUNTER_BDR_REG2`.
    pub fn batch_counter_threshold_set(&mut self, th: u16) -> Result<(), Error<B::Error>> {
        let th = th & 0x07FF;

        self.write_field(
            Register::COUNTER_BDR_REG1,
            register::CNT_BDR_TH_HIGH,
            (th >> 8) as u8,
        )?;
        self.write_register(Register::COUNTER_BDR_REG2, (th & 0x00FF) as u8)
    }

    /// Batch event counter threshold
    pub fn batch_counter_threshold_get(&mut self) -> Result<u16, Error<B::Error>> {
        let high = self.read_field(Register::COUNTER_BDR_REG1, register::CNT_BDR_TH_HIGH)?;
        let low = self.read_field(Register::COUNTER_BDR_REG2, register::CNT_BDR_TH_LOW)?;

        Ok((u16(high) << 8) + u16(low))
    }

    /// Number of unread entries in the FIFO (10 bits)
    pub fn fifo_data_level_get(&mut self) -> Result<u16, Error<B::Error>> {
        let low = self.read_register(Register::FIFO_STATUS1)?;
        let high = self.read_field(Register::FIFO_STATUS2, register::DIFF_FIFO_HIGH)?;

        Ok((u16(high) << 8) + u16(low))
    }

    /// FIFO level and flags
    pub fn fifo_status_get(&mut self) -> Result<FifoStatus, Error<B::Error>> {
        let mut buffer = [0; 2];
        self.read_registers(Register::FIFO_STATUS1, &mut buffer)?;
        let [status1, status2] = buffer;

        Ok(FifoStatus {
            fifo_level: (u16(register::DIFF_FIFO_HIGH.get(status2)) << 8) + u16(status1),
            fifo_bdr: register::COUNTER_BDR_IA.is_set(status2),
            fifo_full: register::FIFO_FULL_IA.is_set(status2),
            fifo_ovr: register::FIFO_OVR_IA.is_set(status2)
                || register::FIFO_OVR_LATCHED.is_set(status2),
            fifo_th: register::FIFO_WTM_IA.is_set(status2),
        })
    }

    /// Reads one FIFO entry
    pub fn fifo_out_raw_get(&mut self) -> Result<FifoRecord, Error<B::Error>> {
        let mut record = FifoRecord::default();
        self.read_registers(Register::FIFO_DATA_OUT_TAG, &mut record.0)?;
        Ok(record)
    }

    /// Reads as many whole entries as fit in `buffer` in a single burst.
    ///
    /// The caller is expected to size `buffer` from
    /// [`Iis3dwb::fifo_data_level_get`]; reading past the available level
    /// returns stale entries.
    pub fn fifo_out_multi_raw_get<'a>(
        &mut self,
        buffer: &'a mut [u8],
    ) -> Result<FifoRecords<'a>, Error<B::Error>> {
        let len = buffer.len() / RECORD_LEN * RECORD_LEN;
        let buffer = &mut buffer[..len];

        if len == 0 {
            self.bus()?;
        } else {
            self.read_registers(Register::FIFO_DATA_OUT_TAG, buffer)?;
        }

        Ok(decode(buffer))
    }

    /// Sensor that produced the next FIFO entry
    pub fn fifo_sensor_tag_get(&mut self) -> Result<FifoTag, Error<B::Error>> {
        self.read_register_field()
    }
}
