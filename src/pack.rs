//! Layout (64 bits, least significant first):
//! [5:0]   Seconds (6 bits)
//! [11:6]  Minutes (6 bits)
//! [16:12] Hours   (5 bits)
//! [21:17] Day     (5 bits) - day of month - 1
//! [25:22] Month   (4 bits) - month - 1
//! [63:26] Year    (38 bits) - unsigned, no offset

use crate::TimeLog;

pub const SECONDS_BITS: u32 = 6;
pub const MINUTES_BITS: u32 = 6;
pub const HOURS_BITS: u32 = 5;
pub const DAY_BITS: u32 = 5;
pub const MONTH_BITS: u32 = 4;
/// Everything above the month field.
pub const YEAR_BITS: u32 = u64::BITS - YEAR_SHIFT;

pub const SECONDS_SHIFT: u32 = 0;
pub const MINUTES_SHIFT: u32 = SECONDS_SHIFT + SECONDS_BITS;
pub const HOURS_SHIFT: u32 = MINUTES_SHIFT + MINUTES_BITS;
pub const DAY_SHIFT: u32 = HOURS_SHIFT + HOURS_BITS;
pub const MONTH_SHIFT: u32 = DAY_SHIFT + DAY_BITS;
pub const YEAR_SHIFT: u32 = MONTH_SHIFT + MONTH_BITS;

pub const SECONDS_MASK: u64 = (1 << SECONDS_BITS) - 1;
pub const MINUTES_MASK: u64 = (1 << MINUTES_BITS) - 1;
pub const HOURS_MASK: u64 = (1 << HOURS_BITS) - 1;
pub const DAY_MASK: u64 = (1 << DAY_BITS) - 1;
pub const MONTH_MASK: u64 = (1 << MONTH_BITS) - 1;

/// The largest year the year field can hold.
pub const MAX_YEAR: u64 = (1 << YEAR_BITS) - 1;

/// The stored sub-fields of a [`TimeLog`], before any calendar meaning is applied.
///
/// `day` and `month` are 0-indexed (the 1st of January is `day: 0, month: 0`).
/// Nothing here is range checked: [`Fields::unpack`] yields whatever the bits say and
/// [`Fields::pack`] writes whatever it is given.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fields {
    pub second: u64,
    pub minute: u64,
    pub hour: u64,
    pub day: u64,
    pub month: u64,
    pub year: u64,
}

impl Fields {
    /// ORs each field in at its offset.
    ///
    /// Fields are not masked to their width, so an out of range value spills into the bits
    /// of the next field up (`second: 64` packs the same as `minute: 1`).
    pub fn pack(self) -> TimeLog {
        let bits = self.second << SECONDS_SHIFT
            | self.minute << MINUTES_SHIFT
            | self.hour << HOURS_SHIFT
            | self.day << DAY_SHIFT
            | self.month << MONTH_SHIFT
            | self.year << YEAR_SHIFT;
        TimeLog::from_raw(bits as i64)
    }

    /// Splits a [`TimeLog`] into its fields.
    ///
    /// The year is read from the value as unsigned, so the sign bit is its top bit.
    pub fn unpack(timelog: TimeLog) -> Self {
        let bits = timelog.raw() as u64;
        Self {
            second: (bits >> SECONDS_SHIFT) & SECONDS_MASK,
            minute: (bits >> MINUTES_SHIFT) & MINUTES_MASK,
            hour: (bits >> HOURS_SHIFT) & HOURS_MASK,
            day: (bits >> DAY_SHIFT) & DAY_MASK,
            month: (bits >> MONTH_SHIFT) & MONTH_MASK,
            year: bits >> YEAR_SHIFT,
        }
    }
}
