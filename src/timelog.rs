use crate::calendar::DateTime;
use crate::error::{err, Error};
use crate::pack::Fields;
use bytemuck::{Pod, Zeroable};
use core::cmp::Ordering;
use core::fmt::{self, Display, Formatter};
use core::str::FromStr;

/// A 64-bit packed timestamp.
///
/// Six unsigned fields packed from the least significant bit up: second, minute, hour,
/// day - 1, month - 1 and year (see [`Fields`]). The value `0` is the "no timestamp"
/// sentinel.
///
/// The wrapped `i64` is what other systems store and exchange. Any `i64` is a `TimeLog`,
/// but only those that [`decode`](crate::decode) to a [`DateTime`] are meaningful.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct TimeLog(i64);

// Safety: TimeLog is #[repr(transparent)] over i64, which is Zeroable and Pod.
unsafe impl Zeroable for TimeLog {}
unsafe impl Pod for TimeLog {}

impl TimeLog {
    /// No timestamp.
    pub const ZERO: Self = Self(0);

    #[inline(always)]
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    #[inline(always)]
    pub const fn raw(self) -> i64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Views a column of raw values as [`TimeLog`]s without copying.
    pub fn from_raw_slice(raw: &[i64]) -> &[Self] {
        bytemuck::cast_slice(raw)
    }

    /// Views [`TimeLog`]s as their raw values without copying.
    pub fn as_raw_slice(timelogs: &[Self]) -> &[i64] {
        bytemuck::cast_slice(timelogs)
    }

    pub fn fields(self) -> Fields {
        Fields::unpack(self)
    }

    /// Packs a [`DateTime`], or returns [`TimeLog::ZERO`] if it is in year 0.
    pub fn from_date_time(date_time: &DateTime) -> Self {
        Self::try_from_date_time(date_time).unwrap_or(Self::ZERO)
    }

    pub(crate) fn try_from_date_time(date_time: &DateTime) -> Result<Self, Error> {
        let (year, month, day) = (date_time.year(), date_time.month(), date_time.day());
        // DateTime rules out month and day 0 already.
        if year == 0 || month == 0 || day == 0 {
            return err("year 0 has no packed encoding");
        }
        Ok(Fields {
            second: date_time.second() as u64,
            minute: date_time.minute() as u64,
            hour: date_time.hour() as u64,
            day: day as u64 - 1,
            month: month as u64 - 1,
            year,
        }
        .pack())
    }

    /// The calendar value this packs, or `None` for the sentinel and for fields that name
    /// no real date-time.
    pub fn to_date_time(self) -> Option<DateTime> {
        self.try_to_date_time().ok()
    }

    pub(crate) fn try_to_date_time(self) -> Result<DateTime, Error> {
        if self.is_zero() {
            return err("zero is the no-timestamp sentinel");
        }
        let fields = self.fields();
        if fields.year == 0 {
            return err("year 0 is not a timestamp");
        }
        // Unreachable: month and day are at most 15 and 31, so +1 can't wrap.
        if fields.month + 1 == 0 || fields.day + 1 == 0 {
            return err("month or day 0 is not a timestamp");
        }

        let date_time = DateTime::normalizing(
            fields.year,
            fields.month,
            fields.day + 1,
            fields.hour,
            fields.minute,
            fields.second,
        )?;

        // Anything out of range will have rolled over into another field.
        let reconciled = date_time.year() == fields.year
            && date_time.month() as u64 - 1 == fields.month
            && date_time.day() as u64 == fields.day + 1
            && date_time.hour() as u64 == fields.hour
            && date_time.minute() as u64 == fields.minute
            && date_time.second() as u64 == fields.second;
        if !reconciled {
            return err("fields do not name a real date-time");
        }
        Ok(date_time)
    }

    /// The current time, truncated to the second.
    #[cfg(feature = "now")]
    pub fn now() -> Self {
        crate::encode(&chrono::Utc::now())
    }
}

impl From<i64> for TimeLog {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl From<TimeLog> for i64 {
    fn from(timelog: TimeLog) -> Self {
        timelog.0
    }
}

impl From<DateTime> for TimeLog {
    fn from(date_time: DateTime) -> Self {
        Self::from_date_time(&date_time)
    }
}

impl TryFrom<TimeLog> for DateTime {
    type Error = Error;

    fn try_from(timelog: TimeLog) -> Result<Self, Error> {
        timelog.try_to_date_time()
    }
}

/// Unsigned order, which is chronological for every value that decodes. Years from 2^37
/// up set the sign bit, so signed order would put them first.
impl Ord for TimeLog {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.0 as u64).cmp(&(other.0 as u64))
    }
}

impl PartialOrd for TimeLog {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Writes `YYYY-MM-DDTHH:MM:SS`, or nothing if the value doesn't decode.
impl Display for TimeLog {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.to_date_time() {
            Some(date_time) => Display::fmt(&date_time, f),
            None => Ok(()),
        }
    }
}

/// Parses text the way [`encode`](crate::encode) does, but fails instead of returning
/// [`TimeLog::ZERO`].
impl FromStr for TimeLog {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        crate::try_encode(s)
    }
}
