use crate::calendar::DateTime;
use crate::error::Error;
use crate::TimeLog;
use alloc::string::{String, ToString};

/// A value that denotes a UTC date-time, and so can be packed with [`encode`].
pub trait Encode {
    /// The UTC date-time, truncated to the second.
    fn to_date_time(&self) -> Result<DateTime, Error>;
}

/// A value that can be built from a [`DateTime`], and so can be unpacked with [`decode`].
pub trait Decode: Sized {
    fn from_date_time(date_time: DateTime) -> Result<Self, Error>;
}

impl Encode for DateTime {
    #[inline(always)]
    fn to_date_time(&self) -> Result<DateTime, Error> {
        Ok(*self)
    }
}

impl Decode for DateTime {
    #[inline(always)]
    fn from_date_time(date_time: DateTime) -> Result<Self, Error> {
        Ok(date_time)
    }
}

impl Encode for str {
    fn to_date_time(&self) -> Result<DateTime, Error> {
        crate::parse::parse_utc(self)
    }
}

impl Encode for String {
    fn to_date_time(&self) -> Result<DateTime, Error> {
        self.as_str().to_date_time()
    }
}

impl<T: Encode + ?Sized> Encode for &T {
    fn to_date_time(&self) -> Result<DateTime, Error> {
        T::to_date_time(self)
    }
}

/// Packs a `T:` [`Encode`] into a [`TimeLog`].
///
/// Returns [`TimeLog::ZERO`] if `t` has no packed encoding: unparseable text, a date
/// outside years 1 to [`MAX_YEAR`](crate::MAX_YEAR), or a value the source type itself
/// considers invalid. Use [`try_encode`] to tell that apart from a real timestamp.
pub fn encode<T: Encode + ?Sized>(t: &T) -> TimeLog {
    try_encode(t).unwrap_or(TimeLog::ZERO)
}

/// Like [`encode`], but says why `t` has no packed encoding instead of returning
/// [`TimeLog::ZERO`].
pub fn try_encode<T: Encode + ?Sized>(t: &T) -> Result<TimeLog, Error> {
    let result = t
        .to_date_time()
        .and_then(|date_time| TimeLog::try_from_date_time(&date_time));
    if let Err(e) = &result {
        tracing::trace!(reason = %e, "value has no packed encoding");
    }
    result
}

/// Unpacks a [`TimeLog`] (or its raw `i64`) into a `T:` [`Decode`].
///
/// Returns `None` for [`TimeLog::ZERO`], for year 0, for fields that don't name a real
/// date-time (the 31st of April, hour 24, month 13, ...) and for date-times `T` can't
/// hold.
pub fn decode<T: Decode>(timelog: impl Into<TimeLog>) -> Option<T> {
    try_decode(timelog).ok()
}

/// Like [`decode`], but says why there is no value.
pub fn try_decode<T: Decode>(timelog: impl Into<TimeLog>) -> Result<T, Error> {
    let timelog = timelog.into();
    let result = timelog.try_to_date_time().and_then(T::from_date_time);
    if let Err(e) = &result {
        tracing::trace!(raw = timelog.raw(), reason = %e, "timestamp does not decode");
    }
    result
}

/// Renders a [`TimeLog`] (or its raw `i64`) as `YYYY-MM-DDTHH:MM:SS`.
///
/// The year is zero padded to 4 digits and takes as many as it needs past that. There's no
/// fractional part or zone designator. Returns an empty string if the value doesn't decode.
pub fn render(timelog: impl Into<TimeLog>) -> String {
    match decode::<DateTime>(timelog) {
        Some(date_time) => date_time.to_string(),
        None => String::new(),
    }
}
