use crate::error::{error, Error};
use crate::{DateTime, Decode, Encode};
use time::{Date, Month, OffsetDateTime, PrimitiveDateTime};

/// Read as UTC.
impl Encode for PrimitiveDateTime {
    fn to_date_time(&self) -> Result<DateTime, Error> {
        let year = u64::try_from(self.year()).map_err(|_| error("negative year"))?;
        DateTime::new(
            year,
            u8::from(self.month()),
            self.day(),
            self.hour(),
            self.minute(),
            self.second(),
        )
    }
}

impl Encode for OffsetDateTime {
    fn to_date_time(&self) -> Result<DateTime, Error> {
        DateTime::from_unix_seconds(self.unix_timestamp())
    }
}

impl Decode for PrimitiveDateTime {
    fn from_date_time(date_time: DateTime) -> Result<Self, Error> {
        let year = i32::try_from(date_time.year()).map_err(|_| error("year out of range for time"))?;
        let month = Month::try_from(date_time.month()).map_err(|_| error("month out of range"))?;
        Date::from_calendar_date(year, month, date_time.day())
            .and_then(|date| {
                date.with_hms(date_time.hour(), date_time.minute(), date_time.second())
            })
            .map_err(|_| error("year out of range for time"))
    }
}

/// In UTC.
impl Decode for OffsetDateTime {
    fn from_date_time(date_time: DateTime) -> Result<Self, Error> {
        OffsetDateTime::from_unix_timestamp(date_time.unix_seconds())
            .map_err(|_| error("year out of range for time"))
    }
}
