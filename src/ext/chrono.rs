use crate::error::{error, Error};
use crate::{DateTime, Decode, Encode};
use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};

/// Read as UTC.
impl Encode for NaiveDateTime {
    fn to_date_time(&self) -> Result<DateTime, Error> {
        let year = u64::try_from(self.year()).map_err(|_| error("negative year"))?;
        DateTime::new(
            year,
            self.month() as u8,
            self.day() as u8,
            self.hour() as u8,
            self.minute() as u8,
            // A leap second reads as second 59.
            self.second() as u8,
        )
    }
}

impl<Tz: TimeZone> Encode for chrono::DateTime<Tz> {
    fn to_date_time(&self) -> Result<DateTime, Error> {
        self.naive_utc().to_date_time()
    }
}

/// Midnight UTC.
impl Encode for NaiveDate {
    fn to_date_time(&self) -> Result<DateTime, Error> {
        let year = u64::try_from(self.year()).map_err(|_| error("negative year"))?;
        DateTime::from_ymd(year, self.month() as u8, self.day() as u8)
    }
}

impl Decode for NaiveDateTime {
    fn from_date_time(date_time: DateTime) -> Result<Self, Error> {
        let year = i32::try_from(date_time.year()).map_err(|_| error("year out of range for chrono"))?;
        NaiveDate::from_ymd_opt(year, date_time.month() as u32, date_time.day() as u32)
            .and_then(|date| {
                date.and_hms_opt(
                    date_time.hour() as u32,
                    date_time.minute() as u32,
                    date_time.second() as u32,
                )
            })
            .ok_or_else(|| error("year out of range for chrono"))
    }
}

impl Decode for chrono::DateTime<Utc> {
    fn from_date_time(date_time: DateTime) -> Result<Self, Error> {
        let naive = NaiveDateTime::from_date_time(date_time)?;
        Ok(chrono::DateTime::from_naive_utc_and_offset(naive, Utc))
    }
}
