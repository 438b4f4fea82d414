use crate::error::{error, Error};
use crate::{DateTime, Decode, Encode};
use jiff::{civil, Timestamp};

/// Read as UTC.
impl Encode for civil::DateTime {
    fn to_date_time(&self) -> Result<DateTime, Error> {
        let year = u64::try_from(self.year()).map_err(|_| error("negative year"))?;
        DateTime::new(
            year,
            self.month() as u8,
            self.day() as u8,
            self.hour() as u8,
            self.minute() as u8,
            self.second() as u8,
        )
    }
}

impl Decode for civil::DateTime {
    fn from_date_time(date_time: DateTime) -> Result<Self, Error> {
        let year = i16::try_from(date_time.year()).map_err(|_| error("year out of range for jiff"))?;
        civil::DateTime::new(
            year,
            date_time.month() as i8,
            date_time.day() as i8,
            date_time.hour() as i8,
            date_time.minute() as i8,
            date_time.second() as i8,
            0,
        )
        .map_err(|_| error("year out of range for jiff"))
    }
}

impl Encode for Timestamp {
    fn to_date_time(&self) -> Result<DateTime, Error> {
        // as_second truncates toward zero, round down instead.
        let mut seconds = self.as_second();
        if self.subsec_nanosecond() < 0 {
            seconds -= 1;
        }
        DateTime::from_unix_seconds(seconds)
    }
}

impl Decode for Timestamp {
    fn from_date_time(date_time: DateTime) -> Result<Self, Error> {
        Timestamp::from_second(date_time.unix_seconds())
            .map_err(|_| error("year out of range for jiff"))
    }
}

#[cfg(test)]
mod tests {
    use crate::{DateTime, TimeLog};
    use alloc::vec::Vec;
    use jiff::{civil, Timestamp};

    #[test]
    fn test_jiff_civil() {
        let dates = [
            civil::DateTime::new(2025, 5, 13, 15, 30, 45, 0).unwrap(),
            civil::DateTime::new(1, 1, 1, 0, 0, 0, 0).unwrap(),
            civil::DateTime::new(9999, 12, 31, 23, 59, 59, 0).unwrap(),
        ];
        for x in dates {
            let decoded: civil::DateTime = crate::decode(crate::encode(&x)).unwrap();
            assert_eq!(x, decoded);
        }

        let precise = civil::DateTime::new(2025, 5, 13, 15, 30, 45, 500_000_000).unwrap();
        assert_eq!(crate::render(crate::encode(&precise)), "2025-05-13T15:30:45");

        let bce = civil::DateTime::new(-1, 1, 1, 0, 0, 0, 0).unwrap();
        assert_eq!(crate::encode(&bce), TimeLog::ZERO);

        let far = crate::encode(&DateTime::from_ymd(10_000, 1, 1).unwrap());
        assert!(crate::decode::<civil::DateTime>(far).is_none());
    }

    #[test]
    fn test_jiff_timestamp() {
        let ts = Timestamp::from_second(1_747_150_245).unwrap();
        let timelog = crate::encode(&ts);
        assert_eq!(crate::render(timelog), "2025-05-13T15:30:45");
        assert_eq!(crate::decode::<Timestamp>(timelog), Some(ts));

        let before_epoch = Timestamp::new(-1, -500_000_000).unwrap();
        assert_eq!(
            crate::render(crate::encode(&before_epoch)),
            "1969-12-31T23:59:58"
        );
    }

    #[test]
    fn test_jiff_random() {
        let dates: Vec<civil::DateTime> = crate::random_data(1000)
            .into_iter()
            .map(|(y, m, d, h, mi, s): (u16, u8, u8, u8, u8, u8)| {
                civil::DateTime::new(
                    (y % 9999) as i16 + 1,
                    (m % 12) as i8 + 1,
                    (d % 28) as i8 + 1,
                    (h % 24) as i8,
                    (mi % 60) as i8,
                    (s % 60) as i8,
                    0,
                )
                .unwrap()
            })
            .collect();

        for x in dates {
            let decoded: civil::DateTime = crate::decode(crate::encode(&x)).unwrap();
            assert_eq!(x, decoded);
        }
    }
}
