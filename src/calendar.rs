use crate::error::{err, error, Error};
use crate::pack::MAX_YEAR;
use core::fmt::{self, Display, Formatter};
use core::str::FromStr;

const SECONDS_PER_DAY: i128 = 86_400;
const DAYS_PER_ERA: i128 = 146_097;
// Days from 0000-03-01 to 1970-01-01.
const UNIX_EPOCH_DAYS: i128 = 719_468;

/// Whether `year` has a February 29th in the proleptic Gregorian calendar.
pub fn is_leap_year(year: u64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// The number of days in `month` (1-12) of `year`, or 0 if `month` is not a month.
pub fn days_in_month(year: u64, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// A civil date-time in UTC, to the second.
///
/// Always a real date: months are 1-12, days exist in their month, and times are within
/// `00:00:00`-`23:59:59`. Years run from 0 to [`MAX_YEAR`](crate::MAX_YEAR). Year 0 is a
/// valid date but has no packed encoding.
///
/// Fields are declared most significant first, so the derived [`Ord`] is chronological.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime {
    year: u64,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
}

impl DateTime {
    /// Midnight, 1st of January, year 1.
    pub const MIN: Self = Self {
        year: 1,
        month: 1,
        day: 1,
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// The last second that fits in a packed timestamp.
    pub const MAX: Self = Self {
        year: MAX_YEAR,
        month: 12,
        day: 31,
        hour: 23,
        minute: 59,
        second: 59,
    };

    pub fn new(
        year: u64,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, Error> {
        if year > MAX_YEAR {
            return err("year does not fit in 38 bits");
        }
        if !(1..=12).contains(&month) {
            return err("month out of range");
        }
        if day == 0 || day > days_in_month(year, month) {
            return err("day out of range for month");
        }
        if hour > 23 || minute > 59 || second > 59 {
            return err("time out of range");
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Midnight of the given date.
    pub fn from_ymd(year: u64, month: u8, day: u8) -> Result<Self, Error> {
        Self::new(year, month, day, 0, 0, 0)
    }

    pub fn year(&self) -> u64 {
        self.year
    }

    /// 1-12.
    pub fn month(&self) -> u8 {
        self.month
    }

    /// 1-31.
    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> u8 {
        self.second
    }

    /// Seconds since 1970-01-01T00:00:00, negative before it.
    pub fn unix_seconds(&self) -> i64 {
        // Fits: MAX is about 8.7e18 seconds after the epoch.
        self.seconds_since_epoch() as i64
    }

    /// The date-time `seconds` after 1970-01-01T00:00:00.
    ///
    /// Fails before year 0 and after [`DateTime::MAX`].
    pub fn from_unix_seconds(seconds: i64) -> Result<Self, Error> {
        let (year, month, day, hour, minute, second) = split_seconds(seconds as i128);
        if year < 0 {
            return err("before year 0");
        }
        Self::new(year as u64, month, day, hour, minute, second)
    }

    /// Builds a date-time the way calendar libraries that accept out of range fields do:
    /// every field is added on top of the start of `year`, so excess days spill into the
    /// next month and a 0-indexed `month0` of 12 or more spills into the next year.
    ///
    /// The result only equals the input fields when they were already in range, which is
    /// what [`decode`](crate::decode) relies on to catch impossible dates.
    pub fn normalizing(
        year: u64,
        month0: u64,
        day: u64,
        hour: u64,
        minute: u64,
        second: u64,
    ) -> Result<Self, Error> {
        let year = year as i128 + (month0 / 12) as i128;
        let month = (month0 % 12) as u8 + 1;
        let days = days_from_civil(year, month, 1) + day as i128 - 1;
        let seconds = days * SECONDS_PER_DAY
            + hour as i128 * 3600
            + minute as i128 * 60
            + second as i128;

        let (year, month, day, hour, minute, second) = split_seconds(seconds);
        let year = u64::try_from(year).map_err(|_| error("year out of range"))?;
        Self::new(year, month, day, hour, minute, second)
    }

    fn seconds_since_epoch(&self) -> i128 {
        days_from_civil(self.year as i128, self.month, self.day) * SECONDS_PER_DAY
            + self.hour as i128 * 3600
            + self.minute as i128 * 60
            + self.second as i128
    }
}

fn split_seconds(seconds: i128) -> (i128, u8, u8, u8, u8, u8) {
    let days = seconds.div_euclid(SECONDS_PER_DAY);
    let of_day = seconds.rem_euclid(SECONDS_PER_DAY);
    let (year, month, day) = civil_from_days(days);
    (
        year,
        month,
        day,
        (of_day / 3600) as u8,
        (of_day % 3600 / 60) as u8,
        (of_day % 60) as u8,
    )
}

/// Days since 1970-01-01 (Howard Hinnant's `days_from_civil`).
fn days_from_civil(year: i128, month: u8, day: u8) -> i128 {
    let month = month as i128;
    let year = if month <= 2 { year - 1 } else { year };
    let era = year.div_euclid(400);
    let yoe = year.rem_euclid(400); // [0, 399]
    let doy = (153 * (if month > 2 { month - 3 } else { month + 9 }) + 2) / 5 + day as i128 - 1; // [0, 365]
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]
    era * DAYS_PER_ERA + doe - UNIX_EPOCH_DAYS
}

/// Inverse of [`days_from_civil`].
fn civil_from_days(days: i128) -> (i128, u8, u8) {
    let z = days + UNIX_EPOCH_DAYS;
    let era = z.div_euclid(DAYS_PER_ERA);
    let doe = z.rem_euclid(DAYS_PER_ERA); // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365; // [0, 399]
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11]
    let day = (doy - (153 * mp + 2) / 5 + 1) as u8; // [1, 31]
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8; // [1, 12]
    let year = yoe + era * 400;
    (if month <= 2 { year + 1 } else { year }, month, day)
}

/// `YYYY-MM-DDTHH:MM:SS`, with the year padded to 4 digits.
impl Display for DateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Parses exactly what [`Display`] writes. See [`TimeLog`](crate::TimeLog)'s `FromStr`
/// for a lenient parser.
impl FromStr for DateTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let (date, time) = s.split_once('T').ok_or_else(|| error("expected 'T'"))?;
        // The year may contain no '-' so split from the right.
        let mut date_parts = date.rsplitn(3, '-');
        let day = date_parts.next();
        let month = date_parts.next();
        let year = date_parts.next();
        let (Some(year), Some(month), Some(day)) = (year, month, day) else {
            return err("expected YYYY-MM-DD");
        };
        if year.len() < 4 {
            return err("year has fewer than 4 digits");
        }
        if year.len() > 4 && year.starts_with('0') {
            return err("year has extra zero padding");
        }

        let mut time_parts = time.splitn(3, ':');
        let (Some(hour), Some(minute), Some(second)) =
            (time_parts.next(), time_parts.next(), time_parts.next())
        else {
            return err("expected HH:MM:SS");
        };

        Self::new(
            parse_digits(year)?,
            two_digits(month)?,
            two_digits(day)?,
            two_digits(hour)?,
            two_digits(minute)?,
            two_digits(second)?,
        )
    }
}

fn parse_digits(s: &str) -> Result<u64, Error> {
    // u64::from_str also takes a leading '+'.
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return err("expected digits");
    }
    s.parse().map_err(|_| error("number too large"))
}

fn two_digits(s: &str) -> Result<u8, Error> {
    if s.len() != 2 {
        return err("expected 2 digits");
    }
    Ok(parse_digits(s)? as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(is_leap_year(0));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2025));
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2100, 2), 28);
        assert_eq!(days_in_month(2025, 4), 30);
        assert_eq!(days_in_month(2025, 13), 0);
    }

    #[test]
    fn new_validates() {
        assert!(DateTime::new(2025, 5, 13, 15, 30, 45).is_ok());
        assert!(DateTime::new(0, 1, 1, 0, 0, 0).is_ok());
        assert!(DateTime::new(MAX_YEAR, 12, 31, 23, 59, 59).is_ok());
        assert!(DateTime::new(MAX_YEAR + 1, 1, 1, 0, 0, 0).is_err());
        assert!(DateTime::new(2025, 0, 1, 0, 0, 0).is_err());
        assert!(DateTime::new(2025, 13, 1, 0, 0, 0).is_err());
        assert!(DateTime::new(2025, 1, 0, 0, 0, 0).is_err());
        assert!(DateTime::new(2025, 4, 31, 0, 0, 0).is_err());
        assert!(DateTime::new(2025, 2, 29, 0, 0, 0).is_err());
        assert!(DateTime::new(2024, 2, 29, 0, 0, 0).is_ok());
        assert!(DateTime::new(2025, 1, 1, 24, 0, 0).is_err());
        assert!(DateTime::new(2025, 1, 1, 0, 60, 0).is_err());
        assert!(DateTime::new(2025, 1, 1, 0, 0, 60).is_err());
    }

    #[test]
    fn unix_seconds() {
        let epoch = DateTime::from_ymd(1970, 1, 1).unwrap();
        assert_eq!(epoch.unix_seconds(), 0);
        let dt = DateTime::new(2025, 5, 13, 15, 30, 45).unwrap();
        assert_eq!(dt.unix_seconds(), 1_747_150_245);
        assert_eq!(DateTime::from_unix_seconds(1_747_150_245), Ok(dt));
        assert_eq!(
            DateTime::from_unix_seconds(-1),
            DateTime::new(1969, 12, 31, 23, 59, 59)
        );
        assert_eq!(DateTime::from_unix_seconds(-62_135_596_800), Ok(DateTime::MIN));
        assert_eq!(
            DateTime::from_unix_seconds(DateTime::MAX.unix_seconds()),
            Ok(DateTime::MAX)
        );
        assert!(DateTime::from_unix_seconds(DateTime::MAX.unix_seconds() + 1).is_err());
        assert!(DateTime::from_unix_seconds(i64::MIN).is_err());
    }

    #[test]
    fn normalizing_rolls_over() {
        let april_31 = DateTime::normalizing(2025, 3, 31, 0, 0, 0).unwrap();
        assert_eq!(april_31, DateTime::from_ymd(2025, 5, 1).unwrap());

        let month_12 = DateTime::normalizing(2025, 12, 1, 0, 0, 0).unwrap();
        assert_eq!(month_12, DateTime::from_ymd(2026, 1, 1).unwrap());

        let hour_24 = DateTime::normalizing(2025, 11, 31, 24, 0, 0).unwrap();
        assert_eq!(hour_24, DateTime::from_ymd(2026, 1, 1).unwrap());

        let exact = DateTime::normalizing(1, 0, 1, 0, 0, 0).unwrap();
        assert_eq!(exact, DateTime::MIN);

        let leap = DateTime::normalizing(2024, 1, 29, 23, 59, 59).unwrap();
        assert_eq!(leap, DateTime::new(2024, 2, 29, 23, 59, 59).unwrap());

        assert!(DateTime::normalizing(MAX_YEAR, 15, 32, 31, 63, 63).is_err());
    }

    #[test]
    fn small_years_are_not_shifted() {
        for year in 1..100 {
            let dt = DateTime::normalizing(year, 0, 1, 0, 0, 0).unwrap();
            assert_eq!(dt.year(), year);
        }
    }

    #[test]
    fn display() {
        let dt = DateTime::new(2025, 5, 13, 15, 30, 45).unwrap();
        assert_eq!(dt.to_string(), "2025-05-13T15:30:45");
        assert_eq!(DateTime::MIN.to_string(), "0001-01-01T00:00:00");
        let far = DateTime::new(100_000, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(far.to_string(), "100000-01-01T00:00:00");
    }

    #[test]
    fn from_str() {
        for s in [
            "2025-05-13T15:30:45",
            "0001-01-01T00:00:00",
            "0000-02-29T12:00:00",
            "100000-01-01T00:00:00",
            "274877906943-12-31T23:59:59",
        ] {
            let dt: DateTime = s.parse().unwrap();
            assert_eq!(dt.to_string(), s);
        }

        for s in [
            "",
            "2025-05-13",
            "2025-05-13 15:30:45",
            "2025-05-13T15:30:45Z",
            "2025-05-13T15:30",
            "25-05-13T15:30:45",
            "+2025-05-13T15:30:45",
            "2025-5-13T15:30:45",
            "2025-05-13T15:30:4a",
            "2025-02-30T00:00:00",
            "2025-05-13T24:00:00",
            "274877906944-01-01T00:00:00",
            "99999999999999999999999-01-01T00:00:00",
            "00001-01-01T00:00:00",
            "010000-01-01T00:00:00",
        ] {
            assert!(s.parse::<DateTime>().is_err(), "{s:?}");
        }
    }

    #[test]
    fn ordering_is_chronological() {
        let a = DateTime::new(2025, 5, 13, 15, 30, 45).unwrap();
        let b = DateTime::new(2025, 5, 13, 15, 30, 46).unwrap();
        let c = DateTime::new(2026, 1, 1, 0, 0, 0).unwrap();
        assert!(a < b && b < c);
        assert_eq!(a.cmp(&b), a.unix_seconds().cmp(&b.unix_seconds()));
    }
}
