use crate::calendar::DateTime;
use crate::error::{err, Error};
use alloc::format;

/// Reads a UTC date-time from text, accepting more than [`DateTime`]'s `FromStr`:
/// - `YYYY-MM-DDTHH:MM:SS` (the rendered form, any year width from 4 digits)
/// - the same with fractional seconds (truncated) and/or a trailing `Z`
/// - `YYYY-MM-DD` (midnight)
/// - with `chrono`: RFC 3339 and RFC 2822 with any offset (converted to UTC), and a space
///   in place of the `T`
///
/// Second 60 is rejected in every form.
pub(crate) fn parse_utc(s: &str) -> Result<DateTime, Error> {
    let s = s.trim();
    if let Ok(date_time) = s.parse() {
        return Ok(date_time);
    }
    if let Ok(date_time) = parse_extended(s) {
        return Ok(date_time);
    }
    #[cfg(feature = "chrono")]
    if let Ok(date_time) = parse_chrono(s) {
        tracing::trace!(input = s, "parsed with chrono");
        return Ok(date_time);
    }
    err("unparseable date-time")
}

fn parse_extended(s: &str) -> Result<DateTime, Error> {
    let Some((date, time)) = s.split_once('T') else {
        return format!("{s}T00:00:00").parse();
    };
    let time = time.strip_suffix(&['Z', 'z'][..]).unwrap_or(time);
    let time = match time.split_once('.') {
        Some((whole, fraction))
            if !fraction.is_empty() && fraction.bytes().all(|b| b.is_ascii_digit()) =>
        {
            whole
        }
        Some(_) => return err("invalid fractional seconds"),
        None => time,
    };
    format!("{date}T{time}").parse()
}

#[cfg(feature = "chrono")]
fn parse_chrono(s: &str) -> Result<DateTime, Error> {
    use crate::Encode;
    use chrono::{NaiveDateTime, Timelike};

    // Text naming second 60 is not a date-time, even though chrono can hold it.
    fn no_leap_second(naive: NaiveDateTime) -> Result<DateTime, Error> {
        if naive.nanosecond() >= 1_000_000_000 {
            return err("leap second");
        }
        naive.to_date_time()
    }

    if let Ok(date_time) = chrono::DateTime::parse_from_rfc3339(s) {
        return no_leap_second(date_time.naive_utc());
    }
    if let Ok(date_time) = chrono::DateTime::parse_from_rfc2822(s) {
        return no_leap_second(date_time.naive_utc());
    }
    for format in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return no_leap_second(naive);
        }
    }
    err("unparseable date-time")
}
