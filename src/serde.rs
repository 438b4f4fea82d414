use crate::{DateTime, TimeLog};
use core::fmt::{self, Formatter};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// As the raw `i64`, so it stays interoperable with other producers of the format.
impl Serialize for TimeLog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.raw())
    }
}

impl<'de> Deserialize<'de> for TimeLog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i64::deserialize(deserializer).map(TimeLog::from_raw)
    }
}

/// As `YYYY-MM-DDTHH:MM:SS`.
impl Serialize for DateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(DateTimeVisitor)
    }
}

struct DateTimeVisitor;

impl Visitor<'_> for DateTimeVisitor {
    type Value = DateTime;

    fn expecting(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("a date-time formatted as YYYY-MM-DDTHH:MM:SS")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<DateTime, E> {
        v.parse().map_err(E::custom)
    }
}

#[cfg(test)]
mod tests {
    use crate::{DateTime, TimeLog};
    use alloc::format;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Row {
        modified: TimeLog,
        created: DateTime,
    }

    #[test]
    fn test_serde() {
        let created = DateTime::new(2025, 5, 13, 15, 30, 45).unwrap();
        let row = Row {
            modified: crate::encode(&created),
            created,
        };
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(
            json,
            format!(
                r#"{{"modified":{},"created":"2025-05-13T15:30:45"}}"#,
                row.modified.raw()
            )
        );
        assert_eq!(serde_json::from_str::<Row>(&json).unwrap(), row);
    }

    #[test]
    fn test_serde_invalid() {
        assert!(serde_json::from_str::<DateTime>(r#""2025-02-30T00:00:00""#).is_err());
        assert!(serde_json::from_str::<DateTime>("0").is_err());
        // Any i64 is a TimeLog, decodable or not.
        assert_eq!(serde_json::from_str::<TimeLog>("0").unwrap(), TimeLog::ZERO);
        assert_eq!(serde_json::from_str::<TimeLog>("-1").unwrap().raw(), -1);
    }
}
