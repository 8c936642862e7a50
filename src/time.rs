use chrono::NaiveDateTime;
use thiserror::Error;

/// Combined date+time pattern of the ticket files, e.g. "01.01.21 08:00".
const TIMESTAMP_FORMAT: &str = "%d.%m.%y %H:%M";

/// Elapsed flight time in whole minutes.
///
/// Negative spans are kept as-is: an overnight arrival encoded without the
/// date rollover comes out negative, and that is the caller's problem to
/// interpret, not a parse failure.
#[derive(Debug, Clone, Copy, Ord, Eq, PartialEq, PartialOrd)]
pub struct Duration(pub i64);

impl std::fmt::Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} hours {} minutes", self.0 / 60, self.0 % 60)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ScheduleParseError {
    #[error("invalid time format {0:?}")]
    InvalidTimeFormat(String),
    #[error("unparseable timestamp {0:?}: {1}")]
    DateTime(String, chrono::ParseError),
    #[error("missing {0}")]
    MissingField(&'static str),
}

/// Canonicalizes a time-of-day string into zero-padded "HH:MM" form.
///
/// The wire data writes single-digit components ("8:5"); anything that does
/// not split into exactly two parts of one or two characters is rejected.
pub fn normalize_time(time: &str) -> Result<String, ScheduleParseError> {
    let parts: Vec<&str> = time.split(':').collect();
    let (hour, minute) = match parts.as_slice() {
        [hour, minute] => (*hour, *minute),
        _ => return Err(ScheduleParseError::InvalidTimeFormat(time.to_string())),
    };

    let pad = |part: &str| match part.len() {
        1 => Ok(format!("0{part}")),
        2 => Ok(part.to_string()),
        _ => Err(ScheduleParseError::InvalidTimeFormat(time.to_string())),
    };

    Ok(format!("{}:{}", pad(hour)?, pad(minute)?))
}

/// Combines a "dd.mm.yy" date with a time-of-day into a naive timestamp.
pub fn parse_timestamp(date: &str, time: &str) -> Result<NaiveDateTime, ScheduleParseError> {
    let stamp = format!("{} {}", date, normalize_time(time)?);
    NaiveDateTime::parse_from_str(&stamp, TIMESTAMP_FORMAT)
        .map_err(|e| ScheduleParseError::DateTime(stamp, e))
}

/// Signed elapsed span between departure and arrival, at minute granularity.
pub fn elapsed(departure: NaiveDateTime, arrival: NaiveDateTime) -> Duration {
    Duration((arrival - departure).num_minutes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_pads_single_digits() {
        assert_eq!("08:05", normalize_time("8:5").unwrap());
        assert_eq!("23:07", normalize_time("23:7").unwrap());
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_time("8:5").unwrap();
        assert_eq!(once, normalize_time(&once).unwrap());
    }

    #[test]
    fn test_normalize_rejects_wrong_part_count() {
        assert_eq!(
            Err(ScheduleParseError::InvalidTimeFormat("800".to_string())),
            normalize_time("800")
        );
        assert_eq!(
            Err(ScheduleParseError::InvalidTimeFormat("8:5:0".to_string())),
            normalize_time("8:5:0")
        );
    }

    #[test]
    fn test_normalize_rejects_wrong_part_width() {
        assert!(normalize_time("8:").is_err());
        assert!(normalize_time(":5").is_err());
        assert!(normalize_time("123:45").is_err());
    }

    #[test]
    fn test_parse_timestamp() {
        let stamp = parse_timestamp("01.01.21", "8:00").unwrap();
        assert_eq!("2021-01-01 08:00:00", stamp.to_string());
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage_date() {
        assert!(matches!(
            parse_timestamp("32.13.21", "8:00"),
            Err(ScheduleParseError::DateTime(_, _))
        ));
    }

    #[test]
    fn test_elapsed_same_day() {
        let dep = parse_timestamp("01.01.21", "08:00").unwrap();
        let arr = parse_timestamp("01.01.21", "20:00").unwrap();
        assert_eq!(Duration(720), elapsed(dep, arr));
    }

    #[test]
    fn test_elapsed_overnight_with_rollover() {
        let dep = parse_timestamp("01.01.21", "23:00").unwrap();
        let arr = parse_timestamp("02.01.21", "01:30").unwrap();
        assert_eq!(Duration(150), elapsed(dep, arr));
    }

    #[test]
    fn test_elapsed_without_rollover_is_negative() {
        let dep = parse_timestamp("01.01.21", "23:00").unwrap();
        let arr = parse_timestamp("01.01.21", "01:00").unwrap();
        assert_eq!(Duration(-1320), elapsed(dep, arr));
    }

    #[test]
    fn test_duration_display() {
        assert_eq!("1 hours 30 minutes", Duration(90).to_string());
        assert_eq!("0 hours 0 minutes", Duration(0).to_string());
        assert_eq!("12 hours 0 minutes", Duration(720).to_string());
    }
}
