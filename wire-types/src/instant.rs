/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use chrono::{DateTime, SecondsFormat, Utc};
use std::error::Error as StdError;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// An instant in time, stored as seconds (and subsecond nanos) since the
/// Unix epoch.
///
/// Model timestamp fields use this type regardless of how the wire
/// protocol spells the timestamp; [`Format`] selects the spelling.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    subsecond_nanos: u32,
}

impl Instant {
    pub fn from_epoch_seconds(epoch_seconds: i64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    pub fn from_fractional_seconds(epoch_seconds: i64, fraction: f64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: (fraction * 1_000_000_000_f64) as u32,
        }
    }

    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        Instant {
            seconds,
            subsecond_nanos,
        }
    }

    pub fn from_f64(epoch_seconds: f64) -> Self {
        let seconds = epoch_seconds.floor() as i64;
        let rem = epoch_seconds - epoch_seconds.floor();
        Instant::from_fractional_seconds(seconds, rem)
    }

    pub fn from_system_time(system_time: SystemTime) -> Self {
        let duration = system_time
            .duration_since(UNIX_EPOCH)
            .expect("SystemTime can never represent a time before the Unix Epoch");
        Instant {
            seconds: duration.as_secs() as i64,
            subsecond_nanos: duration.subsec_nanos(),
        }
    }

    pub fn from_str(s: &str, format: Format) -> Result<Self, InstantParseError> {
        match format {
            Format::DateTime => {
                let parsed = DateTime::parse_from_rfc3339(s)
                    .map_err(|err| InstantParseError::new(s, err.to_string()))?;
                Ok(Instant::from_secs_and_nanos(
                    parsed.timestamp(),
                    parsed.timestamp_subsec_nanos(),
                ))
            }
            Format::EpochSeconds => {
                let epoch_seconds: f64 = s
                    .parse()
                    .map_err(|_| InstantParseError::new(s, "expected a decimal number"))?;
                Ok(Instant::from_f64(epoch_seconds))
            }
            Format::HttpDate => {
                let parsed =
                    chrono::NaiveDateTime::parse_from_str(s, "%a, %d %b %Y %H:%M:%S%.f GMT")
                        .map_err(|err| InstantParseError::new(s, err.to_string()))?;
                Ok(Instant::from_secs_and_nanos(
                    parsed.and_utc().timestamp(),
                    parsed.and_utc().timestamp_subsec_nanos(),
                ))
            }
        }
    }

    fn to_chrono(self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.seconds, self.subsecond_nanos)
            .expect("seconds and nanos were validated on construction")
    }

    pub fn has_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    pub fn epoch_fractional_seconds(&self) -> f64 {
        self.seconds as f64 + self.subsecond_nanos as f64 / 1_000_000_000_f64
    }

    pub fn epoch_seconds(&self) -> i64 {
        self.seconds
    }

    pub fn fmt(&self, format: Format) -> String {
        match format {
            Format::DateTime => {
                if self.subsecond_nanos == 0 {
                    self.to_chrono().to_rfc3339_opts(SecondsFormat::Secs, true)
                } else {
                    // Nanos always renders 9 fraction digits; trim the zero tail
                    let full = self.to_chrono().to_rfc3339_opts(SecondsFormat::Nanos, true);
                    let mut trimmed = full
                        .trim_end_matches('Z')
                        .trim_end_matches('0')
                        .to_owned();
                    trimmed.push('Z');
                    trimmed
                }
            }
            Format::EpochSeconds => {
                if self.subsecond_nanos == 0 {
                    format!("{}", self.seconds)
                } else {
                    let fraction = format!("{:0>9}", self.subsecond_nanos);
                    format!("{}.{}", self.seconds, fraction.trim_end_matches('0'))
                }
            }
            Format::HttpDate => {
                if self.subsecond_nanos == 0 {
                    self.to_chrono()
                        .format("%a, %d %b %Y %H:%M:%S GMT")
                        .to_string()
                } else {
                    self.to_chrono()
                        .format("%a, %d %b %Y %H:%M:%S%.3f GMT")
                        .to_string()
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    DateTime,
    HttpDate,
    EpochSeconds,
}

#[derive(Debug)]
pub struct InstantParseError {
    input: String,
    reason: String,
}

impl InstantParseError {
    fn new(input: &str, reason: impl Into<String>) -> Self {
        InstantParseError {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for InstantParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse `{}` as a timestamp: {}", self.input, self.reason)
    }
}

impl StdError for InstantParseError {}

#[cfg(test)]
mod test {
    use super::{Format, Instant};

    #[test]
    fn date_time_round_trip() {
        for (seconds, nanos, expected) in &[
            (1576540098_i64, 0_u32, "2019-12-16T23:48:18Z"),
            (1576540098, 520_000_000, "2019-12-16T23:48:18.52Z"),
            (1621870490, 123_000_000, "2021-05-24T15:34:50.123Z"),
        ] {
            let instant = Instant::from_secs_and_nanos(*seconds, *nanos);
            assert_eq!(&instant.fmt(Format::DateTime), expected);
            assert_eq!(
                Instant::from_str(expected, Format::DateTime).unwrap(),
                instant
            );
        }
    }

    #[test]
    fn date_time_fmt_does_not_eat_trailing_zero_seconds() {
        let instant = Instant::from_epoch_seconds(1576540090);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:10Z");
    }

    #[test]
    fn http_date_round_trip() {
        let instant = Instant::from_epoch_seconds(1445412480);
        let formatted = instant.fmt(Format::HttpDate);
        assert_eq!(formatted, "Wed, 21 Oct 2015 07:28:00 GMT");
        assert_eq!(
            Instant::from_str(&formatted, Format::HttpDate).unwrap(),
            instant
        );
    }

    #[test]
    fn epoch_seconds_parse() {
        assert_eq!(
            Instant::from_str("1576540098", Format::EpochSeconds).unwrap(),
            Instant::from_epoch_seconds(1576540098)
        );
        let fractional = Instant::from_str("5.2", Format::EpochSeconds).unwrap();
        assert_eq!(fractional.epoch_seconds(), 5);
        assert!(fractional.has_nanos());
    }

    #[test]
    fn invalid_input_is_an_error() {
        assert!(Instant::from_str("not-a-date", Format::DateTime).is_err());
        assert!(Instant::from_str("not-a-number", Format::EpochSeconds).is_err());
        assert!(Instant::from_str("Wed Oct 21", Format::HttpDate).is_err());
    }
}
