//
//  baruwa-cli
//  api/common/scalars.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Scalar codecs for non-standard Baruwa wire formats.
//!
//! | Type | Accepts | Emits |
//! |------|---------|-------|
//! | [`BaruwaTime`] | RFC 3339, `YYYY:MM:DD:HH:MM:SS`, `null` | `YYYY:MM:DD:HH:MM:SS` or `null` |
//! | [`LocalFloat64`] | JSON number or decimal string | one decimal place |
//! | [`ExpirationTime`] | JSON integer or numeric string | integer |

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

/// Layout Baruwa uses for timestamps.
pub const TIME_FORMAT: &str = "%Y:%m:%d:%H:%M:%S";

/// A timestamp that may be absent.
///
/// # Example
///
/// ```rust
/// use baruwa_cli::api::common::BaruwaTime;
///
/// let t: BaruwaTime = serde_json::from_str(r#""2019:06:01:12:30:00""#).unwrap();
/// assert_eq!(serde_json::to_string(&t).unwrap(), r#""2019:06:01:12:30:00""#);
///
/// let empty = BaruwaTime::default();
/// assert_eq!(serde_json::to_string(&empty).unwrap(), "null");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct BaruwaTime(pub Option<DateTime<Utc>>);

impl BaruwaTime {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self(Some(at))
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_none()
    }

    pub fn get(&self) -> Option<DateTime<Utc>> {
        self.0
    }

    /// Parses either an RFC 3339 timestamp or the Baruwa layout (taken as UTC).
    pub fn parse(s: &str) -> Result<Self, chrono::ParseError> {
        match DateTime::parse_from_rfc3339(s) {
            Ok(at) => Ok(Self::new(at.with_timezone(&Utc))),
            Err(_) => NaiveDateTime::parse_from_str(s, TIME_FORMAT).map(|at| Self::new(at.and_utc())),
        }
    }
}

impl fmt::Display for BaruwaTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(at) => write!(f, "{}", at.format(TIME_FORMAT)),
            None => Ok(()),
        }
    }
}

impl Serialize for BaruwaTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Some(_) => serializer.collect_str(self),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for BaruwaTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(Self(None)),
            Some(s) if s.is_empty() => Ok(Self(None)),
            Some(s) => Self::parse(&s).map_err(de::Error::custom),
        }
    }
}

/// A spam score with one decimal place of precision.
///
/// Values are rounded to the nearest tenth on construction, not truncated:
/// `0.15` becomes `0.2`. Truncating would turn inputs such as `2.3`, stored
/// as `2.2999…`, into `2.2`. Scores print with exactly one decimal place,
/// the format the Baruwa forms expect, and serialize as that string.
///
/// # Example
///
/// ```rust
/// use baruwa_cli::api::common::LocalFloat64;
///
/// let score: LocalFloat64 = "0.124".parse().unwrap();
/// assert_eq!(score.to_string(), "0.1");
/// assert_eq!(LocalFloat64::parse_lossy("xxxx").to_string(), "0.0");
/// assert_eq!(serde_json::to_string(&score).unwrap(), r#""0.1""#);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct LocalFloat64(f64);

impl LocalFloat64 {
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self((value * 10.0).round() / 10.0)
        } else {
            Self::default()
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Parses `s`, falling back to `0.0` on empty or invalid input.
    pub fn parse_lossy(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl From<f64> for LocalFloat64 {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl FromStr for LocalFloat64 {
    type Err = std::num::ParseFloatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<f64>().map(Self::new)
    }
}

impl fmt::Display for LocalFloat64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

impl Serialize for LocalFloat64 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for LocalFloat64 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScoreVisitor;

        impl Visitor<'_> for ScoreVisitor {
            type Value = LocalFloat64;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a number or a decimal string")
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Ok(LocalFloat64::new(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(LocalFloat64::new(v as f64))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(LocalFloat64::new(v as f64))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(LocalFloat64::parse_lossy(v))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(LocalFloat64::default())
            }
        }

        deserializer.deserialize_any(ScoreVisitor)
    }
}

/// Token lifetime in seconds, sent either as a JSON integer or a numeric string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ExpirationTime(pub i64);

impl<'de> Deserialize<'de> for ExpirationTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ExpiryVisitor;

        impl Visitor<'_> for ExpiryVisitor {
            type Value = ExpirationTime;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an integer or a numeric string")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(ExpirationTime(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                i64::try_from(v)
                    .map(ExpirationTime)
                    .map_err(|_| E::custom(format!("expiry {v} out of range")))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Err(E::custom(format!("expiry {v} is not an integer")))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.trim().parse::<i64>().map(ExpirationTime).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(ExpiryVisitor)
    }
}
