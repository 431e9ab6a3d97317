use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Air quality index value as reported by the feed.
///
/// Usually a number, but stations that are down report a placeholder
/// string such as `"-"`. The value is passed through untouched.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(untagged)]
pub enum AqiValue {
    Int(i64),
    Float(f64),
    Str(String),
}

impl fmt::Display for AqiValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AqiValue::Int(i) => write!(f, "{i}"),
            AqiValue::Float(x) => write!(f, "{x}"),
            AqiValue::Str(s) => write!(f, "{s}"),
        }
    }
}

/// One measurement for one city; also the broker payload format.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Record {
    pub aqi: AqiValue,
    pub time: DateTime<FixedOffset>,
}

/// A record accepted for publication, together with the city it belongs to.
#[derive(Clone, Debug, PartialEq)]
pub struct CityRecord {
    pub city: String,
    pub record: Record,
}
