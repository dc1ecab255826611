//! Default parameter values.

use std::fmt;

use chrono::{DateTime, Utc};

/// The initial value seeded into a parameter input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultValue {
    /// No safe zero exists; the user must supply a value.
    Absent,
    Boolean(bool),
    /// Unsigned big integer (balances, widths, counters).
    BigInt(u128),
    /// Plain small integer (enumeration discriminants).
    Integer(i64),
    String(String),
    Timestamp(DateTime<Utc>),
}

impl DefaultValue {
    /// Returns `true` for [`DefaultValue::Absent`].
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns the value as a `u128`, if it is a `BigInt` variant.
    pub fn as_big_int(&self) -> Option<u128> {
        match self {
            Self::BigInt(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the value as an i64, if it is an `Integer` variant.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Timestamp(t) => Some(*t),
            _ => None,
        }
    }
}

impl From<bool> for DefaultValue {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<u128> for DefaultValue {
    fn from(n: u128) -> Self {
        Self::BigInt(n)
    }
}

impl From<i64> for DefaultValue {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<String> for DefaultValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for DefaultValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<DateTime<Utc>> for DefaultValue {
    fn from(t: DateTime<Utc>) -> Self {
        Self::Timestamp(t)
    }
}

impl<T: Into<DefaultValue>> From<Option<T>> for DefaultValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Absent, Into::into)
    }
}

impl fmt::Display for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => write!(f, "<absent>"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::BigInt(n) => write!(f, "{n}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::String(s) => write!(f, "\"{s}\""),
            Self::Timestamp(t) => write!(f, "{}", t.to_rfc3339()),
        }
    }
}
