//! Piece quantity value object.
//!
//! Line items arrive from the backend with an untyped `quantity` column: JSON
//! numbers, numeric strings typed into a form, `null`, or nothing at all.
//! [`Quantity::parse`] is the single, total conversion into a validated
//! non-negative count. Anything it cannot read as a non-negative integer
//! becomes zero.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::value_object::ValueObject;

/// Non-negative piece count.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Quantity(u32);

impl ValueObject for Quantity {}

impl Quantity {
    pub const ZERO: Quantity = Quantity(0);

    pub fn new(pieces: u32) -> Self {
        Self(pieces)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Parse a raw JSON value. Never fails.
    ///
    /// - non-negative integers are taken as-is (values above `u32::MAX` are invalid)
    /// - finite non-negative floats are truncated toward zero
    /// - strings follow [`Quantity::parse_str`]
    /// - `null`, booleans, arrays, objects, negatives and NaN yield zero
    pub fn parse(raw: Option<&Value>) -> Self {
        match raw {
            Some(Value::Number(n)) => {
                if let Some(v) = n.as_u64() {
                    return u32::try_from(v).map(Self).unwrap_or(Self::ZERO);
                }
                if n.is_i64() {
                    return Self::ZERO;
                }
                match n.as_f64() {
                    Some(f) if f.is_finite() && f >= 0.0 && f < 4_294_967_296.0 => {
                        Self(f.trunc() as u32)
                    }
                    _ => Self::ZERO,
                }
            }
            Some(Value::String(s)) => Self::parse_str(s),
            _ => Self::ZERO,
        }
    }

    /// Parse the leading integer of a string.
    ///
    /// Leading whitespace and a single sign are accepted, trailing characters
    /// are ignored (`"12 pcs"` is 12, `"3.9"` is 3). No digits, a negative
    /// value or overflow yield zero.
    pub fn parse_str(raw: &str) -> Self {
        let s = raw.trim_start();
        let (negative, rest) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits_len == 0 {
            return Self::ZERO;
        }

        match rest[..digits_len].parse::<u32>() {
            Ok(0) => Self::ZERO,
            Ok(_) if negative => Self::ZERO,
            Ok(v) => Self(v),
            Err(_) => Self::ZERO,
        }
    }
}

impl From<u32> for Quantity {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Quantity> for u64 {
    fn from(value: Quantity) -> Self {
        u64::from(value.0)
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Value>::deserialize(deserializer)?;
        Ok(Self::parse(raw.as_ref()))
    }
}
