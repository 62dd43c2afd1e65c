//! Dynamic value representation for records.
//!
//! [`Value`] is the in-memory form the converter works on: a record is a
//! [`Value::Object`], the records argument is a [`Value::Array`] of them.
//! Any `T: Serialize` can be turned into a `Value` with [`to_value`](crate::to_value).
//!
//! ## Creating Values
//!
//! ```rust
//! use serde_dsv::{dsv, Value};
//!
//! let null = Value::Null;
//! let number = Value::from(42);
//! let text = Value::from("hello");
//!
//! let record = dsv!({
//!     "name": "Alice",
//!     "age": 30
//! });
//! assert!(record.is_object());
//! ```

use crate::DsvMap;
use chrono::{DateTime, SecondsFormat, Utc};
use num_bigint::BigInt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically-typed record value.
///
/// Besides the JSON data model this carries dates and integers wider than
/// `i64`, which render as plain text in a field but have their own rules when
/// nested inside an object or array.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Object(DsvMap),
    Date(DateTime<Utc>),
    BigInt(BigInt),
}

/// A numeric value: an integer, a float, or a non-finite float.
///
/// # Examples
///
/// ```rust
/// use serde_dsv::Number;
///
/// assert_eq!(Number::Integer(42).to_string(), "42");
/// assert_eq!(Number::Float(19.99).to_string(), "19.99");
/// assert_eq!(Number::Float(30.0).to_string(), "30");
/// assert_eq!(Number::Infinity.to_string(), "Infinity");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
    Infinity,
    NegativeInfinity,
    NaN,
}

impl Number {
    /// Classifies a float, folding non-finite values into their own variants.
    #[must_use]
    pub fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            Number::NaN
        } else if value == f64::INFINITY {
            Number::Infinity
        } else if value == f64::NEG_INFINITY {
            Number::NegativeInfinity
        } else {
            Number::Float(value)
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
            Number::Infinity => f64::INFINITY,
            Number::NegativeInfinity => f64::NEG_INFINITY,
            Number::NaN => f64::NAN,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write_float(f, *fl),
            Number::Infinity => f.write_str("Infinity"),
            Number::NegativeInfinity => f.write_str("-Infinity"),
            Number::NaN => f.write_str("NaN"),
        }
    }
}

/// Writes a finite float in its shortest form.
///
/// Magnitudes in `[1e-6, 1e21)` print as plain decimals (`30`, `0.000001`),
/// anything else in exponent form with an explicit sign (`1e+21`, `1.5e-7`).
/// `-0.0` prints as `0`.
fn write_float<W: fmt::Write>(out: &mut W, value: f64) -> fmt::Result {
    if value == 0.0 {
        return out.write_str("0");
    }
    if (1e-6..1e21).contains(&value.abs()) {
        return write!(out, "{}", value);
    }

    let text = format!("{:e}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            write!(out, "{}e+{}", mantissa, exponent)
        }
        _ => out.write_str(&text),
    }
}

impl Value {
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns `true` for arrays and objects, the values that render as JSON text.
    #[inline]
    #[must_use]
    pub const fn is_structured(&self) -> bool {
        matches!(self, Value::Array(_) | Value::Object(_))
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(Number::Integer(i)) => Some(*i),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&DsvMap> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Short name of the value's kind, as used in error messages.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_dsv::Value;
    ///
    /// assert_eq!(Value::Null.kind(), "null");
    /// assert_eq!(Value::from("x").kind(), "string");
    /// assert_eq!(Value::Array(vec![]).kind(), "array");
    /// ```
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Date(_) => "date",
            Value::BigInt(_) => "bigint",
        }
    }
}

/// RFC 3339 with millisecond precision and a `Z` suffix.
pub(crate) fn format_date(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl Serialize for Value {
    /// Encodes the value in the JSON data model.
    ///
    /// Non-finite floats encode as whatever the target format does with them
    /// (`serde_json` writes `null`), dates as RFC 3339 strings, and big
    /// integers as `i128`/`u128`. A big integer beyond 128 bits is an error.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            Value::Number(n) => serializer.serialize_f64(n.as_f64()),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
            Value::Date(dt) => serializer.serialize_str(&format_date(dt)),
            Value::BigInt(bi) => {
                if let Ok(i) = i128::try_from(bi) {
                    serializer.serialize_i128(i)
                } else if let Ok(u) = u128::try_from(bi) {
                    serializer.serialize_u128(u)
                } else {
                    Err(serde::ser::Error::custom(format!(
                        "integer {} does not fit in 128 bits",
                        bi
                    )))
                }
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any record value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Value, E> {
                Ok(Value::from(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Value, E> {
                Ok(Value::from(value))
            }

            fn visit_i128<E>(self, value: i128) -> Result<Value, E> {
                Ok(Value::from(value))
            }

            fn visit_u128<E>(self, value: u128) -> Result<Value, E> {
                Ok(Value::from(value))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Value, E> {
                Ok(Value::from(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Value, E> {
                Ok(Value::String(value))
            }

            fn visit_unit<E>(self) -> Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(Value::Array(vec))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = DsvMap::new();
                while let Some((key, value)) = map.next_entry::<String, Value>()? {
                    values.insert(key, value);
                }
                Ok(Value::Object(values))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

macro_rules! from_small_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Number(Number::Integer(value as i64))
                }
            }
        )*
    };
}

from_small_integer!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! from_wide_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    match i64::try_from(value) {
                        Ok(i) => Value::Number(Number::Integer(i)),
                        Err(_) => Value::BigInt(BigInt::from(value)),
                    }
                }
            }
        )*
    };
}

from_wide_integer!(u64, i128, u128, isize, usize);

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(Number::from_f64(value as f64))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::from_f64(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<DsvMap> for Value {
    fn from(value: DsvMap) -> Self {
        Value::Object(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Date(value)
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        match i64::try_from(&value) {
            Ok(i) => Value::Number(Number::Integer(i)),
            Err(_) => Value::BigInt(value),
        }
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
