//! Field rendering: value stringification and quote-on-demand escaping.

use crate::value::format_date;
use crate::{Error, Number, Result, Value};
use serde::Serialize;
use serde_json::ser::Formatter;
use std::borrow::Cow;
use std::io;

/// Renders a value as the raw text of one field, before escaping.
///
/// - null → empty string
/// - booleans → `true` / `false`
/// - numbers → decimal text (`30`, `19.99`, `1e+21`, `Infinity`, `NaN`)
/// - strings → verbatim
/// - dates → RFC 3339 (`2024-01-02T03:04:05.000Z`)
/// - big integers → their decimal digits
/// - arrays and objects → compact JSON, key order preserved; nested floats
///   use the same text as a top-level number
///
/// # Errors
///
/// Returns [`ErrorCode::SerializationError`](crate::ErrorCode::SerializationError)
/// when a nested value has no JSON representation (an integer wider than 128 bits).
///
/// # Examples
///
/// ```rust
/// use serde_dsv::{dsv, value_to_string, Value};
///
/// assert_eq!(value_to_string(&Value::Null).unwrap(), "");
/// assert_eq!(value_to_string(&Value::from(false)).unwrap(), "false");
/// assert_eq!(
///     value_to_string(&dsv!({ "role": "admin", "ids": [1, 2] })).unwrap(),
///     r#"{"role":"admin","ids":[1,2]}"#
/// );
/// ```
pub fn value_to_string(value: &Value) -> Result<Cow<'_, str>> {
    let text = match value {
        Value::Null => Cow::Borrowed(""),
        Value::Bool(true) => Cow::Borrowed("true"),
        Value::Bool(false) => Cow::Borrowed("false"),
        Value::Number(n) => Cow::Owned(n.to_string()),
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Date(dt) => Cow::Owned(format_date(dt)),
        Value::BigInt(bi) => Cow::Owned(bi.to_string()),
        Value::Array(_) | Value::Object(_) => Cow::Owned(to_compact_json(value)?),
    };
    Ok(text)
}

/// Compact JSON writer whose floats print the same as a top-level field.
struct FieldFormatter;

impl Formatter for FieldFormatter {
    fn write_f64<W>(&mut self, writer: &mut W, value: f64) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        write!(writer, "{}", Number::Float(value))
    }
}

fn to_compact_json(value: &Value) -> Result<String> {
    let mut buffer = Vec::with_capacity(64);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, FieldFormatter);
    value
        .serialize(&mut serializer)
        .map_err(Error::serialization)?;
    String::from_utf8(buffer).map_err(Error::serialization)
}

/// Quotes a field if it would otherwise be ambiguous.
///
/// A field containing the delimiter, `\r`, `\n`, or `"` is wrapped in double
/// quotes with every internal `"` doubled. Any other field is returned as is.
///
/// # Examples
///
/// ```rust
/// use serde_dsv::escape_field;
///
/// assert_eq!(escape_field("plain", ","), "plain");
/// assert_eq!(escape_field("John, Jr.", ","), "\"John, Jr.\"");
/// assert_eq!(escape_field("say \"hi\"", ","), "\"say \"\"hi\"\"\"");
/// assert_eq!(escape_field("a,b", ";"), "a,b");
/// ```
pub fn escape_field<'a>(field: &'a str, delimiter: &str) -> Cow<'a, str> {
    if !needs_quotes(field, delimiter) {
        return Cow::Borrowed(field);
    }

    let mut quoted = String::with_capacity(field.len() + 2);
    quoted.push('"');
    for ch in field.chars() {
        if ch == '"' {
            quoted.push('"');
        }
        quoted.push(ch);
    }
    quoted.push('"');
    Cow::Owned(quoted)
}

#[inline]
fn needs_quotes(field: &str, delimiter: &str) -> bool {
    field.contains(delimiter)
        || field.contains('\n')
        || field.contains('\r')
        || field.contains('"')
}
