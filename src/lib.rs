//! # serde_dsv
//!
//! Converts a collection of records (key-value objects) into delimiter-separated
//! text such as CSV or TSV.
//!
//! ## How it works
//!
//! - **Header**: the union of the keys of every record, in the order each key is
//!   first seen. Records do not need to share a schema.
//! - **Rows**: one line per record, one field per header key. A missing key or a
//!   null value gives an empty field.
//! - **Values**: booleans and numbers print as text, nested objects and arrays as
//!   compact JSON.
//! - **Quoting**: a field containing the delimiter, a quote, or a line break is
//!   wrapped in double quotes with internal quotes doubled (RFC 4180 style).
//!   Header fields follow the same rule.
//! - **Lines**: joined by `\n` (or `\r\n`), with no terminator after the last one.
//!
//! ## Quick Start
//!
//! ```rust
//! use serde::Serialize;
//! use serde_dsv::to_string;
//!
//! #[derive(Serialize)]
//! struct Person {
//!     name: String,
//!     age: u32,
//!     city: String,
//! }
//!
//! let people = vec![
//!     Person { name: "John".into(), age: 30, city: "New York".into() },
//!     Person { name: "Jane".into(), age: 25, city: "Los Angeles".into() },
//! ];
//!
//! let csv = to_string(&people).unwrap();
//! assert_eq!(csv, "name,age,city\nJohn,30,New York\nJane,25,Los Angeles");
//! ```
//!
//! ### Heterogeneous records
//!
//! ```rust
//! use serde_dsv::{convert, dsv, DsvOptions};
//!
//! let records = dsv!([
//!     { "name": "John", "age": 30 },
//!     { "name": "Jane", "city": "LA" }
//! ]);
//!
//! let csv = convert(&records, &DsvOptions::default()).unwrap();
//! assert_eq!(csv, "name,age,city\nJohn,30,\nJane,,LA");
//! ```
//!
//! ### Errors
//!
//! Every failure is an [`Error`] with a machine-readable [`ErrorCode`]:
//!
//! ```rust
//! use serde_dsv::{to_string, ErrorCode};
//!
//! let err = to_string(&"not an array").unwrap_err();
//! assert_eq!(err.code(), ErrorCode::InvalidInput);
//! ```

pub mod convert;
pub mod error;
pub mod field;
pub mod header;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod value;

pub use convert::convert;
pub use error::{Error, ErrorCode, Result};
pub use field::{escape_field, value_to_string};
pub use header::HeaderSet;
pub use map::DsvMap;
pub use options::{Delimiter, DsvOptions, LineTerminator};
pub use ser::ValueSerializer;
pub use value::{Number, Value};

use serde::Serialize;
use std::io;

/// Converts a sequence of records to comma-separated text.
///
/// `records` must serialize as a sequence of maps or structs.
///
/// # Errors
///
/// See [`convert`] for the classification of input errors. A failure raised
/// by a `Serialize` impl is reported as [`ErrorCode::UnexpectedError`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(records: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(records, DsvOptions::default())
}

/// Converts a sequence of records to delimiter-separated text with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_dsv::{to_string_with_options, DsvOptions};
/// use std::collections::BTreeMap;
///
/// let mut row = BTreeMap::new();
/// row.insert("age", "30");
/// row.insert("name", "John");
///
/// let options = DsvOptions::new().with_delimiter(';');
/// let text = to_string_with_options(&[row], options).unwrap();
/// assert_eq!(text, "age;name\n30;John");
/// ```
///
/// # Errors
///
/// Same as [`to_string`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(records: &T, options: DsvOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let value = to_value(records)?;
    convert(&value, &options)
}

/// Converts any `T: Serialize` to a [`Value`].
///
/// # Examples
///
/// ```rust
/// use serde_dsv::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value: Value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_object());
/// ```
///
/// # Errors
///
/// Returns an error if the `Serialize` impl fails or a map key is not a scalar.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Writes a sequence of records to `writer` as comma-separated text.
///
/// Nothing is written if the conversion fails.
///
/// # Examples
///
/// ```rust
/// use serde_dsv::{dsv, to_writer};
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &dsv!([{ "a": 1 }])).unwrap();
/// assert_eq!(buffer, b"a\n1");
/// ```
///
/// # Errors
///
/// Returns an error if the conversion fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, records: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, records, DsvOptions::default())
}

/// Writes a sequence of records to `writer` with custom options.
///
/// # Errors
///
/// Returns an error if the conversion fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, records: &T, options: DsvOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_string_with_options(records, options)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}
