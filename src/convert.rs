//! Records → delimiter-separated text.
//!
//! [`convert`] is the conversion algorithm:
//!
//! 1. the records must be a non-empty array of objects and the delimiter non-empty
//! 2. the header is the union of all record keys, in first-seen order
//! 3. the header line is the escaped keys joined by the delimiter
//! 4. each record gives one line with one field per header key; a missing key
//!    gives an empty field
//! 5. lines are joined by the line terminator, with none after the last line
//!
//! Nothing is returned on failure; there is no partial output.

use crate::field::{escape_field, value_to_string};
use crate::{DsvMap, DsvOptions, Error, HeaderSet, Result, Value};
use tracing::{debug, trace};

/// Converts an array of records to delimiter-separated text.
///
/// # Errors
///
/// | Code | Cause |
/// |---|---|
/// | `INVALID_INPUT` | `records` is not an array |
/// | `EMPTY_INPUT` | `records` is an empty array |
/// | `INVALID_DELIMITER` | the delimiter is an empty string |
/// | `INVALID_DATA_TYPE` | an element of `records` is not an object |
/// | `NO_PROPERTIES` | no record has any key |
/// | `ROW_PROCESSING_ERROR` | a field of a row could not be rendered |
///
/// # Examples
///
/// ```rust
/// use serde_dsv::{convert, dsv, DsvOptions};
///
/// let records = dsv!([
///     { "name": "John", "age": 30, "city": "New York" },
///     { "name": "Jane", "age": 25, "city": "Los Angeles" }
/// ]);
///
/// let text = convert(&records, &DsvOptions::default()).unwrap();
/// assert_eq!(text, "name,age,city\nJohn,30,New York\nJane,25,Los Angeles");
/// ```
pub fn convert(records: &Value, options: &DsvOptions) -> Result<String> {
    let records = match records {
        Value::Array(records) => records,
        other => {
            return Err(Error::InvalidInput {
                found: other.kind(),
            })
        }
    };
    if records.is_empty() {
        return Err(Error::EmptyInput);
    }
    options.delimiter.validate()?;

    let delimiter = options.delimiter.as_str();
    let terminator = options.line_terminator.as_str();
    debug!(
        records = records.len(),
        delimiter = %delimiter.escape_debug(),
        "converting records"
    );

    let rows = as_records(records)?;
    let headers = collect_headers(&rows)?;
    trace!(columns = headers.len(), "derived header");

    let mut output = String::with_capacity(estimate_capacity(rows.len(), headers.len()));
    write_header(&mut output, &headers, delimiter);

    for (index, row) in rows.iter().enumerate() {
        output.push_str(terminator);
        write_row(&mut output, row, &headers, delimiter)
            .map_err(|e| Error::row_processing(index + 1, e))?;
    }

    debug!(bytes = output.len(), "conversion finished");
    Ok(output)
}

/// Checks every element is an object, in order; the first offender decides the error.
fn as_records(records: &[Value]) -> Result<Vec<&DsvMap>> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| match record {
            Value::Object(map) => Ok(map),
            other => Err(Error::InvalidDataType {
                index: index + 1,
                found: other.kind(),
            }),
        })
        .collect()
}

fn collect_headers(rows: &[&DsvMap]) -> Result<HeaderSet> {
    let mut headers = HeaderSet::new();
    for row in rows {
        headers.extend_from_record(row);
    }
    if headers.is_empty() {
        return Err(Error::NoProperties);
    }
    Ok(headers)
}

fn write_header(output: &mut String, headers: &HeaderSet, delimiter: &str) {
    for (i, key) in headers.iter().enumerate() {
        if i > 0 {
            output.push_str(delimiter);
        }
        output.push_str(&escape_field(key, delimiter));
    }
}

fn write_row(output: &mut String, row: &DsvMap, headers: &HeaderSet, delimiter: &str) -> Result<()> {
    for (i, key) in headers.iter().enumerate() {
        if i > 0 {
            output.push_str(delimiter);
        }
        let text = match row.get(key) {
            Some(value) => value_to_string(value)?,
            None => continue,
        };
        output.push_str(&escape_field(&text, delimiter));
    }
    Ok(())
}

// Rough guess of 8 bytes per field to cut down on reallocations.
fn estimate_capacity(rows: usize, columns: usize) -> usize {
    (rows + 1).saturating_mul(columns).saturating_mul(8)
}
