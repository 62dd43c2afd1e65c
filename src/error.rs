//! Error types for DSV conversion.
//!
//! Every failure is reported as a single [`Error`] enum. Each variant maps to a
//! machine-readable [`ErrorCode`], so callers can branch on the code without
//! matching on message text.
//!
//! ## Error Categories
//!
//! - **Input validation**: the records argument is not a non-empty sequence of objects
//! - **Configuration**: the delimiter is empty
//! - **Field rendering**: a nested value has no JSON representation
//! - **I/O**: writing the produced text failed
//!
//! ## Examples
//!
//! ```rust
//! use serde_dsv::{to_string, ErrorCode};
//!
//! let records: Vec<serde_json::Value> = Vec::new();
//! let err = to_string(&records).unwrap_err();
//!
//! assert_eq!(err.code(), ErrorCode::EmptyInput);
//! assert_eq!(err.code().as_str(), "EMPTY_INPUT");
//! assert_eq!(err.to_string(), "Input data cannot be empty");
//! ```

use std::fmt;
use thiserror::Error;

/// Machine-readable classification of an [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    InvalidInput,
    EmptyInput,
    InvalidDelimiter,
    InvalidDataType,
    NoProperties,
    SerializationError,
    RowProcessingError,
    UnexpectedError,
    IoError,
}

impl ErrorCode {
    /// Returns the stable string form of the code, e.g. `"INVALID_INPUT"`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_dsv::ErrorCode;
    ///
    /// assert_eq!(ErrorCode::NoProperties.as_str(), "NO_PROPERTIES");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::EmptyInput => "EMPTY_INPUT",
            ErrorCode::InvalidDelimiter => "INVALID_DELIMITER",
            ErrorCode::InvalidDataType => "INVALID_DATA_TYPE",
            ErrorCode::NoProperties => "NO_PROPERTIES",
            ErrorCode::SerializationError => "SERIALIZATION_ERROR",
            ErrorCode::RowProcessingError => "ROW_PROCESSING_ERROR",
            ErrorCode::UnexpectedError => "UNEXPECTED_ERROR",
            ErrorCode::IoError => "IO_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents all possible errors that can occur during DSV conversion.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The records argument is not a sequence. `found` is the kind it was instead.
    #[error("Input data must be an array (got {found})")]
    InvalidInput { found: &'static str },

    /// The records sequence has no elements.
    #[error("Input data cannot be empty")]
    EmptyInput,

    /// A custom delimiter was supplied but is empty.
    #[error("Delimiter must be a non-empty string")]
    InvalidDelimiter,

    /// A record is not an object. `index` is 1-based.
    #[error("All data items must be objects (item {index} is {found})")]
    InvalidDataType { index: usize, found: &'static str },

    /// No record contributed a single key.
    #[error("No valid properties found in data objects")]
    NoProperties,

    /// A nested value could not be encoded as JSON text.
    #[error("Failed to serialize object value: {0}")]
    Serialization(String),

    /// Rendering a data row failed. `row` is 1-based.
    #[error("Error processing row {row}: {source}")]
    RowProcessing {
        row: usize,
        #[source]
        source: Box<Error>,
    },

    /// Any failure not covered by the other variants.
    #[error("Unexpected error during parsing: {0}")]
    Unexpected(String),

    /// Writing the output failed.
    #[error("IO error: {0}")]
    Io(String),
}

impl Error {
    /// Returns the machine-readable code of this error.
    ///
    /// A row failure reports [`ErrorCode::RowProcessingError`] whatever its
    /// cause; use [`Error::root_code`] to reach the code of the wrapped error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::InvalidInput { .. } => ErrorCode::InvalidInput,
            Error::EmptyInput => ErrorCode::EmptyInput,
            Error::InvalidDelimiter => ErrorCode::InvalidDelimiter,
            Error::InvalidDataType { .. } => ErrorCode::InvalidDataType,
            Error::NoProperties => ErrorCode::NoProperties,
            Error::Serialization(_) => ErrorCode::SerializationError,
            Error::RowProcessing { .. } => ErrorCode::RowProcessingError,
            Error::Unexpected(_) => ErrorCode::UnexpectedError,
            Error::Io(_) => ErrorCode::IoError,
        }
    }

    /// Returns the code of the innermost error, looking through row wrappers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_dsv::{Error, ErrorCode};
    ///
    /// let err = Error::row_processing(3, Error::serialization("integer too large"));
    /// assert_eq!(err.code(), ErrorCode::RowProcessingError);
    /// assert_eq!(err.root_code(), ErrorCode::SerializationError);
    /// ```
    #[must_use]
    pub fn root_code(&self) -> ErrorCode {
        match self {
            Error::RowProcessing { source, .. } => source.root_code(),
            other => other.code(),
        }
    }

    /// Wraps a per-row failure with its 1-based row index.
    pub fn row_processing(row: usize, source: Error) -> Self {
        Error::RowProcessing {
            row,
            source: Box::new(source),
        }
    }

    /// Creates a serialization error for a nested value with no textual form.
    pub fn serialization<T: fmt::Display>(msg: T) -> Self {
        Error::Serialization(msg.to_string())
    }

    /// Creates an error for failures outside every other category.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_dsv::{Error, ErrorCode};
    ///
    /// let err = Error::unexpected("something went wrong");
    /// assert_eq!(err.code(), ErrorCode::UnexpectedError);
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn unexpected<T: fmt::Display>(msg: T) -> Self {
        Error::Unexpected(msg.to_string())
    }

    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Unexpected(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
