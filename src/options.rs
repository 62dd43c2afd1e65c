//! Configuration options for DSV conversion.
//!
//! This module provides types to customize the produced text:
//!
//! - [`DsvOptions`]: Main configuration struct
//! - [`Delimiter`]: Field separator (comma, tab, pipe, semicolon, or any non-empty string)
//! - [`LineTerminator`]: Row separator (`\n` or `\r\n`)
//!
//! ## Examples
//!
//! ```rust
//! use serde_dsv::{to_string_with_options, Delimiter, DsvOptions};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Row { x: i32, y: i32 }
//!
//! let rows = vec![Row { x: 1, y: 2 }];
//!
//! let options = DsvOptions::new().with_delimiter(Delimiter::Semicolon);
//! let text = to_string_with_options(&rows, options).unwrap();
//! assert_eq!(text, "x;y\n1;2");
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Field separator placed between the fields of a line.
///
/// # Examples
///
/// ```rust
/// use serde_dsv::Delimiter;
///
/// assert_eq!(Delimiter::Comma.as_str(), ",");
/// assert_eq!(Delimiter::Tab.as_str(), "\t");
/// assert_eq!(Delimiter::from("||").as_str(), "||");
/// assert_eq!(Delimiter::from(';'), Delimiter::Semicolon);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
    Semicolon,
    Custom(String),
}

impl Delimiter {
    /// Returns the string representation of this delimiter.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Delimiter::Comma => ",",
            Delimiter::Tab => "\t",
            Delimiter::Pipe => "|",
            Delimiter::Semicolon => ";",
            Delimiter::Custom(s) => s,
        }
    }

    /// Checks that the delimiter can separate fields.
    ///
    /// Only an empty [`Delimiter::Custom`] is rejected.
    pub fn validate(&self) -> Result<()> {
        if self.as_str().is_empty() {
            return Err(Error::InvalidDelimiter);
        }
        Ok(())
    }
}

impl From<&str> for Delimiter {
    fn from(value: &str) -> Self {
        match value {
            "," => Delimiter::Comma,
            "\t" => Delimiter::Tab,
            "|" => Delimiter::Pipe,
            ";" => Delimiter::Semicolon,
            other => Delimiter::Custom(other.to_string()),
        }
    }
}

impl From<String> for Delimiter {
    fn from(value: String) -> Self {
        Delimiter::from(value.as_str())
    }
}

impl From<char> for Delimiter {
    fn from(value: char) -> Self {
        let mut buf = [0u8; 4];
        Delimiter::from(&*value.encode_utf8(&mut buf))
    }
}

/// Separator placed between lines. No terminator follows the last line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineTerminator {
    #[default]
    Lf,
    CrLf,
}

impl LineTerminator {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            LineTerminator::Lf => "\n",
            LineTerminator::CrLf => "\r\n",
        }
    }
}

/// Configuration options for DSV conversion.
///
/// Options derive `Serialize`/`Deserialize`, so they can live inside an
/// application's own configuration file.
///
/// # Examples
///
/// ```rust
/// use serde_dsv::{DsvOptions, Delimiter, LineTerminator};
///
/// // Comma-separated, `\n` between lines
/// let options = DsvOptions::new();
/// assert_eq!(options.delimiter, Delimiter::Comma);
///
/// // Tab-separated with CRLF line endings
/// let options = DsvOptions::new()
///     .with_delimiter('\t')
///     .with_line_terminator(LineTerminator::CrLf);
/// assert_eq!(options.delimiter, Delimiter::Tab);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DsvOptions {
    pub delimiter: Delimiter,
    pub line_terminator: LineTerminator,
}

impl DsvOptions {
    /// Creates default options (comma delimiter, `\n` line terminator).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_dsv::{DsvOptions, LineTerminator};
    ///
    /// let options = DsvOptions::new();
    /// assert_eq!(options.line_terminator, LineTerminator::Lf);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for tab-separated output.
    #[must_use]
    pub fn tsv() -> Self {
        DsvOptions {
            delimiter: Delimiter::Tab,
            ..Default::default()
        }
    }

    /// Sets the field delimiter.
    ///
    /// Accepts a [`Delimiter`], a `char`, or a string. An empty string is
    /// accepted here and rejected at conversion time with
    /// [`ErrorCode::InvalidDelimiter`](crate::ErrorCode::InvalidDelimiter).
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<Delimiter>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Sets the separator placed between lines.
    #[must_use]
    pub fn with_line_terminator(mut self, line_terminator: LineTerminator) -> Self {
        self.line_terminator = line_terminator;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorCode;

    #[test]
    fn test_named_delimiters_from_str() {
        assert_eq!(Delimiter::from(","), Delimiter::Comma);
        assert_eq!(Delimiter::from("\t"), Delimiter::Tab);
        assert_eq!(Delimiter::from("|"), Delimiter::Pipe);
        assert_eq!(Delimiter::from(";"), Delimiter::Semicolon);
        assert_eq!(Delimiter::from("::"), Delimiter::Custom("::".to_string()));
        assert_eq!(Delimiter::from('|'), Delimiter::Pipe);
    }

    #[test]
    fn test_empty_delimiter_is_rejected() {
        let err = Delimiter::from("").validate().unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidDelimiter);
        assert!(Delimiter::Comma.validate().is_ok());
        assert!(Delimiter::Custom("->".to_string()).validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let options = DsvOptions::new()
            .with_delimiter("|")
            .with_line_terminator(LineTerminator::CrLf);
        assert_eq!(options.delimiter, Delimiter::Pipe);
        assert_eq!(options.line_terminator.as_str(), "\r\n");
        assert_eq!(DsvOptions::tsv().delimiter.as_str(), "\t");
    }

    #[test]
    fn test_options_from_config_json() {
        let options: DsvOptions =
            serde_json::from_str(r#"{"delimiter": {"custom": "::"}, "line_terminator": "crlf"}"#)
                .unwrap();
        assert_eq!(options.delimiter.as_str(), "::");
        assert_eq!(options.line_terminator, LineTerminator::CrLf);

        let options: DsvOptions = serde_json::from_str(r#"{"delimiter": "tab"}"#).unwrap();
        assert_eq!(options.delimiter, Delimiter::Tab);
        assert_eq!(options.line_terminator, LineTerminator::Lf);
    }
}
