//! Error types for the usbids-parser crate.
//!
//! This module provides the [`ParseError`] type for failures that abort a
//! registry parse. Unrecognized lines are not errors; they are reported as
//! [`Diagnostic`](crate::Diagnostic)s and parsing continues.

use camino::Utf8PathBuf;

/// Errors that abort a registry parse.
///
/// # Error Recovery Strategy
///
/// - **File access** ([`ParseError::FileAccess`], [`ParseError::Read`]): fatal,
///   no partial registry is returned
/// - **Malformed input** ([`ParseError::MalformedInput`]): fatal for this parse
///
/// # Examples
///
/// ```
/// use usbids_parser::ParseError;
///
/// fn describe(err: &ParseError) -> String {
///     match err {
///         ParseError::FileAccess { path, .. } => format!("cannot read {path}"),
///         ParseError::Read(e) => format!("read failed: {e}"),
///         ParseError::MalformedInput { line, .. } => format!("bad input at line {line}"),
///     }
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The registry file could not be opened or read.
    #[error("failed to read registry file {path}: {source}")]
    FileAccess {
        /// The path that failed.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Reading from an in-memory or caller-supplied reader failed.
    #[error("failed to read registry input: {0}")]
    Read(#[from] std::io::Error),

    /// A device line appeared before any vendor line.
    #[error("line {line}: device entry has no preceding vendor: {content:?}")]
    MalformedInput {
        /// 1-based line number.
        line: usize,
        /// The offending line.
        content: String,
    },
}

impl ParseError {
    /// Creates a new [`ParseError::FileAccess`] error.
    #[inline]
    pub fn file_access(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }

    /// Creates a new [`ParseError::MalformedInput`] error.
    #[inline]
    pub fn malformed(line: usize, content: impl Into<String>) -> Self {
        Self::MalformedInput {
            line,
            content: content.into(),
        }
    }

    /// Returns `true` if the input could not be read at all.
    #[inline]
    #[must_use]
    pub const fn is_file_access(&self) -> bool {
        matches!(self, Self::FileAccess { .. } | Self::Read(_))
    }

    /// Returns the line number this error points at, if any.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::MalformedInput { line, .. } => Some(*line),
            Self::FileAccess { .. } | Self::Read(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn test_file_access_error() {
        let err = ParseError::file_access(
            "data/usb.ids",
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );
        assert!(err.is_file_access());
        assert_eq!(err.line(), None);
        assert!(err.to_string().contains("data/usb.ids"));
    }

    #[test]
    fn test_read_error_is_file_access() {
        let err = ParseError::from(io::Error::new(io::ErrorKind::InvalidData, "bad utf-8"));
        assert!(err.is_file_access());
        assert!(err.to_string().contains("bad utf-8"));
    }

    #[test]
    fn test_malformed_input_display() {
        let err = ParseError::malformed(3, "\t0001  Orphan");
        assert!(!err.is_file_access());
        assert_eq!(err.line(), Some(3));
        assert_eq!(
            err.to_string(),
            r#"line 3: device entry has no preceding vendor: "\t0001  Orphan""#
        );
    }
}
