//! Error types for the usbids-core crate.
//!
//! This module provides the [`ConfigError`] type for failures while loading
//! or validating a [`Config`](crate::Config).

use camino::Utf8PathBuf;

/// Errors that can occur during configuration loading and validation.
///
/// # Examples
///
/// ```
/// use usbids_core::ConfigError;
///
/// let error = ConfigError::InvalidOption {
///     option: "parse.section_terminator".to_owned(),
///     reason: "must not be empty".to_owned(),
/// };
/// assert!(error.to_string().contains("section_terminator"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The provided path is invalid or malformed.
    #[error("invalid path '{path}': {reason}")]
    InvalidPath {
        /// The invalid path.
        path: Utf8PathBuf,
        /// Explanation of why the path is invalid.
        reason: String,
    },

    /// A configuration option has an invalid value.
    #[error("invalid configuration option '{option}': {reason}")]
    InvalidOption {
        /// The name of the invalid option.
        option: String,
        /// Explanation of why the option is invalid.
        reason: String,
    },

    /// An I/O error occurred while reading configuration.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse the configuration file.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ConfigError {
    /// Creates a new [`ConfigError::InvalidOption`] error.
    #[inline]
    pub fn invalid_option(option: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidOption {
            option: option.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_path_display() {
        let error = ConfigError::InvalidPath {
            path: Utf8PathBuf::from("/usr/share/hwdata"),
            reason: "is a directory".to_owned(),
        };
        let msg = error.to_string();
        assert!(msg.contains("/usr/share/hwdata"));
        assert!(msg.contains("is a directory"));
    }

    #[test]
    fn test_invalid_option_display() {
        let error = ConfigError::invalid_option("parse.section_terminator", "must not be empty");
        assert_eq!(
            error.to_string(),
            "invalid configuration option 'parse.section_terminator': must not be empty"
        );
    }

    #[test]
    fn test_parse_error_from_serde() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = ConfigError::from(source);
        assert!(error.to_string().starts_with("failed to parse configuration"));
    }
}
