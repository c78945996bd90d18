//! Configuration structures for loading a `usb.ids` registry.
//!
//! - [`SourceConfig`] - Where the registry file lives
//! - [`ParseConfig`] - Parser behavior (section terminator, diagnostics)
//! - [`Config`] - Root configuration combining all settings
//!
//! All configuration types implement [`Default`] and accept partial JSON
//! documents: missing fields fall back to their defaults.

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Marker that ends the vendor/device section of `usb.ids`.
///
/// Everything after it (device classes, HID usages, language IDs) uses an
/// incompatible layout and is not parsed.
pub const DEFAULT_SECTION_TERMINATOR: &str = "# List of known device class";

/// Location of the registry file.
///
/// # Examples
///
/// ```
/// use usbids_core::SourceConfig;
///
/// let config = SourceConfig::default();
/// assert!(config.path.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Path to the `usb.ids` file.
    ///
    /// `None` (or an empty path) yields an empty registry.
    pub path: Option<Utf8PathBuf>,
}

/// Parser settings.
///
/// # Examples
///
/// ```
/// use usbids_core::{ParseConfig, DEFAULT_SECTION_TERMINATOR};
///
/// let config = ParseConfig::default();
/// assert_eq!(config.section_terminator, DEFAULT_SECTION_TERMINATOR);
/// assert!(config.collect_diagnostics);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    /// Substring that marks the end of the vendor/device section.
    pub section_terminator: String,

    /// Whether unrecognized lines are kept in the parse result.
    ///
    /// They are always logged; this only controls the returned list.
    pub collect_diagnostics: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            section_terminator: DEFAULT_SECTION_TERMINATOR.to_owned(),
            collect_diagnostics: true,
        }
    }
}

/// Root configuration.
///
/// # Examples
///
/// ```
/// use usbids_core::Config;
///
/// let config = Config::from_json_str(r#"{"source": {"path": "/usr/share/hwdata/usb.ids"}}"#)?;
/// assert_eq!(config.source.path.as_deref().map(|p| p.as_str()), Some("/usr/share/hwdata/usb.ids"));
/// assert!(config.parse.collect_diagnostics);
/// # Ok::<(), usbids_core::ConfigError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Registry file location.
    pub source: SourceConfig,

    /// Parser settings.
    pub parse: ParseConfig,
}

impl Config {
    /// Parses and validates a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    pub fn from_json_file(path: &Utf8Path) -> Result<Self, ConfigError> {
        if path.is_dir() {
            return Err(ConfigError::InvalidPath {
                path: path.to_owned(),
                reason: "is a directory".to_owned(),
            });
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Checks option values that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.parse.section_terminator.is_empty() {
            return Err(ConfigError::invalid_option(
                "parse.section_terminator",
                "must not be empty",
            ));
        }
        Ok(())
    }

    /// Returns the configured registry path, treating an empty path as absent.
    #[must_use]
    pub fn source_path(&self) -> Option<&Utf8Path> {
        self.source
            .path
            .as_deref()
            .filter(|path| !path.as_str().is_empty())
    }
}
