//! Parser for the `usb.ids` vendor/device registry.
//!
//! `usb.ids` is the flat text database, maintained at linux-usb.org and
//! shipped by most distributions, that maps USB vendor IDs to vendor names
//! and, under each vendor, product IDs to device names:
//!
//! ```text
//! # Vendors, devices and interfaces. Please keep sorted.
//! 0eb0  Wacom
//! 	0001  Serial Tablet
//! 	0007  PenPartner
//! 0eb1  OtherCo
//! ```
//!
//! # Overview
//!
//! [`load`] is the one-call entry point: it takes an optional path and
//! returns a [`Registry`], empty when no path is given.
//!
//! ```no_run
//! use camino::Utf8Path;
//!
//! let registry = usbids_parser::load(Some(Utf8Path::new("/usr/share/hwdata/usb.ids")))?;
//! if let Some(device) = registry.device_by_id(0x0eb0, 0x0001) {
//!     println!("{}", device.name());
//! }
//! # Ok::<(), usbids_parser::ParseError>(())
//! ```
//!
//! For diagnostics and statistics, use [`RegistryParser`] directly:
//!
//! ```
//! use usbids_parser::RegistryParser;
//!
//! let result = RegistryParser::default().parse_str("0eb0  Wacom\n??? garbage\n")?;
//! for diagnostic in &result.diagnostics {
//!     eprintln!("{diagnostic}");
//! }
//! # Ok::<(), usbids_parser::ParseError>(())
//! ```
//!
//! # Parsing Rules
//!
//! Lines are handled strictly in file order:
//!
//! 1. Empty lines and `#` comments are skipped
//! 2. `<hex> <name>` starts a new vendor, replacing any earlier vendor with
//!    the same code
//! 3. `\t<hex> <name>` adds a device to the most recent vendor, replacing any
//!    earlier device with the same code
//! 4. A line containing `# List of known device class` ends the vendor
//!    section; the class, HID and language tables that follow are ignored
//! 5. Anything else is logged and reported as a [`Diagnostic`]
//!
//! A device line before the first vendor line is a
//! [`ParseError::MalformedInput`].

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod error;
mod line;
mod parser;

use camino::Utf8Path;
use usbids_core::{Config, Registry};

pub use error::ParseError;
pub use line::{LineKind, classify_line};
pub use parser::{Diagnostic, ParseResult, ParseStats, RegistryParser};

/// Builds a registry from an optional file path.
///
/// `None` or an empty path yields an empty registry without touching the
/// filesystem. Unrecognized lines are logged and dropped.
///
/// # Errors
///
/// - [`ParseError::FileAccess`] if the file cannot be opened or read
/// - [`ParseError::MalformedInput`] if a device line precedes every vendor line
///
/// # Examples
///
/// ```
/// let registry = usbids_parser::load(None)?;
/// assert!(registry.is_empty());
/// # Ok::<(), usbids_parser::ParseError>(())
/// ```
pub fn load(path: Option<&Utf8Path>) -> Result<Registry, ParseError> {
    load_with(path, &RegistryParser::default())
}

/// Builds a registry as described by a [`Config`].
///
/// Uses [`Config::source_path`] for the file and [`Config::parse`] for the
/// parser settings.
pub fn load_config(config: &Config) -> Result<Registry, ParseError> {
    load_with(config.source_path(), &RegistryParser::new(config.parse.clone()))
}

fn load_with(path: Option<&Utf8Path>, parser: &RegistryParser) -> Result<Registry, ParseError> {
    match path.filter(|p| !p.as_str().is_empty()) {
        Some(path) => Ok(parser.parse_file(path)?.registry),
        None => Ok(Registry::new()),
    }
}

#[cfg(test)]
mod tests {
    use usbids_core::SourceConfig;

    use super::*;

    #[test]
    fn test_load_without_path_is_empty() {
        let registry = load(None).unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_load_with_empty_path_is_empty() {
        let registry = load(Some(Utf8Path::new(""))).unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_load_missing_file_is_file_access_error() {
        let err = load(Some(Utf8Path::new("/nonexistent/usb.ids"))).unwrap_err();
        assert!(matches!(err, ParseError::FileAccess { .. }));
    }

    #[test]
    fn test_load_config_without_source() {
        let config = Config {
            source: SourceConfig { path: None },
            ..Config::default()
        };
        assert!(load_config(&config).unwrap().is_empty());
    }
}
