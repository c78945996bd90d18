//! Core types, errors, and configuration for the `usb.ids` registry.
//!
//! This crate provides the foundational types used across the workspace:
//!
//! - Domain types ([`DeviceEntry`], [`VendorEntry`], [`Registry`])
//! - Configuration structures ([`Config`], [`ParseConfig`], [`SourceConfig`])
//! - Error types for configuration loading ([`ConfigError`])
//! - Type aliases for `FxHashMap`/`FxHashSet` (faster than std)
//!
//! Parsing lives in the `usbids-parser` crate; this crate only describes what
//! a parsed registry looks like and how it is queried.
//!
//! # Examples
//!
//! ```
//! use usbids_core::{Registry, VendorEntry};
//!
//! let mut wacom = VendorEntry::new("0eb0", "Wacom");
//! wacom.add_device("0001", "Serial Tablet");
//!
//! let registry: Registry = [wacom].into_iter().collect();
//!
//! let device = registry.lookup_device("0eb0", "0001").unwrap();
//! assert_eq!(device.name(), "Serial Tablet");
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod hash;
pub mod types;

pub use config::{Config, DEFAULT_SECTION_TERMINATOR, ParseConfig, SourceConfig};
pub use error::ConfigError;
pub use hash::{FxBuildHasher, FxHashMap, FxHashSet, fx_hash_map, fx_hash_map_with_capacity};
pub use types::{DeviceEntry, Registry, VendorEntry};
