//! Domain types for the `usb.ids` registry.
//!
//! - [`device`] - A single product under a vendor
//! - [`vendor`] - A vendor and the devices it owns
//! - [`registry`] - All vendors, keyed by vendor code
//!
//! All public types are re-exported here and at the crate root:
//!
//! ```
//! use usbids_core::{DeviceEntry, Registry, VendorEntry};
//! ```
//!
//! # Ordering
//!
//! Entries are stored in hash maps for constant-time lookup. Every
//! enumeration (iterators, `Display`, serialization) yields entries sorted by
//! their code string, so output is stable across runs.

mod device;
mod registry;
mod vendor;

pub use device::DeviceEntry;
pub use registry::Registry;
pub use vendor::VendorEntry;

/// Parses a hex code into a 16-bit USB identifier.
///
/// Rejects anything but ASCII hex digits (`from_str_radix` alone would accept
/// a leading `+`).
fn parse_hex_id(code: &str) -> Option<u16> {
    if code.is_empty() || !code.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u16::from_str_radix(code, 16).ok()
}

/// Formats a USB identifier the way `usb.ids` writes codes.
fn format_hex_id(id: u16) -> String {
    format!("{id:04x}")
}
