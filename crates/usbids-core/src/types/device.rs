//! Device entries.

use std::fmt;

use serde::Serialize;

/// One product listed under a vendor.
///
/// Immutable once built; owned by its [`VendorEntry`](crate::VendorEntry).
///
/// # Examples
///
/// ```
/// use usbids_core::DeviceEntry;
///
/// let device = DeviceEntry::new("Serial Tablet", "0001");
/// assert_eq!(device.name(), "Serial Tablet");
/// assert_eq!(device.code(), "0001");
/// assert_eq!(device.to_string(), "    Device: Serial Tablet (0001)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DeviceEntry {
    code: String,
    name: String,
}

impl DeviceEntry {
    /// Creates a device entry.
    ///
    /// Takes the name first, then the code. [`VendorEntry::new`](crate::VendorEntry::new)
    /// takes them the other way around; both orders are kept for callers that
    /// construct entries positionally.
    #[must_use]
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    /// Device name, as written after the code.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Device code, hex digits as written in the source.
    #[inline]
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Numeric product ID, or `None` if the code is not a 16-bit hex value.
    #[must_use]
    pub fn id(&self) -> Option<u16> {
        super::parse_hex_id(&self.code)
    }
}

impl fmt::Display for DeviceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "    Device: {} ({})", self.name, self.code)
    }
}
