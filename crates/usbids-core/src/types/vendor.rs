//! Vendor entries and the devices they own.

use std::fmt;

use serde::Serialize;
use serde::ser::SerializeStruct;

use super::DeviceEntry;
use crate::FxHashMap;

/// A vendor and its devices, keyed by device code.
///
/// # Examples
///
/// ```
/// use usbids_core::VendorEntry;
///
/// let mut vendor = VendorEntry::new("0eb0", "Wacom");
/// vendor.add_device("0001", "Serial Tablet");
/// vendor.add_device("0007", "PenPartner");
///
/// assert_eq!(vendor.device_count(), 2);
/// assert_eq!(vendor.device("0007").map(|d| d.name()), Some("PenPartner"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VendorEntry {
    code: String,
    name: String,
    devices: FxHashMap<String, DeviceEntry>,
}

impl VendorEntry {
    /// Creates a vendor with no devices.
    ///
    /// Takes the code first, then the name, which is the reverse of
    /// [`DeviceEntry::new`].
    #[must_use]
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            devices: crate::fx_hash_map(),
        }
    }

    /// Adds a device under `code`.
    ///
    /// A device already registered under the same code is replaced without
    /// error and returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use usbids_core::VendorEntry;
    ///
    /// let mut vendor = VendorEntry::new("0eb0", "Wacom");
    /// assert!(vendor.add_device("0001", "Serial Tablet").is_none());
    ///
    /// let replaced = vendor.add_device("0001", "Graphire");
    /// assert_eq!(replaced.map(|d| d.name().to_owned()), Some("Serial Tablet".to_owned()));
    /// assert_eq!(vendor.device_count(), 1);
    /// ```
    pub fn add_device(
        &mut self,
        code: impl Into<String>,
        name: impl Into<String>,
    ) -> Option<DeviceEntry> {
        let code = code.into();
        let device = DeviceEntry::new(name, code.clone());
        self.devices.insert(code, device)
    }

    /// Vendor name, as written after the code.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Vendor code, hex digits as written in the source.
    #[inline]
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Numeric vendor ID, or `None` if the code is not a 16-bit hex value.
    #[must_use]
    pub fn id(&self) -> Option<u16> {
        super::parse_hex_id(&self.code)
    }

    /// Looks up a device by exact code.
    #[must_use]
    pub fn device(&self, code: &str) -> Option<&DeviceEntry> {
        self.devices.get(code)
    }

    /// Looks up a device by numeric product ID.
    #[must_use]
    pub fn device_by_id(&self, id: u16) -> Option<&DeviceEntry> {
        self.device(&super::format_hex_id(id))
    }

    /// Number of devices listed under this vendor.
    #[inline]
    #[must_use]
    pub fn device_count(&self) -> usize {
        self.devices.len()
    }

    /// Iterates devices ordered by code.
    pub fn devices(&self) -> impl Iterator<Item = &DeviceEntry> {
        let mut devices: Vec<&DeviceEntry> = self.devices.values().collect();
        devices.sort_unstable_by(|a, b| a.code().cmp(b.code()));
        devices.into_iter()
    }
}

impl fmt::Display for VendorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vendor: {} ({})", self.name, self.code)?;
        for device in self.devices() {
            write!(f, "\n   {device}")?;
        }
        Ok(())
    }
}

impl Serialize for VendorEntry {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let devices: Vec<&DeviceEntry> = self.devices().collect();
        let mut state = serializer.serialize_struct("VendorEntry", 3)?;
        state.serialize_field("code", &self.code)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("devices", &devices)?;
        state.end()
    }
}
