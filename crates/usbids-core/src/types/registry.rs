//! The vendor registry.
//!
//! A [`Registry`] is built once (usually by the `usbids-parser` crate) and is
//! read-only afterwards: it exposes lookups and ordered iteration, but no
//! mutators.

use std::fmt;

use serde::Serialize;

use super::{DeviceEntry, VendorEntry};
use crate::FxHashMap;

/// All known vendors, keyed by vendor code.
///
/// Lookups are exact string matches on the code as written in the source
/// file. [`vendor_by_id`](Self::vendor_by_id) and
/// [`device_by_id`](Self::device_by_id) accept numeric IDs and format them as
/// four lowercase hex digits, the canonical `usb.ids` form.
///
/// # Examples
///
/// ```
/// use usbids_core::{Registry, VendorEntry};
///
/// let mut wacom = VendorEntry::new("0eb0", "Wacom");
/// wacom.add_device("0001", "Serial Tablet");
/// let registry: Registry = [wacom, VendorEntry::new("0eb1", "OtherCo")]
///     .into_iter()
///     .collect();
///
/// assert_eq!(registry.len(), 2);
/// assert_eq!(registry.lookup_vendor("0eb1").map(|v| v.name()), Some("OtherCo"));
/// assert_eq!(registry.device_by_id(0x0eb0, 0x0001).map(|d| d.name()), Some("Serial Tablet"));
/// assert!(registry.lookup_vendor("ffff").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    vendors: FxHashMap<String, VendorEntry>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the vendor with exactly this code.
    #[must_use]
    pub fn lookup_vendor(&self, code: &str) -> Option<&VendorEntry> {
        self.vendors.get(code)
    }

    /// Returns the device `device_code` listed under `vendor_code`.
    #[must_use]
    pub fn lookup_device(&self, vendor_code: &str, device_code: &str) -> Option<&DeviceEntry> {
        self.lookup_vendor(vendor_code)?.device(device_code)
    }

    /// Returns the vendor for a numeric vendor ID.
    #[must_use]
    pub fn vendor_by_id(&self, vendor_id: u16) -> Option<&VendorEntry> {
        self.lookup_vendor(&super::format_hex_id(vendor_id))
    }

    /// Returns the device for a numeric vendor/product ID pair.
    #[must_use]
    pub fn device_by_id(&self, vendor_id: u16, product_id: u16) -> Option<&DeviceEntry> {
        self.vendor_by_id(vendor_id)?.device_by_id(product_id)
    }

    /// Number of vendors.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.vendors.len()
    }

    /// Returns `true` if no vendors are registered.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty()
    }

    /// Total number of devices across all vendors.
    #[must_use]
    pub fn device_count(&self) -> usize {
        self.vendors.values().map(VendorEntry::device_count).sum()
    }

    /// Iterates vendors ordered by code.
    pub fn vendors(&self) -> impl Iterator<Item = &VendorEntry> {
        let mut vendors: Vec<&VendorEntry> = self.vendors.values().collect();
        vendors.sort_unstable_by(|a, b| a.code().cmp(b.code()));
        vendors.into_iter()
    }
}

/// Collects vendors into a registry.
///
/// A later vendor with the same code replaces an earlier one, devices
/// included.
impl FromIterator<VendorEntry> for Registry {
    fn from_iter<I: IntoIterator<Item = VendorEntry>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut vendors = crate::fx_hash_map_with_capacity(iter.size_hint().0);
        for vendor in iter {
            vendors.insert(vendor.code().to_owned(), vendor);
        }
        Self { vendors }
    }
}

impl fmt::Display for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vendor in self.vendors() {
            write!(f, "\n{vendor}")?;
        }
        Ok(())
    }
}

impl Serialize for Registry {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.vendors())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Registry {
        let mut wacom = VendorEntry::new("0eb0", "Wacom");
        wacom.add_device("0001", "Serial Tablet");
        wacom.add_device("0007", "PenPartner");
        [VendorEntry::new("0eb1", "OtherCo"), wacom].into_iter().collect()
    }

    #[test]
    fn test_registry_new_is_empty() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert_eq!(registry.device_count(), 0);
        assert_eq!(registry.to_string(), "");
    }

    #[test]
    fn test_lookup_vendor_exact_match() {
        let registry = sample();
        assert_eq!(registry.lookup_vendor("0eb0").map(VendorEntry::name), Some("Wacom"));
        assert!(registry.lookup_vendor("0EB0").is_none());
        assert!(registry.lookup_vendor("eb0").is_none());
    }

    #[test]
    fn test_lookup_device() {
        let registry = sample();
        assert_eq!(
            registry.lookup_device("0eb0", "0007").map(DeviceEntry::name),
            Some("PenPartner")
        );
        assert!(registry.lookup_device("0eb1", "0007").is_none());
        assert!(registry.lookup_device("dead", "0007").is_none());
    }

    #[test]
    fn test_lookup_by_id() {
        let registry = sample();
        assert_eq!(registry.vendor_by_id(0x0eb1).map(VendorEntry::name), Some("OtherCo"));
        assert_eq!(
            registry.device_by_id(0x0eb0, 0x0001).map(DeviceEntry::name),
            Some("Serial Tablet")
        );
        assert!(registry.device_by_id(0x0eb1, 0x0001).is_none());
    }

    #[test]
    fn test_from_iter_later_duplicate_wins() {
        let registry: Registry = [
            VendorEntry::new("1234", "First"),
            VendorEntry::new("1234", "Second"),
        ]
        .into_iter()
        .collect();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup_vendor("1234").map(VendorEntry::name), Some("Second"));
    }

    #[test]
    fn test_device_count() {
        assert_eq!(sample().device_count(), 2);
    }

    #[test]
    fn test_vendors_ordered_by_code() {
        let registry = sample();
        let codes: Vec<&str> = registry.vendors().map(VendorEntry::code).collect();
        assert_eq!(codes, vec!["0eb0", "0eb1"]);
    }

    #[test]
    fn test_registry_display() {
        let expected = "\nVendor: Wacom (0eb0)\
                        \n       Device: Serial Tablet (0001)\
                        \n       Device: PenPartner (0007)\
                        \nVendor: OtherCo (0eb1)";
        assert_eq!(sample().to_string(), expected);
    }

    #[test]
    fn test_registry_serialization() {
        let json = serde_json::to_value(sample()).unwrap();
        let codes: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|vendor| vendor["code"].as_str().unwrap())
            .collect();
        assert_eq!(codes, vec!["0eb0", "0eb1"]);
        assert_eq!(json[0]["devices"].as_array().map(Vec::len), Some(2));
        assert_eq!(json[1]["devices"].as_array().map(Vec::len), Some(0));
    }
}
