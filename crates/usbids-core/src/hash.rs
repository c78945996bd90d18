//! Fast hash map and hash set type aliases.
//!
//! Vendor and device tables are keyed by short hex strings, which is exactly
//! the case the Fx hash algorithm from `rustc-hash` is tuned for. The registry
//! is built from a trusted local file, so denial-of-service resistance is not
//! required.
//!
//! # Examples
//!
//! ```
//! use usbids_core::{FxHashMap, fx_hash_map};
//!
//! let mut vendors: FxHashMap<String, &str> = fx_hash_map();
//! vendors.insert("0eb0".to_owned(), "Wacom");
//! assert_eq!(vendors.get("0eb0"), Some(&"Wacom"));
//! ```

/// A [`HashMap`](std::collections::HashMap) using the Fx hash algorithm.
pub type FxHashMap<K, V> = rustc_hash::FxHashMap<K, V>;

/// A [`HashSet`](std::collections::HashSet) using the Fx hash algorithm.
pub type FxHashSet<V> = rustc_hash::FxHashSet<V>;

/// The hasher used by [`FxHashMap`] and [`FxHashSet`].
pub type FxBuildHasher = rustc_hash::FxBuildHasher;

/// Creates a new empty [`FxHashMap`].
///
/// Equivalent to `FxHashMap::default()`, but reads better where the map type
/// is inferred from a struct field.
#[inline]
#[must_use]
pub fn fx_hash_map<K, V>() -> FxHashMap<K, V> {
    FxHashMap::default()
}

/// Creates a new [`FxHashMap`] able to hold `capacity` entries without
/// reallocating.
///
/// # Examples
///
/// ```
/// use usbids_core::fx_hash_map_with_capacity;
///
/// let map: usbids_core::FxHashMap<String, u16> = fx_hash_map_with_capacity(64);
/// assert!(map.capacity() >= 64);
/// ```
#[inline]
#[must_use]
pub fn fx_hash_map_with_capacity<K, V>(capacity: usize) -> FxHashMap<K, V> {
    FxHashMap::with_capacity_and_hasher(capacity, FxBuildHasher::default())
}
