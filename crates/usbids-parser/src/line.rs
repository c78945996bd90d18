//! Line classification for `usb.ids`.
//!
//! Every line of the vendor/device section has one of these shapes:
//!
//! | Shape       | Example                       | Kind                    |
//! |-------------|-------------------------------|-------------------------|
//! | Empty       | (nothing)                     | [`LineKind::Blank`]      |
//! | Comment     | `# Version: 2024.01.01`       | [`LineKind::Comment`]    |
//! | Vendor      | `0eb0  Wacom`                 | [`LineKind::Vendor`]     |
//! | Device      | `\t0001  Serial Tablet`       | [`LineKind::Device`]     |
//! | Section end | `# List of known device classes, subclasses and protocols` | [`LineKind::SectionEnd`] |
//!
//! A vendor line is one or more hex digits, a whitespace run, then the name
//! (`^([0-9a-fA-F]+)\s+(.*)$`). A device line is the same shape after exactly
//! one leading tab. Anything else is [`LineKind::Unrecognized`].
//!
//! The section-end marker is itself a comment in real files, so comment
//! lines are checked for it before being skipped.

/// The shape of a single `usb.ids` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Empty line.
    Blank,

    /// Line starting with `#`.
    Comment,

    /// Top-level vendor entry.
    Vendor {
        /// Hex code, case as written.
        code: &'a str,
        /// Everything after the whitespace following the code.
        name: &'a str,
    },

    /// Tab-indented device entry belonging to the preceding vendor.
    Device {
        /// Hex code, case as written.
        code: &'a str,
        /// Everything after the whitespace following the code.
        name: &'a str,
    },

    /// Line containing the section terminator; parsing stops here.
    SectionEnd,

    /// Line that fits none of the other shapes.
    Unrecognized,
}

/// Classifies one line (without its trailing newline).
///
/// `terminator` is the substring that ends the vendor/device section, usually
/// [`DEFAULT_SECTION_TERMINATOR`](usbids_core::DEFAULT_SECTION_TERMINATOR).
///
/// # Examples
///
/// ```
/// use usbids_parser::{LineKind, classify_line};
/// use usbids_core::DEFAULT_SECTION_TERMINATOR;
///
/// assert_eq!(
///     classify_line("0eb0  Wacom", DEFAULT_SECTION_TERMINATOR),
///     LineKind::Vendor { code: "0eb0", name: "Wacom" }
/// );
/// assert_eq!(
///     classify_line("\t0001  Serial Tablet", DEFAULT_SECTION_TERMINATOR),
///     LineKind::Device { code: "0001", name: "Serial Tablet" }
/// );
/// assert_eq!(
///     classify_line("# List of known device classes", DEFAULT_SECTION_TERMINATOR),
///     LineKind::SectionEnd
/// );
/// assert_eq!(
///     classify_line("??? garbage", DEFAULT_SECTION_TERMINATOR),
///     LineKind::Unrecognized
/// );
/// ```
pub fn classify_line<'a>(line: &'a str, terminator: &str) -> LineKind<'a> {
    if line.is_empty() {
        return LineKind::Blank;
    }

    if line.starts_with('#') {
        return if line.contains(terminator) {
            LineKind::SectionEnd
        } else {
            LineKind::Comment
        };
    }

    if let Some((code, name)) = split_entry(line) {
        return LineKind::Vendor { code, name };
    }

    if let Some((code, name)) = line.strip_prefix('\t').and_then(split_entry) {
        return LineKind::Device { code, name };
    }

    if line.contains(terminator) {
        LineKind::SectionEnd
    } else {
        LineKind::Unrecognized
    }
}

/// Splits `<hex><whitespace><name>` into code and name.
///
/// The whitespace run is consumed entirely, so the name never starts with
/// whitespace; trailing text is kept as is.
fn split_entry(s: &str) -> Option<(&str, &str)> {
    let code_len = s.bytes().take_while(u8::is_ascii_hexdigit).count();
    if code_len == 0 {
        return None;
    }

    let (code, rest) = s.split_at(code_len);
    let name = rest.trim_start_matches(char::is_whitespace);

    // No whitespace after the code, e.g. `0eb0x` or a bare `0eb0`
    if name.len() == rest.len() {
        return None;
    }

    Some((code, name))
}
