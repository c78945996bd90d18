//! End-to-end parsing of an on-disk registry excerpt.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::NamedTempFile;
use usbids_parser::{ParseError, RegistryParser, load};

const EXCERPT: &str = "\
#
#\tList of USB ID's
#
#\tMaintained by Stephen J. Gowdy <linux.usb.ids@gmail.com>
#
# Version: 2024.03.18
#

# Syntax:
# vendor  vendor_name
#\tdevice  device_name\t\t\t\t<-- single tab
#\t\tinterface  interface_name\t\t<-- two tabs

0001  Fry's Electronics
\t7778  Counterfeit flash drive [Kingston]
03f0  HP, Inc
\t0004  DeskJet 895c
\t0011  OfficeJet G55
\t0104  DeskJet 880c/970c
\t\t00  Printer
0eb0  Wacom
\t0001  Serial Tablet
\t0007  PenPartner
0eb1  OtherCo

# List of known device classes, subclasses and protocols

# Syntax:
# C class  class_name
#\tsubclass  subclass_name\t\t\t<-- single tab

C 00  (Defined at Interface level)
C 01  Audio
\t01  Control Device
";

fn write_fixture(contents: &str) -> (NamedTempFile, Utf8PathBuf) {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    let path = Utf8PathBuf::from_path_buf(file.path().to_path_buf()).unwrap();
    (file, path)
}

#[test]
fn test_parse_registry_excerpt() {
    let (_file, path) = write_fixture(EXCERPT);
    let result = RegistryParser::default().parse_file(&path).unwrap();
    let registry = &result.registry;

    assert_eq!(registry.len(), 4);
    assert_eq!(registry.device_count(), 6);
    assert_eq!(
        registry.lookup_vendor("0001").map(|v| v.name()),
        Some("Fry's Electronics")
    );
    assert_eq!(
        registry.device_by_id(0x03f0, 0x0104).map(|d| d.name()),
        Some("DeskJet 880c/970c")
    );
    assert_eq!(registry.lookup_vendor("0eb1").map(|v| v.device_count()), Some(0));

    // Class section is never parsed, even though `C` is a hex digit
    assert!(registry.lookup_vendor("C").is_none());

    // The interface line under 03f0:0104 is the only unrecognized line
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].content, "\t\t00  Printer");
    assert_eq!(result.terminated_at, Some(26));
}

#[test]
fn test_registry_dump() {
    let source = "0eb0\tWacom\n\t0001\tSerial Tablet\n\t0007\tPenPartner\n0eb1\tOtherCo\n";
    let (_file, path) = write_fixture(source);
    let registry = load(Some(&path)).unwrap();

    insta::assert_snapshot!(registry.to_string().trim_start(), @r"
Vendor: Wacom (0eb0)
       Device: Serial Tablet (0001)
       Device: PenPartner (0007)
Vendor: OtherCo (0eb1)
");
}

#[test]
fn test_missing_file() {
    let err = load(Some(Utf8Path::new("/nonexistent/dir/usb.ids"))).unwrap_err();
    assert!(err.is_file_access());
    assert!(err.to_string().contains("/nonexistent/dir/usb.ids"));
}

#[test]
fn test_invalid_utf8_file_is_file_access_error() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"0eb0  Wacom\n\t0001  \xff\n").unwrap();
    let path = Utf8Path::from_path(file.path()).unwrap();

    let err = RegistryParser::default().parse_file(path).unwrap_err();
    assert!(matches!(err, ParseError::FileAccess { .. }));
}

#[test]
fn test_orphan_device_in_file() {
    let (_file, path) = write_fixture("\t0001  Orphan\n");
    let err = load(Some(&path)).unwrap_err();
    assert_eq!(err.line(), Some(1));
}
