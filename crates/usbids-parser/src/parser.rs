//! Registry parsing.
//!
//! This module provides the [`RegistryParser`] struct, which turns `usb.ids`
//! text into a [`Registry`] in a single pass.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};

use camino::Utf8Path;
use smallvec::SmallVec;
use tracing::{debug, info, warn};
use usbids_core::{FxHashMap, ParseConfig, Registry, VendorEntry};

use crate::error::ParseError;
use crate::line::{LineKind, classify_line};

/// A line the parser could not classify.
///
/// Unrecognized lines do not stop the parse. Each one is logged at `warn`
/// level and, when [`ParseConfig::collect_diagnostics`] is set, returned in
/// [`ParseResult::diagnostics`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based line number.
    pub line: usize,
    /// The line as read, without its newline.
    pub content: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: unrecognized line {:?}", self.line, self.content)
    }
}

/// Line counts by kind for one parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Lines read, including the section-end line if one was reached.
    pub lines: usize,
    /// Vendor lines, duplicates included.
    pub vendor_lines: usize,
    /// Device lines, duplicates included.
    pub device_lines: usize,
    /// Comment lines.
    pub comment_lines: usize,
    /// Empty lines.
    pub blank_lines: usize,
    /// Lines matching no known shape.
    pub unrecognized_lines: usize,
}

/// Result of parsing a registry.
///
/// # Examples
///
/// ```
/// use usbids_parser::RegistryParser;
///
/// let result = RegistryParser::default().parse_str("0eb0  Wacom\n??? garbage\n")?;
/// assert_eq!(result.registry.len(), 1);
/// assert_eq!(result.diagnostics.len(), 1);
/// assert_eq!(result.diagnostics[0].line, 2);
/// assert!(result.terminated_at.is_none());
/// # Ok::<(), usbids_parser::ParseError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// The parsed registry.
    pub registry: Registry,

    /// Unrecognized lines, in file order.
    ///
    /// Uses `SmallVec<[Diagnostic; 4]>` since a well-formed file has none.
    pub diagnostics: SmallVec<[Diagnostic; 4]>,

    /// Line number of the section terminator, if parsing stopped there.
    pub terminated_at: Option<usize>,

    /// Line counts by kind.
    pub stats: ParseStats,
}

/// Parser for `usb.ids` text.
///
/// The parser holds only its configuration and can be reused for any number
/// of inputs.
///
/// # Examples
///
/// ```
/// use usbids_parser::RegistryParser;
///
/// let source = "0eb0  Wacom\n\t0001  Serial Tablet\n\t0007  PenPartner\n0eb1  OtherCo\n";
/// let result = RegistryParser::default().parse_str(source)?;
///
/// let wacom = result.registry.lookup_vendor("0eb0").unwrap();
/// assert_eq!(wacom.name(), "Wacom");
/// assert_eq!(wacom.device_count(), 2);
/// assert_eq!(result.registry.lookup_vendor("0eb1").unwrap().device_count(), 0);
/// # Ok::<(), usbids_parser::ParseError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct RegistryParser {
    config: ParseConfig,
}

impl RegistryParser {
    /// Creates a parser with the given configuration.
    #[must_use]
    pub fn new(config: ParseConfig) -> Self {
        Self { config }
    }

    /// Returns the parser configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    /// Parses a registry file.
    ///
    /// The file is opened, read to the section terminator (or end of file)
    /// and closed before returning.
    ///
    /// # Errors
    ///
    /// - [`ParseError::FileAccess`] if the file cannot be opened or read
    ///   (including invalid UTF-8)
    /// - [`ParseError::MalformedInput`] if a device line precedes every
    ///   vendor line
    pub fn parse_file(&self, path: &Utf8Path) -> Result<ParseResult, ParseError> {
        info!(path = %path, "Parsing registry file");

        let file = File::open(path).map_err(|e| ParseError::file_access(path, e))?;

        self.parse_reader(BufReader::new(file))
            .map_err(|err| match err {
                ParseError::Read(source) => ParseError::file_access(path, source),
                other => other,
            })
    }

    /// Parses registry text held in memory.
    pub fn parse_str(&self, source: &str) -> Result<ParseResult, ParseError> {
        self.parse_reader(source.as_bytes())
    }

    /// Parses registry text from any buffered reader.
    ///
    /// Lines are split on `\n`; a `\r` directly before it is dropped too.
    ///
    /// # Errors
    ///
    /// - [`ParseError::Read`] if the reader fails
    /// - [`ParseError::MalformedInput`] if a device line precedes every
    ///   vendor line
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<ParseResult, ParseError> {
        let terminator = self.config.section_terminator.as_str();

        let mut vendors: FxHashMap<String, VendorEntry> = FxHashMap::default();
        let mut current_vendor: Option<String> = None;
        let mut diagnostics = SmallVec::new();
        let mut terminated_at = None;
        let mut stats = ParseStats::default();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = index + 1;
            stats.lines = line_number;

            match classify_line(&line, terminator) {
                LineKind::Blank => stats.blank_lines += 1,
                LineKind::Comment => stats.comment_lines += 1,
                LineKind::Vendor { code, name } => {
                    stats.vendor_lines += 1;
                    if vendors
                        .insert(code.to_owned(), VendorEntry::new(code, name))
                        .is_some()
                    {
                        debug!(line = line_number, code, "Vendor redefined, replacing");
                    }
                    current_vendor = Some(code.to_owned());
                }
                LineKind::Device { code, name } => {
                    stats.device_lines += 1;
                    let Some(vendor) = current_vendor
                        .as_deref()
                        .and_then(|current| vendors.get_mut(current))
                    else {
                        return Err(ParseError::malformed(line_number, line));
                    };
                    vendor.add_device(code, name);
                }
                LineKind::SectionEnd => {
                    debug!(line = line_number, "Reached end of vendor section");
                    terminated_at = Some(line_number);
                    break;
                }
                LineKind::Unrecognized => {
                    stats.unrecognized_lines += 1;
                    warn!(line = line_number, content = %line, "Unrecognized line");
                    if self.config.collect_diagnostics {
                        diagnostics.push(Diagnostic {
                            line: line_number,
                            content: line,
                        });
                    }
                }
            }
        }

        let registry: Registry = vendors.into_values().collect();

        debug!(
            vendors = registry.len(),
            devices = registry.device_count(),
            unrecognized = stats.unrecognized_lines,
            "Parsed registry"
        );

        Ok(ParseResult {
            registry,
            diagnostics,
            terminated_at,
            stats,
        })
    }
}
