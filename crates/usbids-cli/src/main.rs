//! CLI entry point for inspecting a `usb.ids` registry.
//!
//! This binary loads a registry file and prints what the parser made of it.
//! It is a debugging aid; the library crates do not depend on it.
//!
//! # Usage
//!
//! ```bash
//! usbids [OPTIONS] <COMMAND>
//!
//! # Dump every vendor and device
//! usbids --file /usr/share/hwdata/usb.ids dump
//!
//! # Dump as JSON
//! usbids --file /usr/share/hwdata/usb.ids dump --format json
//!
//! # Look up a vendor, or a device under it
//! usbids --file /usr/share/hwdata/usb.ids lookup 0eb0 0001
//!
//! # Show line statistics and unrecognized lines
//! usbids --file /usr/share/hwdata/usb.ids stats
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

use std::io::Write;

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use usbids_core::{Config, DeviceEntry, Registry, VendorEntry};
use usbids_parser::{ParseResult, RegistryParser};

// =============================================================================
// CLI ARGUMENT TYPES
// =============================================================================

/// Inspect a `usb.ids` vendor/device registry.
#[derive(Parser)]
#[command(name = "usbids", version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    command: Commands,

    /// Path to the `usb.ids` file.
    ///
    /// Overrides `source.path` from the configuration file. Without either,
    /// the registry is empty.
    #[arg(short, long, global = true, env = "USB_IDS_PATH")]
    file: Option<Utf8PathBuf>,

    /// Path to a JSON configuration file.
    #[arg(long, global = true, env = "USB_IDS_CONFIG")]
    config: Option<Utf8PathBuf>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Print the resolved path and every parsed vendor and device.
    Dump {
        /// Output format.
        #[arg(short = 'F', long, value_enum, default_value_t = DumpFormat::Text)]
        format: DumpFormat,
    },

    /// Look up a vendor, or a device under a vendor.
    Lookup {
        /// Vendor code (hex, e.g. `0eb0`).
        vendor: String,

        /// Device code (hex, e.g. `0001`).
        device: Option<String>,
    },

    /// Print line statistics and unrecognized lines.
    Stats,
}

/// Dump output format.
#[derive(Clone, Copy, ValueEnum)]
enum DumpFormat {
    /// Human-readable listing.
    Text,
    /// JSON array of vendors.
    Json,
}

// =============================================================================
// INITIALIZATION FUNCTIONS
// =============================================================================

/// Initializes the tracing subscriber for logging.
///
/// Respects the `RUST_LOG` environment variable if set. Otherwise, uses
/// `debug` level if `--verbose` is set, or `info` level by default.
fn init_tracing(verbose: bool, no_color: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "info" };
        EnvFilter::new(level)
    });

    // Check if colors should be disabled (flag or NO_COLOR env var)
    let use_ansi = !no_color && std::env::var("NO_COLOR").is_err();

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(use_ansi)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

/// Builds a [`Config`] from the optional config file and CLI arguments.
///
/// # Errors
///
/// Returns an error if the config file cannot be read or is invalid.
fn build_config(cli: &Cli) -> color_eyre::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };

    if let Some(file) = &cli.file {
        config.source.path = Some(file.clone());
    }

    Ok(config)
}

/// Parses the configured registry file.
///
/// Without a configured path the result holds an empty registry.
fn parse_registry(config: &Config) -> color_eyre::Result<ParseResult> {
    let parser = RegistryParser::new(config.parse.clone());

    match config.source_path() {
        Some(path) => Ok(parser.parse_file(path)?),
        None => {
            info!("No registry file configured, using an empty registry");
            Ok(parser.parse_str("")?)
        }
    }
}

// =============================================================================
// COMMAND IMPLEMENTATIONS
// =============================================================================

/// Prints the resolved path and the registry dump.
fn run_dump(config: &Config, format: DumpFormat) -> color_eyre::Result<()> {
    let result = parse_registry(config)?;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    match format {
        DumpFormat::Text => {
            if let Some(path) = config.source_path() {
                let resolved = path.canonicalize_utf8().unwrap_or_else(|_| path.to_owned());
                writeln!(handle, "{resolved}")?;
            }
            writeln!(handle, "{}", result.registry)?;
        }
        DumpFormat::Json => {
            let json = serde_json::to_string_pretty(&result.registry)
                .map_err(|e| color_eyre::eyre::eyre!("Failed to serialize JSON: {}", e))?;
            writeln!(handle, "{json}")?;
        }
    }

    Ok(())
}

/// Prints a vendor, or a single device under it.
fn run_lookup(config: &Config, vendor: &str, device: Option<&str>) -> color_eyre::Result<()> {
    let result = parse_registry(config)?;

    let Some(vendor_entry) = find_vendor(&result.registry, vendor) else {
        return Err(color_eyre::eyre::eyre!("Unknown vendor: {}", vendor));
    };

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    match device {
        Some(device) => {
            let Some(device_entry) = find_device(vendor_entry, device) else {
                return Err(color_eyre::eyre::eyre!(
                    "Unknown device {} for vendor {} ({})",
                    device,
                    vendor_entry.code(),
                    vendor_entry.name()
                ));
            };
            writeln!(handle, "Vendor: {} ({})", vendor_entry.name(), vendor_entry.code())?;
            writeln!(handle, "   {device_entry}")?;
        }
        None => writeln!(handle, "{vendor_entry}")?,
    }

    Ok(())
}

/// Prints line statistics and every unrecognized line.
fn run_stats(config: &Config) -> color_eyre::Result<()> {
    let result = parse_registry(config)?;
    let stats = &result.stats;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    writeln!(handle, "Vendors:            {}", result.registry.len())?;
    writeln!(handle, "Devices:            {}", result.registry.device_count())?;
    writeln!(handle)?;
    writeln!(handle, "Lines read:         {}", stats.lines)?;
    writeln!(handle, "  Vendor lines:     {}", stats.vendor_lines)?;
    writeln!(handle, "  Device lines:     {}", stats.device_lines)?;
    writeln!(handle, "  Comments:         {}", stats.comment_lines)?;
    writeln!(handle, "  Blank:            {}", stats.blank_lines)?;
    writeln!(handle, "  Unrecognized:     {}", stats.unrecognized_lines)?;

    if let Some(line) = result.terminated_at {
        writeln!(handle, "Vendor section ends at line {line}")?;
    }

    if !result.diagnostics.is_empty() {
        writeln!(handle)?;
        writeln!(handle, "Unrecognized lines ({}):", result.diagnostics.len())?;
        for diagnostic in &result.diagnostics {
            writeln!(handle, "  {diagnostic}")?;
        }
    }

    Ok(())
}

// =============================================================================
// LOOKUP HELPERS
// =============================================================================

/// Finds a vendor by exact code, falling back to its numeric ID so that
/// `0EB0` and `eb0` both find `0eb0`.
fn find_vendor<'a>(registry: &'a Registry, code: &str) -> Option<&'a VendorEntry> {
    registry
        .lookup_vendor(code)
        .or_else(|| parse_id(code).and_then(|id| registry.vendor_by_id(id)))
}

/// Finds a device by exact code, falling back to its numeric ID.
fn find_device<'a>(vendor: &'a VendorEntry, code: &str) -> Option<&'a DeviceEntry> {
    vendor
        .device(code)
        .or_else(|| parse_id(code).and_then(|id| vendor.device_by_id(id)))
}

fn parse_id(code: &str) -> Option<u16> {
    let code = code.strip_prefix("0x").unwrap_or(code);
    if code.is_empty() || !code.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u16::from_str_radix(code, 16).ok()
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Application entry point.
fn main() -> color_eyre::Result<()> {
    // 1. Install color-eyre FIRST (before any potential panics)
    color_eyre::install()?;

    // 2. Parse CLI arguments
    let cli = Cli::parse();

    // 3. Initialize tracing (handles --no-color for log output)
    init_tracing(cli.verbose, cli.no_color);

    // 4. Route to appropriate command
    let config = build_config(&cli)?;
    match &cli.command {
        Commands::Dump { format } => run_dump(&config, *format),
        Commands::Lookup { vendor, device } => run_lookup(&config, vendor, device.as_deref()),
        Commands::Stats => run_stats(&config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Registry {
        let mut wacom = VendorEntry::new("0eb0", "Wacom");
        wacom.add_device("0001", "Serial Tablet");
        [wacom].into_iter().collect()
    }

    #[test]
    fn test_find_vendor_exact_and_numeric() {
        let registry = registry();
        assert!(find_vendor(&registry, "0eb0").is_some());
        assert!(find_vendor(&registry, "0EB0").is_some());
        assert!(find_vendor(&registry, "0xeb0").is_some());
        assert!(find_vendor(&registry, "0eb1").is_none());
        assert!(find_vendor(&registry, "wacom").is_none());
    }

    #[test]
    fn test_find_device_numeric_fallback() {
        let registry = registry();
        let vendor = find_vendor(&registry, "0eb0").unwrap();
        assert_eq!(find_device(vendor, "1").map(DeviceEntry::name), Some("Serial Tablet"));
        assert!(find_device(vendor, "0002").is_none());
    }

    #[test]
    fn test_build_config_file_flag_overrides() {
        let cli = Cli::parse_from(["usbids", "--file", "data/usb.ids", "stats"]);
        let config = build_config(&cli).unwrap();
        assert_eq!(config.source_path().map(|p| p.as_str()), Some("data/usb.ids"));
    }

    #[test]
    fn test_cli_lookup_arguments() {
        let cli = Cli::parse_from(["usbids", "lookup", "0eb0", "0001"]);
        assert!(matches!(
            cli.command,
            Commands::Lookup { ref vendor, ref device }
                if vendor == "0eb0" && device.as_deref() == Some("0001")
        ));
    }
}
