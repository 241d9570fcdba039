// LineSmith - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "LineSmith";

/// Application identifier used for config directories.
pub const APP_ID: &str = "LineSmith";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Output naming
// =============================================================================

/// Prefix prepended to the source file stem to form the output filename.
pub const OUTPUT_PREFIX: &str = "modified_";

/// Extension of the output file (the source extension is always replaced).
pub const OUTPUT_EXTENSION: &str = "txt";

// =============================================================================
// Transformation
// =============================================================================

/// Separator between the line number and the line content.
pub const NUMBER_SEPARATOR: &str = " | ";

/// Minimum zero-padding width for line numbers (applies to empty input,
/// where there is no line count to take a digit count of).
pub const MIN_NUMBER_WIDTH: usize = 1;

// =============================================================================
// Interactive loop
// =============================================================================

/// Inputs (case-insensitive) that terminate the prompt loop.
pub const QUIT_COMMANDS: &[&str] = &["q", "quit", "exit"];

/// Prompt shown before each filename read.
pub const PROMPT: &str = "Enter the filename to read: ";

/// Farewell printed on cancellation (quit command, EOF, or interrupt).
pub const FAREWELL: &str = "Goodbye!";

// =============================================================================
// Resource bounds
// =============================================================================

/// Source file size in bytes above which a warning is logged before reading.
/// The read still proceeds; the whole file is held in memory either way.
pub const DEFAULT_LARGE_FILE_WARNING_BYTES: u64 = 50 * 1024 * 1024; // 50 MB

/// Minimum user-configurable large-file warning threshold.
pub const MIN_LARGE_FILE_WARNING_BYTES: u64 = 1024; // 1 KB

/// Maximum user-configurable large-file warning threshold.
pub const MAX_LARGE_FILE_WARNING_BYTES: u64 = 1024 * 1024 * 1024; // 1 GB

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted from config.toml.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
