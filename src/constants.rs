//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the fixed UI copy.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Duck Attire Customizer";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "duck-attire";

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "DuckAttire";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "DUCK_ATTIRE_CONFIG_DIR";

/// Environment variable that overrides the TUI log file path.
pub const LOG_FILE_ENV: &str = "DUCK_ATTIRE_LOG";

/// Prompt shown in the display area while the selection is incomplete.
pub const DISPLAY_PLACEHOLDER: &str = "Select options above to see your customized attire";

/// Summary text shown while the selection is incomplete.
pub const EMPTY_SUMMARY: &str = "No selections made yet.";

/// Default preview image used when the real image is missing or fails to load.
pub const PREVIEW_FALLBACK_IMAGE: &str = "https://via.placeholder.com/400?text=Duck+Attire";

/// Default gallery card image used when the real image fails to load.
pub const GALLERY_FALLBACK_IMAGE: &str = "https://via.placeholder.com/200?text=Duck+Attire";
