//! Application-wide constants
//!
//! This module contains the string literals shared between the store, the
//! persistence layer and the command line, so the on-disk format has a
//! single source of truth.

/// Data file constants
pub mod storage {
    /// Default data file, resolved relative to the working directory
    pub const DEFAULT_FILENAME: &str = "sets.json";

    /// Reserved top-level key holding the theme name in the data file
    pub const THEME_KEY: &str = "__theme__";

    /// Indentation used when pretty-printing the data file
    pub const INDENT: &[u8] = b"    ";
}

/// Theme preset names as written to disk
pub mod theme {
    pub const LIGHT: &str = "light";
    pub const DARK: &str = "dark";
}

/// Logging constants
pub mod logging {
    /// Environment variable selecting the log level
    pub const LEVEL_VAR: &str = "LOG_LEVEL";
}
