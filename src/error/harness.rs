// Harness error types and constants

use crate::error::ErrorCode;
use log::error;
use std::fmt;
use std::path::PathBuf;

/// Harness error code constants
///
/// Error code range: 3001-3004
pub struct HarnessErrorCodes {}

impl HarnessErrorCodes {
    /// Configuration file could not be read
    pub const CONFIG_READ: i32 = 3001;

    /// Configuration file is not valid JSON for `HarnessConfig`
    pub const CONFIG_PARSE: i32 = 3002;

    /// Writing to the console streams failed
    pub const CONSOLE_IO: i32 = 3003;

    /// Selector string is malformed
    pub const INVALID_SELECTOR: i32 = 3004;
}

/// Log a harness error with structured context
pub fn log_harness_error(err: &HarnessError, context: &str) {
    error!(
        "Harness error in {}: code={}, component=Runner, message={}",
        context,
        err.code(),
        err.message()
    );
}

/// Operational errors raised around a test run
#[derive(Debug, Clone, PartialEq)]
pub enum HarnessError {
    /// Configuration file could not be read
    ConfigRead { path: PathBuf, reason: String },

    /// Configuration file could not be parsed
    ConfigParse { path: PathBuf, reason: String },

    /// Console stream write failed
    ConsoleIo { details: String },

    /// Selector contains characters a class or case name never has
    InvalidSelector { selector: String },
}

impl ErrorCode for HarnessError {
    fn code(&self) -> i32 {
        match self {
            HarnessError::ConfigRead { .. } => HarnessErrorCodes::CONFIG_READ,
            HarnessError::ConfigParse { .. } => HarnessErrorCodes::CONFIG_PARSE,
            HarnessError::ConsoleIo { .. } => HarnessErrorCodes::CONSOLE_IO,
            HarnessError::InvalidSelector { .. } => HarnessErrorCodes::INVALID_SELECTOR,
        }
    }

    fn message(&self) -> String {
        match self {
            HarnessError::ConfigRead { path, reason } => {
                format!("Failed to read config {}: {}", path.display(), reason)
            }
            HarnessError::ConfigParse { path, reason } => {
                format!("Failed to parse config {}: {}", path.display(), reason)
            }
            HarnessError::ConsoleIo { details } => format!("Console write failed: {}", details),
            HarnessError::InvalidSelector { selector } => {
                format!("Invalid test selector {:?}", selector)
            }
        }
    }
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HarnessError (code {}): {}", self.code(), self.message())
    }
}

impl std::error::Error for HarnessError {}

impl From<std::io::Error> for HarnessError {
    fn from(err: std::io::Error) -> Self {
        HarnessError::ConsoleIo {
            details: err.to_string(),
        }
    }
}
