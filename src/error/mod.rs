// Error types for the fixture harness
//
// Assertion failures are never errors: they are recorded in the run context and
// the run always completes. This module covers the operational failures around
// a run (configuration, selectors, console I/O).

mod harness;

pub use harness::{log_harness_error, HarnessError, HarnessErrorCodes};

/// Error codes for structured error reporting
///
/// This trait provides a standard way to get error codes and messages
/// from custom error types, so the binary can report them uniformly.
pub trait ErrorCode {
    /// Get the numeric error code
    fn code(&self) -> i32;

    /// Get the human-readable error message
    fn message(&self) -> String;
}
