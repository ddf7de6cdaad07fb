// Fixture Harness - self-registering test fixtures
// Name-ordered fixture registry, selective runs and a string-diffing assertion engine

// Module declarations
pub mod assert;
pub mod capture;
pub mod checks;
pub mod config;
pub mod context;
pub mod diagnostic;
pub mod error;
pub mod fixture;
pub mod options;
pub mod registry;
pub mod runner;
pub mod suites;

// Re-exports for convenience
pub use capture::Console;
pub use context::RunContext;
pub use fixture::{Fixture, FixtureRun};
pub use options::RunOptions;
pub use registry::Registry;
pub use runner::run_tests;

use tracing_subscriber::EnvFilter;

/// Install the tracing subscriber.
///
/// `RUST_LOG` wins over `default_filter`. Logs go to stderr so they never mix
/// with the progress stream. Calling this more than once is harmless.
pub fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_logging_twice_is_harmless() {
        init_logging("debug");
        init_logging("not a valid filter [");
    }
}
