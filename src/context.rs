// RunContext: state of a single test run
// Centralizes the counters, failure log and capture state that every fixture
// of a run writes into, so runs stay isolated from one another.

use std::collections::BTreeSet;

use crate::capture::{CaptureBuffers, Console};

/// Mutable state shared by all fixtures of one run
///
/// Holds:
/// - the executed-test counter
/// - failure and todo counters
/// - the failure log (formatted blocks, each ending in `_____`)
/// - the missing-library set
/// - capture buffers and the console
///
/// A run is single-threaded; the context is passed down by `&mut`.
pub struct RunContext {
    pub(crate) count_tests: usize,
    pub(crate) fails: usize,
    pub(crate) todos: usize,
    pub(crate) succeeded_todos: usize,
    pub(crate) errmsg: String,
    pub(crate) missing_libs: BTreeSet<String>,
    pub(crate) capture: CaptureBuffers,
    pub(crate) console: Console,
}

impl RunContext {
    pub fn new(console: Console) -> Self {
        Self {
            count_tests: 0,
            fails: 0,
            todos: 0,
            succeeded_todos: 0,
            errmsg: String::new(),
            missing_libs: BTreeSet::new(),
            capture: CaptureBuffers::new(),
            console,
        }
    }

    /// Reset counters and the failure log. Missing libraries and capture
    /// buffers are left alone.
    pub fn reset_counters(&mut self) {
        self.count_tests = 0;
        self.fails = 0;
        self.todos = 0;
        self.succeeded_todos = 0;
        self.errmsg.clear();
    }

    pub fn count_tests(&self) -> usize {
        self.count_tests
    }

    pub fn fails(&self) -> usize {
        self.fails
    }

    pub fn todos(&self) -> usize {
        self.todos
    }

    pub fn succeeded_todos(&self) -> usize {
        self.succeeded_todos
    }

    pub fn failure_log(&self) -> &str {
        &self.errmsg
    }

    pub fn missing_libs(&self) -> &BTreeSet<String> {
        &self.missing_libs
    }

    pub fn capture(&self) -> &CaptureBuffers {
        &self.capture
    }

    pub fn console(&mut self) -> &mut Console {
        &mut self.console
    }

    /// Record a failed assertion block. `block` must already carry its
    /// trailing `_____` separator.
    pub(crate) fn record_failure(&mut self, block: &str) {
        self.fails += 1;
        self.errmsg.push_str(block);
    }

    /// Append to the failure log without counting a failure.
    pub(crate) fn record_notice(&mut self, block: &str) {
        self.errmsg.push_str(block);
    }

    pub(crate) fn add_missing_lib(&mut self, name: &str) {
        if !self.missing_libs.contains(name) {
            tracing::debug!(library = name, "missing library reported");
            self.missing_libs.insert(name.to_string());
        }
    }
}
