//! Expected-error assertions.
//!
//! A call under test is reduced to a [`CallOutcome`]; the assertions below
//! compare that outcome with what the test declared.

use std::panic::{self, AssertUnwindSafe};

use super::SEPARATOR;
use crate::fixture::FixtureRun;

/// What happened when a call under test ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallOutcome {
    /// Returned `Ok`.
    Completed,
    /// Returned `Err` or panicked. `expected` is set when the error was of the
    /// kind the test asked for; a panic is never expected.
    Threw { expected: bool },
}

impl CallOutcome {
    /// Run `call`, classifying an `Err` with `is_expected`.
    pub fn capture<T, E, F, P>(call: F, is_expected: P) -> Self
    where
        F: FnOnce() -> Result<T, E>,
        P: FnOnce(&E) -> bool,
    {
        match panic::catch_unwind(AssertUnwindSafe(call)) {
            Ok(Ok(_)) => CallOutcome::Completed,
            Ok(Err(err)) => CallOutcome::Threw {
                expected: is_expected(&err),
            },
            Err(_) => CallOutcome::Threw { expected: false },
        }
    }

    pub fn threw(self) -> bool {
        matches!(self, CallOutcome::Threw { .. })
    }
}

impl FixtureRun<'_> {
    /// The call must fail with the expected error.
    pub fn assert_throw(&mut self, file: &str, line: u32, outcome: CallOutcome) -> bool {
        match outcome {
            CallOutcome::Threw { expected: true } => true,
            _ => {
                self.assert_throw_fail(file, line);
                false
            }
        }
    }

    /// The call must not fail at all.
    pub fn assert_no_throw(&mut self, file: &str, line: u32, outcome: CallOutcome) -> bool {
        if outcome.threw() {
            self.assert_no_throw_fail(file, line);
            return false;
        }
        true
    }

    /// The call should fail with the expected error but does not yet.
    ///
    /// Completing counts as a todo. Failing with the expected error records
    /// the "expected exception was thrown" failure; any other failure is an
    /// unexpected exception.
    pub fn todo_assert_throw(&mut self, file: &str, line: u32, outcome: CallOutcome) {
        match outcome {
            CallOutcome::Completed => self.ctx.todos += 1,
            CallOutcome::Threw { expected: true } => self.assert_throw_succeeded(file, line),
            CallOutcome::Threw { expected: false } => self.assert_no_throw_fail(file, line),
        }
    }

    /// Always a failure, despite the wording.
    pub fn assert_throw_succeeded(&mut self, file: &str, line: u32) {
        let block = format!(
            "{}: Assertion succeeded. The expected exception was thrown\n{}",
            self.location_str(file, line),
            SEPARATOR
        );
        self.ctx.record_failure(&block);
    }

    pub fn assert_throw_fail(&mut self, file: &str, line: u32) {
        let block = format!(
            "{}: Assertion failed. The expected exception was not thrown\n{}",
            self.location_str(file, line),
            SEPARATOR
        );
        self.ctx.record_failure(&block);
    }

    pub fn assert_no_throw_fail(&mut self, file: &str, line: u32) {
        let block = format!(
            "{}: Assertion failed. Unexpected exception was thrown\n{}",
            self.location_str(file, line),
            SEPARATOR
        );
        self.ctx.record_failure(&block);
    }
}
