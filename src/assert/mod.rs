//! Assertion engine.
//!
//! Assertions are methods on [`FixtureRun`]: a failed assertion appends a
//! block to the run's failure log and bumps the failure counter, then returns
//! `false`. Execution of the case always continues. The macros in
//! [`macros`] fill in `file!()`/`line!()` for the call site.
//!
//! Every equality form compares rendered strings, so `"42"` and `42` are
//! equal and a mismatch always prints both sides through [`escape`].

mod escape;
mod macros;
mod throw;
mod todo;

pub use escape::{delete_line_numbers, escape};
pub use throw::CallOutcome;

use crate::fixture::FixtureRun;

/// Value that can take part in an equality assertion.
pub trait AssertValue {
    fn render(&self) -> String;
}

impl AssertValue for str {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl AssertValue for String {
    fn render(&self) -> String {
        self.clone()
    }
}

impl AssertValue for bool {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl AssertValue for char {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl<T: AssertValue + ?Sized> AssertValue for &T {
    fn render(&self) -> String {
        (**self).render()
    }
}

macro_rules! impl_assert_value_int {
    ($($ty:ty),*) => {
        $(impl AssertValue for $ty {
            fn render(&self) -> String {
                self.to_string()
            }
        })*
    };
}

impl_assert_value_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

const SEPARATOR: &str = "_____\n";

impl FixtureRun<'_> {
    /// Record a failure unless `condition` holds.
    pub fn assert_(&mut self, file: &str, line: u32, condition: bool) -> bool {
        if !condition {
            let block = format!(
                "{}: Assertion failed.\n{}",
                self.location_str(file, line),
                SEPARATOR
            );
            self.ctx.record_failure(&block);
        }
        condition
    }

    /// Compare the rendered forms of `expected` and `actual`; `msg` is printed
    /// as a hint on mismatch when non-empty.
    pub fn assert_equals<E, A>(
        &mut self,
        file: &str,
        line: u32,
        expected: E,
        actual: A,
        msg: &str,
    ) -> bool
    where
        E: AssertValue,
        A: AssertValue,
    {
        let expected = expected.render();
        let actual = actual.render();
        if expected != actual {
            self.assert_equals_failed(file, line, &expected, &actual, msg);
            return false;
        }
        true
    }

    /// Equality within `tolerance`: passes iff
    /// `actual - tolerance <= expected <= actual + tolerance`.
    pub fn assert_equals_double(
        &mut self,
        file: &str,
        line: u32,
        expected: f64,
        actual: f64,
        tolerance: f64,
        msg: &str,
    ) -> bool {
        let within = actual - tolerance <= expected && expected <= actual + tolerance;
        if !within {
            // Shortest round-trip form: 0.1 + 0.2 prints as 0.30000000000000004.
            let (expected, actual) = (expected.to_string(), actual.to_string());
            self.assert_equals_failed(file, line, &expected, &actual, msg);
        }
        within
    }

    /// String equality after stripping `:NUMBER:` line numbers from both sides.
    pub fn assert_equals_without_line_numbers(
        &mut self,
        file: &str,
        line: u32,
        expected: &str,
        actual: &str,
        msg: &str,
    ) -> bool {
        let expected = delete_line_numbers(expected);
        let actual = delete_line_numbers(actual);
        self.assert_equals(file, line, expected.as_str(), actual.as_str(), msg)
    }

    fn assert_equals_failed(
        &mut self,
        file: &str,
        line: u32,
        expected: &str,
        actual: &str,
        msg: &str,
    ) {
        let mut block = format!(
            "{}: Assertion failed. \nExpected: \n{}\nActual: \n{}\n",
            self.location_str(file, line),
            escape(expected, false),
            escape(actual, false)
        );
        if !msg.is_empty() {
            block.push_str("Hint:\n");
            block.push_str(msg);
            block.push('\n');
        }
        block.push_str(SEPARATOR);
        self.ctx.record_failure(&block);
    }
}

#[cfg(test)]
mod tests;
