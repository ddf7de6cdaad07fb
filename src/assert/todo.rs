//! Todo assertions: checks that are known to fail today.
//!
//! A todo assertion names the value the code *should* produce (`wanted`) and
//! the value it produces today (`current`). It passes while `actual` equals
//! `current`; once `actual` equals `wanted` the log asks for the todo to be
//! turned into a plain assertion.

use super::{escape, AssertValue, SEPARATOR};
use crate::fixture::FixtureRun;

impl FixtureRun<'_> {
    pub fn todo_assert_equals<W, C, A>(
        &mut self,
        file: &str,
        line: u32,
        wanted: W,
        current: C,
        actual: A,
    ) where
        W: AssertValue,
        C: AssertValue,
        A: AssertValue,
    {
        let wanted = wanted.render();
        let actual = actual.render();
        if wanted == actual {
            let block = format!(
                "{}: Assertion succeeded unexpectedly. Result: {}\n{}",
                self.location_str(file, line),
                escape(&wanted, true),
                SEPARATOR
            );
            self.ctx.record_notice(&block);
            self.ctx.succeeded_todos += 1;
        } else {
            self.assert_equals(file, line, current, actual.as_str(), "");
            self.ctx.todos += 1;
        }
    }
}
