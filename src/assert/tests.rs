use proptest::prelude::*;

use super::*;
use crate::capture::Console;
use crate::context::RunContext;
use crate::options::RunOptions;

fn new_context() -> RunContext {
    let (console, _, _) = Console::in_memory();
    RunContext::new(console)
}

/// Run `body` as case `case` of fixture `TestX` and return the context.
fn in_case<F>(body: F) -> RunContext
where
    F: FnOnce(&mut FixtureRun<'_>),
{
    let mut ctx = new_context();
    let opts = RunOptions::new("testrunner");
    {
        let mut t = FixtureRun::begin(&mut ctx, "TestX", &opts, "");
        assert!(t.prepare_test("case"));
        body(&mut t);
    }
    ctx
}

fn unescape_compact(rendered: &str) -> String {
    let inner = &rendered[1..rendered.len() - 1];
    inner
        .replace("\\n", "\n")
        .replace("\\t", "\t")
        .replace("\\\"", "\"")
}

#[test]
fn escape_block_mode() {
    assert_eq!(escape("", false), "");
    assert_eq!(escape("x", false), "x\n");
    assert_eq!(escape("a\nb", false), "a\\n\nb\n");
    assert_eq!(escape("a\n", false), "a\\n\n");
    assert_eq!(escape("\n\n", false), "\\n\n\\n\n");
    assert_eq!(escape("say \"hi\"\t", false), "say \\\"hi\\\"\\t\n");
}

#[test]
fn escape_compact_mode() {
    assert_eq!(escape("", true), "\"\"");
    assert_eq!(escape("a\nb\n", true), "\"a\\nb\\n\"");
    assert_eq!(escape("tab\there", true), "\"tab\\there\"");
}

#[test]
fn escape_non_printable_bytes_as_hex() {
    assert_eq!(escape("\u{0}\u{1b}\u{7f}", true), "\"\\x00\\x1b\\x7f\"");
    assert_eq!(escape("\u{e9}", false), "\\xc3\\xa9\n");
}

#[test]
fn delete_line_numbers_examples() {
    assert_eq!(delete_line_numbers("foo:123:bar:45:baz"), "foo::bar::baz");
    assert_eq!(delete_line_numbers("a:1b:2"), "a:1b:2");
    assert_eq!(delete_line_numbers(":1:2:"), ":::");
    assert_eq!(delete_line_numbers("x:12"), "x:12");
    assert_eq!(delete_line_numbers("::"), "::");
    assert_eq!(delete_line_numbers(""), "");
    assert_eq!(
        delete_line_numbers("[test.cpp:3]: (error) x\ntest.cpp:10:4: note"),
        "[test.cpp:3]: (error) x\ntest.cpp::: note"
    );
}

proptest! {
    #[test]
    fn compact_escape_reverses(text in "[ -\\[\\]-~\t\n]{0,40}") {
        prop_assert_eq!(unescape_compact(&escape(&text, true)), text);
    }

    #[test]
    fn delete_line_numbers_is_idempotent(text in "[a-c0-9:]{0,32}") {
        let once = delete_line_numbers(&text);
        prop_assert_eq!(delete_line_numbers(&once), once);
    }
}

#[test]
fn failed_condition_is_logged_and_counted() {
    let ctx = in_case(|t| {
        assert!(!t.assert_("a.rs", 10, false));
        assert!(t.assert_("a.rs", 11, true));
    });
    assert_eq!(ctx.fails(), 1);
    assert_eq!(
        ctx.failure_log(),
        "a.rs:10(TestX::case): Assertion failed.\n_____\n"
    );
}

#[test]
fn equality_mismatch_block() {
    let ctx = in_case(|t| {
        assert!(!t.assert_equals("a.rs", 3, "abc", "abd", "hint text"));
    });
    assert_eq!(
        ctx.failure_log(),
        "a.rs:3(TestX::case): Assertion failed. \n\
         Expected: \nabc\n\n\
         Actual: \nabd\n\n\
         Hint:\nhint text\n\
         _____\n"
    );
}

#[test]
fn equality_compares_rendered_values() {
    let ctx = in_case(|t| {
        assert!(t.assert_equals("a.rs", 1, "42", 42i64, ""));
        assert!(t.assert_equals("a.rs", 2, String::from("x"), "x", ""));
        assert!(!t.assert_equals("a.rs", 3, 1u32, 2u32, ""));
    });
    assert_eq!(ctx.fails(), 1);
    assert!(ctx.failure_log().contains("Expected: \n1\n\nActual: \n2\n\n_____\n"));
}

#[test]
fn multiline_mismatch_renders_escaped_lines() {
    let ctx = in_case(|t| {
        t.assert_equals("a.rs", 5, "l1\nl2\n", "l1\n", "");
    });
    assert!(ctx
        .failure_log()
        .contains("Expected: \nl1\\n\nl2\\n\n\nActual: \nl1\\n\n\n"));
}

#[test]
fn double_tolerance_bounds() {
    let ctx = in_case(|t| {
        assert!(t.assert_equals_double("a.rs", 1, 1.0, 1.5, 0.5, ""));
        assert!(t.assert_equals_double("a.rs", 2, 2.0, 1.5, 0.5, ""));
        assert!(!t.assert_equals_double("a.rs", 3, 2.5, 1.5, 0.5, ""));
        assert!(!t.assert_equals_double("a.rs", 4, f64::NAN, 1.0, 10.0, ""));
    });
    assert_eq!(ctx.fails(), 2);
    assert!(ctx.failure_log().contains("Expected: \n2.5\n\nActual: \n1.5\n\n"));
}

#[test]
fn equality_without_line_numbers() {
    let ctx = in_case(|t| {
        assert!(t.assert_equals_without_line_numbers(
            "a.rs",
            1,
            "file.c:3:1: error",
            "file.c:99:1: error",
            ""
        ));
        assert!(!t.assert_equals_without_line_numbers("a.rs", 2, "x:1:", "y:1:", ""));
    });
    assert_eq!(ctx.fails(), 1);
    assert!(ctx.failure_log().contains("Expected: \nx::\n\nActual: \ny::\n\n"));
}

#[test]
fn todo_wanted_value_reached() {
    let ctx = in_case(|t| t.todo_assert_equals("a.rs", 7, "X", "Y", "X"));
    assert_eq!(ctx.succeeded_todos(), 1);
    assert_eq!(ctx.todos(), 0);
    assert_eq!(ctx.fails(), 0);
    assert_eq!(
        ctx.failure_log(),
        "a.rs:7(TestX::case): Assertion succeeded unexpectedly. Result: \"X\"\n_____\n"
    );
}

#[test]
fn todo_current_value_still_produced() {
    let ctx = in_case(|t| t.todo_assert_equals("a.rs", 7, "X", "Y", "Y"));
    assert_eq!(ctx.todos(), 1);
    assert_eq!(ctx.succeeded_todos(), 0);
    assert_eq!(ctx.fails(), 0);
    assert_eq!(ctx.failure_log(), "");
}

#[test]
fn todo_neither_value_is_a_failure() {
    let ctx = in_case(|t| t.todo_assert_equals("a.rs", 7, 1, 2, 3));
    assert_eq!(ctx.todos(), 1);
    assert_eq!(ctx.fails(), 1);
    assert!(ctx.failure_log().contains("Expected: \n2\n\nActual: \n3\n\n"));
}

#[test]
fn call_outcome_classification() {
    let ok: Result<u8, String> = Ok(1);
    assert_eq!(
        CallOutcome::capture(|| ok, |_| true),
        CallOutcome::Completed
    );
    assert_eq!(
        CallOutcome::capture(|| Err::<(), _>("bad"), |e| *e == "bad"),
        CallOutcome::Threw { expected: true }
    );
    assert_eq!(
        CallOutcome::capture(|| Err::<(), _>("other"), |e| *e == "bad"),
        CallOutcome::Threw { expected: false }
    );
    assert_eq!(
        CallOutcome::capture(|| -> Result<(), ()> { panic!("boom") }, |_| true),
        CallOutcome::Threw { expected: false }
    );
}

#[test]
fn throw_assertions_wording() {
    let ctx = in_case(|t| {
        assert!(t.assert_throw("a.rs", 1, CallOutcome::Threw { expected: true }));
        assert!(!t.assert_throw("a.rs", 2, CallOutcome::Completed));
        assert!(!t.assert_no_throw("a.rs", 3, CallOutcome::Threw { expected: true }));
        assert!(t.assert_no_throw("a.rs", 4, CallOutcome::Completed));
        t.todo_assert_throw("a.rs", 5, CallOutcome::Threw { expected: true });
        t.todo_assert_throw("a.rs", 6, CallOutcome::Completed);
    });
    assert_eq!(ctx.fails(), 3);
    assert_eq!(ctx.todos(), 1);
    assert_eq!(
        ctx.failure_log(),
        "a.rs:2(TestX::case): Assertion failed. The expected exception was not thrown\n_____\n\
         a.rs:3(TestX::case): Assertion failed. Unexpected exception was thrown\n_____\n\
         a.rs:5(TestX::case): Assertion succeeded. The expected exception was thrown\n_____\n"
    );
}

#[test]
fn macros_record_call_site() {
    let ctx = in_case(|t| {
        crate::check!(t, false);
        crate::check_equals!(t, "a", "b");
        crate::check_equals_msg!(t, 1, 2, "numbers differ");
        crate::check_throws!(t, Ok::<(), ()>(()), ());
        crate::check_no_throw!(t, Err::<(), _>(()));
    });
    assert_eq!(ctx.fails(), 5);
    assert!(ctx.failure_log().contains("tests.rs:"));
    assert!(ctx.failure_log().contains("Hint:\nnumbers differ\n"));
}

#[test]
fn double_mismatch_uses_round_trip_rendering() {
    let ctx = in_case(|t| {
        assert!(!t.assert_equals_double("a.rs", 8, 0.3, 0.1 + 0.2, 0.0, ""));
    });
    assert!(ctx
        .failure_log()
        .contains("Expected: \n0.3\n\nActual: \n0.30000000000000004\n\n"));
}
