//! Call-site macros for fixtures. Each one records `file!()` and `line!()`.

/// Run `$fixture.$case(t)` if the case is selected.
#[macro_export]
macro_rules! test_case {
    ($t:expr, $fixture:expr, $case:ident) => {
        if $t.prepare_test(stringify!($case)) {
            $fixture.$case($t);
        }
    };
}

#[macro_export]
macro_rules! check {
    ($t:expr, $cond:expr) => {
        $t.assert_(file!(), line!(), $cond)
    };
}

#[macro_export]
macro_rules! check_equals {
    ($t:expr, $expected:expr, $actual:expr) => {
        $t.assert_equals(file!(), line!(), &$expected, &$actual, "")
    };
}

#[macro_export]
macro_rules! check_equals_msg {
    ($t:expr, $expected:expr, $actual:expr, $msg:expr) => {
        $t.assert_equals(file!(), line!(), &$expected, &$actual, $msg)
    };
}

#[macro_export]
macro_rules! check_equals_double {
    ($t:expr, $expected:expr, $actual:expr, $tolerance:expr) => {
        $t.assert_equals_double(file!(), line!(), $expected, $actual, $tolerance, "")
    };
}

#[macro_export]
macro_rules! check_equals_without_line_numbers {
    ($t:expr, $expected:expr, $actual:expr) => {
        $t.assert_equals_without_line_numbers(file!(), line!(), &$expected, &$actual, "")
    };
}

#[macro_export]
macro_rules! todo_check_equals {
    ($t:expr, $wanted:expr, $current:expr, $actual:expr) => {
        $t.todo_assert_equals(file!(), line!(), &$wanted, &$current, &$actual)
    };
}

/// `$call` must return an `Err` matching `$pattern`.
#[macro_export]
macro_rules! check_throws {
    ($t:expr, $call:expr, $pattern:pat) => {{
        let outcome = $crate::assert::CallOutcome::capture(
            || $call,
            |err| matches!(err, $pattern),
        );
        $t.assert_throw(file!(), line!(), outcome)
    }};
}

#[macro_export]
macro_rules! check_no_throw {
    ($t:expr, $call:expr) => {{
        let outcome = $crate::assert::CallOutcome::capture(|| $call, |_| false);
        $t.assert_no_throw(file!(), line!(), outcome)
    }};
}

#[macro_export]
macro_rules! todo_check_throws {
    ($t:expr, $call:expr, $pattern:pat) => {{
        let outcome = $crate::assert::CallOutcome::capture(
            || $call,
            |err| matches!(err, $pattern),
        );
        $t.todo_assert_throw(file!(), line!(), outcome)
    }};
}
