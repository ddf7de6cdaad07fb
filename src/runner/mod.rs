//! Top-level driver: selection, dispatch and the end-of-run summary.

use std::io::Write;

use crate::context::RunContext;
use crate::error::HarnessError;
use crate::fixture::FixtureRun;
use crate::options::RunOptions;
use crate::registry::Registry;

/// A parsed `ClassName[::CaseName]` selector. Empty filters match everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selector<'s> {
    pub class_filter: &'s str,
    pub case_filter: &'s str,
}

impl<'s> Selector<'s> {
    /// Split on the first `::`.
    pub fn parse(selector: &'s str) -> Self {
        match selector.split_once("::") {
            Some((class_filter, case_filter)) => Self {
                class_filter,
                case_filter,
            },
            None => Self {
                class_filter: selector,
                case_filter: "",
            },
        }
    }

    pub fn matches_class(&self, class_name: &str) -> bool {
        self.class_filter.is_empty() || self.class_filter == class_name
    }
}

/// Run every selected fixture of `registry` and print the summary.
///
/// Counters and the failure log are reset first. Returns the number of failed
/// assertions; anything but zero means the run failed.
pub fn run_tests(
    registry: &Registry,
    opts: &RunOptions,
    ctx: &mut RunContext,
) -> Result<usize, HarnessError> {
    ctx.reset_counters();
    let fixtures = registry.all_fixtures();

    for raw in opts.which_test() {
        let selector = Selector::parse(raw);
        tracing::debug!(
            class = selector.class_filter,
            case = selector.case_filter,
            "processing selector"
        );
        for fixture in fixtures
            .iter()
            .filter(|fixture| selector.matches_class(fixture.class_name()))
        {
            let mut run =
                FixtureRun::begin(ctx, fixture.class_name(), opts, selector.case_filter);
            fixture.run(&mut run);
        }
    }

    print_summary(ctx)?;
    tracing::info!(
        tests = ctx.count_tests(),
        failures = ctx.fails(),
        todos = ctx.todos(),
        "test run complete"
    );
    Ok(ctx.fails())
}

/// Write the counts to standard output and the failure log to the error stream.
pub fn print_summary(ctx: &mut RunContext) -> Result<(), HarnessError> {
    let count_tests = ctx.count_tests;
    let todos = ctx.todos;
    let succeeded_todos = ctx.succeeded_todos;
    let fails = ctx.fails;

    let out = ctx.console.stdout();
    write!(out, "\n\nTesting Complete\nNumber of tests: {}\n", count_tests)?;
    write!(out, "Number of todos: {}", todos)?;
    if succeeded_todos > 0 {
        write!(out, " ({} succeeded)", succeeded_todos)?;
    }
    writeln!(out)?;
    // Counts go out before the failure log in case stdout is buffered.
    out.flush()?;

    let err = ctx.console.stderr();
    write!(err, "Tests failed: {}\n\n", fails)?;
    err.write_all(ctx.errmsg.as_bytes())?;
    if !ctx.missing_libs.is_empty() {
        write!(err, "Missing libraries: ")?;
        for lib in &ctx.missing_libs {
            write!(err, "{}  ", lib)?;
        }
        write!(err, "\n\n")?;
    }
    err.flush()?;
    Ok(())
}
