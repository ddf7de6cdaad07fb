//! Fixture contract and the per-fixture run state.
//!
//! A [`Fixture`] is a named group of test cases. Fixtures are immutable and
//! live in the [registry](crate::registry) for the whole process; everything
//! that changes while a fixture runs (current case, verbosity, template
//! preferences, quiet mode) lives in a [`FixtureRun`] created by the runner
//! for that fixture only.

use std::io::Write;

use crate::context::RunContext;
use crate::diagnostic::{Diagnostic, DiagnosticSink};
use crate::options::RunOptions;

/// A test suite.
///
/// `run` declares the cases, normally one [`test_case!`](crate::test_case)
/// per case:
///
/// ```ignore
/// fn run(&self, t: &mut FixtureRun<'_>) {
///     test_case!(t, self, instances_sorted);
///     test_case!(t, self, class_info_format);
/// }
/// ```
pub trait Fixture: Send + Sync {
    /// Unique class name; also the registry sort key.
    fn class_name(&self) -> &str;

    /// Invoke every selected case.
    fn run(&self, t: &mut FixtureRun<'_>);
}

/// State of one fixture while its cases execute.
///
/// In quiet mode the console is redirected for as long as this value lives;
/// dropping it restores the console on every exit path.
pub struct FixtureRun<'a> {
    pub(crate) ctx: &'a mut RunContext,
    classname: String,
    test_to_run: String,
    test_name: String,
    verbose: bool,
    quiet: bool,
    exename: String,
    template_format: String,
    template_location: String,
}

impl<'a> FixtureRun<'a> {
    /// Prepare `classname` for running the cases matching `case_filter`
    /// (empty: all cases).
    ///
    /// Options are applied first. In quiet mode the `\n<ClassName>:` header is
    /// written and the console is redirected.
    pub fn begin(
        ctx: &'a mut RunContext,
        classname: &str,
        opts: &RunOptions,
        case_filter: &str,
    ) -> Self {
        let mut run = Self {
            ctx,
            classname: classname.to_string(),
            test_to_run: case_filter.to_string(),
            test_name: String::new(),
            verbose: false,
            quiet: false,
            exename: String::new(),
            template_format: String::new(),
            template_location: String::new(),
        };
        run.process_options(opts);
        if run.quiet {
            let progress = run.ctx.console.progress();
            let _ = write!(progress, "\n{}:", run.classname);
            let _ = progress.flush();
            run.ctx.console.redirect();
        }
        run
    }

    /// Copy quiet mode and executable path from pre-parsed options.
    pub fn process_options(&mut self, opts: &RunOptions) {
        self.quiet = opts.quiet();
        self.exename = opts.exe().to_string();
    }

    /// Decide whether case `testname` runs.
    ///
    /// A case runs when no case filter is set or the filter equals its name.
    /// Running cases reset verbosity and template preferences, bump the test
    /// counter and print a progress marker.
    pub fn prepare_test(&mut self, testname: &str) -> bool {
        self.verbose = false;
        self.template_format.clear();
        self.template_location.clear();

        if !self.test_to_run.is_empty() && self.test_to_run != testname {
            return false;
        }

        self.test_name = testname.to_string();
        self.ctx.count_tests += 1;
        tracing::debug!(fixture = %self.classname, case = testname, "running test case");

        if self.quiet {
            let progress = self.ctx.console.progress();
            let _ = progress.write_all(b".");
            let _ = progress.flush();
        } else {
            let out = self.ctx.console.stdout();
            let _ = writeln!(out, "{}::{}", self.classname, testname);
            let _ = out.flush();
        }
        true
    }

    /// `file:line(ClassName::CaseName)`
    pub fn location_str(&self, file: &str, line: u32) -> String {
        format!("{}:{}({}::{})", file, line, self.classname, self.test_name)
    }

    pub fn classname(&self) -> &str {
        &self.classname
    }

    pub fn test_name(&self) -> &str {
        &self.test_name
    }

    pub fn exename(&self) -> &str {
        &self.exename
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    /// Template preferences forwarded to [`Diagnostic::to_text`].
    pub fn set_template(&mut self, format: &str, location: &str) {
        self.template_format = format.to_string();
        self.template_location = location.to_string();
    }

    /// Note that an optional library a case needs is unavailable.
    pub fn complain_missing_lib(&mut self, name: &str) {
        self.ctx.add_missing_lib(name);
    }

    /// Diagnostics captured so far.
    pub fn errout(&self) -> &str {
        self.ctx.capture.errout()
    }

    /// Output captured so far.
    pub fn output(&self) -> &str {
        self.ctx.capture.output()
    }

    pub fn clear_errout(&mut self) {
        self.ctx.capture.clear_errout();
    }

    pub fn clear_output(&mut self) {
        self.ctx.capture.clear_output();
    }

    /// The current (possibly redirected) standard output.
    pub fn stdout(&mut self) -> &mut dyn Write {
        self.ctx.console.stdout()
    }
}

impl DiagnosticSink for FixtureRun<'_> {
    fn report_out(&mut self, text: &str) {
        self.ctx.capture.push_output(text);
    }

    fn report_err(&mut self, diagnostic: &Diagnostic) {
        let text = diagnostic.to_text(
            self.verbose,
            &self.template_format,
            &self.template_location,
        );
        self.ctx.capture.push_diagnostic(&text);
    }
}

impl Drop for FixtureRun<'_> {
    fn drop(&mut self) {
        if let Some(swallowed) = self.ctx.console.restore() {
            if !swallowed.out.is_empty() || !swallowed.err.is_empty() {
                tracing::debug!(
                    fixture = %self.classname,
                    stdout_bytes = swallowed.out.len(),
                    stderr_bytes = swallowed.err.len(),
                    "discarded output captured in quiet mode"
                );
            }
        }
    }
}
