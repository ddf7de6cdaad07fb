//! Pre-parsed runner options.
//!
//! The harness never looks at raw arguments. The `testrunner` binary parses
//! them with clap and hands over a [`RunOptions`] value; the runner and the
//! fixtures only read its fields.

use std::collections::BTreeSet;
use std::io::{self, Write};

use crate::error::HarnessError;

/// Options a run reacts to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    quiet: bool,
    help: bool,
    exe: String,
    which_test: BTreeSet<String>,
}

impl RunOptions {
    pub fn new(exe: impl Into<String>) -> Self {
        Self {
            exe: exe.into(),
            ..Self::default()
        }
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn with_help(mut self, help: bool) -> Self {
        self.help = help;
        self
    }

    /// Add selectors (`ClassName` or `ClassName::CaseName`).
    ///
    /// Selectors are kept as a sorted set, so repeats collapse into one run.
    pub fn with_selectors<I, S>(mut self, selectors: I) -> Result<Self, HarnessError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for selector in selectors {
            let selector = selector.into();
            if selector.chars().any(char::is_whitespace) {
                return Err(HarnessError::InvalidSelector { selector });
            }
            self.which_test.insert(selector);
        }
        Ok(self)
    }

    pub fn quiet(&self) -> bool {
        self.quiet
    }

    pub fn help(&self) -> bool {
        self.help
    }

    pub fn exe(&self) -> &str {
        &self.exe
    }

    /// Selectors to process, in order. No selectors means one empty selector,
    /// which matches every fixture and every case.
    pub fn which_test(&self) -> Vec<&str> {
        if self.which_test.is_empty() {
            vec![""]
        } else {
            self.which_test.iter().map(String::as_str).collect()
        }
    }
}

/// Usage text for the test runner.
pub const HELP_TEXT: &str = "Testrunner - run fixture tests\n\
\n\
Syntax:\n\
\x20   testrunner [OPTIONS] [TestClass::TestCase...]\n\
\x20   run all test cases:\n\
\x20       testrunner\n\
\x20   run all test cases in TestClass:\n\
\x20       testrunner TestClass\n\
\x20   run TestClass::TestCase:\n\
\x20       testrunner TestClass::TestCase\n\
\x20   run all test cases in TestClass1 and TestClass2::TestCase:\n\
\x20       testrunner TestClass1 TestClass2::TestCase\n\
\n\
Options:\n\
\x20   -q                   Do not print the test cases that have run.\n\
\x20   -h, --help           Print this help.\n\
\x20   --config <PATH>      Read runner settings from a JSON file.\n";

pub fn print_help(out: &mut dyn Write) -> io::Result<()> {
    out.write_all(HELP_TEXT.as_bytes())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_runs_everything() {
        let opts = RunOptions::new("testrunner");
        assert_eq!(opts.which_test(), vec![""]);
        assert_eq!(opts.exe(), "testrunner");
        assert!(!opts.quiet());
    }

    #[test]
    fn selectors_are_sorted_and_deduplicated() {
        let opts = RunOptions::new("testrunner")
            .with_selectors(["TestB", "TestA::case", "TestB"])
            .unwrap();
        assert_eq!(opts.which_test(), vec!["TestA::case", "TestB"]);
    }

    #[test]
    fn whitespace_selector_is_rejected() {
        let err = RunOptions::new("testrunner")
            .with_selectors(["Test A"])
            .unwrap_err();
        assert_eq!(
            err,
            HarnessError::InvalidSelector {
                selector: "Test A".to_string()
            }
        );
    }

    #[test]
    fn help_text_lists_invocation_forms() {
        let mut out = Vec::new();
        print_help(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Testrunner - run fixture tests\n"));
        assert!(text.contains("        testrunner TestClass1 TestClass2::TestCase\n"));
        assert!(text.contains("    -h, --help           Print this help.\n"));
    }
}
