// Self-check of the analysis check catalog
//
// Verifies the catalog invariants the rest of the tooling relies on: checks
// are ordered by name, their summaries are well-formed, and every diagnostic
// id is unique.

use std::sync::Arc;

use crate::checks::{self, Check};
use crate::diagnostic::{Diagnostic, DiagnosticSink};
use crate::fixture::{Fixture, FixtureRun};
use crate::{check, check_equals, test_case};

pub fn fixture() -> Arc<dyn Fixture> {
    Arc::new(TestSelfCheck)
}

pub struct TestSelfCheck;

impl Fixture for TestSelfCheck {
    fn class_name(&self) -> &str {
        "TestSelfCheck"
    }

    fn run(&self, t: &mut FixtureRun<'_>) {
        test_case!(t, self, instances_sorted);
        test_case!(t, self, class_info_format);
        test_case!(t, self, get_error_messages);
    }
}

/// Collects only the ids of reported diagnostics.
#[derive(Default)]
struct IdLogger {
    ids: Vec<String>,
}

impl DiagnosticSink for IdLogger {
    fn report_out(&mut self, _text: &str) {}

    fn report_err(&mut self, diagnostic: &Diagnostic) {
        self.ids.push(diagnostic.id.clone());
    }
}

impl TestSelfCheck {
    fn instances_sorted(&self, t: &mut FixtureRun<'_>) {
        for pair in checks::instances().windows(2) {
            check_equals!(t, true, pair[0].name() < pair[1].name());
        }
    }

    fn class_info_format(&self, t: &mut FixtureRun<'_>) {
        for check in checks::instances() {
            let info = check.class_info();
            if info.is_empty() {
                continue;
            }
            let bytes = info.as_bytes();
            check!(t, bytes[0] != b'\n');
            check!(t, bytes[bytes.len() - 1] == b'\n');
            if bytes.len() > 1 {
                check!(t, bytes[bytes.len() - 2] != b'\n');
            }
        }
    }

    fn get_error_messages(&self, t: &mut FixtureRun<'_>) {
        let mut logger = IdLogger::default();
        checks::collect_error_messages(&mut logger);
        check!(t, !logger.ids.is_empty());

        let mut duplicate = String::new();
        for (idx, id) in logger.ids.iter().enumerate() {
            if logger.ids[..idx].contains(id) {
                duplicate = format!("Duplicate ID: {}", id);
                break;
            }
        }
        check_equals!(t, "", duplicate);

        let found_purged_configuration = logger.ids.iter().any(|id| id == "purgedConfiguration");
        let found_too_many_configs = logger.ids.iter().any(|id| id == "toomanyconfigs");
        check!(t, found_purged_configuration);
        check!(t, found_too_many_configs);
    }
}
