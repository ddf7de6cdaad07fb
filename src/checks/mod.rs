//! Catalog of analysis checks exercised by the self-check suite.
//!
//! Each check describes itself (`class_info`) and can list every diagnostic it
//! is able to emit, which lets the suite verify the catalog without running
//! any analysis.

use once_cell::sync::Lazy;

use crate::diagnostic::{Diagnostic, DiagnosticSink, Severity};

/// An analysis check.
pub trait Check: Send + Sync {
    fn name(&self) -> &'static str;

    /// Human-readable summary: no leading newline, exactly one trailing one.
    fn class_info(&self) -> String;

    /// Report one sample of every diagnostic this check can produce.
    fn error_messages(&self, sink: &mut dyn DiagnosticSink);
}

struct CatalogCheck {
    name: &'static str,
    summary: &'static str,
    items: &'static [&'static str],
    messages: &'static [(&'static str, Severity, &'static str)],
}

impl Check for CatalogCheck {
    fn name(&self) -> &'static str {
        self.name
    }

    fn class_info(&self) -> String {
        let mut info = format!("{}:\n", self.summary);
        for item in self.items {
            info.push_str("- ");
            info.push_str(item);
            info.push('\n');
        }
        info
    }

    fn error_messages(&self, sink: &mut dyn DiagnosticSink) {
        for (id, severity, message) in self.messages {
            sink.report_err(&Diagnostic::new(*id, *severity, *message));
        }
    }
}

static INSTANCES: Lazy<Vec<Box<dyn Check>>> = Lazy::new(|| {
    let mut checks: Vec<Box<dyn Check>> = vec![
        Box::new(CatalogCheck {
            name: "Null pointer",
            summary: "Null pointers",
            items: &[
                "null pointer dereferencing",
                "undefined null pointer arithmetic",
            ],
            messages: &[
                ("nullPointer", Severity::Error, "Null pointer dereference"),
                (
                    "nullPointerArithmetic",
                    Severity::Error,
                    "Pointer arithmetic with NULL pointer.",
                ),
            ],
        }),
        Box::new(CatalogCheck {
            name: "Boolean",
            summary: "Boolean type checks",
            items: &[
                "using increment on boolean",
                "comparison of a boolean expression with an integer other than 0 or 1",
            ],
            messages: &[
                (
                    "incrementboolean",
                    Severity::Style,
                    "Incrementing a variable of type 'bool' with postfix operator++ is deprecated.",
                ),
                (
                    "compareBoolExpressionWithInt",
                    Severity::Warning,
                    "Comparison of a boolean expression with an integer other than 0 or 1.",
                ),
            ],
        }),
        Box::new(CatalogCheck {
            name: "Memory leaks (function variables)",
            summary: "Is there any allocated memory when a function goes out of scope",
            items: &["memory leaks", "mismatching allocation and deallocation"],
            messages: &[
                ("memleak", Severity::Error, "Memory leak: varname"),
                (
                    "mismatchAllocDealloc",
                    Severity::Error,
                    "Mismatching allocation and deallocation: varname",
                ),
            ],
        }),
        Box::new(CatalogCheck {
            name: "Other",
            summary: "Other checks",
            items: &["division with zero", "redundant assignment"],
            messages: &[
                ("zerodiv", Severity::Error, "Division by zero."),
                (
                    "redundantAssignment",
                    Severity::Style,
                    "Variable 'var' is reassigned a value before the old one has been used.",
                ),
            ],
        }),
    ];
    checks.sort_by(|a, b| a.name().cmp(b.name()));
    checks
});

/// Every registered check, sorted by name.
pub fn instances() -> &'static [Box<dyn Check>] {
    &INSTANCES
}

/// Diagnostics raised by the driver itself rather than by a check.
const DRIVER_MESSAGES: &[(&str, Severity, &str)] = &[
    (
        "purgedConfiguration",
        Severity::Information,
        "The configuration '' was not checked because its code equals another one.",
    ),
    (
        "toomanyconfigs",
        Severity::Information,
        "Too many #ifdef configurations - only the first 12 configurations are checked.",
    ),
    ("syntaxError", Severity::Error, "syntax error"),
    (
        "internalError",
        Severity::Error,
        "Internal error. Please report this.",
    ),
];

/// Report every diagnostic the driver and all checks can emit.
pub fn collect_error_messages(sink: &mut dyn DiagnosticSink) {
    for (id, severity, message) in DRIVER_MESSAGES {
        sink.report_err(&Diagnostic::new(*id, *severity, *message));
    }
    for check in instances() {
        check.error_messages(sink);
    }
}
