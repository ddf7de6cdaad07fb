//! Diagnostic values consumed by the harness.
//!
//! Analysis code produces [`Diagnostic`] records and hands them to a
//! [`DiagnosticSink`]. The harness never inspects a diagnostic beyond its id and
//! its rendered text.

/// Severity attached to a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Style,
    Performance,
    Portability,
    Information,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Style => "style",
            Severity::Performance => "performance",
            Severity::Portability => "portability",
            Severity::Information => "information",
        }
    }
}

/// Source position a diagnostic points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: String,
    pub line: u32,
    pub column: u32,
}

/// Immutable diagnostic record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub id: String,
    pub severity: Severity,
    pub message: String,
    pub verbose_message: Option<String>,
    pub locations: Vec<SourceLocation>,
}

impl Diagnostic {
    pub fn new(id: impl Into<String>, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            severity,
            message: message.into(),
            verbose_message: None,
            locations: Vec::new(),
        }
    }

    pub fn with_verbose(mut self, verbose_message: impl Into<String>) -> Self {
        self.verbose_message = Some(verbose_message.into());
        self
    }

    pub fn at(mut self, file: impl Into<String>, line: u32, column: u32) -> Self {
        self.locations.push(SourceLocation {
            file: file.into(),
            line,
            column,
        });
        self
    }

    /// Render the diagnostic as text.
    ///
    /// An empty `template_format` gives `[file:line]: (severity) message`.
    /// Otherwise `{file}`, `{line}`, `{column}`, `{severity}`, `{id}` and
    /// `{message}` are substituted, and `template_location` is appended once for
    /// every location after the first.
    pub fn to_text(&self, verbose: bool, template_format: &str, template_location: &str) -> String {
        let message = match (&self.verbose_message, verbose) {
            (Some(long), true) => long.as_str(),
            _ => self.message.as_str(),
        };

        if template_format.is_empty() {
            return match self.locations.first() {
                Some(loc) => format!(
                    "[{}:{}]: ({}) {}",
                    loc.file,
                    loc.line,
                    self.severity.as_str(),
                    message
                ),
                None => format!("({}) {}", self.severity.as_str(), message),
            };
        }

        let primary = self.locations.first();
        let mut text = substitute(template_format, primary, |key| match key {
            "severity" => Some(self.severity.as_str().to_string()),
            "id" => Some(self.id.clone()),
            "message" => Some(message.to_string()),
            _ => None,
        });
        if !template_location.is_empty() {
            for loc in self.locations.iter().skip(1) {
                text.push('\n');
                text.push_str(&substitute(template_location, Some(loc), |key| match key {
                    "info" => Some(message.to_string()),
                    _ => None,
                }));
            }
        }
        text
    }
}

fn substitute<F>(template: &str, loc: Option<&SourceLocation>, extra: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };
        let key = &after[..close];
        let value = match key {
            "file" => loc.map(|l| l.file.clone()),
            "line" => loc.map(|l| l.line.to_string()),
            "column" => loc.map(|l| l.column.to_string()),
            _ => extra(key),
        };
        match value {
            Some(value) => out.push_str(&value),
            None => {
                out.push('{');
                out.push_str(key);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    out
}

/// Receiver of analysis output.
pub trait DiagnosticSink {
    /// Plain progress or informational text.
    fn report_out(&mut self, text: &str);

    /// A diagnostic produced by the code under test.
    fn report_err(&mut self, diagnostic: &Diagnostic);
}
