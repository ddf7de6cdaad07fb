//! Stream capture for fixture runs.
//!
//! Two separate mechanisms live here:
//! - [`CaptureBuffers`]: the text a test case's code under test reported
//!   through a [`DiagnosticSink`](crate::diagnostic::DiagnosticSink), kept for
//!   comparison against expectations.
//! - [`Console`]: the runner's standard output and error streams, with scoped
//!   redirection used in quiet mode.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Captured output and diagnostics for the current test case.
///
/// Nothing clears these buffers between cases; the test body resets them
/// when it needs a clean slate.
#[derive(Debug, Default, Clone)]
pub struct CaptureBuffers {
    output: String,
    errout: String,
}

impl CaptureBuffers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line of captured output.
    pub fn push_output(&mut self, text: &str) {
        self.output.push_str(text);
        self.output.push('\n');
    }

    /// Append one rendered diagnostic unless the same text was already
    /// captured. Returns whether the text was appended.
    pub fn push_diagnostic(&mut self, text: &str) -> bool {
        if self.errout.contains(text) {
            return false;
        }
        self.errout.push_str(text);
        self.errout.push('\n');
        true
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn errout(&self) -> &str {
        &self.errout
    }

    pub fn clear_output(&mut self) {
        self.output.clear();
    }

    pub fn clear_errout(&mut self) {
        self.errout.clear();
    }

    pub fn clear(&mut self) {
        self.clear_output();
        self.clear_errout();
    }
}

/// Cloneable in-memory writer, used to observe what a [`Console`] wrote.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut bytes = self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Text swallowed while a redirection was engaged.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Redirected {
    pub out: String,
    pub err: String,
}

#[derive(Default)]
struct RedirectBuffers {
    out: Vec<u8>,
    err: Vec<u8>,
}

/// The runner's output streams.
///
/// While redirected, [`Console::stdout`] and [`Console::stderr`] write into
/// memory; [`Console::progress`] always reaches the real standard output.
pub struct Console {
    out: Box<dyn Write>,
    err: Box<dyn Write>,
    redirect: Option<RedirectBuffers>,
}

impl Console {
    pub fn new(out: Box<dyn Write>, err: Box<dyn Write>) -> Self {
        Self {
            out,
            err,
            redirect: None,
        }
    }

    /// Console bound to the process streams.
    pub fn stdio() -> Self {
        Self::new(Box::new(io::stdout()), Box::new(io::stderr()))
    }

    /// Console writing to two in-memory buffers, returned alongside it.
    pub fn in_memory() -> (Self, SharedBuffer, SharedBuffer) {
        let out = SharedBuffer::new();
        let err = SharedBuffer::new();
        let console = Self::new(Box::new(out.clone()), Box::new(err.clone()));
        (console, out, err)
    }

    pub fn stdout(&mut self) -> &mut dyn Write {
        match self.redirect.as_mut() {
            Some(buffers) => &mut buffers.out,
            None => self.out.as_mut(),
        }
    }

    pub fn stderr(&mut self) -> &mut dyn Write {
        match self.redirect.as_mut() {
            Some(buffers) => &mut buffers.err,
            None => self.err.as_mut(),
        }
    }

    /// Real standard output, bypassing any redirection.
    pub fn progress(&mut self) -> &mut dyn Write {
        self.out.as_mut()
    }

    pub fn is_redirected(&self) -> bool {
        self.redirect.is_some()
    }

    /// Start sending `stdout`/`stderr` writes to memory. A second call while
    /// already redirected keeps the existing buffers.
    pub fn redirect(&mut self) {
        if self.redirect.is_none() {
            tracing::trace!("console redirection engaged");
            self.redirect = Some(RedirectBuffers::default());
        }
    }

    /// Stop redirecting and hand back what was swallowed.
    pub fn restore(&mut self) -> Option<Redirected> {
        let buffers = self.redirect.take()?;
        tracing::trace!("console redirection released");
        Some(Redirected {
            out: String::from_utf8_lossy(&buffers.out).into_owned(),
            err: String::from_utf8_lossy(&buffers.err).into_owned(),
        })
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostics_are_deduplicated() {
        let mut capture = CaptureBuffers::new();
        assert!(capture.push_diagnostic("[a.c:1]: (error) boom"));
        assert!(!capture.push_diagnostic("[a.c:1]: (error) boom"));
        assert!(capture.push_diagnostic("[a.c:2]: (error) boom"));
        assert_eq!(
            capture.errout(),
            "[a.c:1]: (error) boom\n[a.c:2]: (error) boom\n"
        );
    }

    #[test]
    fn output_is_line_based_and_caller_cleared() {
        let mut capture = CaptureBuffers::new();
        capture.push_output("Checking a.c ...");
        capture.push_output("Checking b.c ...");
        assert_eq!(capture.output(), "Checking a.c ...\nChecking b.c ...\n");
        capture.clear_output();
        assert_eq!(capture.output(), "");
    }

    #[test]
    fn redirection_swallows_until_restored() {
        let (mut console, out, err) = Console::in_memory();
        console.redirect();
        write!(console.stdout(), "hidden").unwrap();
        write!(console.stderr(), "hidden err").unwrap();
        write!(console.progress(), ".").unwrap();
        assert!(console.is_redirected());

        let swallowed = console.restore().unwrap();
        assert_eq!(swallowed.out, "hidden");
        assert_eq!(swallowed.err, "hidden err");
        assert!(!console.is_redirected());

        write!(console.stdout(), "shown").unwrap();
        assert_eq!(out.contents(), ".shown");
        assert_eq!(err.contents(), "");
        assert!(console.restore().is_none());
    }
}
