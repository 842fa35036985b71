/*!
 * Console
 * Destination for user-visible shell output
 *
 * Notices, announcements and listings are shell output, not diagnostics:
 * they go to stdout through this seam while tracing goes to stderr.
 */

use parking_lot::Mutex;
use std::io::Write;

/// User-visible output sink shared by the request path and the signal listener
pub trait Console: Send + Sync {
    /// Write one complete line
    fn line(&self, text: &str);

    /// Write a prompt without a trailing newline
    fn prompt(&self, text: &str);
}

/// Console writing to the process stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn line(&self, text: &str) {
        let mut out = std::io::stdout().lock();
        // A closed stdout must not take the shell down with it
        let _ = writeln!(out, "{}", text);
        let _ = out.flush();
    }

    fn prompt(&self, text: &str) {
        let mut out = std::io::stdout().lock();
        let _ = write!(out, "{}", text);
        let _ = out.flush();
    }
}

/// Console that records lines in memory
///
/// Used by embedders and tests that need to inspect what the shell printed.
#[derive(Debug, Default)]
pub struct BufferedConsole {
    lines: Mutex<Vec<String>>,
}

impl BufferedConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every line written so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Whether any recorded line contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.lock().iter().any(|line| line.contains(needle))
    }
}

impl Console for BufferedConsole {
    fn line(&self, text: &str) {
        self.lines.lock().push(text.to_string());
    }

    fn prompt(&self, _text: &str) {}
}
