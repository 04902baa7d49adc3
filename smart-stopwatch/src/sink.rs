use std::sync::{Arc, Mutex, PoisonError};

use tracing::debug;

/// Destination for diagnostic lines. Writes are best effort and never fail back
/// into the stopwatch.
pub trait DiagnosticSink {
    fn write_line_if(&self, condition: bool, line: &str);
}

/// Emits lines as `debug` events on the `smart_stopwatch` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn write_line_if(&self, condition: bool, line: &str) {
        if condition {
            debug!(target: "smart_stopwatch", "{line}");
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn write_line_if(&self, _: bool, _: &str) {}
}

/// Keeps every accepted line in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn clear(&self) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl DiagnosticSink for MemorySink {
    fn write_line_if(&self, condition: bool, line: &str) {
        if condition {
            self.lines
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(line.to_string());
        }
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn write_line_if(&self, condition: bool, line: &str) {
        (**self).write_line_if(condition, line)
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for Arc<S> {
    fn write_line_if(&self, condition: bool, line: &str) {
        (**self).write_line_if(condition, line)
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for Box<S> {
    fn write_line_if(&self, condition: bool, line: &str) {
        (**self).write_line_if(condition, line)
    }
}
