//! Diagnostics - non-fatal notes collected while evaluating rules
//!
//! Parsing helpers push into a [`Diagnostics`] collector supplied by the
//! caller instead of logging. The caller decides whether to log, return or
//! drop them.

use std::fmt;

/// A single note about an input that could not be interpreted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Record field the note refers to
    pub field: &'static str,

    /// What went wrong
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Collector for [`Diagnostic`]s
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a note
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.entries.push(Diagnostic {
            field,
            message: message.into(),
        });
    }

    /// Notes recorded so far
    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    /// Whether nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Take the recorded notes
    pub fn into_entries(self) -> Vec<Diagnostic> {
        self.entries
    }
}
