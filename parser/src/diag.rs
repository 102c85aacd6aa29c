//! First-class diagnostics channel for a generation pass.
//!
//! Recoverable failures never abort the pass, but their cause must stay
//! visible to the declaration's author: every entry is kept for the host to
//! print and mirrored onto `tracing` as it is recorded.

use std::fmt;

use tracing::{error, warn};

/// How severe a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Generation continued; output may be degraded.
    Warning,
    /// Generation could not do anything useful (e.g. the marker type is
    /// missing), but the process itself did not fail.
    Error,
}

/// One diagnostic entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// The declaration this concerns, when there is one.
    pub subject: Option<String>,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        match &self.subject {
            Some(subject) => write!(f, "[{}] {}: {}", tag, subject, self.message),
            None => write!(f, "[{}] {}", tag, self.message),
        }
    }
}

/// Ordered collection of diagnostics for one pass.
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning, mirrored to the log.
    pub fn warn(&mut self, subject: Option<&str>, message: impl Into<String>) {
        let message = message.into();
        match subject {
            Some(subject) => warn!(subject, "{message}"),
            None => warn!("{message}"),
        }
        self.entries.push(Diagnostic {
            severity: Severity::Warning,
            subject: subject.map(str::to_string),
            message,
        });
    }

    /// Record an error, mirrored to the log.
    pub fn error(&mut self, subject: Option<&str>, message: impl Into<String>) {
        let message = message.into();
        match subject {
            Some(subject) => error!(subject, "{message}"),
            None => error!("{message}"),
        }
        self.entries.push(Diagnostic {
            severity: Severity::Error,
            subject: subject.map(str::to_string),
            message,
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.entries
            .iter()
            .any(|d| d.severity == Severity::Error)
    }
}
