//! Diagnostic types shared by all validation passes.

use std::fmt;

/// Validation pass that produced a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Structural,
    Referential,
    TypeConsistency,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Structural => write!(f, "Structural"),
            Category::Referential => write!(f, "Referential"),
            Category::TypeConsistency => write!(f, "Type Consistency"),
        }
    }
}

/// Whether a diagnostic fails the document or merely flags it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// One reported problem: a stable machine-readable code, a human-readable
/// message, and a JSON-pointer-like locator into the document.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub code: &'static str,
    pub severity: Severity,
    pub category: Category,
    pub message: String,
    pub path: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "[{}:{}] {}", self.category, self.code, self.message)
        } else {
            write!(
                f,
                "[{}:{}] {} (at '{}')",
                self.category, self.code, self.message, self.path
            )
        }
    }
}

impl Diagnostic {
    /// Shape violation passed through from the structural validator.
    pub fn structural(message: impl Into<String>, path: impl Into<String>) -> Self {
        Diagnostic {
            code: "STRUCTURAL",
            severity: Severity::Error,
            category: Category::Structural,
            message: message.into(),
            path: path.into(),
        }
    }

    /// Caller-contract violation: the input was not a document at all.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Diagnostic {
            code: "INVALID_INPUT",
            severity: Severity::Error,
            category: Category::Structural,
            message: message.into(),
            path: String::new(),
        }
    }

    pub fn referential(
        code: &'static str,
        message: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Diagnostic {
            code,
            severity: Severity::Error,
            category: Category::Referential,
            message: message.into(),
            path: path.into(),
        }
    }

    pub fn consistency(
        code: &'static str,
        message: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Diagnostic {
            code,
            severity: Severity::Error,
            category: Category::TypeConsistency,
            message: message.into(),
            path: path.into(),
        }
    }

    /// Downgrade to an advisory that does not fail the document.
    pub fn warning(mut self) -> Self {
        self.severity = Severity::Warning;
        self
    }
}
