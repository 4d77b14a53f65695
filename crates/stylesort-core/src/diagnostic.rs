//! Reported findings

use crate::edit::Edit;
use crate::span::Span;

/// A finding reported by a rule: a human-readable message anchored to a
/// span, with at most one suggested text replacement.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Name of the rule that produced this diagnostic
    pub rule: &'static str,
    /// Human-readable message
    pub message: String,
    /// The node or comment the diagnostic is anchored to
    pub span: Span,
    /// Suggested fix, if any
    pub fix: Option<Edit>,
}

impl Diagnostic {
    /// A diagnostic with no fix (a user-visible failure)
    pub fn error(rule: &'static str, span: Span, message: impl Into<String>) -> Self {
        Self {
            rule,
            message: message.into(),
            span,
            fix: None,
        }
    }

    /// A diagnostic carrying a suggested fix
    pub fn fixable(rule: &'static str, span: Span, message: impl Into<String>, fix: Edit) -> Self {
        Self {
            rule,
            message: message.into(),
            span,
            fix: Some(fix),
        }
    }

    pub fn has_fix(&self) -> bool {
        self.fix.is_some()
    }
}
