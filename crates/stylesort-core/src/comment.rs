//! Trigger comments supplied by the host
//!
//! The host scans source comments and hands each candidate to the rules as
//! a `Comment`; rules decide whether it matches their trigger phrase. The
//! scanning itself never happens in this crate.

use crate::span::Span;

/// The syntactic form of a comment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    /// `// ...`
    Line,
    /// `/* ... */`
    Block,
}

/// A source comment: its form, its inner text (delimiters stripped, the
/// way the host's parser exposes it), and its span in the source.
#[derive(Debug, Clone)]
pub struct Comment {
    pub kind: CommentKind,
    pub text: String,
    pub span: Span,
}

impl Comment {
    pub fn line(text: impl Into<String>, span: Span) -> Self {
        Self {
            kind: CommentKind::Line,
            text: text.into(),
            span,
        }
    }

    pub fn block(text: impl Into<String>, span: Span) -> Self {
        Self {
            kind: CommentKind::Block,
            text: text.into(),
            span,
        }
    }
}
