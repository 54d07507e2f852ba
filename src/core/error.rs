//! Error types for the transformation engine.
//!
//! All core errors are fatal for the current compilation unit — there is no
//! local recovery, matching the taxonomy described for the transformer:
//! pool exhaustion, unsupported node, invariant breach, collaborator failure.

use std::fmt;

use thiserror::Error;

use crate::base::{FileId, Span};

/// Errors raised while lowering an input tree into the output tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// A fresh temporary was requested after the function's temp pool was
    /// exhausted.
    #[error("temporary pool exhausted (size {pool_size}) at {span:?}")]
    PoolExhausted { pool_size: usize, span: Option<Span> },

    /// A visit reached a node kind (or a symbol kind) it does not handle.
    #[error("unsupported node: {description} at {span:?}")]
    UnsupportedNode {
        description: String,
        span: Option<Span>,
    },

    /// An internal assertion failed (e.g. a property had more than one
    /// setter, or a yield-wrapped function never set `HasYield`).
    #[error("invariant breach: {description} at {span:?}")]
    InvariantBreach {
        description: String,
        span: Option<Span>,
    },

    /// A semantic-model or metadata-provider query returned an absent result
    /// where the visitor required one.
    #[error("collaborator failure: {description} at {span:?}")]
    CollaboratorFailure {
        description: String,
        span: Option<Span>,
    },
}

impl TransformError {
    pub fn pool_exhausted(pool_size: usize, span: Option<Span>) -> Self {
        Self::PoolExhausted { pool_size, span }
    }

    pub fn unsupported_node(description: impl Into<String>, span: Option<Span>) -> Self {
        Self::UnsupportedNode {
            description: description.into(),
            span,
        }
    }

    pub fn invariant_breach(description: impl Into<String>, span: Option<Span>) -> Self {
        Self::InvariantBreach {
            description: description.into(),
            span,
        }
    }

    pub fn collaborator_failure(description: impl Into<String>, span: Option<Span>) -> Self {
        Self::CollaboratorFailure {
            description: description.into(),
            span,
        }
    }

    /// The source span carried by this error, if any.
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::PoolExhausted { span, .. }
            | Self::UnsupportedNode { span, .. }
            | Self::InvariantBreach { span, .. }
            | Self::CollaboratorFailure { span, .. } => *span,
        }
    }
}

/// A `TransformError` annotated with the file it occurred in, for reporting
/// to a caller that translates many files in one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub file: Option<FileId>,
    pub error: TransformError,
}

impl Diagnostic {
    pub fn new(file: Option<FileId>, error: TransformError) -> Self {
        Self { file, error }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.file, self.error.span()) {
            (Some(file), Some(span)) => write!(
                f,
                "{}:{}:{}: {}",
                file.index(),
                span.start.line + 1,
                span.start.column + 1,
                self.error
            ),
            (Some(file), None) => write!(f, "{}: {}", file.index(), self.error),
            (None, _) => write!(f, "{}", self.error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_exhausted_carries_size_and_span() {
        let span = Span::from_coords(3, 1, 3, 5);
        let err = TransformError::pool_exhausted(8, Some(span));
        assert_eq!(err.span(), Some(span));
        assert!(err.to_string().contains('8'));
    }

    #[test]
    fn diagnostic_formats_file_and_line_column() {
        let span = Span::from_coords(4, 2, 4, 6);
        let err = TransformError::unsupported_node("postfix op ~", Some(span));
        let diag = Diagnostic::new(Some(FileId::new(1)), err);
        let rendered = diag.to_string();
        assert!(rendered.starts_with("1:5:3:"));
    }
}
