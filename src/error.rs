use std::fmt;

use crate::parser::document::DocumentError;

/// Which side of a `left:right` comparison is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandSide {
    /// The text before the first colon.
    Left,
    /// The text after the first colon.
    Right,
}

impl fmt::Display for OperandSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperandSide::Left => write!(f, "left"),
            OperandSide::Right => write!(f, "right"),
        }
    }
}

/// Failure while parsing a single policy expression.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpressionError {
    /// A `left:right` leaf with an empty operand.
    #[error("missing {missing} operand in comparison '{expression}'")]
    MalformedComparison {
        /// The offending leaf text.
        expression: String,
        /// The empty side.
        missing: OperandSide,
    },
    /// A `%(name)s` target placeholder without its closing `)s`.
    #[error("unmatched target reference in '{expression}': expected a closing ')s'")]
    UnmatchedTargetReference {
        /// The offending leaf text.
        expression: String,
    },
    /// A value of unsupported shape or an unrecognized string form.
    #[error("invalid policy expression: {value}")]
    InvalidExpression {
        /// Rendering of the rejected value.
        value: String,
    },
}

/// Coarse classification of every failure the translation can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input is not a valid YAML or JSON mapping.
    DocumentParse,
    /// A comparison leaf is missing one of its operands.
    MalformedComparison,
    /// A target placeholder lacks its closing token.
    UnmatchedTargetReference,
    /// An expression value has an unsupported shape or form.
    InvalidExpression,
}

/// Error returned by the top-level translation entry points.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    /// The policy document could not be loaded.
    #[error(transparent)]
    Document(#[from] DocumentError),
    /// One entry of the document failed to parse; translation stops there.
    #[error("entry '{name}': {source}")]
    Entry {
        /// Name of the failing entry.
        name: String,
        /// Underlying expression error.
        #[source]
        source: ExpressionError,
    },
}

impl TranslateError {
    /// The kind of failure, independent of where it happened.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TranslateError::Document(_) => ErrorKind::DocumentParse,
            TranslateError::Entry { source, .. } => match source {
                ExpressionError::MalformedComparison { .. } => ErrorKind::MalformedComparison,
                ExpressionError::UnmatchedTargetReference { .. } => {
                    ErrorKind::UnmatchedTargetReference
                }
                ExpressionError::InvalidExpression { .. } => ErrorKind::InvalidExpression,
            },
        }
    }
}
