// Error types shared by the analysis core.

use thiserror::Error;

/// Failures an analysis can report. None of these are retried or recovered
/// from inside the crate: each one signals input the caller must fix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// An assertion saw a node of the wrong kind.
    #[error("kind mismatch: expected {expected}, got {actual}")]
    KindMismatch { expected: String, actual: String },

    /// A node is missing a field its kind requires.
    #[error("malformed {kind} node: missing required field `{field}`")]
    MalformedNode { kind: String, field: String },

    /// A kind name outside the registry's vocabulary.
    #[error("unknown node kind `{kind}`")]
    UnknownKind { kind: String },

    /// A callee pattern that does not compile.
    #[error("invalid callee pattern: {reason}")]
    BadPattern { reason: String },
}

impl AnalysisError {
    pub fn malformed(kind: &str, field: &str) -> Self {
        AnalysisError::MalformedNode {
            kind: kind.to_string(),
            field: field.to_string(),
        }
    }

    pub fn unknown_kind(kind: &str) -> Self {
        AnalysisError::UnknownKind {
            kind: kind.to_string(),
        }
    }
}
