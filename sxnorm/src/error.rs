use strum::EnumIs;
use sxtag::prelude::{Language, RawOp, Span};
use thiserror::Error;

/// Reasons a file fails to normalize. Every variant is fatal for its file.
#[derive(Debug, Clone, PartialEq, Eq, Error, EnumIs)]
pub enum NormalizeError {
    #[error("{span}: raw tag `{op}` has no rewrite rule for {language} sources")]
    UnmappedRawTag {
        op: RawOp,
        language: Language,
        span: Span,
    },

    #[error("{span}: malformed `{op}` node: {reason}")]
    MalformedRawNode {
        op: RawOp,
        span: Span,
        reason: String,
    },

    #[error("{span}: the root of the tree is a discarded node")]
    DiscardedRoot { span: Span },

    #[error("{span}: tree is deeper than the configured limit of {limit}")]
    DepthLimitExceeded { limit: usize, span: Span },
}

impl NormalizeError {
    /// Location of the offending node.
    pub fn span(&self) -> Span {
        match self {
            NormalizeError::UnmappedRawTag { span, .. }
            | NormalizeError::MalformedRawNode { span, .. }
            | NormalizeError::DiscardedRoot { span }
            | NormalizeError::DepthLimitExceeded { span, .. } => *span,
        }
    }

    /// Raw tag involved, if any.
    pub fn op(&self) -> Option<RawOp> {
        match self {
            NormalizeError::UnmappedRawTag { op, .. }
            | NormalizeError::MalformedRawNode { op, .. } => Some(*op),
            NormalizeError::DiscardedRoot { .. } | NormalizeError::DepthLimitExceeded { .. } => None,
        }
    }
}

pub type NormalizeResult<T> = Result<T, NormalizeError>;

#[derive(Debug, Error, EnumIs)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration '{file}': {source}")]
    Parse {
        source: toml::de::Error,
        file: String,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
