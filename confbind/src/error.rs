use declit::LiteralError;
use thiserror::Error;

use crate::descriptor::DestKind;
use crate::parsed::{KeyPath, Parsed};

/// Why a single scalar coercion failed. Non-retryable; the first
/// failure aborts the enclosing decode call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FailureKind {
    #[error("literal kind does not match the destination kind")]
    TypeMismatch,
    #[error("value has a non-zero fractional part")]
    NotIntegral,
    #[error("value is out of range for the destination width")]
    OutOfRange,
    #[error("literal digits are malformed")]
    MalformedLiteral,
}

impl From<LiteralError> for FailureKind {
    fn from(err: LiteralError) -> Self {
        match err {
            LiteralError::NotIntegral => Self::NotIntegral,
            LiteralError::OutOfRange => Self::OutOfRange,
            LiteralError::Malformed => Self::MalformedLiteral,
            LiteralError::KindMismatch => Self::TypeMismatch,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BindError {
    #[error("cannot bind `{literal}` to {target} at `{path}`: {kind}")]
    Coercion {
        path: String,
        literal: String,
        target: DestKind,
        kind: FailureKind,
    },
    #[error("expected {expected} at `{path}`, found {found}")]
    Shape {
        path: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl BindError {
    pub fn shape_mismatch(path: &KeyPath, expected: &'static str, found: &Parsed) -> Self {
        Self::Shape {
            path: path.to_string(),
            expected,
            found: found.describe(),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::Coercion { path, .. } | Self::Shape { path, .. } => path,
        }
    }

    /// Failure category, when the error is a scalar coercion failure.
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Coercion { kind, .. } => Some(*kind),
            Self::Shape { .. } => None,
        }
    }
}
