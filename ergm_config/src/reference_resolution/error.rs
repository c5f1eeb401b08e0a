//! Error types for symbol resolution

use crate::logging::{codes, Code};
use crate::terms::{AttrType, DyadicKind};
use crate::utils::Span;
use thiserror::Error;

/// Result type for resolution operations
pub type ResolutionResult<T> = Result<T, ResolutionError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolutionError {
    /// Attribute name not present in the loaded table
    #[error("Unknown {attr_type} attribute '{attribute}' for term '{term}' at {span}")]
    UnknownAttribute {
        term: &'static str,
        attribute: String,
        attr_type: AttrType,
        span: Span,
    },

    /// Compound dyadic covariate with the wrong number of coordinates
    #[error("{kind} distance needs exactly {expected} continuous attributes, found {found} at {span}")]
    CoordinateCountMismatch {
        kind: DyadicKind,
        expected: usize,
        found: usize,
        span: Span,
    },

    /// Broken catalog or coalescing assumption
    #[error("Internal resolution error: {message}")]
    Internal { message: String },
}

impl ResolutionError {
    pub fn unknown_attribute(
        term: &'static str,
        attribute: &str,
        attr_type: AttrType,
        span: Span,
    ) -> Self {
        Self::UnknownAttribute {
            term,
            attribute: attribute.to_string(),
            attr_type,
            span,
        }
    }

    pub fn coordinate_count_mismatch(
        kind: DyadicKind,
        expected: usize,
        found: usize,
        span: Span,
    ) -> Self {
        Self::CoordinateCountMismatch {
            kind,
            expected,
            found,
            span,
        }
    }

    pub fn internal(message: &str) -> Self {
        Self::Internal {
            message: message.to_string(),
        }
    }

    /// Get error code for global logging system
    pub fn error_code(&self) -> Code {
        match self {
            Self::UnknownAttribute { .. } => codes::resolution::UNKNOWN_ATTRIBUTE,
            Self::CoordinateCountMismatch { .. } => codes::resolution::COORDINATE_COUNT_MISMATCH,
            Self::Internal { .. } => codes::resolution::INTERNAL_INVARIANT,
        }
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            Self::UnknownAttribute { span, .. } | Self::CoordinateCountMismatch { span, .. } => {
                Some(*span)
            }
            Self::Internal { .. } => None,
        }
    }

    /// Internal errors are not caused by the configuration text
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Internal { .. })
    }
}
