//! Error types for post-parse validation with global logging integration

use crate::logging::{codes, Code};
use crate::terms::{NetworkMode, NetworkType, TermSetKind};
use crate::utils::Span;
use std::fmt;
use thiserror::Error;

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Which network property a term does not support
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicabilityConflict {
    NetworkType { required: NetworkType, directed: bool },
    NetworkMode { required: NetworkMode, bipartite: bool },
}

impl fmt::Display for ApplicabilityConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NetworkType { required, directed } => write!(
                f,
                "requires a {} network but the network is {}",
                required,
                if *directed { "directed" } else { "undirected" }
            ),
            Self::NetworkMode {
                required,
                bipartite,
            } => write!(
                f,
                "requires a {} network but the network is {}",
                required,
                if *bipartite { "two-mode" } else { "one-mode" }
            ),
        }
    }
}

/// One term that cannot be used with the loaded network
#[derive(Debug, Clone, PartialEq)]
pub struct InapplicableTerm {
    pub kind: TermSetKind,
    pub term: &'static str,
    pub conflict: ApplicabilityConflict,
    pub span: Span,
}

impl fmt::Display for InapplicableTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} term '{}' {}", self.kind, self.term, self.conflict)
    }
}

/// A post-parse check on configuration values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequirementViolation {
    #[error("required parameter '{field}' is not set")]
    MissingRequired { field: &'static str },

    #[error("{} conflict: {reason}", .fields.join(" / "))]
    Conflict {
        fields: Vec<&'static str>,
        reason: String,
    },
}

impl RequirementViolation {
    pub fn missing(field: &'static str) -> Self {
        Self::MissingRequired { field }
    }

    pub fn conflict(fields: &[&'static str], reason: &str) -> Self {
        Self::Conflict {
            fields: fields.to_vec(),
            reason: reason.to_string(),
        }
    }

    pub fn error_code(&self) -> Code {
        match self {
            Self::MissingRequired { .. } => codes::validation::MISSING_REQUIRED_FIELD,
            Self::Conflict { .. } => codes::validation::CONFLICTING_OPTIONS,
        }
    }
}

/// Validation errors; every violation found is reported together
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{} term(s) not applicable to this network: {}", .violations.len(), join(.violations))]
    InapplicableTerms { violations: Vec<InapplicableTerm> },

    #[error("invalid {mode} configuration: {}", join(.violations))]
    RequirementsFailed {
        mode: &'static str,
        violations: Vec<RequirementViolation>,
    },
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// Get error code for global logging system
    pub fn error_code(&self) -> Code {
        match self {
            Self::InapplicableTerms { .. } => codes::validation::INAPPLICABLE_TERM,
            Self::RequirementsFailed { violations, .. } => violations
                .first()
                .map_or(codes::validation::MISSING_REQUIRED_FIELD, |v| v.error_code()),
        }
    }

    /// Span of the first offending term, when the error comes from the source text
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::InapplicableTerms { violations } => violations.first().map(|v| v.span),
            Self::RequirementsFailed { .. } => None,
        }
    }

    pub fn violation_count(&self) -> usize {
        match self {
            Self::InapplicableTerms { violations } => violations.len(),
            Self::RequirementsFailed { violations, .. } => violations.len(),
        }
    }
}
