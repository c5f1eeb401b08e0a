//! Error types for configuration parsing with global logging integration

use crate::lexical::LexerError;
use crate::logging::{codes, Code};
use crate::terms::TermSetKind;
use crate::utils::Span;

pub type SyntaxResult<T> = Result<T, SyntaxError>;

/// Grammar and value-domain errors. The first one aborts the whole file.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SyntaxError {
    #[error(transparent)]
    Lexer(#[from] LexerError),

    #[error("Unexpected token: expected {expected}, found {found} at {span}")]
    UnexpectedToken {
        expected: String,
        found: String,
        span: Span,
    },

    #[error("Unexpected end of input: expected {expected} after {span}")]
    UnexpectedEndOfInput { expected: String, span: Span },

    #[error("Unknown configuration parameter '{name}' at {span}")]
    UnknownParameter { name: String, span: Span },

    #[error("Parameter '{name}' set more than once at {span}")]
    DuplicateParameter { name: String, span: Span },

    #[error("Invalid value '{value}' for parameter '{name}': expected {expected} at {span}")]
    InvalidValue {
        name: String,
        value: String,
        expected: &'static str,
        span: Span,
    },

    #[error("Unknown {kind} term '{name}' at {span}")]
    UnknownTerm {
        kind: TermSetKind,
        name: String,
        span: Span,
    },

    #[error("Invalid number '{text}' at {span}")]
    InvalidNumber { text: String, span: Span },

    #[error("Decay value {value} for '{term}' must be greater than 1.0 at {span}")]
    DecayOutOfRange { term: String, value: f64, span: Span },

    #[error("Exponent {value} for '{term}' must be between 0.0 and 1.0 at {span}")]
    ExponentOutOfRange { term: String, value: f64, span: Span },

    #[error("Term '{term}' takes {expected} attribute names, found {found} at {span}")]
    WrongArgumentCount {
        term: String,
        expected: &'static str,
        found: usize,
        span: Span,
    },

    #[error("Term '{term}' requires a value ('= value') in simulation mode at {span}")]
    MissingValue { term: String, span: Span },

    #[error("Term '{term}' cannot have a value in estimation mode at {span}")]
    UnexpectedValue { term: String, span: Span },

    #[error("Too many terms in {kind} term set (max {limit}) at {span}")]
    TooManyTerms {
        kind: TermSetKind,
        limit: usize,
        span: Span,
    },

    #[error("Too many attribute names for '{term}' (max {limit}) at {span}")]
    TooManyAttributes {
        term: String,
        limit: usize,
        span: Span,
    },
}

impl SyntaxError {
    pub fn unexpected_token(expected: &str, found: &str, span: Span) -> Self {
        Self::UnexpectedToken {
            expected: expected.to_string(),
            found: found.to_string(),
            span,
        }
    }

    pub fn unexpected_end_of_input(expected: &str, span: Span) -> Self {
        Self::UnexpectedEndOfInput {
            expected: expected.to_string(),
            span,
        }
    }

    pub fn unknown_parameter(name: &str, span: Span) -> Self {
        Self::UnknownParameter {
            name: name.to_string(),
            span,
        }
    }

    pub fn duplicate_parameter(name: &str, span: Span) -> Self {
        Self::DuplicateParameter {
            name: name.to_string(),
            span,
        }
    }

    pub fn invalid_value(name: &str, value: &str, expected: &'static str, span: Span) -> Self {
        Self::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
            expected,
            span,
        }
    }

    pub fn unknown_term(kind: TermSetKind, name: &str, span: Span) -> Self {
        Self::UnknownTerm {
            kind,
            name: name.to_string(),
            span,
        }
    }

    pub fn invalid_number(text: &str, span: Span) -> Self {
        Self::InvalidNumber {
            text: text.to_string(),
            span,
        }
    }

    pub fn decay_out_of_range(term: &str, value: f64, span: Span) -> Self {
        Self::DecayOutOfRange {
            term: term.to_string(),
            value,
            span,
        }
    }

    pub fn exponent_out_of_range(term: &str, value: f64, span: Span) -> Self {
        Self::ExponentOutOfRange {
            term: term.to_string(),
            value,
            span,
        }
    }

    pub fn wrong_argument_count(
        term: &str,
        expected: &'static str,
        found: usize,
        span: Span,
    ) -> Self {
        Self::WrongArgumentCount {
            term: term.to_string(),
            expected,
            found,
            span,
        }
    }

    pub fn missing_value(term: &str, span: Span) -> Self {
        Self::MissingValue {
            term: term.to_string(),
            span,
        }
    }

    pub fn unexpected_value(term: &str, span: Span) -> Self {
        Self::UnexpectedValue {
            term: term.to_string(),
            span,
        }
    }

    /// Get error code for global logging system
    pub fn error_code(&self) -> Code {
        match self {
            Self::Lexer(e) => e.error_code(),
            Self::UnexpectedToken { .. } => codes::syntax::UNEXPECTED_TOKEN,
            Self::UnexpectedEndOfInput { .. } => codes::syntax::UNEXPECTED_END_OF_INPUT,
            Self::UnknownParameter { .. } => codes::syntax::UNKNOWN_PARAMETER,
            Self::DuplicateParameter { .. } => codes::syntax::DUPLICATE_PARAMETER,
            Self::InvalidValue { .. } | Self::InvalidNumber { .. } => {
                codes::syntax::INVALID_SCALAR_VALUE
            }
            Self::UnknownTerm { .. } => codes::syntax::UNKNOWN_TERM,
            Self::DecayOutOfRange { .. } | Self::ExponentOutOfRange { .. } => {
                codes::syntax::VALUE_OUT_OF_RANGE
            }
            Self::WrongArgumentCount { .. } => codes::syntax::WRONG_ARGUMENT_COUNT,
            Self::MissingValue { .. } | Self::UnexpectedValue { .. } => {
                codes::syntax::INLINE_VALUE_MISMATCH
            }
            Self::TooManyTerms { .. } | Self::TooManyAttributes { .. } => {
                codes::syntax::TERM_LIMIT_EXCEEDED
            }
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Self::Lexer(e) => e.span(),
            Self::UnexpectedToken { span, .. }
            | Self::UnexpectedEndOfInput { span, .. }
            | Self::UnknownParameter { span, .. }
            | Self::DuplicateParameter { span, .. }
            | Self::InvalidValue { span, .. }
            | Self::UnknownTerm { span, .. }
            | Self::InvalidNumber { span, .. }
            | Self::DecayOutOfRange { span, .. }
            | Self::ExponentOutOfRange { span, .. }
            | Self::WrongArgumentCount { span, .. }
            | Self::MissingValue { span, .. }
            | Self::UnexpectedValue { span, .. }
            | Self::TooManyTerms { span, .. }
            | Self::TooManyAttributes { span, .. } => *span,
        }
    }

    /// Check if this error should halt processing
    pub fn requires_halt(&self) -> bool {
        codes::requires_halt(self.error_code().as_str())
    }
}
