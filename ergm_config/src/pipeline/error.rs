use crate::file_processor::FileProcessorError;
use crate::logging::{codes, Code};
use crate::reference_resolution::ResolutionError;
use crate::syntax::SyntaxError;
use crate::utils::Span;
use crate::validation::ValidationError;

/// Pipeline processing errors
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("File processing failed: {0}")]
    FileProcessing(#[from] FileProcessorError),

    #[error("Configuration parsing failed: {0}")]
    Syntax(#[from] SyntaxError),

    #[error("Symbol resolution failed: {0}")]
    Resolution(#[from] ResolutionError),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Output error: {message}")]
    Output { message: String },
}

impl PipelineError {
    pub fn output_error(message: &str) -> Self {
        Self::Output {
            message: message.to_string(),
        }
    }

    pub fn error_code(&self) -> Code {
        match self {
            PipelineError::FileProcessing(e) => e.error_code(),
            PipelineError::Syntax(e) => e.error_code(),
            PipelineError::Resolution(e) => e.error_code(),
            PipelineError::Validation(e) => e.error_code(),
            PipelineError::Output { .. } => codes::file_processing::IO_ERROR,
        }
    }

    /// Source position of the failure, when the failing pass tracks one
    pub fn span(&self) -> Option<Span> {
        match self {
            PipelineError::Syntax(e) => Some(e.span()),
            PipelineError::Resolution(e) => e.span(),
            PipelineError::Validation(e) => e.span(),
            PipelineError::FileProcessing(_) | PipelineError::Output { .. } => None,
        }
    }

    /// Name of the pass that failed
    pub fn stage(&self) -> &'static str {
        match self {
            PipelineError::FileProcessing(_) => "file processing",
            PipelineError::Syntax(SyntaxError::Lexer(_)) => "lexical analysis",
            PipelineError::Syntax(_) => "syntax analysis",
            PipelineError::Resolution(_) => "symbol resolution",
            PipelineError::Validation(_) => "validation",
            PipelineError::Output { .. } => "output",
        }
    }
}

impl From<std::io::Error> for PipelineError {
    fn from(error: std::io::Error) -> Self {
        PipelineError::output_error(&error.to_string())
    }
}
