//! Consolidated error codes and classification system
//!
//! Single source of truth for all error codes, their metadata, and classification functions.
//! This module combines code constants with their behavioral metadata in one place.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ERROR CLASSIFICATION TYPES
// ============================================================================

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for an error code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub requires_halt: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

impl ErrorMetadata {
    pub const fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        requires_halt: bool,
        description: &'static str,
        recommended_action: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            requires_halt,
            description,
            recommended_action,
        }
    }
}

// ============================================================================
// ERROR CODE CONSTANTS
// ============================================================================

/// System error codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
}

/// Configuration file access error codes
pub mod file_processing {
    use super::Code;

    pub const FILE_NOT_FOUND: Code = Code::new("E005");
    pub const FILE_TOO_LARGE: Code = Code::new("E007");
    pub const PERMISSION_DENIED: Code = Code::new("E009");
    pub const INVALID_ENCODING: Code = Code::new("E010");
    pub const IO_ERROR: Code = Code::new("E011");
}

/// Tokenizer error codes
pub mod lexical {
    use super::Code;

    pub const INVALID_CHARACTER: Code = Code::new("E020");
    pub const UNTERMINATED_STRING: Code = Code::new("E021");
    pub const TOKEN_TRUNCATED: Code = Code::new("W022");
    pub const TOO_MANY_TOKENS: Code = Code::new("E027");
}

/// Scalar field and term-set grammar error codes
pub mod syntax {
    use super::Code;

    pub const UNEXPECTED_TOKEN: Code = Code::new("E040");
    pub const UNEXPECTED_END_OF_INPUT: Code = Code::new("E041");
    pub const UNKNOWN_PARAMETER: Code = Code::new("E042");
    pub const DUPLICATE_PARAMETER: Code = Code::new("E043");
    pub const INVALID_SCALAR_VALUE: Code = Code::new("E044");
    pub const UNKNOWN_TERM: Code = Code::new("E050");
    pub const VALUE_OUT_OF_RANGE: Code = Code::new("E051");
    pub const WRONG_ARGUMENT_COUNT: Code = Code::new("E052");
    pub const INLINE_VALUE_MISMATCH: Code = Code::new("E053");
    pub const TERM_LIMIT_EXCEEDED: Code = Code::new("E054");
}

/// Symbol resolution error codes
pub mod resolution {
    use super::Code;

    pub const UNKNOWN_ATTRIBUTE: Code = Code::new("E110");
    pub const COORDINATE_COUNT_MISMATCH: Code = Code::new("E111");
    pub const INTERNAL_INVARIANT: Code = Code::new("E112");
}

/// Network applicability and requirement error codes
pub mod validation {
    use super::Code;

    pub const INAPPLICABLE_TERM: Code = Code::new("E230");
    pub const MISSING_REQUIRED_FIELD: Code = Code::new("E240");
    pub const CONFLICTING_OPTIONS: Code = Code::new("E241");
}

// ============================================================================
// SUCCESS CODE CONSTANTS
// ============================================================================

/// Success codes
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I004");
    pub const FILE_PROCESSING_SUCCESS: Code = Code::new("I006");
    pub const TOKENIZATION_COMPLETE: Code = Code::new("I020");
    pub const CONFIG_PARSE_COMPLETE: Code = Code::new("I040");
    pub const TERM_SET_PARSED: Code = Code::new("I041");
    pub const SYMBOL_RESOLUTION_COMPLETE: Code = Code::new("I060");
    pub const DYADIC_COALESCING_COMPLETE: Code = Code::new("I061");
    pub const APPLICABILITY_CHECK_PASSED: Code = Code::new("I080");
    pub const REQUIREMENTS_CHECK_PASSED: Code = Code::new("I081");
    pub const CONFIG_LOAD_COMPLETE: Code = Code::new("I090");
    pub const MODEL_READY: Code = Code::new("I091");
}

// ============================================================================
// ERROR METADATA REGISTRY
// ============================================================================

const ERROR_METADATA: &[ErrorMetadata] = &[
    // System errors
    ErrorMetadata::new(
        "ERR001",
        "System",
        Severity::Critical,
        false,
        true,
        "Critical internal error",
        "File a bug report with the configuration file attached",
    ),
    ErrorMetadata::new(
        "ERR002",
        "System",
        Severity::Critical,
        false,
        true,
        "System initialization failure",
        "Check logging environment variables",
    ),
    // File processing errors
    ErrorMetadata::new(
        "E005",
        "FileProcessing",
        Severity::Medium,
        false,
        true,
        "Configuration file not found at specified path",
        "Check file path and ensure file exists",
    ),
    ErrorMetadata::new(
        "E007",
        "FileProcessing",
        Severity::Medium,
        false,
        true,
        "Configuration file exceeds maximum size limit",
        "Reduce file size or rebuild with a larger limit profile",
    ),
    ErrorMetadata::new(
        "E009",
        "FileProcessing",
        Severity::Medium,
        false,
        true,
        "Permission denied reading configuration file",
        "Check file permissions",
    ),
    ErrorMetadata::new(
        "E010",
        "FileProcessing",
        Severity::Medium,
        false,
        true,
        "Configuration file is not valid UTF-8",
        "Re-save the file as UTF-8 or ASCII",
    ),
    ErrorMetadata::new(
        "E011",
        "FileProcessing",
        Severity::High,
        false,
        true,
        "I/O error reading configuration file",
        "Check the file system and retry",
    ),
    // Lexical errors
    ErrorMetadata::new(
        "E020",
        "Lexical",
        Severity::High,
        false,
        true,
        "Character not allowed in a configuration file",
        "Remove the character or quote the value",
    ),
    ErrorMetadata::new(
        "E021",
        "Lexical",
        Severity::High,
        false,
        true,
        "Quoted string is not terminated",
        "Add the closing double quote",
    ),
    ErrorMetadata::new(
        "W022",
        "Lexical",
        Severity::Low,
        true,
        false,
        "Token longer than the maximum token length was truncated",
        "Shorten the name or value",
    ),
    ErrorMetadata::new(
        "E027",
        "Lexical",
        Severity::High,
        false,
        true,
        "Configuration file contains too many tokens",
        "Split the configuration or raise max_token_count",
    ),
    // Syntax errors
    ErrorMetadata::new(
        "E040",
        "Syntax",
        Severity::High,
        false,
        true,
        "Unexpected token",
        "Check punctuation around the reported position",
    ),
    ErrorMetadata::new(
        "E041",
        "Syntax",
        Severity::High,
        false,
        true,
        "Configuration file ended in the middle of an assignment",
        "Complete the assignment or close the open brace",
    ),
    ErrorMetadata::new(
        "E042",
        "Syntax",
        Severity::High,
        false,
        true,
        "Unknown configuration parameter",
        "Run with -h to list valid parameter names",
    ),
    ErrorMetadata::new(
        "E043",
        "Syntax",
        Severity::High,
        false,
        true,
        "Configuration parameter set more than once",
        "Remove the duplicate assignment",
    ),
    ErrorMetadata::new(
        "E044",
        "Syntax",
        Severity::High,
        false,
        true,
        "Value does not match the parameter type",
        "Use a number, True/False or a string as the parameter requires",
    ),
    ErrorMetadata::new(
        "E050",
        "Syntax",
        Severity::High,
        false,
        true,
        "Unknown model term name",
        "Run with -h to list valid term names",
    ),
    ErrorMetadata::new(
        "E051",
        "Syntax",
        Severity::High,
        false,
        true,
        "Numeric term argument out of range",
        "Decay must be > 1.0; exponents must lie in [0, 1]",
    ),
    ErrorMetadata::new(
        "E052",
        "Syntax",
        Severity::High,
        false,
        true,
        "Wrong number of attribute arguments for term",
        "Check the argument list of the term",
    ),
    ErrorMetadata::new(
        "E053",
        "Syntax",
        Severity::High,
        false,
        true,
        "Inline coefficient value missing or not allowed",
        "Simulation requires '= value' on every term; estimation forbids it",
    ),
    ErrorMetadata::new(
        "E054",
        "Syntax",
        Severity::High,
        false,
        true,
        "Too many terms or attribute names",
        "Reduce the term set or raise the limit profile",
    ),
    // Resolution errors
    ErrorMetadata::new(
        "E110",
        "Resolution",
        Severity::High,
        false,
        true,
        "Attribute name not found in the loaded attribute table",
        "Check the attribute file header for the attribute name",
    ),
    ErrorMetadata::new(
        "E111",
        "Resolution",
        Severity::High,
        false,
        true,
        "Wrong number of coordinate attributes for distance term",
        "Geographic distance needs 2 attributes, Euclidean distance needs 3",
    ),
    ErrorMetadata::new(
        "E112",
        "Resolution",
        Severity::Critical,
        false,
        true,
        "Internal invariant violated during symbol resolution",
        "File a bug report with the configuration file attached",
    ),
    // Validation errors
    ErrorMetadata::new(
        "E230",
        "Validation",
        Severity::High,
        false,
        true,
        "Term not applicable to this network type or mode",
        "Remove the term or use the variant for this network",
    ),
    ErrorMetadata::new(
        "E240",
        "Validation",
        Severity::High,
        false,
        true,
        "Required configuration parameter not set",
        "Add the parameter to the configuration file",
    ),
    ErrorMetadata::new(
        "E241",
        "Validation",
        Severity::High,
        false,
        true,
        "Configuration options conflict",
        "Enable at most one of the conflicting options",
    ),
];

/// Error metadata registry using OnceLock for thread safety
static ERROR_REGISTRY: OnceLock<HashMap<&'static str, &'static ErrorMetadata>> = OnceLock::new();

/// Initialize and get the error registry
fn get_error_registry() -> &'static HashMap<&'static str, &'static ErrorMetadata> {
    ERROR_REGISTRY.get_or_init(|| ERROR_METADATA.iter().map(|m| (m.code, m)).collect())
}

/// Get complete metadata for error code
pub fn get_error_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    get_error_registry().get(code).copied()
}

/// Get error severity from error code
pub fn get_severity(code: &str) -> Severity {
    get_error_metadata(code)
        .map(|metadata| metadata.severity)
        .unwrap_or(Severity::Medium)
}

/// Check if error is recoverable
pub fn is_recoverable(code: &str) -> bool {
    get_error_metadata(code)
        .map(|metadata| metadata.recoverable)
        .unwrap_or(true)
}

/// Check if error requires immediate halt
pub fn requires_halt(code: &str) -> bool {
    get_error_metadata(code)
        .map(|metadata| metadata.requires_halt)
        .unwrap_or(false)
}

/// Get human-readable description for error code
pub fn get_description(code: &str) -> &'static str {
    get_error_metadata(code)
        .map(|metadata| metadata.description)
        .unwrap_or("Unknown error")
}

/// Get recommended action for error code
pub fn get_action(code: &str) -> &'static str {
    get_error_metadata(code)
        .map(|metadata| metadata.recommended_action)
        .unwrap_or("No specific action available")
}

/// Get error category from error code
pub fn get_category(code: &str) -> &'static str {
    get_error_metadata(code)
        .map(|metadata| metadata.category)
        .unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_error_code_has_metadata() {
        let codes = [
            system::INTERNAL_ERROR,
            system::INITIALIZATION_FAILURE,
            file_processing::FILE_NOT_FOUND,
            file_processing::FILE_TOO_LARGE,
            file_processing::PERMISSION_DENIED,
            file_processing::INVALID_ENCODING,
            file_processing::IO_ERROR,
            lexical::INVALID_CHARACTER,
            lexical::UNTERMINATED_STRING,
            lexical::TOKEN_TRUNCATED,
            lexical::TOO_MANY_TOKENS,
            syntax::UNEXPECTED_TOKEN,
            syntax::UNEXPECTED_END_OF_INPUT,
            syntax::UNKNOWN_PARAMETER,
            syntax::DUPLICATE_PARAMETER,
            syntax::INVALID_SCALAR_VALUE,
            syntax::UNKNOWN_TERM,
            syntax::VALUE_OUT_OF_RANGE,
            syntax::WRONG_ARGUMENT_COUNT,
            syntax::INLINE_VALUE_MISMATCH,
            syntax::TERM_LIMIT_EXCEEDED,
            resolution::UNKNOWN_ATTRIBUTE,
            resolution::COORDINATE_COUNT_MISMATCH,
            resolution::INTERNAL_INVARIANT,
            validation::INAPPLICABLE_TERM,
            validation::MISSING_REQUIRED_FIELD,
            validation::CONFLICTING_OPTIONS,
        ];

        for code in codes {
            assert!(
                get_error_metadata(code.as_str()).is_some(),
                "missing metadata for {}",
                code
            );
        }
    }

    #[test]
    fn test_registry_has_no_duplicate_codes() {
        assert_eq!(get_error_registry().len(), ERROR_METADATA.len());
    }

    #[test]
    fn test_classification_lookups() {
        assert_eq!(get_category("E110"), "Resolution");
        assert_eq!(get_severity("ERR001"), Severity::Critical);
        assert!(requires_halt("E050"));
        assert!(is_recoverable("W022"));
        assert_eq!(get_description("XYZ"), "Unknown error");
        assert_eq!(get_action("XYZ"), "No specific action available");
    }
}
