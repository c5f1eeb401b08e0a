// RUNTIME PREFERENCES (User Experience)

use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexicalPreferences {
    /// Whether to log a warning when a token is cut at the length bound
    pub warn_on_truncation: bool,

    /// Whether to show position information in error messages
    pub include_position_in_errors: bool,
}

impl Default for LexicalPreferences {
    fn default() -> Self {
        Self {
            warn_on_truncation: env::var(env_vars::LEXICAL_WARN_ON_TRUNCATION)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            include_position_in_errors: env::var(env_vars::LEXICAL_INCLUDE_POSITIONS)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionPreferences {
    /// Whether to log every attribute name -> index binding
    pub log_resolution_details: bool,
}

impl Default for ResolutionPreferences {
    fn default() -> Self {
        Self {
            log_resolution_details: env::var(env_vars::RESOLUTION_LOG_DETAILS)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingPreferences {
    /// Whether to use structured JSON logging (user preference)
    pub use_structured_logging: bool,

    /// Whether to enable console output (user preference)
    pub enable_console_logging: bool,

    /// User preferred minimum log level
    pub min_log_level: LogLevel,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            use_structured_logging: env::var(env_vars::LOGGING_USE_STRUCTURED)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            enable_console_logging: env::var(env_vars::LOGGING_ENABLE_CONSOLE)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            min_log_level: env::var(env_vars::LOGGING_MIN_LEVEL)
                .ok()
                .and_then(|v| parse_log_level(&v))
                .unwrap_or(LogLevel::Warning),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Convert to events::LogLevel for compatibility
    pub fn to_events_log_level(&self) -> crate::logging::events::LogLevel {
        match self {
            LogLevel::Error => crate::logging::events::LogLevel::Error,
            LogLevel::Warning => crate::logging::events::LogLevel::Warning,
            LogLevel::Info => crate::logging::events::LogLevel::Info,
            LogLevel::Debug => crate::logging::events::LogLevel::Debug,
        }
    }
}

/// Parse log level from string (used for environment variables)
fn parse_log_level(level: &str) -> Option<LogLevel> {
    match level.to_lowercase().as_str() {
        "error" | "0" => Some(LogLevel::Error),
        "warning" | "warn" | "1" => Some(LogLevel::Warning),
        "info" | "2" => Some(LogLevel::Info),
        "debug" | "3" => Some(LogLevel::Debug),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub lexical: LexicalPreferences,
    pub resolution: ResolutionPreferences,
    pub logging: LoggingPreferences,
}

/// Environment variable names for configuration
pub mod env_vars {
    // Lexical
    pub const LEXICAL_WARN_ON_TRUNCATION: &str = "ERGM_LEXICAL_WARN_ON_TRUNCATION";
    pub const LEXICAL_INCLUDE_POSITIONS: &str = "ERGM_LEXICAL_INCLUDE_POSITIONS";

    // Resolution
    pub const RESOLUTION_LOG_DETAILS: &str = "ERGM_RESOLUTION_LOG_DETAILS";

    // Logging
    pub const LOGGING_USE_STRUCTURED: &str = "ERGM_LOGGING_USE_STRUCTURED";
    pub const LOGGING_ENABLE_CONSOLE: &str = "ERGM_LOGGING_ENABLE_CONSOLE";
    pub const LOGGING_MIN_LEVEL: &str = "ERGM_LOGGING_MIN_LEVEL";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(parse_log_level("error"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("ERROR"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("0"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("warn"), Some(LogLevel::Warning));
        assert_eq!(parse_log_level("1"), Some(LogLevel::Warning));
        assert_eq!(parse_log_level("info"), Some(LogLevel::Info));
        assert_eq!(parse_log_level("debug"), Some(LogLevel::Debug));
        assert_eq!(parse_log_level("3"), Some(LogLevel::Debug));
        assert_eq!(parse_log_level("verbose"), None);
    }

    #[test]
    fn test_env_var_names_are_prefixed() {
        for name in [
            env_vars::LEXICAL_WARN_ON_TRUNCATION,
            env_vars::RESOLUTION_LOG_DETAILS,
            env_vars::LOGGING_MIN_LEVEL,
        ] {
            assert!(name.starts_with("ERGM_"));
        }
    }

    #[test]
    fn test_runtime_config_serializes() {
        let config = RuntimeConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("warn_on_truncation"));
        assert!(json.contains("min_log_level"));
    }
}
