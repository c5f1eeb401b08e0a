//! Configuration module for logging - using compile-time constants
//!
//! Provides access to the compile-time logging bounds and the runtime user preferences.
//! The bounds are fixed at build time and cannot be modified at runtime.

use crate::config::compile_time::logging::*;
use crate::config::runtime::LoggingPreferences;
use std::sync::OnceLock;

type EventsLogLevel = crate::logging::events::LogLevel;

// ============================================================================
// RUNTIME PREFERENCES STORAGE
// ============================================================================

static RUNTIME_PREFERENCES: OnceLock<LoggingPreferences> = OnceLock::new();

/// Initialize runtime preferences
pub fn init_runtime_preferences(preferences: LoggingPreferences) -> Result<(), String> {
    RUNTIME_PREFERENCES
        .set(preferences)
        .map_err(|_| "Runtime preferences already initialized")?;

    Ok(())
}

/// Get runtime preferences (with fallback to defaults)
fn get_runtime_preferences() -> LoggingPreferences {
    RUNTIME_PREFERENCES.get().cloned().unwrap_or_default()
}

// ============================================================================
// CONFIGURATION ACCESS FUNCTIONS
// ============================================================================

/// Get the compile-time floor below which events can never be hidden
pub fn get_floor_log_level() -> EventsLogLevel {
    match SECURITY_MIN_LOG_LEVEL {
        0 => EventsLogLevel::Error,
        1 => EventsLogLevel::Warning,
        _ => EventsLogLevel::Info,
    }
}

/// Get minimum log level (user preference, never stricter than the floor)
pub fn get_min_log_level() -> EventsLogLevel {
    let user_level = get_runtime_preferences().min_log_level.to_events_log_level();
    user_level.max(get_floor_log_level())
}

/// Check if structured logging is enabled (user preference)
pub fn use_structured_logging() -> bool {
    get_runtime_preferences().use_structured_logging
}

/// Check if console logging is enabled (user preference)
pub fn use_console_logging() -> bool {
    get_runtime_preferences().enable_console_logging
}

/// Get maximum log message length (compile-time constant)
pub fn get_max_log_message_length() -> usize {
    MAX_LOG_MESSAGE_LENGTH
}

/// Get configuration summary for diagnostics
pub fn get_config_summary() -> String {
    let preferences = get_runtime_preferences();

    format!(
        "Logging Configuration:\n\
         === Compile-time Bounds ===\n\
         - Max message length: {}\n\
         - Floor log level: {}\n\
         === User Preferences (Runtime) ===\n\
         - Min log level: {:?}\n\
         - Structured logging: {}\n\
         - Console logging: {}",
        MAX_LOG_MESSAGE_LENGTH,
        get_floor_log_level().as_str(),
        preferences.min_log_level,
        preferences.use_structured_logging,
        preferences.enable_console_logging,
    )
}
