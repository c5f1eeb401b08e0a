//! Global logging module for the configuration loader
//!
//! Provides thread-safe global logging with per-thread file context
//! and a clean macro interface.

pub mod codes;
pub mod config;
pub mod events;
pub mod macros;
pub mod service;

use std::cell::RefCell;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

// Re-export main types
pub use codes::Code;
pub use events::{LogEvent, LogLevel};
pub use service::{ConsoleLogger, Logger, LoggingService, MemoryLogger, StructuredLogger};

// ============================================================================
// GLOBAL STATE
// ============================================================================

static GLOBAL_LOGGER: OnceLock<Arc<LoggingService>> = OnceLock::new();

thread_local! {
    static FILE_CONTEXT: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Initialize global logging system
pub fn init_global_logging() -> Result<(), String> {
    let logging_service = Arc::new(LoggingService::with_config());

    GLOBAL_LOGGER
        .set(logging_service.clone())
        .map_err(|_| "Global logger already initialized")?;

    for code in [
        codes::system::INTERNAL_ERROR,
        codes::file_processing::FILE_NOT_FOUND,
        codes::lexical::INVALID_CHARACTER,
        codes::syntax::UNEXPECTED_TOKEN,
    ] {
        if codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!("Missing metadata for error code: {}", code));
        }
    }

    logging_service.log_event(LogEvent::success(
        codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Global logging system initialized",
    ));

    Ok(())
}

/// Check if global logging is initialized
pub fn is_initialized() -> bool {
    GLOBAL_LOGGER.get().is_some()
}

/// Safe access to global logger
pub fn try_get_global_logger() -> Option<&'static LoggingService> {
    GLOBAL_LOGGER.get().map(|service| service.as_ref())
}

// ============================================================================
// FILE CONTEXT MANAGEMENT
// ============================================================================

/// Set file context for current thread
pub fn set_file_context(file_path: PathBuf) {
    FILE_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = Some(file_path);
    });
}

/// Clear file context for current thread
pub fn clear_file_context() {
    FILE_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = None;
    });
}

/// Execute function with file context
pub fn with_file_context<F, R>(file_path: PathBuf, f: F) -> R
where
    F: FnOnce() -> R,
{
    set_file_context(file_path);
    let result = f();
    clear_file_context();
    result
}

/// Get current file context (used by macros)
pub fn get_current_file_context() -> Option<PathBuf> {
    FILE_CONTEXT.with(|ctx| ctx.borrow().clone())
}

// ============================================================================
// MACRO SUPPORT FUNCTIONS
// ============================================================================

fn dispatch(mut event: LogEvent, span: Option<crate::utils::Span>, context: Vec<(&str, &str)>) {
    if let Some(s) = span {
        event = event.with_span(s);
    }

    for (key, value) in context {
        event = event.with_context(key, value);
    }

    if let Some(file_path) = get_current_file_context() {
        event = event.with_file_path(&file_path.display().to_string());
    }

    if let Some(logger) = try_get_global_logger() {
        logger.log_event(event);
    }
}

/// Log error with context (used by log_error! macro)
pub fn log_error_with_context(
    code: Code,
    message: &str,
    span: Option<crate::utils::Span>,
    context: Vec<(&str, &str)>,
) {
    dispatch(LogEvent::error(code, message), span, context);
}

/// Log coded warning with context (used by log_warning! macro)
pub fn log_warning_with_context(
    code: Code,
    message: &str,
    span: Option<crate::utils::Span>,
    context: Vec<(&str, &str)>,
) {
    dispatch(LogEvent::warning_with_code(code, message), span, context);
}

/// Log success with context (used by log_success! macro)
pub fn log_success_with_context(code: Code, message: &str, context: Vec<(&str, &str)>) {
    dispatch(LogEvent::success(code, message), None, context);
}

/// Log info with context (used by log_info! macro)
pub fn log_info_with_context(message: &str, context: Vec<(&str, &str)>) {
    dispatch(LogEvent::info(message), None, context);
}

/// Log debug with context (used by log_debug! macro)
pub fn log_debug_with_context(message: &str, context: Vec<(&str, &str)>) {
    if config::get_min_log_level() >= LogLevel::Debug {
        dispatch(LogEvent::debug(message), None, context);
    }
}

// ============================================================================
// SAFE FALLBACK LOGGING
// ============================================================================

/// Safe error logging (won't panic if uninitialized)
pub fn safe_log_error(code: Code, message: &str) {
    if let Some(logger) = try_get_global_logger() {
        logger.log_event(LogEvent::error(code, message));
    } else {
        eprintln!("[ERROR] FALLBACK: [{}] {}", code.as_str(), message);
    }
}

/// Get system diagnostics
pub fn get_system_diagnostics() -> String {
    let mut diagnostics = String::new();

    diagnostics.push_str("=== Logging System Diagnostics ===\n");
    diagnostics.push_str(&format!("Initialized: {}\n", is_initialized()));
    diagnostics.push('\n');
    diagnostics.push_str(&config::get_config_summary());

    diagnostics
}
