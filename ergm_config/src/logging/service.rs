//! Logging service and logger implementations

use super::codes::Code;
use super::config;
use super::events::{LogEvent, LogLevel};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Simple logger trait
pub trait Logger: Send + Sync {
    fn log(&self, event: &LogEvent);
}

/// Main logging service with configuration awareness
pub struct LoggingService {
    logger: Arc<dyn Logger>,
    min_level: LogLevel,
}

impl LoggingService {
    /// Create new logging service with specified logger and minimum level
    pub fn new(logger: Arc<dyn Logger>, min_level: LogLevel) -> Self {
        Self { logger, min_level }
    }

    /// Create service with configuration-aware settings
    pub fn with_config() -> Self {
        let min_level = config::get_min_log_level();
        // console output off: events are only kept in memory
        let logger: Arc<dyn Logger> = if !config::use_console_logging() {
            Arc::new(MemoryLogger::new())
        } else if config::use_structured_logging() {
            Arc::new(StructuredLogger::new(min_level))
        } else {
            Arc::new(ConsoleLogger::new(min_level))
        };

        Self::new(logger, min_level)
    }

    /// Check if level should be logged
    pub fn should_log(&self, level: LogLevel) -> bool {
        level <= self.min_level
    }

    /// Log an event, cutting the message at the compile-time length bound
    pub fn log_event(&self, mut event: LogEvent) {
        if !self.should_log(event.level) {
            return;
        }

        let max_len = config::get_max_log_message_length();
        if event.message.len() > max_len {
            let mut cut = max_len;
            while !event.message.is_char_boundary(cut) {
                cut -= 1;
            }
            event.message.truncate(cut);
        }

        self.logger.log(&event);
    }

    pub fn log_error(&self, error_code: Code, message: &str) {
        self.log_event(LogEvent::error(error_code, message));
    }

    pub fn log_success(&self, success_code: Code, message: &str) {
        self.log_event(LogEvent::success(success_code, message));
    }

    pub fn log_info(&self, message: &str) {
        self.log_event(LogEvent::info(message));
    }

    pub fn log_warning(&self, message: &str) {
        self.log_event(LogEvent::warning(message));
    }

    pub fn log_debug(&self, message: &str) {
        self.log_event(LogEvent::debug(message));
    }
}

/// Simple console logger
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, event: &LogEvent) {
        if event.level <= self.min_level {
            // stdout is reserved for command output
            if event.is_error() && self.min_level >= LogLevel::Debug {
                eprintln!("{}", event.format_detailed());
            } else {
                eprintln!("{}", event.format());
            }
        }
    }
}

/// Structured logger for JSON output
pub struct StructuredLogger {
    min_level: LogLevel,
}

impl StructuredLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }
}

impl Logger for StructuredLogger {
    fn log(&self, event: &LogEvent) {
        if event.level <= self.min_level {
            let line = event.format_json().unwrap_or_else(|_| event.format());
            eprintln!("{}", line);
        }
    }
}

/// In-memory logger, used when console output is disabled
pub struct MemoryLogger {
    events: Mutex<Vec<LogEvent>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    /// Event buffer, recovered if a logging thread panicked while holding it
    fn events(&self) -> MutexGuard<'_, Vec<LogEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get_events(&self) -> Vec<LogEvent> {
        self.events().clone()
    }

    pub fn clear(&self) {
        self.events().clear();
    }

    pub fn event_count(&self) -> usize {
        self.events().len()
    }

    pub fn get_errors(&self) -> Vec<LogEvent> {
        self.events()
            .iter()
            .filter(|e| e.is_error())
            .cloned()
            .collect()
    }

    pub fn has_error_with_code(&self, code: Code) -> bool {
        self.events()
            .iter()
            .any(|e| e.is_error() && e.code == code)
    }

    pub fn has_success_with_code(&self, code: Code) -> bool {
        self.events()
            .iter()
            .any(|e| e.is_info() && e.code == code)
    }

    pub fn get_events_by_category(&self, category: &str) -> Vec<LogEvent> {
        self.events()
            .iter()
            .filter(|e| e.category() == category)
            .cloned()
            .collect()
    }
}

impl Default for MemoryLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for MemoryLogger {
    fn log(&self, event: &LogEvent) {
        self.events().push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::codes;

    #[test]
    fn test_memory_logger() {
        let logger = MemoryLogger::new();

        logger.log(&LogEvent::info("Message 1"));
        logger.log(&LogEvent::error(
            codes::lexical::INVALID_CHARACTER,
            "Error message",
        ));

        assert_eq!(logger.event_count(), 2);
        assert_eq!(logger.get_errors().len(), 1);
        assert!(logger.has_error_with_code(codes::lexical::INVALID_CHARACTER));

        logger.clear();
        assert_eq!(logger.event_count(), 0);
    }

    #[test]
    fn test_logging_service() {
        let logger = Arc::new(MemoryLogger::new());
        let service = LoggingService::new(logger.clone(), LogLevel::Debug);

        service.log_error(codes::syntax::UNKNOWN_PARAMETER, "Unknown parameter");
        service.log_success(codes::success::CONFIG_PARSE_COMPLETE, "Parsed");
        service.log_info("Info");

        assert_eq!(logger.event_count(), 3);
        assert!(logger.has_error_with_code(codes::syntax::UNKNOWN_PARAMETER));
        assert!(logger.has_success_with_code(codes::success::CONFIG_PARSE_COMPLETE));
    }

    #[test]
    fn test_log_level_filtering() {
        let logger = Arc::new(MemoryLogger::new());
        let service = LoggingService::new(logger.clone(), LogLevel::Error);

        service.log_debug("Debug message");
        service.log_info("Info message");
        service.log_warning("Warning message");
        service.log_error(codes::system::INTERNAL_ERROR, "Error message");

        assert_eq!(logger.event_count(), 1);
        assert!(logger.has_error_with_code(codes::system::INTERNAL_ERROR));
    }

    #[test]
    fn test_long_messages_are_cut() {
        let logger = Arc::new(MemoryLogger::new());
        let service = LoggingService::new(logger.clone(), LogLevel::Debug);

        let long = "x".repeat(config::get_max_log_message_length() + 50);
        service.log_info(&long);

        let events = logger.get_events();
        assert_eq!(events[0].message.len(), config::get_max_log_message_length());
    }

    #[test]
    fn test_event_categorization() {
        let logger = MemoryLogger::new();

        logger.log(&LogEvent::error(
            codes::file_processing::FILE_NOT_FOUND,
            "File error",
        ));
        logger.log(&LogEvent::error(
            codes::validation::INAPPLICABLE_TERM,
            "Validation error",
        ));

        assert_eq!(logger.get_events_by_category("FileProcessing").len(), 1);
        assert_eq!(logger.get_events_by_category("Validation").len(), 1);
    }

    #[test]
    fn test_console_and_structured_loggers_do_not_panic() {
        let event = LogEvent::error(codes::file_processing::FILE_NOT_FOUND, "Test error")
            .with_context("key", "value");

        ConsoleLogger::new(LogLevel::Info).log(&event);
        StructuredLogger::new(LogLevel::Debug).log(&event);
    }
}
