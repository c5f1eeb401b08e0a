//! Scoped configuration file read
//!
//! The file handle is opened, read to exhaustion or first error, and dropped on
//! every exit path. Reads are capped at `MAX_FILE_SIZE + 1` bytes so an
//! oversized file is detected without loading it whole.

use crate::config::compile_time::file_processing::MAX_FILE_SIZE;
use crate::logging::codes;
use crate::{log_debug, log_error, log_success};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

/// File processor specific errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum FileProcessorError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Configuration file too large: {size} bytes (max: {max_size})")]
    FileTooLarge { size: u64, max_size: u64 },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    #[error("Invalid UTF-8 encoding in file: {path}")]
    InvalidEncoding { path: String },

    #[error("I/O error reading file: {message}")]
    IoError { message: String },
}

impl FileProcessorError {
    /// Get the appropriate error code for this error type
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            FileProcessorError::FileNotFound { .. } => codes::file_processing::FILE_NOT_FOUND,
            FileProcessorError::FileTooLarge { .. } => codes::file_processing::FILE_TOO_LARGE,
            FileProcessorError::PermissionDenied { .. } => {
                codes::file_processing::PERMISSION_DENIED
            }
            FileProcessorError::InvalidEncoding { .. } => codes::file_processing::INVALID_ENCODING,
            FileProcessorError::IoError { .. } => codes::file_processing::IO_ERROR,
        }
    }

    /// Check if this error should halt processing
    pub fn requires_halt(&self) -> bool {
        codes::requires_halt(self.error_code().as_str())
    }

    fn from_io(path: &Path, error: std::io::Error) -> Self {
        let path = path.display().to_string();
        match error.kind() {
            ErrorKind::NotFound => FileProcessorError::FileNotFound { path },
            ErrorKind::PermissionDenied => FileProcessorError::PermissionDenied { path },
            ErrorKind::InvalidData => FileProcessorError::InvalidEncoding { path },
            _ => FileProcessorError::IoError {
                message: format!("Failed to read '{}': {}", path, error),
            },
        }
    }
}

/// File metadata collected during processing
#[derive(Debug, Clone)]
pub struct FileMetadata {
    pub path: PathBuf,
    /// File size in bytes
    pub size: u64,
    pub line_count: usize,
}

impl FileMetadata {
    /// Get file size in human-readable format
    pub fn human_readable_size(&self) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
        let mut size = self.size as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", self.size, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }
}

/// File processing result containing source and metadata
#[derive(Debug, Clone)]
pub struct FileProcessingResult {
    /// File contents as UTF-8 string
    pub source: String,
    pub metadata: FileMetadata,
    pub processing_duration: std::time::Duration,
}

/// Configuration file reader bounded by the compile-time size limit
#[derive(Debug, Default)]
pub struct FileProcessor {
    /// Whether to log size and timing details on success
    pub enable_performance_logging: bool,
}

impl FileProcessor {
    pub fn new() -> Self {
        Self {
            enable_performance_logging: true,
        }
    }

    /// Get the compile-time maximum file size
    pub fn max_file_size() -> u64 {
        MAX_FILE_SIZE
    }

    /// Read a configuration file and return contents with metadata
    pub fn process_file(&self, path: &Path) -> Result<FileProcessingResult, FileProcessorError> {
        let start_time = std::time::Instant::now();
        let file_str = path.display().to_string();

        log_debug!("Starting file processing", "file" => file_str.as_str());

        let bytes = self.read_bounded(path).inspect_err(|error| {
            log_error!(error.error_code(), &error.to_string(), "file" => file_str.as_str());
        })?;

        let source = String::from_utf8(bytes).map_err(|_| {
            let error = FileProcessorError::InvalidEncoding {
                path: file_str.clone(),
            };
            log_error!(error.error_code(), "Configuration file is not valid UTF-8",
                "file" => file_str.as_str());
            error
        })?;

        let metadata = FileMetadata {
            path: path.to_path_buf(),
            size: source.len() as u64,
            line_count: source.lines().count(),
        };

        let result = FileProcessingResult {
            source,
            metadata,
            processing_duration: start_time.elapsed(),
        };

        if self.enable_performance_logging {
            let human_size = result.metadata.human_readable_size();
            let duration_str = format!("{:.2}", result.processing_duration.as_secs_f64() * 1000.0);
            log_success!(
                codes::success::FILE_PROCESSING_SUCCESS,
                "Configuration file read",
                "file" => file_str.as_str(),
                "size_human" => human_size,
                "lines" => result.metadata.line_count,
                "duration_ms" => duration_str
            );
        } else {
            log_success!(
                codes::success::FILE_PROCESSING_SUCCESS,
                "Configuration file read",
                "file" => file_str.as_str()
            );
        }

        Ok(result)
    }

    fn read_bounded(&self, path: &Path) -> Result<Vec<u8>, FileProcessorError> {
        let file = File::open(path).map_err(|e| FileProcessorError::from_io(path, e))?;

        let mut bytes = Vec::new();
        file.take(MAX_FILE_SIZE + 1)
            .read_to_end(&mut bytes)
            .map_err(|e| FileProcessorError::from_io(path, e))?;

        if bytes.len() as u64 > MAX_FILE_SIZE {
            let size = std::fs::metadata(path)
                .map(|m| m.len())
                .unwrap_or(bytes.len() as u64);
            return Err(FileProcessorError::FileTooLarge {
                size,
                max_size: MAX_FILE_SIZE,
            });
        }

        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_process_valid_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("estim.txt");
        let content = "ACA_S = 0.1\n# comment\nstructParams = {Arc}\n";
        fs::write(&file_path, content).unwrap();

        let result = FileProcessor::new().process_file(&file_path).unwrap();

        assert_eq!(result.source, content);
        assert_eq!(result.metadata.line_count, 3);
        assert_eq!(result.metadata.size, content.len() as u64);
    }

    #[test]
    fn test_empty_file_is_readable() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("empty.txt");
        fs::write(&file_path, "").unwrap();

        let result = FileProcessor::new().process_file(&file_path).unwrap();
        assert!(result.source.is_empty());
        assert_eq!(result.metadata.size, 0);
    }

    #[test]
    fn test_file_not_found() {
        let dir = tempdir().unwrap();
        let result = FileProcessor::new().process_file(&dir.path().join("missing.txt"));

        assert_matches!(result, Err(FileProcessorError::FileNotFound { .. }));
    }

    #[test]
    fn test_file_too_large() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("huge.txt");
        fs::write(&file_path, vec![b'#'; (MAX_FILE_SIZE + 10) as usize]).unwrap();

        let result = FileProcessor::new().process_file(&file_path);
        assert_matches!(
            result,
            Err(FileProcessorError::FileTooLarge { size, max_size })
                if size == MAX_FILE_SIZE + 10 && max_size == MAX_FILE_SIZE
        );
    }

    #[test]
    fn test_invalid_utf8() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("latin1.txt");
        fs::write(&file_path, [b'a', 0xff, 0xfe, b'b']).unwrap();

        let result = FileProcessor::new().process_file(&file_path);
        assert_matches!(result, Err(FileProcessorError::InvalidEncoding { .. }));
    }

    #[test]
    fn test_error_codes() {
        let error = FileProcessorError::FileNotFound {
            path: "x".to_string(),
        };
        assert_eq!(error.error_code().as_str(), "E005");
        assert!(error.requires_halt());
    }

    #[test]
    fn test_human_readable_size() {
        let metadata = FileMetadata {
            path: PathBuf::from("x"),
            size: 2048,
            line_count: 0,
        };
        assert_eq!(metadata.human_readable_size(), "2.00 KB");
    }
}
