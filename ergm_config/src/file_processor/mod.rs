//! Configuration file access with compile-time size limit and global logging integration

mod processor;

pub use processor::{FileMetadata, FileProcessingResult, FileProcessor, FileProcessorError};

use std::path::Path;

/// Read a configuration file with default settings
pub fn process_file(file_path: &Path) -> Result<FileProcessingResult, FileProcessorError> {
    FileProcessor::new().process_file(file_path)
}

/// Get the compile-time maximum configuration file size
pub fn get_max_file_size() -> u64 {
    FileProcessor::max_file_size()
}
