//! Validation for configuration files before reading them
//!
//! Checks for:
//! - File existence and permissions
//! - File size limits
//! - Binary file detection

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

/// Maximum configuration file size in bytes (10 MB)
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Errors that can occur when validating a configuration file
#[derive(Debug, Clone, PartialEq)]
pub enum FileOpenError {
    /// File does not exist
    NotFound,
    /// Permission denied to read file
    PermissionDenied,
    /// Path is a directory, not a file
    IsDirectory,
    /// File appears to be binary (contains null bytes)
    BinaryFile,
    /// File exceeds size limit
    TooLarge { size_mb: f64 },
    /// Other I/O error
    IoError(String),
}

impl FileOpenError {
    /// Get a user-friendly error message
    pub fn user_message(&self, filename: &str) -> String {
        match self {
            Self::NotFound => format!("Configuration file not found: {}", filename),
            Self::PermissionDenied => format!("Permission denied: {}", filename),
            Self::IsDirectory => format!("Not a configuration file (directory): {}", filename),
            Self::BinaryFile => format!("Cannot read binary file: {}", filename),
            Self::TooLarge { size_mb } => {
                format!(
                    "{} is too large ({:.1} MB, max {} MB)",
                    filename,
                    size_mb,
                    MAX_FILE_SIZE / (1024 * 1024)
                )
            }
            Self::IoError(msg) => format!("Error reading {}: {}", filename, msg),
        }
    }
}

impl std::fmt::Display for FileOpenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "file not found"),
            Self::PermissionDenied => write!(f, "permission denied"),
            Self::IsDirectory => write!(f, "is a directory"),
            Self::BinaryFile => write!(f, "binary file"),
            Self::TooLarge { size_mb } => write!(f, "file too large ({:.1} MB)", size_mb),
            Self::IoError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FileOpenError {}

fn io_error(e: std::io::Error) -> FileOpenError {
    match e.kind() {
        std::io::ErrorKind::NotFound => FileOpenError::NotFound,
        std::io::ErrorKind::PermissionDenied => FileOpenError::PermissionDenied,
        _ => FileOpenError::IoError(e.to_string()),
    }
}

/// Validate a file before attempting to read it
///
/// Checks:
/// - File exists
/// - Is not a directory
/// - Does not exceed size limit
///
/// Does NOT check for binary content (use `is_likely_binary` separately after this passes)
pub fn validate_config_file(path: &Path) -> Result<(), FileOpenError> {
    let metadata = fs::metadata(path).map_err(io_error)?;

    if metadata.is_dir() {
        return Err(FileOpenError::IsDirectory);
    }

    if metadata.len() > MAX_FILE_SIZE {
        return Err(FileOpenError::TooLarge {
            size_mb: metadata.len() as f64 / (1024.0 * 1024.0),
        });
    }

    Ok(())
}

/// Check if a file is likely binary by scanning for null bytes
///
/// Reads the first 8KB of the file and checks for null bytes,
/// which are common in binary files but rare in text files.
///
/// Returns `false` on any read error (let the actual read fail with a better error).
pub fn is_likely_binary(path: &Path) -> bool {
    let Ok(mut file) = File::open(path) else {
        return false;
    };

    let mut buffer = [0u8; 8192];
    let Ok(bytes_read) = file.read(&mut buffer) else {
        return false;
    };

    buffer[..bytes_read].contains(&0)
}

/// Validate and read a configuration file into memory
pub fn read_config_file(path: &Path) -> Result<String, FileOpenError> {
    validate_config_file(path)?;

    if is_likely_binary(path) {
        return Err(FileOpenError::BinaryFile);
    }

    let text = fs::read_to_string(path).map_err(io_error)?;
    tracing::debug!("Read {} bytes from {}", text.len(), path.display());
    Ok(text)
}
