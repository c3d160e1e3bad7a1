//! Utility modules

pub mod file_validation;

pub use file_validation::{
    is_likely_binary, read_config_file, validate_config_file, FileOpenError, MAX_FILE_SIZE,
};
