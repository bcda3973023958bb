//! File system helpers for the front end: output document, detail log, input path checks.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Error as IoError, Write};
use std::path::Path;

use super::error::AppError;
use super::verbose_eprintln;

/// Converts a user-supplied input path to `&str`, checking that it names a file.
///
/// # Errors
/// Returns `AppError::InvalidPath` if the path is missing, not a file, or not UTF-8.
pub fn validate_input_file(file_path: &Path, quiet_mode: bool) -> Result<&str, AppError> {
    if !file_path.is_file() {
        let error_msg = format!("Not a readable file: {}", file_path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::InvalidPath(error_msg));
    }
    file_path.to_str().ok_or_else(|| {
        let error_msg = format!("Path is not valid UTF-8: {}", file_path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        AppError::InvalidPath(error_msg)
    })
}

/// Writes string content to a file, creating or truncating it, and flushes
/// before returning.
pub fn write_content_to_file(file_path: &Path, content: &str) -> Result<(), IoError> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(file_path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(content.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Opens the exploration detail log, truncated for each run.
/// Flushed by the caller or on drop.
pub fn init_detail_log_writer(file_path: &Path) -> Result<BufWriter<File>, IoError> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(file_path)?;
    Ok(BufWriter::new(file))
}
