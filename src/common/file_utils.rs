use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Serialize;

use crate::common::timestamp_utils;
use crate::errors::AppError;

pub fn generate_timestamped_filename(
    base_name: &str,        // e.g., "config_backup"
    timestamp_format: &str, // from config, e.g., "%Y%m%d_%H%M%S"
    extension: &str,        // e.g., "json"
) -> String {
    let timestamp = timestamp_utils::current_local_timestamp_str(timestamp_format);
    format!("{}_{}.{}", base_name, timestamp, extension)
}

pub fn ensure_output_directory(dir_path_str: &str) -> Result<PathBuf, AppError> {
    let dir_path = PathBuf::from(dir_path_str);
    if !dir_path.exists() {
        debug!(
            "Output directory '{}' does not exist, attempting to create it.",
            dir_path.display()
        );
        fs::create_dir_all(&dir_path).map_err(|e| {
            AppError::Io(format!(
                "Failed to create output directory '{}': {}",
                dir_path.display(),
                e
            ))
        })?;
    } else if !dir_path.is_dir() {
        return Err(AppError::Io(format!(
            "Output path '{}' exists but is not a directory.",
            dir_path.display()
        )));
    }
    Ok(dir_path)
}

pub fn write_json_pretty<T: Serialize>(path: &Path, value: &T) -> Result<(), AppError> {
    let body = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::Io(format!("Failed to serialize JSON: {}", e)))?;
    fs::write(path, body).map_err(|e| {
        AppError::Io(format!("Failed to write '{}': {}", path.display(), e))
    })?;
    debug!("Wrote JSON snapshot to '{}'.", path.display());
    Ok(())
}
