use serde::Deserialize;
use std::fs;

use crate::app_config::ApplicationConfig;
use crate::errors::AppError;
use log::debug;

#[derive(Debug, Deserialize)]
pub struct ClientConfig {
    #[serde(rename = "application")]
    pub app_settings: ApplicationConfig,
}

pub fn load_config(path: &str) -> Result<ClientConfig, AppError> {
    debug!("Attempting to load client config from: {}", path);
    let config_str = fs::read_to_string(path).map_err(|e| {
        AppError::Config(format!("Failed to read configuration file '{}': {}", path, e))
    })?;

    let config: ClientConfig = serde_yaml::from_str(&config_str)
        .map_err(|e| AppError::Config(format!("Failed to parse YAML configuration: {}", e)))?;

    validate_app_settings(&config.app_settings)?;

    Ok(config)
}

pub fn validate_app_settings(settings: &ApplicationConfig) -> Result<(), AppError> {
    if settings.device_url.is_empty() {
        return Err(AppError::Config("device_url cannot be empty.".to_string()));
    }
    let url = reqwest::Url::parse(&settings.device_url).map_err(|e| {
        AppError::Config(format!(
            "Invalid device_url '{}': {}",
            settings.device_url, e
        ))
    })?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(AppError::Config(format!(
            "device_url '{}' must use http or https.",
            settings.device_url
        )));
    }
    if settings.request_timeout_secs() == 0 {
        return Err(AppError::Config(
            "request_timeout_secs must be greater than zero.".to_string(),
        ));
    }
    if settings.backup_directory().is_empty() {
        return Err(AppError::Config(
            "backup_directory cannot be empty.".to_string(),
        ));
    }
    Ok(())
}
