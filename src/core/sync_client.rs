use std::time::Duration;

use log::{debug, info};
use reqwest::Client;

use crate::api::{GetConfigResponse, SaveConfigResponse, GET_CONFIG_PATH, SAVE_CONFIG_PATH};
use crate::app_config::ApplicationConfig;
use crate::device_config::Configuration;
use crate::errors::AppError;
use crate::form::FormSession;

/// Outcome of a successful save: the configuration the backend accepted
/// plus its optional acknowledgement message.
#[derive(Debug)]
pub struct SaveOutcome {
    pub saved: Configuration,
    pub message: Option<String>,
}

/// Client for the device configuration API.
///
/// Holds the last known-good configuration ("baseline") captured after
/// each successful load or save. The baseline is only ever replaced
/// wholesale, never partially mutated; it exists to support Reset.
/// Operations take `&mut self`, so calls are serialized by construction.
pub struct ConfigSyncClient {
    http: Client,
    base_url: String,
    baseline: Option<Configuration>,
}

impl ConfigSyncClient {
    pub fn new(settings: &ApplicationConfig) -> Result<Self, AppError> {
        Self::with_base_url(&settings.device_url, settings.request_timeout_secs())
    }

    pub fn with_base_url(base_url: &str, timeout_secs: u64) -> Result<Self, AppError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AppError::Network(format!("Failed to build HTTP client: {}", e)))?;
        Ok(ConfigSyncClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            baseline: None,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn baseline(&self) -> Option<&Configuration> {
        self.baseline.as_ref()
    }

    /// Fetch the current configuration and capture it as the new baseline.
    /// On any failure the baseline is left as it was.
    pub async fn load(&mut self) -> Result<Configuration, AppError> {
        let url = self.endpoint(GET_CONFIG_PATH);
        debug!("Loading configuration from {}", url);
        let response = self.http.get(&url).send().await?;
        let envelope: GetConfigResponse = response.json().await?;
        let config = envelope.into_result()?;
        self.baseline = Some(config.clone());
        info!("Configuration loaded from device.");
        Ok(config)
    }

    /// Return a fresh copy of the baseline for re-rendering the form,
    /// discarding unsaved edits. Requires a prior successful load or save.
    pub fn reset(&self) -> Result<Configuration, AppError> {
        self.baseline.clone().ok_or_else(|| {
            AppError::Operation(
                "No configuration loaded yet; nothing to reset to.".to_string(),
            )
        })
    }

    /// Validate the form and submit the full configuration. Validation
    /// failures abort locally; no request is made. On backend or network
    /// failure the baseline keeps the pre-save values.
    pub async fn save(&mut self, session: &FormSession) -> Result<SaveOutcome, AppError> {
        let config = session.collect()?;
        let url = self.endpoint(SAVE_CONFIG_PATH);
        debug!("Submitting configuration to {}", url);
        let response = self.http.post(&url).json(&config).send().await?;
        let envelope: SaveConfigResponse = response.json().await?;
        let message = envelope.into_result()?;
        self.baseline = Some(config.clone());
        info!("Configuration saved; device restart required to apply changes.");
        Ok(SaveOutcome {
            saved: config,
            message,
        })
    }
}
