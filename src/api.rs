use serde::Deserialize;

use crate::device_config::Configuration;
use crate::errors::AppError;

pub const GET_CONFIG_PATH: &str = "/api/get_config";
pub const SAVE_CONFIG_PATH: &str = "/api/save_config";

/// Envelope for `GET /api/get_config`.
#[derive(Debug, Deserialize)]
pub struct GetConfigResponse {
    pub success: bool,
    pub config: Option<Configuration>,
    pub error: Option<String>,
}

/// Envelope for `POST /api/save_config`.
#[derive(Debug, Deserialize)]
pub struct SaveConfigResponse {
    pub success: bool,
    pub error: Option<String>,
    pub message: Option<String>,
}

impl GetConfigResponse {
    pub fn into_result(self) -> Result<Configuration, AppError> {
        if self.success {
            self.config.ok_or_else(|| {
                AppError::Api("Backend reported success but sent no configuration.".to_string())
            })
        } else {
            Err(AppError::Api(
                self.error
                    .unwrap_or_else(|| "Backend reported failure without detail.".to_string()),
            ))
        }
    }
}

impl SaveConfigResponse {
    pub fn into_result(self) -> Result<Option<String>, AppError> {
        if self.success {
            Ok(self.message)
        } else {
            Err(AppError::Api(
                self.error
                    .unwrap_or_else(|| "Backend reported failure without detail.".to_string()),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_response_failure_carries_backend_error() {
        let resp: GetConfigResponse =
            serde_json::from_str(r#"{"success": false, "error": "config.json unreadable"}"#)
                .unwrap();
        match resp.into_result() {
            Err(AppError::Api(msg)) => assert_eq!(msg, "config.json unreadable"),
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn get_response_success_without_config_is_an_error() {
        let resp: GetConfigResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(matches!(resp.into_result(), Err(AppError::Api(_))));
    }

    #[test]
    fn save_response_success_passes_message_through() {
        let resp: SaveConfigResponse = serde_json::from_str(
            r#"{"success": true, "message": "Configuration saved successfully"}"#,
        )
        .unwrap();
        assert_eq!(
            resp.into_result().unwrap().as_deref(),
            Some("Configuration saved successfully")
        );
    }
}
