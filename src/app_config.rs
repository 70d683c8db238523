use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ApplicationConfig {
    pub device_url: String, // e.g., "http://192.168.1.40:8080"
    pub request_timeout_secs: Option<u64>,
    pub backup_directory: Option<String>,
    pub filename_timestamp_format: Option<String>, // strftime format string
    pub log_level: Option<String>, // Optional so CLI or env var can be primary
}

impl ApplicationConfig {
    pub fn request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs.unwrap_or(10)
    }

    pub fn backup_directory(&self) -> &str {
        self.backup_directory.as_deref().unwrap_or("./backups")
    }

    pub fn filename_timestamp_format(&self) -> &str {
        self.filename_timestamp_format
            .as_deref()
            .unwrap_or("%Yy%mm%dd%Hh%Mm%Ss")
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        ApplicationConfig {
            device_url: "http://127.0.0.1:8080".to_string(),
            request_timeout_secs: Some(10),
            backup_directory: Some("./backups".to_string()),
            filename_timestamp_format: Some("%Yy%mm%dd%Hh%Mm%Ss".to_string()),
            log_level: Some("info".to_string()),
        }
    }
}
