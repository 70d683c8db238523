use serde::{Deserialize, Serialize};

/// The full settings record exchanged with the device backend.
///
/// This mirrors the JSON the device keeps in its own config file: three
/// sections, always present, always sent back whole on save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    pub settings: FeatureFlags,
    pub camera: CameraTuning,
    pub discord: DiscordSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureFlags {
    pub motion_detection: bool,
    pub speech: bool,
    pub webserver: bool,
    pub discord_notifications: bool,
    pub discord_bot: bool,
    pub debug: bool,
}

/// Integer tuning knobs for the capture loop. All seven must be present
/// and numeric before a save is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraTuning {
    pub main: i64,
    pub v_cam: i64,
    pub body_inc: i64,
    pub face_inc: i64,
    pub motion_inc: i64,
    pub undetected_time: i64,
    pub fallback_fps: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscordSettings {
    pub webhook_url: String,
    pub bot_token: String,
}
