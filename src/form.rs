use std::collections::BTreeMap;

use log::debug;

use crate::device_config::{CameraTuning, Configuration, DiscordSettings, FeatureFlags};
use crate::errors::AppError;

pub const FLAG_FIELDS: [&str; 6] = [
    "motion_detection",
    "speech",
    "webserver",
    "discord_notifications",
    "discord_bot",
    "debug",
];

/// The seven integer fields that must all parse before a save goes out.
pub const CAMERA_FIELDS: [&str; 7] = [
    "main",
    "v_cam",
    "body_inc",
    "face_inc",
    "motion_inc",
    "undetected_time",
    "fallback_fps",
];

pub const DISCORD_FIELDS: [&str; 2] = ["webhook_url", "bot_token"];

/// Field-keyed edit buffer between the device configuration and the user.
///
/// Camera and discord fields are held as raw text so that a blanked or
/// mistyped value stays representable until `collect()` validates it.
#[derive(Debug, Default, Clone)]
pub struct FormSession {
    flags: BTreeMap<String, bool>,
    text: BTreeMap<String, String>,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill every field from a configuration, replacing any pending edits.
    pub fn populate(&mut self, config: &Configuration) {
        let s = &config.settings;
        self.flags.insert("motion_detection".into(), s.motion_detection);
        self.flags.insert("speech".into(), s.speech);
        self.flags.insert("webserver".into(), s.webserver);
        self.flags.insert("discord_notifications".into(), s.discord_notifications);
        self.flags.insert("discord_bot".into(), s.discord_bot);
        self.flags.insert("debug".into(), s.debug);

        let c = &config.camera;
        self.text.insert("main".into(), c.main.to_string());
        self.text.insert("v_cam".into(), c.v_cam.to_string());
        self.text.insert("body_inc".into(), c.body_inc.to_string());
        self.text.insert("face_inc".into(), c.face_inc.to_string());
        self.text.insert("motion_inc".into(), c.motion_inc.to_string());
        self.text.insert("undetected_time".into(), c.undetected_time.to_string());
        self.text.insert("fallback_fps".into(), c.fallback_fps.to_string());

        self.text.insert("webhook_url".into(), config.discord.webhook_url.clone());
        self.text.insert("bot_token".into(), config.discord.bot_token.clone());
    }

    /// Apply a single edit by field name. Unknown names and unparsable
    /// flag values are rejected here; camera text is only checked at
    /// `collect()` time so a blank value can sit in the form.
    pub fn set(&mut self, field: &str, value: &str) -> Result<(), AppError> {
        if FLAG_FIELDS.contains(&field) {
            let flag = parse_flag(value).ok_or_else(|| {
                AppError::Validation(format!(
                    "Field '{}' expects true/false, got '{}'.",
                    field, value
                ))
            })?;
            self.flags.insert(field.to_string(), flag);
        } else if CAMERA_FIELDS.contains(&field) || DISCORD_FIELDS.contains(&field) {
            self.text.insert(field.to_string(), value.to_string());
        } else {
            return Err(AppError::Validation(format!(
                "Unknown configuration field '{}'.",
                field
            )));
        }
        debug!("Form field '{}' set to '{}'.", field, value);
        Ok(())
    }

    pub fn flag(&self, field: &str) -> bool {
        self.flags.get(field).copied().unwrap_or(false)
    }

    pub fn raw(&self, field: &str) -> Option<&str> {
        self.text.get(field).map(String::as_str)
    }

    /// Read every field back into a configuration, coercing camera fields
    /// to integers. Fails without side effects if any of the seven camera
    /// fields is missing, blank, or non-numeric.
    pub fn collect(&self) -> Result<Configuration, AppError> {
        let mut parsed: BTreeMap<&str, i64> = BTreeMap::new();
        let mut invalid: Vec<&str> = Vec::new();

        for name in CAMERA_FIELDS {
            match self.text.get(name).map(|v| v.trim()) {
                Some(v) if !v.is_empty() => match v.parse::<i64>() {
                    Ok(n) => {
                        parsed.insert(name, n);
                    }
                    Err(_) => invalid.push(name),
                },
                _ => invalid.push(name),
            }
        }

        if !invalid.is_empty() {
            return Err(AppError::Validation(format!(
                "Camera fields missing or non-numeric: {}. Please fill in all camera settings.",
                invalid.join(", ")
            )));
        }

        Ok(Configuration {
            settings: FeatureFlags {
                motion_detection: self.flag("motion_detection"),
                speech: self.flag("speech"),
                webserver: self.flag("webserver"),
                discord_notifications: self.flag("discord_notifications"),
                discord_bot: self.flag("discord_bot"),
                debug: self.flag("debug"),
            },
            camera: CameraTuning {
                main: parsed["main"],
                v_cam: parsed["v_cam"],
                body_inc: parsed["body_inc"],
                face_inc: parsed["face_inc"],
                motion_inc: parsed["motion_inc"],
                undetected_time: parsed["undetected_time"],
                fallback_fps: parsed["fallback_fps"],
            },
            discord: DiscordSettings {
                webhook_url: self.text.get("webhook_url").cloned().unwrap_or_default(),
                bot_token: self.text.get("bot_token").cloned().unwrap_or_default(),
            },
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Some(true),
        "false" | "off" | "no" | "0" => Some(false),
        _ => None,
    }
}
