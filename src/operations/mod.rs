pub mod check_op;
pub mod reset_op;
pub mod set_op;
pub mod show_op;

use crate::device_config::Configuration;
use crate::errors::AppError;

// Helper to parse repeated FIELD=VALUE assignments from CLI
pub fn parse_field_assignments(values: Vec<&String>) -> Result<Vec<(String, String)>, AppError> {
    let mut assignments = Vec::new();
    for raw in values {
        match raw.split_once('=') {
            Some((field, value)) if !field.trim().is_empty() => {
                assignments.push((field.trim().to_string(), value.to_string()));
            }
            _ => {
                return Err(AppError::Validation(format!(
                    "Invalid assignment '{}'. Expected FIELD=VALUE.",
                    raw
                )));
            }
        }
    }
    Ok(assignments)
}

/// Render a configuration grouped by section, matching the backend's
/// three-part layout.
pub fn render_configuration(config: &Configuration) -> String {
    let s = &config.settings;
    let c = &config.camera;
    let d = &config.discord;
    let mask = |v: &str| if v.is_empty() { "(not set)" } else { "(set)" };
    format!(
        "settings:\n\
         \x20 motion_detection:      {}\n\
         \x20 speech:                {}\n\
         \x20 webserver:             {}\n\
         \x20 discord_notifications: {}\n\
         \x20 discord_bot:           {}\n\
         \x20 debug:                 {}\n\
         camera:\n\
         \x20 main:                  {}\n\
         \x20 v_cam:                 {}\n\
         \x20 body_inc:              {}\n\
         \x20 face_inc:              {}\n\
         \x20 motion_inc:            {}\n\
         \x20 undetected_time:       {}\n\
         \x20 fallback_fps:          {}\n\
         discord:\n\
         \x20 webhook_url:           {}\n\
         \x20 bot_token:             {}",
        s.motion_detection,
        s.speech,
        s.webserver,
        s.discord_notifications,
        s.discord_bot,
        s.debug,
        c.main,
        c.v_cam,
        c.body_inc,
        c.face_inc,
        c.motion_inc,
        c.undetected_time,
        c.fallback_fps,
        mask(&d.webhook_url),
        mask(&d.bot_token),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_assignments() {
        let a = "body_inc=7".to_string();
        let b = "speech=true".to_string();
        let parsed = parse_field_assignments(vec![&a, &b]).unwrap();
        assert_eq!(
            parsed,
            vec![
                ("body_inc".to_string(), "7".to_string()),
                ("speech".to_string(), "true".to_string())
            ]
        );
    }

    #[test]
    fn rejects_assignment_without_equals() {
        let a = "body_inc".to_string();
        assert!(matches!(
            parse_field_assignments(vec![&a]),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn value_may_contain_equals_signs() {
        let a = "webhook_url=https://discord.com/api/webhooks/1?wait=true".to_string();
        let parsed = parse_field_assignments(vec![&a]).unwrap();
        assert_eq!(parsed[0].1, "https://discord.com/api/webhooks/1?wait=true");
    }
}
