use camcfg::app_config::ApplicationConfig;
use camcfg::cli;
use camcfg::core::sync_client::ConfigSyncClient;
use camcfg::device_config::Configuration;
use camcfg::errors::AppError;
use camcfg::operations::{check_op, set_op};

use serde_json::json;
use std::fs;
use std::path::PathBuf;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sample_config_json() -> serde_json::Value {
    json!({
        "settings": {
            "motion_detection": true,
            "speech": false,
            "webserver": true,
            "discord_notifications": false,
            "discord_bot": false,
            "debug": true
        },
        "camera": {
            "main": 0,
            "v_cam": 1,
            "body_inc": 5,
            "face_inc": 5,
            "motion_inc": 5,
            "undetected_time": 30,
            "fallback_fps": 10
        },
        "discord": {
            "webhook_url": "",
            "bot_token": ""
        }
    })
}

async fn mount_get_config(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/api/get_config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn sub_matches(args: &[&str]) -> clap::ArgMatches {
    let matches = cli::build_cli().get_matches_from(args);
    let (_, sub) = matches.subcommand().expect("subcommand expected");
    sub.clone()
}

fn app_settings_with_backup_dir(server: &MockServer, backup_dir: &PathBuf) -> ApplicationConfig {
    ApplicationConfig {
        device_url: server.uri(),
        request_timeout_secs: Some(5),
        backup_directory: Some(backup_dir.to_string_lossy().to_string()),
        filename_timestamp_format: None,
        log_level: None,
    }
}

fn scratch_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("camcfg_{}_{}", name, std::process::id()))
}

#[tokio::test]
async fn set_with_blank_camera_field_writes_no_backup() {
    let server = MockServer::start().await;
    mount_get_config(
        &server,
        json!({"success": true, "config": sample_config_json()}),
    )
    .await;
    Mock::given(method("POST"))
        .and(path("/api/save_config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(0)
        .mount(&server)
        .await;

    let backup_dir = scratch_dir("no_backup_on_invalid");
    let _ = fs::remove_dir_all(&backup_dir);
    let app_settings = app_settings_with_backup_dir(&server, &backup_dir);
    let mut client = ConfigSyncClient::new(&app_settings).unwrap();

    let args = sub_matches(&["camcfg", "set", "--set", "body_inc="]);
    let result = set_op::handle_set_cli(&app_settings, &mut client, &args).await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    // Validation aborted before the backup step, so the directory was
    // never even created.
    assert!(!backup_dir.exists());
}

#[tokio::test]
async fn successful_set_backs_up_the_presave_configuration() {
    let server = MockServer::start().await;
    mount_get_config(
        &server,
        json!({"success": true, "config": sample_config_json()}),
    )
    .await;
    Mock::given(method("POST"))
        .and(path("/api/save_config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let backup_dir = scratch_dir("backup_on_save");
    let _ = fs::remove_dir_all(&backup_dir);
    let app_settings = app_settings_with_backup_dir(&server, &backup_dir);
    let mut client = ConfigSyncClient::new(&app_settings).unwrap();

    let args = sub_matches(&["camcfg", "set", "--set", "undetected_time=60"]);
    set_op::handle_set_cli(&app_settings, &mut client, &args)
        .await
        .expect("set should succeed");

    let entries: Vec<_> = fs::read_dir(&backup_dir)
        .expect("backup directory should exist")
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(entries.len(), 1);

    // The backup holds the pre-save values, not the edited ones.
    let body = fs::read_to_string(entries[0].path()).unwrap();
    let backed_up: Configuration = serde_json::from_str(&body).unwrap();
    let pre_save: Configuration = serde_json::from_value(sample_config_json()).unwrap();
    assert_eq!(backed_up, pre_save);

    let _ = fs::remove_dir_all(&backup_dir);
}

#[tokio::test]
async fn check_passes_with_zero_fallback_fps() {
    // Any integer is a valid saved value; unusual tuning must not fail
    // the check run.
    let mut config = sample_config_json();
    config["camera"]["fallback_fps"] = json!(0);
    config["camera"]["undetected_time"] = json!(-5);

    let server = MockServer::start().await;
    mount_get_config(&server, json!({"success": true, "config": config})).await;

    let mut client = ConfigSyncClient::with_base_url(&server.uri(), 5).unwrap();
    let args = sub_matches(&["camcfg", "check"]);
    check_op::handle_check_cli(&mut client, &args)
        .await
        .expect("check should pass");
}
