use clap::ArgMatches;
use log::{info, warn};

use crate::app_config::ApplicationConfig;
use crate::common::file_utils;
use crate::core::sync_client::ConfigSyncClient;
use crate::errors::AppError;
use crate::form::FormSession;

use super::{parse_field_assignments, render_configuration};

pub async fn handle_set_cli(
    app_settings: &ApplicationConfig,
    sync_client: &mut ConfigSyncClient,
    args: &ArgMatches,
) -> Result<(), AppError> {
    let raw_assignments: Vec<&String> = args
        .get_many::<String>("set")
        .map(|v| v.collect())
        .unwrap_or_default();
    let assignments = parse_field_assignments(raw_assignments)?;
    if assignments.is_empty() {
        return Err(AppError::Validation(
            "No field assignments given. Use --set FIELD=VALUE.".to_string(),
        ));
    }

    info!("Fetching current device configuration...");
    let current = sync_client.load().await?;

    let mut session = FormSession::new();
    session.populate(&current);
    for (field, value) in &assignments {
        session.set(field, value)?;
    }

    // Validation runs before any filesystem or network side effect; a
    // bad field must not leave a backup file behind.
    let pending = session.collect()?;

    if args.get_flag("dry-run") {
        println!("{}", render_configuration(&pending));
        info!("Dry run: configuration validated, nothing saved.");
        return Ok(());
    }

    if args.get_flag("no-backup") {
        warn!("Skipping local backup of the current configuration (--no-backup).");
    } else {
        let backup_dir = file_utils::ensure_output_directory(app_settings.backup_directory())?;
        let filename = file_utils::generate_timestamped_filename(
            "config_backup",
            app_settings.filename_timestamp_format(),
            "json",
        );
        let backup_path = backup_dir.join(filename);
        file_utils::write_json_pretty(&backup_path, &current)?;
        info!("Current configuration backed up to '{}'.", backup_path.display());
    }

    let outcome = sync_client.save(&session).await?;
    if let Some(message) = outcome.message {
        info!("Backend: {}", message);
    }
    info!(
        "Saved {} field edit(s). Restart the device for the changes to take effect.",
        assignments.len()
    );
    println!("{}", render_configuration(&outcome.saved));

    Ok(())
}
