use clap::ArgMatches;
use log::info;

use crate::core::sync_client::ConfigSyncClient;
use crate::errors::AppError;
use crate::form::FormSession;

use super::{parse_field_assignments, render_configuration};

/// Load, optionally apply edits, then discard them by re-rendering from
/// the baseline. Nothing is ever sent to the device; this exists for
/// scripting and for demonstrating that unsaved edits are recoverable.
pub async fn handle_reset_cli(
    sync_client: &mut ConfigSyncClient,
    args: &ArgMatches,
) -> Result<(), AppError> {
    let raw_assignments: Vec<&String> = args
        .get_many::<String>("set")
        .map(|v| v.collect())
        .unwrap_or_default();
    let assignments = parse_field_assignments(raw_assignments)?;

    info!("Fetching current device configuration...");
    let current = sync_client.load().await?;

    let mut session = FormSession::new();
    session.populate(&current);
    for (field, value) in &assignments {
        session.set(field, value)?;
    }
    if !assignments.is_empty() {
        info!("Applied {} edit(s) to the form.", assignments.len());
    }

    let restored = sync_client.reset()?;
    session.populate(&restored);
    info!("Unsaved edits discarded; form restored to last loaded values.");
    println!("{}", render_configuration(&restored));

    Ok(())
}
