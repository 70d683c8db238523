use clap::ArgMatches;
use log::info;
use std::path::PathBuf;

use crate::common::file_utils;
use crate::core::sync_client::ConfigSyncClient;
use crate::errors::AppError;

use super::render_configuration;

pub async fn handle_show_cli(
    sync_client: &mut ConfigSyncClient,
    args: &ArgMatches,
) -> Result<(), AppError> {
    info!("Fetching current device configuration...");
    let config = sync_client.load().await?;

    println!("{}", render_configuration(&config));

    if let Some(output_path) = args.get_one::<String>("output") {
        let path = PathBuf::from(output_path);
        file_utils::write_json_pretty(&path, &config)?;
        info!("Configuration snapshot written to '{}'.", path.display());
    }

    Ok(())
}
