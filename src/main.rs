use camcfg::app_config::ApplicationConfig;
use camcfg::cli;
use camcfg::common::logging_setup;
use camcfg::config_loader::{self, ClientConfig};
use camcfg::core::sync_client::ConfigSyncClient;
use camcfg::errors::AppError;
use camcfg::operations;

use log::{error, info};
use std::path::Path;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Parse CLI arguments early for potential use in logging or config path
    let matches = cli::build_cli().get_matches();

    let config_path = matches
        .get_one::<String>("config")
        .map(|s| s.as_str())
        .unwrap_or("config/camcfg.yaml");

    // Attempt to load the client configuration. A missing file is fine
    // when the device URL comes from the CLI instead.
    let mut client_config = match config_loader::load_config(config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            if matches.get_one::<String>("device").is_some() && !Path::new(config_path).exists() {
                ClientConfig {
                    app_settings: ApplicationConfig::default(),
                }
            } else {
                logging_setup::initialize_logging(None, &matches);
                error!(
                    "Failed to load client configuration from '{}': {}. Exiting.",
                    config_path, e
                );
                return Err(e);
            }
        }
    };

    if let Some(url) = matches.get_one::<String>("device") {
        client_config.app_settings.device_url = url.clone();
    }

    logging_setup::initialize_logging(Some(&client_config), &matches);
    config_loader::validate_app_settings(&client_config.app_settings)?;
    info!(
        "Using device at {} (timeout {}s).",
        client_config.app_settings.device_url,
        client_config.app_settings.request_timeout_secs()
    );

    let mut sync_client = ConfigSyncClient::new(&client_config.app_settings)?;

    // Dispatch based on subcommand
    if let Some((name, sub_args)) = matches.subcommand() {
        let op_result = match name {
            "show" => operations::show_op::handle_show_cli(&mut sync_client, sub_args).await,
            "set" => {
                operations::set_op::handle_set_cli(
                    &client_config.app_settings,
                    &mut sync_client,
                    sub_args,
                )
                .await
            }
            "reset" => operations::reset_op::handle_reset_cli(&mut sync_client, sub_args).await,
            "check" => operations::check_op::handle_check_cli(&mut sync_client, sub_args).await,
            _ => Err(AppError::Operation(format!(
                "Subcommand '{}' not implemented.",
                name
            ))),
        };

        if let Err(e) = op_result {
            error!("Operation '{}' failed: {}", name, e);
            return Err(e);
        }
    } else {
        info!("No subcommand provided. Try 'camcfg show' or 'camcfg --help'.");
    }

    Ok(())
}
