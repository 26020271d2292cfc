use anyhow::{Context, Result};
use clap::Parser;
use fixture_cli::{
    create_users, execute, init_telemetry,
    telemetry::{log_config_validation, log_startup_info, report_error},
    Cli, Config,
};
use tracing::info;

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(config_file) => {
            info!("Loading configuration from file: {}", config_file);
            Config::from_file(config_file)?
        }
        None => {
            info!("Loading configuration from environment");
            Config::from_env()?
        }
    };

    // Apply CLI overrides
    if let Some(ref base_url) = cli.base_url {
        config.endpoint.base_url = base_url.clone();
    }

    if let Some(ref log_level) = cli.log_level {
        config.logging.level = log_level.clone();
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenv::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = load_config(&cli).context("Failed to load configuration")?;

    // Initialize telemetry/logging system
    init_telemetry(&config.logging).context("Failed to initialize telemetry")?;

    log_config_validation(&config);
    config.validate().context("Invalid configuration")?;

    log_startup_info(&config);

    let users = create_users(&config)?;
    match execute(cli.command, &users).await {
        Ok(output) => {
            print!("{output}");
            Ok(())
        }
        Err(e) => {
            report_error(&e, "command");
            Err(e)
        }
    }
}
