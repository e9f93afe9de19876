use uptimectl::cli::{APP_DIR_NAME, Cli};
use uptimectl::commands::execute;
use uptimectl::error::UptimectlError;
use uptimectl::logger::{DEFAULT_LEVEL, VERBOSE_LEVEL, initialize as LoggerInitialize};

use common::RedactedApiKey;
use uptime_client::{ClientConfig, UptimeClient};

use std::fs::create_dir_all;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    // .env is read before parsing so it can supply UPTIME_API_KEY
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();

    match run(cli, dotenv.ok()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, dotenv_path: Option<PathBuf>) -> Result<(), UptimectlError> {
    if let Some(log_dir) = &cli.log_dir {
        create_dir_all(log_dir).map_err(|e| {
            UptimectlError::setup(format!("Failed to create log directory: {e}"))
        })?;
    }
    let level = if cli.verbose { VERBOSE_LEVEL } else { DEFAULT_LEVEL };
    LoggerInitialize(level, cli.log_dir.as_deref())?;

    if let Some(path) = dotenv_path {
        info!("Loaded .env from: {:?}", path);
    }

    let api_key = RedactedApiKey::new(cli.api_key);
    if api_key.is_blank() {
        return Err(UptimectlError::setup("API key is empty"));
    }

    let config = match cli.config_dir.or_else(default_config_dir) {
        Some(config_dir) => ClientConfig::load(&config_dir)?,
        None => ClientConfig::default(),
    };
    let client = UptimeClient::with_config(api_key, &config)?;
    info!("Using API at {}", client.base_url());

    let payload = execute(&client, &cli.command).await?;
    println!("{}", serde_json::to_string_pretty(&payload)?);

    Ok(())
}

fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME))
}
