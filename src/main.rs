//! bearer-gate - JWT bearer-token login service

#![allow(missing_docs)]

use bearer_gate::config::Config;
use bearer_gate::server;
use bearer_gate::utils::logging::init_tracing;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "bearer-gate", version, about = "JWT bearer-token login service")]
struct Cli {
    /// YAML configuration file; environment variables are used when absent
    #[arg(short, long, env = "BEARER_GATE_CONFIG")]
    config: Option<PathBuf>,
}

async fn load_config(cli: &Cli) -> bearer_gate::Result<Config> {
    match &cli.config {
        Some(path) => Config::from_file(path).await,
        None => Config::from_env(),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = match load_config(&cli).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_tracing(&config.logging) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    info!("Configuration: {:?}", config);

    match server::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Print error using Display (not Debug) to preserve newlines
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
