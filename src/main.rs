//! Transcript gateway server
//!
//! Loads configuration, initialises tracing and serves the HTTP API. With
//! `--transcript` it extracts one file instead and prints the result.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use transcript_gateway::server::routes::answer::AnswerResponse;
use transcript_gateway::server::run_server;
use transcript_gateway::services::extract_from_file;
use transcript_gateway::utils::logging::init_tracing;
use transcript_gateway::{Config, ExtractionService, FileReader, Gateway, Result};

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "gateway", version, about = "Transcript extraction gateway")]
struct Args {
    /// YAML configuration file; environment only when omitted
    #[arg(short, long, env = "GATEWAY_CONFIG")]
    config: Option<PathBuf>,

    /// Override the bind host
    #[arg(long, env = "HOST")]
    host: Option<String>,

    /// Override the bind port
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Extract this transcript file and exit instead of serving
    #[arg(short, long)]
    transcript: Option<PathBuf>,
}

async fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path).await?,
        None => Config::from_env()?,
    };

    if let Some(host) = &args.host {
        config.gateway.server.host = host.clone();
    }
    if let Some(port) = args.port {
        config.gateway.server.port = port;
    }

    config.validate()?;
    Ok(config)
}

async fn run_once(config: &Config, path: &PathBuf) -> Result<()> {
    let gateway = Arc::new(Gateway::from_config(config)?);
    let extractor = ExtractionService::new(gateway);

    let items = extract_from_file(&extractor, &FileReader::new(), path).await?;

    let output = serde_json::to_string_pretty(&AnswerResponse::labelled(items))?;
    println!("{}", output);
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // .env is optional
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    let config = match load_config(&args).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_tracing(config.logging()) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    let outcome = match &args.transcript {
        Some(path) => run_once(&config, path).await,
        None => run_server(config).await,
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Display keeps multi-line messages readable
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
