//! Privacy Insights - terminal client for a website privacy analysis service
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use clap::Parser;
use pinsights_app::config::{self, Settings};
use pinsights_app::Engine;
use pinsights_client::{resolve_endpoint, ClientOptions, HttpAnalysisClient};
use pinsights_core::{logging, prelude::*};
use privacy_insights::headless::HeadlessEvent;

/// Privacy Insights - analyze the privacy practices of a website
#[derive(Parser, Debug)]
#[command(name = "pinsights")]
#[command(about = "Analyze the privacy practices of a website", long_about = None)]
struct Args {
    /// Website URL to analyze right away
    #[arg(value_name = "URL")]
    url: Option<String>,

    /// Run in headless mode (NDJSON output, no TUI)
    #[arg(long)]
    headless: bool,

    /// Analysis endpoint (overrides PINSIGHTS_API_ENDPOINT and the config file)
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Request timeout in seconds, 0 for none
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a commented default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    logging::init()?;

    let config_path = args.config.clone().or_else(config::default_config_path);

    if args.init_config {
        return init_config(config_path);
    }

    let settings = config::load_settings(config_path.as_deref());

    let engine = match build_engine(&args, settings) {
        Ok(engine) => engine,
        Err(e) => {
            if args.headless {
                HeadlessEvent::error(e.to_string(), e.is_fatal()).emit();
            }
            return Err(e);
        }
    };

    if args.headless {
        let succeeded = privacy_insights::run_headless(engine, args.url).await?;
        if !succeeded {
            std::process::exit(1);
        }
        Ok(())
    } else {
        let result = privacy_insights::run_tui(engine, args.url).await;
        if let Err(ref e) = result {
            error!("Application error: {:?}", e);
            eprintln!("Logs: {}", logging::log_directory().display());
        }
        info!("Privacy Insights exiting");
        result
    }
}

/// Resolve endpoint and timeout, then build the client and engine
fn build_engine(args: &Args, settings: Settings) -> Result<Engine<HttpAnalysisClient>> {
    let endpoint = resolve_endpoint(args.endpoint.as_deref(), settings.api.endpoint.as_deref())
        .context("Failed to resolve analysis endpoint")?;
    let timeout = config::resolve_timeout(args.timeout, &settings);

    let client = HttpAnalysisClient::new(endpoint, ClientOptions { timeout })
        .context("Failed to create analysis client")?;
    Ok(Engine::new(client, settings))
}

fn init_config(path: Option<PathBuf>) -> Result<()> {
    let path = path.ok_or_else(|| Error::config("No config directory available"))?;

    if config::init_config_file(&path)
        .with_context(|| format!("Failed to initialize {}", path.display()))?
    {
        println!("Wrote default config to {}", path.display());
    } else {
        println!("Config already exists at {}", path.display());
    }
    Ok(())
}
