/*
[INPUT]:  CLI arguments, optional YAML configuration file, LISTMONK_* environment
[OUTPUT]: JSON (or raw HTML) on stdout for one API call
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use listmonk_adapter::ListmonkClient;
use listmonk_cli::cli::{Cli, Command, init::run_init};
use listmonk_cli::{CliConfig, execute};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    if let Command::Init { output, defaults } = &args.command {
        return run_init(output, *defaults);
    }

    let config = load_config(args.config_path.as_deref())?;
    let client_config = config.client_config()?;
    info!(base_url = %client_config.base_url, "connecting to listmonk");

    let client = ListmonkClient::new(client_config).context("create listmonk client")?;
    let output = execute(&client, args.command).await?;
    print_output(&output)
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<CliConfig> {
    let Some(path) = path else {
        debug!("no config file given; using defaults and environment");
        return Ok(CliConfig::default());
    };
    let path_str = path
        .to_str()
        .context("config path must be valid utf-8")?;
    CliConfig::from_file(path_str).context("load config")
}

fn print_output(output: &Value) -> Result<()> {
    match output {
        Value::String(text) => println!("{text}"),
        other => println!(
            "{}",
            serde_json::to_string_pretty(other).context("render output")?
        ),
    }
    Ok(())
}
