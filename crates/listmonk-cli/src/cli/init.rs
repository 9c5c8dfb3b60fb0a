/*
[INPUT]:  Interactive user input via CLI
[OUTPUT]: Generated YAML configuration file
[POS]:    CLI initialization layer
[UPDATE]: When CliConfig schema changes
*/

use anyhow::{Context, Result};
use console::style;
use dialoguer::{Input, Password, theme::ColorfulTheme};
use std::path::Path;

use crate::config::CliConfig;

/// Write a configuration file, prompting for each value unless `defaults`
pub fn run_init(output: &Path, defaults: bool) -> Result<()> {
    let config = if defaults {
        CliConfig::default()
    } else {
        prompt_config()?
    };

    let yaml = serde_yaml::to_string(&config).context("failed to serialize config to YAML")?;

    std::fs::write(output, yaml)
        .with_context(|| format!("failed to write config to {}", output.display()))?;

    println!("\n{}", style("SUCCESS!").bold().green());
    println!(
        "Configuration written to: {}",
        style(output.display()).cyan()
    );

    Ok(())
}

fn prompt_config() -> Result<CliConfig> {
    println!("{}", style("Welcome to listmonk-cli init").bold().cyan());
    println!(
        "{}",
        style("This will guide you through connecting to a Listmonk server.").dim()
    );

    let theme = ColorfulTheme::default();
    let defaults = CliConfig::default();

    let base_url: String = Input::with_theme(&theme)
        .with_prompt("Server URL")
        .default(defaults.base_url)
        .interact_text()?;

    println!("\n{}", style("--- API user ---").bold());
    let username: String = Input::with_theme(&theme)
        .with_prompt("Username")
        .default(defaults.username)
        .interact_text()?;

    let password = Password::with_theme(&theme)
        .with_prompt("Token / password")
        .interact()?;

    let timeout_secs: u64 = Input::with_theme(&theme)
        .with_prompt("Request timeout (seconds)")
        .default(defaults.timeout_secs)
        .interact_text()?;

    Ok(CliConfig {
        base_url,
        username,
        password,
        timeout_secs,
    })
}
