//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::{Config, ThemeMode};
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Print the config file location
    Path,
    /// Set the default book file
    SetStore(ConfigSetStoreArgs),
    /// Set the theme mode (auto, light, or dark)
    SetTheme(ConfigSetThemeArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set the default book file
#[derive(Args, Debug)]
pub struct ConfigSetStoreArgs {
    /// Path of the JSON book file
    #[arg(value_name = "PATH")]
    path: PathBuf,
}

/// Set the theme mode
#[derive(Args, Debug)]
pub struct ConfigSetThemeArgs {
    /// auto, light, or dark
    #[arg(value_name = "MODE")]
    mode: String,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    store: StoreOutput,
    ui: UiOutput,
    logging: LoggingOutput,
}

#[derive(Serialize, Debug)]
struct StoreOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    resolved: String,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: String,
}

#[derive(Serialize, Debug)]
struct LoggingOutput {
    level: String,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Path => {
                let path = Config::config_file_path()
                    .map_err(|e| CliError::io(format!("{e:#}")))?;
                println!("{}", path.display());
                Ok(())
            }
            ConfigCommand::SetStore(args) => args.execute(),
            ConfigCommand::SetTheme(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            print_json(&config_output(&config))
        } else {
            output_human_readable(&config);
            Ok(())
        }
    }
}

impl ConfigSetStoreArgs {
    /// Execute set-store command
    pub fn execute(&self) -> CliResult<()> {
        let mut config = load_for_update()?;
        config.store.path = Some(self.path.clone());
        config
            .validate()
            .map_err(|e| CliError::validation(format!("{e:#}")))?;
        save(&config)?;

        println!("Store path set to {}", self.path.display());
        Ok(())
    }
}

impl ConfigSetThemeArgs {
    /// Execute set-theme command
    pub fn execute(&self) -> CliResult<()> {
        let mode = ThemeMode::parse(&self.mode).map_err(|_| {
            CliError::validation("Invalid theme mode. Must be 'auto', 'light', or 'dark'")
        })?;

        let mut config = load_for_update()?;
        config.ui.theme_mode = mode;
        save(&config)?;

        println!("Theme mode set to {}", theme_name(mode));
        Ok(())
    }
}

/// Current configuration; a file that fails to load is replaced by defaults.
fn load_for_update() -> CliResult<Config> {
    Ok(Config::load().unwrap_or_else(|e| {
        tracing::warn!(error = %format!("{e:#}"), "replacing unreadable configuration");
        Config::default()
    }))
}

fn save(config: &Config) -> CliResult<()> {
    config
        .save()
        .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))
}

fn theme_name(mode: ThemeMode) -> String {
    format!("{mode:?}").to_lowercase()
}

fn config_output(config: &Config) -> ConfigOutput {
    ConfigOutput {
        store: StoreOutput {
            path: config
                .store
                .path
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            resolved: config
                .resolve_store_path(None)
                .to_string_lossy()
                .to_string(),
        },
        ui: UiOutput {
            theme: theme_name(config.ui.theme_mode),
        },
        logging: LoggingOutput {
            level: config.logging.level.clone(),
        },
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("LazyBooks Configuration");
    println!("=======================");
    println!();

    println!("Store:");
    if let Some(path) = &config.store.path {
        println!("  Book File: {}", path.display());
    } else {
        println!(
            "  Book File: {} (default)",
            config.resolve_store_path(None).display()
        );
    }
    println!();

    println!("UI:");
    println!("  Theme Mode: {}", theme_name(config.ui.theme_mode));
    println!();

    println!("Logging:");
    println!("  Level: {}", config.logging.level);
}
