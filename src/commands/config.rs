use clap::{Args, Subcommand};
use serde::Serialize;

use monoforge::config::{self, ForgeConfig};

use super::CmdResult;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Display stored naming defaults
    Show,
    /// Set the default prefix applied when --prefix is not given
    Set {
        /// Prefix value (normalized before storing)
        #[arg(long)]
        default_prefix: String,
    },
    /// Remove the stored default prefix
    Unset,
    /// Show the path to monoforge.json
    Path,
}

#[derive(Debug, Serialize)]
pub struct ConfigOutput {
    command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    config: Option<ForgeConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exists: Option<bool>,
}

pub fn run(args: ConfigArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<ConfigOutput> {
    match args.command {
        ConfigCommand::Show => show(),
        ConfigCommand::Set { default_prefix } => set(&default_prefix),
        ConfigCommand::Unset => unset(),
        ConfigCommand::Path => path(),
    }
}

fn show() -> CmdResult<ConfigOutput> {
    Ok((
        ConfigOutput {
            command: "config.show".to_string(),
            config: Some(config::load()?),
            path: None,
            exists: None,
        },
        0,
    ))
}

fn set(default_prefix: &str) -> CmdResult<ConfigOutput> {
    let config = config::set_default_prefix(default_prefix)?;
    Ok((
        ConfigOutput {
            command: "config.set".to_string(),
            config: Some(config),
            path: None,
            exists: None,
        },
        0,
    ))
}

fn unset() -> CmdResult<ConfigOutput> {
    let config = config::unset_default_prefix()?;
    Ok((
        ConfigOutput {
            command: "config.unset".to_string(),
            config: Some(config),
            path: None,
            exists: None,
        },
        0,
    ))
}

fn path() -> CmdResult<ConfigOutput> {
    let path = config::config_path()?;
    Ok((
        ConfigOutput {
            command: "config.path".to_string(),
            config: None,
            exists: Some(path.exists()),
            path: Some(path.display().to_string()),
        },
        0,
    ))
}
