use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::ApplicationError;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliResult, IoResultExt};
use crate::cli::play::play;
use crate::config::{global_config_path, Settings};
use crate::domain::{enigma_mansion, TreeConvert};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    debug!("settings: {:?}", settings);
    if cli.no_color || !settings.color {
        colored::control::set_override(false);
    }

    match &cli.command {
        None | Some(Commands::Play) => _play(&settings),
        Some(Commands::Map) => _map(),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => _config_show(&settings),
            ConfigCommands::Path => _config_path(),
        },
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
    }
}

#[instrument(skip_all)]
fn _play(settings: &Settings) -> CliResult<()> {
    let mansion = enigma_mansion().map_err(ApplicationError::from)?;
    let clues = play(&mansion, &settings.keys, io::stdin().lock(), io::stdout().lock())?;
    debug!("exploration finished with {} clues", clues.len());
    Ok(())
}

#[instrument]
fn _map() -> CliResult<()> {
    let mansion = enigma_mansion().map_err(ApplicationError::from)?;
    let mut out = io::stdout().lock();
    write!(out, "{}", mansion.to_tree_string()).with_io_context("write map")
}

#[instrument(skip_all)]
fn _config_show(settings: &Settings) -> CliResult<()> {
    let rendered = settings.to_toml()?;
    print!("{}", rendered);
    Ok(())
}

#[instrument]
fn _config_path() -> CliResult<()> {
    match global_config_path() {
        Some(path) => println!("{}", path.display()),
        None => println!("(no config directory on this platform)"),
    }
    Ok(())
}
