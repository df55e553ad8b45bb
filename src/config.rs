//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/enigma/enigma.toml`
//! 3. Explicit config file (`--config`)
//! 4. Environment variables: `ENIGMA_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::{ApplicationError, Command};
use crate::domain::Side;

/// Single-character keys driving the exploration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyBindings {
    /// Go through the left door (default: `e`, "esquerda")
    pub left: char,
    /// Go through the right door (default: `d`, "direita")
    pub right: char,
    /// Leave the mansion (default: `s`, "sair")
    pub exit: char,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left: 'e',
            right: 'd',
            exit: 's',
        }
    }
}

impl KeyBindings {
    /// Maps a pressed key to a command. Matching is case-sensitive.
    pub fn resolve(&self, key: char) -> Command {
        if key == self.exit {
            Command::Exit
        } else if key == self.left {
            Command::Go(Side::Left)
        } else if key == self.right {
            Command::Go(Side::Right)
        } else {
            Command::Unknown(key)
        }
    }

    pub fn key_for(&self, side: Side) -> char {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Keys must be visible characters and pairwise distinct.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        let keys = [("left", self.left), ("right", self.right), ("exit", self.exit)];
        if let Some((name, _)) = keys.iter().find(|(_, key)| key.is_whitespace() || key.is_control()) {
            return Err(ApplicationError::Config {
                message: format!("key for '{}' must be a visible character", name),
            });
        }
        for (i, (name_a, key_a)) in keys.iter().enumerate() {
            if let Some((name_b, _)) = keys[i + 1..].iter().find(|(_, key_b)| key_b == key_a) {
                return Err(ApplicationError::Config {
                    message: format!("'{}' and '{}' are both bound to '{}'", name_a, name_b, key_a),
                });
            }
        }
        Ok(())
    }
}

/// Raw key bindings for intermediate parsing (None → not specified, inherit from base).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawKeyBindings {
    pub left: Option<char>,
    pub right: Option<char>,
    pub exit: Option<char>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub color: Option<bool>,
    pub keys: RawKeyBindings,
}

/// Unified configuration for enigma.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Colored terminal output (default: true; NO_COLOR is honored regardless)
    pub color: bool,
    /// Navigation keys
    pub keys: KeyBindings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            keys: KeyBindings::default(),
        }
    }
}

/// Get the XDG config directory for enigma.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "enigma").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("enigma.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
pub fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

fn single_char(name: &str, value: &str) -> Result<char, ApplicationError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ApplicationError::Config {
            message: format!("{} must be a single character, got {:?}", name, value),
        }),
    }
}

impl Settings {
    /// Merge overlay config onto self (base): overlay wins where specified.
    pub fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            color: overlay.color.unwrap_or(self.color),
            keys: KeyBindings {
                left: overlay.keys.left.unwrap_or(self.keys.left),
                right: overlay.keys.right.unwrap_or(self.keys.right),
                exit: overlay.keys.exit.unwrap_or(self.keys.exit),
            },
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; unlike the global
    ///   config it must exist
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/enigma/enigma.toml`
    /// 3. Explicit config file
    /// 4. Environment variables: `ENIGMA_*` prefix
    #[instrument(level = "debug")]
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("global config: {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(path) = config_file {
            debug!("explicit config: {}", path.display());
            current = current.merge_with(&load_raw_settings(path)?);
        }

        current = Self::apply_env_overrides(current)?;
        current.keys.validate()?;

        Ok(current)
    }

    /// Apply ENIGMA_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("ENIGMA")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_bool("color") {
            settings.color = val;
        }
        if let Ok(val) = config.get_string("keys.left") {
            settings.keys.left = single_char("ENIGMA_KEYS__LEFT", &val)?;
        }
        if let Ok(val) = config.get_string("keys.right") {
            settings.keys.right = single_char("ENIGMA_KEYS__RIGHT", &val)?;
        }
        if let Ok(val) = config.get_string("keys.exit") {
            settings.keys.exit = single_char("ENIGMA_KEYS__EXIT", &val)?;
        }

        Ok(settings)
    }

    /// Effective settings as TOML, for `config show`.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}
