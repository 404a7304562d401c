//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/fruittree/fruittree.toml`
//! 3. Local config: file passed with `--config`
//! 4. Environment variables: `FRUITTREE_*` prefix
//!
//! Every layer replaces the fields it specifies and keeps the rest.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::domain::Fruit;
use crate::errors::{SettingsError, SettingsResult};

/// Prefix of environment variable overrides, e.g. `FRUITTREE_SHOW_TREE=true`.
pub const ENV_PREFIX: &str = "FRUITTREE";

/// Unified configuration for fruittree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Print the tree diagram before the report
    pub show_tree: bool,
    /// Fruit kinds counted by the report, in output order
    pub kinds: Vec<Fruit>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_tree: false,
            kinds: vec![Fruit::Orange, Fruit::Apple],
        }
    }
}

/// Raw settings for intermediate parsing (`None` → not specified, keep base).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub show_tree: Option<bool>,
    pub kinds: Option<Vec<Fruit>>,
}

/// Get the XDG config directory for fruittree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "fruittree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("fruittree.toml"))
}

/// Load a TOML file into RawSettings.
fn load_raw_settings(path: &Path) -> SettingsResult<RawSettings> {
    let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|e| SettingsError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

impl Settings {
    /// Overlay config onto self: specified fields win, the rest is kept.
    pub fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            show_tree: overlay.show_tree.unwrap_or(self.show_tree),
            kinds: overlay.kinds.clone().unwrap_or_else(|| self.kinds.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_path` - Optional config file layered over the global one; it
    ///   must exist when given.
    #[instrument(level = "debug")]
    pub fn load(local_path: Option<&Path>) -> SettingsResult<Self> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config, optional
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("global config: {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        // 3. Local config, required if given
        if let Some(path) = local_path {
            debug!("local config: {}", path.display());
            current = current.merge_with(&load_raw_settings(path)?);
        }

        // 4. Environment variables
        current.apply_env_overrides(env_source())
    }

    /// Apply `FRUITTREE_*` variables from `source` as explicit overrides.
    ///
    /// A set variable always replaces the field; a value that does not parse is
    /// an error. `FRUITTREE_KINDS=""` clears the kind list.
    pub fn apply_env_overrides(mut self, source: Environment) -> SettingsResult<Self> {
        let config = Config::builder()
            .add_source(source)
            .build()
            .map_err(config_err)?;

        match config.get_bool("show_tree") {
            Ok(val) => self.show_tree = val,
            Err(ConfigError::NotFound(_)) => {}
            Err(e) => return Err(env_err("SHOW_TREE", e)),
        }
        match config.get_string("kinds") {
            Ok(val) => self.kinds = parse_kinds(&val)?,
            Err(ConfigError::NotFound(_)) => {}
            Err(e) => return Err(env_err("KINDS", e)),
        }

        Ok(self)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> SettingsResult<String> {
        toml::to_string_pretty(self).map_err(|e| SettingsError::Serialize(e.to_string()))
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# fruittree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/fruittree/fruittree.toml
#   Local:  file passed with --config
#   Env:    FRUITTREE_* environment variables (e.g. FRUITTREE_KINDS=apple,orange)
#
# Each layer replaces only the keys it sets.

# Print the tree diagram before the report
# show_tree = false

# Fruit kinds counted by the report, in output order
# kinds = ["orange", "apple"]
"#
        .to_string()
    }
}

/// Process environment source for `FRUITTREE_*` variables.
pub fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
}

/// Comma separated kind names; blank input yields an empty list.
fn parse_kinds(value: &str) -> SettingsResult<Vec<Fruit>> {
    value
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| name.parse::<Fruit>())
        .collect::<Result<_, _>>()
        .map_err(|e| SettingsError::Invalid(format!("{ENV_PREFIX}_KINDS: {e}")))
}

fn env_err(var: &str, e: ConfigError) -> SettingsError {
    SettingsError::Invalid(format!("{ENV_PREFIX}_{var}: {e}"))
}

fn config_err(e: ConfigError) -> SettingsError {
    SettingsError::Invalid(e.to_string())
}
