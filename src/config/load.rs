use std::{env, path::PathBuf};

use crate::player::{SPEED_CHOICES, is_valid_speed};

use super::schema::Settings;

/// Prefix of environment overrides, e.g. `DANKIRA__UI__SHOW_TRACKS=true`.
const ENV_PREFIX: &str = "DANKIRA";
/// Explicit config file location, checked before the XDG paths.
const CONFIG_PATH_VAR: &str = "DANKIRA_CONFIG_PATH";

impl Settings {
    /// Build settings from, in rising precedence: defaults, the config file
    /// (when one exists), then `DANKIRA__*` environment variables.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let file = resolve_config_path()
            .map(|path| ::config::File::from(path.as_path()).required(false));

        ::config::Config::builder()
            .add_source(file.into_iter().collect::<Vec<_>>())
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.playback.initial_volume > 100 {
            return Err("playback.initial_volume must be <= 100".to_string());
        }
        if let Some(speed) = self.playback.speed {
            if !is_valid_speed(speed) {
                return Err(format!(
                    "playback.speed must be one of {SPEED_CHOICES:?} (got {speed})"
                ));
            }
        }
        if self.ui.progress_poll_ms == 0 {
            return Err("ui.progress_poll_ms must be >= 1".to_string());
        }
        if self.controls.volume_step == 0 || self.controls.volume_step > 100 {
            return Err("controls.volume_step must be within 1..=100".to_string());
        }
        Ok(())
    }
}

/// Resolve the config path from `DANKIRA_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os(CONFIG_PATH_VAR) {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/dankira/config.toml`
/// or `~/.config/dankira/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("dankira").join("config.toml"))
}
