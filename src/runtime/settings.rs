use std::path::PathBuf;

use crate::config;

pub fn load_settings() -> config::Settings {
    match config::Settings::load() {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                eprintln!("dankira: invalid config, using defaults: {msg}");
                config::Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            // Config is optional; failures should not prevent the app from starting.
            eprintln!("dankira: failed to load config, using defaults: {e}");
            config::Settings::default()
        }
    }
}

/// Apply the positional directory argument, if any.
pub fn apply_dir_arg(settings: &mut config::Settings, arg: Option<String>) {
    if let Some(dir) = arg.filter(|d| !d.trim().is_empty()) {
        settings.library.dir = PathBuf::from(dir);
    }
}
