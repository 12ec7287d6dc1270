use std::{
    env,
    path::{Path, PathBuf},
};

use super::schema::Settings;

/// Rows every screen spends on borders, spacers, the current line and the progress bar.
const FIXED_ROWS: usize = 12;

/// Configuration loading helpers.
///
/// `Settings::load` reads an optional config file, then environment variables
/// (prefix `CADENZA__`) on top, and falls back to struct defaults.
impl Settings {
    /// Load settings from an optional config file and the environment.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ::config::ConfigError> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = config_path {
            builder = builder.add_source(::config::File::from(path).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("CADENZA")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        let t = &self.timing;
        if t.frame_ms == 0 {
            return Err("timing.frame_ms must be >= 1".to_string());
        }
        if t.min_char_delay_ms > t.max_char_delay_ms {
            return Err("timing.min_char_delay_ms must not exceed timing.max_char_delay_ms".to_string());
        }
        if !(t.typing_ratio > 0.0 && t.typing_ratio <= 1.0) {
            return Err("timing.typing_ratio must be in (0, 1]".to_string());
        }
        if self.ui.frames.is_empty() {
            return Err("ui.frames must contain at least one frame".to_string());
        }
        if self.ui.markers.is_empty() {
            return Err("ui.markers must contain at least one marker".to_string());
        }
        let room = usize::from(self.ui.height).saturating_sub(FIXED_ROWS);
        if self.ui.previous_lines.saturating_add(self.ui.upcoming_lines) > room {
            return Err(format!(
                "ui.previous_lines + ui.upcoming_lines must not exceed {room} for ui.height = {}",
                self.ui.height
            ));
        }
        Ok(())
    }

    /// Render the settings as TOML, the same shape the config file uses.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Resolve the config path from the CLI override, `CADENZA_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path(cli_override: Option<&Path>) -> Option<PathBuf> {
    if let Some(p) = cli_override {
        return Some(p.to_path_buf());
    }
    if let Some(p) = env::var_os("CADENZA_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/cadenza/config.toml`
/// or `~/.config/cadenza/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("cadenza").join("config.toml"))
}
