use std::path::Path;

use crate::config;

pub fn load_settings(cli_override: Option<&Path>) -> config::Settings {
    let path = config::resolve_config_path(cli_override);
    match config::Settings::load(path.as_deref()) {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                tracing::warn!(%msg, "invalid config, using defaults");
                eprintln!("cadenza: invalid config, using defaults: {msg}");
                config::Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            // Config is optional; failures should not prevent the app from starting.
            tracing::warn!(error = %e, "failed to load config, using defaults");
            eprintln!("cadenza: failed to load config, using defaults: {e}");
            config::Settings::default()
        }
    }
}
