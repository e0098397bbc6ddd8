use std::{env, path::PathBuf, sync::Once};

use dirs::config_dir;

const CONFIG_ENV_VAR: &str = "BUDGET_LEDGER_CONFIG";
const APP_DIR_NAME: &str = "budget_ledger";
const CONFIG_FILE: &str = "config.json";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        install_fmt_subscriber();
    });
}

/// Installs the stderr fmt subscriber; returns `false` when the process
/// already has a global subscriber, which is left in place.
fn install_fmt_subscriber() -> bool {
    use tracing_subscriber::{fmt, EnvFilter};

    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = "budget_ledger=info".parse() {
        filter = filter.add_directive(directive);
    }

    match fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "keeping the existing tracing subscriber");
            false
        }
    }
}

/// Path of the layout configuration file.
///
/// `BUDGET_LEDGER_CONFIG` wins when set; otherwise the platform config
/// directory is used, falling back to the working directory.
pub fn config_file() -> PathBuf {
    if let Some(custom) = env::var_os(CONFIG_ENV_VAR) {
        return PathBuf::from(custom);
    }
    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
        .join(CONFIG_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_subscriber_install_is_refused() {
        install_fmt_subscriber();
        assert!(!install_fmt_subscriber());
        init_tracing();
    }

    #[test]
    fn default_config_file_is_named_config_json() {
        if env::var_os(CONFIG_ENV_VAR).is_some() {
            return;
        }
        let path = config_file();
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some(CONFIG_FILE));
        assert!(path.to_string_lossy().contains(APP_DIR_NAME));
    }
}
