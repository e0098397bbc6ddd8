use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

const TMP_SUFFIX: &str = "tmp";

static DEFAULT_CONFIG: Lazy<Config> = Lazy::new(Config::default);

/// Text layout for both renderers. The defaults reproduce the canonical
/// ledger printout and spend chart byte for byte.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ledger: LedgerLayout,
    pub chart: ChartLayout,
}

impl Config {
    /// Shared default layout.
    pub fn default_ref() -> &'static Config {
        &DEFAULT_CONFIG
    }
}

/// Layout of a single category's ledger printout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerLayout {
    pub title_width: usize,
    pub title_fill: char,
    pub description_width: usize,
    pub amount_width: usize,
    pub amount_precision: u32,
    pub total_label: String,
}

impl Default for LedgerLayout {
    fn default() -> Self {
        Self {
            title_width: 30,
            title_fill: '*',
            description_width: 23,
            amount_width: 7,
            amount_precision: 2,
            total_label: "Total: ".into(),
        }
    }
}

/// Layout of the percentage-spent chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartLayout {
    pub title: String,
    pub marker: char,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            title: "Percentage spent by category".into(),
            marker: 'o',
        }
    }
}

/// Loads and saves [`Config`] as pretty JSON.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Manager for the resolved default location, see [`crate::utils::config_file`].
    pub fn from_default_location() -> Self {
        Self::new(crate::utils::config_file())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the config file, falling back to defaults when it does not exist.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            let config = serde_json::from_str(&data)?;
            tracing::debug!(path = %self.path.display(), "layout config loaded");
            Ok(config)
        } else {
            tracing::debug!(path = %self.path.display(), "no layout config, using defaults");
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tmp_path_appends_suffix_to_existing_extension() {
        let tmp = tmp_path(Path::new("/tmp/layout/config.json"));
        assert_eq!(tmp, PathBuf::from("/tmp/layout/config.json.tmp"));
        let bare = tmp_path(Path::new("/tmp/layout/config"));
        assert_eq!(bare, PathBuf::from("/tmp/layout/config.tmp"));
    }

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "ledger": { "title_fill": "=" } }"#).expect("parse");
        assert_eq!(config.ledger.title_fill, '=');
        assert_eq!(config.ledger.title_width, 30);
        assert_eq!(config.chart, ChartLayout::default());
    }
}
