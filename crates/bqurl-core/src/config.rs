use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// How the CLI prints translated settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

/// Global configuration loaded from `~/.config/bqurl/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BqurlConfig {
    /// Output format for `bqurl parse`: "json" (default) or "text".
    #[serde(default)]
    pub output_format: OutputFormat,
    /// Log unrecognized query parameters at warn level (they are always ignored).
    #[serde(default = "default_true")]
    pub warn_unknown_params: bool,
    /// Project bound onto the default dataset when the URL has no host.
    #[serde(default)]
    pub default_project: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Default for BqurlConfig {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Json,
            warn_unknown_params: true,
            default_project: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("bqurl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<BqurlConfig> {
    let path = config_path()?;
    load_or_init_at(&path)
}

pub fn load_or_init_at(path: &Path) -> Result<BqurlConfig> {
    if !path.exists() {
        let default_cfg = BqurlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: BqurlConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
