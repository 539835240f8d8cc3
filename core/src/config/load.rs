use std::path::{Path, PathBuf};

use super::types::AppConfig;

/// Get the default geest data directory: ~/.geest
pub fn geest_data_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_err(|_| anyhow::anyhow!("Cannot determine home directory"))?;
    Ok(PathBuf::from(home).join(".geest"))
}

pub fn load_default() -> anyhow::Result<AppConfig> {
    // Priority 1: ~/.geest/config.toml (highest)
    let geest_dir = geest_data_dir()?;
    let home_config = geest_dir.join("config.toml");

    // Priority 2: ./geest.toml (current directory)
    let local_config = Path::new("geest.toml");

    let mut cfg: AppConfig = if home_config.exists() {
        let s = std::fs::read_to_string(&home_config)?;
        toml::from_str::<AppConfig>(&s)?
    } else if local_config.exists() {
        let s = std::fs::read_to_string(local_config)?;
        toml::from_str::<AppConfig>(&s)?
    } else {
        AppConfig::default()
    };

    // Update logging directory to use geest data directory if not set
    if cfg.logging.directory.is_none()
        || cfg
            .logging
            .directory
            .as_ref()
            .map(|s| s.trim().is_empty())
            .unwrap_or(false)
    {
        let logs_dir = geest_dir.join("logs");
        std::fs::create_dir_all(&logs_dir)?;
        cfg.logging.directory = Some(logs_dir.to_string_lossy().to_string());
    }

    // Environment variable overrides (Priority 0: highest)
    if let Ok(v) = std::env::var("GEEST_VIEWER_PROGRAM") {
        if !v.trim().is_empty() {
            cfg.viewer.program = v;
        }
    }
    if let Ok(v) = std::env::var("GEEST_OVERPASS_URL") {
        if !v.trim().is_empty() {
            cfg.overpass.base_url = v;
        }
    }

    Ok(cfg)
}
