use std::path::{Path, PathBuf};

use super::types::{AppConfig, ColorMode};

pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOCAL_CONFIG_FILE_NAME: &str = "tping.toml";

/// Get the tping data directory: ~/.tping
pub fn get_tping_data_dir() -> Option<PathBuf> {
    std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .ok()
        .filter(|h| !h.trim().is_empty())
        .map(|home| PathBuf::from(home).join(".tping"))
}

pub fn load_default() -> anyhow::Result<AppConfig> {
    // Priority 1: ~/.tping/config.toml
    let user_config = get_tping_data_dir().map(|d| d.join(CONFIG_FILE_NAME));

    // Priority 2: ./tping.toml (current directory)
    let local_config = Path::new(LOCAL_CONFIG_FILE_NAME);

    let mut cfg = match user_config.as_deref().filter(|p| p.exists()) {
        Some(path) => load_from_path(path)?,
        None if local_config.exists() => load_from_path(local_config)?,
        None => AppConfig::default(),
    };

    apply_env_overrides(&mut cfg, |key| std::env::var(key).ok())?;
    Ok(cfg)
}

pub fn load_from_path(path: &Path) -> anyhow::Result<AppConfig> {
    let s = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
    load_from_str(&s).map_err(|e| anyhow::anyhow!("{}: {e}", path.display()))
}

pub fn load_from_str(s: &str) -> anyhow::Result<AppConfig> {
    Ok(toml::from_str::<AppConfig>(s)?)
}

/// Environment variable overrides (highest priority). Blank values are ignored.
pub fn apply_env_overrides<F>(cfg: &mut AppConfig, lookup: F) -> anyhow::Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(v) = non_blank("TPING_PING_BIN") {
        cfg.runner.program = v;
    }
    if let Some(v) = non_blank("TPING_COLOR") {
        cfg.output.color = v
            .parse::<ColorMode>()
            .map_err(|e: String| anyhow::anyhow!("TPING_COLOR: {e}"))?;
    }

    Ok(())
}
