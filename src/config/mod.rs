pub mod schema;

pub use schema::ToolkitConfig;

use anyhow::{Context, Result};
use schema::API_KEY_ENV;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Written above the serialized settings by `save_config`.
const FILE_HEADER: &str = "# tubekit settings\n# The API_KEY environment variable overrides api_key.\n\n";

/// Default tubekit home directory (~/.tubekit).
pub fn default_home_dir() -> PathBuf {
    directories::BaseDirs::new()
        .map(|d| d.home_dir().join(".tubekit"))
        .unwrap_or_else(|| PathBuf::from(".tubekit"))
}

/// Default config file path.
pub fn default_config_path() -> PathBuf {
    default_home_dir().join("tubekit.toml")
}

/// Expand a leading `~` in a user-supplied path.
pub fn resolve_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

/// Effective settings: the file (defaults when absent) plus the `API_KEY` override.
pub fn load_config(path: &Path) -> Result<ToolkitConfig> {
    load_with_env(path, std::env::var(API_KEY_ENV).ok())
}

fn load_with_env(path: &Path, env_key: Option<String>) -> Result<ToolkitConfig> {
    let mut config = match std::fs::read_to_string(path) {
        Ok(text) => toml::from_str::<ToolkitConfig>(&text)
            .with_context(|| format!("Invalid settings in {}", path.display()))?,
        Err(e) if e.kind() == ErrorKind::NotFound => ToolkitConfig::default(),
        Err(e) => return Err(e).with_context(|| format!("Cannot read {}", path.display())),
    };
    config.apply_env_key(env_key);
    Ok(config)
}

/// Write settings as commented TOML, creating the directory if needed.
pub fn save_config(config: &ToolkitConfig, path: &Path) -> Result<()> {
    let body = toml::to_string_pretty(config).context("Failed to serialize settings")?;
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).with_context(|| format!("Cannot create {}", dir.display()))?;
    }
    std::fs::write(path, format!("{}{}", FILE_HEADER, body))
        .with_context(|| format!("Cannot write {}", path.display()))
}
