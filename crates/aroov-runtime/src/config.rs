use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Resolve the client configuration directory based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. AROOV_PATH environment variable (with tilde expansion)
/// 3. XDG config directory (recommended default)
/// 4. ~/.aroov (fallback for systems without XDG)
pub fn resolve_config_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("AROOV_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("aroov"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".aroov"));
    }

    Err(Error::Config(
        "Could not determine config directory: no HOME directory or XDG config directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            timeout_secs: 15,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Public origin used for share links.
    pub origin: String,
    pub card_placeholder_image: String,
    pub detail_placeholder_image: String,
    pub removal_delay_ms: u64,
    pub copied_feedback_ms: u64,
    /// Tag buttons offered by the profile editor, in display order.
    pub activity_tags: Vec<String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            origin: "http://localhost:3000".to_string(),
            card_placeholder_image: "https://via.placeholder.com/400x300?text=Aroov+Trip"
                .to_string(),
            detail_placeholder_image: "https://via.placeholder.com/800x450".to_string(),
            removal_delay_ms: 300,
            copied_feedback_ms: 2000,
            activity_tags: [
                "Hiking",
                "Beach",
                "Food",
                "Culture",
                "Shopping",
                "Nightlife",
                "Photography",
                "Relaxation",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl UiConfig {
    pub fn removal_delay(&self) -> Duration {
        Duration::from_millis(self.removal_delay_ms)
    }

    pub fn copied_feedback(&self) -> Duration {
        Duration::from_millis(self.copied_feedback_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::default_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> Result<PathBuf> {
        Ok(resolve_config_dir(None)?.join("config.toml"))
    }

    /// Point the client at another backend. Trailing slashes are dropped so
    /// share links do not double them.
    pub fn set_base_url(&mut self, url: &str) -> Result<()> {
        let trimmed = url.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(Error::Config(format!(
                "API URL must start with http:// or https://: {}",
                url
            )));
        }
        self.api.base_url = trimmed.to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.ui.removal_delay(), Duration::from_millis(300));
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.set_base_url("https://aroov.example.com/")?;
        config.ui.removal_delay_ms = 0;

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.api.base_url, "https://aroov.example.com");
        assert_eq!(loaded.ui.removal_delay_ms, 0);
        assert_eq!(loaded, config);

        Ok(())
    }

    #[test]
    fn test_partial_file_keeps_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[api]\nbase_url = \"http://10.0.0.2:8080\"\n")?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.api.base_url, "http://10.0.0.2:8080");
        assert_eq!(config.api.timeout_secs, 15);
        assert_eq!(config.ui, UiConfig::default());

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config, Config::default());

        Ok(())
    }

    #[test]
    fn test_set_base_url_rejects_other_schemes() {
        let mut config = Config::default();
        assert!(config.set_base_url("ftp://example.com").is_err());
        assert_eq!(config.api.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_explicit_config_dir_wins() -> Result<()> {
        let dir = resolve_config_dir(Some("/tmp/aroov-test"))?;
        assert_eq!(dir, PathBuf::from("/tmp/aroov-test"));
        Ok(())
    }
}
