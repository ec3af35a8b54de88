use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Client configuration. The base URL is the only knob: it is read once
/// at startup and every API call goes against it. No credentials, the
/// API is unauthenticated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl AppConfig {
    fn toml_path() -> Option<PathBuf> {
        let base = BaseDirs::new()?;
        Some(base.config_dir().join("crm-client.toml"))
    }

    pub fn load() -> Self {
        if let Some(path) = Self::toml_path() {
            if let Ok(text) = fs::read_to_string(&path) {
                match toml::from_str::<AppConfig>(&text) {
                    Ok(mut config) => {
                        config.base_url = crate::utils::normalize_url(&config.base_url);
                        if Url::parse(&config.base_url).is_err() {
                            log::warn!(
                                "invalid base_url {:?} in {}, using default",
                                config.base_url,
                                path.display()
                            );
                            return Self::default();
                        }
                        return config;
                    }
                    Err(err) => {
                        log::warn!("could not parse {}: {}", path.display(), err);
                    }
                }
            }
        }
        Self::default()
    }

    pub fn save(&self) -> std::io::Result<()> {
        if let Some(path) = Self::toml_path() {
            if let Some(parent) = path.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let toml = toml::to_string_pretty(self)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
            fs::write(path, toml)
        } else {
            Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "No config dir",
            ))
        }
    }
}
