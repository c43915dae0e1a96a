use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod user;

pub use user::{AspectRatio, InstagramRenderMode, UserConfig};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

pub struct AppConfig;

impl AppConfig {
    pub fn get_config_dir() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".config").join("vaultfeed")
    }

    pub fn get_config_path() -> PathBuf {
        Self::get_config_dir().join("config.toml")
    }

    /// Load `config.toml`, creating it with defaults if it is missing.
    /// A broken file is reported and ignored rather than blocking startup.
    pub fn load() -> UserConfig {
        let path = Self::get_config_path();

        if !path.exists() {
            let config = UserConfig::default();
            if let Err(e) = Self::write_default(&path) {
                tracing::warn!(path = %path.display(), error = %e, "could not write default config");
            }
            return config;
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "falling back to default config");
                UserConfig::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<UserConfig, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    pub fn default_toml() -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(&UserConfig::default())?)
    }

    fn write_default(path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(path, Self::default_toml()?).map_err(io_err)
    }
}
