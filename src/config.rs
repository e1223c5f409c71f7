use std::path::{Path, PathBuf};
use std::time::Duration;

use color_eyre::Result;
use color_eyre::eyre::{Context, OptionExt, eyre};
use serde::{Deserialize, Serialize};
use url::Url;

/// Which upstream answers ranking and media lookups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// The internal REST backend, which already returns normalized records.
    #[default]
    Backend,
    /// The chart service for rankings and a third-party image search for media.
    Direct,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub strategy: Strategy,
    pub request_timeout_secs: u64,
    pub upstreams: Upstreams,
    pub image_search: ImageSearchConfig,
}

/// Base URLs of the upstream services. Paths are resolved below each base,
/// with or without a trailing `/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Upstreams {
    pub chart: Url,
    pub streaming: Url,
    pub image_search: Url,
    pub backend: Url,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSearchConfig {
    pub api_key: String,
    pub engine_id: String,
    /// Number of hits requested per search.
    pub limit: u32,
}

// Only ever called with the literals below; `test_default_upstreams_are_bases`
// parses every one of them.
fn local_url(raw: &str) -> Url {
    Url::parse(raw).expect("built-in upstream URL is valid")
}

impl Default for Upstreams {
    fn default() -> Self {
        Self {
            chart: local_url("http://localhost:9006/billboard/"),
            streaming: local_url("http://localhost:9007/spotify/v1/"),
            image_search: local_url("http://localhost:9009/googleapis/"),
            backend: local_url("http://localhost:8888/api/"),
        }
    }
}

impl Default for ImageSearchConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            engine_id: String::new(),
            limit: 4,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            request_timeout_secs: 10,
            upstreams: Upstreams::default(),
            image_search: ImageSearchConfig::default(),
        }
    }
}

impl Upstreams {
    fn normalize(&mut self) -> Result<()> {
        for (name, url) in [
            ("chart", &mut self.chart),
            ("streaming", &mut self.streaming),
            ("image_search", &mut self.image_search),
            ("backend", &mut self.backend),
        ] {
            if url.cannot_be_a_base() {
                return Err(eyre!("Upstream `{}` is not a usable base URL: {}", name, url));
            }
            if !url.path().ends_with('/') {
                let path = format!("{}/", url.path());
                url.set_path(&path);
            }
        }
        Ok(())
    }
}

impl Config {
    /// Parse a TOML document. Missing keys fall back to their defaults.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(contents).wrap_err("Invalid config TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&contents)
            .wrap_err_with(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|path| path.join("chart-aggregator").join("config.toml"))
    }

    /// Load the config from the default location, or use the built-in
    /// local endpoints when no file exists there.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            Some(path) => {
                tracing::info!(
                    "No config file at {}, using built-in defaults",
                    path.display()
                );
                Ok(Self::default())
            }
            None => {
                tracing::info!("No config directory available, using built-in defaults");
                Ok(Self::default())
            }
        }
    }

    /// Write the default config to [`Config::config_path`] if no file is there yet.
    pub fn create_default() -> Result<PathBuf> {
        let path = Self::config_path().ok_or_eyre("No config directory available")?;
        Self::default().write_if_missing(&path)?;
        Ok(path)
    }

    fn write_if_missing(&self, path: &Path) -> Result<()> {
        if path.exists() {
            tracing::info!("Config file already exists at {}", path.display());
            return Ok(());
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .wrap_err_with(|| format!("Failed to create {}", parent.display()))?;
        }
        let contents = toml::to_string_pretty(self).wrap_err("Failed to serialize config")?;
        std::fs::write(path, contents)
            .wrap_err_with(|| format!("Failed to write config file: {}", path.display()))?;
        tracing::info!("Wrote default config to {}", path.display());
        Ok(())
    }

    fn validate(&mut self) -> Result<()> {
        self.upstreams.normalize()?;
        if self.image_search.limit == 0 {
            return Err(eyre!("image_search.limit must be at least 1"));
        }
        if self.request_timeout_secs == 0 {
            return Err(eyre!("request_timeout_secs must be at least 1"));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
