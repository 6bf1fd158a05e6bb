// src/config/mod.rs
//
// Runtime settings, read once at startup from `INTAKE_*` environment
// variables. The data mode chosen here decides which repository
// strategy gets injected.

use std::path::PathBuf;
use std::time::Duration;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment};
use reqwest::Url;
use serde::Deserialize;

use crate::error::{AppError, AppResult};

pub const ENV_PREFIX: &str = "INTAKE";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api/v1";

/// Where application data comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataMode {
    /// In-process fixture list with simulated latency
    Mock,
    /// REST API under `api_base_url`
    Remote,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub use_mock_data: bool,
    pub api_base_url: String,
    pub mock_latency_ms: u64,
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
    #[serde(default)]
    pub session_file: Option<PathBuf>,
}

impl AppConfig {
    /// Settings from the process environment
    pub fn load() -> AppResult<Self> {
        let builder = Config::builder().add_source(
            Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true),
        );
        Self::from_builder(builder)
    }

    /// Layer the defaults under whatever sources `builder` already has.
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> AppResult<Self> {
        let conf = builder
            .set_default("use_mock_data", false)?
            .set_default("api_base_url", DEFAULT_API_BASE_URL)?
            .set_default("mock_latency_ms", 500_i64)?
            .set_default("request_timeout_secs", 30_i64)?
            .build()?;

        let settings: AppConfig = conf.try_deserialize()?;
        settings.api_base_url()?;
        Ok(settings)
    }

    pub fn data_mode(&self) -> DataMode {
        if self.use_mock_data {
            DataMode::Mock
        } else {
            DataMode::Remote
        }
    }

    /// Parsed base URL, always ending in `/` so endpoint paths append to it.
    pub fn api_base_url(&self) -> AppResult<Url> {
        let mut raw = self.api_base_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        Url::parse(&raw).map_err(|e| {
            AppError::Config(ConfigError::Message(format!(
                "invalid api_base_url {:?}: {}",
                self.api_base_url, e
            )))
        })
    }

    pub fn mock_latency(&self) -> Duration {
        Duration::from_millis(self.mock_latency_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Configured directory, else the user's download directory, else cwd.
    pub fn download_dir(&self) -> PathBuf {
        self.download_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Configured file, else `<data_local_dir>/resume-intake/session.json`.
    pub fn session_file(&self) -> PathBuf {
        self.session_file.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("resume-intake")
                .join("session.json")
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            use_mock_data: false,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            mock_latency_ms: 500,
            request_timeout_secs: 30,
            download_dir: None,
            session_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_select_remote_mode() {
        let settings = AppConfig::from_builder(Config::builder()).unwrap();
        assert_eq!(settings.data_mode(), DataMode::Remote);
        assert_eq!(settings.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(settings.mock_latency(), Duration::from_millis(500));
        assert_eq!(settings.request_timeout(), Duration::from_secs(30));
        assert!(settings.session_file.is_none());
    }

    #[test]
    fn test_overrides_win_over_defaults() {
        let builder = Config::builder()
            .set_override("use_mock_data", true)
            .unwrap()
            .set_override("mock_latency_ms", 0_i64)
            .unwrap()
            .set_override("download_dir", "/tmp/resumes")
            .unwrap();

        let settings = AppConfig::from_builder(builder).unwrap();
        assert_eq!(settings.data_mode(), DataMode::Mock);
        assert_eq!(settings.mock_latency(), Duration::ZERO);
        assert_eq!(settings.download_dir(), PathBuf::from("/tmp/resumes"));
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let settings = AppConfig {
            api_base_url: "https://jobs.example.com/api/v1".to_string(),
            ..AppConfig::default()
        };
        let url = settings.api_base_url().unwrap();
        assert_eq!(url.as_str(), "https://jobs.example.com/api/v1/");
        assert_eq!(url.join("applications").unwrap().path(), "/api/v1/applications");
    }

    #[test]
    fn test_relative_base_url_is_rejected() {
        let builder = Config::builder()
            .set_override("api_base_url", "/api/v1")
            .unwrap();
        assert!(matches!(
            AppConfig::from_builder(builder),
            Err(AppError::Config(_))
        ));
    }
}
