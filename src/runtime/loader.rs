use super::dto::{
    ConfigEnvelope, ConfigSource, LoadReport, PartialRuntimeConfig, RuntimeConfig, BUILD_BASE_PATH,
};
use super::helpers::{is_truthy, join_path, CONFIG_SUFFIX};
use crate::error::{HubError, Result};
use reqwest::header::{ACCEPT, CACHE_CONTROL};
use reqwest::Url;
use std::time::Duration;

#[derive(Clone)]
pub struct ConfigLoader {
    http: reqwest::Client,
    origin: String,
    base_path: String,
}

impl ConfigLoader {
    pub fn new(origin: impl Into<String>) -> Self {
        Self::build(origin, None)
    }

    pub fn with_timeout(origin: impl Into<String>, timeout: Duration) -> Self {
        Self::build(origin, Some(timeout))
    }

    fn build(origin: impl Into<String>, timeout: Option<Duration>) -> Self {
        // No timeout unless asked for; reqwest's default is to wait.
        let mut builder = reqwest::Client::builder().user_agent("MCPHub-Runtime/0.1.0");
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .unwrap_or_else(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                reqwest::Client::new()
            });
        Self::with_client(http, origin)
    }

    pub fn with_client(http: reqwest::Client, origin: impl Into<String>) -> Self {
        Self {
            http,
            origin: origin.into(),
            base_path: BUILD_BASE_PATH.to_string(),
        }
    }

    // Replaces the compile-time base path for candidates and defaults.
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    pub fn candidate_paths(&self) -> Vec<String> {
        vec![join_path(&self.base_path, CONFIG_SUFFIX)]
    }

    pub fn default_config(&self) -> RuntimeConfig {
        RuntimeConfig::with_base_path(self.base_path.as_str())
    }

    pub async fn load(&self) -> RuntimeConfig {
        self.load_with_report().await.config
    }

    pub async fn load_with_report(&self) -> LoadReport {
        match self.try_candidates().await {
            Ok(report) => report,
            Err(e) => {
                tracing::error!("Error loading runtime config: {}", e);
                LoadReport {
                    config: self.default_config(),
                    source: ConfigSource::Default,
                    failures: Vec::new(),
                }
            }
        }
    }

    async fn try_candidates(&self) -> Result<LoadReport> {
        let origin = self.origin_url()?;
        let mut failures = Vec::new();

        for path in self.candidate_paths() {
            match self.fetch_from(&origin, &path).await {
                Ok(config) => {
                    tracing::info!("Loaded runtime config from {}", path);
                    return Ok(LoadReport {
                        config,
                        source: ConfigSource::Server { path },
                        failures,
                    });
                }
                Err(e) => {
                    tracing::debug!("Failed to load config from {}: {}", path, e);
                    failures.push((path, e));
                }
            }
        }

        tracing::warn!("Could not load runtime config from server, using defaults");
        Ok(LoadReport {
            config: self.default_config(),
            source: ConfigSource::Default,
            failures,
        })
    }

    pub async fn fetch_candidate(&self, path: &str) -> Result<RuntimeConfig> {
        let origin = self.origin_url()?;
        self.fetch_from(&origin, path).await
    }

    fn origin_url(&self) -> Result<Url> {
        let origin =
            Url::parse(&self.origin).map_err(|e| HubError::invalid_url(&self.origin, e))?;
        if origin.cannot_be_a_base() {
            return Err(HubError::invalid_url(&self.origin, "not a base URL"));
        }
        Ok(origin)
    }

    async fn fetch_from(&self, origin: &Url, path: &str) -> Result<RuntimeConfig> {
        let url = origin
            .join(path)
            .map_err(|e| HubError::invalid_url(path, e))?;

        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await
            .map_err(HubError::NetworkError)?;

        let status = response.status();
        if !status.is_success() {
            return Err(HubError::HttpStatus {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(HubError::NetworkError)?;
        let envelope: ConfigEnvelope = serde_json::from_slice(&body)?;

        if !is_truthy(&envelope.success) {
            return Err(HubError::Unsuccessful {
                path: path.to_string(),
            });
        }
        match envelope.data {
            Some(data) if is_truthy(&data) => {
                let partial: PartialRuntimeConfig = serde_json::from_value(data)?;
                Ok(partial.over(self.default_config()))
            }
            _ => Err(HubError::MissingData {
                path: path.to_string(),
            }),
        }
    }
}
