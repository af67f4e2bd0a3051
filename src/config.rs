use crate::error::{HubError, Result};
use crate::runtime::{RuntimeConfig, BUILD_BASE_PATH};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HubConfig {
    pub server: ServerConfig,
    pub runtime: RuntimeSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub log_level: String,
    pub mode: String, // "probe", "serve"
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeSettings {
    pub origin: String, // config paths resolve against this
    pub base_path: String,
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
    #[serde(default)]
    pub injected: Option<RuntimeConfig>,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                port: 3000,
                log_level: "info".to_string(),
                mode: "probe".to_string(),
            },
            runtime: RuntimeSettings {
                origin: "http://localhost:3000".to_string(),
                base_path: BUILD_BASE_PATH.to_string(),
                timeout_seconds: None,
                injected: None,
            },
        }
    }
}

impl HubConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(port) = lookup("MCPHUB_PORT") {
            config.server.port = port
                .parse()
                .map_err(|_| HubError::config_error("Invalid MCPHUB_PORT"))?;
        }

        if let Some(log_level) = lookup("MCPHUB_LOG_LEVEL") {
            config.server.log_level = log_level;
        }

        if let Some(mode) = lookup("MCPHUB_MODE") {
            config.server.mode = mode;
        }

        if let Some(origin) = lookup("MCPHUB_ORIGIN") {
            if !origin.trim().is_empty() {
                config.runtime.origin = origin.trim().to_string();
            }
        }

        if let Some(timeout) = lookup("MCPHUB_TIMEOUT_SECS") {
            config.runtime.timeout_seconds = Some(
                timeout
                    .parse()
                    .map_err(|_| HubError::config_error("Invalid MCPHUB_TIMEOUT_SECS"))?,
            );
        }

        if let Some(raw) = lookup("MCPHUB_RUNTIME_CONFIG") {
            let injected: RuntimeConfig = serde_json::from_str(&raw).map_err(|e| {
                HubError::config_error(format!("Invalid MCPHUB_RUNTIME_CONFIG: {}", e))
            })?;
            config.runtime.injected = Some(injected);
        }

        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| HubError::config_error(format!("Failed to read config file: {}", e)))?;

        let config: HubConfig = toml::from_str(&content)
            .map_err(|e| HubError::config_error(format!("Failed to parse config file: {}", e)))?;

        Ok(config)
    }
}
