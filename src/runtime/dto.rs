use serde::{Deserialize, Serialize};
use serde_json::Value;

// Set at compile time via MCPHUB_BASE_PATH.
pub const BUILD_BASE_PATH: &str = match option_env!("MCPHUB_BASE_PATH") {
    Some(path) => path,
    None => "",
};

pub const DEFAULT_VERSION: &str = "dev";
pub const DEFAULT_NAME: &str = "mcphub";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "PartialRuntimeConfig")]
pub struct RuntimeConfig {
    pub base_path: String,
    pub version: String,
    pub name: String,
}

impl RuntimeConfig {
    pub fn with_base_path(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            version: DEFAULT_VERSION.to_string(),
            name: DEFAULT_NAME.to_string(),
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::with_base_path(BUILD_BASE_PATH)
    }
}

// Absent and null fields are both treated as unset.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct PartialRuntimeConfig {
    base_path: Option<String>,
    version: Option<String>,
    name: Option<String>,
}

impl PartialRuntimeConfig {
    pub(crate) fn over(self, defaults: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            base_path: self.base_path.unwrap_or(defaults.base_path),
            version: self.version.unwrap_or(defaults.version),
            name: self.name.unwrap_or(defaults.name),
        }
    }
}

impl From<PartialRuntimeConfig> for RuntimeConfig {
    fn from(partial: PartialRuntimeConfig) -> Self {
        partial.over(RuntimeConfig::default())
    }
}

// Body of GET <basePath>/config
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ConfigEnvelope {
    #[serde(default)]
    pub success: Value,
    #[serde(default)]
    pub data: Option<Value>,
}

impl ConfigEnvelope {
    pub fn ok(config: &RuntimeConfig) -> serde_json::Result<Self> {
        Ok(Self {
            success: Value::Bool(true),
            data: Some(serde_json::to_value(config)?),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Server { path: String },
    Default,
}

#[derive(Debug)]
pub struct LoadReport {
    pub config: RuntimeConfig,
    pub source: ConfigSource,
    pub failures: Vec<(String, crate::error::HubError)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let parsed: RuntimeConfig = serde_json::from_str(r#"{"basePath":"/x"}"#).unwrap();
        assert_eq!(parsed.base_path, "/x");
        assert_eq!(parsed.version, "dev");
        assert_eq!(parsed.name, "mcphub");
    }

    #[test]
    fn null_fields_take_defaults() {
        let parsed: RuntimeConfig =
            serde_json::from_str(r#"{"basePath":null,"version":"1.2","name":null}"#).unwrap();
        assert_eq!(parsed.base_path, BUILD_BASE_PATH);
        assert_eq!(parsed.version, "1.2");
        assert_eq!(parsed.name, "mcphub");
    }

    #[test]
    fn partial_fills_from_given_defaults() {
        let partial: PartialRuntimeConfig =
            serde_json::from_str(r#"{"version":"1.2","name":"hub"}"#).unwrap();
        let config = partial.over(RuntimeConfig::with_base_path("/hub"));
        assert_eq!(config.base_path, "/hub");
        assert_eq!(config.version, "1.2");
        assert_eq!(config.name, "hub");
    }

    #[test]
    fn serializes_camel_case() {
        let value = serde_json::to_value(RuntimeConfig::with_base_path("/hub")).unwrap();
        assert_eq!(value["basePath"], "/hub");
        assert!(value.get("base_path").is_none());
    }

    #[test]
    fn envelope_tolerates_missing_keys() {
        let parsed: ConfigEnvelope = serde_json::from_str("{}").unwrap();
        assert!(parsed.success.is_null());
        assert!(parsed.data.is_none());
    }
}
