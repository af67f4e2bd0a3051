use super::dto::{RuntimeConfig, BUILD_BASE_PATH};
use super::helpers::{join_path, normalize_endpoint, API_SUFFIX};

#[derive(Debug, Clone)]
pub struct RuntimeAccessor {
    injected: Option<RuntimeConfig>,
    fallback_base_path: String,
}

impl RuntimeAccessor {
    pub fn new(injected: Option<RuntimeConfig>, fallback_base_path: impl Into<String>) -> Self {
        Self {
            injected,
            fallback_base_path: fallback_base_path.into(),
        }
    }

    pub fn from_build(injected: Option<RuntimeConfig>) -> Self {
        Self::new(injected, BUILD_BASE_PATH)
    }

    pub fn runtime_config(&self) -> RuntimeConfig {
        match &self.injected {
            Some(config) => config.clone(),
            None => RuntimeConfig::with_base_path(self.fallback_base_path.as_str()),
        }
    }

    pub fn base_path(&self) -> String {
        self.runtime_config().base_path
    }

    // Trailing slashes on the base path are dropped so this never yields "//api".
    pub fn api_base_url(&self) -> String {
        join_path(&self.base_path(), API_SUFFIX)
    }

    pub fn api_url(&self, endpoint: &str) -> String {
        let mut url = self.api_base_url();
        url.push_str(&normalize_endpoint(endpoint));
        url
    }
}

impl Default for RuntimeAccessor {
    fn default() -> Self {
        Self::from_build(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_when_nothing_injected() {
        let accessor = RuntimeAccessor::new(None, "/env");
        let config = accessor.runtime_config();
        assert_eq!(config.base_path, "/env");
        assert_eq!(config.version, "dev");
        assert_eq!(config.name, "mcphub");
    }

    #[test]
    fn injected_config_is_returned_as_is() {
        let injected = RuntimeConfig {
            base_path: "/x/".into(),
            version: "1.2".into(),
            name: "hub".into(),
        };
        let accessor = RuntimeAccessor::new(Some(injected.clone()), "/ignored");
        assert_eq!(accessor.runtime_config(), injected);
        assert_eq!(accessor.base_path(), "/x/");
    }

    #[test]
    fn api_base_url_never_doubles_slash() {
        for base in ["", "/sub", "/sub/"] {
            let url = RuntimeAccessor::new(None, base).api_base_url();
            assert!(url.ends_with("/api"), "{url}");
            assert!(!url.contains("//api"), "{url}");
        }
        assert_eq!(RuntimeAccessor::new(None, "").api_base_url(), "/api");
    }
}
