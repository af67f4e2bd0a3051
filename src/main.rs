use anyhow::Result;
use mcphub_runtime::http;
use mcphub_runtime::runtime::ConfigSource;
use mcphub_runtime::{ConfigLoader, HubConfig, RuntimeAccessor};
use serde_json::json;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env for local dev (if present)
    let dotenv_loaded = dotenvy::dotenv().is_ok();
    let config = HubConfig::from_env()?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("mcphub_runtime={}", config.server.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if dotenv_loaded {
        tracing::info!("Loaded .env");
    }
    tracing::info!(
        "Configuration loaded: mode={}, origin={}, base_path={:?}",
        config.server.mode,
        config.runtime.origin,
        config.runtime.base_path
    );

    match config.server.mode.to_lowercase().as_str() {
        "serve" => {
            let runtime_config = RuntimeAccessor::new(
                config.runtime.injected.clone(),
                config.runtime.base_path.as_str(),
            )
            .runtime_config();
            http::run_http_server(runtime_config, config.server.port).await
        }
        _ => {
            // Injected config wins; otherwise ask the server once.
            let runtime_config = match config.runtime.injected.clone() {
                Some(injected) => injected,
                None => {
                    let origin = config.runtime.origin.as_str();
                    let loader = match config.runtime.timeout_seconds {
                        Some(secs) => ConfigLoader::with_timeout(origin, Duration::from_secs(secs)),
                        None => ConfigLoader::new(origin),
                    }
                    .with_base_path(config.runtime.base_path.as_str());
                    let report = loader.load_with_report().await;
                    for (path, failure) in &report.failures {
                        tracing::debug!("Skipped {}: {}", path, failure);
                    }
                    if report.source == ConfigSource::Default {
                        tracing::info!("Using default runtime config");
                    }
                    report.config
                }
            };

            let accessor =
                RuntimeAccessor::new(Some(runtime_config), config.runtime.base_path.as_str());
            let summary = json!({
                "config": accessor.runtime_config(),
                "basePath": accessor.base_path(),
                "apiBaseUrl": accessor.api_base_url(),
                "serversUrl": accessor.api_url("servers"),
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
            Ok(())
        }
    }
}
