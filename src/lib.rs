pub mod config;
pub mod error;
pub mod http;
pub mod runtime;

pub use config::HubConfig;
pub use error::{HubError, Result};
pub use runtime::{ConfigLoader, RuntimeAccessor, RuntimeConfig};
