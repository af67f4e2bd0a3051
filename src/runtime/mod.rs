pub mod accessor;
pub mod dto;
pub(crate) mod helpers;
pub mod loader;

pub use accessor::RuntimeAccessor;
pub use dto::{
    ConfigEnvelope, ConfigSource, LoadReport, RuntimeConfig, BUILD_BASE_PATH, DEFAULT_NAME,
    DEFAULT_VERSION,
};
pub use loader::ConfigLoader;
