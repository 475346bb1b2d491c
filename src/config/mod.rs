mod loader;
mod model;
mod validation;

pub use loader::{ConfigLoader, ConfigSource, DiskSource, FileConfigLoader, LOCAL_CONFIG_NAME};
pub use model::{CheckConfig, Config, DEFAULT_ROOT, ScannerConfig};
pub use validation::validate_config;
