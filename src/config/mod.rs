mod loader;
mod types;

pub use loader::{ConfigError, MAX_COUNTDOWN_SECONDS};
pub use types::{Config, DisplayConfig, LoggingConfig, PopupConfig};
