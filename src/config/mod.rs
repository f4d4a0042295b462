pub mod toml_config;

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, LogFormat};
pub use toml_config::TomlConfig;

pub const DEFAULT_BASE_URL: &str = "https://www.whitehouse.gov/presidential-actions/";
pub const DEFAULT_MAX_PAGES: u32 = 5;
