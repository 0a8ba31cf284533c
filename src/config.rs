use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Settings for the `dishlist-search` command-line tool
#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    /// Default log filter when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Where to find search data when not given on the command line
    #[serde(default)]
    pub data: DataConfig,
    /// How results are printed
    #[serde(default)]
    pub output: OutputConfig,
}

/// Default locations of exported API payloads
#[derive(Debug, Deserialize, Clone, Default)]
pub struct DataConfig {
    /// JSON array of recipe records
    pub recipes_path: Option<PathBuf>,
    /// JSON array of dishlist records
    pub dish_lists_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct OutputConfig {
    /// Maximum number of search results to print
    pub limit: Option<usize>,
    /// Print JSON instead of plain text
    #[serde(default)]
    pub json: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            data: DataConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl SearchConfig {
    /// Load configuration from `dishlist.toml` and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables with DISHLIST__ prefix
    /// 2. dishlist.toml in current directory
    /// 3. Default values
    ///
    /// Environment variable format: DISHLIST__DATA__RECIPES_PATH
    pub fn load() -> Result<Self, ConfigError> {
        build(File::with_name("dishlist").required(false))
    }

    /// Same as [`SearchConfig::load`] but reading an explicit file, which must exist
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        build(File::from(path).required(true))
    }
}

fn build(file: impl config::Source + Send + Sync + 'static) -> Result<SearchConfig, ConfigError> {
    let settings = Config::builder()
        .add_source(file)
        // Use double underscore for nested keys: DISHLIST__OUTPUT__LIMIT
        .add_source(
            Environment::with_prefix("DISHLIST")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
