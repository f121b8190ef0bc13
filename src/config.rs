use config::{Config, ConfigError, Environment, File as ConfigFile};
use serde::{Deserialize, Serialize};

pub const DEFAULT_IMAGE_EXTENSIONS: [&str; 7] = ["jpg", "jpeg", "png", "gif", "bmp", "svg", "ico"];

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Glob patterns; matching files and directories are left out of the walk.
    pub ignore_patterns: Vec<String>,
    /// Extensions (no leading dot) that are never paired or counted.
    pub image_extensions: Vec<String>,
    /// Fail on invalid UTF-8 instead of decoding lossily.
    pub strict_utf8: bool,
    /// Read and score matched pairs on the rayon pool.
    pub parallel: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ignore_patterns: Vec::new(),
            image_extensions: DEFAULT_IMAGE_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            strict_utf8: false,
            parallel: true,
        }
    }
}

/// Load `Config.toml` from the working directory (optional), overlaid with
/// `SIMDIR_*` environment variables.
pub fn load_configuration() -> Result<AppConfig, ConfigError> {
    load_configuration_from("Config")
}

pub fn load_configuration_from(name: &str) -> Result<AppConfig, ConfigError> {
    let builder = Config::builder()
        .add_source(ConfigFile::with_name(name).required(false))
        .add_source(
            Environment::with_prefix("SIMDIR")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("ignore_patterns")
                .with_list_parse_key("image_extensions"),
        )
        .build()?;
    builder.try_deserialize::<AppConfig>()
}
