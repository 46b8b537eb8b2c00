use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Raw README of the ShuntRules repository.
pub const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/luestr/ShuntRules/main/README.md";

/// Output location relative to the directory holding the executable.
pub const DEFAULT_OUTPUT_DIR: &str = "public";
pub const OUTPUT_FILE_NAME: &str = "loon-rules.json";

/// Export settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// README to fetch
    #[serde(default = "default_source_url")]
    pub source_url: String,
    /// Local README to read instead of fetching `source_url`
    #[serde(default)]
    pub source_file: Option<PathBuf>,
    /// Destination file; defaults to `<exe dir>/public/loon-rules.json`
    #[serde(default)]
    pub output_path: Option<PathBuf>,
    /// HTTP timeout in seconds. Unset means the request may block indefinitely.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source_url: default_source_url(),
            source_file: None,
            output_path: None,
            timeout_secs: None,
        }
    }
}

fn default_source_url() -> String {
    DEFAULT_SOURCE_URL.to_string()
}

/// `<dir of the running executable>/public/loon-rules.json`, falling back to
/// the working directory when the executable path cannot be determined.
pub fn default_output_path() -> PathBuf {
    let base = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.to_path_buf()))
        .unwrap_or_default();
    base.join(DEFAULT_OUTPUT_DIR).join(OUTPUT_FILE_NAME)
}

impl Settings {
    /// Load settings from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with LOON_RULES__ prefix
    /// 2. loon-rules.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: LOON_RULES__OUTPUT_PATH
    pub fn load() -> Result<Self, ConfigError> {
        load_settings()
    }

    pub fn resolved_output_path(&self) -> PathBuf {
        self.output_path.clone().unwrap_or_else(default_output_path)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Load settings from file and environment variables
pub fn load_settings() -> Result<Settings, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("loon-rules").required(false))
        .add_source(
            Environment::with_prefix("LOON_RULES")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
