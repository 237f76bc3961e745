use crate::common::Result;
use serde::Deserialize;
use std::path::Path;

/// Default configuration file, looked up in the working directory.
pub const CONFIG_FILE: &str = "sqltutor.toml";
/// Environment variable prefix for overrides, e.g. SQLTUTOR_PROMPT.
pub const ENV_PREFIX: &str = "SQLTUTOR";

/// Terminal front-end settings. The library core never reads these.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct TutorConfig {
    /// The readline prompt.
    pub prompt: String,
    /// Whether to style output with ANSI colors.
    pub color: bool,
    /// Optional readline history file path.
    pub history_file: Option<String>,
}

impl Default for TutorConfig {
    fn default() -> Self {
        Self {
            prompt: "sql> ".to_string(),
            color: true,
            history_file: None,
        }
    }
}

impl TutorConfig {
    /// Loads settings from the default file, if present, plus environment
    /// overrides.
    pub fn load() -> Result<Self> {
        Self::from_file(Path::new(CONFIG_FILE))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}
