//! Runtime settings
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! `GENERATE_INTERFACES_*` environment variables.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::porttab::DEFAULT_PORTTAB_PATH;

/// Settings file consulted when none is given explicitly
pub const DEFAULT_SETTINGS_PATH: &str = "/etc/network/generate-interfaces.toml";

/// Prefix of environment variable overrides
pub const ENV_PREFIX: &str = "GENERATE_INTERFACES";

/// Default location of the ifquery tool
pub const DEFAULT_IFQUERY_PATH: &str = "/sbin/ifquery";

/// Generator settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Port table to enumerate swp ports from
    pub porttab_path: PathBuf,
    /// Tool used to look up existing stanzas when merging
    pub ifquery_path: PathBuf,
    /// Upper bound for a single ifquery run (seconds)
    pub query_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            porttab_path: PathBuf::from(DEFAULT_PORTTAB_PATH),
            ifquery_path: PathBuf::from(DEFAULT_IFQUERY_PATH),
            query_timeout_secs: 30,
        }
    }
}

impl Settings {
    /// Load settings from `path`, or from the default location if present
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        Self::load_with_prefix(path, ENV_PREFIX)
    }

    pub(crate) fn load_with_prefix(
        path: Option<&Path>,
        env_prefix: &str,
    ) -> Result<Self, SettingsError> {
        // An explicitly named file must exist, the default one may not
        let (file, required) = match path {
            Some(path) => (path, true),
            None => (Path::new(DEFAULT_SETTINGS_PATH), false),
        };

        let settings = config::Config::builder()
            .add_source(
                config::File::from(file)
                    .format(config::FileFormat::Toml)
                    .required(required),
            )
            .add_source(config::Environment::with_prefix(env_prefix).try_parsing(true))
            .build()?;

        let settings: Settings = settings.try_deserialize()?;
        settings.validate()?;

        log::debug!("Loaded settings: {:?}", settings);
        Ok(settings)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.query_timeout_secs == 0 {
            return Err(SettingsError::InvalidValue {
                field: "query_timeout_secs".to_string(),
                value: self.query_timeout_secs.to_string(),
            });
        }

        if self.porttab_path.as_os_str().is_empty() {
            return Err(SettingsError::InvalidValue {
                field: "porttab_path".to_string(),
                value: String::new(),
            });
        }

        Ok(())
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_secs)
    }
}
