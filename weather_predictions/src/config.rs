use std::{
    fs,
    path::{Path, PathBuf},
};

use config::{Config, Environment, File, FileFormat};
use directories::ProjectDirs;
use jiff::tz::TimeZone;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use tracing::{debug, warn};
use weather_format::ZonedClock;

use crate::error::ApplicationResult;

const DEFAULT_CONFIG: &str = include_str!("../config.toml");
const ENV_PREFIX: &str = "WEATHER_PREDICTIONS";

pub(crate) fn weather_predictions_project_dir() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "weather_predictions")
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Configurable {
    pub time_zone: Option<String>,
    #[serde(default)]
    pub log_format: LogFormat,
}

/// Which file is layered over the built in defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfigSource<'a> {
    /// A file named on the command line. It must exist.
    Explicit(&'a Path),
    /// The user's config file, created from the defaults when missing.
    User,
    /// No file, only the defaults and the environment.
    BuiltIn,
}

impl Configurable {
    /// Loads the built in defaults, then the file picked by `source`, then
    /// `WEATHER_PREDICTIONS_*` environment variables.
    pub fn load(source: ConfigSource<'_>) -> ApplicationResult<Self> {
        Self::load_with_env(source, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_with_env(source: ConfigSource<'_>, env: Environment) -> ApplicationResult<Self> {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        builder = match source {
            ConfigSource::Explicit(path) => builder.add_source(File::from(path).required(true)),
            ConfigSource::User => match weather_predictions_project_dir() {
                Some(dirs) => {
                    let path = default_config_file(dirs.config_dir())?;
                    builder.add_source(File::from(path).required(false))
                }
                None => {
                    warn!("No config directory for this user, using built in defaults");
                    builder
                }
            },
            ConfigSource::BuiltIn => builder,
        };

        let configurable = builder
            .add_source(env)
            .build()?
            .try_deserialize::<Self>()?;
        debug!(?configurable, "Loaded configuration");
        Ok(configurable)
    }

    pub fn time_zone(&self) -> ApplicationResult<TimeZone> {
        Ok(match &self.time_zone {
            Some(name) => TimeZone::get(name)?,
            None => TimeZone::system(),
        })
    }

    pub fn clock(&self) -> ApplicationResult<ZonedClock> {
        Ok(ZonedClock::new(self.time_zone()?))
    }

    pub fn to_toml(&self) -> ApplicationResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// `config.toml` in `config_dir`, written with the defaults on first use.
fn default_config_file(config_dir: &Path) -> ApplicationResult<PathBuf> {
    let config_file = config_dir.join("config.toml");
    if !config_file.exists() {
        debug!("Creating default config file at {:?}", config_file);
        fs::create_dir_all(config_dir)?;
        fs::write(&config_file, DEFAULT_CONFIG)?;
    }
    Ok(config_file)
}
