// std imports
use std::include_str;
use std::path::Path;

// third-party imports
use config::{Config, Environment, File, FileFormat};
use nfa::Options;
use serde::{Deserialize, Serialize};

// local imports
use crate::error::Result;

// ---

static DEFAULT_SETTINGS: &str = include_str!("../etc/defaults/config.yaml");

/// Prefix of environment variables overriding settings, e.g. `DOTSTAR_ENGINE__EARLY_EXIT=false`.
pub const ENV_PREFIX: &str = "DOTSTAR";

// ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Settings {
    pub engine: Engine,
}

impl Settings {
    /// Loads settings from the embedded defaults, the given file and the environment,
    /// in that order.
    ///
    /// The file, if given, must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with(path, Self::environment())
    }

    fn load_with(path: Option<&Path>, environment: Environment) -> Result<Self> {
        let defaults = File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml);
        let mut builder = Config::builder().add_source(defaults);
        if let Some(path) = path {
            log::debug!("settings: loading {}", path.display());
            builder = builder.add_source(File::from(path).required(true));
        }

        Ok(builder.add_source(environment).build()?.try_deserialize()?)
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }
}

// ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engine {
    pub early_exit: bool,
}

impl Default for Engine {
    fn default() -> Self {
        Options::default().into()
    }
}

impl From<Options> for Engine {
    fn from(options: Options) -> Self {
        Self {
            early_exit: options.early_exit,
        }
    }
}

impl From<Engine> for Options {
    fn from(engine: Engine) -> Self {
        Options::default().with_early_exit(engine.early_exit)
    }
}
