//! Configuration types for cardforge.
//!
//! Settings are layered: built-in defaults, then a configuration file
//! (see [`file`]), then `CARDFORGE_*` environment variables (see [`env`]).

pub mod env;
pub mod file;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use env::EnvConfig;
pub use file::{ConfigFormat, ConfigLoader};

use crate::error::Result;
use crate::network::{CardNetworkProfile, NetworkCatalog};

/// Default expiry window: years past the current one an expiry may fall in.
pub const DEFAULT_EXPIRY_WINDOW_YEARS: u8 = 4;

/// Default network used when none is named.
pub const DEFAULT_NETWORK: &str = "visa";

/// Default upper bound on a single batch.
pub const DEFAULT_MAX_BATCH: usize = 10_000;

/// Configuration for a card generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Maximum number of years an expiry may lie past the current year.
    pub expiry_window_years: u8,

    /// Year treated as "now" for expiry synthesis; the local calendar year
    /// when unset.
    pub reference_year: Option<i32>,

    /// Network id used when the caller does not name one.
    pub default_network: String,

    /// Seed for a reproducible generator.
    pub seed: Option<u64>,

    /// Largest batch a single request may ask for.
    pub max_batch: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            expiry_window_years: DEFAULT_EXPIRY_WINDOW_YEARS,
            reference_year: None,
            default_network: DEFAULT_NETWORK.to_string(),
            seed: None,
            max_batch: DEFAULT_MAX_BATCH,
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the expiry window in years.
    #[must_use]
    pub const fn expiry_window_years(mut self, years: u8) -> Self {
        self.expiry_window_years = years;
        self
    }

    /// Pin the year expiry dates are computed from.
    #[must_use]
    pub const fn reference_year(mut self, year: i32) -> Self {
        self.reference_year = Some(year);
        self
    }

    /// Set the default network id.
    #[must_use]
    pub fn default_network(mut self, id: impl Into<String>) -> Self {
        self.default_network = id.into();
        self
    }

    /// Seed the generator for reproducible output.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the batch limit.
    #[must_use]
    pub const fn max_batch(mut self, max: usize) -> Self {
        self.max_batch = max;
        self
    }

    /// The year expiry dates start from.
    #[must_use]
    pub fn current_year(&self) -> i32 {
        use chrono::Datelike;

        self.reference_year
            .unwrap_or_else(|| chrono::Local::now().year())
    }
}

/// Resolved settings: generator configuration plus the network catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Generator configuration.
    pub generator: GeneratorConfig,
    /// Available network profiles.
    pub catalog: NetworkCatalog,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig::default(),
            catalog: NetworkCatalog::builtin(),
        }
    }
}

impl Settings {
    /// Resolve settings from defaults, an optional file, and the process
    /// environment, in increasing precedence.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, &EnvConfig::default())
    }

    /// Like [`Settings::load`] with an explicit environment reader.
    pub fn load_with_env(path: Option<&Path>, env: &EnvConfig) -> Result<Self> {
        let mut settings = match path {
            Some(path) => ConfigLoader::new().load(path)?,
            None => Self::default(),
        };
        settings.generator = env.apply(settings.generator);
        Ok(settings)
    }

    /// The profile named by `generator.default_network`.
    pub fn default_profile(&self) -> Result<&CardNetworkProfile> {
        self.catalog.require(&self.generator.default_network)
    }
}
