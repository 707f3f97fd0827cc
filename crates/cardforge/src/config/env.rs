//! Environment-based configuration.
//!
//! Variables are read as `<PREFIX>_<NAME>`, e.g. `CARDFORGE_NETWORK`.

use std::collections::HashMap;
use std::str::FromStr;

use super::GeneratorConfig;

/// Environment configuration prefix.
pub const DEFAULT_PREFIX: &str = "CARDFORGE";

/// Recognized variable names (without prefix).
pub mod vars {
    /// Default network id.
    pub const NETWORK: &str = "NETWORK";
    /// Expiry window in years.
    pub const EXPIRY_WINDOW: &str = "EXPIRY_WINDOW";
    /// Reference year for expiry dates.
    pub const REFERENCE_YEAR: &str = "REFERENCE_YEAR";
    /// RNG seed.
    pub const SEED: &str = "SEED";
    /// Batch limit.
    pub const MAX_BATCH: &str = "MAX_BATCH";
}

/// Environment variable reader.
#[derive(Debug, Clone)]
pub struct EnvConfig {
    /// Prefix for environment variables.
    prefix: String,
    /// Values that take precedence over the process environment.
    overrides: HashMap<String, String>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

impl EnvConfig {
    /// Create a new environment config reader.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            overrides: HashMap::new(),
        }
    }

    /// Supply a value directly instead of reading it from the process
    /// environment.
    #[must_use]
    pub fn with_value(mut self, name: &str, value: impl Into<String>) -> Self {
        let key = self.var_name(name);
        self.overrides.insert(key, value.into());
        self
    }

    /// Build the full environment variable name.
    fn var_name(&self, name: &str) -> String {
        if self.prefix.is_empty() {
            name.to_uppercase()
        } else {
            format!("{}_{}", self.prefix, name.to_uppercase())
        }
    }

    /// Get a string value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<String> {
        let var_name = self.var_name(name);
        self.overrides
            .get(&var_name)
            .cloned()
            .or_else(|| std::env::var(&var_name).ok())
    }

    /// Get a parsed value; unparseable values are logged and ignored.
    #[must_use]
    pub fn parse<T: FromStr>(&self, name: &str) -> Option<T> {
        let raw = self.get(name)?;
        match raw.trim().parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(
                    variable = %self.var_name(name),
                    value = %raw,
                    "ignoring unparseable environment override"
                );
                None
            }
        }
    }

    /// Check if a variable is set.
    #[must_use]
    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Apply every recognized override to a generator configuration.
    #[must_use]
    pub fn apply(&self, mut config: GeneratorConfig) -> GeneratorConfig {
        if let Some(network) = self.get(vars::NETWORK).filter(|v| !v.trim().is_empty()) {
            config.default_network = network.trim().to_lowercase();
        }
        if let Some(years) = self.parse(vars::EXPIRY_WINDOW) {
            config.expiry_window_years = years;
        }
        if let Some(year) = self.parse(vars::REFERENCE_YEAR) {
            config.reference_year = Some(year);
        }
        if let Some(seed) = self.parse(vars::SEED) {
            config.seed = Some(seed);
        }
        if let Some(max) = self.parse(vars::MAX_BATCH) {
            config.max_batch = max;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_config_prefix() {
        let config = EnvConfig::new("TEST");
        assert_eq!(config.var_name("foo"), "TEST_FOO");
        assert_eq!(config.var_name("bar_baz"), "TEST_BAR_BAZ");
    }

    #[test]
    fn env_config_no_prefix() {
        let config = EnvConfig::new("");
        assert_eq!(config.var_name("foo"), "FOO");
    }

    #[test]
    fn overrides_take_precedence() {
        let env = EnvConfig::new("CARDFORGE_TEST_PRECEDENCE").with_value("seed", "99");
        assert!(env.is_set("SEED"));
        assert_eq!(env.parse::<u64>("SEED"), Some(99));
        assert!(!env.is_set("MISSING"));
    }

    #[test]
    fn apply_overrides() {
        let env = EnvConfig::new("CARDFORGE_TEST_APPLY")
            .with_value(vars::NETWORK, " Amex ")
            .with_value(vars::EXPIRY_WINDOW, "2")
            .with_value(vars::REFERENCE_YEAR, "2030")
            .with_value(vars::SEED, "12345")
            .with_value(vars::MAX_BATCH, "10");

        let config = env.apply(GeneratorConfig::default());
        assert_eq!(config.default_network, "amex");
        assert_eq!(config.expiry_window_years, 2);
        assert_eq!(config.reference_year, Some(2030));
        assert_eq!(config.seed, Some(12345));
        assert_eq!(config.max_batch, 10);
    }

    #[test]
    fn apply_ignores_garbage() {
        let env = EnvConfig::new("CARDFORGE_TEST_GARBAGE")
            .with_value(vars::EXPIRY_WINDOW, "many")
            .with_value(vars::SEED, "-1");

        let config = env.apply(GeneratorConfig::default());
        assert_eq!(config, GeneratorConfig::default());
    }
}
