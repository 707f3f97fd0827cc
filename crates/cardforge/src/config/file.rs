//! File-based configuration loading.
//!
//! A configuration document has an optional `[generator]` table holding
//! [`GeneratorConfig`] fields and an optional `[[networks]]` array of
//! profiles merged over the built-in catalog:
//!
//! ```toml
//! [generator]
//! default_network = "amex"
//! expiry_window_years = 3
//!
//! [[networks]]
//! id = "testnet"
//! name = "Test Network"
//! prefix = "777"
//! length = 16
//! group_format = [4, 4, 4, 4]
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::{GeneratorConfig, Settings};
use crate::error::{CardError, Result};
use crate::network::{CardNetworkProfile, NetworkCatalog};

/// Default configuration file stem searched for by [`ConfigLoader::find`].
pub const DEFAULT_FILE_NAME: &str = "cardforge";

/// Configuration file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML format.
    Toml,
    /// JSON format.
    Json,
}

impl ConfigFormat {
    /// Detect format from file extension.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Detect format from path.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

#[derive(Debug, Deserialize)]
struct SettingsDocument {
    #[serde(default)]
    generator: GeneratorConfig,
    #[serde(default)]
    networks: Vec<CardNetworkProfile>,
}

/// Configuration file loader.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Search paths.
    search_paths: Vec<PathBuf>,
    /// Format used when the extension says nothing.
    default_format: Option<ConfigFormat>,
}

impl ConfigLoader {
    /// Create a new loader.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a search path.
    #[must_use]
    pub fn add_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.search_paths.push(path.into());
        self
    }

    /// Set default format.
    #[must_use]
    pub const fn with_format(mut self, format: ConfigFormat) -> Self {
        self.default_format = Some(format);
        self
    }

    /// Find a config file by exact name or by stem plus a known extension.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<PathBuf> {
        for search_path in &self.search_paths {
            let path = search_path.join(name);
            if path.is_file() {
                return Some(path);
            }

            for ext in ["toml", "json"] {
                let path = search_path.join(format!("{name}.{ext}"));
                if path.is_file() {
                    return Some(path);
                }
            }
        }

        None
    }

    /// Load settings from a file.
    pub fn load(&self, path: &Path) -> Result<Settings> {
        let content = CardError::with_io_context(
            std::fs::read_to_string(path),
            format!("reading {}", path.display()),
        )?;

        let format = ConfigFormat::from_path(path)
            .or(self.default_format)
            .ok_or_else(|| {
                CardError::config(format!("unknown config format: {}", path.display()))
            })?;

        let settings = parse_settings(&content, format)?;
        tracing::info!(
            path = %path.display(),
            networks = settings.catalog.len(),
            "loaded configuration file"
        );
        Ok(settings)
    }

    /// Load by name, searching the configured paths.
    pub fn load_by_name(&self, name: &str) -> Result<Settings> {
        let path = self
            .find(name)
            .ok_or_else(|| CardError::config(format!("config file not found: {name}")))?;
        self.load(&path)
    }
}

/// Parse settings from a document in the given format.
pub fn parse_settings(content: &str, format: ConfigFormat) -> Result<Settings> {
    let doc: SettingsDocument = match format {
        ConfigFormat::Toml => toml::from_str(content)?,
        ConfigFormat::Json => serde_json::from_str(content)?,
    };

    Ok(Settings {
        generator: doc.generator,
        catalog: NetworkCatalog::builtin().merged(doc.networks)?,
    })
}
