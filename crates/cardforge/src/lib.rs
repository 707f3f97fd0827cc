//! cardforge: Luhn-valid synthetic payment card numbers
//!
//! This crate generates card numbers that pass the Luhn checksum and match a
//! network's issuer prefix, length, and display grouping, together with a
//! plausible expiry date and CVV. The output is test data only: the numbers
//! belong to no account and carry no monetary value.
//!
//! # Features
//!
//! - **Luhn toolkit**: check-digit computation and validation
//! - **Built-in catalog** of fourteen network shapes, extendable from TOML or JSON
//! - **Reproducible generation** from a seed
//! - **Export** to CSV, JSON, or tab-separated text
//! - **Subscriber setup** for `tracing` output (feature: `logging`)
//!
//! # Example
//!
//! ```rust
//! use cardforge::{CardGenerator, NetworkCatalog, luhn};
//!
//! let catalog = NetworkCatalog::builtin();
//! let mut generator = CardGenerator::new();
//! let card = generator.generate_by_id(&catalog, "amex").unwrap();
//!
//! assert!(card.digits().starts_with("34"));
//! assert!(luhn::is_valid(card.digits()));
//! assert_eq!(card.cvv().len(), 4);
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod format;
pub mod generator;
pub mod luhn;
pub mod network;

/// Subscriber setup.
#[cfg(feature = "logging")]
pub mod logging;

pub use config::{ConfigFormat, ConfigLoader, EnvConfig, GeneratorConfig, Settings};
pub use error::{CardError, Result};
pub use export::{ExportFormat, render};
pub use generator::{CardGenerator, GeneratedCard, generate};
pub use network::{CardNetworkProfile, CvvLength, NetworkCatalog};
