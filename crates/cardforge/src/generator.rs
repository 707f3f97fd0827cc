//! Synthetic card generation.
//!
//! A card is built in one pass: the issuer prefix is padded with uniform
//! random digits up to one short of the profile length, the Luhn check digit
//! is appended, the digits are grouped for display, and a plausible expiry
//! and CVV are drawn. The numbers are meant for test fixtures only; the
//! randomness is not cryptographic.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::config::GeneratorConfig;
use crate::error::{CardError, Result};
use crate::format;
use crate::luhn;
use crate::network::{CardNetworkProfile, NetworkCatalog};

/// A generated card. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedCard {
    network: String,
    digits: String,
    formatted_number: String,
    expiry_month: String,
    expiry_year: String,
    cvv: String,
    #[serde(skip)]
    group_format: Vec<usize>,
}

impl GeneratedCard {
    /// Id of the profile the card was generated from.
    #[must_use]
    pub fn network(&self) -> &str {
        &self.network
    }

    /// The bare digit string, check digit included.
    #[must_use]
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// The digits split into display groups separated by single spaces.
    #[must_use]
    pub fn formatted_number(&self) -> &str {
        &self.formatted_number
    }

    /// Two-digit month, `"01"` through `"12"`.
    #[must_use]
    pub fn expiry_month(&self) -> &str {
        &self.expiry_month
    }

    /// Last two digits of the expiry year.
    #[must_use]
    pub fn expiry_year(&self) -> &str {
        &self.expiry_year
    }

    /// Verification code, three or four digits.
    #[must_use]
    pub fn cvv(&self) -> &str {
        &self.cvv
    }

    /// Expiry as printed on a card, `MM/YY`.
    #[must_use]
    pub fn expiry(&self) -> String {
        format!("{}/{}", self.expiry_month, self.expiry_year)
    }

    /// The number with all but the last four digits hidden.
    #[must_use]
    pub fn masked(&self) -> String {
        format::mask(&self.digits, &self.group_format)
    }

    /// Single-line rendering for the clipboard: `number | MM/YY | cvv`.
    #[must_use]
    pub fn clipboard_line(&self) -> String {
        format!("{} | {} | {}", self.formatted_number, self.expiry(), self.cvv)
    }
}

/// Generates cards from network profiles.
///
/// The generator owns its random source. Use [`CardGenerator::new`] for the
/// thread-local RNG or [`CardGenerator::from_config`] / [`CardGenerator::seeded`]
/// for a seedable one.
#[derive(Debug)]
pub struct CardGenerator<R = ThreadRng> {
    config: GeneratorConfig,
    rng: R,
}

impl CardGenerator<ThreadRng> {
    /// Create a generator with default configuration and the thread RNG.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(GeneratorConfig::default(), rand::rng())
    }

    /// Create a generator with custom configuration and the thread RNG.
    ///
    /// `config.seed` is ignored; use [`CardGenerator::from_config`] to honor it.
    #[must_use]
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self::with_rng(config, rand::rng())
    }
}

impl Default for CardGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl CardGenerator<StdRng> {
    /// Create a generator seeded from `config.seed`, or from the OS when no
    /// seed is set.
    #[must_use]
    pub fn from_config(config: GeneratorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config, rng)
    }

    /// Create a reproducible generator with default configuration.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::from_config(GeneratorConfig::default().seed(seed))
    }
}

impl<R: Rng> CardGenerator<R> {
    /// Create a generator around an existing random source.
    #[must_use]
    pub const fn with_rng(config: GeneratorConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate one card.
    ///
    /// Fails with [`CardError::InvalidProfile`] if the profile is malformed;
    /// nothing else can go wrong.
    pub fn generate(&mut self, profile: &CardNetworkProfile) -> Result<GeneratedCard> {
        profile.validate()?;
        let year = self.config.current_year();
        Ok(self.build(profile, year))
    }

    /// Generate one card for the network with the given id.
    pub fn generate_by_id(&mut self, catalog: &NetworkCatalog, id: &str) -> Result<GeneratedCard> {
        let profile = catalog.require(id)?;
        self.generate(profile)
    }

    /// Generate one card for the configured default network.
    pub fn generate_default(&mut self, catalog: &NetworkCatalog) -> Result<GeneratedCard> {
        let id = self.config.default_network.clone();
        self.generate_by_id(catalog, &id)
    }

    /// Generate `count` independent cards.
    pub fn generate_batch(
        &mut self,
        profile: &CardNetworkProfile,
        count: usize,
    ) -> Result<Vec<GeneratedCard>> {
        if count > self.config.max_batch {
            return Err(CardError::BatchTooLarge {
                requested: count,
                max: self.config.max_batch,
            });
        }
        profile.validate()?;

        tracing::debug!(network = %profile.id, count, "generating batch");
        let year = self.config.current_year();
        Ok((0..count).map(|_| self.build(profile, year)).collect())
    }

    /// Generate only the Luhn-valid digit string.
    pub fn number(&mut self, profile: &CardNetworkProfile) -> Result<String> {
        profile.validate()?;
        Ok(luhn_number(&mut self.rng, &profile.prefix, profile.length))
    }

    fn build(&mut self, profile: &CardNetworkProfile, current_year: i32) -> GeneratedCard {
        let digits = luhn_number(&mut self.rng, &profile.prefix, profile.length);
        let formatted_number = format::group(&digits, &profile.group_format);

        let month: u8 = self.rng.random_range(1..=12);
        let offset = i32::from(self.rng.random_range(0..=self.config.expiry_window_years));
        // Reduce first so no reference year can overflow.
        let year = (current_year.rem_euclid(100) + offset) % 100;
        let cvv: u16 = self.rng.random_range(profile.cvv_length.value_range());

        tracing::debug!(
            network = %profile.id,
            length = profile.length,
            "generated card"
        );

        GeneratedCard {
            network: profile.id.clone(),
            digits,
            formatted_number,
            expiry_month: format!("{month:02}"),
            expiry_year: format!("{year:02}"),
            cvv: cvv.to_string(),
            group_format: profile.group_format.clone(),
        }
    }
}

/// Generate one card with the thread-local RNG and default configuration.
pub fn generate(profile: &CardNetworkProfile) -> Result<GeneratedCard> {
    CardGenerator::new().generate(profile)
}

/// Pad `prefix` with random digits to `length - 1` and append the check digit.
fn luhn_number<R: Rng + ?Sized>(rng: &mut R, prefix: &str, length: usize) -> String {
    let mut digits: Vec<u8> = prefix.bytes().map(|b| b - b'0').collect();
    while digits.len() < length.saturating_sub(1) {
        digits.push(rng.random_range(0..10));
    }
    digits.push(luhn::check_digit(&digits));

    digits.iter().map(|&d| char::from(b'0' + d)).collect()
}
