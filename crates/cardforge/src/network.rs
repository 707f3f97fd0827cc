//! Card network profiles.
//!
//! A profile describes the shape of the numbers a network issues: the issuer
//! prefix, the total digit count, how the digits are grouped for display,
//! and how long the verification code is.

pub mod catalog;

use serde::{Deserialize, Serialize};

pub use catalog::NetworkCatalog;

use crate::error::{CardError, Result};

/// Length of the card verification value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum CvvLength {
    /// Three digits, used by most networks.
    #[default]
    Three,
    /// Four digits, used by American Express.
    Four,
}

impl CvvLength {
    /// Number of digits.
    #[must_use]
    pub const fn digits(self) -> usize {
        match self {
            Self::Three => 3,
            Self::Four => 4,
        }
    }

    /// Inclusive range of values with exactly this many digits and no
    /// leading zero.
    #[must_use]
    pub const fn value_range(self) -> std::ops::RangeInclusive<u16> {
        match self {
            Self::Three => 100..=999,
            Self::Four => 1000..=9999,
        }
    }
}

impl TryFrom<u8> for CvvLength {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            other => Err(format!("CVV length must be 3 or 4, got {other}")),
        }
    }
}

impl From<CvvLength> for u8 {
    fn from(value: CvvLength) -> Self {
        value.digits() as Self
    }
}

/// The number shape issued by one card network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardNetworkProfile {
    /// Stable lookup identifier, e.g. `"visa"`.
    pub id: String,
    /// Display label, e.g. `"Visa"`.
    pub name: String,
    /// Issuer prefix every generated number starts with.
    pub prefix: String,
    /// Total digit count, check digit included.
    pub length: usize,
    /// Display group sizes; they sum to `length`.
    pub group_format: Vec<usize>,
    /// Verification code length.
    #[serde(default)]
    pub cvv_length: CvvLength,
    /// Whether this is a fictitious shape with no real issuer behind it.
    #[serde(default)]
    pub mock: bool,
}

impl CardNetworkProfile {
    /// Create a profile with a three-digit CVV.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        prefix: impl Into<String>,
        length: usize,
        group_format: impl Into<Vec<usize>>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            prefix: prefix.into(),
            length,
            group_format: group_format.into(),
            cvv_length: CvvLength::Three,
            mock: false,
        }
    }

    /// Set the CVV length.
    #[must_use]
    pub const fn cvv_length(mut self, cvv_length: CvvLength) -> Self {
        self.cvv_length = cvv_length;
        self
    }

    /// Mark the profile as a mock shape.
    #[must_use]
    pub const fn mock(mut self, mock: bool) -> Self {
        self.mock = mock;
        self
    }

    /// Check the profile's shape rules.
    ///
    /// The identifier must be non-empty, the prefix must be non-empty
    /// decimal digits strictly shorter than `length`, and the group format
    /// must consist of positive sizes summing to `length`.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: String| Err(CardError::invalid_profile(&self.id, reason));

        if self.id.is_empty() {
            return invalid("identifier is empty".to_string());
        }
        if self.prefix.is_empty() {
            return invalid("prefix is empty".to_string());
        }
        if let Some(c) = self.prefix.chars().find(|c| !c.is_ascii_digit()) {
            return invalid(format!("prefix contains non-digit {c:?}"));
        }
        if self.prefix.len() >= self.length {
            return invalid(format!(
                "prefix has {} digits, length is {}",
                self.prefix.len(),
                self.length
            ));
        }
        if self.group_format.is_empty() {
            return invalid("group format is empty".to_string());
        }
        if self.group_format.contains(&0) {
            return invalid("group format contains a zero-sized group".to_string());
        }
        let total: usize = self.group_format.iter().sum();
        if total != self.length {
            return invalid(format!(
                "group format sums to {total}, expected {}",
                self.length
            ));
        }

        Ok(())
    }

    /// Whether a card number, separators ignored, has this profile's prefix
    /// and length.
    #[must_use]
    pub fn matches(&self, number: &str) -> bool {
        let digits = crate::format::strip(number);
        digits.len() == self.length && digits.starts_with(&self.prefix)
    }
}
