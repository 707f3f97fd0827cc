//! The catalog of known network profiles.

use serde::Deserialize;

use super::{CardNetworkProfile, CvvLength};
use crate::error::{CardError, Result};
use crate::format;

const STANDARD_GROUPS: [usize; 4] = [4, 4, 4, 4];

/// Built-in profile data: id, name, prefix, length, groups, CVV length, mock.
type BuiltinEntry = (
    &'static str,
    &'static str,
    &'static str,
    usize,
    &'static [usize],
    CvvLength,
    bool,
);

const BUILTIN: &[BuiltinEntry] = &[
    ("visa", "Visa", "4", 16, &STANDARD_GROUPS, CvvLength::Three, false),
    ("mastercard", "Mastercard", "51", 16, &STANDARD_GROUPS, CvvLength::Three, false),
    ("amex", "American Express", "34", 15, &[4, 6, 5], CvvLength::Four, false),
    ("discover", "Discover", "6011", 16, &STANDARD_GROUPS, CvvLength::Three, false),
    ("jcb", "JCB", "35", 16, &STANDARD_GROUPS, CvvLength::Three, false),
    ("diners", "Diners Club", "36", 14, &[4, 6, 4], CvvLength::Three, false),
    ("unionpay", "UnionPay", "62", 16, &STANDARD_GROUPS, CvvLength::Three, false),
    ("maestro", "Maestro", "5018", 16, &STANDARD_GROUPS, CvvLength::Three, false),
    ("rupay", "RuPay", "60", 16, &STANDARD_GROUPS, CvvLength::Three, false),
    ("mir", "Mir", "2200", 16, &STANDARD_GROUPS, CvvLength::Three, false),
    ("elo", "Elo", "4011", 16, &STANDARD_GROUPS, CvvLength::Three, false),
    ("troy", "Troy", "9792", 16, &STANDARD_GROUPS, CvvLength::Three, false),
    // Fictitious shapes; the prefixes carry no issuer meaning.
    ("alipay", "Alipay (Mock)", "88", 16, &STANDARD_GROUPS, CvvLength::Three, true),
    ("wechat", "WeChat Pay (Mock)", "99", 16, &STANDARD_GROUPS, CvvLength::Three, true),
];

/// An ordered set of network profiles keyed by id.
///
/// Order is insertion order; the first profile is the catalog default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkCatalog {
    profiles: Vec<CardNetworkProfile>,
}

/// On-disk shape of a catalog document.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    networks: Vec<CardNetworkProfile>,
}

impl NetworkCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The fourteen shipped profiles, Visa first.
    #[must_use]
    pub fn builtin() -> Self {
        let profiles = BUILTIN
            .iter()
            .map(|&(id, name, prefix, length, groups, cvv, mock)| {
                CardNetworkProfile::new(id, name, prefix, length, groups)
                    .cvv_length(cvv)
                    .mock(mock)
            })
            .collect();

        Self { profiles }
    }

    /// Built-in profiles with the `[[networks]]` entries of a TOML document
    /// merged over them.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let doc: CatalogDocument = toml::from_str(content)?;
        Self::builtin().merged(doc.networks)
    }

    /// Built-in profiles with the `networks` array of a JSON document
    /// merged over them.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let doc: CatalogDocument = serde_json::from_str(content)?;
        Self::builtin().merged(doc.networks)
    }

    /// Insert every profile, in order.
    pub fn merged(mut self, profiles: impl IntoIterator<Item = CardNetworkProfile>) -> Result<Self> {
        for profile in profiles {
            self.insert(profile)?;
        }
        Ok(self)
    }

    /// Add a profile after validating it.
    ///
    /// A profile whose id is already present replaces the existing entry in
    /// place; otherwise it is appended.
    pub fn insert(&mut self, profile: CardNetworkProfile) -> Result<()> {
        profile.validate()?;

        if let Some(existing) = self.profiles.iter_mut().find(|p| p.id == profile.id) {
            tracing::debug!(network = %profile.id, "replacing catalog profile");
            *existing = profile;
        } else {
            self.profiles.push(profile);
        }

        Ok(())
    }

    /// Look up a profile by id, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CardNetworkProfile> {
        let id = id.trim();
        self.profiles.iter().find(|p| p.id.eq_ignore_ascii_case(id))
    }

    /// Look up a profile by id, failing with [`CardError::UnknownNetwork`].
    pub fn require(&self, id: &str) -> Result<&CardNetworkProfile> {
        self.get(id).ok_or_else(|| CardError::unknown_network(id))
    }

    /// The first profile, if any.
    #[must_use]
    pub fn default_profile(&self) -> Option<&CardNetworkProfile> {
        self.profiles.first()
    }

    /// Iterate over profiles in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &CardNetworkProfile> {
        self.profiles.iter()
    }

    /// Number of profiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Find the network a card number belongs to.
    ///
    /// Separators are ignored. Among profiles whose length equals the digit
    /// count, the one with the longest matching prefix wins, so Elo (`4011`)
    /// is preferred over Visa (`4`). Ties go to the earlier catalog entry.
    #[must_use]
    pub fn detect(&self, number: &str) -> Option<&CardNetworkProfile> {
        let digits = format::strip(number);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        self.profiles
            .iter()
            .filter(|p| p.length == digits.len() && digits.starts_with(&p.prefix))
            .fold(None, |best: Option<&CardNetworkProfile>, p| match best {
                Some(b) if b.prefix.len() >= p.prefix.len() => Some(b),
                _ => Some(p),
            })
    }
}

impl<'a> IntoIterator for &'a NetworkCatalog {
    type Item = &'a CardNetworkProfile;
    type IntoIter = std::slice::Iter<'a, CardNetworkProfile>;

    fn into_iter(self) -> Self::IntoIter {
        self.profiles.iter()
    }
}
