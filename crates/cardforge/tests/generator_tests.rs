//! Integration tests for card generation across the built-in catalog.

use cardforge::{
    CardGenerator, CardNetworkProfile, CvvLength, GeneratorConfig, NetworkCatalog, format, luhn,
};

const RUNS_PER_PROFILE: usize = 10_000;
const REFERENCE_YEAR: i32 = 2026;

fn generator(seed: u64) -> CardGenerator<rand::rngs::StdRng> {
    CardGenerator::from_config(
        GeneratorConfig::default()
            .seed(seed)
            .reference_year(REFERENCE_YEAR)
            .max_batch(RUNS_PER_PROFILE),
    )
}

#[test]
fn every_profile_holds_invariants() {
    let catalog = NetworkCatalog::builtin();
    let mut generator = generator(2024);

    for profile in &catalog {
        let cards = generator.generate_batch(profile, RUNS_PER_PROFILE).unwrap();
        assert_eq!(cards.len(), RUNS_PER_PROFILE);

        for card in &cards {
            let digits = card.digits();
            assert_eq!(digits.len(), profile.length, "{}: {digits}", profile.id);
            assert!(digits.starts_with(&profile.prefix), "{}: {digits}", profile.id);
            assert!(digits.bytes().all(|b| b.is_ascii_digit()));
            assert!(luhn::is_valid(digits), "{}: {digits} fails Luhn", profile.id);

            assert_eq!(card.formatted_number().replace(' ', ""), digits);
            let groups: Vec<usize> = card.formatted_number().split(' ').map(str::len).collect();
            assert_eq!(groups, profile.group_format);

            let month: u32 = card.expiry_month().parse().unwrap();
            assert!((1..=12).contains(&month));
            assert_eq!(card.expiry_month().len(), 2);

            let year: i32 = format!("20{}", card.expiry_year()).parse().unwrap();
            assert!((REFERENCE_YEAR..=REFERENCE_YEAR + 4).contains(&year));

            assert_eq!(card.cvv().len(), profile.cvv_length.digits());
            assert!(card.cvv().bytes().all(|b| b.is_ascii_digit()));
        }
    }
}

#[test]
fn visa_scenario() {
    let profile = CardNetworkProfile::new("visa", "Visa", "4", 16, [4, 4, 4, 4]);
    let card = generator(1).generate(&profile).unwrap();

    assert_eq!(card.digits().len(), 16);
    assert!(card.digits().starts_with('4'));
    assert!(luhn::is_valid(card.digits()));
    assert_eq!(
        format::group("4532015112830366", &profile.group_format),
        "4532 0151 1283 0366"
    );
}

#[test]
fn amex_scenario() {
    let profile = CardNetworkProfile::new("amex", "American Express", "34", 15, [4, 6, 5])
        .cvv_length(CvvLength::Four);
    let card = generator(2).generate(&profile).unwrap();

    assert_eq!(card.digits().len(), 15);
    assert!(card.digits().starts_with("34"));
    assert!(luhn::is_valid(card.digits()));
    assert_eq!(card.cvv().len(), 4);

    let cvv: u16 = card.cvv().parse().unwrap();
    assert!((1000..=9999).contains(&cvv));
}

#[test]
fn discover_scenario() {
    let catalog = NetworkCatalog::builtin();
    let card = generator(3).generate_by_id(&catalog, "discover").unwrap();

    assert_eq!(card.digits().len(), 16);
    assert!(card.digits().starts_with("6011"));
    assert!(luhn::is_valid(card.digits()));
}

#[test]
fn formatting_is_deterministic() {
    let card = generator(4).generate(&CardNetworkProfile::new("v", "V", "4", 16, [4, 4, 4, 4])).unwrap();
    let again = format::group(card.digits(), &[4, 4, 4, 4]);
    assert_eq!(again, card.formatted_number());
}

#[test]
fn consecutive_cards_differ() {
    let catalog = NetworkCatalog::builtin();
    let profile = catalog.require("mastercard").unwrap();
    let mut generator = CardGenerator::new();

    let first = generator.generate(profile).unwrap();
    let second = generator.generate(profile).unwrap();
    // 14 random digits; a collision is a 1 in 10^14 event.
    assert_ne!(first.digits(), second.digits());
}

#[test]
fn generated_numbers_detect_back_to_their_network() {
    let catalog = NetworkCatalog::builtin();
    let mut generator = generator(5);

    for profile in &catalog {
        for _ in 0..50 {
            let card = generator.generate(profile).unwrap();
            let detected = catalog.detect(card.formatted_number()).unwrap();
            // A Visa number may start with 4011 and read as Elo, a RuPay
            // number with 6011 and read as Discover.
            assert!(
                detected.id == profile.id || detected.prefix.starts_with(&profile.prefix),
                "{} detected as {}",
                card.digits(),
                detected.id
            );
            assert_eq!(detected.length, profile.length);
        }
    }
}

#[test]
fn malformed_profiles_rejected() {
    let mut generator = generator(6);

    let cases = [
        CardNetworkProfile::new("a", "A", "4", 16, [4, 4, 4]),
        CardNetworkProfile::new("b", "B", "4444444444444444", 16, [4, 4, 4, 4]),
        CardNetworkProfile::new("c", "C", "", 16, [4, 4, 4, 4]),
        CardNetworkProfile::new("d", "D", "4x", 16, [4, 4, 4, 4]),
    ];

    for profile in &cases {
        let err = generator.generate(profile).unwrap_err();
        assert!(err.is_invalid_profile(), "{} accepted", profile.id);
    }
}
