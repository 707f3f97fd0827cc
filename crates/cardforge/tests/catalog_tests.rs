//! Integration tests for the network catalog and export.

use cardforge::{
    CardGenerator, CardNetworkProfile, CvvLength, ExportFormat, GeneratorConfig, NetworkCatalog,
    render,
};

#[test]
fn builtin_catalog_contents() {
    let catalog = NetworkCatalog::builtin();
    let ids: Vec<&str> = catalog.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(
        ids,
        [
            "visa", "mastercard", "amex", "discover", "jcb", "diners", "unionpay", "maestro",
            "rupay", "mir", "elo", "troy", "alipay", "wechat"
        ]
    );
}

#[test]
fn builtin_shapes() {
    let catalog = NetworkCatalog::builtin();

    let amex = catalog.require("amex").unwrap();
    assert_eq!(amex.prefix, "34");
    assert_eq!(amex.length, 15);
    assert_eq!(amex.group_format, [4, 6, 5]);
    assert_eq!(amex.cvv_length, CvvLength::Four);

    let diners = catalog.require("diners").unwrap();
    assert_eq!(diners.length, 14);
    assert_eq!(diners.group_format, [4, 6, 4]);

    let wechat = catalog.require("wechat").unwrap();
    assert_eq!(wechat.name, "WeChat Pay (Mock)");
    assert!(wechat.mock);
    assert_eq!(wechat.group_format, [4, 4, 4, 4]);
}

#[test]
fn custom_profile_round_trip_through_generator() {
    let mut catalog = NetworkCatalog::new();
    catalog
        .insert(
            CardNetworkProfile::new("long", "Nineteen", "6", 19, [4, 4, 4, 4, 3])
                .cvv_length(CvvLength::Four),
        )
        .unwrap();

    let mut generator = CardGenerator::seeded(21);
    let card = generator.generate_by_id(&catalog, "long").unwrap();
    assert_eq!(card.formatted_number().len(), 19 + 4);
    assert_eq!(card.cvv().len(), 4);
    assert_eq!(catalog.detect(card.digits()).unwrap().id, "long");
}

#[test]
fn export_batch_as_every_format() {
    let catalog = NetworkCatalog::builtin();
    let mut generator =
        CardGenerator::from_config(GeneratorConfig::default().seed(22).reference_year(2026));
    let cards = generator
        .generate_batch(catalog.require("jcb").unwrap(), 5)
        .unwrap();

    let csv = render(&cards, ExportFormat::Csv).unwrap();
    assert_eq!(csv.lines().count(), 6);
    assert!(csv.lines().skip(1).all(|l| l.starts_with("\"jcb\",\"35")));

    let txt = render(&cards, ExportFormat::Txt).unwrap();
    assert_eq!(txt.lines().count(), 6);

    let json = render(&cards, ExportFormat::Json).unwrap();
    let parsed: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.len(), 5);
    for (value, card) in parsed.iter().zip(&cards) {
        assert_eq!(value["formatted_number"], card.formatted_number());
        assert_eq!(value["cvv"], card.cvv());
    }
}

#[test]
fn clipboard_line_shape() {
    let catalog = NetworkCatalog::builtin();
    let card = CardGenerator::seeded(23)
        .generate_by_id(&catalog, "amex")
        .unwrap();

    let line = card.clipboard_line();
    let parts: Vec<&str> = line.split(" | ").collect();
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0], card.formatted_number());
    assert_eq!(parts[1].len(), 5);
    assert_eq!(&parts[1][2..3], "/");
    assert_eq!(parts[2].len(), 4);
}
