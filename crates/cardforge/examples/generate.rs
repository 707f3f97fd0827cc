//! Card generation example.
//!
//! Generates a few cards for a network and prints them in every export
//! format. Settings come from `cardforge.toml` in the working directory if
//! present, then from `CARDFORGE_*` variables.
//!
//! Run with: `RUST_LOG=cardforge=debug cargo run --example generate --features logging -- amex 3`

use std::path::Path;

use cardforge::logging::{self, LoggingConfig};
use cardforge::{CardGenerator, ExportFormat, Settings, render};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init(&LoggingConfig::new())?;

    let config_path = Path::new("cardforge.toml");
    let settings = Settings::load(config_path.is_file().then_some(config_path))?;

    let mut args = std::env::args().skip(1);
    let network = args
        .next()
        .unwrap_or_else(|| settings.generator.default_network.clone());
    let count: usize = args.next().map_or(Ok(3), |n| n.parse())?;

    let profile = settings.catalog.require(&network)?;
    let mut generator = CardGenerator::from_config(settings.generator.clone());
    let cards = generator.generate_batch(profile, count)?;

    println!("cardforge: {count} x {}", profile.name);
    if profile.mock {
        println!("(mock network shape, no real issuer)");
    }
    println!();

    for card in &cards {
        println!("  {}   masked: {}", card.clipboard_line(), card.masked());
    }

    for format in [ExportFormat::Csv, ExportFormat::Txt, ExportFormat::Json] {
        println!("\n--- {format} ---");
        println!("{}", render(&cards, format)?);
    }

    Ok(())
}
