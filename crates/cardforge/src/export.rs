//! Rendering batches of generated cards for copy or download.

use std::fmt;
use std::str::FromStr;

use crate::error::{CardError, Result};
use crate::generator::GeneratedCard;

/// Column headers shared by the CSV and TXT renderings.
pub const HEADERS: [&str; 4] = ["Network", "Number", "Expiry", "CVV"];

/// Export format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated, every value quoted.
    #[default]
    Csv,
    /// Pretty-printed JSON array.
    Json,
    /// Tab-separated plain text.
    Txt,
}

impl ExportFormat {
    /// File extension for this format.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Txt => "txt",
        }
    }

    /// MIME type for this format.
    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Csv => "text/csv",
            Self::Json => "application/json",
            Self::Txt => "text/plain",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "txt" | "text" => Ok(Self::Txt),
            other => Err(CardError::config(format!("unknown export format: {other}"))),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

fn row(card: &GeneratedCard) -> [String; 4] {
    [
        card.network().to_string(),
        card.formatted_number().to_string(),
        card.expiry(),
        card.cvv().to_string(),
    ]
}

/// Render cards in the given format.
///
/// An empty batch renders to an empty string.
pub fn render(cards: &[GeneratedCard], format: ExportFormat) -> Result<String> {
    if cards.is_empty() {
        return Ok(String::new());
    }

    let content = match format {
        ExportFormat::Csv => {
            let mut lines = vec![HEADERS.join(",")];
            lines.extend(cards.iter().map(|card| {
                row(card)
                    .iter()
                    .map(|value| format!("\"{}\"", value.replace('"', "\"\"")))
                    .collect::<Vec<_>>()
                    .join(",")
            }));
            lines.join("\n")
        }
        ExportFormat::Json => serde_json::to_string_pretty(cards)?,
        ExportFormat::Txt => {
            let mut lines = vec![HEADERS.join("\t")];
            lines.extend(cards.iter().map(|card| row(card).join("\t")));
            lines.join("\n")
        }
    };

    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::generator::CardGenerator;
    use crate::network::NetworkCatalog;

    fn cards(n: usize) -> Vec<GeneratedCard> {
        let catalog = NetworkCatalog::builtin();
        let mut generator =
            CardGenerator::from_config(GeneratorConfig::default().seed(11).reference_year(2026));
        generator
            .generate_batch(catalog.require("visa").unwrap(), n)
            .unwrap()
    }

    #[test]
    fn empty_batch_renders_nothing() {
        assert_eq!(render(&[], ExportFormat::Csv).unwrap(), "");
        assert_eq!(render(&[], ExportFormat::Json).unwrap(), "");
    }

    #[test]
    fn csv_layout() {
        let cards = cards(2);
        let out = render(&cards, ExportFormat::Csv).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Network,Number,Expiry,CVV");
        assert_eq!(
            lines[1],
            format!(
                "\"visa\",\"{}\",\"{}\",\"{}\"",
                cards[0].formatted_number(),
                cards[0].expiry(),
                cards[0].cvv()
            )
        );
    }

    #[test]
    fn txt_layout() {
        let cards = cards(1);
        let out = render(&cards, ExportFormat::Txt).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Network\tNumber\tExpiry\tCVV");
        assert_eq!(lines[1].split('\t').count(), 4);
    }

    #[test]
    fn json_layout() {
        let cards = cards(3);
        let out = render(&cards, ExportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 3);
        assert_eq!(array[0]["digits"], cards[0].digits());
        assert_eq!(array[0]["network"], "visa");
        assert!(array[0].get("group_format").is_none());
    }

    #[test]
    fn format_parsing() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("text".parse::<ExportFormat>().unwrap(), ExportFormat::Txt);
        assert!("xml".parse::<ExportFormat>().is_err());
        assert_eq!(ExportFormat::Json.to_string(), "json");
        assert_eq!(ExportFormat::Csv.mime_type(), "text/csv");
    }
}
