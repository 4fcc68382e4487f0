use serde::{Deserialize, Serialize};

/// Placeholder shown for time-to-first-fix. No acquisition-latency
/// measurement exists behind the card, so the value is a fixed literal.
pub const TTFF_PLACEHOLDER: &str = "3 sec";

/// One label/value pair of the card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRow {
    pub label: String,
    pub value: String,
}

impl CardRow {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// The formatted card: two parallel ordered columns of rows.
///
/// Column A carries the positional fields, column B the time and accuracy
/// fields. Row order is fixed; a rendering surface lays the columns out
/// side by side.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationCard {
    pub column_a: Vec<CardRow>,
    pub column_b: Vec<CardRow>,
}
