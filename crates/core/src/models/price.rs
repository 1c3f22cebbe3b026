use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A snapshot of current market rates, all expressed against the Toman.
///
/// Replaced wholesale on every refresh — never mutated field-by-field —
/// so one snapshot is always internally consistent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSnapshot {
    /// Toman per US dollar
    pub usd_to_toman: f64,

    /// Toman per euro
    pub eur_to_toman: f64,

    /// Toman per gram of 18-karat gold
    pub gold18_to_toman: f64,

    /// USD price per unit, keyed by crypto symbol (e.g., "BTC" → 65000.0)
    pub crypto_usd_prices: HashMap<String, f64>,

    /// When this snapshot was fetched
    pub fetched_at: DateTime<Utc>,
}

impl PriceSnapshot {
    pub fn new(
        usd_to_toman: f64,
        eur_to_toman: f64,
        gold18_to_toman: f64,
        crypto_usd_prices: HashMap<String, f64>,
        fetched_at: DateTime<Utc>,
    ) -> Self {
        Self {
            usd_to_toman,
            eur_to_toman,
            gold18_to_toman,
            crypto_usd_prices,
            fetched_at,
        }
    }
}

/// A citation returned by the AI-assisted price lookup alongside the
/// snapshot. Display-only: the valuation engine never reads these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceSource {
    /// Source page title
    pub title: String,

    /// Link to the source
    pub uri: String,
}

impl PriceSource {
    pub fn new(title: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            uri: uri.into(),
        }
    }
}
