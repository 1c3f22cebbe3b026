use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The currency a purchase price was recorded in.
///
/// Closed enum: cost-basis conversion matches exhaustively on it, so a new
/// settlement currency is a compile-time-checked extension point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuyCurrency {
    /// Home currency — the transaction cost needs no conversion
    Toman,
    /// US dollar — converted with the snapshot's USD rate at valuation time
    Usd,
}

impl std::fmt::Display for BuyCurrency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuyCurrency::Toman => write!(f, "Toman"),
            BuyCurrency::Usd => write!(f, "USD"),
        }
    }
}

/// A single buy transaction in the ledger.
///
/// Immutable once created — edits go through full replacement by `id`.
/// The ledger boundary validates the numeric fields before a record is
/// accepted; the valuation engine assumes well-formed input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, assigned at creation, never reused
    pub id: Uuid,

    /// Key into the asset catalog, uppercased (e.g., "BTC", "GOLD18")
    pub asset_symbol: String,

    /// Units of the asset bought (always positive)
    pub quantity: f64,

    /// Price paid per unit, denominated in `buy_currency` (always positive)
    pub buy_price_per_unit: f64,

    /// Currency the unit price was recorded in
    pub buy_currency: BuyCurrency,

    /// Transaction fee, already expressed in Toman (non-negative)
    pub fees_toman: f64,

    /// When the purchase happened. Informational: used for display
    /// ordering, never for valuation.
    pub buy_datetime: DateTime<Utc>,
}

impl Transaction {
    pub fn new(
        asset_symbol: impl Into<String>,
        quantity: f64,
        buy_price_per_unit: f64,
        buy_currency: BuyCurrency,
        fees_toman: f64,
        buy_datetime: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            asset_symbol: asset_symbol.into().to_uppercase(),
            quantity,
            buy_price_per_unit,
            buy_currency,
            fees_toman,
            buy_datetime,
        }
    }
}
