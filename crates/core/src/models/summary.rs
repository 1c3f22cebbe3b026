use serde::{Deserialize, Serialize};

use super::asset::AssetType;

/// Valuation of a single asset position, derived from the ledger and the
/// current price snapshot. Recomputed in full on every engine call —
/// never partially updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetSummary {
    /// Catalog symbol (e.g., "BTC")
    pub symbol: String,

    /// Display name from the catalog
    pub name: String,

    /// Category from the catalog
    pub asset_type: AssetType,

    /// Sum of quantities across all transactions for this asset
    pub total_quantity: f64,

    /// Current unit price in Toman at snapshot time
    pub current_price_toman: f64,

    /// total_quantity × current_price_toman
    pub current_value_toman: f64,

    /// Sum of per-transaction costs (price × quantity + fees) in Toman
    pub cost_basis_toman: f64,

    /// current_value_toman − cost_basis_toman
    pub pnl_toman: f64,

    /// pnl_toman / cost_basis_toman × 100, or 0 when the cost basis is 0
    pub pnl_percent: f64,

    /// This asset's share of total portfolio value × 100, or 0 when the
    /// portfolio value is 0
    pub allocation_percent: f64,
}

/// Consolidated valuation of the whole portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Total current value in Toman
    pub total_value_toman: f64,

    /// Total amount paid (incl. fees) in Toman
    pub total_cost_basis_toman: f64,

    /// total_value_toman − total_cost_basis_toman
    pub total_pnl_toman: f64,

    /// total_pnl_toman / total_cost_basis_toman × 100, or 0 when the cost
    /// basis is 0
    pub total_pnl_percent: f64,

    /// Per-asset breakdown, sorted descending by current value
    pub assets: Vec<AssetSummary>,
}

impl PortfolioSummary {
    /// The all-zero summary returned for an empty ledger or a missing
    /// price snapshot.
    pub fn empty() -> Self {
        Self {
            total_value_toman: 0.0,
            total_cost_basis_toman: 0.0,
            total_pnl_toman: 0.0,
            total_pnl_percent: 0.0,
            assets: Vec::new(),
        }
    }
}

impl Default for PortfolioSummary {
    fn default() -> Self {
        Self::empty()
    }
}
