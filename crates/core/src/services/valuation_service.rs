use std::collections::HashMap;

use crate::errors::CoreError;
use crate::models::asset::AssetCatalog;
use crate::models::price::PriceSnapshot;
use crate::models::summary::{AssetSummary, PortfolioSummary};
use crate::models::transaction::{BuyCurrency, Transaction};

/// Turns the transaction ledger and the current price snapshot into a
/// consolidated, per-asset and aggregate valuation.
///
/// Pure business logic — no I/O, no internal state. The same inputs always
/// produce the same summary, so the caller simply recomputes after any
/// change to the ledger or snapshot.
pub struct ValuationEngine;

impl ValuationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Value the full portfolio in Toman.
    ///
    /// A missing snapshot or an empty ledger yields the all-zero summary.
    /// A transaction whose symbol is absent from the catalog is a contract
    /// violation and fails with `CoreError::UnknownAsset` — no partial
    /// summary is returned.
    ///
    /// Cost basis: per transaction, `quantity × buy_price_per_unit + fees`,
    /// with USD-denominated prices converted at the snapshot's current USD
    /// rate (the transaction carries no historical rate).
    pub fn compute(
        &self,
        transactions: &[Transaction],
        prices: Option<&PriceSnapshot>,
        catalog: &AssetCatalog,
    ) -> Result<PortfolioSummary, CoreError> {
        let prices = match prices {
            Some(p) if !transactions.is_empty() => p,
            _ => return Ok(PortfolioSummary::empty()),
        };

        let price_map = Self::current_price_map(prices);

        // Fold the ledger into per-asset accumulators. A Vec plus a symbol
        // index keeps first-seen order, which the stable sort below relies
        // on to break value ties in ledger order.
        let mut assets: Vec<AssetSummary> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for tx in transactions {
            let idx = match index.get(&tx.asset_symbol) {
                Some(&idx) => idx,
                None => {
                    let entry = catalog
                        .get(&tx.asset_symbol)
                        .ok_or_else(|| CoreError::UnknownAsset(tx.asset_symbol.clone()))?;
                    let current_price_toman = price_map
                        .get(tx.asset_symbol.as_str())
                        .copied()
                        .unwrap_or(0.0);
                    assets.push(AssetSummary {
                        symbol: tx.asset_symbol.clone(),
                        name: entry.name.clone(),
                        asset_type: entry.asset_type,
                        total_quantity: 0.0,
                        current_price_toman,
                        current_value_toman: 0.0,
                        cost_basis_toman: 0.0,
                        pnl_toman: 0.0,
                        pnl_percent: 0.0,
                        allocation_percent: 0.0,
                    });
                    index.insert(tx.asset_symbol.clone(), assets.len() - 1);
                    assets.len() - 1
                }
            };

            let asset = &mut assets[idx];
            asset.total_quantity += tx.quantity;

            let cost_toman = match tx.buy_currency {
                BuyCurrency::Toman => tx.quantity * tx.buy_price_per_unit + tx.fees_toman,
                BuyCurrency::Usd => {
                    tx.quantity * tx.buy_price_per_unit * prices.usd_to_toman + tx.fees_toman
                }
            };
            asset.cost_basis_toman += cost_toman;
        }

        // Derive per-asset metrics while accumulating portfolio totals.
        let mut total_value = 0.0;
        let mut total_cost = 0.0;

        for asset in &mut assets {
            asset.current_value_toman = asset.total_quantity * asset.current_price_toman;
            asset.pnl_toman = asset.current_value_toman - asset.cost_basis_toman;
            asset.pnl_percent = if asset.cost_basis_toman > 0.0 {
                (asset.pnl_toman / asset.cost_basis_toman) * 100.0
            } else {
                0.0
            };
            total_value += asset.current_value_toman;
            total_cost += asset.cost_basis_toman;
        }

        // Allocation needs the final total, so it gets its own pass.
        for asset in &mut assets {
            asset.allocation_percent = if total_value > 0.0 {
                (asset.current_value_toman / total_value) * 100.0
            } else {
                0.0
            };
        }

        // Largest positions first. sort_by is stable: equal values keep
        // their first-seen ledger order.
        assets.sort_by(|a, b| {
            b.current_value_toman
                .partial_cmp(&a.current_value_toman)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let total_pnl = total_value - total_cost;
        let total_pnl_percent = if total_cost > 0.0 {
            (total_pnl / total_cost) * 100.0
        } else {
            0.0
        };

        Ok(PortfolioSummary {
            total_value_toman: total_value,
            total_cost_basis_toman: total_cost,
            total_pnl_toman: total_pnl,
            total_pnl_percent,
            assets,
        })
    }

    /// Current Toman unit price per symbol: the currency and gold rates map
    /// directly; crypto symbols go through the USD rate. Symbols the
    /// snapshot doesn't cover simply aren't in the map and price at 0.
    fn current_price_map(prices: &PriceSnapshot) -> HashMap<&str, f64> {
        let mut map: HashMap<&str, f64> = HashMap::new();
        map.insert("USD", prices.usd_to_toman);
        map.insert("EUR", prices.eur_to_toman);
        map.insert("GOLD18", prices.gold18_to_toman);
        for (symbol, usd_price) in &prices.crypto_usd_prices {
            map.insert(symbol.as_str(), usd_price * prices.usd_to_toman);
        }
        map
    }
}

impl Default for ValuationEngine {
    fn default() -> Self {
        Self::new()
    }
}
