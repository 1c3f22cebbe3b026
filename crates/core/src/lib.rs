pub mod errors;
pub mod models;
pub mod services;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use errors::CoreError;
use models::{
    asset::AssetCatalog,
    price::{PriceSnapshot, PriceSource},
    summary::{AssetSummary, PortfolioSummary},
    transaction::{BuyCurrency, Transaction},
};
use services::{ledger_service::LedgerService, ranking, valuation_service::ValuationEngine};

/// Main entry point for the portfolio tracker core library.
///
/// Owns the transaction ledger, the latest price snapshot (with any source
/// citations attached to it), and the asset catalog. Summaries are
/// recomputed on demand — there is no caching, so call [`summary`] again
/// after any mutation of the ledger or a price refresh.
///
/// [`summary`]: PortfolioTracker::summary
#[must_use]
pub struct PortfolioTracker {
    transactions: Vec<Transaction>,
    prices: Option<PriceSnapshot>,
    sources: Vec<PriceSource>,
    catalog: AssetCatalog,
    ledger_service: LedgerService,
    engine: ValuationEngine,
}

impl std::fmt::Debug for PortfolioTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioTracker")
            .field("transactions", &self.transactions.len())
            .field("has_prices", &self.prices.is_some())
            .field("sources", &self.sources.len())
            .field("catalog_entries", &self.catalog.len())
            .finish()
    }
}

impl Default for PortfolioTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl PortfolioTracker {
    /// Create an empty tracker with the built-in asset catalog.
    pub fn new() -> Self {
        Self::with_catalog(AssetCatalog::default_catalog())
    }

    /// Create an empty tracker with a caller-provided catalog.
    pub fn with_catalog(catalog: AssetCatalog) -> Self {
        Self {
            transactions: Vec::new(),
            prices: None,
            sources: Vec::new(),
            catalog,
            ledger_service: LedgerService::new(),
            engine: ValuationEngine::new(),
        }
    }

    // ── Transaction Management ──────────────────────────────────────

    /// Record a buy transaction. Returns the assigned id.
    #[allow(clippy::too_many_arguments)]
    pub fn add_transaction(
        &mut self,
        asset_symbol: impl Into<String>,
        quantity: f64,
        buy_price_per_unit: f64,
        buy_currency: BuyCurrency,
        fees_toman: f64,
        buy_datetime: DateTime<Utc>,
    ) -> Result<Uuid, CoreError> {
        let tx = Transaction::new(
            asset_symbol,
            quantity,
            buy_price_per_unit,
            buy_currency,
            fees_toman,
            buy_datetime,
        );
        let id = tx.id;
        self.ledger_service
            .add(&mut self.transactions, &self.catalog, tx)?;
        Ok(id)
    }

    /// Replace an existing transaction wholesale, matched by its id.
    pub fn update_transaction(&mut self, tx: Transaction) -> Result<(), CoreError> {
        self.ledger_service
            .replace(&mut self.transactions, &self.catalog, tx)
    }

    /// Remove a transaction by its id.
    pub fn remove_transaction(&mut self, id: Uuid) -> Result<(), CoreError> {
        self.ledger_service.remove(&mut self.transactions, id)
    }

    /// Get a single transaction by its id.
    #[must_use]
    pub fn get_transaction(&self, id: Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// All transactions in ledger (insertion) order.
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// All transactions, newest purchase first.
    #[must_use]
    pub fn transactions_for_display(&self) -> Vec<&Transaction> {
        self.ledger_service
            .transactions_for_display(&self.transactions)
    }

    /// Transactions for one asset, in ledger order (case-insensitive).
    #[must_use]
    pub fn transactions_for_asset(&self, asset_symbol: &str) -> Vec<&Transaction> {
        let upper = asset_symbol.to_uppercase();
        self.transactions
            .iter()
            .filter(|t| t.asset_symbol == upper)
            .collect()
    }

    #[must_use]
    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    // ── Prices ──────────────────────────────────────────────────────

    /// Install a fresh price snapshot from a direct rate fetch.
    /// Clears any citation sources left over from a previous AI fetch,
    /// since they described the snapshot being replaced.
    pub fn set_prices(&mut self, snapshot: PriceSnapshot) {
        self.prices = Some(snapshot);
        self.sources.clear();
    }

    /// Install a snapshot from an AI-assisted fetch, keeping the source
    /// citations it returned for display.
    pub fn set_prices_with_sources(&mut self, snapshot: PriceSnapshot, sources: Vec<PriceSource>) {
        self.prices = Some(snapshot);
        self.sources = sources;
    }

    #[must_use]
    pub fn prices(&self) -> Option<&PriceSnapshot> {
        self.prices.as_ref()
    }

    /// Citations from the most recent AI-assisted fetch, if any.
    #[must_use]
    pub fn price_sources(&self) -> &[PriceSource] {
        &self.sources
    }

    /// When the current snapshot was fetched.
    #[must_use]
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.prices.as_ref().map(|p| p.fetched_at)
    }

    // ── Valuation ───────────────────────────────────────────────────

    /// Recompute the full portfolio summary from the current ledger and
    /// snapshot. With no snapshot or an empty ledger this is the all-zero
    /// summary, never an error.
    pub fn summary(&self) -> Result<PortfolioSummary, CoreError> {
        self.engine
            .compute(&self.transactions, self.prices.as_ref(), &self.catalog)
    }

    /// The asset with the highest P&L percent in `summary`, if any.
    #[must_use]
    pub fn best_performer<'a>(&self, summary: &'a PortfolioSummary) -> Option<&'a AssetSummary> {
        ranking::best_performer(&summary.assets)
    }

    /// The asset with the lowest P&L percent in `summary`, if any.
    #[must_use]
    pub fn worst_performer<'a>(&self, summary: &'a PortfolioSummary) -> Option<&'a AssetSummary> {
        ranking::worst_performer(&summary.assets)
    }

    /// Filter summary assets by name or symbol substring.
    #[must_use]
    pub fn search_assets<'a>(
        &self,
        summary: &'a PortfolioSummary,
        query: &str,
    ) -> Vec<&'a AssetSummary> {
        ranking::search(&summary.assets, query)
    }

    // ── Catalog ─────────────────────────────────────────────────────

    #[must_use]
    pub fn catalog(&self) -> &AssetCatalog {
        &self.catalog
    }

    // ── Export / Import ─────────────────────────────────────────────

    /// Export the ledger as a JSON string.
    pub fn export_transactions_to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.transactions)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize ledger: {e}")))
    }

    /// Import transactions from a JSON string. Each record is re-validated;
    /// if any record fails, none are added (all-or-nothing).
    /// Returns the number of transactions imported.
    pub fn import_transactions_from_json(&mut self, json: &str) -> Result<usize, CoreError> {
        let incoming: Vec<Transaction> = serde_json::from_str(json)?;
        let count = incoming.len();

        // Phase 1: validate everything against a scratch ledger.
        let mut staged = self.transactions.clone();
        for tx in incoming {
            self.ledger_service.add(&mut staged, &self.catalog, tx)?;
        }

        // Phase 2: all valid — commit.
        self.transactions = staged;
        Ok(count)
    }
}
