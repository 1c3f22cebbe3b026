use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::asset::AssetCatalog;
use crate::models::transaction::Transaction;

/// Manages the transaction ledger: validated create, full replacement, and
/// removal of records.
///
/// This is the boundary the valuation engine trusts — a record that fails
/// numeric sanity or references an unknown symbol never enters the ledger.
pub struct LedgerService;

impl LedgerService {
    pub fn new() -> Self {
        Self
    }

    /// Append a new transaction after validation. Insertion order is the
    /// ledger order the engine consumes.
    pub fn add(
        &self,
        ledger: &mut Vec<Transaction>,
        catalog: &AssetCatalog,
        tx: Transaction,
    ) -> Result<(), CoreError> {
        self.validate(catalog, &tx)?;
        ledger.push(tx);
        Ok(())
    }

    /// Replace an existing transaction wholesale, matched by `id`.
    /// Validates the replacement before committing.
    pub fn replace(
        &self,
        ledger: &mut [Transaction],
        catalog: &AssetCatalog,
        tx: Transaction,
    ) -> Result<(), CoreError> {
        self.validate(catalog, &tx)?;
        let slot = ledger
            .iter_mut()
            .find(|t| t.id == tx.id)
            .ok_or_else(|| CoreError::TransactionNotFound(tx.id.to_string()))?;
        *slot = tx;
        Ok(())
    }

    /// Remove a transaction by its id.
    pub fn remove(&self, ledger: &mut Vec<Transaction>, id: Uuid) -> Result<(), CoreError> {
        let idx = ledger
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| CoreError::TransactionNotFound(id.to_string()))?;
        ledger.remove(idx);
        Ok(())
    }

    /// All transactions, newest purchase first (for display listings).
    pub fn transactions_for_display<'a>(&self, ledger: &'a [Transaction]) -> Vec<&'a Transaction> {
        let mut txs: Vec<&Transaction> = ledger.iter().collect();
        txs.sort_by(|a, b| b.buy_datetime.cmp(&a.buy_datetime));
        txs
    }

    /// Basic numeric sanity plus symbol resolution. Rules:
    /// - quantity and unit price must be positive
    /// - fees must be non-negative
    /// - the symbol must resolve in the asset catalog
    fn validate(&self, catalog: &AssetCatalog, tx: &Transaction) -> Result<(), CoreError> {
        if tx.quantity <= 0.0 {
            return Err(CoreError::ValidationError(
                "Transaction quantity must be positive".into(),
            ));
        }
        if tx.buy_price_per_unit <= 0.0 {
            return Err(CoreError::ValidationError(
                "Buy price per unit must be positive".into(),
            ));
        }
        if tx.fees_toman < 0.0 {
            return Err(CoreError::ValidationError(
                "Transaction fees must not be negative".into(),
            ));
        }
        if !catalog.contains(&tx.asset_symbol) {
            return Err(CoreError::ValidationError(format!(
                "Asset symbol '{}' is not in the catalog",
                tx.asset_symbol
            )));
        }
        Ok(())
    }
}

impl Default for LedgerService {
    fn default() -> Self {
        Self::new()
    }
}
