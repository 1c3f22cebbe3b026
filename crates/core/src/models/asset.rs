use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The category of a tracked asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetType {
    /// Cryptocurrencies (BTC, ETH, USDT, ...) — priced in USD, converted via the USD rate
    Crypto,
    /// Foreign currency holdings (USD, EUR) — priced directly in Toman
    Currency,
    /// Physical gold (18-karat) — priced directly in Toman
    Gold,
}

impl std::fmt::Display for AssetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetType::Crypto => write!(f, "Crypto"),
            AssetType::Currency => write!(f, "Currency"),
            AssetType::Gold => write!(f, "Gold"),
        }
    }
}

/// Display metadata for one catalog symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Human-readable display name (e.g., "بیت‌کوین", "دلار آمریکا")
    pub name: String,

    /// Asset category
    pub asset_type: AssetType,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, asset_type: AssetType) -> Self {
        Self {
            name: name.into(),
            asset_type,
        }
    }
}

/// Read-only lookup table mapping an asset symbol to its display name and
/// category. Passed explicitly into every computation that needs it —
/// never global state — so the engine stays pure and testable.
///
/// Symbols are stored uppercased; lookups uppercase their argument.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetCatalog {
    entries: HashMap<String, CatalogEntry>,
}

impl AssetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The static asset table the original tracker ships with:
    /// two foreign currencies, 18-karat gold, and the common coins.
    pub fn default_catalog() -> Self {
        let mut catalog = Self::new();
        catalog.insert("USD", CatalogEntry::new("دلار آمریکا", AssetType::Currency));
        catalog.insert("EUR", CatalogEntry::new("یورو", AssetType::Currency));
        catalog.insert("GOLD18", CatalogEntry::new("طلای ۱۸ عیار", AssetType::Gold));
        catalog.insert("BTC", CatalogEntry::new("بیت‌کوین", AssetType::Crypto));
        catalog.insert("ETH", CatalogEntry::new("اتریوم", AssetType::Crypto));
        catalog.insert("USDT", CatalogEntry::new("تتر", AssetType::Crypto));
        catalog
    }

    /// Insert or replace an entry. The symbol is uppercased.
    pub fn insert(&mut self, symbol: impl Into<String>, entry: CatalogEntry) {
        self.entries.insert(symbol.into().to_uppercase(), entry);
    }

    pub fn get(&self, symbol: &str) -> Option<&CatalogEntry> {
        self.entries.get(&symbol.to_uppercase())
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.entries.contains_key(&symbol.to_uppercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All known symbols, sorted for deterministic listing.
    pub fn symbols(&self) -> Vec<&str> {
        let mut symbols: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        symbols.sort_unstable();
        symbols
    }
}
