use thiserror::Error;

/// Unified error type for the toman-portfolio-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Business Logic ──────────────────────────────────────────────
    #[error("Transaction validation failed: {0}")]
    ValidationError(String),

    #[error("Transaction not found: {0}")]
    TransactionNotFound(String),

    /// A ledger transaction references a symbol absent from the asset
    /// catalog. Fatal inside the engine: defaulting silently would corrupt
    /// cost-basis totals undetected.
    #[error("Unknown asset symbol: {0}")]
    UnknownAsset(String),

    // ── Serialization ───────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
