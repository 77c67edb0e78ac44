use crate::errors::CoreError;
use crate::models::transaction::TransactionRecord;

/// The sample payload bundled with the library.
const BUNDLED_PAYLOAD: &str = include_str!("../../data/payload.json");

/// Reads transaction payloads into validated [`TransactionRecord`]s.
///
/// Loading is all-or-nothing: one bad record fails the whole payload, so a
/// chart never shows a partial data set.
pub struct TransactionLoader;

impl TransactionLoader {
    /// Parse a JSON array of transactions.
    pub fn load_from_str(json: &str) -> Result<Vec<TransactionRecord>, CoreError> {
        let records: Vec<TransactionRecord> = serde_json::from_str(json)
            .map_err(|e| CoreError::Deserialization(format!("Failed to parse payload: {e}")))?;
        TransactionRecord::validate_all(&records)?;
        tracing::debug!(count = records.len(), "loaded transactions");
        Ok(records)
    }

    /// Parse a JSON array of transactions from raw bytes (e.g. a host resource).
    pub fn load_from_bytes(data: &[u8]) -> Result<Vec<TransactionRecord>, CoreError> {
        let json = std::str::from_utf8(data).map_err(|e| {
            CoreError::Deserialization(format!("Payload is not valid UTF-8: {e}"))
        })?;
        Self::load_from_str(json)
    }

    /// Load transactions from a JSON file on disk (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(
        path: impl AsRef<std::path::Path>,
    ) -> Result<Vec<TransactionRecord>, CoreError> {
        let bytes = std::fs::read(path)?;
        Self::load_from_bytes(&bytes)
    }

    /// Load the sample payload that ships with the library.
    pub fn bundled_sample() -> Result<Vec<TransactionRecord>, CoreError> {
        Self::load_from_str(BUNDLED_PAYLOAD)
    }
}
