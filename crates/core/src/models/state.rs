use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::CoreError;

use super::chart::{CategoryBar, PieSlice};

/// Bundle key under which a widget stores its own encoded descriptors.
pub const SAVED_STATE_VIEW_KEY: &str = "saved_state_view_key";

/// Persisted pie chart state: only the already-derived slices.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SavedPieState {
    pub pieces: Vec<PieSlice>,
}

/// Persisted category chart state: only the already-derived bars.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SavedCategoryState {
    pub charts: Vec<CategoryBar>,
}

impl SavedPieState {
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string(self)
            .map_err(|e| CoreError::Serialization(format!("Failed to encode pie state: {e}")))
    }

    pub fn from_json(blob: &str) -> Result<Self, CoreError> {
        serde_json::from_str(blob)
            .map_err(|e| CoreError::Deserialization(format!("Failed to decode pie state: {e}")))
    }
}

impl SavedCategoryState {
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string(self)
            .map_err(|e| CoreError::Serialization(format!("Failed to encode category state: {e}")))
    }

    pub fn from_json(blob: &str) -> Result<Self, CoreError> {
        serde_json::from_str(blob).map_err(|e| {
            CoreError::Deserialization(format!("Failed to decode category state: {e}"))
        })
    }
}

/// String-keyed state container handed to the host at save time.
///
/// A widget puts its encoded descriptors under [`SAVED_STATE_VIEW_KEY`] and
/// the host's own opaque state under a widget-specific instance key, so both
/// come back together after the view is recreated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewStateBundle {
    entries: BTreeMap<String, String>,
}

impl ViewStateBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Encode the whole bundle as a JSON object.
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string(self)
            .map_err(|e| CoreError::Serialization(format!("Failed to encode state bundle: {e}")))
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }
}
