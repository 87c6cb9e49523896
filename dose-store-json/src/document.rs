use dose_core::models::SavedCalculation;
use serde::{Deserialize, Serialize};

/// The whole store as one JSON document.
///
/// Both fields default, so an absent file and a file written by an older
/// version read the same way: unverified, no saved calculations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreDocument {
    #[serde(default)]
    pub age_verified: bool,

    #[serde(default)]
    pub calculations: Vec<SavedCalculation>,
}

impl StoreDocument {
    /// Next id for an appended record: one past the highest stored id.
    pub fn next_id(&self) -> i64 {
        self.calculations.iter().map(|c| c.id).max().unwrap_or(0) + 1
    }
}
