use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{DosageResult, InfusionInput};

/// One persisted calculation: the inputs as entered plus the result they
/// produced. Records are append-only and never mutated after storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedCalculation {
    pub id: i64,
    pub input: InfusionInput,
    pub result: DosageResult,
    pub created_at: DateTime<Utc>,
}

/// For saving new calculations (no id or timestamp; the store assigns both).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSavedCalculation {
    pub input: InfusionInput,
    pub result: DosageResult,
}
