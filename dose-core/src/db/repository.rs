use async_trait::async_trait;
use thiserror::Error;

use crate::models::{NewSavedCalculation, SavedCalculation};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("storage error: {0}")]
    Storage(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Persistent store behind the calculator: the age-verification flag and
/// the append-only list of saved calculations.
///
/// Implementations are process-local with last-write-wins semantics; no
/// transactional guarantees are expected beyond writing the whole list
/// back on append.
#[async_trait]
pub trait DoseRepository: Send + Sync {
    // Age verification flag
    /// Reads the persisted verification flag. An absent flag reads as false.
    async fn age_verified(&self) -> Result<bool, RepositoryError>;

    /// Persists the verification flag. The system only ever sets it to true;
    /// nothing clears it.
    async fn set_age_verified(&self, verified: bool) -> Result<(), RepositoryError>;

    // Saved calculations
    async fn list_calculations(&self) -> Result<Vec<SavedCalculation>, RepositoryError>;

    /// Appends one record: loads the existing list, pushes, stores the whole
    /// list back. Returns the stored record with its assigned id and
    /// creation timestamp.
    async fn append_calculation(
        &self,
        calc: NewSavedCalculation,
    ) -> Result<SavedCalculation, RepositoryError>;
}
