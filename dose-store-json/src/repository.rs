use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use dose_core::{
    DoseRepository, RepositoryError,
    models::{NewSavedCalculation, SavedCalculation},
};
use tracing::debug;

use crate::document::StoreDocument;

/// File-backed repository: the whole store is one JSON document that is
/// read before and rewritten after every mutation.
///
/// Access is process-local and last-write-wins, which is all the
/// calculator needs; there is no locking and no partial update.
pub struct JsonRepository {
    path: PathBuf,
}

impl JsonRepository {
    /// Wraps a store path without touching the filesystem. The file is
    /// created on the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Wraps a store path and validates it by loading the document once,
    /// so a corrupt or unreadable file fails at startup rather than on the
    /// first save.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, RepositoryError> {
        let repo = Self::new(path);
        repo.load_document()?;
        Ok(repo)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_document(&self) -> Result<StoreDocument, RepositoryError> {
        if !self.path.exists() {
            return Ok(StoreDocument::default());
        }
        let raw = fs::read_to_string(&self.path).map_err(|e| {
            RepositoryError::Storage(format!("cannot read '{}': {e}", self.path.display()))
        })?;
        serde_json::from_str(&raw).map_err(|e| {
            RepositoryError::Serialization(format!(
                "invalid store document '{}': {e}",
                self.path.display()
            ))
        })
    }

    fn store_document(
        &self,
        doc: &StoreDocument,
    ) -> Result<(), RepositoryError> {
        let raw = serde_json::to_string_pretty(doc)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;
        fs::write(&self.path, raw).map_err(|e| {
            RepositoryError::Storage(format!("cannot write '{}': {e}", self.path.display()))
        })
    }
}

#[async_trait]
impl DoseRepository for JsonRepository {
    async fn age_verified(&self) -> Result<bool, RepositoryError> {
        Ok(self.load_document()?.age_verified)
    }

    async fn set_age_verified(
        &self,
        verified: bool,
    ) -> Result<(), RepositoryError> {
        let mut doc = self.load_document()?;
        doc.age_verified = verified;
        self.store_document(&doc)
    }

    async fn list_calculations(&self) -> Result<Vec<SavedCalculation>, RepositoryError> {
        Ok(self.load_document()?.calculations)
    }

    async fn append_calculation(
        &self,
        calc: NewSavedCalculation,
    ) -> Result<SavedCalculation, RepositoryError> {
        let mut doc = self.load_document()?;
        let record = SavedCalculation {
            id: doc.next_id(),
            input: calc.input,
            result: calc.result,
            created_at: Utc::now(),
        };
        doc.calculations.push(record.clone());
        self.store_document(&doc)?;
        debug!(id = record.id, total = doc.calculations.len(), "calculation saved");
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use dose_core::calculations::DosageCalculator;
    use dose_core::models::{FatType, InfusionInput, InfusionProfile};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn test_store() -> (tempfile::TempDir, JsonRepository) {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let repo = JsonRepository::new(dir.path().join("dosage.json"));
        (dir, repo)
    }

    fn sample_calculation() -> NewSavedCalculation {
        let input = InfusionInput {
            herb_mass_g: dec!(3.5),
            herb_potency_pct: dec!(20),
            fat_mass_g: dec!(100),
            fat_type: FatType::Butter,
            servings: 12,
        };
        let profile = InfusionProfile::default();
        let result = DosageCalculator::new(&profile)
            .calculate(&input)
            .expect("Sample calculation should succeed");
        NewSavedCalculation { input, result }
    }

    #[tokio::test]
    async fn absent_file_reads_as_unverified_and_empty() {
        let (_dir, repo) = test_store();

        assert!(!repo.age_verified().await.unwrap());
        assert!(repo.list_calculations().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn verification_flag_round_trips() {
        let (_dir, repo) = test_store();

        repo.set_age_verified(true).await.unwrap();

        assert!(repo.age_verified().await.unwrap());
    }

    #[tokio::test]
    async fn verification_flag_survives_reopening() {
        let (_dir, repo) = test_store();
        repo.set_age_verified(true).await.unwrap();

        let reopened = JsonRepository::open(repo.path()).unwrap();

        assert!(reopened.age_verified().await.unwrap());
    }

    #[tokio::test]
    async fn append_assigns_sequential_ids() {
        let (_dir, repo) = test_store();

        let first = repo.append_calculation(sample_calculation()).await.unwrap();
        let second = repo.append_calculation(sample_calculation()).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn append_preserves_prior_records() {
        let (_dir, repo) = test_store();
        let first = repo.append_calculation(sample_calculation()).await.unwrap();

        repo.append_calculation(sample_calculation()).await.unwrap();

        let all = repo.list_calculations().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0], first);
    }

    #[tokio::test]
    async fn appended_record_matches_calculation() {
        let (_dir, repo) = test_store();
        let calc = sample_calculation();

        let stored = repo.append_calculation(calc.clone()).await.unwrap();

        assert_eq!(stored.input, calc.input);
        assert_eq!(stored.result, calc.result);
        assert_eq!(stored.result.per_serving_mg, dec!(46.7));
    }

    #[tokio::test]
    async fn flag_write_keeps_calculations() {
        let (_dir, repo) = test_store();
        repo.append_calculation(sample_calculation()).await.unwrap();

        repo.set_age_verified(true).await.unwrap();

        assert_eq!(repo.list_calculations().await.unwrap().len(), 1);
    }

    #[test]
    fn open_rejects_corrupt_document() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("dosage.json");
        fs::write(&path, "not json").unwrap();

        let result = JsonRepository::open(&path);

        assert!(matches!(result, Err(RepositoryError::Serialization(_))));
    }
}
