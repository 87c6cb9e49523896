use async_trait::async_trait;

use dose_core::db::repository::{DoseRepository, RepositoryError};
use dose_core::db::{RepositoryFactory, StoreConfig};

use crate::repository::JsonRepository;

/// [`RepositoryFactory`] for the JSON file store.
///
/// Register this with a [`dose_core::db::RepositoryRegistry`] to make the
/// `"json"` backend available:
///
/// ```rust,no_run
/// use dose_core::db::RepositoryRegistry;
/// use dose_store_json::JsonRepositoryFactory;
///
/// let mut registry = RepositoryRegistry::new();
/// registry.register(Box::new(JsonRepositoryFactory));
/// ```
pub struct JsonRepositoryFactory;

#[async_trait]
impl RepositoryFactory for JsonRepositoryFactory {
    fn backend_name(&self) -> &'static str {
        "json"
    }

    /// Open the store file named by `config.path`.
    ///
    /// The file does not have to exist yet; it is created on the first
    /// write. A file that exists but does not parse as a store document is
    /// rejected here rather than on the first save.
    async fn create(
        &self,
        config: &StoreConfig,
    ) -> Result<Box<dyn DoseRepository>, RepositoryError> {
        let repo = JsonRepository::open(&config.path)?;
        Ok(Box::new(repo))
    }
}

#[cfg(test)]
mod tests {
    use dose_core::db::{RepositoryFactory, StoreConfig};

    use super::JsonRepositoryFactory;

    #[test]
    fn backend_name_is_json() {
        assert_eq!(JsonRepositoryFactory.backend_name(), "json");
    }

    /// Full round-trip: factory → JsonRepository on a fresh temp path.
    #[tokio::test]
    async fn creates_repository_for_missing_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = StoreConfig {
            backend: "json".to_string(),
            path: dir.path().join("dosage.json").display().to_string(),
        };

        let result = JsonRepositoryFactory.create(&config).await;
        assert!(
            result.is_ok(),
            "failed to create json repository: {:#?}",
            result.err()
        );
    }
}
