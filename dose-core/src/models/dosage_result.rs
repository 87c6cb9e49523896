use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::FatType;

/// Computed dosage breakdown for one infusion batch.
///
/// All quantities are milligrams of cannabinoids, rounded to one decimal
/// place. Immutable once computed; a new calculation replaces the whole
/// value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DosageResult {
    /// Cannabinoids present in the raw herb.
    pub total_mg: Decimal,
    /// Cannabinoids assumed to end up in the fat.
    pub extracted_mg: Decimal,
    /// Dose per serving of the finished batch.
    pub per_serving_mg: Decimal,
    /// Dose per gram (or milliliter) of carrier fat.
    pub per_gram_fat_mg: Decimal,
    /// Carried through unchanged for display.
    pub fat_type: FatType,
}
