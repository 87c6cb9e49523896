use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::FatType;

/// Parsed calculator inputs for one infusion batch.
///
/// Values are taken as entered; no range checks are applied here, so
/// negative or out-of-convention amounts flow through arithmetically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfusionInput {
    /// Dried herb going into the batch, in grams.
    pub herb_mass_g: Decimal,
    /// Cannabinoid concentration of the herb, in percent (0-100 by convention).
    pub herb_potency_pct: Decimal,
    /// Carrier fat, in grams or milliliters.
    pub fat_mass_g: Decimal,
    pub fat_type: FatType,
    /// Number of servings the finished batch is divided into.
    pub servings: i64,
}
