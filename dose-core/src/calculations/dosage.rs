//! Infusion dosage computation.
//!
//! This module implements the dosage breakdown for an infusion batch: how
//! many milligrams of cannabinoids the raw herb contains, how much of that
//! is assumed to transfer into the carrier fat, and what that works out to
//! per serving and per gram of fat.
//!
//! # Computation Steps
//!
//! | Step | Quantity           | Formula                                    |
//! |------|--------------------|--------------------------------------------|
//! | 1    | Total cannabinoids | herb mass (g) × 1000 × potency (%) / 100   |
//! | 2    | Extracted          | total × extraction efficiency              |
//! | 3    | Per serving        | extracted / serving count                  |
//! | 4    | Per gram of fat    | extracted / fat mass                       |
//!
//! Steps 3 and 4 divide the unrounded extracted amount; each output field
//! is rounded to one decimal place only at the end.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use dose_core::calculations::DosageCalculator;
//! use dose_core::models::{FatType, InfusionInput, InfusionProfile};
//!
//! let input = InfusionInput {
//!     herb_mass_g: dec!(3.5),
//!     herb_potency_pct: dec!(20),
//!     fat_mass_g: dec!(100),
//!     fat_type: FatType::Butter,
//!     servings: 12,
//! };
//!
//! let profile = InfusionProfile::default();
//! let result = DosageCalculator::new(&profile).calculate(&input).unwrap();
//!
//! assert_eq!(result.total_mg, dec!(700.0));
//! assert_eq!(result.extracted_mg, dec!(560.0));
//! assert_eq!(result.per_serving_mg, dec!(46.7));
//! assert_eq!(result.per_gram_fat_mg, dec!(5.6));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

use crate::calculations::common::round_tenth_mg;
use crate::models::{DosageResult, InfusionInput, InfusionProfile};

/// Errors that can occur during dosage calculations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DosageError {
    /// A serving count of zero cannot be divided into a per-serving dose.
    #[error("serving count is zero")]
    ZeroServings,

    /// A fat amount of zero cannot be divided into a per-gram dose.
    #[error("fat amount is zero")]
    ZeroFatMass,
}

/// Calculator for the infusion dosage breakdown.
///
/// Borrows an [`InfusionProfile`] so one set of assumptions can serve any
/// number of calculations.
#[derive(Debug, Clone)]
pub struct DosageCalculator<'a> {
    profile: &'a InfusionProfile,
}

impl<'a> DosageCalculator<'a> {
    /// Creates a new dosage calculator with the given infusion profile.
    pub fn new(profile: &'a InfusionProfile) -> Self {
        Self { profile }
    }

    /// Computes the complete dosage breakdown for one batch.
    ///
    /// Inputs are not range-checked: negative or over-100% values flow
    /// through arithmetically and show up signed in the result.
    ///
    /// # Errors
    ///
    /// Returns [`DosageError`] if the serving count or the fat amount is
    /// zero; both would otherwise be divisors.
    pub fn calculate(
        &self,
        input: &InfusionInput,
    ) -> Result<DosageResult, DosageError> {
        let total = self.total_cannabinoids(input.herb_mass_g, input.herb_potency_pct);
        let extracted = self.extracted_cannabinoids(total);
        let per_serving = self.per_serving(extracted, input.servings)?;
        let per_gram_fat = self.per_gram_fat(extracted, input.fat_mass_g)?;

        Ok(DosageResult {
            total_mg: round_tenth_mg(total),
            extracted_mg: round_tenth_mg(extracted),
            per_serving_mg: round_tenth_mg(per_serving),
            per_gram_fat_mg: round_tenth_mg(per_gram_fat),
            fat_type: input.fat_type,
        })
    }

    /// Milligrams of cannabinoids present in the raw herb.
    fn total_cannabinoids(
        &self,
        herb_mass_g: Decimal,
        herb_potency_pct: Decimal,
    ) -> Decimal {
        herb_mass_g * Decimal::from(1000) * (herb_potency_pct / Decimal::from(100))
    }

    /// Milligrams assumed to transfer into the fat.
    fn extracted_cannabinoids(
        &self,
        total_mg: Decimal,
    ) -> Decimal {
        total_mg * self.profile.extraction_efficiency
    }

    /// Milligrams per serving of the finished batch.
    fn per_serving(
        &self,
        extracted_mg: Decimal,
        servings: i64,
    ) -> Result<Decimal, DosageError> {
        if servings == 0 {
            return Err(DosageError::ZeroServings);
        }
        Ok(extracted_mg / Decimal::from(servings))
    }

    /// Milligrams per gram (or milliliter) of carrier fat.
    fn per_gram_fat(
        &self,
        extracted_mg: Decimal,
        fat_mass_g: Decimal,
    ) -> Result<Decimal, DosageError> {
        if fat_mass_g.is_zero() {
            return Err(DosageError::ZeroFatMass);
        }
        Ok(extracted_mg / fat_mass_g)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use crate::models::FatType;

    use super::*;

    fn test_input() -> InfusionInput {
        InfusionInput {
            herb_mass_g: dec!(3.5),
            herb_potency_pct: dec!(20),
            fat_mass_g: dec!(100),
            fat_type: FatType::Butter,
            servings: 12,
        }
    }

    fn calculator(profile: &InfusionProfile) -> DosageCalculator<'_> {
        DosageCalculator::new(profile)
    }

    // =========================================================================
    // total_cannabinoids tests
    // =========================================================================

    #[test]
    fn total_scales_with_mass_and_potency() {
        let profile = InfusionProfile::default();

        let result = calculator(&profile).total_cannabinoids(dec!(3.5), dec!(20));

        // 3.5 g * 1000 * 20% = 700 mg
        assert_eq!(result, dec!(700));
    }

    #[test]
    fn total_handles_fractional_potency() {
        let profile = InfusionProfile::default();

        let result = calculator(&profile).total_cannabinoids(dec!(1), dec!(17.5));

        assert_eq!(result, dec!(175));
    }

    #[test]
    fn total_allows_potency_above_100_percent() {
        let profile = InfusionProfile::default();

        let result = calculator(&profile).total_cannabinoids(dec!(3.5), dec!(150));

        assert_eq!(result, dec!(5250));
    }

    // =========================================================================
    // extracted_cannabinoids tests
    // =========================================================================

    #[test]
    fn extracted_is_fixed_fraction_of_total() {
        let profile = InfusionProfile::default();

        let result = calculator(&profile).extracted_cannabinoids(dec!(700));

        assert_eq!(result, dec!(560.00));
    }

    #[test]
    fn extracted_honours_custom_efficiency() {
        let profile = InfusionProfile {
            extraction_efficiency: dec!(0.70),
        };

        let result = calculator(&profile).extracted_cannabinoids(dec!(700));

        assert_eq!(result, dec!(490.00));
    }

    // =========================================================================
    // per_serving / per_gram_fat tests
    // =========================================================================

    #[test]
    fn per_serving_divides_extracted() {
        let profile = InfusionProfile::default();

        let result = calculator(&profile).per_serving(dec!(560), 8);

        assert_eq!(result, Ok(dec!(70)));
    }

    #[test]
    fn per_serving_rejects_zero_servings() {
        let profile = InfusionProfile::default();

        let result = calculator(&profile).per_serving(dec!(560), 0);

        assert_eq!(result, Err(DosageError::ZeroServings));
    }

    #[test]
    fn per_gram_fat_divides_extracted() {
        let profile = InfusionProfile::default();

        let result = calculator(&profile).per_gram_fat(dec!(560), dec!(100));

        assert_eq!(result, Ok(dec!(5.6)));
    }

    #[test]
    fn per_gram_fat_rejects_zero_fat() {
        let profile = InfusionProfile::default();

        let result = calculator(&profile).per_gram_fat(dec!(560), dec!(0));

        assert_eq!(result, Err(DosageError::ZeroFatMass));
    }

    // =========================================================================
    // calculate (integration) tests
    // =========================================================================

    #[test]
    fn calculate_standard_batch() {
        let profile = InfusionProfile::default();
        let input = test_input();

        let result = calculator(&profile).calculate(&input).unwrap();

        assert_eq!(result.total_mg, dec!(700.0));
        assert_eq!(result.extracted_mg, dec!(560.0));
        // 560 / 12 = 46.666... -> 46.7
        assert_eq!(result.per_serving_mg, dec!(46.7));
        // 560 / 100 = 5.6
        assert_eq!(result.per_gram_fat_mg, dec!(5.6));
        assert_eq!(result.fat_type, FatType::Butter);
    }

    #[test]
    fn calculate_rounds_divisions_from_unrounded_extracted() {
        let profile = InfusionProfile::default();
        let mut input = test_input();
        // total = 116.625 mg, extracted = 93.3 mg, per serving = 46.65 -> 46.7
        input.herb_mass_g = dec!(1.16625);
        input.herb_potency_pct = dec!(10);
        input.servings = 2;

        let result = calculator(&profile).calculate(&input).unwrap();

        assert_eq!(result.total_mg, dec!(116.6));
        assert_eq!(result.extracted_mg, dec!(93.3));
        assert_eq!(result.per_serving_mg, dec!(46.7));
    }

    #[test]
    fn calculate_carries_fat_type_through() {
        let profile = InfusionProfile::default();
        let mut input = test_input();
        input.fat_type = FatType::CoconutOil;

        let result = calculator(&profile).calculate(&input).unwrap();

        assert_eq!(result.fat_type, FatType::CoconutOil);
    }

    #[test]
    fn calculate_propagates_negative_inputs() {
        let profile = InfusionProfile::default();
        let mut input = test_input();
        input.herb_mass_g = dec!(-3.5);

        let result = calculator(&profile).calculate(&input).unwrap();

        // No range validation: a negative mass flows through signed.
        assert_eq!(result.total_mg, dec!(-700.0));
        assert_eq!(result.extracted_mg, dec!(-560.0));
        assert_eq!(result.per_serving_mg, dec!(-46.7));
    }

    #[test]
    fn calculate_rejects_zero_servings() {
        let profile = InfusionProfile::default();
        let mut input = test_input();
        input.servings = 0;

        let result = calculator(&profile).calculate(&input);

        assert_eq!(result, Err(DosageError::ZeroServings));
    }

    #[test]
    fn calculate_rejects_zero_fat_mass() {
        let profile = InfusionProfile::default();
        let mut input = test_input();
        input.fat_mass_g = dec!(0);

        let result = calculator(&profile).calculate(&input);

        assert_eq!(result, Err(DosageError::ZeroFatMass));
    }

    #[test]
    fn calculate_with_custom_profile() {
        let profile = InfusionProfile {
            extraction_efficiency: dec!(0.70),
        };
        let input = test_input();

        let result = calculator(&profile).calculate(&input).unwrap();

        assert_eq!(result.extracted_mg, dec!(490.0));
        // 490 / 12 = 40.833... -> 40.8
        assert_eq!(result.per_serving_mg, dec!(40.8));
    }
}
