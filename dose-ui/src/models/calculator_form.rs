use dose_core::models::{FatType, InfusionInput};
use thiserror::Error;

use crate::utils::parse_decimal;

/// Errors surfaced when the form is turned into calculator input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    /// At least one numeric field is still empty.
    #[error("please fill in all fields to calculate dosage")]
    MissingInformation,

    /// A field holds text that does not parse as a number.
    #[error("{field} must be a valid number")]
    Invalid { field: &'static str },
}

/// Form state for one calculation.
///
/// Numeric fields hold the raw entered text; nothing is validated at
/// entry time, so a field can hold anything until `validate` looks at
/// it. The fat type always has a choice selected and — deliberately —
/// survives `reset`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalculatorForm {
    pub herb_mass: String,
    pub herb_potency: String,
    pub fat_mass: String,
    pub fat_type: FatType,
    pub servings: String,
}

impl CalculatorForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when every numeric field has something in it.
    pub fn is_complete(&self) -> bool {
        !self.herb_mass.trim().is_empty()
            && !self.herb_potency.trim().is_empty()
            && !self.fat_mass.trim().is_empty()
            && !self.servings.trim().is_empty()
    }

    /// Parse the form into an [`InfusionInput`].
    ///
    /// Emptiness is checked across all fields first, so a half-filled form
    /// reports "missing information" rather than a parse error for
    /// whichever field happens to be blank.
    pub fn validate(&self) -> Result<InfusionInput, FormError> {
        if !self.is_complete() {
            return Err(FormError::MissingInformation);
        }

        let herb_mass_g = parse_decimal(&self.herb_mass)
            .map_err(|_| FormError::Invalid { field: "herb amount" })?;
        let herb_potency_pct = parse_decimal(&self.herb_potency)
            .map_err(|_| FormError::Invalid { field: "potency" })?;
        let fat_mass_g = parse_decimal(&self.fat_mass)
            .map_err(|_| FormError::Invalid { field: "fat amount" })?;
        let servings = self
            .servings
            .trim()
            .parse::<i64>()
            .map_err(|_| FormError::Invalid { field: "servings" })?;

        Ok(InfusionInput {
            herb_mass_g,
            herb_potency_pct,
            fat_mass_g,
            fat_type: self.fat_type,
            servings,
        })
    }

    /// Clears the numeric fields. The fat type keeps its last selection.
    pub fn clear(&mut self) {
        self.herb_mass.clear();
        self.herb_potency.clear();
        self.fat_mass.clear();
        self.servings.clear();
    }
}
