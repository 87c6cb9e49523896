use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Carrier fat for the infusion.
///
/// Labeling only: the choice of fat never enters the dosage formula, it is
/// carried through to results and saved records for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FatType {
    #[default]
    Butter,
    CoconutOil,
    OliveOil,
    MctOil,
    Ghee,
}

impl FatType {
    pub fn all() -> &'static [FatType] {
        &[
            FatType::Butter,
            FatType::CoconutOil,
            FatType::OliveOil,
            FatType::MctOil,
            FatType::Ghee,
        ]
    }

    /// Stable token used in persistence and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            FatType::Butter => "butter",
            FatType::CoconutOil => "coconut-oil",
            FatType::OliveOil => "olive-oil",
            FatType::MctOil => "mct-oil",
            FatType::Ghee => "ghee",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FatType::Butter => "Butter",
            FatType::CoconutOil => "Coconut Oil",
            FatType::OliveOil => "Olive Oil",
            FatType::MctOil => "MCT Oil",
            FatType::Ghee => "Ghee",
        }
    }
}

impl fmt::Display for FatType {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a string names no known fat type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown fat type '{0}'")]
pub struct ParseFatTypeError(String);

impl FromStr for FatType {
    type Err = ParseFatTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        FatType::all()
            .iter()
            .copied()
            .find(|fat| fat.as_str() == token)
            .ok_or_else(|| ParseFatTypeError(s.to_string()))
    }
}
