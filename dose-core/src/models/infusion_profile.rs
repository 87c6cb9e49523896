use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Calculation constants for an infusion.
///
/// Kept separate from the inputs so the assumptions can be swapped without
/// touching the calculator; the default profile is the standard stovetop
/// assumption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfusionProfile {
    /// Fraction of total cannabinoids assumed to transfer from herb into
    /// fat during infusion.
    pub extraction_efficiency: Decimal,
}

impl Default for InfusionProfile {
    fn default() -> Self {
        Self {
            // 80% extraction efficiency
            extraction_efficiency: Decimal::new(80, 2),
        }
    }
}
