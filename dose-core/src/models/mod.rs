mod dosage_result;
mod fat_type;
mod infusion_input;
mod infusion_profile;
mod saved_calculation;

pub use dosage_result::DosageResult;
pub use fat_type::{FatType, ParseFatTypeError};
pub use infusion_input::InfusionInput;
pub use infusion_profile::InfusionProfile;
pub use saved_calculation::{NewSavedCalculation, SavedCalculation};
