//! Calculator session state and operations.
//!
//! One session holds the form, the current result (if any), and the
//! repository handle. Field edits are opaque string writes; `calculate`,
//! `reset`, and `save` are the only operations that inspect or change
//! anything else, and each reports its outcome as a [`Notice`].

use dose_core::DoseRepository;
use dose_core::calculations::{DosageCalculator, DosageError};
use dose_core::db::repository::RepositoryError;
use dose_core::models::{
    DosageResult, InfusionProfile, NewSavedCalculation, ParseFatTypeError, SavedCalculation,
};
use thiserror::Error;
use tracing::info;

use crate::command::Field;
use crate::message::Notice;
use crate::models::{CalculatorForm, FormError};
use crate::utils::format_mg;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    FatType(#[from] ParseFatTypeError),

    #[error(transparent)]
    Dosage(#[from] DosageError),

    /// Save was requested before any successful calculation.
    #[error("no calculation to save")]
    NoResult,

    #[error(transparent)]
    Store(#[from] RepositoryError),
}

impl SessionError {
    /// The notice shown for this error. Errors never change session state;
    /// they only produce one of these.
    pub fn to_notice(&self) -> Notice {
        match self {
            SessionError::Form(FormError::MissingInformation) => Notice::error(
                "Missing Information",
                "Please fill in all fields to calculate dosage.",
            ),
            SessionError::Form(err) => Notice::error("Invalid Input", format!("{err}.")),
            SessionError::FatType(err) => Notice::error("Invalid Input", format!("{err}.")),
            SessionError::Dosage(err) => Notice::error("Cannot Calculate", format!("{err}.")),
            SessionError::NoResult => Notice::error(
                "No Calculation to Save",
                "Please calculate dosage first before saving.",
            ),
            SessionError::Store(err) => Notice::error("Storage Error", err.to_string()),
        }
    }
}

/// State for one interactive calculator session.
pub struct CalculatorSession {
    form: CalculatorForm,
    profile: InfusionProfile,
    result: Option<DosageResult>,
    repo: Box<dyn DoseRepository>,
}

impl CalculatorSession {
    pub fn new(repo: Box<dyn DoseRepository>) -> Self {
        Self {
            form: CalculatorForm::new(),
            profile: InfusionProfile::default(),
            result: None,
            repo,
        }
    }

    pub fn form(&self) -> &CalculatorForm {
        &self.form
    }

    /// The current result, if a calculation has succeeded this session and
    /// has not been reset since.
    pub fn result(&self) -> Option<&DosageResult> {
        self.result.as_ref()
    }

    /// Stores a raw value into one form field.
    ///
    /// Only the fat type is interpreted here (it is a fixed choice); the
    /// numeric fields accept anything and are judged at calculate time.
    pub fn set_field(
        &mut self,
        field: Field,
        value: String,
    ) -> Result<(), SessionError> {
        match field {
            Field::HerbMass => self.form.herb_mass = value,
            Field::HerbPotency => self.form.herb_potency = value,
            Field::FatMass => self.form.fat_mass = value,
            Field::Servings => self.form.servings = value,
            Field::FatType => self.form.fat_type = value.parse()?,
        }
        Ok(())
    }

    /// Validates the form, computes the dosage breakdown, and replaces the
    /// current result. On any error the previous result stays visible.
    pub fn calculate(&mut self) -> Result<Notice, SessionError> {
        let input = self.form.validate()?;
        let result = DosageCalculator::new(&self.profile).calculate(&input)?;
        let per_serving = format_mg(result.per_serving_mg);
        self.result = Some(result);
        Ok(Notice::success(
            "Calculation Complete",
            format!("Your infusion will have approximately {per_serving} per serving."),
        ))
    }

    /// Clears the numeric fields and the current result. The fat type
    /// keeps its last selection.
    pub fn reset(&mut self) -> Notice {
        self.form.clear();
        self.result = None;
        Notice::info("Calculator Reset", "All fields have been cleared.")
    }

    /// Persists the current inputs and result as one new record.
    pub async fn save(&mut self) -> Result<Notice, SessionError> {
        let result = self.result.clone().ok_or(SessionError::NoResult)?;
        let input = self.form.validate()?;

        let stored = self
            .repo
            .append_calculation(NewSavedCalculation { input, result })
            .await?;
        info!(id = stored.id, "calculation saved");
        Ok(Notice::success(
            "Calculation Saved",
            "Your calculation has been saved to local storage.",
        ))
    }

    /// All saved calculations, oldest first.
    pub async fn list(&self) -> Result<Vec<SavedCalculation>, SessionError> {
        Ok(self.repo.list_calculations().await?)
    }
}
