mod calculator_form;

pub use calculator_form::{CalculatorForm, FormError};
