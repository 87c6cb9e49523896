//! Dosage calculations for herb-to-fat infusions.
//!
//! This module provides the arithmetic behind the calculator: the fixed
//! formula pipeline from herb mass and potency down to per-serving and
//! per-gram-of-fat doses.

pub mod common;
pub mod dosage;

pub use dosage::{DosageCalculator, DosageError};
