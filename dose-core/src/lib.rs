pub mod age_gate;
pub mod calculations;
pub mod db;
pub mod models;

pub use age_gate::{AgeGate, GateEvent};
pub use db::repository::{DoseRepository, RepositoryError};
pub use models::*;
