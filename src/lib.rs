//! Salary Engine library crate.
//!
//! This crate exposes the net salary calculation and API components as
//! reusable modules.  External applications may depend on the
//! `salary_engine` crate and call into [`engine::calculate_net_salary`]
//! directly or embed the API via [`api::build_router`].

pub mod error;
pub mod models;
pub mod tax;
pub mod engine;
pub mod api;

// Flat public surface for the common entry points.
pub use engine::{calculate_net_salary, compute_paycheck};
pub use error::SalaryError;
pub use models::{DeductionLine, GrossInput, Paycheck};
