//! Core data models for the salary calculator.
//!
//! This module contains all the domain models used throughout the crate.

mod salary_breakdown;
mod salary_input;

pub use salary_breakdown::{AuditStep, SalaryBreakdown, SalaryCalculation};
pub use salary_input::{MaritalStatus, SalaryInput};
