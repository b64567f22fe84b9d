//! Calculation logic for the salary calculator.
//!
//! This module contains the calculation functions for determining pay:
//! the tenure-based service allowance, the spouse and children allowances
//! that make up the family allowance, family savings for unmarried
//! employees, and the total salary that combines them.

mod family_allowance;
mod family_savings;
mod salary;
mod service_allowance;

pub use family_allowance::{
    FamilyAllowanceResult, calculate_family_allowance, child_allowance_rate,
    spouse_allowance_rate,
};
pub use family_savings::{FamilySavingsResult, calculate_family_savings, family_savings_rate};
pub use salary::calculate_salary;
pub use service_allowance::{
    SENIORITY_THRESHOLD_YEARS, SERVICE_ALLOWANCE_SENIOR, SERVICE_ALLOWANCE_STANDARD,
    ServiceAllowanceResult, calculate_service_allowance,
};
