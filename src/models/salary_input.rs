//! Salary input model and related types.
//!
//! This module defines the [`SalaryInput`] struct and [`MaritalStatus`] enum
//! describing the four facts a salary is computed from.

use serde::{Deserialize, Serialize};

/// Whether the employee is married.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    /// Married; eligible for spouse and children allowances.
    Married,
    /// Not married; eligible for family savings instead.
    Unmarried,
}

impl MaritalStatus {
    /// Parses the `y`/`n` answer given at the marital status prompt.
    ///
    /// Only the exact tokens `y` and `n` are accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use salary_calculator::models::MaritalStatus;
    ///
    /// assert_eq!(MaritalStatus::from_answer("y"), Some(MaritalStatus::Married));
    /// assert_eq!(MaritalStatus::from_answer("n"), Some(MaritalStatus::Unmarried));
    /// assert_eq!(MaritalStatus::from_answer("yes"), None);
    /// ```
    pub fn from_answer(answer: &str) -> Option<Self> {
        match answer {
            "y" => Some(MaritalStatus::Married),
            "n" => Some(MaritalStatus::Unmarried),
            _ => None,
        }
    }

    /// Returns true for [`MaritalStatus::Married`].
    pub fn is_married(self) -> bool {
        self == MaritalStatus::Married
    }

    /// Human-readable label used in the salary report.
    pub fn label(self) -> &'static str {
        match self {
            MaritalStatus::Married => "Married",
            MaritalStatus::Unmarried => "Unmarried",
        }
    }
}

/// The validated facts about one employee for a single calculation.
///
/// Unsigned field types make negative inputs unrepresentable, so every
/// value of this type is a valid calculator input.
///
/// Amounts are computed with `Decimal`, which carries 28 significant digits.
/// Results stay exact to the cent while `number_of_children × basic_salary`
/// is below about 10^25; beyond that (only near the `u64`/`u32` limits) the
/// fractional digits are rounded away.
///
/// # Example
///
/// ```
/// use salary_calculator::models::{MaritalStatus, SalaryInput};
///
/// let input = SalaryInput {
///     basic_salary: 5_000_000,
///     years_of_service: 11,
///     marital_status: MaritalStatus::Married,
///     number_of_children: 2,
/// };
/// assert_eq!(input.eligible_children(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SalaryInput {
    /// Monthly basic salary in whole Rupiah.
    pub basic_salary: u64,
    /// Completed years of service.
    pub years_of_service: u32,
    /// Marital status of the employee.
    pub marital_status: MaritalStatus,
    /// Number of children. Only counted when married.
    #[serde(default)]
    pub number_of_children: u32,
}

impl SalaryInput {
    /// Number of children that attract an allowance.
    ///
    /// Always zero for unmarried employees, whatever `number_of_children` holds.
    pub fn eligible_children(&self) -> u32 {
        if self.marital_status.is_married() {
            self.number_of_children
        } else {
            0
        }
    }
}
