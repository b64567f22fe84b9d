//! Salary calculation result models.
//!
//! This module contains the [`SalaryCalculation`] type and its associated
//! structures that capture all outputs of a salary calculation: the derived
//! amounts and an audit trace explaining how each was reached.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::SalaryInput;

/// The six amounts derived from a [`SalaryInput`].
///
/// Every field is a pure function of the input. Allowances that do not apply
/// to the employee's marital status are zero.
///
/// # Example
///
/// ```
/// use salary_calculator::models::SalaryBreakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = SalaryBreakdown {
///     service_allowance: Decimal::from(100_000),
///     spouse_allowance: Decimal::ZERO,
///     children_allowance: Decimal::ZERO,
///     family_allowance: Decimal::ZERO,
///     family_savings: Decimal::from(150_000),
///     total_salary: Decimal::from(3_250_000),
/// };
/// assert_eq!(breakdown.benefits_total(), Decimal::from(250_000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// Fixed allowance based on the tenure threshold.
    pub service_allowance: Decimal,
    /// Percentage-of-basic allowance for a married employee's spouse.
    pub spouse_allowance: Decimal,
    /// Per-child percentage-of-basic allowance for married employees.
    pub children_allowance: Decimal,
    /// Spouse allowance plus children allowance.
    pub family_allowance: Decimal,
    /// Percentage-of-basic benefit paid to unmarried employees.
    pub family_savings: Decimal,
    /// Basic salary plus every applicable allowance.
    pub total_salary: Decimal,
}

impl SalaryBreakdown {
    /// Sum of everything paid on top of the basic salary.
    pub fn benefits_total(&self) -> Decimal {
        self.service_allowance + self.family_allowance + self.family_savings
    }
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete result of one salary calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryCalculation {
    /// The input the calculation was made from.
    pub input: SalaryInput,
    /// The derived amounts.
    pub breakdown: SalaryBreakdown,
    /// Every rule applied, in order.
    pub audit_trace: Vec<AuditStep>,
}
