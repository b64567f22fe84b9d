//! Family savings calculation functionality.
//!
//! Unmarried employees receive 5% of their basic salary as family savings
//! in place of the family allowance.

use rust_decimal::Decimal;

use crate::models::{AuditStep, MaritalStatus};

/// Returns the family savings rate (5% of basic salary).
pub fn family_savings_rate() -> Decimal {
    Decimal::new(5, 2)
}

/// The result of calculating family savings, including the amount and audit step.
#[derive(Debug, Clone)]
pub struct FamilySavingsResult {
    /// The family savings amount; zero for married employees.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates family savings for an employee.
///
/// # Examples
///
/// ```
/// use salary_calculator::calculation::calculate_family_savings;
/// use salary_calculator::models::MaritalStatus;
/// use rust_decimal::Decimal;
///
/// let result = calculate_family_savings(3_000_000, MaritalStatus::Unmarried, 3);
/// assert_eq!(result.amount, Decimal::from(150_000));
///
/// let result = calculate_family_savings(3_000_000, MaritalStatus::Married, 3);
/// assert_eq!(result.amount, Decimal::ZERO);
/// ```
pub fn calculate_family_savings(
    basic_salary: u64,
    marital_status: MaritalStatus,
    step_number: u32,
) -> FamilySavingsResult {
    let basic = Decimal::from(basic_salary);

    let (amount, reasoning) = if marital_status.is_married() {
        (
            Decimal::ZERO,
            "Employee is married - family allowance applies instead of family savings".to_string(),
        )
    } else {
        let amount = basic * family_savings_rate();
        let reasoning = format!(
            "{} × {} = {}",
            basic,
            family_savings_rate().normalize(),
            amount.normalize()
        );
        (amount, reasoning)
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "family_savings".to_string(),
        rule_name: "Family Savings".to_string(),
        input: serde_json::json!({
            "basic_salary": basic_salary,
            "married": marital_status.is_married(),
            "rate": family_savings_rate().normalize().to_string()
        }),
        output: serde_json::json!({
            "eligible": !marital_status.is_married(),
            "amount": amount.normalize().to_string()
        }),
        reasoning,
    };

    FamilySavingsResult { amount, audit_step }
}
