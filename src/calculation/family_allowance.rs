//! Family allowance calculation functionality.
//!
//! Married employees receive a spouse allowance of 10% of basic salary plus
//! 2.5% of basic salary for every child. Together these form the family
//! allowance. Unmarried employees receive none of it.

use rust_decimal::Decimal;

use crate::models::{AuditStep, MaritalStatus};

/// Returns the spouse allowance rate (10% of basic salary).
pub fn spouse_allowance_rate() -> Decimal {
    Decimal::new(10, 2)
}

/// Returns the per-child allowance rate (2.5% of basic salary).
pub fn child_allowance_rate() -> Decimal {
    Decimal::new(25, 3)
}

/// The result of calculating the family allowance, including its parts and audit step.
#[derive(Debug, Clone)]
pub struct FamilyAllowanceResult {
    /// Allowance for the employee's spouse.
    pub spouse_allowance: Decimal,
    /// Allowance for the employee's children.
    pub children_allowance: Decimal,
    /// Spouse allowance plus children allowance.
    pub family_allowance: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the spouse, children and family allowances.
///
/// # Arguments
///
/// * `basic_salary` - Basic salary in whole Rupiah
/// * `marital_status` - Marital status of the employee
/// * `number_of_children` - Number of children; ignored when unmarried
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use salary_calculator::calculation::calculate_family_allowance;
/// use salary_calculator::models::MaritalStatus;
/// use rust_decimal::Decimal;
///
/// let result = calculate_family_allowance(5_000_000, MaritalStatus::Married, 2, 2);
/// assert_eq!(result.spouse_allowance, Decimal::from(500_000));
/// assert_eq!(result.children_allowance, Decimal::from(250_000));
/// assert_eq!(result.family_allowance, Decimal::from(750_000));
/// ```
///
/// # Precision
///
/// The children allowance keeps at most 28 significant digits. At the
/// extremes of `u64` salaries and `u32` child counts the fraction is rounded;
/// the whole-Rupiah part is always correct.
pub fn calculate_family_allowance(
    basic_salary: u64,
    marital_status: MaritalStatus,
    number_of_children: u32,
    step_number: u32,
) -> FamilyAllowanceResult {
    if !marital_status.is_married() {
        let audit_step = AuditStep {
            step_number,
            rule_id: "family_allowance".to_string(),
            rule_name: "Family Allowance".to_string(),
            input: serde_json::json!({
                "basic_salary": basic_salary,
                "married": false,
                "number_of_children": number_of_children
            }),
            output: serde_json::json!({
                "eligible": false,
                "spouse_allowance": "0",
                "children_allowance": "0",
                "family_allowance": "0"
            }),
            reasoning: "Employee is not married - not eligible for family allowance".to_string(),
        };

        return FamilyAllowanceResult {
            spouse_allowance: Decimal::ZERO,
            children_allowance: Decimal::ZERO,
            family_allowance: Decimal::ZERO,
            audit_step,
        };
    }

    let basic = Decimal::from(basic_salary);
    let spouse_allowance = basic * spouse_allowance_rate();
    let children_allowance = Decimal::from(number_of_children) * child_allowance_rate() * basic;
    let family_allowance = spouse_allowance + children_allowance;

    let reasoning = format!(
        "Spouse: {} × {} = {}; children: {} × {} × {} = {}; family allowance {}",
        basic,
        spouse_allowance_rate().normalize(),
        spouse_allowance.normalize(),
        number_of_children,
        child_allowance_rate().normalize(),
        basic,
        children_allowance.normalize(),
        family_allowance.normalize()
    );

    let audit_step = AuditStep {
        step_number,
        rule_id: "family_allowance".to_string(),
        rule_name: "Family Allowance".to_string(),
        input: serde_json::json!({
            "basic_salary": basic_salary,
            "married": true,
            "number_of_children": number_of_children,
            "spouse_rate": spouse_allowance_rate().normalize().to_string(),
            "child_rate": child_allowance_rate().normalize().to_string()
        }),
        output: serde_json::json!({
            "eligible": true,
            "spouse_allowance": spouse_allowance.normalize().to_string(),
            "children_allowance": children_allowance.normalize().to_string(),
            "family_allowance": family_allowance.normalize().to_string()
        }),
        reasoning,
    };

    FamilyAllowanceResult {
        spouse_allowance,
        children_allowance,
        family_allowance,
        audit_step,
    }
}
