//! Total salary calculation.
//!
//! Composes the service allowance, family allowance and family savings rules
//! into a complete [`SalaryCalculation`] for one employee.

use rust_decimal::Decimal;

use crate::models::{AuditStep, SalaryBreakdown, SalaryCalculation, SalaryInput};

use super::family_allowance::calculate_family_allowance;
use super::family_savings::calculate_family_savings;
use super::service_allowance::calculate_service_allowance;

/// Calculates the complete salary breakdown for an employee.
///
/// This is a pure function: the same input always produces an equal result,
/// audit trace included. Married employees receive the family allowance and
/// no family savings; unmarried employees the reverse.
///
/// # Examples
///
/// ```
/// use salary_calculator::calculation::calculate_salary;
/// use salary_calculator::models::{MaritalStatus, SalaryInput};
/// use rust_decimal::Decimal;
///
/// let input = SalaryInput {
///     basic_salary: 3_000_000,
///     years_of_service: 5,
///     marital_status: MaritalStatus::Unmarried,
///     number_of_children: 0,
/// };
///
/// let result = calculate_salary(&input);
/// assert_eq!(result.breakdown.service_allowance, Decimal::from(100_000));
/// assert_eq!(result.breakdown.family_savings, Decimal::from(150_000));
/// assert_eq!(result.breakdown.total_salary, Decimal::from(3_250_000));
/// ```
pub fn calculate_salary(input: &SalaryInput) -> SalaryCalculation {
    let children = input.eligible_children();

    let service = calculate_service_allowance(input.years_of_service, 1);
    let family = calculate_family_allowance(input.basic_salary, input.marital_status, children, 2);
    let savings = calculate_family_savings(input.basic_salary, input.marital_status, 3);

    let basic = Decimal::from(input.basic_salary);
    let total_salary = basic + service.amount + family.family_allowance + savings.amount;

    let total_step = AuditStep {
        step_number: 4,
        rule_id: "total_salary".to_string(),
        rule_name: "Total Salary".to_string(),
        input: serde_json::json!({
            "basic_salary": input.basic_salary,
            "service_allowance": service.amount.normalize().to_string(),
            "family_allowance": family.family_allowance.normalize().to_string(),
            "family_savings": savings.amount.normalize().to_string()
        }),
        output: serde_json::json!({
            "total_salary": total_salary.normalize().to_string()
        }),
        reasoning: format!(
            "{} + {} + {} + {} = {}",
            basic,
            service.amount.normalize(),
            family.family_allowance.normalize(),
            savings.amount.normalize(),
            total_salary.normalize()
        ),
    };

    let breakdown = SalaryBreakdown {
        service_allowance: service.amount,
        spouse_allowance: family.spouse_allowance,
        children_allowance: family.children_allowance,
        family_allowance: family.family_allowance,
        family_savings: savings.amount,
        total_salary,
    };

    SalaryCalculation {
        input: *input,
        breakdown,
        audit_trace: vec![
            service.audit_step,
            family.audit_step,
            savings.audit_step,
            total_step,
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MaritalStatus;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_input(
        basic_salary: u64,
        years_of_service: u32,
        marital_status: MaritalStatus,
        number_of_children: u32,
    ) -> SalaryInput {
        SalaryInput {
            basic_salary,
            years_of_service,
            marital_status,
            number_of_children,
        }
    }

    #[test]
    fn test_married_senior_with_two_children() {
        let input = create_input(5_000_000, 11, MaritalStatus::Married, 2);
        let breakdown = calculate_salary(&input).breakdown;

        assert_eq!(breakdown.service_allowance, dec("500000"));
        assert_eq!(breakdown.spouse_allowance, dec("500000"));
        assert_eq!(breakdown.children_allowance, dec("250000"));
        assert_eq!(breakdown.family_allowance, dec("750000"));
        assert_eq!(breakdown.family_savings, Decimal::ZERO);
        assert_eq!(breakdown.total_salary, dec("6250000"));
    }

    #[test]
    fn test_unmarried_junior() {
        let input = create_input(3_000_000, 5, MaritalStatus::Unmarried, 0);
        let breakdown = calculate_salary(&input).breakdown;

        assert_eq!(breakdown.service_allowance, dec("100000"));
        assert_eq!(breakdown.spouse_allowance, Decimal::ZERO);
        assert_eq!(breakdown.children_allowance, Decimal::ZERO);
        assert_eq!(breakdown.family_allowance, Decimal::ZERO);
        assert_eq!(breakdown.family_savings, dec("150000"));
        assert_eq!(breakdown.total_salary, dec("3250000"));
    }

    #[test]
    fn test_married_with_three_children() {
        let input = create_input(5_000_000, 11, MaritalStatus::Married, 3);
        let breakdown = calculate_salary(&input).breakdown;

        assert_eq!(breakdown.children_allowance, dec("375000"));
        assert_eq!(breakdown.family_allowance, dec("875000"));
        assert_eq!(breakdown.total_salary, dec("6375000"));
    }

    #[test]
    fn test_unmarried_children_are_ignored() {
        let with_children = create_input(3_000_000, 5, MaritalStatus::Unmarried, 4);
        let without_children = create_input(3_000_000, 5, MaritalStatus::Unmarried, 0);

        assert_eq!(
            calculate_salary(&with_children).breakdown,
            calculate_salary(&without_children).breakdown
        );
    }

    #[test]
    fn test_service_band_boundary() {
        let at_ten = calculate_salary(&create_input(0, 10, MaritalStatus::Unmarried, 0));
        let at_eleven = calculate_salary(&create_input(0, 11, MaritalStatus::Unmarried, 0));

        assert_eq!(at_ten.breakdown.service_allowance, dec("100000"));
        assert_eq!(at_ten.breakdown.total_salary, dec("100000"));
        assert_eq!(at_eleven.breakdown.service_allowance, dec("500000"));
    }

    #[test]
    fn test_audit_trace_is_ordered() {
        let input = create_input(5_000_000, 11, MaritalStatus::Married, 2);
        let result = calculate_salary(&input);

        let rule_ids: Vec<&str> = result
            .audit_trace
            .iter()
            .map(|step| step.rule_id.as_str())
            .collect();
        assert_eq!(
            rule_ids,
            vec![
                "service_allowance",
                "family_allowance",
                "family_savings",
                "total_salary"
            ]
        );

        let numbers: Vec<u32> = result.audit_trace.iter().map(|s| s.step_number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
        assert_eq!(result.audit_trace[3].output["total_salary"], "6250000");
    }

    #[test]
    fn test_calculation_is_idempotent() {
        let input = create_input(7_654_321, 12, MaritalStatus::Married, 3);
        assert_eq!(calculate_salary(&input), calculate_salary(&input));
    }

    #[test]
    fn test_input_is_carried_into_result() {
        let input = create_input(1_000, 1, MaritalStatus::Married, 1);
        assert_eq!(calculate_salary(&input).input, input);
    }
}
