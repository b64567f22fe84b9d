//! Service allowance calculation functionality.
//!
//! This module provides the tenure-based service allowance: a fixed amount
//! that steps up once an employee has served more than ten years.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// Years of service an employee must exceed to receive the senior allowance.
pub const SENIORITY_THRESHOLD_YEARS: u32 = 10;

/// Service allowance paid to employees with more than ten years of service.
pub const SERVICE_ALLOWANCE_SENIOR: u64 = 500_000;

/// Service allowance paid to everyone else.
pub const SERVICE_ALLOWANCE_STANDARD: u64 = 100_000;

/// The result of calculating the service allowance, including the amount and audit step.
#[derive(Debug, Clone)]
pub struct ServiceAllowanceResult {
    /// The allowance amount.
    pub amount: Decimal,
    /// True when the senior band applied.
    pub senior: bool,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the service allowance for the given years of service.
///
/// The senior band requires strictly more than [`SENIORITY_THRESHOLD_YEARS`];
/// exactly ten years still receives the standard allowance.
///
/// # Arguments
///
/// * `years_of_service` - Completed years of service
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use salary_calculator::calculation::calculate_service_allowance;
/// use rust_decimal::Decimal;
///
/// let result = calculate_service_allowance(10, 1);
/// assert_eq!(result.amount, Decimal::from(100_000));
///
/// let result = calculate_service_allowance(11, 1);
/// assert_eq!(result.amount, Decimal::from(500_000));
/// ```
pub fn calculate_service_allowance(
    years_of_service: u32,
    step_number: u32,
) -> ServiceAllowanceResult {
    let senior = years_of_service > SENIORITY_THRESHOLD_YEARS;
    let amount = if senior {
        Decimal::from(SERVICE_ALLOWANCE_SENIOR)
    } else {
        Decimal::from(SERVICE_ALLOWANCE_STANDARD)
    };

    let reasoning = if senior {
        format!(
            "{} years of service > {} - senior service allowance {}",
            years_of_service, SENIORITY_THRESHOLD_YEARS, amount
        )
    } else {
        format!(
            "{} years of service <= {} - standard service allowance {}",
            years_of_service, SENIORITY_THRESHOLD_YEARS, amount
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "service_allowance".to_string(),
        rule_name: "Service Allowance".to_string(),
        input: serde_json::json!({
            "years_of_service": years_of_service,
            "threshold_years": SENIORITY_THRESHOLD_YEARS
        }),
        output: serde_json::json!({
            "senior": senior,
            "amount": amount.to_string()
        }),
        reasoning,
    };

    ServiceAllowanceResult {
        amount,
        senior,
        audit_step,
    }
}
