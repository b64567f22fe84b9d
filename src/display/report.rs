//! Salary report rendering.
//!
//! Reports are built as lists of lines so that callers decide where they go.

use rust_decimal::Decimal;

use crate::models::SalaryCalculation;

use super::currency::format_rupiah;
use super::layout::{border, centered};

/// Title shown in the application header.
pub const APP_TITLE: &str = "Employee Salary Calculator";

/// Renders the application header shown at the start of every cycle.
pub fn render_header() -> Vec<String> {
    vec![
        border(),
        centered(APP_TITLE),
        centered("Service allowance, family allowance and family savings"),
        border(),
    ]
}

/// Renders the breakdown of a completed calculation.
///
/// Married employees see their spouse, children and family allowances;
/// unmarried employees see their family savings instead.
///
/// # Examples
///
/// ```
/// use salary_calculator::calculation::calculate_salary;
/// use salary_calculator::display::render_breakdown;
/// use salary_calculator::models::{MaritalStatus, SalaryInput};
///
/// let calculation = calculate_salary(&SalaryInput {
///     basic_salary: 3_000_000,
///     years_of_service: 5,
///     marital_status: MaritalStatus::Unmarried,
///     number_of_children: 0,
/// });
///
/// let lines = render_breakdown(&calculation);
/// assert!(lines.iter().any(|l| l.contains("Total salary: Rp 3.250.000,00")));
/// ```
pub fn render_breakdown(calculation: &SalaryCalculation) -> Vec<String> {
    let input = &calculation.input;
    let breakdown = &calculation.breakdown;

    let mut lines = vec![
        border(),
        centered("Salary breakdown"),
        border(),
        centered(&format!(
            "Years of service: {}",
            pluralize(input.years_of_service, "year")
        )),
        centered(&format!("Marital status: {}", input.marital_status.label())),
        amount_line("Basic salary", Decimal::from(input.basic_salary)),
        amount_line("Service allowance", breakdown.service_allowance),
    ];

    if input.marital_status.is_married() {
        lines.push(amount_line("Spouse allowance", breakdown.spouse_allowance));
        lines.push(amount_line(
            &format!(
                "Children allowance ({})",
                pluralize(input.number_of_children, "child")
            ),
            breakdown.children_allowance,
        ));
        lines.push(amount_line(
            "Total family allowance",
            breakdown.family_allowance,
        ));
    } else {
        lines.push(amount_line("Family savings", breakdown.family_savings));
    }

    lines.push(amount_line("Total salary", breakdown.total_salary));
    lines.push(border());
    lines
}

fn amount_line(label: &str, amount: Decimal) -> String {
    centered(&format!("{}: {}", label, format_rupiah(amount)))
}

fn pluralize(count: u32, noun: &str) -> String {
    match (count, noun) {
        (1, _) => format!("1 {noun}"),
        (_, "child") => format!("{count} children"),
        _ => format!("{count} {noun}s"),
    }
}
