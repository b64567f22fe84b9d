//! Performance benchmarks for the salary calculator.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use salary_calculator::calculation::calculate_salary;
use salary_calculator::display::{format_rupiah, render_breakdown};
use salary_calculator::models::{MaritalStatus, SalaryInput};

fn married_input(children: u32) -> SalaryInput {
    SalaryInput {
        basic_salary: 5_000_000,
        years_of_service: 11,
        marital_status: MaritalStatus::Married,
        number_of_children: children,
    }
}

fn bench_calculate_salary(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate_salary");

    let unmarried = SalaryInput {
        basic_salary: 3_000_000,
        years_of_service: 5,
        marital_status: MaritalStatus::Unmarried,
        number_of_children: 0,
    };
    group.bench_function("unmarried", |b| {
        b.iter(|| calculate_salary(black_box(&unmarried)))
    });

    for children in [0u32, 2, 10] {
        let input = married_input(children);
        group.bench_with_input(BenchmarkId::new("married", children), &input, |b, input| {
            b.iter(|| calculate_salary(black_box(input)))
        });
    }

    group.finish();
}

fn bench_report(c: &mut Criterion) {
    let calculation = calculate_salary(&married_input(2));

    c.bench_function("render_breakdown", |b| {
        b.iter(|| render_breakdown(black_box(&calculation)))
    });

    c.bench_function("format_rupiah", |b| {
        b.iter(|| format_rupiah(black_box(calculation.breakdown.total_salary)))
    });
}

criterion_group!(benches, bench_calculate_salary, bench_report);
criterion_main!(benches);
