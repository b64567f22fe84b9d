//! Employee salary calculator.
//!
//! This crate computes an employee's total salary from basic pay, years of
//! service, marital status and number of children, and renders the breakdown
//! as a bordered report with amounts in Indonesian Rupiah.

#![warn(missing_docs)]

pub mod calculation;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
