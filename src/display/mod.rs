//! Terminal presentation for the salary calculator.
//!
//! This module turns a [`SalaryCalculation`](crate::models::SalaryCalculation)
//! into the bordered, centered report printed after each calculation, with
//! amounts formatted as Indonesian Rupiah.

mod currency;
mod layout;
mod report;
mod terminal;

pub use currency::{RUPIAH_PREFIX, format_rupiah};
pub use layout::{DISPLAY_WIDTH, border, centered, centered_in};
pub use report::{APP_TITLE, render_breakdown, render_header};
pub use terminal::clear_screen;
