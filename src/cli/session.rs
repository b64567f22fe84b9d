//! The interactive salary calculation loop.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::calculation::calculate_salary;
use crate::config::AppConfig;
use crate::display::{render_breakdown, render_header};
use crate::error::{SalaryError, SalaryResult};
use crate::models::{MaritalStatus, SalaryInput};

use super::prompt::Prompter;

/// Prompt for the basic salary.
pub const BASIC_SALARY_PROMPT: &str = "Enter basic salary: ";
/// Prompt for the years of service.
pub const YEARS_OF_SERVICE_PROMPT: &str = "Enter years of service: ";
/// Prompt for the marital status.
pub const MARITAL_STATUS_PROMPT: &str = "Marital status, y (married) or n (not married): ";
/// Prompt for the number of children.
pub const CHILDREN_PROMPT: &str = "Enter number of children: ";
/// Prompt asking whether to run another calculation.
pub const REPEAT_PROMPT: &str = "Type y to start again, or anything else to exit: ";

/// How a single cycle of the session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
enum CycleOutcome {
    /// The user asked for another calculation.
    Repeat,
    /// The user asked to leave.
    Exit,
    /// The cycle was abandoned; show the notice at the top of the next one.
    Restart(String),
}

/// An interactive session reading answers from `R` and writing to `W`.
///
/// # Example
///
/// ```
/// use salary_calculator::cli::Session;
/// use salary_calculator::config::AppConfig;
/// use std::io::Cursor;
///
/// let config = AppConfig { clear_screen: false, ..AppConfig::default() };
/// let input = Cursor::new("3000000\n5\nn\nn\n");
/// let mut session = Session::new(input, Vec::new(), config);
/// session.run().unwrap();
///
/// let output = String::from_utf8(session.into_writer()).unwrap();
/// assert!(output.contains("Total salary: Rp 3.250.000,00"));
/// ```
pub struct Session<R, W> {
    prompter: Prompter<R, W>,
    config: AppConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session over the given reader and writer.
    pub fn new(reader: R, writer: W, config: AppConfig) -> Self {
        Self {
            prompter: Prompter::new(reader, writer, config.clear_screen),
            config,
        }
    }

    /// Consumes the session and returns its writer.
    pub fn into_writer(self) -> W {
        self.prompter.into_writer()
    }

    /// Runs calculation cycles until the user exits or input ends.
    ///
    /// Closed input ends the session normally. Only terminal I/O failures
    /// and serialization failures are returned as errors.
    pub fn run(&mut self) -> SalaryResult<()> {
        info!("salary calculator session started");
        let mut notice = None;
        let mut cycles = 0u32;

        loop {
            cycles += 1;
            match self.run_cycle(notice.take()) {
                Ok(CycleOutcome::Repeat) => debug!(cycle = cycles, "starting another cycle"),
                Ok(CycleOutcome::Restart(message)) => notice = Some(message),
                Ok(CycleOutcome::Exit) => break,
                Err(SalaryError::EndOfInput) => {
                    info!(cycle = cycles, "input closed");
                    writeln!(self.prompter.writer())?;
                    break;
                }
                Err(error) => return Err(error),
            }
        }

        info!(cycles, "salary calculator session ended");
        Ok(())
    }

    fn run_cycle(&mut self, notice: Option<String>) -> SalaryResult<CycleOutcome> {
        self.prompter.clear()?;
        self.write_lines(&render_header())?;
        if let Some(message) = notice {
            writeln!(self.prompter.writer(), "{message}")?;
        }

        let basic_salary: u64 = self.prompter.read_number(BASIC_SALARY_PROMPT)?;
        let years_of_service: u32 = self.prompter.read_number(YEARS_OF_SERVICE_PROMPT)?;

        let marital_status = match self.prompter.read_marital_status(MARITAL_STATUS_PROMPT) {
            Ok(status) => status,
            Err(error @ SalaryError::InvalidMaritalStatus { .. }) => {
                warn!(%error, "restarting cycle");
                return Ok(CycleOutcome::Restart(error.to_string()));
            }
            Err(error) => return Err(error),
        };

        let number_of_children = match marital_status {
            MaritalStatus::Married => self.prompter.read_number(CHILDREN_PROMPT)?,
            MaritalStatus::Unmarried => 0,
        };

        let input = SalaryInput {
            basic_salary,
            years_of_service,
            marital_status,
            number_of_children,
        };
        let calculation = calculate_salary(&input);
        info!(
            basic_salary,
            years_of_service,
            married = marital_status.is_married(),
            number_of_children,
            total_salary = %calculation.breakdown.total_salary.normalize(),
            "calculated salary"
        );

        self.write_lines(&render_breakdown(&calculation))?;
        if self.config.json_output {
            let json = serde_json::to_string_pretty(&calculation)?;
            writeln!(self.prompter.writer(), "{json}")?;
        }

        let answer = self.prompter.read_line(REPEAT_PROMPT)?;
        if answer == "y" {
            Ok(CycleOutcome::Repeat)
        } else {
            Ok(CycleOutcome::Exit)
        }
    }

    fn write_lines(&mut self, lines: &[String]) -> SalaryResult<()> {
        let writer = self.prompter.writer();
        for line in lines {
            writeln!(writer, "{line}")?;
        }
        writer.flush()?;
        Ok(())
    }
}
