//! Command-line front end for the salary calculator.
//!
//! This module parses flags, sets up diagnostic logging, and drives the
//! interactive prompt-calculate-display loop.

mod args;
mod prompt;
mod session;

pub use args::Cli;
pub use prompt::{Prompter, parse_marital_status, parse_number};
pub use session::{
    BASIC_SALARY_PROMPT, CHILDREN_PROMPT, MARITAL_STATUS_PROMPT, REPEAT_PROMPT, Session,
    YEARS_OF_SERVICE_PROMPT,
};

use is_terminal::IsTerminal;
use tracing::Level;

/// Installs a stderr logging subscriber at the given maximum level.
///
/// Logs never go to stdout, which carries the interactive session. Colour
/// codes are only written when stderr is a terminal.
pub fn init_tracing(level: Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}
