use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use salary_calculator::cli::{Cli, Session, init_tracing};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = cli.to_config();
    init_tracing(config.log_level);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), config);

    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "session failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
