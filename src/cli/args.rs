//! Command-line argument parsing.
//!
//! This module defines the CLI interface using clap.

use clap::Parser;

use crate::config::AppConfig;

/// Employee salary calculator
#[derive(Parser, Debug)]
#[command(name = "salary-calculator")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Do not clear the terminal between calculations
    #[arg(long)]
    pub no_clear: bool,

    /// Also print each calculation as JSON, with its audit trace
    #[arg(long)]
    pub json: bool,

    /// Verbosity level for diagnostics on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Builds the session configuration from the parsed flags.
    pub fn to_config(&self) -> AppConfig {
        AppConfig {
            clear_screen: !self.no_clear,
            json_output: self.json,
            log_level: AppConfig::log_level_for_verbosity(self.verbose),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    #[test]
    fn test_no_flags_gives_default_config() {
        let cli = Cli::try_parse_from(["salary-calculator"]).unwrap();
        assert_eq!(cli.to_config(), AppConfig::default());
    }

    #[test]
    fn test_flags_map_to_config() {
        let cli =
            Cli::try_parse_from(["salary-calculator", "--no-clear", "--json", "-vv"]).unwrap();
        let config = cli.to_config();

        assert!(!config.clear_screen);
        assert!(config.json_output);
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["salary-calculator", "--tax-table"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
