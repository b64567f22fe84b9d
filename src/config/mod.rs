//! Runtime configuration for the salary calculator.
//!
//! Configuration comes only from command-line flags; nothing is read from
//! files or the environment.
//!
//! # Example
//!
//! ```
//! use salary_calculator::config::AppConfig;
//! use tracing::Level;
//!
//! let config = AppConfig::default();
//! assert!(config.clear_screen);
//! assert!(!config.json_output);
//! assert_eq!(config.log_level, Level::WARN);
//! ```

use tracing::Level;

/// Settings that control how the interactive session behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    /// Clear the terminal at the start of each cycle and before re-prompting.
    pub clear_screen: bool,
    /// Print each calculation, audit trace included, as JSON after the report.
    pub json_output: bool,
    /// Maximum level of diagnostic log events written to stderr.
    pub log_level: Level,
}

impl AppConfig {
    /// Maps a `-v` occurrence count to a log level.
    ///
    /// No flag logs warnings only; each `-v` adds a level, up to trace.
    pub fn log_level_for_verbosity(verbose: u8) -> Level {
        match verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            clear_screen: true,
            json_output: false,
            log_level: Level::WARN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(AppConfig::log_level_for_verbosity(0), Level::WARN);
        assert_eq!(AppConfig::log_level_for_verbosity(1), Level::INFO);
        assert_eq!(AppConfig::log_level_for_verbosity(2), Level::DEBUG);
        assert_eq!(AppConfig::log_level_for_verbosity(3), Level::TRACE);
        assert_eq!(AppConfig::log_level_for_verbosity(200), Level::TRACE);
    }
}
