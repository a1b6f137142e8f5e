//! CLI argument definitions for `MoocAnalytics`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use mooc_analytics::config::ConfigOverrides;
use mooc_analytics::logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to lowercase
/// strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `file`, `out_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Sum participants per institution.
    ///
    /// With --by-subject, sums per institution-subject pair instead and
    /// ranks the output (descending by participants, ties by key).
    Participation {
        /// Path to the offerings CSV file
        #[arg(value_name = "FILE")]
        dataset: PathBuf,

        /// Aggregate by institution-subject pair instead of institution
        #[arg(long)]
        by_subject: bool,

        /// Write the result as CSV into the configured output directory
        #[arg(long)]
        export: bool,

        /// Explicit output file path (implies --export)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// List each instructor's solo-taught and co-taught course titles.
    Instructors {
        /// Path to the offerings CSV file
        #[arg(value_name = "FILE")]
        dataset: PathBuf,

        /// Write the result as CSV into the configured output directory
        #[arg(long)]
        export: bool,

        /// Explicit output file path (implies --export)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Rank course titles by a metric and return the best K.
    Top {
        /// Path to the offerings CSV file
        #[arg(value_name = "FILE")]
        dataset: PathBuf,

        /// Number of titles to return
        #[arg(short = 'k', long, value_name = "COUNT")]
        count: usize,

        /// Ranking metric: hours or participants
        #[arg(long, value_name = "METRIC", default_value = "participants")]
        by: String,

        /// Write the result as CSV into the configured output directory
        #[arg(long)]
        export: bool,

        /// Explicit output file path (implies --export)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Search course titles by subject, audit rate, and duration.
    Search {
        /// Path to the offerings CSV file
        #[arg(value_name = "FILE")]
        dataset: PathBuf,

        /// Subject substring to match (case-insensitive)
        #[arg(long, value_name = "TEXT")]
        subject: String,

        /// Minimum audited percentage, inclusive
        #[arg(long, value_name = "PERCENT")]
        min_audited: f64,

        /// Maximum total course hours, inclusive
        #[arg(long, value_name = "HOURS")]
        max_hours: f64,

        /// Write the result as CSV into the configured output directory
        #[arg(long)]
        export: bool,

        /// Explicit output file path (implies --export)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Recommend up to ten course titles for a demographic profile.
    Recommend {
        /// Path to the offerings CSV file
        #[arg(value_name = "FILE")]
        dataset: PathBuf,

        /// Target participant age
        #[arg(long, value_name = "YEARS")]
        age: u32,

        /// Target gender, encoded 0 or 1
        #[arg(long, value_name = "0|1")]
        gender: u8,

        /// Holds a bachelor's degree or higher, encoded 0 or 1
        #[arg(long, value_name = "0|1")]
        bachelor: u8,

        /// Write the result as CSV into the configured output directory
        #[arg(long)]
        export: bool,

        /// Explicit output file path (implies --export)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "moocanalytics",
    about = "MoocAnalytics command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config dataset directory
    #[arg(long = "config-data-dir", value_name = "DIR")]
    pub config_data_dir: Option<PathBuf>,

    /// Override config dataset directory (short form)
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override config output directory
    #[arg(long = "config-out-dir", value_name = "DIR")]
    pub config_out_dir: Option<PathBuf>,

    /// Override config output directory (short form)
    #[arg(long = "out-dir", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Transforms CLI arguments into a `ConfigOverrides` struct that can be applied to
    /// the loaded configuration. Short-form flags (e.g., `--out-dir`) take precedence
    /// over long-form flags (e.g., `--config-out-dir`) when both are provided.
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            data_dir: self
                .data_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_data_dir
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
            out_dir: self
                .out_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_out_dir
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
        }
    }
}
