//! CLI argument definitions for `curriform`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use curriform::config::ConfigOverrides;
use logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to
/// lowercase strings for config storage and to `logger::Level` for runtime use.
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

/// Mapping-table kinds the matrix command can render
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum MatrixKind {
    /// PEO rows against mission columns
    PeoMission,
    /// Graduate-attribute rows against PEO columns
    GaPeo,
    /// PO rows against PEO columns
    PoPeo,
    /// PO rows against graduate-attribute columns
    PoGa,
    /// Course rows against PO columns (cells show I/E/D)
    CoursePo,
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `weight_tolerance`)
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
    /// Check a proposal for completeness.
    ///
    /// Loads a proposal JSON file, normalizes it, and prints per-course
    /// per-outcome completeness badges plus the program-wide assessment
    /// weight total.
    Check {
        /// Path to a proposal JSON file
        #[arg(value_name = "FILE")]
        input_file: PathBuf,

        /// Exit non-zero when any section is incomplete
        #[arg(long)]
        strict: bool,
    },
    /// Print one cross-reference mapping table from a proposal.
    Matrix {
        /// Path to a proposal JSON file
        #[arg(value_name = "FILE")]
        input_file: PathBuf,

        /// Which mapping table to print
        #[arg(short, long, value_enum)]
        kind: MatrixKind,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "curriform",
    about = "Curriculum proposal validation and normalization CLI",
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

    /// Override the assessment weight tolerance for this run
    #[arg(long = "weight-tolerance", value_name = "EPSILON")]
    pub weight_tolerance: Option<f64>,

    /// Override config proposals directory
    #[arg(long = "proposals-dir", value_name = "DIR")]
    pub proposals_dir: Option<PathBuf>,

    /// Override config reports output directory
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Transforms CLI arguments into a `ConfigOverrides` struct that can be
    /// applied to the loaded configuration; `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().into_owned()),
            verbose: self.config_verbose,
            weight_tolerance: self.weight_tolerance,
            proposals_dir: self
                .proposals_dir
                .as_ref()
                .map(|p| p.to_string_lossy().into_owned()),
            reports_dir: self
                .reports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().into_owned()),
        }
    }
}
