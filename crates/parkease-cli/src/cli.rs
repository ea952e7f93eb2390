//! Clap derive structures for the `parkease` CLI.
//!
//! Defines the complete command tree, global flags, and shared enums.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use parkease_core::Plate;

// ── Top-Level CLI ────────────────────────────────────────────────────

/// parkease -- occupancy and billing for a multi-floor parking facility
#[derive(Debug, Parser)]
#[command(
    name = "parkease",
    version,
    about = "Manage a parking facility from the command line",
    long_about = "Track vehicles in and out of a multi-floor parking facility,\n\
        bill stays at hourly/daily rates, sell monthly subscriptions, and\n\
        report on occupancy. State lives in a JSON data file between runs.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Lot data file (overrides the configured path)
    #[arg(long, env = "PARKEASE_DATA_FILE", global = true)]
    pub data_file: Option<PathBuf>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "PARKEASE_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-oriented text (default)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check a vehicle in and issue a ticket
    #[command(alias = "in")]
    CheckIn {
        /// Registration plate
        plate: Plate,
    },

    /// Check a vehicle out and compute the amount due
    #[command(alias = "out")]
    CheckOut {
        /// Registration plate
        plate: Plate,
    },

    /// Show how many spaces are available
    Spaces,

    /// Pre-register a plate without a physical entry
    Register {
        /// Registration plate
        plate: Plate,
    },

    /// Manage monthly subscriptions
    #[command(alias = "sub")]
    Subscription(SubscriptionArgs),

    /// Occupancy report: daily and hourly entry counts
    Report,

    /// Manage the configuration file
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Subscriptions ────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct SubscriptionArgs {
    #[command(subcommand)]
    pub command: SubscriptionCommand,
}

#[derive(Debug, Subcommand)]
pub enum SubscriptionCommand {
    /// Start a subscription for a plate
    Add {
        /// Registration plate
        plate: Plate,
        /// Length in months
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        months: u32,
    },

    /// Extend an existing subscription
    Extend {
        /// Registration plate
        plate: Plate,
        /// Additional months
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        months: u32,
    },

    /// Show a plate's subscription
    Show {
        /// Registration plate
        plate: Plate,
    },
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the resolved configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Write a default config file if none exists
    Init,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
