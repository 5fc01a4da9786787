//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Sanak CLI - Name family relationships from a family document.
#[derive(Debug, Parser)]
#[command(name = "sanak")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Language for kinship terms
    #[arg(short, long, value_enum, global = true, env = "SANAK_LOCALE")]
    pub locale: Option<LocaleArg>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (plain lines)
    Quiet,
}

/// Locale options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LocaleArg {
    /// English
    En,
    /// Indonesian
    Id,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Name one person from another's point of view
    Resolve(ResolveArgs),

    /// Name everyone in the tree from one point of view
    Labels(LabelsArgs),

    /// Report structural problems in a family document
    Check(CheckArgs),

    /// Compute node positions for drawing the tree
    Layout(LayoutArgs),

    /// Show or change CLI settings
    Config(ConfigArgs),
}

/// Arguments for the resolve command.
#[derive(Debug, Parser)]
pub struct ResolveArgs {
    /// Family document (YAML, or JSON with a .json extension)
    pub file: PathBuf,

    /// Id of the point-of-view person
    pub pov: String,

    /// Id of the person to name
    pub target: String,
}

/// Arguments for the labels command.
#[derive(Debug, Parser)]
pub struct LabelsArgs {
    /// Family document (YAML, or JSON with a .json extension)
    pub file: PathBuf,

    /// Id of the point-of-view person
    pub pov: String,

    /// Leave out people labelled only as a generic relative
    #[arg(long)]
    pub known_only: bool,
}

/// Arguments for the check command.
#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// Family document (YAML, or JSON with a .json extension)
    pub file: PathBuf,

    /// Exit with an error when any problem is found
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the layout command.
#[derive(Debug, Parser)]
pub struct LayoutArgs {
    /// Family document (YAML, or JSON with a .json extension)
    pub file: PathBuf,

    /// Print the layout engine input instead of running the built-in engine
    #[arg(long)]
    pub request: bool,

    /// Horizontal gap between nodes
    #[arg(long, default_value = "40")]
    pub node_spacing: f64,

    /// Vertical gap between generations
    #[arg(long, default_value = "80")]
    pub layer_spacing: f64,
}

/// Arguments for settings management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Settings management actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Show current settings
    Show,

    /// Print the configuration file path
    Path,

    /// Change a setting
    Set {
        /// Setting name (color, format, locale)
        key: String,
        /// New value
        value: String,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<LocaleArg> for sanak_domain::Locale {
    fn from(locale: LocaleArg) -> Self {
        match locale {
            LocaleArg::En => sanak_domain::Locale::En,
            LocaleArg::Id => sanak_domain::Locale::Id,
        }
    }
}
