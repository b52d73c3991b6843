//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use corpintel_domain::Identifier;
use std::path::PathBuf;

/// Corpintel CLI - Competitive intelligence from free-text prompts.
#[derive(Debug, Parser)]
#[command(name = "corpintel")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "CORPINTEL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log pipeline details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

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
    /// Quiet format (names only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract companies, infer intent and look up competitors or subsidiaries
    Analyze(PromptArgs),

    /// Extract company names from a prompt
    Companies(PromptArgs),

    /// Rank direct competitors of a company
    Competitors(CompanyArgs),

    /// List subsidiaries of a company
    Subsidiaries(CompanyArgs),

    /// Show which lookup a prompt would trigger
    Route(PromptArgs),

    /// Inspect or create the configuration file
    Config(ConfigArgs),
}

/// Arguments for commands that take a free-text prompt.
#[derive(Debug, Parser)]
pub struct PromptArgs {
    /// Prompt text (multiple words are joined with spaces)
    #[arg(required = true, num_args = 1..)]
    pub prompt: Vec<String>,
}

impl PromptArgs {
    /// The prompt as a single string.
    pub fn text(&self) -> String {
        self.prompt.join(" ")
    }
}

/// Arguments identifying a company.
#[derive(Debug, Parser)]
pub struct CompanyArgs {
    /// Company name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Stock ticker
    #[arg(short, long)]
    pub ticker: Option<String>,
}

impl CompanyArgs {
    /// Build the identifier; blank values count as absent.
    pub fn identifier(&self) -> Identifier {
        Identifier::from_parts(
            self.name.as_deref().map(str::trim),
            self.ticker.as_deref().map(str::trim),
        )
    }
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration and credential status
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
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
