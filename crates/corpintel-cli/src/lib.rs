//! Corpintel CLI library.
//!
//! Configuration loading, command execution and output formatting for the
//! `corpintel` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;

use corpintel_extractor::{Analyzer, CompanyIntel};
use corpintel_llm::openai::OpenAiProvider;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Build the analyzer the lookup commands run against.
///
/// A missing API key is not an error here; it surfaces on the first
/// backend call.
pub fn build_analyzer(config: &Config) -> Result<Analyzer<OpenAiProvider>> {
    config.intel.validate()?;
    debug!(
        base_url = %config.provider.base_url,
        fast_model = %config.intel.fast_model,
        strong_model = %config.intel.strong_model,
        max_concurrency = config.intel.max_concurrency,
        "Building analyzer"
    );
    let provider = OpenAiProvider::new(config.provider.clone());
    Ok(Analyzer::new(CompanyIntel::new(provider, config.intel.clone())))
}

/// Send logs to stderr. `RUST_LOG` wins over `verbose`.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
