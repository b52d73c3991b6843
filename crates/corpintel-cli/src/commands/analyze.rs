//! Analyze command implementation.

use crate::cli::PromptArgs;
use crate::error::Result;
use crate::output::Formatter;
use corpintel_domain::GenerationBackend;
use corpintel_extractor::{Analyzer, IntelError};

/// Execute the analyze command.
pub async fn execute_analyze<L>(
    args: PromptArgs,
    analyzer: &Analyzer<L>,
    formatter: &Formatter,
) -> Result<()>
where
    L: GenerationBackend + Send + Sync + 'static,
    L::Error: Into<IntelError>,
{
    let analysis = analyzer.analyze(&args.text()).await?;
    println!("{}", formatter.format_analysis(&analysis)?);
    Ok(())
}
