//! Single-operation commands: companies, competitors, subsidiaries.

use crate::cli::{CompanyArgs, PromptArgs};
use crate::error::Result;
use crate::output::Formatter;
use corpintel_domain::GenerationBackend;
use corpintel_extractor::{Analyzer, IntelError};

/// Execute the companies command.
pub async fn execute_companies<L>(
    args: PromptArgs,
    analyzer: &Analyzer<L>,
    formatter: &Formatter,
) -> Result<()>
where
    L: GenerationBackend + Send + Sync + 'static,
    L::Error: Into<IntelError>,
{
    let prompt = args.text();
    if prompt.trim().is_empty() {
        eprintln!("{}", formatter.warning("Prompt is blank; nothing to extract"));
        return Ok(());
    }

    let companies = analyzer.companies(&prompt).await?;
    println!("{}", formatter.format_companies(&companies)?);
    Ok(())
}

/// Execute the competitors command.
pub async fn execute_competitors<L>(
    args: CompanyArgs,
    analyzer: &Analyzer<L>,
    formatter: &Formatter,
) -> Result<()>
where
    L: GenerationBackend + Send + Sync + 'static,
    L::Error: Into<IntelError>,
{
    let identifier = args.identifier();
    if identifier.is_none() {
        eprintln!("{}", formatter.warning("No --name or --ticker given; nothing to look up"));
        return Ok(());
    }

    let competitors = analyzer.competitors(identifier).await?;
    println!("{}", formatter.format_competitors(&competitors)?);
    Ok(())
}

/// Execute the subsidiaries command.
pub async fn execute_subsidiaries<L>(
    args: CompanyArgs,
    analyzer: &Analyzer<L>,
    formatter: &Formatter,
) -> Result<()>
where
    L: GenerationBackend + Send + Sync + 'static,
    L::Error: Into<IntelError>,
{
    let identifier = args.identifier();
    if identifier.is_none() {
        eprintln!("{}", formatter.warning("No --name or --ticker given; nothing to look up"));
        return Ok(());
    }

    let subsidiaries = analyzer.subsidiaries(identifier).await?;
    println!("{}", formatter.format_subsidiaries(&subsidiaries)?);
    Ok(())
}
