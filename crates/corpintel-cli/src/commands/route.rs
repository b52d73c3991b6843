//! Route command implementation.

use crate::cli::PromptArgs;
use crate::error::Result;
use crate::output::Formatter;
use corpintel_extractor::route;

/// Execute the route command. Makes no backend call.
pub fn execute_route(args: PromptArgs, formatter: &Formatter) -> Result<()> {
    let intent = route(&args.text());
    println!("{}", formatter.format_intent(intent)?);
    Ok(())
}
