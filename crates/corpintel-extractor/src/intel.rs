//! Extraction operations: render, generate, parse

use crate::config::IntelConfig;
use crate::error::IntelError;
use crate::parser::{parse_competitors, parse_string_list, parse_subsidiaries};
use crate::template::{templates, Bindings, PromptTemplate};
use crate::types::{CompetitorRecord, SubsidiaryRecord};
use corpintel_domain::{GenerationBackend, GenerationRequest, Identifier, ModelTier};
use std::sync::Arc;
use tracing::{debug, info};

/// Fixed backend parameters of one operation
#[derive(Debug, Clone, Copy)]
struct Operation {
    name: &'static str,
    template: PromptTemplate,
    tier: ModelTier,
    max_tokens: u32,
}

const EXTRACT_COMPANIES: Operation = Operation {
    name: "extract_companies",
    template: templates::COMPANY_EXTRACTION,
    tier: ModelTier::Fast,
    max_tokens: 200,
};

const FIND_COMPETITORS: Operation = Operation {
    name: "find_competitors",
    template: templates::COMPETITORS,
    tier: ModelTier::Strong,
    max_tokens: 800,
};

const FIND_SUBSIDIARIES: Operation = Operation {
    name: "find_subsidiaries",
    template: templates::SUBSIDIARIES,
    tier: ModelTier::Fast,
    max_tokens: 800,
};

/// Runs the company-intelligence operations against a generation backend
///
/// Every operation is stateless and issues at most one backend call.
pub struct CompanyIntel<L> {
    backend: Arc<L>,
    config: IntelConfig,
}

impl<L> CompanyIntel<L>
where
    L: GenerationBackend,
    L::Error: Into<IntelError>,
{
    /// Create a new CompanyIntel
    pub fn new(backend: L, config: IntelConfig) -> Self {
        Self {
            backend: Arc::new(backend),
            config,
        }
    }

    /// Configuration in use
    pub fn config(&self) -> &IntelConfig {
        &self.config
    }

    /// Extract company names mentioned in a free-text prompt
    ///
    /// Returns an empty list without calling the backend when the prompt is
    /// empty. Any other prompt, whitespace included, is sent as is; the
    /// result is the non-empty names the backend found, sorted ascending.
    pub fn extract_companies(&self, prompt: &str) -> Result<Vec<String>, IntelError> {
        if prompt.is_empty() {
            return Ok(Vec::new());
        }

        let bindings: Bindings = [("text", prompt)].into_iter().collect();
        let reply = self.run(&EXTRACT_COMPANIES, &bindings)?;

        let mut companies = parse_string_list(&reply)?;
        companies.sort();

        info!("Extracted {} companies", companies.len());
        Ok(companies)
    }

    /// Rank up to five direct competitors of a company
    ///
    /// Returns an empty list without calling the backend when the identifier
    /// is [`Identifier::None`]. Rows come back in the backend's ranking order.
    pub fn find_competitors(
        &self,
        identifier: &Identifier,
    ) -> Result<Vec<CompetitorRecord>, IntelError> {
        if identifier.is_none() {
            return Ok(Vec::new());
        }

        let reply = self.run(&FIND_COMPETITORS, &company_bindings(identifier))?;
        let competitors = parse_competitors(&reply)?;

        info!("Found {} competitors for {}", competitors.len(), identifier);
        Ok(competitors)
    }

    /// List known majority or fully owned subsidiaries of a company
    ///
    /// Same input rule as [`find_competitors`](Self::find_competitors).
    pub fn find_subsidiaries(
        &self,
        identifier: &Identifier,
    ) -> Result<Vec<SubsidiaryRecord>, IntelError> {
        if identifier.is_none() {
            return Ok(Vec::new());
        }

        let reply = self.run(&FIND_SUBSIDIARIES, &company_bindings(identifier))?;
        let subsidiaries = parse_subsidiaries(&reply)?;

        info!("Found {} subsidiaries for {}", subsidiaries.len(), identifier);
        Ok(subsidiaries)
    }

    /// Render the operation's template and make the single backend call
    fn run(&self, operation: &Operation, bindings: &Bindings<'_>) -> Result<String, IntelError> {
        let prompt = operation.template.render(bindings)?;
        let model = self.config.model_for(operation.tier);

        debug!(
            operation = operation.name,
            template_version = operation.template.version(),
            model,
            "Prompt length: {} chars",
            prompt.len()
        );

        let request = GenerationRequest::new(prompt, model, operation.max_tokens);
        let reply = self
            .backend
            .generate(&request)
            .map_err(Into::<IntelError>::into)?;

        debug!(operation = operation.name, "Reply length: {} chars", reply.len());
        Ok(reply)
    }
}

fn company_bindings(identifier: &Identifier) -> Bindings<'_> {
    [
        ("company_name", identifier.name_or_sentinel()),
        ("company_ticker", identifier.ticker_or_sentinel()),
    ]
    .into_iter()
    .collect()
}
