//! Async front end: prompt → companies → intent → per-company lookups

use crate::error::IntelError;
use crate::intel::CompanyIntel;
use crate::router::route;
use crate::types::{Analysis, CompetitorRecord, Finding, Lookup, SubsidiaryRecord};
use corpintel_domain::{GenerationBackend, Identifier, Intent};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info};

/// Drives [`CompanyIntel`] from async code
///
/// Backend calls block, so each operation runs on tokio's blocking pool.
/// Per-company lookups fan out with at most `max_concurrency` in flight.
pub struct Analyzer<L> {
    intel: Arc<CompanyIntel<L>>,
}

impl<L> Analyzer<L>
where
    L: GenerationBackend + Send + Sync + 'static,
    L::Error: Into<IntelError>,
{
    /// Create a new Analyzer
    pub fn new(intel: CompanyIntel<L>) -> Self {
        Self {
            intel: Arc::new(intel),
        }
    }

    /// Extract companies from a prompt
    pub async fn companies(&self, prompt: &str) -> Result<Vec<String>, IntelError> {
        let intel = Arc::clone(&self.intel);
        let prompt = prompt.to_string();
        run_blocking(move || intel.extract_companies(&prompt)).await
    }

    /// Find competitors of a company
    pub async fn competitors(
        &self,
        identifier: Identifier,
    ) -> Result<Vec<CompetitorRecord>, IntelError> {
        let intel = Arc::clone(&self.intel);
        run_blocking(move || intel.find_competitors(&identifier)).await
    }

    /// Find subsidiaries of a company
    pub async fn subsidiaries(
        &self,
        identifier: Identifier,
    ) -> Result<Vec<SubsidiaryRecord>, IntelError> {
        let intel = Arc::clone(&self.intel);
        run_blocking(move || intel.find_subsidiaries(&identifier)).await
    }

    /// Analyse a free-text prompt end to end
    ///
    /// Extracts the companies, routes the prompt, then looks up competitors
    /// or subsidiaries for every company. Findings follow the sorted company
    /// order. The first failing lookup aborts the analysis. A blank prompt
    /// is answered without any backend call.
    pub async fn analyze(&self, prompt: &str) -> Result<Analysis, IntelError> {
        let intent = route(prompt);
        let companies = if prompt.trim().is_empty() {
            Vec::new()
        } else {
            self.companies(prompt).await?
        };

        if companies.is_empty() {
            info!("No companies extracted; skipping {} lookup", intent);
            return Ok(Analysis {
                companies,
                intent,
                findings: Vec::new(),
            });
        }

        let findings = match intent {
            Intent::Unknown => Vec::new(),
            _ => self.lookup_all(&companies, intent).await?,
        };

        info!(
            "Analysis complete: {} companies, intent {}, {} findings",
            companies.len(),
            intent,
            findings.len()
        );

        Ok(Analysis {
            companies,
            intent,
            findings,
        })
    }

    async fn lookup_all(
        &self,
        companies: &[String],
        intent: Intent,
    ) -> Result<Vec<Finding>, IntelError> {
        let limit = self.intel.config().max_concurrency.max(1);
        let semaphore = Arc::new(Semaphore::new(limit));
        let mut tasks = JoinSet::new();

        debug!("Looking up {} companies, {} at a time", companies.len(), limit);

        for (idx, company) in companies.iter().cloned().enumerate() {
            let intel = Arc::clone(&self.intel);
            let semaphore = Arc::clone(&semaphore);

            tasks.spawn(async move {
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .map_err(|e| IntelError::Backend(format!("Lookup pool closed: {}", e)))?;
                let finding = run_blocking(move || lookup(&*intel, company, intent)).await?;
                Ok::<_, IntelError>((idx, finding))
            });
        }

        let mut slots: Vec<Option<Finding>> = vec![None; companies.len()];
        while let Some(joined) = tasks.join_next().await {
            let (idx, finding) = joined
                .map_err(|e| IntelError::Backend(format!("Task join error: {}", e)))??;
            slots[idx] = Some(finding);
        }

        Ok(slots.into_iter().flatten().collect())
    }
}

fn lookup<L>(intel: &CompanyIntel<L>, company: String, intent: Intent) -> Result<Finding, IntelError>
where
    L: GenerationBackend,
    L::Error: Into<IntelError>,
{
    let identifier = Identifier::CompanyName(company.clone());
    let lookup = match intent {
        Intent::Subsidiaries => Lookup::Subsidiaries(intel.find_subsidiaries(&identifier)?),
        _ => Lookup::Competitors(intel.find_competitors(&identifier)?),
    };
    Ok(Finding { company, lookup })
}

async fn run_blocking<T, F>(f: F) -> Result<T, IntelError>
where
    F: FnOnce() -> Result<T, IntelError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| IntelError::Backend(format!("Task join error: {}", e)))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IntelConfig;
    use corpintel_llm::MockProvider;

    #[tokio::test]
    async fn test_no_companies_skips_lookups() {
        let provider = MockProvider::new("[]");
        let analyzer = Analyzer::new(CompanyIntel::new(provider.clone(), IntelConfig::default()));

        let analysis = analyzer.analyze("nothing to see here").await.unwrap();
        assert!(analysis.companies.is_empty());
        assert!(analysis.findings.is_empty());
        assert_eq!(analysis.intent, Intent::Competitors);
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_blank_prompt_makes_no_calls() {
        let provider = MockProvider::new("[]");
        let analyzer = Analyzer::new(CompanyIntel::new(provider.clone(), IntelConfig::default()));

        let analysis = analyzer.analyze("   ").await.unwrap();
        assert!(analysis.companies.is_empty());
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_async_wrappers_respect_empty_input() {
        let provider = MockProvider::default();
        let analyzer = Analyzer::new(CompanyIntel::new(provider.clone(), IntelConfig::default()));

        assert!(analyzer.competitors(Identifier::None).await.unwrap().is_empty());
        assert!(analyzer.subsidiaries(Identifier::None).await.unwrap().is_empty());
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_credential_surfaces() {
        let provider = MockProvider::without_credential();
        let analyzer = Analyzer::new(CompanyIntel::new(provider, IntelConfig::default()));

        let result = analyzer.analyze("competitors of Apple").await;
        assert!(matches!(result, Err(IntelError::MissingCredential)));
    }
}
