//! Types for extraction results

use corpintel_domain::Intent;
use serde::{Deserialize, Serialize};

/// A direct competitor of the queried company
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitorRecord {
    /// Directness ranking, 1 = most direct
    pub rank: u32,

    /// Official competitor name
    pub company_name: String,

    /// Primary-exchange ticker, or "N/A"
    pub ticker: String,

    /// Segment in which the two companies compete
    pub reason: String,
}

/// A majority or fully owned subsidiary of the queried company
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubsidiaryRecord {
    /// Legal name of the subsidiary
    pub company_name: String,

    /// Ticker if separately listed, or "N/A"
    pub ticker: String,

    /// Business or relationship to the parent
    pub details: String,
}

/// Lookup results for one company
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "records", rename_all = "snake_case")]
pub enum Lookup {
    /// Result of a competitor lookup
    Competitors(Vec<CompetitorRecord>),

    /// Result of a subsidiary lookup
    Subsidiaries(Vec<SubsidiaryRecord>),
}

/// One company together with its lookup result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    /// Company name as extracted from the prompt
    pub company: String,

    /// What was found for it
    #[serde(flatten)]
    pub lookup: Lookup,
}

/// Result of analysing a free-text prompt end to end
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Companies extracted from the prompt, sorted
    pub companies: Vec<String>,

    /// Intent the prompt was routed to
    pub intent: Intent,

    /// Per-company lookups, in the order of `companies`
    pub findings: Vec<Finding>,
}
