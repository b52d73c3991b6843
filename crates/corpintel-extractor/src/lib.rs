//! Corpintel Extractor
//!
//! Turns free-text prompts into competitive-intelligence records using a
//! text-generation backend.
//!
//! # Architecture
//!
//! ```text
//! prompt → route → operation → template → backend → parser → records
//! ```
//!
//! # Key Features
//!
//! - **Company extraction**: core company names mentioned in a prompt, sorted
//! - **Competitor lookup**: up to five ranked, same-market rivals
//! - **Subsidiary lookup**: majority or fully owned legal entities
//! - **Intent routing**: keyword choice between competitors and subsidiaries
//! - **Lenient parsing**: malformed rows are dropped, malformed replies fail
//!
//! # Example Usage
//!
//! ```
//! use corpintel_extractor::{CompanyIntel, IntelConfig};
//! use corpintel_llm::MockProvider;
//!
//! let llm = MockProvider::new(r#"["Microsoft", "Apple"]"#);
//! let intel = CompanyIntel::new(llm, IntelConfig::default());
//!
//! let companies = intel.extract_companies("Apple Inc and Microsoft Corp").unwrap();
//! assert_eq!(companies, vec!["Apple", "Microsoft"]);
//! ```

#![warn(missing_docs)]

mod analyzer;
mod config;
mod error;
mod intel;
mod parser;
mod router;
mod template;
mod types;

#[cfg(test)]
mod tests;

pub use analyzer::Analyzer;
pub use config::{IntelConfig, DEFAULT_FAST_MODEL, DEFAULT_STRONG_MODEL};
pub use error::IntelError;
pub use intel::CompanyIntel;
pub use parser::{
    parse_competitors, parse_list, parse_string_list, parse_subsidiaries, COMPETITOR_KEYS,
    SUBSIDIARY_KEYS,
};
pub use router::{route, COMPETITOR_KEYWORDS, SUBSIDIARY_KEYWORDS};
pub use template::{render, templates, Bindings, PromptTemplate};
pub use types::{Analysis, CompetitorRecord, Finding, Lookup, SubsidiaryRecord};
