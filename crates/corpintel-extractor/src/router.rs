//! Keyword-based intent routing for free-text prompts

use corpintel_domain::Intent;
use tracing::debug;

/// Phrases that signal a competitor lookup
pub const COMPETITOR_KEYWORDS: &[&str] = &[
    "competitor",
    "competitors",
    "rival",
    "rivals",
    "compete",
    "vs",
    "versus",
    "against",
    "peer",
    "peers",
    "market share",
];

/// Phrases that signal a subsidiary lookup
pub const SUBSIDIARY_KEYWORDS: &[&str] = &[
    "subsidiary",
    "subsidiaries",
    "child company",
    "child companies",
    "division",
    "divisions",
    "business unit",
    "business units",
    "owned subsidiary",
    "wholly owned",
    "acquired unit",
];

/// Decide which lookup a prompt asks for
///
/// Keywords match as case-insensitive substrings. Competitors win when both
/// sets match and when neither does.
pub fn route(prompt: &str) -> Intent {
    let text = prompt.to_lowercase();

    let competitor_hit = COMPETITOR_KEYWORDS.iter().any(|k| text.contains(k));
    let subsidiary_hit = SUBSIDIARY_KEYWORDS.iter().any(|k| text.contains(k));

    let intent = match (competitor_hit, subsidiary_hit) {
        (true, false) => Intent::Competitors,
        (false, true) => Intent::Subsidiaries,
        // Unknown is unreachable with these tables
        _ if competitor_hit || !subsidiary_hit => Intent::Competitors,
        _ => Intent::Unknown,
    };

    debug!(competitor_hit, subsidiary_hit, "Routed prompt to {}", intent);
    intent
}
