//! Intent module - what the user wants to learn about a company

/// Downstream lookup implied by a user prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Direct market competitors
    Competitors,

    /// Majority or fully owned subsidiaries
    Subsidiaries,

    /// No lookup could be chosen
    Unknown,
}

impl Intent {
    /// Get the intent name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Competitors => "competitors",
            Intent::Subsidiaries => "subsidiaries",
            Intent::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
