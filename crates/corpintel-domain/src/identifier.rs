//! Company identifier module

/// Sentinel bound into prompts for an identifying field that was not supplied
pub const NOT_AVAILABLE: &str = "N/A";

/// How the caller identified a company
///
/// Validated once at the operation boundary. Empty strings are treated as
/// absent, so `Identifier::from_parts(Some(""), None)` is [`Identifier::None`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    /// Only the company name is known
    CompanyName(String),

    /// Only the ticker symbol is known
    Ticker(String),

    /// Both name and ticker are known
    Both {
        /// Company name
        name: String,
        /// Ticker symbol
        ticker: String,
    },

    /// Nothing identifies the company
    None,
}

impl Identifier {
    /// Build an identifier from optional name and ticker
    pub fn from_parts(name: Option<&str>, ticker: Option<&str>) -> Self {
        let name = name.filter(|s| !s.is_empty());
        let ticker = ticker.filter(|s| !s.is_empty());

        match (name, ticker) {
            (Some(name), Some(ticker)) => Identifier::Both {
                name: name.to_string(),
                ticker: ticker.to_string(),
            },
            (Some(name), None) => Identifier::CompanyName(name.to_string()),
            (None, Some(ticker)) => Identifier::Ticker(ticker.to_string()),
            (None, None) => Identifier::None,
        }
    }

    /// Company name, if known
    pub fn name(&self) -> Option<&str> {
        match self {
            Identifier::CompanyName(name) | Identifier::Both { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Ticker symbol, if known
    pub fn ticker(&self) -> Option<&str> {
        match self {
            Identifier::Ticker(ticker) | Identifier::Both { ticker, .. } => Some(ticker),
            _ => None,
        }
    }

    /// True when no identifying field is present
    pub fn is_none(&self) -> bool {
        matches!(self, Identifier::None)
    }

    /// Name for prompt binding, `"N/A"` when absent
    pub fn name_or_sentinel(&self) -> &str {
        self.name().unwrap_or(NOT_AVAILABLE)
    }

    /// Ticker for prompt binding, `"N/A"` when absent
    pub fn ticker_or_sentinel(&self) -> &str {
        self.ticker().unwrap_or(NOT_AVAILABLE)
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Identifier::CompanyName(name) => write!(f, "{}", name),
            Identifier::Ticker(ticker) => write!(f, "{}", ticker),
            Identifier::Both { name, ticker } => write!(f, "{} ({})", name, ticker),
            Identifier::None => write!(f, "<none>"),
        }
    }
}
