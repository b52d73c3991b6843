//! Model tier module - cost/quality class of a generation model

/// Class of generation model an operation asks for
///
/// Operations fix their tier; deployment configuration decides which
/// concrete model identifier each tier resolves to.
/// - Fast: cheaper model for extraction and listing tasks
/// - Strong: more capable model for ranking and judgement tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelTier {
    /// Cheap, low-latency model
    Fast,

    /// More capable model
    Strong,
}

impl ModelTier {
    /// Get the tier name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelTier::Fast => "fast",
            ModelTier::Strong => "strong",
        }
    }
}

impl std::fmt::Display for ModelTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
