//! Idiomatic phrase patterns bound directly to tools.
//!
//! Business idioms ("who owes me money", "quién me debe dinero") do not
//! decompose usefully into keyword overlap; they are recognized as whole
//! units before any scoring is attempted, and a pattern hit always takes
//! precedence over the keyword scorer.

use indexmap::IndexMap;
use tracing::info;

use router_core::{ConfigError, Confidence};

/// A set of equivalent surface phrases bound to one tool.
///
/// All phrases in one pattern are mutual paraphrases; the same phrase may
/// not appear in two patterns (rejected at load time).
#[derive(Debug, Clone)]
pub struct Pattern {
    /// Equivalent phrases, lowercase, both languages.
    pub phrases: Vec<String>,
    /// Target tool name.
    pub tool: String,
    /// Parameter values implied by the phrasing.
    pub params: IndexMap<String, String>,
    /// Fixed confidence for hits on this pattern.
    pub confidence: Confidence,
}

impl Pattern {
    /// New pattern for a tool with a fixed confidence and no phrases yet.
    pub fn new(tool: impl Into<String>, confidence: Confidence) -> Self {
        Self {
            phrases: Vec::new(),
            tool: tool.into(),
            params: IndexMap::new(),
            confidence,
        }
    }

    /// Register an equivalent phrase. Stored lowercase.
    pub fn phrase(mut self, phrase: impl Into<String>) -> Self {
        self.phrases.push(phrase.into().to_lowercase());
        self
    }

    /// Add a suggested parameter value implied by the phrasing.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

/// A successful pattern lookup: the pattern and the phrase that hit.
#[derive(Debug, Clone, Copy)]
pub struct PatternMatch<'a> {
    pub pattern: &'a Pattern,
    pub phrase: &'a str,
}

/// Ordered, immutable collection of patterns.
#[derive(Debug, Clone)]
pub struct PatternLibrary {
    patterns: Vec<Pattern>,
}

impl PatternLibrary {
    /// Build a library, rejecting patterns with no phrases and phrases
    /// registered twice across patterns.
    pub fn new(patterns: Vec<Pattern>) -> Result<Self, ConfigError> {
        let mut seen: IndexMap<&str, &str> = IndexMap::new();
        for pattern in &patterns {
            if pattern.phrases.is_empty() {
                return Err(ConfigError::EmptyPattern {
                    tool: pattern.tool.clone(),
                });
            }
            for phrase in &pattern.phrases {
                // No phrase may belong to two patterns, same tool or not.
                if let Some(existing_tool) = seen.insert(phrase, &pattern.tool) {
                    return Err(ConfigError::DuplicatePatternPhrase {
                        phrase: phrase.clone(),
                        existing_tool: existing_tool.to_string(),
                        conflicting_tool: pattern.tool.clone(),
                    });
                }
            }
        }
        Ok(Self { patterns })
    }

    /// Build the library of built-in Faro idioms.
    pub fn with_defaults() -> Result<Self, ConfigError> {
        let library = Self::new(default_patterns())?;
        info!("Loaded pattern library: {} patterns", library.len());
        Ok(library)
    }

    /// Case-insensitive containment match against all registered phrases.
    ///
    /// Binary hit/miss; the library never scores. When several phrases
    /// match, the longest wins, and registration order breaks ties.
    pub fn find_match(&self, query: &str) -> Option<PatternMatch<'_>> {
        let query = query.to_lowercase();
        let mut best: Option<PatternMatch<'_>> = None;
        for pattern in &self.patterns {
            for phrase in &pattern.phrases {
                if query.contains(phrase.as_str()) {
                    let longer = best.map_or(true, |m| phrase.len() > m.phrase.len());
                    if longer {
                        best = Some(PatternMatch { pattern, phrase });
                    }
                }
            }
        }
        best
    }

    /// Number of registered patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the library is empty.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// The built-in bilingual idioms, bound to Faro tool names.
pub fn default_patterns() -> Vec<Pattern> {
    vec![
        Pattern::new("overdue_report", Confidence::Definitive)
            .phrase("who owes me money")
            .phrase("who owes me")
            .phrase("quién me debe dinero")
            .phrase("quien me debe dinero")
            .phrase("quién me debe")
            .phrase("quien me debe")
            .param("status", "overdue"),
        Pattern::new("invoice_list", Confidence::Definitive)
            .phrase("unpaid invoices")
            .phrase("outstanding invoices")
            .phrase("facturas sin pagar")
            .phrase("facturas impagas")
            .phrase("facturas pendientes")
            .param("status", "unpaid"),
        Pattern::new("balance_report", Confidence::Definitive)
            .phrase("how much money do i have")
            .phrase("current balance")
            .phrase("cuánto dinero tengo")
            .phrase("cuanto dinero tengo")
            .phrase("saldo actual"),
        Pattern::new("sales_summary", Confidence::ContextDependent)
            .phrase("how much did i sell")
            .phrase("cuánto vendí")
            .phrase("cuanto vendi"),
        Pattern::new("sales_summary", Confidence::ContextDependent)
            .phrase("best selling products")
            .phrase("top selling products")
            .phrase("productos más vendidos")
            .phrase("productos mas vendidos")
            .param("group_by", "product"),
        Pattern::new("expense_list", Confidence::ContextDependent)
            .phrase("where did my money go")
            .phrase("en qué gasté")
            .phrase("en que gaste"),
    ]
}
