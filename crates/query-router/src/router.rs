//! End-to-end query resolution.

use chrono::NaiveDate;
use indexmap::{IndexMap, IndexSet};
use tracing::{debug, info, trace};

use router_core::{
    ConfigError, Confidence, DateRange, RoutingResult, ToolCatalog, ToolMetadata, ToolSuggestion,
};

use crate::dates;
use crate::fuzzy::FuzzyCorrector;
use crate::patterns::{PatternLibrary, PatternMatch};
use crate::scoring::KeywordScorer;
use crate::synonyms::SynonymTable;

/// Maximum number of suggestions returned for one query.
const MAX_SUGGESTIONS: usize = 3;

/// Fixed score assigned to pattern hits, above anything the keyword
/// scorer can produce, so suggestion lists stay uniformly sortable.
const PATTERN_SCORE: f64 = 10.0;

/// Keyword score at which a suggestion is reported as definitive: at
/// least two independent concept matches.
const DEFINITIVE_SCORE: f64 = 2.0;

/// Parameter names pre-filled from a resolved date range.
const START_PARAM: &str = "start_date";
const END_PARAM: &str = "end_date";

/// The tool-routing engine.
///
/// Holds the load-once structures (synonym table, pattern library, tool
/// catalog) by value; none of them is mutated after construction, so one
/// router can serve any number of concurrent queries without locking.
pub struct Router {
    synonyms: SynonymTable,
    patterns: PatternLibrary,
    fuzzy: FuzzyCorrector,
    scorer: KeywordScorer,
    catalog: ToolCatalog,
}

impl Router {
    /// Build a router from explicit components.
    ///
    /// The components carry their own validation; by the time values of
    /// these types exist, the configuration is known to be consistent.
    pub fn new(synonyms: SynonymTable, patterns: PatternLibrary, catalog: ToolCatalog) -> Self {
        info!(
            "Router ready: {} surface forms, {} patterns, {} tools",
            synonyms.len(),
            patterns.len(),
            catalog.len()
        );
        Self {
            synonyms,
            patterns,
            fuzzy: FuzzyCorrector::new(),
            scorer: KeywordScorer::new(),
            catalog,
        }
    }

    /// Build a router with the built-in bilingual vocabulary and patterns.
    ///
    /// Fails fast on contradictory configuration; a router that starts is
    /// a router with a consistent table.
    pub fn with_defaults(catalog: ToolCatalog) -> Result<Self, ConfigError> {
        let synonyms = SynonymTable::with_defaults()?;
        let patterns = PatternLibrary::with_defaults()?;
        Ok(Self::new(synonyms, patterns, catalog))
    }

    /// Resolve a query into ranked tool suggestions.
    ///
    /// `today` anchors date interpretation and is always supplied by the
    /// caller; the engine never reads the clock. Absence of a match at any
    /// stage is a normal return value, never an error: an unresolvable
    /// query comes back with an empty suggestion list and a clarification
    /// prompt.
    pub fn route(&self, query: &str, today: NaiveDate) -> RoutingResult {
        // Date resolution is independent of tool matching and attaches to
        // the result whichever way tool matching goes.
        let date_range = dates::parse_range(query, today);

        if let Some(hit) = self.patterns.find_match(query) {
            debug!(
                "Pattern hit: '{}' -> {} (phrase '{}')",
                query, hit.pattern.tool, hit.phrase
            );
            return RoutingResult {
                query: query.to_string(),
                suggestions: vec![self.pattern_suggestion(&hit, date_range.as_ref())],
                clarification: None,
                date_range,
            };
        }

        let tokens = self.scorer.content_tokens(query);
        let verb_suffixes = self.scorer.verb_suffixes(&tokens);
        let normalized = self.normalize_tokens(&tokens);

        let mut suggestions: Vec<ToolSuggestion> = self
            .catalog
            .iter()
            .filter_map(|tool| {
                let score = self
                    .scorer
                    .score(&normalized, &verb_suffixes, tool, &self.synonyms);
                if score > 0.0 {
                    Some(self.scored_suggestion(tool, score, date_range.as_ref()))
                } else {
                    None
                }
            })
            .collect();

        // Descending score, alphabetical tie-break: catalog load order
        // never decides the outcome.
        suggestions.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.tool.cmp(&b.tool))
        });
        suggestions.truncate(MAX_SUGGESTIONS);

        if suggestions.is_empty() {
            debug!("No tool cleared the bar for '{}': asking to rephrase", query);
            return RoutingResult {
                query: query.to_string(),
                suggestions,
                clarification: Some(clarification_prompt()),
                date_range,
            };
        }

        debug!(
            "Ranked {} suggestion(s) for '{}', top: {}",
            suggestions.len(),
            query,
            suggestions[0].tool
        );
        RoutingResult {
            query: query.to_string(),
            suggestions,
            clarification: None,
            date_range,
        }
    }

    /// Normalize content tokens: synonym table first, fuzzy correction
    /// for whatever the table misses, raw token as the last resort.
    fn normalize_tokens(&self, tokens: &[String]) -> IndexSet<String> {
        tokens
            .iter()
            .map(|token| {
                if let Some(canonical) = self.synonyms.normalize(token) {
                    trace!("Normalized '{}' -> '{}'", token, canonical);
                    canonical.to_string()
                } else if let Some(canonical) = self.fuzzy.correct(token, &self.synonyms) {
                    trace!("Fuzzy-corrected '{}' -> '{}'", token, canonical);
                    canonical.to_string()
                } else {
                    token.clone()
                }
            })
            .collect()
    }

    fn pattern_suggestion(
        &self,
        hit: &PatternMatch<'_>,
        date_range: Option<&DateRange>,
    ) -> ToolSuggestion {
        let tool = self.catalog.get(&hit.pattern.tool);
        let mut prefilled = hit.pattern.params.clone();
        if let Some(metadata) = tool {
            fill_date_params(&mut prefilled, metadata, date_range);
        }
        ToolSuggestion {
            tool: hit.pattern.tool.clone(),
            purpose: tool.map(|t| t.purpose.clone()).unwrap_or_default(),
            key_params: tool.map(|t| t.params.clone()).unwrap_or_default(),
            prefilled,
            score: PATTERN_SCORE,
            confidence: hit.pattern.confidence,
        }
    }

    fn scored_suggestion(
        &self,
        tool: &ToolMetadata,
        score: f64,
        date_range: Option<&DateRange>,
    ) -> ToolSuggestion {
        let mut prefilled = IndexMap::new();
        fill_date_params(&mut prefilled, tool, date_range);
        let confidence = if score >= DEFINITIVE_SCORE {
            Confidence::Definitive
        } else {
            Confidence::ContextDependent
        };
        ToolSuggestion {
            tool: tool.name.clone(),
            purpose: tool.purpose.clone(),
            key_params: tool.params.clone(),
            prefilled,
            score,
            confidence,
        }
    }
}

/// Pre-fill date parameters the tool declares from a resolved range.
fn fill_date_params(
    prefilled: &mut IndexMap<String, String>,
    tool: &ToolMetadata,
    date_range: Option<&DateRange>,
) {
    if let Some(range) = date_range {
        if tool.has_param(START_PARAM) {
            prefilled.insert(START_PARAM.to_string(), range.iso_start());
        }
        if tool.has_param(END_PARAM) {
            prefilled.insert(END_PARAM.to_string(), range.iso_end());
        }
    }
}

/// Prompt returned when nothing cleared the relevance bar. Bilingual,
/// with concrete rephrasings the engine is known to resolve.
fn clarification_prompt() -> String {
    "I couldn't match that to anything I can look up. Try something like \
     \"unpaid invoices\", \"sales summary for last month\", or in Spanish \
     \"facturas de la semana pasada\"."
        .to_string()
}
