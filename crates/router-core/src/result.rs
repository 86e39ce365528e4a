//! Value objects produced by a routing pass.

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// How sure the engine is that a suggestion is what the user meant.
///
/// Closed variant set so callers can exhaustively handle both cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    /// The query can only reasonably mean this tool.
    Definitive,
    /// A plausible reading; the caller may want to confirm.
    ContextDependent,
}

/// Whether a date range is aligned to calendar boundaries or counted
/// backward from the reference date.
///
/// "Last week" (the previous ISO week) and "last 7 days" are lexically
/// close but produce different spans; the tag keeps them distinguishable
/// downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeKind {
    /// Aligned to fixed period boundaries (week, month, quarter, year).
    Calendar,
    /// Fixed-length window ending at the reference date.
    Rolling,
}

/// An inclusive date span resolved from a natural-language expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the span, inclusive.
    pub start: NaiveDate,
    /// Last day of the span, inclusive.
    pub end: NaiveDate,
    /// Calendar-anchored or rolling.
    pub kind: RangeKind,
}

impl DateRange {
    /// A calendar-anchored span.
    pub fn calendar(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end,
            kind: RangeKind::Calendar,
        }
    }

    /// A rolling window ending at the reference date.
    pub fn rolling(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end,
            kind: RangeKind::Rolling,
        }
    }

    /// Number of days covered, both endpoints inclusive.
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Start date as an ISO-8601 string (`YYYY-MM-DD`).
    pub fn iso_start(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    /// End date as an ISO-8601 string (`YYYY-MM-DD`).
    pub fn iso_end(&self) -> String {
        self.end.format("%Y-%m-%d").to_string()
    }
}

/// One candidate tool for a query, with pre-filled parameter values.
///
/// Immutable once constructed; the engine suggests, callers decide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSuggestion {
    /// Tool name, matching an entry in the caller's catalog.
    pub tool: String,
    /// One-line purpose, copied from the catalog for display.
    pub purpose: String,
    /// Parameter names the tool accepts.
    pub key_params: Vec<String>,
    /// Parameter values the engine could fill in from the query.
    pub prefilled: IndexMap<String, String>,
    /// Relevance score; higher is better.
    pub score: f64,
    /// How sure the engine is about this suggestion.
    pub confidence: Confidence,
}

/// The outcome of routing one query.
///
/// A non-empty `clarification` is a first-class successful outcome, not a
/// failure: it means the engine declined to guess. The resolved date range
/// is attached whenever the query contained a recognized temporal phrase,
/// independent of how tool matching went.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingResult {
    /// The original query text, untouched.
    pub query: String,
    /// Candidate tools, descending score, alphabetical tie-break.
    pub suggestions: Vec<ToolSuggestion>,
    /// Prompt to show the user when no tool could be suggested.
    pub clarification: Option<String>,
    /// Resolved temporal expression, if the query contained one.
    pub date_range: Option<DateRange>,
}

impl RoutingResult {
    /// Whether the engine is asking the user to rephrase.
    pub fn needs_clarification(&self) -> bool {
        self.clarification.is_some()
    }

    /// The best suggestion, if any.
    pub fn top(&self) -> Option<&ToolSuggestion> {
        self.suggestions.first()
    }
}
