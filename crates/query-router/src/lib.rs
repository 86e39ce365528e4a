//! Natural-language tool routing for the Faro bookkeeping assistant.
//!
//! Given a free-text business query in English or Spanish and a catalog of
//! callable tools, the router returns ranked tool suggestions with
//! pre-filled parameters, or a clarification request when the query is too
//! vague to resolve safely. It never executes anything; callers decide.
//!
//! # Pipeline
//!
//! 1. **Pattern library** - idiomatic phrases ("who owes me money") bound
//!    directly to a tool. Cheapest check, highest confidence, always wins.
//! 2. **Token normalization** - synonym table first, fuzzy typo correction
//!    for whatever the table misses.
//! 3. **Keyword scoring** - token overlap against each tool's keywords,
//!    with a small boost for matching action verbs.
//! 4. **Date interpretation** - runs on every query independently of tool
//!    matching, distinguishing calendar-anchored periods from rolling
//!    windows.
//!
//! No stage treats "no match" as an error; the only hard failure is a
//! contradictory synonym or pattern configuration, rejected at load time.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use query_router::Router;
//! use router_core::{ToolCatalog, ToolMetadata};
//!
//! let catalog = ToolCatalog::new([ToolMetadata::new("invoice_list", "List invoices")
//!     .keyword("invoice")
//!     .param("start_date")
//!     .param("end_date")]);
//! let router = Router::with_defaults(catalog).unwrap();
//!
//! let today = NaiveDate::from_ymd_opt(2026, 1, 22).unwrap();
//! let result = router.route("facturas de la semana pasada", today);
//! assert_eq!(result.top().unwrap().tool, "invoice_list");
//! assert!(result.date_range.is_some());
//! ```

mod dates;
mod fuzzy;
mod patterns;
mod router;
mod scoring;
mod synonyms;
pub mod vocab;

pub use dates::parse_range;
pub use fuzzy::{weighted_ratio, FuzzyCorrector};
pub use patterns::{Pattern, PatternLibrary, PatternMatch};
pub use router::Router;
pub use scoring::KeywordScorer;
pub use synonyms::SynonymTable;

// Re-export the shared types so callers only need one crate.
pub use router_core::{
    ConfigError, Confidence, DateRange, RangeKind, RoutingResult, ToolCatalog, ToolMetadata,
    ToolSuggestion,
};
