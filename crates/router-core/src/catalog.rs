//! Tool catalog consumed by the routing engine.
//!
//! The catalog is supplied by the caller at router construction. Where the
//! data comes from (static registration, a generated index) is outside this
//! crate's concern; once built it is read-only.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Metadata describing one callable tool.
///
/// The router never executes tools; it only needs enough surface to rank
/// them: a name, a one-line purpose for display, the normalized keywords
/// the tool answers to, and the parameter names callers may pre-fill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolMetadata {
    /// Unique tool name (used for dispatch by the caller).
    pub name: String,
    /// One-line human-readable purpose.
    pub purpose: String,
    /// Normalized keywords this tool answers to (canonical terms, lowercase).
    pub keywords: BTreeSet<String>,
    /// Parameter names the tool accepts, in declaration order.
    pub params: Vec<String>,
}

impl ToolMetadata {
    /// Create metadata with a name and purpose, no keywords or parameters.
    pub fn new(name: impl Into<String>, purpose: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            purpose: purpose.into(),
            keywords: BTreeSet::new(),
            params: Vec::new(),
        }
    }

    /// Add a single keyword.
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keywords.insert(keyword.into());
        self
    }

    /// Add several keywords at once.
    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords.extend(keywords.into_iter().map(Into::into));
        self
    }

    /// Add a parameter name.
    pub fn param(mut self, param: impl Into<String>) -> Self {
        self.params.push(param.into());
        self
    }

    /// Whether the tool declares a parameter with the given name.
    pub fn has_param(&self, name: &str) -> bool {
        self.params.iter().any(|p| p == name)
    }
}

/// Read-only index of tools by name.
///
/// Built once at startup. Iteration follows registration order; the router
/// sorts its own output, so registration order never leaks into results.
#[derive(Debug, Clone, Default)]
pub struct ToolCatalog {
    tools: IndexMap<String, ToolMetadata>,
}

impl ToolCatalog {
    /// Build a catalog from tool metadata.
    ///
    /// A tool registered twice under the same name replaces the earlier
    /// entry, matching registry semantics elsewhere in the bot.
    pub fn new(tools: impl IntoIterator<Item = ToolMetadata>) -> Self {
        let tools = tools
            .into_iter()
            .map(|tool| (tool.name.clone(), tool))
            .collect();
        Self { tools }
    }

    /// Look up a tool by name.
    pub fn get(&self, name: &str) -> Option<&ToolMetadata> {
        self.tools.get(name)
    }

    /// Iterate over all tools in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ToolMetadata> {
        self.tools.values()
    }

    /// Registered tool names.
    pub fn names(&self) -> Vec<&str> {
        self.tools.keys().map(|s| s.as_str()).collect()
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tool() -> ToolMetadata {
        ToolMetadata::new("invoice_list", "List invoices for a period")
            .keyword("invoice")
            .param("status")
            .param("start_date")
            .param("end_date")
    }

    #[test]
    fn test_metadata_builder() {
        let tool = sample_tool();
        assert_eq!(tool.name, "invoice_list");
        assert!(tool.keywords.contains("invoice"));
        assert!(tool.has_param("start_date"));
        assert!(!tool.has_param("customer"));
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = ToolCatalog::new([sample_tool()]);
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("invoice_list").is_some());
        assert!(catalog.get("missing").is_none());
        assert_eq!(catalog.names(), vec!["invoice_list"]);
    }

    #[test]
    fn test_catalog_duplicate_name_replaces() {
        let first = ToolMetadata::new("t", "first");
        let second = ToolMetadata::new("t", "second");
        let catalog = ToolCatalog::new([first, second]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("t").unwrap().purpose, "second");
    }
}
