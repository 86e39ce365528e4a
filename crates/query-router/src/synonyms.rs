//! Bilingual synonym table mapping surface forms to canonical terms.

use indexmap::IndexMap;
use tracing::info;

use router_core::ConfigError;

use crate::vocab;

/// Immutable mapping from surface term (either language) to a canonical
/// business concept, plus canonical term -> candidate tool names.
///
/// Built once at startup and shared read-only across queries. A lookup
/// miss is a normal outcome (`None`), never an error; callers fall back to
/// fuzzy correction or treat the token as an opaque keyword.
#[derive(Debug, Clone)]
pub struct SynonymTable {
    /// Surface form -> canonical term. Canonical terms are self-mapped.
    entries: IndexMap<String, String>,
    /// Canonical term -> tool names known to serve that concept.
    term_tools: IndexMap<String, Vec<String>>,
}

impl SynonymTable {
    /// Build a table from (surface form, canonical term) pairs and a
    /// canonical term -> tool names map.
    ///
    /// Every canonical term is additionally inserted as a self-mapped
    /// entry so it is reachable by fuzzy lookup. A surface form mapping to
    /// two different canonical terms is a configuration error; the table
    /// refuses to build rather than silently keeping either entry.
    pub fn from_pairs<'a, P, T>(pairs: P, term_tools: T) -> Result<Self, ConfigError>
    where
        P: IntoIterator<Item = &'a (&'a str, &'a str)>,
        T: IntoIterator<Item = &'a (&'a str, &'a [&'a str])>,
    {
        let mut entries: IndexMap<String, String> = IndexMap::new();
        for (surface, canonical) in pairs {
            insert_entry(&mut entries, surface, canonical)?;
            // Canonical terms self-map so exact and fuzzy lookups find them.
            insert_entry(&mut entries, canonical, canonical)?;
        }

        let term_tools = term_tools
            .into_iter()
            .map(|(term, tools)| {
                (
                    term.to_string(),
                    tools.iter().map(|t| t.to_string()).collect(),
                )
            })
            .collect();

        Ok(Self {
            entries,
            term_tools,
        })
    }

    /// Build the table from the built-in bilingual vocabulary.
    pub fn with_defaults() -> Result<Self, ConfigError> {
        let table = Self::from_pairs(vocab::SYNONYM_PAIRS, vocab::TERM_TOOLS)?;
        info!(
            "Loaded synonym table: {} surface forms, {} concepts with tool hints",
            table.len(),
            table.term_tools.len()
        );
        Ok(table)
    }

    /// Normalize a lower-cased token or short phrase to its canonical term.
    ///
    /// Returns `None` when the term is unknown; callers fall back to the
    /// fuzzy corrector or keep the raw token.
    pub fn normalize(&self, term: &str) -> Option<&str> {
        self.entries.get(term).map(|s| s.as_str())
    }

    /// Tool names known to serve a canonical term. Empty for unknown terms.
    pub fn tools_for(&self, canonical: &str) -> &[String] {
        self.term_tools
            .get(canonical)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// All surface forms, in registration order. The fuzzy corrector's
    /// search space.
    pub fn vocabulary(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|s| s.as_str())
    }

    /// Number of surface forms registered.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Insert one mapping, rejecting a surface form that already maps to a
/// different canonical term. Re-registering the identical mapping is fine.
fn insert_entry(
    entries: &mut IndexMap<String, String>,
    surface: &str,
    canonical: &str,
) -> Result<(), ConfigError> {
    match entries.get(surface) {
        Some(existing) if existing != canonical => Err(ConfigError::DuplicateSynonym {
            surface: surface.to_string(),
            existing: existing.clone(),
            conflicting: canonical.to_string(),
        }),
        Some(_) => Ok(()),
        None => {
            entries.insert(surface.to_string(), canonical.to_string());
            Ok(())
        }
    }
}
