//! Built-in bilingual vocabulary for the Faro assistant.
//!
//! Static tables mapping English and Spanish surface forms into one
//! canonical concept space, plus the stop-words and action verbs the
//! scorer uses. Callers with a different domain can build a
//! [`SynonymTable`](crate::SynonymTable) from their own pairs; these
//! defaults cover the bookkeeping tools Faro ships with.
//!
//! Surface forms must be globally unique: the same word mapping to two
//! canonical terms is rejected at load time.

/// Surface form (lowercase, either language) -> canonical term.
///
/// Canonical terms themselves are self-mapped automatically when the
/// table is built, so they do not need to be listed here.
pub const SYNONYM_PAIRS: &[(&str, &str)] = &[
    // invoice
    ("invoices", "invoice"),
    ("bill", "invoice"),
    ("bills", "invoice"),
    ("factura", "invoice"),
    ("facturas", "invoice"),
    ("recibo", "invoice"),
    ("recibos", "invoice"),
    // customer
    ("customers", "customer"),
    ("client", "customer"),
    ("clients", "customer"),
    ("cliente", "customer"),
    ("clientes", "customer"),
    // payment
    ("payments", "payment"),
    ("pago", "payment"),
    ("pagos", "payment"),
    ("cobro", "payment"),
    ("cobros", "payment"),
    // sale
    ("sales", "sale"),
    ("revenue", "sale"),
    ("income", "sale"),
    ("venta", "sale"),
    ("ventas", "sale"),
    ("ingreso", "sale"),
    ("ingresos", "sale"),
    // expense
    ("expenses", "expense"),
    ("cost", "expense"),
    ("costs", "expense"),
    ("spending", "expense"),
    ("gasto", "expense"),
    ("gastos", "expense"),
    ("costo", "expense"),
    ("costos", "expense"),
    // debt
    ("debts", "debt"),
    ("owed", "debt"),
    ("overdue", "debt"),
    ("deuda", "debt"),
    ("deudas", "debt"),
    ("moroso", "debt"),
    ("morosos", "debt"),
    ("vencido", "debt"),
    ("vencida", "debt"),
    ("vencidas", "debt"),
    // tax
    ("taxes", "tax"),
    ("vat", "tax"),
    ("impuesto", "tax"),
    ("impuestos", "tax"),
    ("iva", "tax"),
    // report
    ("reports", "report"),
    ("statement", "report"),
    ("statements", "report"),
    ("reporte", "report"),
    ("reportes", "report"),
    ("informe", "report"),
    ("informes", "report"),
    // balance
    ("saldo", "balance"),
    ("saldos", "balance"),
    // supplier
    ("suppliers", "supplier"),
    ("vendor", "supplier"),
    ("vendors", "supplier"),
    ("proveedor", "supplier"),
    ("proveedores", "supplier"),
    // quote
    ("quotes", "quote"),
    ("estimate", "quote"),
    ("estimates", "quote"),
    ("presupuesto", "quote"),
    ("presupuestos", "quote"),
    ("cotizacion", "quote"),
    ("cotización", "quote"),
    ("cotizaciones", "quote"),
    // product
    ("products", "product"),
    ("item", "product"),
    ("items", "product"),
    ("producto", "product"),
    ("productos", "product"),
    ("articulo", "product"),
    ("artículo", "product"),
    ("articulos", "product"),
    ("artículos", "product"),
];

/// Canonical term -> Faro tool names known to serve that concept.
///
/// Consumed by the keyword scorer: a query term counts toward a tool even
/// when the caller's catalog omits the keyword, as long as this map lists
/// the tool for it.
pub const TERM_TOOLS: &[(&str, &[&str])] = &[
    ("invoice", &["invoice_list", "invoice_search"]),
    ("customer", &["customer_search"]),
    ("payment", &["payment_list"]),
    ("sale", &["sales_summary"]),
    ("expense", &["expense_list"]),
    ("debt", &["overdue_report"]),
    ("tax", &["tax_summary"]),
    ("report", &["balance_report", "overdue_report"]),
    ("balance", &["balance_report"]),
    ("supplier", &["supplier_list"]),
    ("quote", &["quote_list"]),
    ("product", &["product_list"]),
];

/// Words carrying no routing signal, both languages.
///
/// Kept disjoint from the synonym surface forms: a stop-word is dropped
/// before normalization ever sees it.
pub const STOP_WORDS: &[&str] = &[
    // English
    "a", "an", "the", "i", "me", "my", "we", "our", "you", "your", "of", "for", "to", "from",
    "in", "on", "at", "by", "with", "and", "or", "is", "are", "was", "were", "be", "been", "do",
    "does", "did", "can", "could", "will", "would", "have", "has", "had", "this", "that", "these",
    "those", "it", "its", "please", "show", "give", "tell", "get", "want", "need", "about", "all",
    "any", "some", "how", "what", "when", "which", "who", "much", "many", "data", "info",
    // Spanish
    "el", "la", "los", "las", "un", "una", "unos", "unas", "de", "del", "al", "y", "o", "u",
    "que", "qué", "como", "cómo", "cuando", "cuándo", "cuanto", "cuánto", "cuanta", "cuánta",
    "cuantos", "cuántos", "por", "para", "con", "sin", "en", "es", "son", "fue", "fueron", "ser",
    "estar", "esta", "está", "este", "esto", "hay", "mi", "mis", "tu", "tus", "su", "sus", "yo",
    "mí", "se", "lo", "le", "les", "quiero", "dame", "muestra", "muéstrame", "ver", "tengo",
    "todos", "todas", "todo", "toda", "datos",
];

/// Action verb -> tool-name suffix.
///
/// The suffix re-ranks among tools that already matched on subject
/// keywords; a verb alone never puts a tool on the list.
pub const ACTION_VERBS: &[(&str, &str)] = &[
    ("list", "list"),
    ("listar", "list"),
    ("lista", "list"),
    ("listado", "list"),
    ("find", "search"),
    ("search", "search"),
    ("lookup", "search"),
    ("buscar", "search"),
    ("busca", "search"),
    ("summary", "summary"),
    ("summarize", "summary"),
    ("total", "summary"),
    ("resumen", "summary"),
    ("resumir", "summary"),
    ("report", "report"),
    ("reporte", "report"),
    ("informe", "report"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_surface_forms_are_unique() {
        let mut seen: HashMap<&str, &str> = HashMap::new();
        for (surface, canonical) in SYNONYM_PAIRS {
            if let Some(previous) = seen.insert(surface, canonical) {
                panic!("surface '{surface}' maps to both '{previous}' and '{canonical}'");
            }
        }
    }

    #[test]
    fn test_stop_words_disjoint_from_synonyms() {
        for (surface, _) in SYNONYM_PAIRS {
            assert!(
                !STOP_WORDS.contains(surface),
                "'{surface}' is both a stop-word and a synonym surface"
            );
        }
    }

    #[test]
    fn test_term_tools_keys_are_canonical() {
        let canonicals: Vec<&str> = SYNONYM_PAIRS.iter().map(|(_, c)| *c).collect();
        for (term, tools) in TERM_TOOLS {
            assert!(canonicals.contains(term), "'{term}' has no synonym group");
            assert!(!tools.is_empty());
        }
    }
}
