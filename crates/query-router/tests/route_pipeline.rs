//! End-to-end tests for the routing pipeline against a realistic catalog.

use chrono::NaiveDate;
use query_router::{
    Confidence, RangeKind, Router, SynonymTable, ToolCatalog, ToolMetadata,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Thursday in ISO week 4 of 2026.
fn today() -> NaiveDate {
    date(2026, 1, 22)
}

fn catalog() -> ToolCatalog {
    ToolCatalog::new([
        ToolMetadata::new("invoice_list", "List invoices for a period")
            .keyword("invoice")
            .param("status")
            .param("start_date")
            .param("end_date"),
        ToolMetadata::new("invoice_search", "Find a specific invoice")
            .keyword("invoice")
            .param("query")
            .param("customer"),
        ToolMetadata::new("customer_search", "Find customers")
            .keyword("customer")
            .param("query"),
        ToolMetadata::new("payment_list", "List received payments")
            .keyword("payment")
            .param("start_date")
            .param("end_date"),
        ToolMetadata::new("expense_list", "List recorded expenses")
            .keyword("expense")
            .param("category")
            .param("start_date")
            .param("end_date"),
        ToolMetadata::new("sales_summary", "Summarize sales for a period")
            .keywords(["sale", "product"])
            .param("start_date")
            .param("end_date")
            .param("group_by"),
        ToolMetadata::new("overdue_report", "Report unpaid and overdue invoices")
            .keywords(["debt", "invoice", "customer"])
            .param("status")
            .param("min_days_overdue"),
        ToolMetadata::new("tax_summary", "Summarize collected tax")
            .keyword("tax")
            .param("start_date")
            .param("end_date"),
        ToolMetadata::new("balance_report", "Current account balance").keyword("balance"),
    ])
}

fn router() -> Router {
    Router::with_defaults(catalog()).expect("default configuration is consistent")
}

#[test]
fn bilingual_queries_resolve_to_the_same_tool() {
    let router = router();
    let pairs = [
        ("list invoices", "listar facturas"),
        ("find customer", "buscar cliente"),
        ("expenses this month", "gastos de este mes"),
        ("taxes last year", "impuestos del año pasado"),
    ];
    for (english, spanish) in pairs {
        let en = router.route(english, today());
        let es = router.route(spanish, today());
        assert_eq!(
            en.top().map(|s| s.tool.as_str()),
            es.top().map(|s| s.tool.as_str()),
            "'{english}' vs '{spanish}'"
        );
    }
}

#[test]
fn every_surface_form_of_a_concept_normalizes_identically() {
    let table = SynonymTable::with_defaults().unwrap();
    let invoice_forms = ["invoice", "invoices", "bill", "factura", "facturas"];
    for form in invoice_forms {
        assert_eq!(table.normalize(form), Some("invoice"), "form '{form}'");
    }
}

#[test]
fn pattern_phrases_beat_keyword_ranking() {
    let router = router();
    let result = router.route("who owes me money", today());
    assert_eq!(result.suggestions.len(), 1);
    let top = result.top().unwrap();
    assert_eq!(top.tool, "overdue_report");
    assert_eq!(top.confidence, Confidence::Definitive);
    assert_eq!(
        top.prefilled.get("status").map(String::as_str),
        Some("overdue")
    );
}

#[test]
fn calendar_and_rolling_windows_stay_distinct() {
    let router = router();

    let calendar = router.route("invoices last week", today());
    let range = calendar.date_range.unwrap();
    assert_eq!(range.kind, RangeKind::Calendar);
    assert_eq!(range.start, date(2026, 1, 12));
    assert_eq!(range.end, date(2026, 1, 18));

    let rolling = router.route("invoices last 7 days", today());
    let range = rolling.date_range.unwrap();
    assert_eq!(range.kind, RangeKind::Rolling);
    assert_eq!(range.start, date(2026, 1, 15));
    assert_eq!(range.end, date(2026, 1, 22));
}

#[test]
fn vague_query_gets_a_clarification_not_a_guess() {
    let router = router();
    for query in ["show me data", "dame todos los datos", "how much?"] {
        let result = router.route(query, today());
        assert!(result.suggestions.is_empty(), "query '{query}'");
        assert!(result.needs_clarification(), "query '{query}'");
    }
}

#[test]
fn typos_still_route() {
    let router = router();
    let result = router.route("facutras vencidas", today());
    assert!(!result.suggestions.is_empty());
    let names: Vec<&str> = result.suggestions.iter().map(|s| s.tool.as_str()).collect();
    assert!(names.contains(&"overdue_report"), "got {names:?}");
}

#[test]
fn date_prefill_only_touches_declared_params() {
    let router = router();
    let result = router.route("invoices last month", today());
    for suggestion in &result.suggestions {
        if suggestion.tool == "invoice_search" {
            // invoice_search declares no date parameters.
            assert!(suggestion.prefilled.get("start_date").is_none());
        }
        if suggestion.tool == "invoice_list" {
            assert_eq!(
                suggestion.prefilled.get("start_date").map(String::as_str),
                Some("2025-12-01")
            );
            assert_eq!(
                suggestion.prefilled.get("end_date").map(String::as_str),
                Some("2025-12-31")
            );
        }
    }
}

#[test]
fn routing_result_serializes_for_transport() {
    let router = router();
    let result = router.route("unpaid invoices last week", today());
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["query"], "unpaid invoices last week");
    assert_eq!(json["suggestions"][0]["tool"], "invoice_list");
    assert_eq!(json["suggestions"][0]["confidence"], "definitive");
    assert_eq!(json["date_range"]["kind"], "calendar");
}

#[test]
fn results_are_deterministic_across_calls() {
    let router = router();
    let first = router.route("invoice customer payment", today());
    let second = router.route("invoice customer payment", today());
    let names = |r: &query_router::RoutingResult| {
        r.suggestions
            .iter()
            .map(|s| s.tool.clone())
            .collect::<Vec<_>>()
    };
    assert_eq!(names(&first), names(&second));
}
