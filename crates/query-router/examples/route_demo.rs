//! Route a handful of queries against the Faro tool catalog.
//!
//! Run with: cargo run -p query-router --example route_demo

use chrono::NaiveDate;
use query_router::{Router, ToolCatalog, ToolMetadata};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("query_router=debug".parse().unwrap()),
        )
        .init();

    let catalog = ToolCatalog::new([
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
        ToolMetadata::new("sales_summary", "Summarize sales for a period")
            .keywords(["sale", "product"])
            .param("start_date")
            .param("end_date")
            .param("group_by"),
        ToolMetadata::new("overdue_report", "Report unpaid and overdue invoices")
            .keywords(["debt", "invoice", "customer"])
            .param("status")
            .param("min_days_overdue"),
    ]);
    let router = Router::with_defaults(catalog)?;
    let today = NaiveDate::from_ymd_opt(2026, 1, 22).expect("valid date");

    let queries = [
        "who owes me money",
        "facturas de la semana pasada",
        "payments last 7 days",
        "facutras del cliente acme",
        "sales summary q3",
        "show me data",
    ];

    for query in queries {
        let result = router.route(query, today);
        println!("query: {query}");
        println!("{}\n", serde_json::to_string_pretty(&result)?);
    }

    Ok(())
}
