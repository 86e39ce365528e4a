//! Core types for query routing in the Faro bookkeeping assistant.
//!
//! This crate provides the shared vocabulary between the routing engine and
//! its callers. It defines:
//!
//! - [`ToolMetadata`] / [`ToolCatalog`] - The read-only catalog of callable tools
//! - [`ToolSuggestion`] / [`RoutingResult`] - What a routing pass returns
//! - [`DateRange`] / [`RangeKind`] - Resolved temporal expressions
//! - [`Confidence`] - How sure the engine is about a suggestion
//! - [`ConfigError`] - Load-time configuration failures
//!
//! Everything here is a plain value object. The catalog is built once at
//! startup and never mutated afterward; per-query results are constructed
//! fresh on every call and owned by the caller.

mod catalog;
mod error;
mod result;

pub use catalog::{ToolCatalog, ToolMetadata};
pub use error::ConfigError;
pub use result::{Confidence, DateRange, RangeKind, RoutingResult, ToolSuggestion};
