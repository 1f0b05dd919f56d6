//! Top-level module for the quote lookup system.
//!
//! - Topic validation and normalization (`Topic`)
//! - The read-only topic → quotes table (`QuoteCatalog`)
//! - Lookup and sampling (`lookup`, `LookupOutcome`)

/// Validated, normalized topic.
pub mod topic;

/// Immutable mapping from normalized topic to its quotes.
///
/// Supports loading from JSON (string, file, directory or the bundled
/// dataset) and merging several sources.
pub mod catalog;

/// Lookup entry point and random selection of quotes.
pub mod lookup;
