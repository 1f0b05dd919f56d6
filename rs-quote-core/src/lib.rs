//! Topic-based quote lookup library.
//!
//! This crate provides the whole logic of the quote generator:
//! - An immutable quote catalog keyed by normalized topic
//! - Topic validation and normalization
//! - Random selection of up to three quotes, without replacement
//! - A bundled dataset compiled into the binary
//!
//! Rendering is left to the callers (HTTP server, desktop UI).

/// Catalog, topic and lookup logic.
pub mod model;

/// Error type for lookups and catalog loading.
pub mod error;

/// I/O utilities (file loading, folder listing).
///
/// Not exposed
pub(crate) mod io;

pub use error::QuoteError;
pub use model::catalog::QuoteCatalog;
pub use model::lookup::{lookup, lookup_with_rng, LookupOutcome, MAX_QUOTES, QUICK_TOPICS};
pub use model::topic::Topic;
