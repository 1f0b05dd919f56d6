use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::error::QuoteError;
use super::catalog::QuoteCatalog;
use super::topic::Topic;

/// Maximum number of quotes returned by one lookup.
pub const MAX_QUOTES: usize = 3;

/// Placeholder shown when a topic has no quotes.
pub const NO_QUOTES_MESSAGE: &str = "No quotes found for this topic. Try \"motivation\", \"life\", or \"love\".";

/// Message shown when the user submits a blank topic.
pub const EMPTY_TOPIC_MESSAGE: &str = "Please enter a topic to find quotes.";

/// Shortcut topics offered next to the input field.
pub const QUICK_TOPICS: [&str; 6] = ["motivation", "life", "love", "success", "happiness", "wisdom"];

/// Result of a lookup on a valid topic.
///
/// A blank topic never produces a `LookupOutcome`; it is rejected
/// earlier with `QuoteError::EmptyTopic`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LookupOutcome {
	/// Between 1 and `MAX_QUOTES` distinct quotes of the topic.
	Selected { quotes: Vec<String> },
	/// Unknown topic, or a topic without quotes.
	Empty { message: String },
}

impl LookupOutcome {
	pub(crate) fn selected(quotes: Vec<String>) -> Self {
		LookupOutcome::Selected { quotes }
	}

	pub(crate) fn empty() -> Self {
		LookupOutcome::Empty { message: NO_QUOTES_MESSAGE.to_owned() }
	}

	/// Returns the selected quotes, or an empty slice.
	pub fn quotes(&self) -> &[String] {
		match self {
			LookupOutcome::Selected { quotes } => quotes,
			LookupOutcome::Empty { .. } => &[],
		}
	}

	pub fn is_empty(&self) -> bool {
		matches!(self, LookupOutcome::Empty { .. })
	}
}

/// Looks a user-entered topic up and picks up to three of its quotes.
///
/// Uses the thread-local generator from `rand::rng()`, seeded from the OS.
/// Two calls with the same topic may return different quotes or a
/// different order.
///
/// # Errors
/// Returns `QuoteError::EmptyTopic` if the topic is blank. The catalog is
/// not read in that case.
pub fn lookup(topic: &str, catalog: &QuoteCatalog) -> Result<LookupOutcome, QuoteError> {
	lookup_with_rng(topic, catalog, &mut rand::rng())
}

/// Same as [`lookup`] with a caller-provided random generator.
pub fn lookup_with_rng<R: Rng + ?Sized>(
	topic: &str,
	catalog: &QuoteCatalog,
	rng: &mut R,
) -> Result<LookupOutcome, QuoteError> {
	let topic = Topic::parse(topic)?;
	Ok(catalog.sample(&topic, rng))
}

/// Picks `min(amount, candidates.len())` distinct quotes in random order.
///
/// Runs a partial Fisher-Yates shuffle over borrowed candidates, so only
/// the chosen quotes are cloned and `candidates` keeps its order.
pub(crate) fn choose_quotes<R: Rng + ?Sized>(
	candidates: &[String],
	amount: usize,
	rng: &mut R,
) -> Vec<String> {
	let mut pool: Vec<&String> = candidates.iter().collect();
	let amount = amount.min(pool.len());
	let (chosen, _) = pool.partial_shuffle(rng, amount);
	chosen.iter().map(|quote| (*quote).to_owned()).collect()
}
