use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;

use log::{debug, info};
use rand::Rng;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};

use crate::error::QuoteError;
use crate::io::{list_files, normalize_folder, read_file};
use super::lookup::{choose_quotes, LookupOutcome, MAX_QUOTES};
use super::topic::{normalize, Topic};

/// Dataset compiled into the crate.
const BUNDLED_QUOTES: &str = include_str!("../../data/quotes.json");

/// Read-only table of quotes indexed by normalized topic.
///
/// A catalog is built once, then only read. Share it by reference or
/// through an `Arc`; no locking is needed.
///
/// # Invariants
/// - Every key is normalized (trimmed, lower-case) and non-empty
/// - Keys are unique after normalization
/// - A quote appears at most once in a given topic (first occurrence wins)
/// - Quote order is the authoring order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuoteCatalog {
	topics: HashMap<String, Vec<String>>,
}

impl QuoteCatalog {
	/// Builds a catalog from raw `(topic, quotes)` entries.
	///
	/// # Errors
	/// - `QuoteError::BlankCatalogKey` if a key is blank
	/// - `QuoteError::DuplicateTopic` if two keys normalize to the same topic,
	///   including the same key given twice
	pub fn from_entries<I>(raw: I) -> Result<Self, QuoteError>
	where
		I: IntoIterator<Item = (String, Vec<String>)>,
	{
		let raw = raw.into_iter();
		let mut topics = HashMap::with_capacity(raw.size_hint().0);

		for (name, quotes) in raw {
			let key = normalize(&name);
			if key.is_empty() {
				return Err(QuoteError::BlankCatalogKey);
			}
			match topics.entry(key) {
				Entry::Occupied(entry) => {
					return Err(QuoteError::DuplicateTopic(entry.key().to_owned()));
				}
				Entry::Vacant(entry) => {
					entry.insert(dedup(quotes));
				}
			}
		}

		Ok(Self { topics })
	}

	/// Parses a JSON object of `topic -> [quote, ...]`.
	///
	/// A key repeated in the document is a `DuplicateTopic` error.
	pub fn from_json(json: &str) -> Result<Self, QuoteError> {
		let RawEntries(entries) = serde_json::from_str(json)?;
		Self::from_entries(entries)
	}

	/// Loads the dataset shipped with the crate.
	pub fn bundled() -> Result<Self, QuoteError> {
		Self::from_json(BUNDLED_QUOTES)
	}

	/// Loads a catalog from a single JSON file.
	pub fn from_file<P: AsRef<Path>>(filepath: P) -> Result<Self, QuoteError> {
		let path = filepath.as_ref();
		let catalog = Self::from_json(&read_file(path)?)?;
		debug!("loaded {} topics from {}", catalog.len(), path.display());
		Ok(catalog)
	}

	/// Loads and merges every `.json` file of a directory.
	///
	/// # Behavior
	/// - Both `"folder"` and `"folder/"` are accepted, `"."` is the current directory.
	/// - Files are merged in file name order.
	/// - Subdirectories are ignored.
	///
	/// # Errors
	/// - `QuoteError::NotADirectory` if the path is not a directory.
	/// - Any error from loading a single file.
	pub fn from_dir<P: AsRef<Path>>(dirpath: P) -> Result<Self, QuoteError> {
		let folder = normalize_folder(dirpath.as_ref());
		if !folder.is_dir() {
			return Err(QuoteError::NotADirectory(folder));
		}

		let mut catalog = Self::default();
		for file in list_files(&folder, "json")? {
			catalog.merge(&Self::from_file(&file)?);
		}

		info!("loaded {} topics from {}", catalog.len(), folder.display());
		Ok(catalog)
	}

	/// Loads a catalog from a file or a directory of files.
	pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, QuoteError> {
		let path = path.as_ref();
		if path.is_dir() {
			Self::from_dir(path)
		} else {
			Self::from_file(path)
		}
	}

	/// Loads `path` when given, the bundled dataset otherwise.
	pub fn load_or_bundled(path: Option<&Path>) -> Result<Self, QuoteError> {
		match path {
			Some(path) => Self::load(path),
			None => Self::bundled(),
		}
	}

	/// Merges another catalog into this one.
	///
	/// Topics missing here are cloned. Shared topics get the other
	/// catalog's quotes appended, skipping the ones already present.
	pub fn merge(&mut self, other: &Self) {
		for (key, quotes) in &other.topics {
			let existing = self.topics.entry(key.clone()).or_default();
			for quote in quotes {
				if !existing.contains(quote) {
					existing.push(quote.clone());
				}
			}
		}
	}

	/// Returns the quotes of a topic, in authoring order.
	pub fn get(&self, topic: &Topic) -> Option<&[String]> {
		self.topics.get(topic.as_str()).map(Vec::as_slice)
	}

	/// Returns all topic names, sorted.
	pub fn topics(&self) -> Vec<&str> {
		let mut names: Vec<&str> = self.topics.keys().map(String::as_str).collect();
		names.sort_unstable();
		names
	}

	/// Number of topics.
	pub fn len(&self) -> usize {
		self.topics.len()
	}

	pub fn is_empty(&self) -> bool {
		self.topics.is_empty()
	}

	/// Total number of quotes across all topics.
	pub fn quote_count(&self) -> usize {
		self.topics.values().map(Vec::len).sum()
	}

	/// Picks up to `MAX_QUOTES` quotes of a validated topic.
	///
	/// Returns `LookupOutcome::Empty` when the topic is unknown or has no quotes.
	pub fn sample<R: Rng + ?Sized>(&self, topic: &Topic, rng: &mut R) -> LookupOutcome {
		match self.get(topic) {
			Some(candidates) if !candidates.is_empty() => {
				LookupOutcome::selected(choose_quotes(candidates, MAX_QUOTES, rng))
			}
			_ => LookupOutcome::empty(),
		}
	}
}

/// JSON object kept as a list of entries, so repeated keys reach `from_entries`.
struct RawEntries(Vec<(String, Vec<String>)>);

impl<'de> Deserialize<'de> for RawEntries {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		struct EntriesVisitor;

		impl<'de> Visitor<'de> for EntriesVisitor {
			type Value = RawEntries;

			fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				f.write_str("an object of topic to list of quotes")
			}

			fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
				let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
				while let Some(entry) = map.next_entry::<String, Vec<String>>()? {
					entries.push(entry);
				}
				Ok(RawEntries(entries))
			}
		}

		deserializer.deserialize_map(EntriesVisitor)
	}
}

/// Removes repeated quotes, keeping the first occurrence.
fn dedup(quotes: Vec<String>) -> Vec<String> {
	let mut seen = HashSet::with_capacity(quotes.len());
	quotes.into_iter().filter(|quote| seen.insert(quote.clone())).collect()
}
