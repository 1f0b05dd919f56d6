//! Error type shared by catalog loading and topic lookup.

use std::path::PathBuf;

use thiserror::Error;

use crate::model::lookup::EMPTY_TOPIC_MESSAGE;

/// Errors raised while loading a catalog or validating a topic.
///
/// Only [`QuoteError::EmptyTopic`] can come out of a lookup. The other
/// variants are catalog loading failures.
#[derive(Error, Debug)]
pub enum QuoteError {
	#[error("empty topic")]
	EmptyTopic,

	#[error("blank topic name in catalog")]
	BlankCatalogKey,

	#[error("duplicate topic in catalog: {0}")]
	DuplicateTopic(String),

	#[error("invalid catalog: {0}")]
	Catalog(#[from] serde_json::Error),

	#[error("expected a directory, got: {}", .0.display())]
	NotADirectory(PathBuf),

	#[error(transparent)]
	Io(#[from] std::io::Error),
}

impl QuoteError {
	/// Check if this error comes from user input rather than the dataset.
	pub fn is_validation(&self) -> bool {
		matches!(self, QuoteError::EmptyTopic)
	}

	/// Text suitable for showing to the user.
	pub fn user_message(&self) -> String {
		match self {
			QuoteError::EmptyTopic => EMPTY_TOPIC_MESSAGE.to_owned(),
			other => other.to_string(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_topic_display() {
		assert_eq!(QuoteError::EmptyTopic.to_string(), "empty topic");
		assert_eq!(
			QuoteError::EmptyTopic.user_message(),
			"Please enter a topic to find quotes."
		);
	}

	#[test]
	fn only_empty_topic_is_validation() {
		assert!(QuoteError::EmptyTopic.is_validation());
		assert!(!QuoteError::DuplicateTopic("life".to_owned()).is_validation());
		assert!(!QuoteError::BlankCatalogKey.is_validation());
		assert!(!QuoteError::NotADirectory(PathBuf::from("x")).is_validation());
	}

	#[test]
	fn catalog_errors_keep_their_message() {
		let err: QuoteError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
		assert!(err.user_message().starts_with("invalid catalog:"));
	}
}
