use crate::error::QuoteError;

/// Folds a raw topic into its catalog key form.
///
/// Trims surrounding whitespace and lower-cases the whole string.
/// Applying it twice gives the same result as applying it once.
pub fn normalize(raw: &str) -> String {
	raw.trim().to_lowercase()
}

/// A topic that passed validation.
///
/// # Invariants
/// - Never empty
/// - Already normalized (trimmed, lower-case)
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Topic(String);

impl Topic {
	/// Validates and normalizes a user-entered topic.
	///
	/// # Errors
	/// Returns `QuoteError::EmptyTopic` if the input is empty or only whitespace.
	pub fn parse(raw: &str) -> Result<Self, QuoteError> {
		let normalized = normalize(raw);
		if normalized.is_empty() {
			return Err(QuoteError::EmptyTopic);
		}
		Ok(Self(normalized))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn parse_trims_and_lowercases() {
		assert_eq!(Topic::parse("  Motivation ").unwrap().as_str(), "motivation");
		assert_eq!(Topic::parse("LIFE").unwrap().as_str(), "life");
		assert_eq!(Topic::parse("\tlove\n").unwrap().as_str(), "love");
	}

	#[test]
	fn inner_whitespace_is_kept() {
		assert_eq!(Topic::parse(" Hard Work ").unwrap().as_str(), "hard work");
	}

	#[test]
	fn blank_input_is_rejected() {
		for raw in ["", " ", "   ", "\t\n", "\u{3000}"] {
			assert!(matches!(Topic::parse(raw), Err(QuoteError::EmptyTopic)), "{raw:?}");
		}
	}

	proptest! {
		#[test]
		fn normalize_is_idempotent(raw in "[ \\tA-Za-zÀ-ÿ0-9]*") {
			let once = normalize(&raw);
			prop_assert_eq!(normalize(&once), once.clone());
		}

		#[test]
		fn parse_ignores_case_and_padding(word in "[a-zA-Z]{1,12}", left in " {0,4}", right in "[ \t]{0,4}") {
			let padded = format!("{left}{word}{right}");
			let plain = Topic::parse(&word.to_lowercase()).unwrap();
			prop_assert_eq!(Topic::parse(&padded).unwrap(), plain.clone());
			prop_assert_eq!(Topic::parse(&word.to_uppercase()).unwrap(), plain);
		}

		#[test]
		fn whitespace_only_is_always_rejected(raw in "[ \t\r\n]*") {
			prop_assert!(Topic::parse(&raw).is_err());
		}
	}
}
