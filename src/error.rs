//! Error types for table configuration and rendering.

use thiserror::Error;

/// Errors that can occur while configuring a table.
///
/// All variants are synchronous validation failures surfaced at the point
/// of the offending call; nothing is retried or recovered internally.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
	/// Unrecognized configuration key passed to `set_config`.
	///
	/// Recognized keys are `table-striped`, `table-bordered`,
	/// `table-hover`, `table-condensed`, `table-responsive` and `id`.
	#[error("unrecognized config key: {0}")]
	InvalidConfigKey(String),

	/// A recognized configuration key carried the wrong value variant.
	///
	/// The style flags expect [`ConfigValue::Flag`](crate::ConfigValue)
	/// and `id` expects [`ConfigValue::Text`](crate::ConfigValue).
	#[error("config key {key} expects a {expected} value")]
	InvalidConfigValue {
		/// The configuration key whose value had the wrong variant.
		key: String,
		/// Human-readable name of the expected variant.
		expected: &'static str,
	},

	/// A class name with embedded whitespace passed to
	/// `set_extra_classes`.
	///
	/// Class names must be single words so they form one token inside the
	/// rendered `class` attribute.
	#[error("class name must be a single word: {0:?}")]
	InvalidClassName(String),
}

/// Result type alias for table operations.
pub type Result<T> = std::result::Result<T, TableError>;

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case(
		TableError::InvalidConfigKey("bogus".to_string()),
		"unrecognized config key: bogus"
	)]
	#[case(
		TableError::InvalidConfigValue {
			key: "table-hover".to_string(),
			expected: "boolean",
		},
		"config key table-hover expects a boolean value"
	)]
	#[case(
		TableError::InvalidClassName("two words".to_string()),
		"class name must be a single word: \"two words\""
	)]
	fn test_error_display(#[case] error: TableError, #[case] expected: &str) {
		assert_eq!(error.to_string(), expected);
	}
}
