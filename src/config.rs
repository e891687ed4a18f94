//! Table configuration mapping.
//!
//! A table is configured from an insertion-ordered mapping of string keys
//! to [`ConfigValue`]s. The order matters: `set_config` applies entries in
//! insertion order and stops at the first invalid key, so the mapping type
//! must iterate deterministically.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Insertion-ordered configuration mapping for [`Table`](crate::Table).
///
/// Deserializes from a plain JSON object:
///
/// ```rust
/// use bootstrap_tables::TableConfig;
///
/// let config: TableConfig =
/// 	serde_json::from_str(r#"{"table-hover": true, "id": "users"}"#).unwrap();
/// assert_eq!(config.len(), 2);
/// ```
pub type TableConfig = IndexMap<String, ConfigValue>;

/// A single configuration value: a style-flag boolean or the id string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
	/// Boolean value for the `table-*` style flags.
	Flag(bool),
	/// String value for the `id` key.
	Text(String),
}

impl ConfigValue {
	/// Returns the boolean when this is a [`ConfigValue::Flag`].
	pub fn as_flag(&self) -> Option<bool> {
		match self {
			ConfigValue::Flag(flag) => Some(*flag),
			ConfigValue::Text(_) => None,
		}
	}

	/// Returns the string when this is a [`ConfigValue::Text`].
	pub fn as_text(&self) -> Option<&str> {
		match self {
			ConfigValue::Flag(_) => None,
			ConfigValue::Text(text) => Some(text),
		}
	}
}

impl From<bool> for ConfigValue {
	fn from(flag: bool) -> Self {
		ConfigValue::Flag(flag)
	}
}

impl From<&str> for ConfigValue {
	fn from(text: &str) -> Self {
		ConfigValue::Text(text.to_string())
	}
}

impl From<String> for ConfigValue {
	fn from(text: String) -> Self {
		ConfigValue::Text(text)
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	fn test_config_value_accessors() {
		assert_eq!(ConfigValue::Flag(true).as_flag(), Some(true));
		assert_eq!(ConfigValue::Flag(true).as_text(), None);
		assert_eq!(ConfigValue::Text("id1".to_string()).as_text(), Some("id1"));
		assert_eq!(ConfigValue::Text("id1".to_string()).as_flag(), None);
	}

	#[rstest]
	fn test_config_value_from_impls() {
		assert_eq!(ConfigValue::from(true), ConfigValue::Flag(true));
		assert_eq!(ConfigValue::from("x"), ConfigValue::Text("x".to_string()));
		assert_eq!(
			ConfigValue::from("x".to_string()),
			ConfigValue::Text("x".to_string())
		);
	}

	#[rstest]
	fn test_config_preserves_insertion_order() {
		let mut config = TableConfig::new();
		config.insert("table-hover".to_string(), true.into());
		config.insert("id".to_string(), "users".into());
		config.insert("table-striped".to_string(), false.into());

		let keys: Vec<&str> = config.keys().map(String::as_str).collect();
		assert_eq!(keys, ["table-hover", "id", "table-striped"]);
	}
}
