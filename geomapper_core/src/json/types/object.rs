//! JSON object type backed by a `BTreeMap<String, JsonValue>`.

use crate::json::{JsonArray, JsonValue, escape_json_string, stringify};
use anyhow::Result;
use std::{
	collections::BTreeMap,
	fmt::{Debug, Display},
};

/// A JSON object with deterministic (sorted) key order.
#[derive(Clone, Default, PartialEq)]
pub struct JsonObject(pub BTreeMap<String, JsonValue>);

impl JsonObject {
	/// Create a new, empty `JsonObject`.
	#[must_use]
	pub fn new() -> Self {
		Self(BTreeMap::new())
	}

	/// Get a reference to the raw `JsonValue` for the specified key, if present.
	#[must_use]
	pub fn get(&self, key: &str) -> Option<&JsonValue> {
		self.0.get(key)
	}

	#[must_use]
	pub fn contains_key(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	/// Retrieve a string slice for the specified key, `None` if missing.
	///
	/// # Errors
	/// Returns an error if the value is present but not a string.
	pub fn get_str(&self, key: &str) -> Result<Option<&str>> {
		self.get(key).map(JsonValue::as_str).transpose()
	}

	/// Retrieve a numeric value for the specified key, `None` if missing.
	///
	/// # Errors
	/// Returns an error if the value is present but not a number.
	pub fn get_number(&self, key: &str) -> Result<Option<f64>> {
		self.get(key).map(JsonValue::as_number).transpose()
	}

	/// Retrieve a `JsonArray` reference for the specified key, `None` if missing.
	///
	/// # Errors
	/// Returns an error if the value is present but not an array.
	pub fn get_array(&self, key: &str) -> Result<Option<&JsonArray>> {
		self.get(key).map(JsonValue::as_array).transpose()
	}

	/// Retrieve a `JsonObject` reference for the specified key, `None` if missing.
	///
	/// # Errors
	/// Returns an error if the value is present but not an object.
	pub fn get_object(&self, key: &str) -> Result<Option<&JsonObject>> {
		self.get(key).map(JsonValue::as_object).transpose()
	}

	/// Set the specified key to the given value, converting it into a `JsonValue`.
	pub fn set<T>(&mut self, key: &str, value: T)
	where
		JsonValue: From<T>,
	{
		self.0.insert(key.to_owned(), JsonValue::from(value));
	}

	/// Set the specified key only if the provided `Option` is `Some`.
	pub fn set_optional<T>(&mut self, key: &str, value: Option<T>)
	where
		JsonValue: From<T>,
	{
		if let Some(v) = value {
			self.0.insert(key.to_owned(), JsonValue::from(v));
		}
	}

	/// Remove a key, returning its previous value if any.
	pub fn remove(&mut self, key: &str) -> Option<JsonValue> {
		self.0.remove(key)
	}

	/// Serialize into a compact JSON string without extra whitespace.
	#[must_use]
	pub fn stringify(&self) -> String {
		let items = self
			.0
			.iter()
			.map(|(key, value)| format!("\"{}\":{}", escape_json_string(key), stringify(value)))
			.collect::<Vec<_>>();
		format!("{{{}}}", items.join(","))
	}

	/// Parse a JSON string into a `JsonObject`.
	///
	/// # Errors
	/// Returns an error on invalid JSON or a non-object root.
	pub fn parse_str(json: &str) -> Result<JsonObject> {
		JsonValue::parse_str(json)?.into_object()
	}

	/// Iterate over key-value pairs in key order.
	pub fn iter(&self) -> impl Iterator<Item = (&String, &JsonValue)> {
		self.0.iter()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl Debug for JsonObject {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.0)
	}
}

impl Display for JsonObject {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.stringify())
	}
}

impl<T> From<Vec<(&str, T)>> for JsonObject
where
	JsonValue: From<T>,
{
	fn from(input: Vec<(&str, T)>) -> Self {
		JsonObject(
			input
				.into_iter()
				.map(|(key, value)| (key.to_string(), JsonValue::from(value)))
				.collect(),
		)
	}
}

impl<T> From<Vec<(&str, T)>> for JsonValue
where
	JsonValue: From<T>,
{
	fn from(input: Vec<(&str, T)>) -> Self {
		JsonValue::Object(JsonObject::from(input))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn set_and_get() {
		let mut obj = JsonObject::new();
		obj.set("key", "value");
		obj.set("num", 42);
		obj.set_optional("maybe", Some(1));
		obj.set_optional::<i32>("missing", None);

		assert_eq!(obj.get("key"), Some(&JsonValue::from("value")));
		assert_eq!(obj.get_str("key").unwrap(), Some("value"));
		assert_eq!(obj.get_number("num").unwrap(), Some(42.0));
		assert!(obj.contains_key("maybe"));
		assert!(!obj.contains_key("missing"));
		assert_eq!(obj.get_str("missing").unwrap(), None);
		assert!(obj.get_number("key").is_err());
	}

	#[test]
	fn get_array_and_object() {
		let obj = JsonObject::from(vec![
			("arr", JsonValue::from(vec![1, 2])),
			("obj", JsonValue::Object(JsonObject::new())),
		]);
		assert_eq!(obj.get_array("arr").unwrap().unwrap().len(), 2);
		assert!(obj.get_object("obj").unwrap().is_some());
		assert!(obj.get_array("obj").is_err());
		assert_eq!(obj.get_object("nope").unwrap(), None);
	}

	#[test]
	fn stringify_sorted() {
		let obj = JsonObject::from(vec![
			("b", JsonValue::from(2)),
			("a", JsonValue::from("x")),
		]);
		assert_eq!(obj.stringify(), r#"{"a":"x","b":2}"#);
	}

	#[test]
	fn parse_str() {
		let parsed = JsonObject::parse_str(r#"{"key":"value","n":1}"#).unwrap();
		assert_eq!(parsed.get_str("key").unwrap(), Some("value"));
		assert_eq!(parsed.len(), 2);
		assert!(JsonObject::parse_str("[1,2]").is_err());
	}

	#[test]
	fn remove() {
		let mut obj = JsonObject::from(vec![("k", 1)]);
		assert_eq!(obj.remove("k"), Some(JsonValue::from(1)));
		assert!(obj.is_empty());
	}
}
