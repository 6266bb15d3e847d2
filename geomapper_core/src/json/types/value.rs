//! JSON value enum representing any valid JSON data.

use crate::json::{JsonArray, JsonObject, parse_json_str, stringify};
use anyhow::{Result, bail};

/// Represents any JSON data: arrays, objects, numbers, strings, booleans, and null.
///
/// Numbers are stored as `f64`, so integer and floating-point wire encodings
/// end up in the same variant.
#[derive(Clone, Debug, PartialEq)]
pub enum JsonValue {
	Array(JsonArray),
	Boolean(bool),
	Null,
	Number(f64),
	Object(JsonObject),
	String(String),
}

impl JsonValue {
	/// Parse a JSON string into a `JsonValue`.
	///
	/// # Errors
	/// Returns an error if the JSON is invalid.
	pub fn parse_str(json: &str) -> Result<JsonValue> {
		parse_json_str(json)
	}

	/// Return the JSON type as a lowercase string (`"array"`, `"object"`, etc.).
	#[must_use]
	pub fn type_name(&self) -> &str {
		use JsonValue::*;
		match self {
			Array(_) => "array",
			Boolean(_) => "boolean",
			Null => "null",
			Number(_) => "number",
			Object(_) => "object",
			String(_) => "string",
		}
	}

	/// Serialize to a compact JSON string without unnecessary whitespace.
	#[must_use]
	pub fn stringify(&self) -> String {
		stringify(self)
	}

	#[must_use]
	pub fn is_null(&self) -> bool {
		matches!(self, JsonValue::Null)
	}

	/// Borrow the `JsonArray` if this value is an array.
	///
	/// # Errors
	/// Returns an error if not an array.
	pub fn as_array(&self) -> Result<&JsonArray> {
		match self {
			JsonValue::Array(array) => Ok(array),
			_ => bail!("expected an array, found a {}", self.type_name()),
		}
	}

	/// Consume the value and extract the `JsonArray` if it is an array.
	///
	/// # Errors
	/// Returns an error if not an array.
	pub fn into_array(self) -> Result<JsonArray> {
		match self {
			JsonValue::Array(array) => Ok(array),
			_ => bail!("expected an array, found a {}", self.type_name()),
		}
	}

	/// Borrow the `JsonObject` if this value is an object.
	///
	/// # Errors
	/// Returns an error if not an object.
	pub fn as_object(&self) -> Result<&JsonObject> {
		match self {
			JsonValue::Object(object) => Ok(object),
			_ => bail!("expected an object, found a {}", self.type_name()),
		}
	}

	/// Consume the value and extract the `JsonObject` if it is an object.
	///
	/// # Errors
	/// Returns an error if not an object.
	pub fn into_object(self) -> Result<JsonObject> {
		match self {
			JsonValue::Object(object) => Ok(object),
			_ => bail!("expected an object, found a {}", self.type_name()),
		}
	}

	/// Return a string slice if this value is a JSON string.
	///
	/// # Errors
	/// Returns an error if the value is not a JSON string.
	pub fn as_str(&self) -> Result<&str> {
		match self {
			JsonValue::String(text) => Ok(text),
			_ => bail!("expected a string, found a {}", self.type_name()),
		}
	}

	/// Return the numeric value if this value is a JSON number.
	///
	/// # Errors
	/// Returns an error if the value is not a JSON number.
	pub fn as_number(&self) -> Result<f64> {
		match self {
			JsonValue::Number(val) => Ok(*val),
			_ => bail!("expected a number, found a {}", self.type_name()),
		}
	}

	/// Return the boolean value if this value is a JSON boolean.
	///
	/// # Errors
	/// Returns an error if the value is not a JSON boolean.
	pub fn as_bool(&self) -> Result<bool> {
		match self {
			JsonValue::Boolean(val) => Ok(*val),
			_ => bail!("expected a boolean, found a {}", self.type_name()),
		}
	}
}

impl From<&str> for JsonValue {
	fn from(input: &str) -> Self {
		JsonValue::String(input.to_string())
	}
}

impl From<&String> for JsonValue {
	fn from(input: &String) -> Self {
		JsonValue::String(input.to_string())
	}
}

impl From<String> for JsonValue {
	fn from(input: String) -> Self {
		JsonValue::String(input)
	}
}

impl From<bool> for JsonValue {
	fn from(input: bool) -> Self {
		JsonValue::Boolean(input)
	}
}

impl From<f64> for JsonValue {
	fn from(input: f64) -> Self {
		JsonValue::Number(input)
	}
}

impl From<f32> for JsonValue {
	fn from(input: f32) -> Self {
		JsonValue::Number(f64::from(input))
	}
}

impl From<i32> for JsonValue {
	fn from(input: i32) -> Self {
		JsonValue::Number(f64::from(input))
	}
}

impl From<u32> for JsonValue {
	fn from(input: u32) -> Self {
		JsonValue::Number(f64::from(input))
	}
}

impl From<i64> for JsonValue {
	fn from(input: i64) -> Self {
		JsonValue::Number(input as f64)
	}
}

impl From<u64> for JsonValue {
	fn from(input: u64) -> Self {
		JsonValue::Number(input as f64)
	}
}

impl From<&JsonValue> for JsonValue {
	fn from(input: &JsonValue) -> Self {
		input.clone()
	}
}

impl<I> From<I> for JsonValue
where
	JsonArray: From<I>,
{
	fn from(input: I) -> Self {
		JsonValue::Array(input.into())
	}
}

impl From<JsonObject> for JsonValue {
	fn from(input: JsonObject) -> Self {
		JsonValue::Object(input)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn from_primitives() {
		assert_eq!(JsonValue::from("hello"), JsonValue::String("hello".to_string()));
		assert_eq!(JsonValue::from(true), JsonValue::Boolean(true));
		assert_eq!(JsonValue::from(23.42), JsonValue::Number(23.42));
		assert_eq!(JsonValue::from(42), JsonValue::Number(42.0));
		assert_eq!(JsonValue::from(7u64), JsonValue::Number(7.0));
	}

	#[test]
	fn from_vec_of_values() {
		let result = JsonValue::from(vec![JsonValue::from("a"), JsonValue::from(1)]);
		assert_eq!(
			result,
			JsonValue::Array(JsonArray(vec![
				JsonValue::String("a".to_string()),
				JsonValue::Number(1.0),
			]))
		);
	}

	#[test]
	fn type_name() {
		assert_eq!(JsonValue::String(String::new()).type_name(), "string");
		assert_eq!(JsonValue::Number(42.0).type_name(), "number");
		assert_eq!(JsonValue::Boolean(true).type_name(), "boolean");
		assert_eq!(JsonValue::Null.type_name(), "null");
		assert_eq!(JsonValue::Array(JsonArray(vec![])).type_name(), "array");
		assert_eq!(JsonValue::Object(JsonObject::default()).type_name(), "object");
	}

	#[test]
	fn accessors() {
		let value = JsonValue::from(vec![1, 2]);
		assert!(value.as_array().is_ok());
		assert!(value.as_object().is_err());
		assert!(value.clone().into_array().is_ok());

		let object = JsonValue::Object(JsonObject::default());
		assert!(object.as_object().is_ok());
		assert!(object.as_array().is_err());

		assert_eq!(JsonValue::from("x").as_str().unwrap(), "x");
		assert_eq!(JsonValue::from(1.5).as_number().unwrap(), 1.5);
		assert!(JsonValue::from(1.5).as_bool().is_err());
		assert!(JsonValue::Null.is_null());
	}

	#[test]
	fn stringify_round_trip() {
		let json = r#"{"key":"value","number":42}"#;
		let parsed = JsonValue::parse_str(json).unwrap();
		assert_eq!(parsed.stringify(), json);

		assert!(JsonValue::parse_str(r#"{"key":}"#).is_err());
	}
}
