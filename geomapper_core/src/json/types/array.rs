//! JSON array type backed by a `Vec<JsonValue>`.

use crate::json::{JsonValue, stringify};
use anyhow::{Result, anyhow};
use std::fmt::Debug;

#[derive(Clone, Default, PartialEq)]
pub struct JsonArray(pub Vec<JsonValue>);

impl JsonArray {
	/// Serialize the array to a compact string without extra whitespace.
	#[must_use]
	pub fn stringify(&self) -> String {
		let items = self.0.iter().map(stringify).collect::<Vec<_>>();
		format!("[{}]", items.join(","))
	}

	/// Convert all elements to `f64`, returning an error if any element is not numeric.
	pub fn as_number_vec(&self) -> Result<Vec<f64>> {
		self.0.iter().map(JsonValue::as_number).collect()
	}

	/// Convert elements to a fixed-size numeric array.
	///
	/// # Errors
	/// Returns an error on a length mismatch or non-numeric elements.
	pub fn as_number_array<const N: usize>(&self) -> Result<[f64; N]> {
		self
			.as_number_vec()?
			.try_into()
			.map_err(|e: Vec<f64>| anyhow!("array length mismatch {} != {}", e.len(), N))
	}

	/// Get a reference to the underlying `Vec<JsonValue>`.
	#[must_use]
	pub fn as_vec(&self) -> &Vec<JsonValue> {
		&self.0
	}

	pub fn iter(&self) -> impl Iterator<Item = &JsonValue> {
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

impl Debug for JsonArray {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.0)
	}
}

impl<T> From<Vec<T>> for JsonArray
where
	JsonValue: From<T>,
{
	fn from(input: Vec<T>) -> Self {
		JsonArray(input.into_iter().map(JsonValue::from).collect())
	}
}

impl<T> From<&Vec<T>> for JsonArray
where
	JsonValue: From<T>,
	T: Clone,
{
	fn from(input: &Vec<T>) -> Self {
		JsonArray(input.iter().map(|v| JsonValue::from(v.clone())).collect())
	}
}

impl<T, const N: usize> From<[T; N]> for JsonArray
where
	JsonValue: From<T>,
{
	fn from(input: [T; N]) -> Self {
		JsonArray(input.into_iter().map(JsonValue::from).collect())
	}
}

impl<T, const N: usize> From<&[T; N]> for JsonArray
where
	JsonValue: From<T>,
	T: Copy,
{
	fn from(input: &[T; N]) -> Self {
		JsonArray(input.iter().map(|v| JsonValue::from(*v)).collect())
	}
}
