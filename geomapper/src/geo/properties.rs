use super::GeoValue;
use std::{
	collections::{BTreeMap, BTreeSet},
	fmt::Debug,
};

/// The property table of a feature.
///
/// Keeps a set of declared property names plus the values that are actually
/// present. A name can be declared without a value, which is how an explicit
/// wire `null` is distinguished from a property that was never mentioned.
#[derive(Clone, Default, PartialEq)]
pub struct GeoProperties {
	declared: BTreeSet<String>,
	values: BTreeMap<String, GeoValue>,
}

impl GeoProperties {
	#[must_use]
	pub fn new() -> GeoProperties {
		GeoProperties::default()
	}

	/// Declare a name and set its value.
	pub fn insert(&mut self, key: String, value: GeoValue) {
		self.declared.insert(key.clone());
		self.values.insert(key, value);
	}

	/// Declare a name without giving it a value (an explicit null).
	pub fn declare(&mut self, key: String) {
		self.declared.insert(key);
	}

	/// Remove a name and its value entirely.
	pub fn remove(&mut self, key: &str) {
		self.declared.remove(key);
		self.values.remove(key);
	}

	/// Look up the value of a property. `None` for names that are absent or
	/// declared without a value.
	#[must_use]
	pub fn get(&self, key: &str) -> Option<&GeoValue> {
		self.values.get(key)
	}

	#[must_use]
	pub fn is_declared(&self, key: &str) -> bool {
		self.declared.contains(key)
	}

	/// All declared names in sorted order.
	pub fn declared_names(&self) -> impl Iterator<Item = &String> {
		self.declared.iter()
	}

	/// Iterate over declared names with their values, `None` where a name
	/// was declared without a value.
	pub fn iter(&self) -> impl Iterator<Item = (&String, Option<&GeoValue>)> {
		self.declared.iter().map(|name| (name, self.values.get(name)))
	}

	/// Merge all entries of another property table into this one.
	pub fn update(&mut self, other: &GeoProperties) {
		for (name, value) in other.iter() {
			match value {
				Some(value) => self.insert(name.clone(), value.clone()),
				None => self.declare(name.clone()),
			}
		}
	}

	/// Number of declared names.
	#[must_use]
	pub fn len(&self) -> usize {
		self.declared.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.declared.is_empty()
	}
}

impl From<Vec<(&str, GeoValue)>> for GeoProperties {
	fn from(value: Vec<(&str, GeoValue)>) -> Self {
		value.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
	}
}

impl FromIterator<(String, GeoValue)> for GeoProperties {
	fn from_iter<T: IntoIterator<Item = (String, GeoValue)>>(iter: T) -> Self {
		let mut properties = GeoProperties::new();
		for (key, value) in iter {
			properties.insert(key, value);
		}
		properties
	}
}

impl Debug for GeoProperties {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.iter()).finish()
	}
}
