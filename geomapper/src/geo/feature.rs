use super::{GeoProperties, GeoValue, Geometry};

/// A feature: an optional id, an optional geometry, and a property table.
///
/// A feature exclusively owns its geometry and property values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoFeature {
	pub id: Option<GeoValue>,
	pub geometry: Option<Geometry>,
	pub properties: GeoProperties,
}

impl GeoFeature {
	#[must_use]
	pub fn new(geometry: Geometry) -> Self {
		Self {
			id: None,
			geometry: Some(geometry),
			properties: GeoProperties::new(),
		}
	}

	pub fn set_id<T>(&mut self, id: T)
	where
		GeoValue: From<T>,
	{
		self.id = Some(GeoValue::from(id));
	}

	pub fn set_properties(&mut self, properties: GeoProperties) {
		self.properties = properties;
	}

	pub fn set_property<T>(&mut self, key: String, value: T)
	where
		GeoValue: From<T>,
	{
		self.properties.insert(key, GeoValue::from(value));
	}

	/// Declare a property name without a value (an explicit null).
	pub fn declare_property(&mut self, key: String) {
		self.properties.declare(key);
	}

	#[cfg(test)]
	pub fn new_example() -> Self {
		let mut feature = Self::new(Geometry::new_example());
		feature.set_id(13u64);
		feature.set_properties(GeoProperties::from(vec![
			("name", GeoValue::from("Nice")),
			("population", GeoValue::from(348_085)),
			("is_nice", GeoValue::from(true)),
		]));
		feature
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn new_sets_geometry() {
		let feature = GeoFeature::new(Geometry::new_point([1.0, 2.0]));
		assert!(feature.geometry.is_some());
		assert!(feature.id.is_none());
		assert!(feature.properties.is_empty());
	}

	#[test]
	fn default_has_no_geometry() {
		assert!(GeoFeature::default().geometry.is_none());
	}

	#[test]
	fn setters() {
		let mut feature = GeoFeature::new(Geometry::new_point([1.0, 2.0]));
		feature.set_id("id-1");
		feature.set_property("key".to_string(), 42);
		feature.declare_property("empty".to_string());

		assert_eq!(feature.id, Some(GeoValue::from("id-1")));
		assert_eq!(feature.properties.get("key"), Some(&GeoValue::from(42)));
		assert!(feature.properties.is_declared("empty"));
	}
}
