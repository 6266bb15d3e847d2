use super::GeoFeature;
use crate::error::{GeoJsonError, Result};
use crate::geojson::{DecodeOptions, decode_feature_collection};
use geomapper_core::json::JsonValue;

/// An ordered sequence of features.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoCollection {
	pub features: Vec<GeoFeature>,
}

impl GeoCollection {
	#[must_use]
	pub fn from(features: Vec<GeoFeature>) -> Self {
		Self { features }
	}

	/// Decode a FeatureCollection document with default options.
	pub fn from_json_str(json_str: &str) -> Result<Self> {
		let value = JsonValue::parse_str(json_str).map_err(GeoJsonError::InvalidJson)?;
		decode_feature_collection(&value, &DecodeOptions::default())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn from_features() {
		let collection = GeoCollection::from(vec![GeoFeature::new_example()]);
		assert_eq!(collection.features.len(), 1);
	}

	#[test]
	fn from_json_str() {
		let collection = GeoCollection::from_json_str(
			r#"{"type":"FeatureCollection","features":[{"type":"Feature","geometry":{"type":"Point","coordinates":[102.0,0.5]},"properties":{}}]}"#,
		)
		.unwrap();
		assert_eq!(collection.features.len(), 1);
	}

	#[test]
	fn from_json_str_rejects_invalid() {
		assert!(GeoCollection::from_json_str("{not json").is_err());
	}
}
