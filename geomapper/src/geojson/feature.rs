//! Feature and FeatureCollection codec: composes the geometry codec with
//! id/property handling and SRID propagation.

use super::crs::parse_crs;
use super::decode::{DecodeMode, GeometryType, decode_geometry, ensure_no_nested_crs};
use super::encode::{EncodeContext, EncodeOptions, encode_geometry};
use crate::error::{GeoJsonError, Result};
use crate::geo::{GeoCollection, GeoFeature, GeoProperties, GeoValue, SRID_NONE};
use geomapper_core::json::{JsonArray, JsonObject, JsonValue};

/// Options consumed by the decoding half of the codec.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeOptions {
	/// SRID applied to geometries whose document carries no `crs`.
	pub ambient_srid: u32,
	/// Skip unknown members on Feature/FeatureCollection objects instead of
	/// failing the decode.
	pub ignore_unknown_properties: bool,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			ambient_srid: SRID_NONE,
			ignore_unknown_properties: true,
		}
	}
}

/// The seam through which per-property encoding is delegated.
///
/// Implementations must not fail: unencodable values degrade to a
/// placeholder document instead of aborting the enclosing feature.
pub trait PropertyValueEncoder {
	fn encode_property(&self, value: &GeoValue, ctx: &mut EncodeContext) -> JsonValue;
}

const FEATURE_MEMBERS: [&str; 6] = ["bbox", "crs", "geometry", "id", "properties", "type"];
const COLLECTION_MEMBERS: [&str; 4] = ["bbox", "crs", "features", "type"];

fn check_discriminator(object: &JsonObject, expected: &str) -> Result<()> {
	match object.get_str("type") {
		Ok(Some(tag)) if tag == expected => Ok(()),
		Ok(Some(tag)) => Err(GeoJsonError::MalformedDocument(format!(
			"expected type '{expected}', found '{tag}'"
		))),
		_ => Err(GeoJsonError::MalformedDocument(format!(
			"a {expected} needs a 'type' tag"
		))),
	}
}

fn check_known_members(object: &JsonObject, known: &[&str], context: &str) -> Result<()> {
	for (key, _) in object.iter() {
		if !known.contains(&key.as_str()) {
			return Err(GeoJsonError::MalformedDocument(format!(
				"unknown member '{key}' on a {context}"
			)));
		}
	}
	Ok(())
}

/// Decode a Feature document.
///
/// The feature-level `crs` (or, failing that, the ambient SRID) is written
/// onto the decoded geometry's SRID; the geometry document itself must not
/// carry a `crs` member.
///
/// # Errors
/// `MalformedDocument`, `MalformedCrs`, `NestedCrsViolation` and every
/// geometry decode error, see [`decode_geometry`].
pub fn decode_feature(value: &JsonValue, options: &DecodeOptions) -> Result<GeoFeature> {
	let object = value
		.as_object()
		.map_err(|_| GeoJsonError::MalformedDocument("a Feature must be a JSON object".to_string()))?;
	check_discriminator(object, "Feature")?;
	if !options.ignore_unknown_properties {
		check_known_members(object, &FEATURE_MEMBERS, "Feature")?;
	}

	let feature_srid = if object.contains_key("crs") {
		parse_crs(object.get("crs"))?
	} else {
		options.ambient_srid
	};

	let geometry = match object.get("geometry") {
		None | Some(JsonValue::Null) => None,
		Some(geometry_value) => {
			let geometry_object = geometry_value.as_object().map_err(|_| {
				GeoJsonError::MalformedDocument("the 'geometry' member must be an object or null".to_string())
			})?;
			ensure_no_nested_crs(geometry_object, "a feature's geometry")?;
			Some(decode_geometry(
				geometry_value,
				GeometryType::Any,
				DecodeMode::Permissive,
				feature_srid,
			)?)
		}
	};

	let mut properties = GeoProperties::new();
	match object.get("properties") {
		None | Some(JsonValue::Null) => {}
		Some(JsonValue::Object(entries)) => {
			for (key, entry) in entries.iter() {
				match entry {
					// an explicit null declares the name without a value
					JsonValue::Null => properties.declare(key.clone()),
					entry => properties.insert(key.clone(), GeoValue::from_json(entry)),
				}
			}
		}
		Some(_) => {
			return Err(GeoJsonError::MalformedDocument(
				"the 'properties' member must be an object or null".to_string(),
			));
		}
	}

	Ok(GeoFeature {
		id: object.get("id").map(GeoValue::from_json),
		geometry,
		properties,
	})
}

/// Decode a FeatureCollection document.
///
/// A collection-level `crs` overwrites every member feature geometry's SRID
/// after decode.
pub fn decode_feature_collection(value: &JsonValue, options: &DecodeOptions) -> Result<GeoCollection> {
	let object = value.as_object().map_err(|_| {
		GeoJsonError::MalformedDocument("a FeatureCollection must be a JSON object".to_string())
	})?;
	check_discriminator(object, "FeatureCollection")?;
	if !options.ignore_unknown_properties {
		check_known_members(object, &COLLECTION_MEMBERS, "FeatureCollection")?;
	}

	let collection_srid = if object.contains_key("crs") {
		Some(parse_crs(object.get("crs"))?)
	} else {
		None
	};

	let Some(entries) = object.get("features") else {
		return Err(GeoJsonError::MalformedDocument(
			"a FeatureCollection needs a 'features' array".to_string(),
		));
	};
	let entries = entries
		.as_array()
		.map_err(|_| GeoJsonError::MalformedDocument("the 'features' member must be an array".to_string()))?;

	let mut features = entries
		.iter()
		.map(|entry| decode_feature(entry, options))
		.collect::<Result<Vec<GeoFeature>>>()?;

	if let Some(srid) = collection_srid {
		for feature in &mut features {
			if let Some(geometry) = &mut feature.geometry {
				geometry.set_srid(srid);
			}
		}
	}

	Ok(GeoCollection { features })
}

/// Encode a Feature.
///
/// Writes `type`, `geometry` (JSON null when absent), `id` only if present,
/// and one `properties` entry per declared name whose value lookup
/// succeeds. With `serialize_nulls`, declared names without a value are
/// emitted as null as well.
#[must_use]
pub fn encode_feature(
	feature: &GeoFeature,
	encoder: &dyn PropertyValueEncoder,
	options: &EncodeOptions,
	ctx: &mut EncodeContext,
) -> JsonObject {
	let mut object = JsonObject::new();
	object.set("type", "Feature");

	match &feature.geometry {
		Some(geometry) => object.set("geometry", JsonValue::Object(encode_geometry(geometry, false, options.precision))),
		None => object.set("geometry", JsonValue::Null),
	}

	if let Some(id) = &feature.id {
		object.set("id", encoder.encode_property(id, ctx));
	}

	let mut properties = JsonObject::new();
	for name in feature.properties.declared_names() {
		match feature.properties.get(name) {
			Some(GeoValue::Null) | None => {
				if options.serialize_nulls {
					properties.set(name, JsonValue::Null);
				}
			}
			Some(value) => properties.set(name, encoder.encode_property(value, ctx)),
		}
	}
	object.set("properties", properties);

	object
}

/// Encode a FeatureCollection: `{"type":"FeatureCollection","features":[...]}`.
#[must_use]
pub fn encode_feature_collection(
	collection: &GeoCollection,
	encoder: &dyn PropertyValueEncoder,
	options: &EncodeOptions,
	ctx: &mut EncodeContext,
) -> JsonObject {
	let mut object = JsonObject::new();
	object.set("type", "FeatureCollection");
	let features = collection
		.features
		.iter()
		.map(|feature| JsonValue::Object(encode_feature(feature, encoder, options, ctx)))
		.collect::<Vec<_>>();
	object.set("features", JsonValue::Array(JsonArray(features)));
	object
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::geo::{Geometry, GeometryShape};

	struct PlainEncoder;

	impl PropertyValueEncoder for PlainEncoder {
		fn encode_property(&self, value: &GeoValue, _ctx: &mut EncodeContext) -> JsonValue {
			match value {
				GeoValue::Bool(v) => JsonValue::Boolean(*v),
				GeoValue::Double(v) => JsonValue::Number(*v),
				GeoValue::Int(v) => JsonValue::Number(*v as f64),
				GeoValue::UInt(v) => JsonValue::Number(*v as f64),
				GeoValue::String(v) => JsonValue::String(v.clone()),
				_ => JsonValue::Null,
			}
		}
	}

	fn decode(json: &str) -> Result<GeoFeature> {
		decode_feature(&JsonValue::parse_str(json).unwrap(), &DecodeOptions::default())
	}

	#[test]
	fn decode_basic_feature() {
		let feature = decode(
			r#"{"type":"Feature","id":7,"geometry":{"type":"Point","coordinates":[102.0,0.5]},"properties":{"prop0":"value0"}}"#,
		)
		.unwrap();
		assert_eq!(feature.id, Some(GeoValue::UInt(7)));
		assert_eq!(feature.geometry.as_ref().unwrap().type_name(), "Point");
		assert_eq!(feature.properties.get("prop0"), Some(&GeoValue::from("value0")));
	}

	#[test]
	fn decode_feature_without_geometry() {
		let feature = decode(r#"{"type":"Feature","geometry":null,"properties":{}}"#).unwrap();
		assert!(feature.geometry.is_none());

		let feature = decode(r#"{"type":"Feature","properties":{}}"#).unwrap();
		assert!(feature.geometry.is_none());
	}

	#[test]
	fn decode_feature_requires_type() {
		assert!(matches!(
			decode(r#"{"geometry":null,"properties":{}}"#),
			Err(GeoJsonError::MalformedDocument(_))
		));
		assert!(matches!(
			decode(r#"{"type":"Point","coordinates":[1,2]}"#),
			Err(GeoJsonError::MalformedDocument(_))
		));
	}

	#[test]
	fn feature_level_crs_lands_on_geometry() {
		let feature = decode(
			r#"{"type":"Feature","crs":{"type":"name","properties":{"name":"EPSG:31370"}},
				"geometry":{"type":"Point","coordinates":[1,2]},"properties":{}}"#,
		)
		.unwrap();
		assert_eq!(feature.geometry.unwrap().srid, 31370);
	}

	#[test]
	fn crs_on_feature_geometry_is_rejected() {
		let result = decode(
			r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[1,2],
				"crs":{"type":"name","properties":{"name":"EPSG:4326"}}},"properties":{}}"#,
		);
		assert!(matches!(result, Err(GeoJsonError::NestedCrsViolation(_))));
	}

	#[test]
	fn explicit_null_property_is_declared_without_value() {
		let feature = decode(r#"{"type":"Feature","geometry":null,"properties":{"a":null,"b":1}}"#).unwrap();
		assert!(feature.properties.is_declared("a"));
		assert_eq!(feature.properties.get("a"), None);
		assert_eq!(feature.properties.get("b"), Some(&GeoValue::UInt(1)));
	}

	#[test]
	fn unknown_members_are_skipped_by_default() {
		let feature = decode(r#"{"type":"Feature","geometry":null,"properties":{},"extra":1}"#).unwrap();
		assert!(feature.properties.is_empty());
	}

	#[test]
	fn unknown_members_fail_when_configured() {
		let options = DecodeOptions {
			ignore_unknown_properties: false,
			..DecodeOptions::default()
		};
		let value = JsonValue::parse_str(r#"{"type":"Feature","geometry":null,"properties":{},"extra":1}"#).unwrap();
		assert!(matches!(
			decode_feature(&value, &options),
			Err(GeoJsonError::MalformedDocument(_))
		));
	}

	#[test]
	fn decode_collection() {
		let collection = decode_feature_collection(
			&JsonValue::parse_str(
				r#"{"type":"FeatureCollection","features":[
					{"type":"Feature","geometry":{"type":"Point","coordinates":[1,2]},"properties":{}},
					{"type":"Feature","geometry":null,"properties":{}}
				]}"#,
			)
			.unwrap(),
			&DecodeOptions::default(),
		)
		.unwrap();
		assert_eq!(collection.features.len(), 2);
	}

	#[test]
	fn collection_crs_overwrites_member_srids() {
		let collection = decode_feature_collection(
			&JsonValue::parse_str(
				r#"{"type":"FeatureCollection","crs":{"type":"name","properties":{"name":"EPSG:31370"}},
					"features":[
						{"type":"Feature","crs":{"type":"name","properties":{"name":"EPSG:4326"}},
						 "geometry":{"type":"Point","coordinates":[1,2]},"properties":{}}
					]}"#,
			)
			.unwrap(),
			&DecodeOptions::default(),
		)
		.unwrap();
		assert_eq!(collection.features[0].geometry.as_ref().unwrap().srid, 31370);
	}

	#[test]
	fn collection_requires_features() {
		let result = decode_feature_collection(
			&JsonValue::parse_str(r#"{"type":"FeatureCollection"}"#).unwrap(),
			&DecodeOptions::default(),
		);
		assert!(matches!(result, Err(GeoJsonError::MalformedDocument(_))));
	}

	#[test]
	fn encode_feature_with_geometry_and_id() {
		let mut feature = GeoFeature::new(Geometry::new_point([1.0, 2.0]));
		feature.set_id(7u64);
		feature.set_property("name".to_string(), "A");

		let json = encode_feature(&feature, &PlainEncoder, &EncodeOptions::default(), &mut EncodeContext::new());
		assert_eq!(
			json.stringify(),
			r#"{"geometry":{"bbox":[1,2,1,2],"coordinates":[1,2],"type":"Point"},"id":7,"properties":{"name":"A"},"type":"Feature"}"#
		);
	}

	#[test]
	fn encode_feature_without_geometry_writes_null() {
		let json = encode_feature(
			&GeoFeature::default(),
			&PlainEncoder,
			&EncodeOptions::default(),
			&mut EncodeContext::new(),
		);
		assert_eq!(json.stringify(), r#"{"geometry":null,"properties":{},"type":"Feature"}"#);
	}

	#[test]
	fn nulls_are_skipped_unless_configured() {
		let mut feature = GeoFeature::default();
		feature.declare_property("ghost".to_string());
		feature.set_property("present".to_string(), GeoValue::Null);

		let json = encode_feature(&feature, &PlainEncoder, &EncodeOptions::default(), &mut EncodeContext::new());
		assert_eq!(json.get_object("properties").unwrap().unwrap().len(), 0);

		let options = EncodeOptions {
			serialize_nulls: true,
			..EncodeOptions::default()
		};
		let json = encode_feature(&feature, &PlainEncoder, &options, &mut EncodeContext::new());
		assert_eq!(
			json.get_object("properties").unwrap().unwrap().stringify(),
			r#"{"ghost":null,"present":null}"#
		);
	}

	#[test]
	fn encode_collection() {
		let collection = GeoCollection::from(vec![GeoFeature::new(Geometry::new_point([1.0, 2.0]))]);
		let json = encode_feature_collection(
			&collection,
			&PlainEncoder,
			&EncodeOptions::default(),
			&mut EncodeContext::new(),
		);
		assert_eq!(
			json.stringify(),
			r#"{"features":[{"geometry":{"bbox":[1,2,1,2],"coordinates":[1,2],"type":"Point"},"properties":{},"type":"Feature"}],"type":"FeatureCollection"}"#
		);
	}

	#[test]
	fn feature_geometry_keeps_its_own_crs_and_bbox() {
		let feature = GeoFeature::new(Geometry::new_point([1.0, 2.0]).with_srid(31370));
		let json = encode_feature(&feature, &PlainEncoder, &EncodeOptions::default(), &mut EncodeContext::new());
		let geometry = json.get_object("geometry").unwrap().unwrap();
		assert!(geometry.get("crs").is_some());
		assert!(geometry.get("bbox").is_some());
		let GeometryShape::Point(_) = feature.geometry.unwrap().shape else {
			panic!("expected a point");
		};
	}
}
