//! The `Mapper` façade: per-instance configuration, the property-encoder
//! registry and the recursion guard for generic property serialization.

mod registry;

pub use registry::{PropertyEncoder, PropertyRegistry};

use crate::error::{GeoJsonError, Result};
use crate::geo::{CustomValue, GeoCollection, GeoFeature, GeoValue, Geometry, SRID_NONE};
use crate::geojson::{
	DecodeMode, DecodeOptions, EncodeContext, EncodeOptions, GeometryType, PropertyValueEncoder, decode_feature,
	decode_feature_collection, decode_geometry, encode_feature, encode_feature_collection, encode_geometry,
};
use geomapper_core::json::{JsonObject, JsonValue};
use std::sync::Arc;

/// Ceiling on the recursion depth of generic property serialization. Above
/// it, the affected sub-value becomes a sentinel error document.
pub const MAX_SERIALIZATION_DEPTH: usize = 10;

/// Per-instance configuration of a [`Mapper`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MapperSettings {
	/// Emit declared-but-valueless properties as JSON null.
	pub serialize_nulls: bool,
	/// Skip unknown members on Feature/FeatureCollection objects instead of
	/// failing the decode.
	pub ignore_unknown_properties: bool,
	/// SRID applied to decoded geometries whose document carries no `crs`.
	/// The default of [`SRID_NONE`] leaves untagged geometries untagged.
	pub default_srid: u32,
	/// Round encoded coordinates to this many decimal places.
	pub precision: Option<u8>,
}

impl Default for MapperSettings {
	fn default() -> Self {
		Self {
			serialize_nulls: false,
			ignore_unknown_properties: true,
			default_srid: SRID_NONE,
			precision: None,
		}
	}
}

/// Converts between GeoJSON text and the typed geometry model.
///
/// A mapper owns its settings and its property-encoder registry; all
/// per-call state lives in [`EncodeContext`] values created per entry
/// point, so one instance can serve concurrent calls without locking.
#[derive(Clone, Debug, Default)]
pub struct Mapper {
	settings: MapperSettings,
	registry: PropertyRegistry,
}

impl Mapper {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn with_settings(settings: MapperSettings) -> Self {
		Self {
			settings,
			registry: PropertyRegistry::new(),
		}
	}

	#[must_use]
	pub fn settings(&self) -> &MapperSettings {
		&self.settings
	}

	/// Register a property encoder for the concrete type `T`.
	///
	/// Re-registering a type replaces the binding and leaves the
	/// configuration untouched.
	pub fn register_encoder<T: CustomValue>(&mut self, encoder: Arc<dyn PropertyEncoder>) {
		self.registry.register::<T>(encoder);
	}

	fn parse(&self, json: &str) -> Result<JsonValue> {
		JsonValue::parse_str(json).map_err(GeoJsonError::InvalidJson)
	}

	fn decode_options(&self) -> DecodeOptions {
		DecodeOptions {
			ambient_srid: self.settings.default_srid,
			ignore_unknown_properties: self.settings.ignore_unknown_properties,
		}
	}

	fn encode_options(&self) -> EncodeOptions {
		EncodeOptions {
			precision: self.settings.precision,
			serialize_nulls: self.settings.serialize_nulls,
		}
	}

	/// Decode a geometry document, accepting whatever variant its tag names.
	pub fn geometry_from_json(&self, json: &str) -> Result<Geometry> {
		let value = self.parse(json)?;
		decode_geometry(
			&value,
			GeometryType::Any,
			DecodeMode::Permissive,
			self.settings.default_srid,
		)
	}

	/// Decode a geometry document, requiring the given target variant
	/// (`TypeMismatch` otherwise). [`GeometryType::Any`] accepts all.
	pub fn geometry_from_json_as(&self, json: &str, target: GeometryType) -> Result<Geometry> {
		let value = self.parse(json)?;
		decode_geometry(&value, target, DecodeMode::Strict, self.settings.default_srid)
	}

	/// Decode a Feature document.
	pub fn feature_from_json(&self, json: &str) -> Result<GeoFeature> {
		let value = self.parse(json)?;
		decode_feature(&value, &self.decode_options())
	}

	/// Decode a FeatureCollection document.
	pub fn collection_from_json(&self, json: &str) -> Result<GeoCollection> {
		let value = self.parse(json)?;
		decode_feature_collection(&value, &self.decode_options())
	}

	/// Encode a geometry into its GeoJSON object form.
	#[must_use]
	pub fn geometry_to_json_value(&self, geometry: &Geometry) -> JsonObject {
		encode_geometry(geometry, false, self.settings.precision)
	}

	/// Encode a geometry into GeoJSON text.
	#[must_use]
	pub fn geometry_to_json(&self, geometry: &Geometry) -> String {
		self.geometry_to_json_value(geometry).stringify()
	}

	/// Encode a feature into its GeoJSON object form.
	#[must_use]
	pub fn feature_to_json_value(&self, feature: &GeoFeature) -> JsonObject {
		let mut ctx = EncodeContext::new();
		encode_feature(feature, self, &self.encode_options(), &mut ctx)
	}

	/// Encode a feature into GeoJSON text.
	#[must_use]
	pub fn feature_to_json(&self, feature: &GeoFeature) -> String {
		self.feature_to_json_value(feature).stringify()
	}

	/// Encode a feature collection into its GeoJSON object form.
	#[must_use]
	pub fn collection_to_json_value(&self, collection: &GeoCollection) -> JsonObject {
		let mut ctx = EncodeContext::new();
		encode_feature_collection(collection, self, &self.encode_options(), &mut ctx)
	}

	/// Encode a feature collection into GeoJSON text.
	#[must_use]
	pub fn collection_to_json(&self, collection: &GeoCollection) -> String {
		self.collection_to_json_value(collection).stringify()
	}

	/// Encode one custom property value under the recursion guard.
	///
	/// The depth counter is incremented on entry and decremented on every
	/// exit path. Above [`MAX_SERIALIZATION_DEPTH`] the value is replaced by
	/// the sentinel error document without recursing further; any encoder
	/// failure degrades the value to an empty object.
	fn encode_custom(&self, value: &dyn CustomValue, ctx: &mut EncodeContext) -> JsonValue {
		ctx.depth += 1;
		let result = if ctx.depth > MAX_SERIALIZATION_DEPTH {
			log::debug!("serialization depth ceiling reached, substituting the sentinel document");
			Ok(sentinel_document())
		} else {
			self.try_encode_custom(value, ctx)
		};
		ctx.depth -= 1;

		result.unwrap_or_else(|error| {
			log::warn!("property encoding failed, degrading to an empty object: {error:#}");
			JsonValue::Object(JsonObject::new())
		})
	}

	fn try_encode_custom(&self, value: &dyn CustomValue, ctx: &mut EncodeContext) -> anyhow::Result<JsonValue> {
		if let Some(encoder) = self.registry.lookup(value) {
			return encoder.encode(value, self, ctx);
		}
		// no registered codec, fall back to the object-to-feature bridge
		let feature = value.as_feature()?;
		Ok(JsonValue::Object(encode_feature(
			&feature,
			self,
			&self.encode_options(),
			ctx,
		)))
	}
}

impl PropertyValueEncoder for Mapper {
	fn encode_property(&self, value: &GeoValue, ctx: &mut EncodeContext) -> JsonValue {
		match value {
			GeoValue::Bool(v) => JsonValue::Boolean(*v),
			GeoValue::Double(v) => JsonValue::Number(*v),
			GeoValue::Float(v) => JsonValue::Number(f64::from(*v)),
			GeoValue::Int(v) => JsonValue::Number(*v as f64),
			GeoValue::UInt(v) => JsonValue::Number(*v as f64),
			GeoValue::Null => JsonValue::Null,
			GeoValue::String(v) => JsonValue::String(v.clone()),
			GeoValue::Array(values) => JsonValue::from(
				values
					.iter()
					.map(|entry| self.encode_property(entry, ctx))
					.collect::<Vec<_>>(),
			),
			GeoValue::Object(entries) => {
				let mut object = JsonObject::new();
				for (key, entry) in entries {
					object.set(key, self.encode_property(entry, ctx));
				}
				JsonValue::Object(object)
			}
			GeoValue::Custom(custom) => self.encode_custom(custom.as_ref(), ctx),
		}
	}
}

fn sentinel_document() -> JsonValue {
	let mut object = JsonObject::new();
	object.set("error", "maximum serialization-depth reached.");
	JsonValue::Object(object)
}
