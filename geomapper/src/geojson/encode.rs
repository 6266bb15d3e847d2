//! Geometry encoding: turns [`Geometry`] values back into their GeoJSON
//! object form, computing bounding boxes and suppressing `crs`/`bbox` on
//! geometries nested inside collections.

use super::crs::crs_to_json;
use crate::geo::{Geometry, GeometryShape, GeometryTrait, SRID_NONE};
use geomapper_core::json::{JsonArray, JsonObject, JsonValue};

/// Per-call encoder state, created fresh for every public encode entry
/// point. Carrying this explicitly keeps concurrent calls on one mapper
/// instance independent of each other.
#[derive(Clone, Copy, Debug, Default)]
pub struct EncodeContext {
	/// Recursion depth of generic property serialization.
	pub depth: usize,
	/// Whether the geometry being encoded sits inside a GeometryCollection.
	pub inside_collection: bool,
}

impl EncodeContext {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}
}

/// Options consumed by the encoding half of the codec.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EncodeOptions {
	/// Round coordinates to this many decimal places.
	pub precision: Option<u8>,
	/// Emit declared-but-valueless properties (and explicit nulls) as JSON
	/// null instead of skipping them.
	pub serialize_nulls: bool,
}

/// Encode a geometry into its GeoJSON object form.
///
/// Always writes `type`. Unless `inside_collection` is set, also writes
/// `crs` (only for a tagged geometry, SRID > 0) and `bbox`. Children of a
/// GeometryCollection are encoded with `inside_collection` forced `true`,
/// whatever the collection's own flag was, so suppression holds at every
/// depth below the root.
#[must_use]
pub fn encode_geometry(geometry: &Geometry, inside_collection: bool, precision: Option<u8>) -> JsonObject {
	let mut object = JsonObject::new();
	object.set("type", geometry.type_name());

	if !inside_collection {
		if geometry.srid > SRID_NONE {
			object.set("crs", crs_to_json(geometry.srid));
		}
		if let Some(bounds) = geometry.compute_bounds() {
			object.set("bbox", bounds.to_json());
		}
	}

	match &geometry.shape {
		GeometryShape::Point(g) => object.set("coordinates", g.to_coord_json(precision)),
		GeometryShape::LineString(g) => object.set("coordinates", g.to_coord_json(precision)),
		GeometryShape::Polygon(g) => object.set("coordinates", g.to_coord_json(precision)),
		GeometryShape::MultiPoint(g) => object.set("coordinates", g.to_coord_json(precision)),
		GeometryShape::MultiLineString(g) => object.set("coordinates", g.to_coord_json(precision)),
		GeometryShape::MultiPolygon(g) => object.set("coordinates", g.to_coord_json(precision)),
		GeometryShape::GeometryCollection(children) => {
			let entries = children
				.iter()
				.map(|child| JsonValue::Object(encode_geometry(child, true, precision)))
				.collect::<Vec<_>>();
			object.set("geometries", JsonValue::Array(JsonArray(entries)));
		}
	}

	object
}
