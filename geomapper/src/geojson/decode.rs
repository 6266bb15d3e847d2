//! Geometry decoding: turns a generic JSON tree into [`Geometry`] values,
//! validating the coordinate structure of every variant on the raw tree
//! before any model value is built.

use super::crs::parse_crs;
use crate::error::{GeoJsonError, Result};
use crate::geo::{
	Coordinates, Geometry, GeometryShape, LineStringGeometry, MultiLineStringGeometry, MultiPointGeometry,
	MultiPolygonGeometry, PointGeometry, PolygonGeometry, RingGeometry,
};
use geomapper_core::json::{JsonArray, JsonObject, JsonValue};
use std::fmt::Display;

/// A decode target: one of the seven concrete variants, or `Any` for
/// "some geometry" (the unconstrained supertype).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeometryType {
	Point,
	LineString,
	Polygon,
	MultiPoint,
	MultiLineString,
	MultiPolygon,
	GeometryCollection,
	Any,
}

impl GeometryType {
	fn from_tag(tag: &str) -> Option<GeometryType> {
		Some(match tag {
			"Point" => GeometryType::Point,
			"LineString" => GeometryType::LineString,
			"Polygon" => GeometryType::Polygon,
			"MultiPoint" => GeometryType::MultiPoint,
			"MultiLineString" => GeometryType::MultiLineString,
			"MultiPolygon" => GeometryType::MultiPolygon,
			"GeometryCollection" => GeometryType::GeometryCollection,
			_ => return None,
		})
	}
}

impl Display for GeometryType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(match self {
			GeometryType::Point => "Point",
			GeometryType::LineString => "LineString",
			GeometryType::Polygon => "Polygon",
			GeometryType::MultiPoint => "MultiPoint",
			GeometryType::MultiLineString => "MultiLineString",
			GeometryType::MultiPolygon => "MultiPolygon",
			GeometryType::GeometryCollection => "GeometryCollection",
			GeometryType::Any => "Geometry",
		})
	}
}

/// Whether the decoder enforces that the decoded variant matches the
/// requested target type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DecodeMode {
	/// The discriminator tag must match the requested target (or the target
	/// must be [`GeometryType::Any`]), otherwise `TypeMismatch`.
	Strict,
	/// The requested target is ignored; whatever variant the tag names is
	/// returned.
	#[default]
	Permissive,
}

/// Decode a geometry document.
///
/// `ambient_srid` is used when the document carries no `crs` member; a
/// present `crs` wins.
///
/// # Errors
/// - `MalformedDocument` for a missing/unknown `type` tag or missing
///   `coordinates`/`geometries`
/// - `TypeMismatch` in strict mode when the tag differs from `target`
/// - `MalformedCrs` for an unusable `crs` member
/// - `ShapeViolation` for wrong coordinate arity, nesting or ring count
/// - `NestedCrsViolation` when a collection child carries its own `crs`
pub fn decode_geometry(value: &JsonValue, target: GeometryType, mode: DecodeMode, ambient_srid: u32) -> Result<Geometry> {
	let object = value
		.as_object()
		.map_err(|_| GeoJsonError::MalformedDocument("a geometry must be a JSON object".to_string()))?;

	let tag = match object.get_str("type") {
		Ok(Some(tag)) => tag,
		Ok(None) => {
			return Err(GeoJsonError::MalformedDocument(
				"a geometry needs a 'type' tag".to_string(),
			));
		}
		Err(_) => {
			return Err(GeoJsonError::MalformedDocument(
				"the geometry 'type' tag must be a string".to_string(),
			));
		}
	};

	let Some(found) = GeometryType::from_tag(tag) else {
		return Err(GeoJsonError::MalformedDocument(format!(
			"unknown geometry type '{tag}'"
		)));
	};

	if mode == DecodeMode::Strict && target != GeometryType::Any && found != target {
		return Err(GeoJsonError::TypeMismatch {
			expected: target,
			found,
		});
	}

	let srid = if object.contains_key("crs") {
		parse_crs(object.get("crs"))?
	} else {
		ambient_srid
	};

	let shape = match tag {
		"GeometryCollection" => GeometryShape::GeometryCollection(decode_collection_entries(object, srid)?),
		_ => decode_coordinates(found, object)?,
	};

	Ok(Geometry { srid, shape })
}

/// Reject a raw sub-document that carries its own `crs` member.
///
/// Cheap structural pre-check, applied to collection children and feature
/// geometries before they are decoded. It triggers regardless of whether
/// the parent specified a CRS.
pub(crate) fn ensure_no_nested_crs(object: &JsonObject, context: &str) -> Result<()> {
	if object.contains_key("crs") {
		return Err(GeoJsonError::NestedCrsViolation(format!(
			"{context} must not carry its own 'crs' member"
		)));
	}
	Ok(())
}

fn decode_collection_entries(object: &JsonObject, srid: u32) -> Result<Vec<Geometry>> {
	let Some(entries) = object.get("geometries") else {
		return Err(GeoJsonError::MalformedDocument(
			"a GeometryCollection needs a 'geometries' array".to_string(),
		));
	};
	let entries = entries.as_array().map_err(|_| {
		GeoJsonError::MalformedDocument("the 'geometries' member must be an array".to_string())
	})?;

	entries
		.iter()
		.map(|entry| {
			let child = entry.as_object().map_err(|_| {
				GeoJsonError::MalformedDocument("every 'geometries' entry must be a JSON object".to_string())
			})?;
			ensure_no_nested_crs(child, "a geometry inside a GeometryCollection")?;
			decode_geometry(entry, GeometryType::Any, DecodeMode::Permissive, srid)
		})
		.collect()
}

fn decode_coordinates(kind: GeometryType, object: &JsonObject) -> Result<GeometryShape> {
	let Some(coordinates) = object.get("coordinates") else {
		return Err(GeoJsonError::MalformedDocument(
			"a geometry needs a 'coordinates' array".to_string(),
		));
	};

	Ok(match kind {
		GeometryType::Point => GeometryShape::Point(PointGeometry(decode_position(coordinates)?)),
		GeometryType::LineString => GeometryShape::LineString(LineStringGeometry(decode_line(coordinates)?)),
		GeometryType::Polygon => GeometryShape::Polygon(PolygonGeometry(decode_rings(coordinates)?)),
		GeometryType::MultiPoint => {
			let entries = non_empty_entries(coordinates, "a MultiPoint needs at least one point")?;
			GeometryShape::MultiPoint(MultiPointGeometry(
				entries
					.iter()
					.map(|entry| decode_position(entry).map(PointGeometry))
					.collect::<Result<Vec<_>>>()?,
			))
		}
		GeometryType::MultiLineString => {
			let entries = non_empty_entries(coordinates, "a MultiLineString needs at least one LineString")?;
			GeometryShape::MultiLineString(MultiLineStringGeometry(
				entries
					.iter()
					.map(|entry| decode_line(entry).map(LineStringGeometry))
					.collect::<Result<Vec<_>>>()?,
			))
		}
		GeometryType::MultiPolygon => {
			let entries = non_empty_entries(coordinates, "a MultiPolygon needs at least one Polygon")?;
			GeometryShape::MultiPolygon(MultiPolygonGeometry(
				entries
					.iter()
					.map(|entry| decode_rings(entry).map(PolygonGeometry))
					.collect::<Result<Vec<_>>>()?,
			))
		}
		GeometryType::GeometryCollection | GeometryType::Any => {
			// handled by the caller before dispatching here
			return Err(GeoJsonError::MalformedDocument(format!(
				"'{kind}' carries no coordinates"
			)));
		}
	})
}

fn shape_violation(message: impl Into<String>) -> GeoJsonError {
	GeoJsonError::ShapeViolation(message.into())
}

fn coordinate_array<'a>(value: &'a JsonValue, rule: &str) -> Result<&'a JsonArray> {
	value.as_array().map_err(|_| shape_violation(rule))
}

fn non_empty_entries<'a>(value: &'a JsonValue, rule: &str) -> Result<&'a JsonArray> {
	let entries = coordinate_array(value, rule)?;
	if entries.is_empty() {
		return Err(shape_violation(rule));
	}
	Ok(entries)
}

/// Decode one position: an array of at least 2 numbers. The third number
/// becomes z only when there are exactly 3; any further numbers are ignored.
fn decode_position(value: &JsonValue) -> Result<Coordinates> {
	let entries = coordinate_array(value, "a position must be an array of numbers")?;
	if entries.len() < 2 {
		return Err(shape_violation("a position needs at least 2 coordinate values"));
	}

	let component = |index: usize| -> Result<f64> {
		entries.as_vec()[index]
			.as_number()
			.map_err(|_| shape_violation(format!("coordinate {index} of a position must be a number")))
	};

	let x = component(0)?;
	let y = component(1)?;
	if entries.len() == 3 {
		Ok(Coordinates::new_3d(x, y, component(2)?))
	} else {
		Ok(Coordinates::new(x, y))
	}
}

fn decode_line(value: &JsonValue) -> Result<Vec<Coordinates>> {
	let entries = coordinate_array(value, "a LineString must be an array of positions")?;
	if entries.len() < 2 {
		return Err(shape_violation("a LineString needs at least 2 positions"));
	}
	entries.iter().map(decode_position).collect()
}

fn decode_ring(value: &JsonValue) -> Result<RingGeometry> {
	let entries = coordinate_array(value, "a ring must be an array of positions")?;
	if entries.len() < 4 {
		return Err(shape_violation("a ring needs at least 4 positions"));
	}
	Ok(RingGeometry(
		entries.iter().map(decode_position).collect::<Result<Vec<_>>>()?,
	))
}

fn decode_rings(value: &JsonValue) -> Result<Vec<RingGeometry>> {
	let entries = non_empty_entries(value, "a Polygon needs at least one ring")?;
	entries.iter().map(decode_ring).collect()
}
