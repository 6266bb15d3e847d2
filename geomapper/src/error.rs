use crate::geojson::GeometryType;

/// Errors surfaced by the GeoJSON codec.
///
/// All variants abort the decode of the enclosing document. Encoding never
/// returns one of these: recursion-limit and per-property failures are
/// recovered locally and only degrade the affected sub-value.
#[derive(thiserror::Error, Debug)]
pub enum GeoJsonError {
	/// The `crs` member exists but is not a well-formed named CRS.
	#[error("malformed crs: {0}")]
	MalformedCrs(String),

	/// Coordinates have the wrong arity, nesting depth or ring count.
	#[error("shape violation: {0}")]
	ShapeViolation(String),

	/// Strict-mode decode found a different variant than requested.
	#[error("expected geometry type '{expected}', found '{found}'")]
	TypeMismatch {
		expected: GeometryType,
		found: GeometryType,
	},

	/// A `crs` member appeared on a geometry nested inside a collection
	/// or on a feature's geometry.
	#[error("nested crs violation: {0}")]
	NestedCrsViolation(String),

	/// The document structure is invalid in a non-coordinate way, e.g. a
	/// missing or unknown discriminator tag.
	#[error("malformed document: {0}")]
	MalformedDocument(String),

	/// The input is not valid JSON at all.
	#[error("invalid JSON: {0}")]
	InvalidJson(anyhow::Error),
}

pub type Result<T> = std::result::Result<T, GeoJsonError>;
