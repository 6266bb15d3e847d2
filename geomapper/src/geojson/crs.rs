use crate::error::{GeoJsonError, Result};
use crate::geo::SRID_NONE;
use geomapper_core::json::{JsonObject, JsonValue};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
	static ref EPSG_NAME: Regex = Regex::new(r"^EPSG:(\d+)$").unwrap();
	// exactly seven colon-separated segments, SRID in the last one
	static ref URN_NAME: Regex = Regex::new(r"^urn:ogc:def:crs:EPSG:([^:]*):(\d+)$").unwrap();
}

/// Parse the raw `crs` member of a geometry, feature or collection document.
///
/// An absent member is valid and yields [`SRID_NONE`]; defaulting beyond
/// that is the caller's business.
///
/// # Errors
/// `MalformedCrs` for any present value that is not a well-formed named CRS.
pub fn parse_crs(value: Option<&JsonValue>) -> Result<u32> {
	let Some(value) = value else {
		return Ok(SRID_NONE);
	};
	let object = value
		.as_object()
		.map_err(|_| GeoJsonError::MalformedCrs("crs must be a JSON object".to_string()))?;

	match object.get_str("type") {
		Ok(Some("name")) => {}
		_ => return Err(GeoJsonError::MalformedCrs("crs type must be 'name'".to_string())),
	}

	let name = object
		.get_object("properties")
		.ok()
		.flatten()
		.and_then(|properties| properties.get_str("name").ok().flatten())
		.ok_or_else(|| GeoJsonError::MalformedCrs("crs needs a 'properties.name' string".to_string()))?;

	parse_crs_name(name)
}

/// Extract the SRID from a CRS name.
///
/// Accepts `EPSG:<digits>` and the OGC urn form
/// `urn:ogc:def:crs:EPSG:<version>:<digits>`.
///
/// # Errors
/// `MalformedCrs` for any other name shape.
pub fn parse_crs_name(name: &str) -> Result<u32> {
	let digits = if let Some(captures) = EPSG_NAME.captures(name) {
		captures[1].to_string()
	} else if let Some(captures) = URN_NAME.captures(name) {
		captures[2].to_string()
	} else {
		return Err(GeoJsonError::MalformedCrs(format!("unsupported crs name '{name}'")));
	};

	digits
		.parse::<u32>()
		.map_err(|_| GeoJsonError::MalformedCrs(format!("srid out of range in '{name}'")))
}

/// The wire form of a named CRS: `{"type":"name","properties":{"name":"EPSG:<srid>"}}`.
#[must_use]
pub fn crs_to_json(srid: u32) -> JsonValue {
	let mut properties = JsonObject::new();
	properties.set("name", format!("EPSG:{srid}"));

	let mut crs = JsonObject::new();
	crs.set("type", "name");
	crs.set("properties", properties);
	JsonValue::Object(crs)
}
