//! The GeoJSON codec: CRS parsing, geometry decoding/encoding, the
//! Feature/FeatureCollection codec and document readers.
//!
//! These modules convert between GeoJSON text (via the generic JSON tree of
//! `geomapper_core`) and the crate's geometry types such as
//! [`crate::geo::GeoCollection`], [`crate::geo::GeoFeature`] and
//! [`crate::geo::Geometry`].

mod crs;
mod decode;
mod encode;
mod feature;
mod read;

pub use crs::{crs_to_json, parse_crs, parse_crs_name};
pub use decode::{DecodeMode, GeometryType, decode_geometry};
pub use encode::{EncodeContext, EncodeOptions, encode_geometry};
pub use feature::{
	DecodeOptions, PropertyValueEncoder, decode_feature, decode_feature_collection, encode_feature,
	encode_feature_collection,
};
pub use read::{read_geojson, read_ndgeojson_iter, read_ndgeojson_stream};
