//! Converts between GeoJSON documents and a typed geometry model.
//!
//! The model is a closed set of geometry variants ([`Geometry`],
//! [`GeoFeature`], [`GeoCollection`]) that every codec path matches
//! exhaustively. Decoding validates coordinate arity, ring counts and CRS
//! names on the raw JSON tree; encoding computes bounding boxes and
//! suppresses `crs`/`bbox` on geometries nested inside collections.
//!
//! [`mapper::Mapper`] is the configurable entry point:
//!
//! ```
//! use geomapper::mapper::Mapper;
//!
//! let mapper = Mapper::new();
//! let geometry = mapper.geometry_from_json(r#"{"type":"Point","coordinates":[100.0,0.0]}"#)?;
//! assert!(mapper.geometry_to_json(&geometry).contains("Point"));
//! # Ok::<(), geomapper::GeoJsonError>(())
//! ```

mod error;
mod geo;
pub mod geojson;
pub mod mapper;

pub use error::{GeoJsonError, Result};
pub use geo::*;
pub use mapper::Mapper;
