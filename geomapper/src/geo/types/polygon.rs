use super::{Bounds, CompositeGeometryTrait, GeometryTrait, MultiPolygonGeometry, RingGeometry, SingleGeometryTrait};
use anyhow::{Result, ensure};
use geomapper_core::json::JsonValue;
use std::fmt::Debug;

/// An area bounded by an exterior ring, with optional interior rings
/// cutting holes into it. Ring 0 is the exterior.
#[derive(Clone, PartialEq)]
pub struct PolygonGeometry(pub Vec<RingGeometry>);

impl PolygonGeometry {
	/// The exterior ring, if the polygon has any rings at all.
	#[must_use]
	pub fn exterior(&self) -> Option<&RingGeometry> {
		self.0.first()
	}

	/// The interior rings (holes). Empty when the polygon has at most one ring.
	#[must_use]
	pub fn holes(&self) -> &[RingGeometry] {
		self.0.get(1..).unwrap_or(&[])
	}
}

impl GeometryTrait for PolygonGeometry {
	fn verify(&self) -> Result<()> {
		ensure!(!self.0.is_empty(), "a Polygon needs at least one ring");
		for ring in &self.0 {
			ring.verify()?;
		}
		Ok(())
	}

	fn to_coord_json(&self, precision: Option<u8>) -> JsonValue {
		JsonValue::from(self.0.iter().map(|ring| ring.to_coord_json(precision)).collect::<Vec<_>>())
	}

	/// Scans every position of every ring, holes included.
	fn compute_bounds(&self) -> Option<Bounds> {
		Bounds::from_coords(self.0.iter().flat_map(|ring| ring.0.iter()))
	}
}

impl SingleGeometryTrait<MultiPolygonGeometry> for PolygonGeometry {
	fn into_multi(self) -> MultiPolygonGeometry {
		MultiPolygonGeometry(vec![self])
	}
}

impl CompositeGeometryTrait<RingGeometry> for PolygonGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<RingGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<RingGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<RingGeometry> {
		self.0
	}
}

impl Debug for PolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(PolygonGeometry, RingGeometry);

impl From<geo::Polygon<f64>> for PolygonGeometry {
	fn from(geometry: geo::Polygon<f64>) -> Self {
		let (exterior, interiors) = geometry.into_inner();
		let mut rings = Vec::with_capacity(interiors.len() + 1);
		rings.push(RingGeometry::from(exterior));
		for interior in interiors {
			rings.push(RingGeometry::from(interior));
		}
		PolygonGeometry(rings)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn with_hole() -> PolygonGeometry {
		PolygonGeometry::from(&[
			[[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]],
			[[2, 2], [4, 2], [4, 4], [2, 4], [2, 2]],
		])
	}

	#[test]
	fn exterior_and_holes() {
		let polygon = with_hole();
		assert!(polygon.exterior().is_some());
		assert_eq!(polygon.holes().len(), 1);
		assert!(PolygonGeometry::new().exterior().is_none());
		assert!(PolygonGeometry::new().holes().is_empty());
	}

	#[test]
	fn verify() {
		assert!(with_hole().verify().is_ok());
		assert!(PolygonGeometry::new().verify().is_err());
		// unclosed ring
		let bad = PolygonGeometry::from(&[[[0, 0], [1, 0], [1, 1], [0, 1]]]);
		assert!(bad.verify().is_err());
	}

	#[test]
	fn bounds_include_holes() {
		// a hole reaching outside the exterior still counts here
		let polygon = PolygonGeometry::from(&[
			[[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]],
			[[8, 8], [15, 8], [15, 15], [8, 15], [8, 8]],
		]);
		let bounds = polygon.compute_bounds().unwrap();
		assert_eq!(bounds.to_json(), JsonValue::from([0.0, 0.0, 15.0, 15.0]));
	}

	#[test]
	fn to_coord_json_nesting() {
		let json = with_hole().to_coord_json(None);
		let rings = json.as_array().unwrap();
		assert_eq!(rings.len(), 2);
		assert_eq!(rings.as_vec()[0].as_array().unwrap().len(), 5);
	}

	#[test]
	fn from_geo_polygon() {
		let polygon = geo::Polygon::new(
			geo::LineString::from(vec![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 0.0)]),
			vec![],
		);
		let converted = PolygonGeometry::from(polygon);
		assert_eq!(converted.len(), 1);
		assert!(converted.holes().is_empty());
	}
}
