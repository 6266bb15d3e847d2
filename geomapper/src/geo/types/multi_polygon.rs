use super::{Bounds, CompositeGeometryTrait, GeometryTrait, PolygonGeometry};
use anyhow::{Result, ensure};
use geomapper_core::json::JsonValue;
use std::fmt::Debug;

/// A set of one or more polygons forming a multi-part area.
#[derive(Clone, PartialEq)]
pub struct MultiPolygonGeometry(pub Vec<PolygonGeometry>);

impl GeometryTrait for MultiPolygonGeometry {
	fn verify(&self) -> Result<()> {
		ensure!(!self.0.is_empty(), "a MultiPolygon needs at least one Polygon");
		for polygon in &self.0 {
			polygon.verify()?;
		}
		Ok(())
	}

	fn to_coord_json(&self, precision: Option<u8>) -> JsonValue {
		JsonValue::from(
			self
				.0
				.iter()
				.map(|polygon| polygon.to_coord_json(precision))
				.collect::<Vec<_>>(),
		)
	}

	/// Scans only the exterior ring of each polygon; interior rings do not
	/// contribute to the extent.
	fn compute_bounds(&self) -> Option<Bounds> {
		Bounds::from_coords(
			self
				.0
				.iter()
				.filter_map(PolygonGeometry::exterior)
				.flat_map(|ring| ring.0.iter()),
		)
	}
}

impl CompositeGeometryTrait<PolygonGeometry> for MultiPolygonGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<PolygonGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<PolygonGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<PolygonGeometry> {
		self.0
	}
}

impl Debug for MultiPolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiPolygonGeometry, PolygonGeometry);

impl From<geo::MultiPolygon<f64>> for MultiPolygonGeometry {
	fn from(geometry: geo::MultiPolygon<f64>) -> Self {
		MultiPolygonGeometry(geometry.into_iter().map(PolygonGeometry::from).collect())
	}
}
