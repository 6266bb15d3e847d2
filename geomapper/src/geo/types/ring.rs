use super::{Bounds, CompositeGeometryTrait, Coordinates, GeometryTrait};
use anyhow::{Result, ensure};
use geomapper_core::json::JsonValue;
use std::fmt::Debug;

/// A closed loop of positions, the building block of polygons.
///
/// The first and last positions must be identical to close the shape.
#[derive(Clone, PartialEq)]
pub struct RingGeometry(pub Vec<Coordinates>);

impl GeometryTrait for RingGeometry {
	/// Verifies that the ring has at least 4 positions (3 unique points
	/// plus the closing point) and that it is closed.
	fn verify(&self) -> Result<()> {
		ensure!(self.0.len() >= 4, "a ring needs at least 4 positions");
		ensure!(self.0.first() == self.0.last(), "a ring must be closed");
		Ok(())
	}

	fn to_coord_json(&self, precision: Option<u8>) -> JsonValue {
		JsonValue::from(self.0.iter().map(|coord| coord.to_json(precision)).collect::<Vec<_>>())
	}

	fn compute_bounds(&self) -> Option<Bounds> {
		Bounds::from_coords(self.0.iter())
	}
}

impl CompositeGeometryTrait<Coordinates> for RingGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<Coordinates> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<Coordinates> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<Coordinates> {
		self.0
	}
}

impl Debug for RingGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(RingGeometry, Coordinates);

impl From<geo::LineString<f64>> for RingGeometry {
	fn from(geometry: geo::LineString<f64>) -> Self {
		RingGeometry(geometry.into_iter().map(Coordinates::from).collect())
	}
}
