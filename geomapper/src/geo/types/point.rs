use super::{Bounds, Coordinates, GeometryTrait, MultiPointGeometry, SingleGeometryTrait};
use geomapper_core::json::JsonValue;
use std::fmt::Debug;

/// A single position in space.
///
/// This is the simplest geometric type and the building block for more
/// complex geometries.
#[derive(Clone, PartialEq)]
pub struct PointGeometry(pub Coordinates);

impl PointGeometry {
	#[must_use]
	pub fn new(c: Coordinates) -> Self {
		Self(c)
	}

	#[must_use]
	pub fn x(&self) -> f64 {
		self.0.x()
	}

	#[must_use]
	pub fn y(&self) -> f64 {
		self.0.y()
	}

	/// Returns a reference to the underlying `Coordinates`.
	#[must_use]
	pub fn as_coord(&self) -> &Coordinates {
		&self.0
	}
}

impl GeometryTrait for PointGeometry {
	/// Always succeeds, a point is always valid.
	fn verify(&self) -> anyhow::Result<()> {
		Ok(())
	}

	fn to_coord_json(&self, precision: Option<u8>) -> JsonValue {
		self.0.to_json(precision)
	}

	fn compute_bounds(&self) -> Option<Bounds> {
		Some(Bounds::of(&self.0))
	}
}

impl SingleGeometryTrait<MultiPointGeometry> for PointGeometry {
	fn into_multi(self) -> MultiPointGeometry {
		MultiPointGeometry(vec![self])
	}
}

impl Debug for PointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

impl<T> From<T> for PointGeometry
where
	Coordinates: From<T>,
{
	fn from(value: T) -> Self {
		Self(Coordinates::from(value))
	}
}

impl From<geo::Point<f64>> for PointGeometry {
	fn from(value: geo::Point<f64>) -> Self {
		Self(Coordinates::new(value.x(), value.y()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::geo::CompositeGeometryTrait;

	#[test]
	fn new_and_accessors() {
		let point = PointGeometry::new(Coordinates::new(1.0, 2.0));
		assert_eq!(point.x(), 1.0);
		assert_eq!(point.y(), 2.0);
		assert_eq!(point.as_coord(), &Coordinates::new(1.0, 2.0));
	}

	#[test]
	fn verify_always_ok() {
		assert!(PointGeometry::from(&[0, 0]).verify().is_ok());
	}

	#[test]
	fn to_coord_json() {
		let json = PointGeometry::from([1.5, 2.5]).to_coord_json(None);
		assert_eq!(json, JsonValue::from([1.5, 2.5]));
	}

	#[test]
	fn to_coord_json_with_precision() {
		let json = PointGeometry::from([1.23456, 2.34567]).to_coord_json(Some(2));
		assert_eq!(json, JsonValue::from([1.23, 2.35]));
	}

	#[test]
	fn compute_bounds() {
		let bounds = PointGeometry::from([3.0, 7.0]).compute_bounds().unwrap();
		assert_eq!(bounds.to_json(), JsonValue::from([3.0, 7.0, 3.0, 7.0]));
	}

	#[test]
	fn into_multi() {
		let p = PointGeometry::from(&[1, 2]);
		let multi = p.clone().into_multi();
		assert_eq!(multi.len(), 1);
		assert_eq!(multi.as_vec()[0], p);
	}

	#[test]
	fn from_geo_point() {
		let p = PointGeometry::from(geo::Point::new(3.0, 4.0));
		assert_eq!(p.x(), 3.0);
		assert_eq!(p.y(), 4.0);
	}

	#[test]
	fn debug_format() {
		assert_eq!(format!("{:?}", PointGeometry::from(&[1, 2])), "[1.0, 2.0]");
	}
}
