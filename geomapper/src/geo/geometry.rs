use super::types::*;
use anyhow::Result;
use std::fmt::Debug;

/// SRID value meaning "no CRS specified".
pub const SRID_NONE: u32 = 0;

/// SRID of WGS84, the implied CRS of untagged GeoJSON.
pub const SRID_WGS84: u32 = 4326;

/// The closed set of geometry variants.
///
/// Every consumer matches exhaustively on this enum; there is no way for an
/// unknown variant to fall through silently.
#[derive(Clone, PartialEq)]
pub enum GeometryShape {
	Point(PointGeometry),
	LineString(LineStringGeometry),
	Polygon(PolygonGeometry),
	MultiPoint(MultiPointGeometry),
	MultiLineString(MultiLineStringGeometry),
	MultiPolygon(MultiPolygonGeometry),
	GeometryCollection(Vec<Geometry>),
}

/// A geometry value: a shape plus the SRID of its coordinate reference
/// system (`SRID_NONE` when no CRS was specified).
#[derive(Clone, Debug, PartialEq)]
pub struct Geometry {
	pub srid: u32,
	pub shape: GeometryShape,
}

impl Geometry {
	#[must_use]
	pub fn new(shape: GeometryShape) -> Self {
		Self {
			srid: SRID_NONE,
			shape,
		}
	}

	#[must_use]
	pub fn with_srid(mut self, srid: u32) -> Self {
		self.set_srid(srid);
		self
	}

	/// Overwrite the SRID, propagating into collection children so that the
	/// whole tree stays consistent.
	pub fn set_srid(&mut self, srid: u32) {
		self.srid = srid;
		if let GeometryShape::GeometryCollection(children) = &mut self.shape {
			for child in children {
				child.set_srid(srid);
			}
		}
	}

	pub fn new_point<T>(value: T) -> Self
	where
		PointGeometry: From<T>,
	{
		Self::new(GeometryShape::Point(PointGeometry::from(value)))
	}

	pub fn new_line_string<T>(value: T) -> Self
	where
		LineStringGeometry: From<T>,
	{
		Self::new(GeometryShape::LineString(LineStringGeometry::from(value)))
	}

	pub fn new_polygon<T>(value: T) -> Self
	where
		PolygonGeometry: From<T>,
	{
		Self::new(GeometryShape::Polygon(PolygonGeometry::from(value)))
	}

	pub fn new_multi_point<T>(value: T) -> Self
	where
		MultiPointGeometry: From<T>,
	{
		Self::new(GeometryShape::MultiPoint(MultiPointGeometry::from(value)))
	}

	pub fn new_multi_line_string<T>(value: T) -> Self
	where
		MultiLineStringGeometry: From<T>,
	{
		Self::new(GeometryShape::MultiLineString(MultiLineStringGeometry::from(value)))
	}

	pub fn new_multi_polygon<T>(value: T) -> Self
	where
		MultiPolygonGeometry: From<T>,
	{
		Self::new(GeometryShape::MultiPolygon(MultiPolygonGeometry::from(value)))
	}

	#[must_use]
	pub fn new_geometry_collection(children: Vec<Geometry>) -> Self {
		Self::new(GeometryShape::GeometryCollection(children))
	}

	/// The GeoJSON discriminator tag of this geometry.
	#[must_use]
	pub fn type_name(&self) -> &str {
		match &self.shape {
			GeometryShape::Point(_) => "Point",
			GeometryShape::LineString(_) => "LineString",
			GeometryShape::Polygon(_) => "Polygon",
			GeometryShape::MultiPoint(_) => "MultiPoint",
			GeometryShape::MultiLineString(_) => "MultiLineString",
			GeometryShape::MultiPolygon(_) => "MultiPolygon",
			GeometryShape::GeometryCollection(_) => "GeometryCollection",
		}
	}

	/// Verifies structural validity with the same rules the decoder applies.
	pub fn verify(&self) -> Result<()> {
		match &self.shape {
			GeometryShape::Point(g) => g.verify(),
			GeometryShape::LineString(g) => g.verify(),
			GeometryShape::Polygon(g) => g.verify(),
			GeometryShape::MultiPoint(g) => g.verify(),
			GeometryShape::MultiLineString(g) => g.verify(),
			GeometryShape::MultiPolygon(g) => g.verify(),
			GeometryShape::GeometryCollection(children) => {
				for child in children {
					child.verify()?;
				}
				Ok(())
			}
		}
	}

	/// Compute the bounding extent, `None` for geometries without positions.
	/// A collection's extent covers all of its children.
	#[must_use]
	pub fn compute_bounds(&self) -> Option<Bounds> {
		match &self.shape {
			GeometryShape::Point(g) => g.compute_bounds(),
			GeometryShape::LineString(g) => g.compute_bounds(),
			GeometryShape::Polygon(g) => g.compute_bounds(),
			GeometryShape::MultiPoint(g) => g.compute_bounds(),
			GeometryShape::MultiLineString(g) => g.compute_bounds(),
			GeometryShape::MultiPolygon(g) => g.compute_bounds(),
			GeometryShape::GeometryCollection(children) => {
				let mut bounds: Option<Bounds> = None;
				for child in children {
					if let Some(child_bounds) = child.compute_bounds() {
						match &mut bounds {
							Some(b) => b.merge(&child_bounds),
							None => bounds = Some(child_bounds),
						}
					}
				}
				bounds
			}
		}
	}

	#[cfg(test)]
	pub fn new_example() -> Self {
		Self::new_multi_polygon(vec![
			vec![
				vec![[0.0, 0.0], [5.0, 0.0], [2.5, 4.0], [0.0, 0.0]],
				vec![[2.0, 1.0], [2.5, 2.0], [3.0, 1.0], [2.0, 1.0]],
			],
			vec![
				vec![[6.0, 0.0], [9.0, 0.0], [9.0, 4.0], [6.0, 4.0], [6.0, 0.0]],
				vec![[7.0, 1.0], [7.0, 3.0], [8.0, 3.0], [8.0, 1.0], [7.0, 1.0]],
			],
		])
	}
}

impl Debug for GeometryShape {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let (type_name, inner): (&str, &dyn Debug) = match self {
			GeometryShape::Point(g) => ("Point", g),
			GeometryShape::LineString(g) => ("LineString", g),
			GeometryShape::Polygon(g) => ("Polygon", g),
			GeometryShape::MultiPoint(g) => ("MultiPoint", g),
			GeometryShape::MultiLineString(g) => ("MultiLineString", g),
			GeometryShape::MultiPolygon(g) => ("MultiPolygon", g),
			GeometryShape::GeometryCollection(g) => ("GeometryCollection", g),
		};
		f.debug_tuple(type_name).field(inner).finish()
	}
}
