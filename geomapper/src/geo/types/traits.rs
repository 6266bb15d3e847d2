use anyhow::Result;
use geomapper_core::json::JsonValue;
use std::fmt::Debug;

use super::Bounds;

/// Defines the basic interface for geometric primitives, providing common
/// functionality for all geometry types.
pub trait GeometryTrait: Debug + Clone + Sized {
	/// Verifies the structural validity of the geometry, applying the same
	/// rules the decoder enforces on raw coordinate trees. Returns an error
	/// naming the violated rule.
	fn verify(&self) -> Result<()>;

	/// Converts the geometry into the JSON representation of its
	/// coordinates, optionally rounding values to the given precision.
	fn to_coord_json(&self, precision: Option<u8>) -> JsonValue;

	/// Compute the bounding extent of this geometry.
	///
	/// Returns `None` if the geometry contains no positions.
	fn compute_bounds(&self) -> Option<Bounds>;
}

/// Represents geometries that can be wrapped into a corresponding
/// multi-geometry, e.g. a single `PointGeometry` into a `MultiPointGeometry`.
pub trait SingleGeometryTrait<Multi>: Debug + Clone {
	/// Converts the single geometry into its multi-geometry equivalent.
	fn into_multi(self) -> Multi;
}

/// Represents composite geometries that are collections of simpler elements,
/// e.g. a polygon is made of rings.
pub trait CompositeGeometryTrait<Item>: Debug + Clone {
	/// Creates a new, empty composite geometry.
	fn new() -> Self;

	/// Returns an immutable reference to the inner collection of elements.
	fn as_vec(&self) -> &Vec<Item>;

	/// Returns a mutable reference to the inner collection of elements.
	fn as_mut_vec(&mut self) -> &mut Vec<Item>;

	/// Consumes the composite geometry and returns its elements.
	fn into_inner(self) -> Vec<Item>;

	/// Checks whether the composite geometry contains no elements.
	fn is_empty(&self) -> bool {
		self.as_vec().is_empty()
	}

	/// Returns the number of contained elements.
	fn len(&self) -> usize {
		self.as_vec().len()
	}

	/// Adds a new element to the composite geometry.
	fn push(&mut self, item: Item) {
		self.as_mut_vec().push(item);
	}

	/// Returns a reference to the first element, if any.
	fn first(&self) -> Option<&Item> {
		self.as_vec().first()
	}

	/// Returns a reference to the last element, if any.
	fn last(&self) -> Option<&Item> {
		self.as_vec().last()
	}
}
