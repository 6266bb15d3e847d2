use super::Coordinates;
use geomapper_core::json::JsonValue;

/// Axis-aligned bounding extent of a set of positions.
///
/// The z range is tracked only while every included position carries a z
/// component; as soon as a 2-D position is included the extent degrades to
/// two dimensions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
	pub x_min: f64,
	pub y_min: f64,
	pub x_max: f64,
	pub y_max: f64,
	pub z_range: Option<(f64, f64)>,
}

impl Bounds {
	/// The degenerate extent of a single position.
	#[must_use]
	pub fn of(coord: &Coordinates) -> Self {
		Self {
			x_min: coord.x(),
			y_min: coord.y(),
			x_max: coord.x(),
			y_max: coord.y(),
			z_range: coord.z().map(|z| (z, z)),
		}
	}

	/// Grow the extent to include one more position.
	pub fn include(&mut self, coord: &Coordinates) {
		self.x_min = self.x_min.min(coord.x());
		self.y_min = self.y_min.min(coord.y());
		self.x_max = self.x_max.max(coord.x());
		self.y_max = self.y_max.max(coord.y());
		self.z_range = match (self.z_range, coord.z()) {
			(Some((lo, hi)), Some(z)) => Some((lo.min(z), hi.max(z))),
			_ => None,
		};
	}

	/// Grow the extent to cover another extent.
	pub fn merge(&mut self, other: &Bounds) {
		self.x_min = self.x_min.min(other.x_min);
		self.y_min = self.y_min.min(other.y_min);
		self.x_max = self.x_max.max(other.x_max);
		self.y_max = self.y_max.max(other.y_max);
		self.z_range = match (self.z_range, other.z_range) {
			(Some((lo_a, hi_a)), Some((lo_b, hi_b))) => Some((lo_a.min(lo_b), hi_a.max(hi_b))),
			_ => None,
		};
	}

	/// Compute the extent of an iterator of positions by a single linear scan.
	pub fn from_coords<'a>(coords: impl Iterator<Item = &'a Coordinates>) -> Option<Bounds> {
		let mut bounds: Option<Bounds> = None;
		for coord in coords {
			match &mut bounds {
				Some(b) => b.include(coord),
				None => bounds = Some(Bounds::of(coord)),
			}
		}
		bounds
	}

	/// The GeoJSON `bbox` form: `[x_min, y_min, x_max, y_max]`, or the
	/// six-element variant when a z range is present.
	#[must_use]
	pub fn to_json(&self) -> JsonValue {
		match self.z_range {
			Some((z_min, z_max)) => {
				JsonValue::from([self.x_min, self.y_min, z_min, self.x_max, self.y_max, z_max])
			}
			None => JsonValue::from([self.x_min, self.y_min, self.x_max, self.y_max]),
		}
	}
}
