use geomapper_core::json::JsonValue;
use std::fmt::Debug;

/// One position: an x/y pair with an optional z component.
#[derive(Clone, Copy, PartialEq)]
pub struct Coordinates {
	x: f64,
	y: f64,
	z: Option<f64>,
}

impl Coordinates {
	#[must_use]
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y, z: None }
	}

	#[must_use]
	pub fn new_3d(x: f64, y: f64, z: f64) -> Self {
		Self { x, y, z: Some(z) }
	}

	#[must_use]
	pub fn x(&self) -> f64 {
		self.x
	}

	#[must_use]
	pub fn y(&self) -> f64 {
		self.y
	}

	#[must_use]
	pub fn z(&self) -> Option<f64> {
		self.z
	}

	#[must_use]
	pub fn has_z(&self) -> bool {
		self.z.is_some()
	}

	/// Returns the position as a JSON array `[x, y]` or `[x, y, z]`,
	/// optionally rounded to the given number of decimal places.
	#[must_use]
	pub fn to_json(&self, precision: Option<u8>) -> JsonValue {
		let x = round_to(self.x, precision);
		let y = round_to(self.y, precision);
		match self.z {
			Some(z) => JsonValue::from([x, y, round_to(z, precision)]),
			None => JsonValue::from([x, y]),
		}
	}
}

fn round_to(value: f64, precision: Option<u8>) -> f64 {
	match precision {
		Some(prec) => {
			let factor = 10f64.powi(i32::from(prec));
			(value * factor).round() / factor
		}
		None => value,
	}
}

impl<'a, T> From<&'a [T; 2]> for Coordinates
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; 2]) -> Self {
		Coordinates::new(value[0].into(), value[1].into())
	}
}

impl From<[f64; 2]> for Coordinates {
	fn from(value: [f64; 2]) -> Self {
		Coordinates::new(value[0], value[1])
	}
}

impl From<[f64; 3]> for Coordinates {
	fn from(value: [f64; 3]) -> Self {
		Coordinates::new_3d(value[0], value[1], value[2])
	}
}

impl From<(f64, f64)> for Coordinates {
	fn from(value: (f64, f64)) -> Self {
		Coordinates::new(value.0, value.1)
	}
}

impl From<&(f64, f64)> for Coordinates {
	fn from(value: &(f64, f64)) -> Self {
		Coordinates::new(value.0, value.1)
	}
}

impl From<Coordinates> for [f64; 2] {
	fn from(value: Coordinates) -> Self {
		[value.x, value.y]
	}
}

impl From<geo::Coord> for Coordinates {
	fn from(value: geo::Coord) -> Self {
		Coordinates::new(value.x, value.y)
	}
}

impl Debug for Coordinates {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self.z {
			Some(z) => write!(f, "[{:?}, {:?}, {:?}]", self.x, self.y, z),
			None => write!(f, "[{:?}, {:?}]", self.x, self.y),
		}
	}
}
