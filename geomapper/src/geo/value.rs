use super::GeoFeature;
use anyhow::{Result, bail};
use geomapper_core::json::JsonValue;
use std::{any::Any, collections::BTreeMap, fmt::Debug, sync::Arc};

/// An opaque caller-supplied property value.
///
/// Values of custom types are carried through the model untouched and are
/// only interpreted during encoding: either by an encoder registered for the
/// concrete type, or through the [`CustomValue::as_feature`] bridge.
pub trait CustomValue: Debug + Send + Sync + 'static {
	/// Concrete type access, used for registry lookups.
	fn as_any(&self) -> &dyn Any;

	/// Bridge this value into a feature for generic serialization.
	///
	/// # Errors
	/// The default implementation reports that no feature representation
	/// exists; the affected property then degrades to an empty object.
	fn as_feature(&self) -> Result<GeoFeature> {
		bail!("value has no feature representation")
	}
}

/// A property value: JSON-compatible primitives and containers, plus the
/// `Custom` escape hatch for caller-defined types.
#[derive(Clone)]
pub enum GeoValue {
	Bool(bool),
	Double(f64),
	Float(f32),
	Int(i64),
	Null,
	String(String),
	UInt(u64),
	Array(Vec<GeoValue>),
	Object(BTreeMap<String, GeoValue>),
	Custom(Arc<dyn CustomValue>),
}

impl GeoValue {
	/// Convert a JSON tree into the equivalent property value.
	///
	/// Whole numbers become `UInt`/`Int`, everything else numeric becomes
	/// `Double`; arrays and objects convert recursively.
	#[must_use]
	pub fn from_json(value: &JsonValue) -> GeoValue {
		match value {
			JsonValue::Null => GeoValue::Null,
			JsonValue::Boolean(v) => GeoValue::Bool(*v),
			JsonValue::String(v) => GeoValue::String(v.clone()),
			JsonValue::Number(n) => {
				if n.fract() == 0.0 && *n >= 0.0 && *n <= u64::MAX as f64 {
					GeoValue::UInt(*n as u64)
				} else if n.fract() == 0.0 && *n < 0.0 && *n >= i64::MIN as f64 {
					GeoValue::Int(*n as i64)
				} else {
					GeoValue::Double(*n)
				}
			}
			JsonValue::Array(array) => GeoValue::Array(array.iter().map(GeoValue::from_json).collect()),
			JsonValue::Object(object) => GeoValue::Object(
				object
					.iter()
					.map(|(key, value)| (key.clone(), GeoValue::from_json(value)))
					.collect(),
			),
		}
	}
}

impl Debug for GeoValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
			Self::Double(v) => f.debug_tuple("Double").field(v).finish(),
			Self::Float(v) => f.debug_tuple("Float").field(v).finish(),
			Self::Int(v) => f.debug_tuple("Int").field(v).finish(),
			Self::Null => f.debug_tuple("Null").finish(),
			Self::String(v) => f.debug_tuple("String").field(v).finish(),
			Self::UInt(v) => f.debug_tuple("UInt").field(v).finish(),
			Self::Array(v) => f.debug_tuple("Array").field(v).finish(),
			Self::Object(v) => f.debug_tuple("Object").field(v).finish(),
			Self::Custom(v) => f.debug_tuple("Custom").field(v).finish(),
		}
	}
}

impl PartialEq for GeoValue {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::Bool(a), Self::Bool(b)) => a == b,
			(Self::Double(a), Self::Double(b)) => a == b,
			(Self::Float(a), Self::Float(b)) => a == b,
			(Self::Int(a), Self::Int(b)) => a == b,
			(Self::Null, Self::Null) => true,
			(Self::String(a), Self::String(b)) => a == b,
			(Self::UInt(a), Self::UInt(b)) => a == b,
			(Self::Array(a), Self::Array(b)) => a == b,
			(Self::Object(a), Self::Object(b)) => a == b,
			// custom values compare by identity
			(Self::Custom(a), Self::Custom(b)) => std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b)),
			_ => false,
		}
	}
}

impl From<&str> for GeoValue {
	fn from(value: &str) -> Self {
		GeoValue::String(value.to_string())
	}
}

impl From<&String> for GeoValue {
	fn from(value: &String) -> Self {
		GeoValue::String(value.clone())
	}
}

impl From<String> for GeoValue {
	fn from(value: String) -> Self {
		GeoValue::String(value)
	}
}

impl From<i32> for GeoValue {
	fn from(value: i32) -> Self {
		if value < 0 {
			GeoValue::Int(i64::from(value))
		} else {
			GeoValue::UInt(value as u64)
		}
	}
}

impl From<u32> for GeoValue {
	fn from(value: u32) -> Self {
		GeoValue::UInt(u64::from(value))
	}
}

impl From<i64> for GeoValue {
	fn from(value: i64) -> Self {
		GeoValue::Int(value)
	}
}

impl From<u64> for GeoValue {
	fn from(value: u64) -> Self {
		GeoValue::UInt(value)
	}
}

impl From<f32> for GeoValue {
	fn from(value: f32) -> Self {
		GeoValue::Float(value)
	}
}

impl From<f64> for GeoValue {
	fn from(value: f64) -> Self {
		GeoValue::Double(value)
	}
}

impl From<bool> for GeoValue {
	fn from(value: bool) -> Self {
		GeoValue::Bool(value)
	}
}

impl From<Vec<GeoValue>> for GeoValue {
	fn from(value: Vec<GeoValue>) -> Self {
		GeoValue::Array(value)
	}
}

impl From<BTreeMap<String, GeoValue>> for GeoValue {
	fn from(value: BTreeMap<String, GeoValue>) -> Self {
		GeoValue::Object(value)
	}
}

impl From<Arc<dyn CustomValue>> for GeoValue {
	fn from(value: Arc<dyn CustomValue>) -> Self {
		GeoValue::Custom(value)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Debug)]
	struct Marker;

	impl CustomValue for Marker {
		fn as_any(&self) -> &dyn Any {
			self
		}
	}

	#[test]
	fn from_primitives() {
		assert_eq!(GeoValue::from("x"), GeoValue::String("x".to_string()));
		assert_eq!(GeoValue::from(-5), GeoValue::Int(-5));
		assert_eq!(GeoValue::from(5), GeoValue::UInt(5));
		assert_eq!(GeoValue::from(1.5), GeoValue::Double(1.5));
		assert_eq!(GeoValue::from(true), GeoValue::Bool(true));
	}

	#[test]
	fn from_json_numbers() {
		assert_eq!(GeoValue::from_json(&JsonValue::Number(42.0)), GeoValue::UInt(42));
		assert_eq!(GeoValue::from_json(&JsonValue::Number(-7.0)), GeoValue::Int(-7));
		assert_eq!(GeoValue::from_json(&JsonValue::Number(1.25)), GeoValue::Double(1.25));
	}

	#[test]
	fn from_json_containers() {
		let json = JsonValue::parse_str(r#"{"a":[1,"x",null],"b":true}"#).unwrap();
		let value = GeoValue::from_json(&json);
		let GeoValue::Object(map) = value else {
			panic!("expected an object");
		};
		assert_eq!(map.get("b"), Some(&GeoValue::Bool(true)));
		assert_eq!(
			map.get("a"),
			Some(&GeoValue::Array(vec![
				GeoValue::UInt(1),
				GeoValue::String("x".to_string()),
				GeoValue::Null,
			]))
		);
	}

	#[test]
	fn custom_values_compare_by_identity() {
		let shared: Arc<dyn CustomValue> = Arc::new(Marker);
		let a = GeoValue::Custom(Arc::clone(&shared));
		let b = GeoValue::Custom(shared);
		let c = GeoValue::Custom(Arc::new(Marker));
		assert_eq!(a, b);
		assert_ne!(a, c);
	}

	#[test]
	fn default_bridge_fails() {
		assert!(Marker.as_feature().is_err());
	}
}
