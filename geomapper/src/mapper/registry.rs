use super::Mapper;
use crate::geo::CustomValue;
use crate::geojson::EncodeContext;
use anyhow::Result;
use geomapper_core::json::JsonValue;
use std::{any::TypeId, collections::BTreeMap, sync::Arc};

/// Encodes property values of one registered concrete type.
///
/// An encoder may call back into the mapper, e.g. to encode a bridged
/// feature; the shared context keeps such re-entry subject to the
/// recursion ceiling.
pub trait PropertyEncoder: Send + Sync {
	/// Produce the JSON form of `value`.
	///
	/// # Errors
	/// A failing encoder degrades the single affected property to an empty
	/// object; it never aborts the enclosing feature.
	fn encode(&self, value: &dyn CustomValue, mapper: &Mapper, ctx: &mut EncodeContext) -> Result<JsonValue>;
}

/// The per-type codec table consulted for `GeoValue::Custom` property
/// values.
#[derive(Clone, Default)]
pub struct PropertyRegistry {
	encoders: BTreeMap<TypeId, Arc<dyn PropertyEncoder>>,
}

impl PropertyRegistry {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Register an encoder for the concrete type `T`. Re-registering a type
	/// replaces the previous binding.
	pub fn register<T: CustomValue>(&mut self, encoder: Arc<dyn PropertyEncoder>) {
		self.encoders.insert(TypeId::of::<T>(), encoder);
	}

	/// Find the encoder registered for the concrete type of `value`.
	#[must_use]
	pub fn lookup(&self, value: &dyn CustomValue) -> Option<&Arc<dyn PropertyEncoder>> {
		self.encoders.get(&value.as_any().type_id())
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.encoders.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.encoders.is_empty()
	}
}

impl std::fmt::Debug for PropertyRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("PropertyRegistry")
			.field("encoders", &self.encoders.len())
			.finish()
	}
}
