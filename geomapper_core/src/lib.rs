//! Generic JSON tree used by the geomapper codec crates.
//!
//! This crate knows nothing about geometry. It provides [`json::JsonValue`]
//! with parsing ([`json::parse_json_str`]) and serialization
//! ([`json::stringify`]), and is consumed by the `geomapper` crate as its
//! text layer.

pub mod json;
