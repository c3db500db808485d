//! Custom extractors.

pub mod json_object;

pub use json_object::JsonObject;
