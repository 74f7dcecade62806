// Item domain module
// Contains the item record and the field identifiers used by validation

#![allow(clippy::module_inception)]

pub mod item;
pub mod value_objects;

// Re-export main types for convenience
pub use item::{validate_name, Item};
pub use value_objects::ItemField;
