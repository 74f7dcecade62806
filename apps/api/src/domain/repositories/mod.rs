// Repository interfaces (ports)
// Implemented by adapters in the infrastructure layer

pub mod item_repository;

pub use item_repository::{ItemRepository, SharedItemRepository, UpdateMode};
