// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod dynamo_item_repository;
pub mod in_memory_item_repository;

pub use dynamo_item_repository::{DynamoItemRepository, DEFAULT_TABLE};
pub use in_memory_item_repository::InMemoryItemRepository;
