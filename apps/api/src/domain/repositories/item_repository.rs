use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::DataResult;
use crate::domain::item::Item;

/// How [`ItemRepository::update`] treats a name with no stored record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateMode {
    /// Create the record with only name and description set
    #[default]
    Upsert,
    /// Reject the update with `NotFound`
    Strict,
}

/// Repository trait for items
///
/// Every implementation validates its input and reports store outcomes as
/// [`DataError`](crate::domain::errors::DataError). Each call is a single
/// point operation, so none of them can partially apply.
///
/// Calls are cancelled by dropping the returned future.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Write an item, replacing any record with the same name
    async fn create(&self, item: Item) -> DataResult<Item>;

    /// Find an item by name
    async fn get(&self, name: &str) -> DataResult<Item>;

    /// Set the description of the item with `item.name`
    ///
    /// Vendor and price are never changed. See [`UpdateMode`] for the
    /// behavior when no record exists.
    async fn update(&self, item: &Item) -> DataResult<()>;

    /// Remove an item by name and return what was stored
    async fn delete(&self, name: &str) -> DataResult<Item>;
}

/// Repository handle shared by request handlers
pub type SharedItemRepository = Arc<dyn ItemRepository>;
