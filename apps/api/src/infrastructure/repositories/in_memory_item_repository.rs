use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::errors::{DataError, DataResult};
use crate::domain::item::{validate_name, Item};
use crate::domain::repositories::{ItemRepository, UpdateMode};

/// In-memory implementation of ItemRepository
///
/// Follows the DynamoDB adapter's semantics call for call, including the
/// upsert on update, so handler tests run deterministically without a
/// store.
#[derive(Debug, Default)]
pub struct InMemoryItemRepository {
    items: RwLock<HashMap<String, Item>>,
    update_mode: UpdateMode,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_update_mode(mut self, update_mode: UpdateMode) -> Self {
        self.update_mode = update_mode;
        self
    }

    /// Number of stored items
    pub fn len(&self) -> DataResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> DataResult<bool> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> DataResult<RwLockReadGuard<'_, HashMap<String, Item>>> {
        self.items
            .read()
            .map_err(|_| DataError::TransientStore("item map lock poisoned".to_string()))
    }

    fn write(&self) -> DataResult<RwLockWriteGuard<'_, HashMap<String, Item>>> {
        self.items
            .write()
            .map_err(|_| DataError::TransientStore("item map lock poisoned".to_string()))
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn create(&self, item: Item) -> DataResult<Item> {
        item.validate_for_write()?;
        self.write()?.insert(item.name.clone(), item.clone());
        Ok(item)
    }

    async fn get(&self, name: &str) -> DataResult<Item> {
        validate_name(name)?;
        self.read()?
            .get(name)
            .cloned()
            .ok_or_else(|| DataError::not_found(name))
    }

    async fn update(&self, item: &Item) -> DataResult<()> {
        item.validate_for_write()?;
        let mut items = self.write()?;

        match items.get_mut(&item.name) {
            Some(stored) => stored.description = item.description.clone(),
            None if self.update_mode == UpdateMode::Strict => {
                return Err(DataError::not_found(&item.name));
            }
            None => {
                items.insert(
                    item.name.clone(),
                    Item::new(item.name.clone(), item.description.clone()),
                );
            }
        }

        Ok(())
    }

    async fn delete(&self, name: &str) -> DataResult<Item> {
        validate_name(name)?;
        self.write()?
            .remove(name)
            .ok_or_else(|| DataError::not_found(name))
    }
}
