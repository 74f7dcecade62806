use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::ItemField;
use crate::domain::errors::{DataError, DataResult};

/// A named record managed by the service
///
/// `name` is the primary key in the store. Vendor and price are optional
/// and omitted from JSON when absent.
///
/// # Invariants
/// - Name cannot be empty for any store operation
/// - Description cannot be empty for any write
///
/// Missing `name` or `description` in a request body decode to empty
/// strings, so the data-access layer (not the JSON decoder) is what
/// rejects them.
///
/// # Example
/// ```
/// use items_api::domain::item::Item;
///
/// let item = Item::new("Cactus", "pointy green thing");
/// assert!(item.validate_for_write().is_ok());
/// assert!(Item::new("", "no name").validate_for_write().is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
}

impl Item {
    /// Creates an item with no vendor or price
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            vendor: None,
            price: None,
        }
    }

    /// Sets the vendor
    pub fn with_vendor(mut self, vendor: Uuid) -> Self {
        self.vendor = Some(vendor);
        self
    }

    /// Sets the price
    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    /// Checks the invariants required before the item is written
    ///
    /// Name is checked before description, so an item with both fields
    /// empty reports [`ItemField::Name`].
    pub fn validate_for_write(&self) -> DataResult<()> {
        validate_name(&self.name)?;
        if self.description.is_empty() {
            return Err(DataError::validation(ItemField::Description));
        }
        Ok(())
    }
}

/// Checks that a lookup key is usable
pub fn validate_name(name: &str) -> DataResult<()> {
    if name.is_empty() {
        return Err(DataError::validation(ItemField::Name));
    }
    Ok(())
}
