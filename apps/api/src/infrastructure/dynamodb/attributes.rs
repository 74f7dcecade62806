//! Item <-> DynamoDB attribute map codec
//!
//! Layout of a stored item:
//!
//! | attribute     | type | present            |
//! |---------------|------|--------------------|
//! | `name`        | S    | always (hash key)  |
//! | `description` | S    | always             |
//! | `vendor`      | S    | when set (UUID)    |
//! | `price`       | N    | when set           |
//!
//! Decoding is lenient about absence (missing strings become empty, missing
//! optionals become `None`, `NULL` counts as missing) and strict about
//! attributes of the wrong shape.

use std::collections::HashMap;
use std::str::FromStr;

use aws_sdk_dynamodb::types::AttributeValue;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::errors::{DataError, DataResult};
use crate::domain::item::Item;

pub type AttributeMap = HashMap<String, AttributeValue>;

pub const NAME: &str = "name";
pub const DESCRIPTION: &str = "description";
pub const VENDOR: &str = "vendor";
pub const PRICE: &str = "price";

/// Primary key of the item called `name`
pub fn key_for(name: &str) -> AttributeMap {
    HashMap::from([(NAME.to_string(), AttributeValue::S(name.to_string()))])
}

/// Encodes every set field of `item`
pub fn to_attribute_map(item: &Item) -> AttributeMap {
    let mut map = key_for(&item.name);
    map.insert(
        DESCRIPTION.to_string(),
        AttributeValue::S(item.description.clone()),
    );
    if let Some(vendor) = item.vendor {
        map.insert(VENDOR.to_string(), AttributeValue::S(vendor.to_string()));
    }
    if let Some(price) = item.price {
        map.insert(PRICE.to_string(), AttributeValue::N(price.to_string()));
    }
    map
}

/// Decodes a stored item
///
/// A map without a `name` decodes to an item with an empty name; callers
/// decide what that means.
pub fn from_attribute_map(map: &AttributeMap) -> DataResult<Item> {
    merge_attribute_map(Item::default(), map)
}

/// Overlays the fields present in `map` onto `item`
pub fn merge_attribute_map(mut item: Item, map: &AttributeMap) -> DataResult<Item> {
    if let Some(value) = map.get(NAME) {
        item.name = string_attribute(NAME, value)?;
    }
    if let Some(value) = map.get(DESCRIPTION) {
        item.description = string_attribute(DESCRIPTION, value)?;
    }
    if let Some(value) = map.get(VENDOR) {
        item.vendor = vendor_attribute(value)?;
    }
    if let Some(value) = map.get(PRICE) {
        item.price = price_attribute(value)?;
    }
    Ok(item)
}

fn string_attribute(attribute: &str, value: &AttributeValue) -> DataResult<String> {
    match value {
        AttributeValue::S(s) => Ok(s.clone()),
        AttributeValue::Null(_) => Ok(String::new()),
        _ => Err(wrong_type(attribute, "S")),
    }
}

fn vendor_attribute(value: &AttributeValue) -> DataResult<Option<Uuid>> {
    match value {
        AttributeValue::Null(_) => Ok(None),
        AttributeValue::S(raw) => Uuid::parse_str(raw).map(Some).map_err(|e| {
            DataError::Serialization(format!("attribute `{VENDOR}` is not a UUID: {e}"))
        }),
        _ => Err(wrong_type(VENDOR, "S")),
    }
}

fn price_attribute(value: &AttributeValue) -> DataResult<Option<Decimal>> {
    match value {
        AttributeValue::Null(_) => Ok(None),
        // DynamoDB may hand numbers back in exponent form
        AttributeValue::N(raw) => Decimal::from_str(raw)
            .or_else(|_| Decimal::from_scientific(raw))
            .map(Some)
            .map_err(|e| {
                DataError::Serialization(format!("attribute `{PRICE}` is not a number: {e}"))
            }),
        _ => Err(wrong_type(PRICE, "N")),
    }
}

fn wrong_type(attribute: &str, expected: &str) -> DataError {
    DataError::Serialization(format!(
        "attribute `{attribute}` has the wrong type, expected {expected}"
    ))
}
