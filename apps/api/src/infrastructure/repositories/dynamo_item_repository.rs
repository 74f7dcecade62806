use async_trait::async_trait;
use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client;
use tracing::{debug, warn};

use crate::domain::errors::{DataError, DataResult};
use crate::domain::item::{validate_name, Item};
use crate::domain::repositories::{ItemRepository, UpdateMode};
use crate::infrastructure::dynamodb::attributes::{
    from_attribute_map, key_for, merge_attribute_map, to_attribute_map, AttributeMap,
    DESCRIPTION, NAME,
};

/// Default table holding items
pub const DEFAULT_TABLE: &str = "items_v1";

/// DynamoDB implementation of ItemRepository
///
/// Every operation is a single point call keyed by `name`. The client is
/// cheap to clone and safe to share between requests; retries and
/// throttling backoff are left to the SDK.
pub struct DynamoItemRepository {
    client: Client,
    table_name: String,
    update_mode: UpdateMode,
}

impl DynamoItemRepository {
    /// Creates a repository over `table_name` that upserts on update
    ///
    /// # Arguments
    /// * `client` - DynamoDB client, constructed by the caller
    /// * `table_name` - Table whose hash key is the string attribute `name`
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            update_mode: UpdateMode::default(),
        }
    }

    pub fn with_update_mode(mut self, update_mode: UpdateMode) -> Self {
        self.update_mode = update_mode;
        self
    }
}

/// Maps an SDK failure that has no more specific meaning
fn store_error(operation: &str, err: impl std::error::Error) -> DataError {
    let err = DataError::TransientStore(format!("{operation}: {}", DisplayErrorContext(&err)));
    warn!(error = %err, "DynamoDB request failed");
    err
}

/// Maps a failed UpdateItem; a failed existence condition means no record
fn update_error<R>(name: &str, err: SdkError<UpdateItemError, R>) -> DataError
where
    R: std::fmt::Debug + Send + Sync + 'static,
{
    if err
        .as_service_error()
        .is_some_and(|e| e.is_conditional_check_failed_exception())
    {
        return DataError::not_found(name);
    }
    store_error("UpdateItem", err)
}

/// Picks out a non-empty attribute map, if the store returned one
fn non_empty(map: Option<&AttributeMap>) -> Option<&AttributeMap> {
    map.filter(|attributes| !attributes.is_empty())
}

/// Interprets the attributes read back for `name` by GetItem or DeleteItem
///
/// A missing key comes back as an empty result, not an error, so no
/// attributes and a decoded empty name both mean the item is not there.
fn found_item(name: &str, attributes: Option<&AttributeMap>) -> DataResult<Item> {
    let attributes = non_empty(attributes).ok_or_else(|| DataError::not_found(name))?;
    let item = from_attribute_map(attributes)?;
    if item.name.is_empty() {
        return Err(DataError::not_found(name));
    }
    Ok(item)
}

/// Applies whatever PutItem echoed back onto the written item
fn echoed_item(item: Item, echoed: Option<&AttributeMap>) -> DataResult<Item> {
    // Attributes are only echoed when the request asks for them
    let item = match non_empty(echoed) {
        Some(echoed) => merge_attribute_map(item, echoed)?,
        None => item,
    };
    if item.name.is_empty() {
        return Err(DataError::Serialization(
            "store echoed an item without a name".to_string(),
        ));
    }
    Ok(item)
}

#[async_trait]
impl ItemRepository for DynamoItemRepository {
    async fn create(&self, item: Item) -> DataResult<Item> {
        item.validate_for_write()?;
        debug!(table = %self.table_name, name = %item.name, "PutItem");

        let output = self
            .client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(to_attribute_map(&item)))
            .send()
            .await
            .map_err(|e| store_error("PutItem", e))?;

        echoed_item(item, output.attributes())
    }

    async fn get(&self, name: &str) -> DataResult<Item> {
        validate_name(name)?;
        debug!(table = %self.table_name, name, "GetItem");

        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(key_for(name)))
            .send()
            .await
            .map_err(|e| store_error("GetItem", e))?;

        found_item(name, output.item())
    }

    async fn update(&self, item: &Item) -> DataResult<()> {
        item.validate_for_write()?;
        debug!(
            table = %self.table_name,
            name = %item.name,
            mode = ?self.update_mode,
            "UpdateItem"
        );

        let mut request = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .set_key(Some(key_for(&item.name)))
            .update_expression("SET #description = :description")
            .expression_attribute_names("#description", DESCRIPTION)
            .expression_attribute_values(
                ":description",
                AttributeValue::S(item.description.clone()),
            );

        if self.update_mode == UpdateMode::Strict {
            request = request
                .condition_expression("attribute_exists(#name)")
                .expression_attribute_names("#name", NAME);
        }

        request
            .send()
            .await
            .map_err(|e| update_error(&item.name, e))?;

        Ok(())
    }

    async fn delete(&self, name: &str) -> DataResult<Item> {
        validate_name(name)?;
        debug!(table = %self.table_name, name, "DeleteItem");

        let output = self
            .client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(key_for(name)))
            .return_values(ReturnValue::AllOld)
            .send()
            .await
            .map_err(|e| store_error("DeleteItem", e))?;

        found_item(name, output.attributes())
    }
}
