//! Integration tests for repository layer
//!
//! The same contract runs against every ItemRepository implementation:
//! the in-memory repository always, DynamoDB when `DYNAMODB_ENDPOINT`
//! points at a DynamoDB Local instance (run with `--ignored`).

use aws_sdk_dynamodb::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_dynamodb::types::{
    AttributeDefinition, BillingMode, KeySchemaElement, KeyType, ScalarAttributeType,
};
use aws_sdk_dynamodb::Client;
use items_api::domain::errors::{DataError, ErrorKind};
use items_api::domain::item::Item;
use items_api::domain::repositories::{ItemRepository, UpdateMode};
use items_api::infrastructure::repositories::{DynamoItemRepository, InMemoryItemRepository};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Unique item name so runs against a shared table do not collide
fn unique_name(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4())
}

async fn assert_rejects_empty_fields(repo: &dyn ItemRepository) {
    for item in [
        Item::new("", "pointy"),
        Item::new("Cactus", ""),
        Item::new("", ""),
    ] {
        let err = repo.create(item.clone()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);

        let err = repo.update(&item).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    assert_eq!(repo.get("").await.unwrap_err().kind(), ErrorKind::Validation);
    assert_eq!(repo.delete("").await.unwrap_err().kind(), ErrorKind::Validation);
}

async fn assert_missing_is_not_found(repo: &dyn ItemRepository) {
    let name = unique_name("fern");

    assert_eq!(
        repo.get(&name).await.unwrap_err(),
        DataError::not_found(&name)
    );
    assert_eq!(
        repo.delete(&name).await.unwrap_err(),
        DataError::not_found(&name)
    );
}

async fn assert_create_get_delete(repo: &dyn ItemRepository) {
    let item = Item::new(unique_name("cactus"), "pointy green thing")
        .with_vendor(Uuid::new_v4())
        .with_price(Decimal::new(1299, 2));

    let created = repo.create(item.clone()).await.unwrap();
    assert_eq!(created, item);

    assert_eq!(repo.get(&item.name).await.unwrap(), item);

    let deleted = repo.delete(&item.name).await.unwrap();
    assert_eq!(deleted, item);

    assert_eq!(
        repo.get(&item.name).await.unwrap_err().kind(),
        ErrorKind::NotFound
    );
}

async fn assert_update_changes_only_description(repo: &dyn ItemRepository) {
    let vendor = Uuid::new_v4();
    let original = Item::new(unique_name("cactus"), "pointy")
        .with_vendor(vendor)
        .with_price(Decimal::new(500, 2));
    repo.create(original.clone()).await.unwrap();

    // Vendor and price in the request are ignored
    let request = Item::new(original.name.clone(), "still pointy")
        .with_vendor(Uuid::new_v4())
        .with_price(Decimal::from(99));
    repo.update(&request).await.unwrap();

    let stored = repo.get(&original.name).await.unwrap();
    assert_eq!(stored.description, "still pointy");
    assert_eq!(stored.vendor, Some(vendor));
    assert_eq!(stored.price, Some(Decimal::new(500, 2)));

    repo.delete(&original.name).await.unwrap();
}

async fn assert_update_upserts_missing(repo: &dyn ItemRepository) {
    let name = unique_name("orchid");

    // Documented behavior: update on a missing name creates the record
    repo.update(&Item::new(name.clone(), "purple").with_price(Decimal::from(3)))
        .await
        .unwrap();

    let stored = repo.get(&name).await.unwrap();
    assert_eq!(stored, Item::new(name.clone(), "purple"));

    repo.delete(&name).await.unwrap();
}

async fn assert_strict_update_rejects_missing(repo: &dyn ItemRepository) {
    let name = unique_name("orchid");

    let err = repo.update(&Item::new(name.clone(), "purple")).await.unwrap_err();
    assert_eq!(err, DataError::not_found(&name));
    assert_eq!(repo.get(&name).await.unwrap_err().kind(), ErrorKind::NotFound);

    // Existing records still update
    repo.create(Item::new(name.clone(), "purple")).await.unwrap();
    repo.update(&Item::new(name.clone(), "violet")).await.unwrap();
    assert_eq!(repo.get(&name).await.unwrap().description, "violet");

    repo.delete(&name).await.unwrap();
}

#[tokio::test]
async fn test_in_memory_rejects_empty_fields() {
    assert_rejects_empty_fields(&InMemoryItemRepository::new()).await;
}

#[tokio::test]
async fn test_in_memory_missing_is_not_found() {
    assert_missing_is_not_found(&InMemoryItemRepository::new()).await;
}

#[tokio::test]
async fn test_in_memory_create_get_delete() {
    assert_create_get_delete(&InMemoryItemRepository::new()).await;
}

#[tokio::test]
async fn test_in_memory_update_changes_only_description() {
    assert_update_changes_only_description(&InMemoryItemRepository::new()).await;
}

#[tokio::test]
async fn test_in_memory_update_upserts_missing() {
    assert_update_upserts_missing(&InMemoryItemRepository::new()).await;
}

#[tokio::test]
async fn test_in_memory_strict_update_rejects_missing() {
    let repo = InMemoryItemRepository::new().with_update_mode(UpdateMode::Strict);
    assert_strict_update_rejects_missing(&repo).await;
}

/// Client for DynamoDB Local with static credentials
fn local_client() -> Client {
    let endpoint = std::env::var("DYNAMODB_ENDPOINT")
        .expect("DYNAMODB_ENDPOINT must be set for DynamoDB integration tests");

    let config = aws_sdk_dynamodb::config::Builder::new()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::new("local", "local", None, None, "tests"))
        .endpoint_url(endpoint)
        .build();

    Client::from_conf(config)
}

/// Create a fresh table for one test
async fn setup_table(client: &Client) -> String {
    let table_name = unique_name("items-test");

    client
        .create_table()
        .table_name(&table_name)
        .key_schema(
            KeySchemaElement::builder()
                .attribute_name("name")
                .key_type(KeyType::Hash)
                .build()
                .unwrap(),
        )
        .attribute_definitions(
            AttributeDefinition::builder()
                .attribute_name("name")
                .attribute_type(ScalarAttributeType::S)
                .build()
                .unwrap(),
        )
        .billing_mode(BillingMode::PayPerRequest)
        .send()
        .await
        .expect("Failed to create test table");

    table_name
}

/// Clean up the test table
async fn cleanup_table(client: &Client, table_name: &str) {
    client
        .delete_table()
        .table_name(table_name)
        .send()
        .await
        .expect("Failed to delete test table");
}

#[tokio::test]
#[ignore = "requires DynamoDB Local at DYNAMODB_ENDPOINT"]
async fn test_dynamo_item_contract() {
    let client = local_client();
    let table_name = setup_table(&client).await;
    let repo = DynamoItemRepository::new(client.clone(), table_name.clone());

    assert_rejects_empty_fields(&repo).await;
    assert_missing_is_not_found(&repo).await;
    assert_create_get_delete(&repo).await;
    assert_update_changes_only_description(&repo).await;
    assert_update_upserts_missing(&repo).await;

    cleanup_table(&client, &table_name).await;
}

#[tokio::test]
#[ignore = "requires DynamoDB Local at DYNAMODB_ENDPOINT"]
async fn test_dynamo_strict_update() {
    let client = local_client();
    let table_name = setup_table(&client).await;
    let repo = DynamoItemRepository::new(client.clone(), table_name.clone())
        .with_update_mode(UpdateMode::Strict);

    assert_strict_update_rejects_missing(&repo).await;

    cleanup_table(&client, &table_name).await;
}

#[tokio::test]
#[ignore = "requires DynamoDB Local at DYNAMODB_ENDPOINT"]
async fn test_dynamo_unreachable_table_is_transient() {
    let client = local_client();
    let repo = DynamoItemRepository::new(client, unique_name("missing-table"));

    let err = repo.get("Cactus").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TransientStore);
}
