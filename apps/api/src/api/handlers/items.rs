use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Extension, Json,
};

use crate::api::errors::ApiError;
use crate::api::middleware::AuthenticatedSubject;
use crate::domain::item::Item;
use crate::domain::repositories::SharedItemRepository;

/// Caller identity for log events; routes without auth are anonymous
type Subject = Option<Extension<AuthenticatedSubject>>;

fn subject_name(subject: &Subject) -> &str {
    subject
        .as_ref()
        .map(|Extension(AuthenticatedSubject(sub))| sub.as_str())
        .unwrap_or("anonymous")
}

/// Create an item
///
/// POST /v1/items
pub async fn create_item(
    State(repo): State<SharedItemRepository>,
    subject: Subject,
    payload: Result<Json<Item>, JsonRejection>,
) -> Result<Json<Item>, ApiError> {
    let Json(item) = payload?;
    let created = repo.create(item).await?;

    tracing::info!(name = %created.name, subject = subject_name(&subject), "Item created");
    Ok(Json(created))
}

/// Get an item by name
///
/// GET /v1/items/:name
pub async fn get_item(
    State(repo): State<SharedItemRepository>,
    Path(name): Path<String>,
) -> Result<Json<Item>, ApiError> {
    let item = repo.get(&name).await?;

    Ok(Json(item))
}

/// Replace an item's description
///
/// PUT /v1/items
///
/// Only name and description are written, so only they are echoed back;
/// vendor and price in the request body are dropped from the response.
/// A name with no stored record is created unless the repository runs in
/// strict mode.
pub async fn update_item(
    State(repo): State<SharedItemRepository>,
    subject: Subject,
    payload: Result<Json<Item>, JsonRejection>,
) -> Result<Json<Item>, ApiError> {
    let Json(item) = payload?;
    repo.update(&item).await?;

    tracing::info!(name = %item.name, subject = subject_name(&subject), "Item updated");
    Ok(Json(Item::new(item.name, item.description)))
}

/// Delete an item and return what was stored
///
/// DELETE /v1/items/:name
pub async fn delete_item(
    State(repo): State<SharedItemRepository>,
    subject: Subject,
    Path(name): Path<String>,
) -> Result<Json<Item>, ApiError> {
    let deleted = repo.delete(&name).await?;

    tracing::info!(name = %deleted.name, subject = subject_name(&subject), "Item deleted");
    Ok(Json(deleted))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_name_reads_authenticated_subject() {
        let subject: Subject = Some(Extension(AuthenticatedSubject("gardener".to_string())));
        assert_eq!(subject_name(&subject), "gardener");
    }

    #[test]
    fn subject_name_defaults_to_anonymous() {
        assert_eq!(subject_name(&None), "anonymous");
    }
}
