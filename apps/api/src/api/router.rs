use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::api::handlers::{health, items};
use crate::api::middleware::{require_bearer, BearerAuth};
use crate::domain::repositories::SharedItemRepository;

/// Item routes bound to a repository
pub fn item_routes(repo: SharedItemRepository) -> Router {
    Router::new()
        .route("/v1/items", post(items::create_item).put(items::update_item))
        .route(
            "/v1/items/:name",
            get(items::get_item).delete(items::delete_item),
        )
        .with_state(repo)
}

/// Full application router
///
/// With `auth` set, every item route requires a bearer token; the health
/// check stays open either way.
pub fn app(repo: SharedItemRepository, auth: Option<BearerAuth>) -> Router {
    let mut routes = item_routes(repo);
    if let Some(auth) = auth {
        routes = routes.route_layer(middleware::from_fn_with_state(auth, require_bearer));
    }

    Router::new()
        .route("/health", get(health::health_check))
        .merge(routes)
}
