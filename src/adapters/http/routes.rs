//! HTTP routes.
//!
//! | Method | Path              | Use case                  | Fields          |
//! |--------|-------------------|---------------------------|-----------------|
//! | GET    | `/products`       | `ListProductsHandler`     | none            |
//! | GET    | `/products?name=` | `GetProductByNameHandler` | query           |
//! | GET    | `/products/:id`   | `GetProductByIdHandler`   | params          |
//! | POST   | `/orders`         | `PlaceOrderHandler`       | body, locals    |
//! | GET    | `/health`         | liveness probe            |                 |

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::{Query, Request};
use axum::http::Uri;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use super::controller::Controller;
use super::extract::RequestField;
use super::middleware::{AssignRequestId, RequireJsonBody};
use crate::application::context::{ContextError, DependencyContext};
use crate::application::handlers::{
    GetProductByIdHandler, GetProductByNameHandler, ListProductsHandler, PlaceOrderHandler,
};

/// Builds the application router, resolving every use case from `context`.
///
/// # Errors
///
/// - `ContextError::Missing` if a use case or the `Logger` cannot be resolved
pub fn build_router(context: &DependencyContext) -> Result<Router, ContextError> {
    let list = Controller::<ListProductsHandler>::build(context, &[], vec![])?;
    let by_name =
        Controller::<GetProductByNameHandler>::build(context, &[RequestField::Query], vec![])?;
    let by_id = Controller::<GetProductByIdHandler>::build(context, &[RequestField::Params], vec![])?;
    let place_order = Controller::<PlaceOrderHandler>::build(
        context,
        &[RequestField::Body, RequestField::Locals],
        vec![Arc::new(AssignRequestId), Arc::new(RequireJsonBody)],
    )?;

    let products = move |request: Request| {
        let list = list.clone();
        let by_name = by_name.clone();
        async move {
            if has_name_query(request.uri()) {
                by_name.serve(request).await
            } else {
                list.serve(request).await
            }
        }
    };

    Ok(Router::new()
        .route("/health", get(health))
        .route("/products", get(products))
        .route("/products/:id", get(by_id.into_handler()))
        .route("/orders", post(place_order.into_handler()))
        .layer(TraceLayer::new_for_http()))
}

fn has_name_query(uri: &Uri) -> bool {
    Query::<BTreeMap<String, String>>::try_from_uri(uri)
        .map(|Query(query)| query.contains_key("name"))
        .unwrap_or(false)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
