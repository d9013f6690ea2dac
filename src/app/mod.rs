//! 应用层：路由装配

pub mod catalog;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::common::middleware::request_logging_middleware;
use crate::infrastructure::store::ProductStore;
use catalog::{
    handler::{self, AppState},
    service::CatalogService,
};

/// 使用给定存储构建完整路由
pub fn build_router(store: Arc<dyn ProductStore>) -> Router {
    let state = AppState {
        catalog_service: CatalogService::new(store),
    };

    Router::new()
        .route("/products", get(handler::list_products))
        .route("/product/create", post(handler::create_product))
        .route(
            "/product/edit",
            post(handler::edit_product).put(handler::edit_product),
        )
        .route(
            "/product/delete",
            post(handler::delete_product).delete(handler::delete_product),
        )
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
