//! 商品目录处理器

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use tracing::warn;

use super::{
    model::{first_query_value, Product},
    service::CatalogService,
};
use crate::common::error::CoreError;

#[derive(Clone)]
pub struct AppState {
    pub catalog_service: CatalogService,
}

/// 查询串原始键值对；重复的键保留，按出现顺序排列
type QueryPairs = Query<Vec<(String, String)>>;

/// 解码请求体；任何解码失败都返回 400 与解码器原始错误信息
fn decode_product(body: &Bytes) -> Result<Product, CoreError> {
    Product::decode(body).map_err(|e| {
        warn!("请求体解码失败: {}", e);
        CoreError::from(e)
    })
}

pub async fn list_products(
    State(state): State<AppState>,
    Query(params): QueryPairs,
) -> Json<Vec<Product>> {
    let merchant_id = first_query_value(&params, "merchantId");
    Json(state.catalog_service.list_by_merchant(&merchant_id))
}

pub async fn create_product(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Product>), CoreError> {
    let product = decode_product(&body)?;
    let product = state.catalog_service.create(product);
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn edit_product(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Product>, CoreError> {
    let product = decode_product(&body)?;
    let id = product.id.clone();
    let product = state.catalog_service.edit(product).inspect_err(|_| {
        warn!("编辑失败，商品不存在: {}", id);
    })?;
    Ok(Json(product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Query(params): QueryPairs,
) -> Result<String, CoreError> {
    let id = first_query_value(&params, "id");
    state.catalog_service.delete(&id).inspect_err(|_| {
        warn!("删除失败，商品不存在: {}", id);
    })?;
    Ok(format!("Deleted product with ID {}", id))
}
