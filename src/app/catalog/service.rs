//! 商品目录业务服务

use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info};

use super::model::Product;
use crate::common::error::CoreError;
use crate::infrastructure::store::ProductStore;

#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn ProductStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    /// 列出指定商户的全部商品，顺序不固定。空商户 ID 只匹配商户字段为空的商品
    pub fn list_by_merchant(&self, merchant_id: &str) -> Vec<Product> {
        let mut products = Vec::new();
        self.store.for_each(&mut |product| {
            if product.merchant_id == merchant_id {
                products.push(product.clone());
            }
        });
        debug!("商户 {:?} 共有 {} 个商品", merchant_id, products.len());
        products
    }

    /// 创建商品；同 ID 已存在时直接覆盖
    pub fn create(&self, mut product: Product) -> Product {
        product.date_added = Utc::now();
        self.store.put(product.id.clone(), product.clone());
        info!("商品已创建: {}", product.id);
        product
    }

    /// 整体替换已有商品，请求中未给出的字段重置为零值
    pub fn edit(&self, mut product: Product) -> Result<Product, CoreError> {
        if self.store.get(&product.id).is_none() {
            return Err(CoreError::product_not_found());
        }

        product.date_added = Utc::now();
        self.store.put(product.id.clone(), product.clone());
        info!("商品已更新: {}", product.id);
        Ok(product)
    }

    /// 删除商品
    ///
    /// 存在性检查与删除是两次独立的存储操作，并发删除同一 ID 时两个调用方都可能返回成功。
    pub fn delete(&self, id: &str) -> Result<(), CoreError> {
        if self.store.get(id).is_none() {
            return Err(CoreError::product_not_found());
        }

        self.store.delete(id);
        info!("商品已删除: {}", id);
        Ok(())
    }
}
