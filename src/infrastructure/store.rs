//! 商品存储基础设施
//!
//! 以商品 ID 为键的并发容器。每个操作各自原子，不提供跨键事务。

use parking_lot::RwLock;
use std::collections::HashMap;

use crate::app::catalog::model::Product;

/// 商品存储抽象
pub trait ProductStore: Send + Sync {
    /// 按 ID 读取，返回副本
    fn get(&self, id: &str) -> Option<Product>;

    /// 插入或无条件覆盖
    fn put(&self, id: String, product: Product);

    /// 删除；不存在时为空操作。返回是否实际删除了记录
    fn delete(&self, id: &str) -> bool;

    /// 遍历当前所有记录，顺序不固定
    fn for_each(&self, visitor: &mut dyn FnMut(&Product));

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// 基于读写锁的内存存储
///
/// `for_each` 在读锁下执行，访问者看到的是一致快照；
/// 访问者内部不得对同一存储执行写操作。
#[derive(Default)]
pub struct MemoryStore {
    products: RwLock<HashMap<String, Product>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProductStore for MemoryStore {
    fn get(&self, id: &str) -> Option<Product> {
        self.products.read().get(id).cloned()
    }

    fn put(&self, id: String, product: Product) {
        self.products.write().insert(id, product);
    }

    fn delete(&self, id: &str) -> bool {
        self.products.write().remove(id).is_some()
    }

    fn for_each(&self, visitor: &mut dyn FnMut(&Product)) {
        let products = self.products.read();
        for product in products.values() {
            visitor(product);
        }
    }

    fn len(&self) -> usize {
        self.products.read().len()
    }
}
