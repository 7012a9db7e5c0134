//! 内存商品存储

use super::model::Product;
use super::seed::seed_products;

/// 按插入顺序保存商品，id 唯一
#[derive(Debug, Default, Clone)]
pub struct CatalogStore {
    products: Vec<Product>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用启动种子数据初始化
    pub fn with_seed() -> Self {
        Self {
            products: seed_products(),
        }
    }

    pub fn list(&self) -> &[Product] {
        &self.products
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find_by_id(id).is_some()
    }

    /// 追加到末尾；调用方负责 id 唯一
    pub fn insert(&mut self, product: Product) {
        self.products.push(product);
    }

    /// 删除并返回被删商品，不存在时返回 `None`
    pub fn remove(&mut self, id: &str) -> Option<Product> {
        let index = self.products.iter().position(|p| p.id == id)?;
        Some(self.products.remove(index))
    }

    /// 去重后的分类，保持首次出现的顺序
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for product in &self.products {
            if !categories.contains(&product.category) {
                categories.push(product.category.clone());
            }
        }
        categories
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
