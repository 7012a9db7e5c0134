//! 商品目录业务服务

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use rand::Rng;
use serde_json::{Map, Value};
use tracing::{debug, info};

use super::model::{Product, ProductQuery};
use super::store::CatalogStore;
use super::validation::{validate_product, Mode};
use crate::core::error::CoreError;

pub const PRODUCT_NOT_FOUND: &str = "Product not found";
pub const NOTHING_TO_UPDATE: &str = "Nothing to update";

const ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";
const ID_LENGTH: usize = 8;

/// 目录服务，可在请求间共享；写操作经由写锁串行执行
#[derive(Clone, Default)]
pub struct CatalogService {
    store: Arc<RwLock<CatalogStore>>,
}

impl CatalogService {
    pub fn new(store: CatalogStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    pub fn with_seed() -> Self {
        Self::new(CatalogStore::with_seed())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, CatalogStore>, CoreError> {
        self.store
            .read()
            .map_err(|_| CoreError::InternalServerError("catalog store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, CatalogStore>, CoreError> {
        self.store
            .write()
            .map_err(|_| CoreError::InternalServerError("catalog store lock poisoned".to_string()))
    }

    pub fn list_products(&self, query: &ProductQuery) -> Result<Vec<Product>, CoreError> {
        let store = self.read()?;
        Ok(store
            .list()
            .iter()
            .filter(|p| query.matches(p))
            .cloned()
            .collect())
    }

    pub fn categories(&self) -> Result<Vec<String>, CoreError> {
        Ok(self.read()?.categories())
    }

    pub fn count(&self) -> Result<usize, CoreError> {
        Ok(self.read()?.len())
    }

    pub fn get_product(&self, id: &str) -> Result<Product, CoreError> {
        self.read()?
            .find_by_id(id)
            .cloned()
            .ok_or_else(|| CoreError::NotFound(PRODUCT_NOT_FOUND.to_string()))
    }

    pub fn create_product(&self, body: &Map<String, Value>) -> Result<Product, CoreError> {
        let fields = validate_product(body, Mode::Create).map_err(|errors| {
            debug!(?errors, "创建商品校验失败");
            CoreError::Validation(errors)
        })?;

        let mut store = self.write()?;
        let product = Product::from_fields(generate_id(&store), fields);
        store.insert(product.clone());

        info!(id = %product.id, title = %product.title, "商品已创建");
        Ok(product)
    }

    /// 空请求体优先于 id 查找报错
    pub fn update_product(
        &self,
        id: &str,
        body: &Map<String, Value>,
    ) -> Result<Product, CoreError> {
        if body.is_empty() {
            return Err(CoreError::BadRequest(NOTHING_TO_UPDATE.to_string()));
        }

        let mut store = self.write()?;
        let product = store
            .find_by_id_mut(id)
            .ok_or_else(|| CoreError::NotFound(PRODUCT_NOT_FOUND.to_string()))?;

        let fields = validate_product(body, Mode::Patch).map_err(|errors| {
            debug!(%id, ?errors, "更新商品校验失败");
            CoreError::Validation(errors)
        })?;

        product.apply(fields);
        info!(%id, "商品已更新");
        Ok(product.clone())
    }

    pub fn delete_product(&self, id: &str) -> Result<(), CoreError> {
        let mut store = self.write()?;
        store
            .remove(id)
            .ok_or_else(|| CoreError::NotFound(PRODUCT_NOT_FOUND.to_string()))?;

        info!(%id, "商品已删除");
        Ok(())
    }
}

/// 生成不与现有商品重复的 8 位随机 id
fn generate_id(store: &CatalogStore) -> String {
    let mut rng = rand::thread_rng();
    loop {
        let id: String = (0..ID_LENGTH)
            .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
            .collect();
        if !store.contains(&id) {
            return id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;

    fn body(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    fn service() -> CatalogService {
        CatalogService::with_seed()
    }

    #[test]
    fn create_assigns_unique_ids() {
        let service = service();
        let mut seen: HashSet<String> = service
            .list_products(&ProductQuery::default())
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();

        for i in 0..50 {
            let product = service
                .create_product(&body(json!({"title": format!("item {i}"), "price": 1})))
                .unwrap();
            assert_eq!(product.id.len(), ID_LENGTH);
            assert!(product
                .id
                .bytes()
                .all(|b| ID_ALPHABET.contains(&b)));
            assert!(seen.insert(product.id), "id reused");
        }
    }

    #[test]
    fn create_applies_defaults() {
        let product = service()
            .create_product(&body(json!({"title": "Tea", "category": "Drinks", "price": 50})))
            .unwrap();

        assert_eq!(product.stock, 0);
        assert_eq!(product.rating, 0.0);
        assert_eq!(product.image_url, "");
        assert_eq!(product.description, "");
    }

    #[test]
    fn created_product_is_appended_and_retrievable() {
        let service = service();
        let created = service
            .create_product(&body(json!({"title": " Tea ", "price": "12.5", "stock": 2})))
            .unwrap();

        let all = service.list_products(&ProductQuery::default()).unwrap();
        assert_eq!(all.last(), Some(&created));
        assert_eq!(service.get_product(&created.id).unwrap(), created);
        assert_eq!(created.title, "Tea");
        assert_eq!(created.category, "Uncategorized");
    }

    #[test]
    fn empty_patch_is_rejected_before_lookup() {
        let service = service();
        for id in ["p1", "missing"] {
            let err = service.update_product(id, &Map::new()).unwrap_err();
            assert_eq!(err, CoreError::BadRequest(NOTHING_TO_UPDATE.to_string()));
        }
    }

    #[test]
    fn patch_unknown_id_is_not_found() {
        let err = service()
            .update_product("missing", &body(json!({"price": 1})))
            .unwrap_err();
        assert_eq!(err, CoreError::NotFound(PRODUCT_NOT_FOUND.to_string()));
    }

    #[test]
    fn failed_patch_leaves_product_untouched() {
        let service = service();
        let before = service.get_product("p1").unwrap();
        let err = service
            .update_product("p1", &body(json!({"title": "New", "price": -5})))
            .unwrap_err();

        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(service.get_product("p1").unwrap(), before);
    }

    #[test]
    fn patch_is_idempotent() {
        let service = service();
        let patch = body(json!({"price": 10, "rating": "3.5"}));
        let first = service.update_product("p2", &patch).unwrap();
        let second = service.update_product("p2", &patch).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.price, 10.0);
        assert_eq!(first.rating, 3.5);
        assert_eq!(first.id, "p2");
    }

    #[test]
    fn delete_is_not_idempotent() {
        let service = service();
        service.delete_product("p3").unwrap();
        assert_eq!(
            service.delete_product("p3").unwrap_err(),
            CoreError::NotFound(PRODUCT_NOT_FOUND.to_string())
        );
        assert_eq!(service.count().unwrap(), 9);
    }

    #[test]
    fn clones_share_the_same_store() {
        let service = service();
        let clone = service.clone();
        clone.delete_product("p1").unwrap();
        assert!(service.get_product("p1").is_err());
    }
}
