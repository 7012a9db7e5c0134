//! 商品数据模型

use serde::{Deserialize, Serialize};

/// 创建时未提供分类的默认值
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub price: f64,
    pub stock: u64,
    pub rating: f64,
    pub image_url: String,
}

/// 经过校验和类型转换的字段集合，未提供的字段为 `None`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFields {
    pub title: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<u64>,
    pub rating: Option<f64>,
    pub image_url: Option<String>,
}

impl Product {
    /// 用新 id 和已校验字段构建商品，缺省字段取默认值
    pub fn from_fields(id: String, fields: ProductFields) -> Self {
        Self {
            id,
            title: fields.title.unwrap_or_default(),
            category: fields
                .category
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            description: fields.description.unwrap_or_default(),
            price: fields.price.unwrap_or_default(),
            stock: fields.stock.unwrap_or_default(),
            rating: fields.rating.unwrap_or_default(),
            image_url: fields.image_url.unwrap_or_default(),
        }
    }

    /// 只覆盖提供了的字段，id 不变
    pub fn apply(&mut self, fields: ProductFields) {
        if let Some(title) = fields.title {
            self.title = title;
        }
        if let Some(category) = fields.category {
            self.category = category;
        }
        if let Some(description) = fields.description {
            self.description = description;
        }
        if let Some(price) = fields.price {
            self.price = price;
        }
        if let Some(stock) = fields.stock {
            self.stock = stock;
        }
        if let Some(rating) = fields.rating {
            self.rating = rating;
        }
        if let Some(image_url) = fields.image_url {
            self.image_url = image_url;
        }
    }
}

/// 列表查询参数
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductQuery {
    /// 精确匹配分类
    #[serde(default)]
    pub category: Option<String>,
    /// 标题包含（不区分大小写）
    #[serde(default)]
    pub q: Option<String>,
}

impl ProductQuery {
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
            if product.category != category {
                return false;
            }
        }
        if let Some(needle) = self.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            if !product
                .title
                .to_lowercase()
                .contains(&needle.to_lowercase())
            {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tea() -> Product {
        Product::from_fields(
            "abc12345".to_string(),
            ProductFields {
                title: Some("Green Tea".to_string()),
                category: Some("Drinks".to_string()),
                price: Some(50.0),
                ..Default::default()
            },
        )
    }

    #[test]
    fn from_fields_applies_defaults() {
        let product = Product::from_fields("x".to_string(), ProductFields::default());
        assert_eq!(product.category, DEFAULT_CATEGORY);
        assert_eq!(product.description, "");
        assert_eq!(product.stock, 0);
        assert_eq!(product.rating, 0.0);
        assert_eq!(product.image_url, "");
    }

    #[test]
    fn apply_only_touches_supplied_fields() {
        let mut product = tea();
        let before = product.clone();
        product.apply(ProductFields {
            stock: Some(7),
            ..Default::default()
        });

        assert_eq!(product.stock, 7);
        assert_eq!(product.title, before.title);
        assert_eq!(product.price, before.price);
        assert_eq!(product.id, before.id);
    }

    #[test]
    fn serializes_image_url_in_camel_case() {
        let json = serde_json::to_value(tea()).unwrap();
        assert!(json.get("imageUrl").is_some());
        assert!(json.get("image_url").is_none());
    }

    #[test]
    fn query_filters_by_category_and_title() {
        let product = tea();
        let by_category = ProductQuery {
            category: Some("Drinks".to_string()),
            q: None,
        };
        let by_title = ProductQuery {
            category: None,
            q: Some("  tea ".to_string()),
        };
        let miss = ProductQuery {
            category: Some("drinks".to_string()),
            q: None,
        };

        assert!(by_category.matches(&product));
        assert!(by_title.matches(&product));
        assert!(!miss.matches(&product));
        assert!(ProductQuery::default().matches(&product));
    }
}
