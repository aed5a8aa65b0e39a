use crate::domain::product::Product;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub cover: String,
    pub about: String,
    pub category_id: i64,
    pub price: i64,
    pub creator_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.into(),
            name: product.name.into_inner(),
            slug: product.slug.into_inner(),
            cover: product.cover.into_inner(),
            about: product.about.into_inner(),
            category_id: product.category_id.into(),
            price: product.price.into(),
            creator_id: product.creator_id.into(),
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}
