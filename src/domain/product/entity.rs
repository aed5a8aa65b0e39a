// src/domain/product/entity.rs
use crate::domain::category::CategoryId;
use crate::domain::product::value_objects::{Price, ProductAbout, ProductId, ProductName};
use crate::domain::shared::{CoverUrl, Record, Slug};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    pub slug: Slug,
    pub cover: CoverUrl,
    pub about: ProductAbout,
    pub category_id: CategoryId,
    pub price: Price,
    pub creator_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: ProductName,
    pub slug: Slug,
    pub cover: CoverUrl,
    pub about: ProductAbout,
    pub category_id: CategoryId,
    pub price: Price,
    pub creator_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full rewrite of a product's editable fields. `cover: None` keeps the stored URL.
#[derive(Debug, Clone)]
pub struct ProductUpdate {
    pub name: ProductName,
    pub slug: Slug,
    pub cover: Option<CoverUrl>,
    pub about: ProductAbout,
    pub category_id: CategoryId,
    pub price: Price,
    pub creator_id: UserId,
    pub updated_at: DateTime<Utc>,
}

impl Record for Product {
    type Id = ProductId;
    type Draft = NewProduct;
    type Changes = ProductUpdate;

    const KIND: &'static str = "product";

    fn id(&self) -> ProductId {
        self.id
    }

    fn creator_id(&self) -> UserId {
        self.creator_id
    }

    fn cover(&self) -> &CoverUrl {
        &self.cover
    }
}
