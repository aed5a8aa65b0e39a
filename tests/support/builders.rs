// tests/support/builders.rs
use showcase_admin::{
    application::commands::{CoverFile, careers::CareerFields, products::ProductFields},
    domain::{
        career::{Career, CareerId, CareerTitle},
        category::CategoryId,
        product::{Price, Product, ProductAbout, ProductId, ProductName},
        shared::{CoverUrl, LongText, Slug},
        user::UserId,
    },
};
use std::path::PathBuf;

pub const SEEDED_COVER: &str = "https://res.cloudinary.com/demo/image/upload/v1/seeded.jpg";

pub struct CareerBuilder {
    id: i64,
    title: String,
    cover: String,
    creator_id: i64,
}

impl CareerBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            title: "Backend Engineer".into(),
            cover: SEEDED_COVER.into(),
            creator_id: 1,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn creator(mut self, creator_id: i64) -> Self {
        self.creator_id = creator_id;
        self
    }

    pub fn build(self) -> Career {
        let now = super::fixed_now();
        Career {
            id: CareerId::new(self.id).unwrap(),
            slug: Slug::new(slug::slugify(&self.title)).unwrap(),
            title: CareerTitle::new(self.title).unwrap(),
            cover: CoverUrl::new(self.cover).unwrap(),
            description: LongText::new("Build services").unwrap(),
            requirements: LongText::new("Three years of Rust").unwrap(),
            benefits: LongText::new("Remote friendly").unwrap(),
            how_to_apply: LongText::new("Send a CV").unwrap(),
            creator_id: UserId::new(self.creator_id).unwrap(),
            created_at: now,
            updated_at: now,
        }
    }
}

pub struct ProductBuilder {
    id: i64,
    name: String,
    about: String,
    category_id: i64,
    price: i64,
    creator_id: i64,
}

impl ProductBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            name: "Mechanical Keyboard".into(),
            about: "Tactile switches".into(),
            category_id: 1,
            price: 120_000,
            creator_id: 1,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn about(mut self, about: impl Into<String>) -> Self {
        self.about = about.into();
        self
    }

    pub fn category(mut self, category_id: i64) -> Self {
        self.category_id = category_id;
        self
    }

    pub fn creator(mut self, creator_id: i64) -> Self {
        self.creator_id = creator_id;
        self
    }

    pub fn build(self) -> Product {
        let now = super::fixed_now();
        Product {
            id: ProductId::new(self.id).unwrap(),
            slug: Slug::new(slug::slugify(&self.name)).unwrap(),
            name: ProductName::new(self.name).unwrap(),
            cover: CoverUrl::new(SEEDED_COVER).unwrap(),
            about: ProductAbout::new(self.about).unwrap(),
            category_id: CategoryId::new(self.category_id).unwrap(),
            price: Price::new(self.price).unwrap(),
            creator_id: UserId::new(self.creator_id).unwrap(),
            created_at: now,
            updated_at: now,
        }
    }
}

pub fn career_fields(title: &str) -> CareerFields {
    CareerFields {
        title: title.into(),
        description: "Own the admin backend".into(),
        requirements: "Rust, PostgreSQL".into(),
        benefits: "Learning budget".into(),
        how_to_apply: "Email careers@example.com".into(),
    }
}

pub fn product_fields(name: &str, price: i64, category_id: i64) -> ProductFields {
    ProductFields {
        name: name.into(),
        about: "Ergonomic and quiet".into(),
        category_id,
        price,
        ..Default::default()
    }
}

/// Cover metadata as the HTTP layer would produce it. The scripted uploader never needs the file.
pub fn jpeg_cover(size: u64) -> CoverFile {
    CoverFile {
        path: PathBuf::from("/tmp/upload-test-cover"),
        file_name: Some("cover.jpg".into()),
        content_type: Some("image/jpeg".into()),
        size,
    }
}
