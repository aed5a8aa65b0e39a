// src/application/commands/products/form.rs
use crate::{
    application::{
        commands::workflow::{CreateStamp, Submission, UpdateStamp},
        error::ValidationErrors,
    },
    domain::{
        category::CategoryId,
        product::{NewProduct, Price, Product, ProductAbout, ProductName, ProductUpdate},
    },
};

/// Product form input after the transport layer parsed integers.
#[derive(Debug, Clone, Default)]
pub struct ProductFields {
    pub name: String,
    pub about: String,
    pub category_id: i64,
    pub price: i64,
    /// Messages for integers that could not be parsed; their values above are placeholders.
    pub unparsed: ValidationErrors,
}

#[derive(Debug, Clone)]
pub struct ValidProduct {
    pub name: ProductName,
    pub about: ProductAbout,
    pub category_id: CategoryId,
    pub price: Price,
}

impl ProductFields {
    pub fn validate(self) -> Result<ValidProduct, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let name = errors.check("name", ProductName::new(self.name));
        let about = errors.check("about", ProductAbout::new(self.about));
        let category_id = if self.unparsed.contains("category_id") {
            None
        } else {
            errors.check("category_id", CategoryId::new(self.category_id))
        };
        let price = if self.unparsed.contains("price") {
            None
        } else {
            errors.check("price", Price::new(self.price))
        };
        errors.merge(self.unparsed);

        match (name, about, category_id, price) {
            (Some(name), Some(about), Some(category_id), Some(price)) => Ok(ValidProduct {
                name,
                about,
                category_id,
                price,
            }),
            _ => Err(errors),
        }
    }
}

impl Submission for ValidProduct {
    type Target = Product;

    fn slug_source(&self) -> &str {
        self.name.as_str()
    }

    fn into_draft(self, stamp: CreateStamp) -> NewProduct {
        NewProduct {
            name: self.name,
            slug: stamp.slug,
            cover: stamp.cover,
            about: self.about,
            category_id: self.category_id,
            price: self.price,
            creator_id: stamp.creator_id,
            created_at: stamp.now,
            updated_at: stamp.now,
        }
    }

    fn into_changes(self, stamp: UpdateStamp) -> ProductUpdate {
        ProductUpdate {
            name: self.name,
            slug: stamp.slug,
            cover: stamp.cover,
            about: self.about,
            category_id: self.category_id,
            price: self.price,
            creator_id: stamp.creator_id,
            updated_at: stamp.now,
        }
    }
}
