pub mod entity;
pub mod value_objects;

pub use entity::{NewProduct, Product, ProductUpdate};
pub use value_objects::{Price, ProductAbout, ProductId, ProductName};

use crate::domain::shared::RecordRepository;

pub type ProductRepository = dyn RecordRepository<Product>;
