// src/application/commands/products/mod.rs
mod create;
mod delete;
mod form;
mod service;
mod update;

pub use create::CreateProductCommand;
pub use delete::DeleteProductCommand;
pub use form::{ProductFields, ValidProduct};
pub use service::ProductCommandService;
pub use update::UpdateProductCommand;
