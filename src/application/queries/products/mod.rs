mod get;
mod list;
mod service;

pub use get::GetProductQuery;
pub use list::ListProductsQuery;
pub use service::ProductQueryService;
