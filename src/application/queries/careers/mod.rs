mod get;
mod list;
mod service;

pub use get::GetCareerQuery;
pub use list::ListCareersQuery;
pub use service::CareerQueryService;
