pub mod pagination;
pub mod repository;
pub mod value_objects;

pub use pagination::{Page, PageRequest};
pub use repository::{Record, RecordRepository, RecordTransaction};
pub use value_objects::{CoverUrl, LongText, Slug};
