pub mod careers;
pub mod cover;
pub mod products;
pub mod workflow;

pub use cover::{CAREER_COVER, CoverFile, CoverPolicy, PRODUCT_COVER};
pub use workflow::{CreateStamp, EntityWorkflow, Submission, UpdateStamp};
