pub mod auth;
pub mod careers;
pub mod categories;
pub mod pagination;
pub mod products;

pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use careers::CareerDto;
pub use categories::CategoryDto;
pub use pagination::PageDto;
pub use products::ProductDto;
