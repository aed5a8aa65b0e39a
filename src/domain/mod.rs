pub mod career;
pub mod category;
pub mod errors;
pub mod product;
pub mod shared;
pub mod user;
