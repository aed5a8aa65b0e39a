pub mod careers;
pub mod categories;
pub mod products;

pub(crate) mod listing;
