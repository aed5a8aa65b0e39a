// src/presentation/http/controllers/mod.rs
pub mod careers;
pub mod categories;
pub mod products;

use serde::Deserialize;

/// `?search=&page=` on the admin list screens.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub page: Option<u32>,
}

impl ListParams {
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1)
    }
}
