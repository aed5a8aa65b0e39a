use crate::domain::shared::Page;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct PageDto<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
    pub last_page: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl<T> PageDto<T> {
    pub fn from_page<R>(page: Page<R>, search: Option<String>) -> Self
    where
        R: Into<T>,
    {
        let last_page = page.last_page();
        let page = page.map(Into::into);
        Self {
            items: page.items,
            total: page.total,
            page: page.page,
            per_page: page.per_page,
            last_page,
            search,
        }
    }
}
