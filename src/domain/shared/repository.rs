// src/domain/shared/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::shared::pagination::{Page, PageRequest};
use crate::domain::shared::value_objects::CoverUrl;
use crate::domain::user::UserId;
use async_trait::async_trait;
use std::fmt;

/// An owner-scoped admin record carrying a hosted cover image.
pub trait Record: Clone + Send + Sync + 'static {
    type Id: Copy + Eq + fmt::Display + Send + Sync + 'static;
    /// Fully stamped values for an insert.
    type Draft: Send + 'static;
    /// Fully stamped values for an update; unset optional parts are left untouched.
    type Changes: Send + 'static;

    const KIND: &'static str;

    fn id(&self) -> Self::Id;
    fn creator_id(&self) -> UserId;
    fn cover(&self) -> &CoverUrl;
}

#[async_trait]
pub trait RecordRepository<T: Record>: Send + Sync {
    /// Opens a write transaction. Dropping it without `commit` rolls back.
    async fn begin(&self) -> DomainResult<Box<dyn RecordTransaction<T>>>;
    async fn find_by_id(&self, id: T::Id) -> DomainResult<Option<T>>;
    async fn list_page(
        &self,
        owner: UserId,
        search: Option<&str>,
        page: PageRequest,
    ) -> DomainResult<Page<T>>;
    async fn delete(&self, id: T::Id) -> DomainResult<()>;
}

#[async_trait]
pub trait RecordTransaction<T: Record>: Send {
    async fn insert(&mut self, draft: T::Draft) -> DomainResult<T>;
    async fn update(&mut self, id: T::Id, changes: T::Changes) -> DomainResult<T>;
    async fn commit(self: Box<Self>) -> DomainResult<()>;
}
