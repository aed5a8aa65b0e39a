// src/application/commands/workflow.rs
//! Create-or-update with cover upload, shared by every record kind.
//!
//! The sequence is: validated input in, transaction opened, cover uploaded
//! (if present), slug derived, creator stamped, row written, commit. Any
//! failure after `begin` drops the transaction, which rolls it back, and is
//! reported as a system error carrying the cause.
//!
//! An uploaded cover is not deleted when the write that follows it fails, and
//! deleting a record keeps its remote image. Both cases are logged at warn
//! with the asset URL.
use std::{sync::Arc, time::Duration};

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use super::cover::CoverFile;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
        ports::{storage::AssetUploader, time::Clock, util::SlugGenerator},
    },
    domain::{
        errors::DomainError,
        shared::{CoverUrl, Record, RecordRepository, RecordTransaction, Slug},
        user::UserId,
    },
};

/// Values stamped onto a new record by the workflow.
#[derive(Debug, Clone)]
pub struct CreateStamp {
    pub slug: Slug,
    pub cover: CoverUrl,
    pub creator_id: UserId,
    pub now: DateTime<Utc>,
}

/// Values stamped onto an updated record. `cover` is set only when a new file was uploaded.
#[derive(Debug, Clone)]
pub struct UpdateStamp {
    pub slug: Slug,
    pub cover: Option<CoverUrl>,
    pub creator_id: UserId,
    pub now: DateTime<Utc>,
}

/// Validated field values for one record kind.
pub trait Submission: Send + 'static {
    type Target: Record;

    /// Display text the slug is derived from.
    fn slug_source(&self) -> &str;
    fn into_draft(self, stamp: CreateStamp) -> <Self::Target as Record>::Draft;
    fn into_changes(self, stamp: UpdateStamp) -> <Self::Target as Record>::Changes;
}

pub struct EntityWorkflow {
    uploader: Arc<dyn AssetUploader>,
    slugger: Arc<dyn SlugGenerator>,
    clock: Arc<dyn Clock>,
    upload_timeout: Duration,
}

impl EntityWorkflow {
    pub fn new(
        uploader: Arc<dyn AssetUploader>,
        slugger: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
        upload_timeout: Duration,
    ) -> Self {
        Self {
            uploader,
            slugger,
            clock,
            upload_timeout,
        }
    }

    pub async fn create<S: Submission>(
        &self,
        repo: &dyn RecordRepository<S::Target>,
        actor: &AuthenticatedUser,
        submission: S,
        cover: &CoverFile,
    ) -> ApplicationResult<S::Target> {
        let kind = <S::Target as Record>::KIND;
        let tx = repo.begin().await.map_err(persistence_failure)?;

        let cover_url = self.upload_cover(kind, cover).await?;
        let result = self
            .insert_stamped(tx, actor, submission, cover_url.clone())
            .await;

        match &result {
            Ok(created) => info!(
                kind,
                id = %created.id(),
                creator_id = %actor.id,
                "record created"
            ),
            Err(err) => report_orphaned_cover(kind, &cover_url, err),
        }
        result
    }

    pub async fn update<S: Submission>(
        &self,
        repo: &dyn RecordRepository<S::Target>,
        actor: &AuthenticatedUser,
        id: <S::Target as Record>::Id,
        submission: S,
        cover: Option<&CoverFile>,
    ) -> ApplicationResult<S::Target> {
        let kind = <S::Target as Record>::KIND;
        let existing = load(repo, id).await?;
        actor.ensure_owner(&existing)?;

        let tx = repo.begin().await.map_err(persistence_failure)?;

        let cover_url = match cover {
            Some(file) => Some(self.upload_cover(kind, file).await?),
            None => None,
        };
        let result = self
            .update_stamped(tx, actor, id, submission, cover_url.clone())
            .await;

        match (&result, &cover_url) {
            (Ok(updated), _) => info!(
                kind,
                id = %updated.id(),
                cover_replaced = cover_url.is_some(),
                "record updated"
            ),
            (Err(err), Some(url)) => report_orphaned_cover(kind, url, err),
            (Err(err), None) => warn!(kind, id = %id, error = %err, "update rolled back"),
        }
        result
    }

    /// Hard delete. The remote cover is kept.
    pub async fn delete<T: Record>(
        &self,
        repo: &dyn RecordRepository<T>,
        actor: &AuthenticatedUser,
        id: T::Id,
    ) -> ApplicationResult<()> {
        let existing = load(repo, id).await?;
        actor.ensure_owner(&existing)?;

        repo.delete(id).await.map_err(persistence_failure)?;
        warn!(
            kind = T::KIND,
            id = %id,
            cover = %existing.cover(),
            "record deleted; remote cover asset retained"
        );
        Ok(())
    }

    async fn insert_stamped<S: Submission>(
        &self,
        mut tx: Box<dyn RecordTransaction<S::Target>>,
        actor: &AuthenticatedUser,
        submission: S,
        cover: CoverUrl,
    ) -> ApplicationResult<S::Target> {
        let stamp = CreateStamp {
            slug: self.slug_for(submission.slug_source())?,
            cover,
            creator_id: actor.id,
            now: self.clock.now(),
        };

        let created = tx
            .insert(submission.into_draft(stamp))
            .await
            .map_err(persistence_failure)?;
        tx.commit().await.map_err(persistence_failure)?;
        Ok(created)
    }

    async fn update_stamped<S: Submission>(
        &self,
        mut tx: Box<dyn RecordTransaction<S::Target>>,
        actor: &AuthenticatedUser,
        id: <S::Target as Record>::Id,
        submission: S,
        cover: Option<CoverUrl>,
    ) -> ApplicationResult<S::Target> {
        let stamp = UpdateStamp {
            slug: self.slug_for(submission.slug_source())?,
            cover,
            creator_id: actor.id,
            now: self.clock.now(),
        };

        let updated = tx
            .update(id, submission.into_changes(stamp))
            .await
            .map_err(persistence_failure)?;
        tx.commit().await.map_err(persistence_failure)?;
        Ok(updated)
    }

    async fn upload_cover(&self, kind: &'static str, cover: &CoverFile) -> ApplicationResult<CoverUrl> {
        match tokio::time::timeout(self.upload_timeout, self.uploader.upload(cover.path())).await {
            Ok(Ok(url)) => {
                tracing::debug!(kind, url = %url, "cover uploaded");
                Ok(url)
            }
            Ok(Err(err)) => {
                warn!(kind, error = %err, "cover upload failed; rolling back");
                Err(ApplicationError::system(err.to_string()))
            }
            Err(_) => {
                warn!(
                    kind,
                    timeout = ?self.upload_timeout,
                    "cover upload timed out; rolling back"
                );
                Err(ApplicationError::system(format!(
                    "cover upload timed out after {:?}",
                    self.upload_timeout
                )))
            }
        }
    }

    fn slug_for(&self, source: &str) -> ApplicationResult<Slug> {
        Slug::new(self.slugger.slugify(source)).map_err(persistence_failure)
    }
}

async fn load<T: Record>(repo: &dyn RecordRepository<T>, id: T::Id) -> ApplicationResult<T> {
    repo.find_by_id(id)
        .await
        .map_err(persistence_failure)?
        .ok_or_else(|| ApplicationError::not_found(format!("{} {id} not found", T::KIND)))
}

/// A vanished target stays a not-found; anything else after validation is a system error.
fn persistence_failure(err: DomainError) -> ApplicationError {
    match err {
        DomainError::NotFound(msg) => ApplicationError::NotFound(msg),
        other => ApplicationError::system(other.to_string()),
    }
}

fn report_orphaned_cover(kind: &'static str, url: &CoverUrl, err: &ApplicationError) {
    warn!(
        kind,
        cover = %url,
        error = %err,
        "write rolled back after cover upload; remote asset orphaned"
    );
}
