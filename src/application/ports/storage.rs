// src/application/ports/storage.rs
use crate::domain::shared::CoverUrl;
use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("failed to read upload source: {0}")]
    Io(String),
    #[error("upload request failed: {0}")]
    Transport(String),
    #[error("upload rejected ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("invalid upload response: {0}")]
    InvalidResponse(String),
}

/// Hosted media storage. The file has already been validated as an image.
/// Implementations do not retry.
#[async_trait]
pub trait AssetUploader: Send + Sync {
    async fn upload(&self, file: &Path) -> Result<CoverUrl, UploadError>;
}
