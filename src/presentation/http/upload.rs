// src/presentation/http/upload.rs
//! Multipart admin forms: text fields kept in memory, the `cover` part
//! spooled to a temp file that is removed when the form is dropped.
use crate::application::{commands::CoverFile, error::ValidationErrors};
use axum::extract::{Multipart, multipart::Field};
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};
use tokio::io::AsyncWriteExt;

use super::error::{HttpError, HttpResult};

const COVER_FIELD: &str = "cover";
const SNIFF_LEN: usize = 8;
const UNKNOWN_CONTENT_TYPE: &str = "application/octet-stream";

/// Content type from leading magic bytes; only the image types covers accept.
pub fn sniff_image_type(head: &[u8]) -> Option<&'static str> {
    const PNG: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    if head.starts_with(&[0xFF, 0xD8, 0xFF]) {
        Some("image/jpeg")
    } else if head.starts_with(&PNG) {
        Some("image/png")
    } else {
        None
    }
}

/// Removes the spooled file on drop.
#[derive(Debug)]
struct SpooledFile {
    cover: CoverFile,
}

impl Drop for SpooledFile {
    fn drop(&mut self) {
        if let Err(err) = std::fs::remove_file(&self.cover.path) {
            if err.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(
                    path = %self.cover.path.display(),
                    error = %err,
                    "failed to remove spooled upload"
                );
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct AdminForm {
    fields: HashMap<String, String>,
    cover: Option<SpooledFile>,
}

impl AdminForm {
    pub async fn read(mut multipart: Multipart, spool_dir: &Path) -> HttpResult<Self> {
        let mut form = AdminForm::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(HttpError::from)?
        {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            if name == COVER_FIELD {
                // A repeated part replaces the earlier one, whose guard cleans up.
                form.cover = spool(field, spool_dir).await?;
            } else {
                let value = field
                    .text()
                    .await
                    .map_err(HttpError::from)?;
                form.fields.insert(name, value);
            }
        }

        Ok(form)
    }

    #[cfg(test)]
    fn with_fields(pairs: &[(&str, &str)]) -> Self {
        Self {
            fields: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            cover: None,
        }
    }

    /// Missing text becomes empty and is rejected by field validation.
    pub fn text(&self, name: &str) -> String {
        self.fields.get(name).cloned().unwrap_or_default()
    }

    pub fn integer(&self, name: &str, errors: &mut ValidationErrors) -> i64 {
        match self.fields.get(name).map(|v| v.trim()) {
            None | Some("") => {
                errors.add(name, format!("The {name} field is required."));
                0
            }
            Some(raw) => raw.parse::<i64>().unwrap_or_else(|_| {
                errors.add(name, format!("The {name} must be an integer."));
                0
            }),
        }
    }

    /// A copy of the spooled cover's metadata; the file itself lives as long as the form.
    pub fn cover(&self) -> Option<CoverFile> {
        self.cover.as_ref().map(|spooled| spooled.cover.clone())
    }
}

async fn spool(mut field: Field<'_>, dir: &Path) -> HttpResult<Option<SpooledFile>> {
    let file_name = field
        .file_name()
        .map(str::to_string)
        .filter(|name| !name.is_empty());
    let declared_type = field.content_type().map(str::to_string);

    let path: PathBuf = dir.join(format!("upload-{}", uuid::Uuid::new_v4()));
    let mut file = tokio::fs::File::create(&path).await.map_err(|err| {
        HttpError::internal(format!("failed to spool upload: {err}"))
    })?;
    let mut spooled = SpooledFile {
        cover: CoverFile {
            path,
            file_name,
            content_type: None,
            size: 0,
        },
    };

    let mut head: Vec<u8> = Vec::with_capacity(SNIFF_LEN);
    while let Some(chunk) = field
        .chunk()
        .await
        .map_err(HttpError::from)?
    {
        if head.len() < SNIFF_LEN {
            let take = (SNIFF_LEN - head.len()).min(chunk.len());
            head.extend_from_slice(&chunk[..take]);
        }
        file.write_all(&chunk)
            .await
            .map_err(|err| HttpError::internal(format!("failed to spool upload: {err}")))?;
        spooled.cover.size += chunk.len() as u64;
    }
    file.flush()
        .await
        .map_err(|err| HttpError::internal(format!("failed to spool upload: {err}")))?;

    if spooled.cover.size == 0 {
        return Ok(None);
    }

    let sniffed = sniff_image_type(&head);
    if sniffed.is_none() {
        tracing::debug!(declared = ?declared_type, "cover bytes are not a known image type");
    }
    spooled.cover.content_type = Some(sniffed.unwrap_or(UNKNOWN_CONTENT_TYPE).to_string());

    Ok(Some(spooled))
}
