// src/infrastructure/storage/cloudinary.rs
use crate::application::ports::storage::{AssetUploader, UploadError};
use crate::domain::shared::CoverUrl;
use async_trait::async_trait;
use chrono::Utc;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::{fmt, path::Path, time::Duration};

#[derive(Clone, PartialEq, Eq)]
pub struct CloudinaryCredentials {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
}

impl CloudinaryCredentials {
    /// Parses `cloudinary://<api_key>:<api_secret>@<cloud_name>`.
    pub fn from_url(url: &str) -> Option<Self> {
        let rest = url.trim().strip_prefix("cloudinary://")?;
        let (auth, cloud_name) = rest.rsplit_once('@')?;
        let (api_key, api_secret) = auth.split_once(':')?;
        let cloud_name = cloud_name.trim_end_matches('/');

        if api_key.is_empty() || api_secret.is_empty() || cloud_name.is_empty() {
            return None;
        }

        Some(Self {
            cloud_name: cloud_name.to_string(),
            api_key: api_key.to_string(),
            api_secret: api_secret.to_string(),
        })
    }
}

impl fmt::Debug for CloudinaryCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloudinaryCredentials")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

/// Signed image uploads through Cloudinary's upload API.
#[derive(Clone)]
pub struct CloudinaryUploader {
    client: reqwest::Client,
    credentials: CloudinaryCredentials,
    folder: Option<String>,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

impl CloudinaryUploader {
    pub fn new(
        credentials: CloudinaryCredentials,
        folder: Option<String>,
        timeout: Duration,
    ) -> Result<Self, UploadError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| UploadError::Transport(err.to_string()))?;
        let endpoint = format!(
            "https://api.cloudinary.com/v1_1/{}/image/upload",
            credentials.cloud_name
        );

        Ok(Self {
            client,
            credentials,
            folder,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Hex SHA-256 over `k=v` pairs sorted by key, joined with `&`, followed by the secret.
pub(crate) fn sign(params: &[(&str, &str)], api_secret: &str) -> String {
    let mut sorted = params.to_vec();
    sorted.sort_by(|a, b| a.0.cmp(b.0));
    let joined = sorted
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");

    let digest = Sha256::digest(format!("{joined}{api_secret}").as_bytes());
    format!("{digest:x}")
}

fn parse_response(status: u16, body: &str) -> Result<CoverUrl, UploadError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorEnvelope>(body)
            .map(|envelope| envelope.error.message)
            .unwrap_or_else(|_| body.trim().to_string());
        return Err(UploadError::Rejected { status, message });
    }

    let parsed: UploadResponse = serde_json::from_str(body)
        .map_err(|err| UploadError::InvalidResponse(err.to_string()))?;
    CoverUrl::new(parsed.secure_url).map_err(|err| UploadError::InvalidResponse(err.to_string()))
}

#[async_trait]
impl AssetUploader for CloudinaryUploader {
    async fn upload(&self, file: &Path) -> Result<CoverUrl, UploadError> {
        let bytes = tokio::fs::read(file)
            .await
            .map_err(|err| UploadError::Io(format!("{}: {err}", file.display())))?;
        let file_name = file
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("cover")
            .to_string();

        let timestamp = Utc::now().timestamp().to_string();
        let mut signed: Vec<(&str, &str)> = vec![("timestamp", timestamp.as_str())];
        if let Some(folder) = self.folder.as_deref() {
            signed.push(("folder", folder));
        }
        let signature = sign(&signed, &self.credentials.api_secret);

        let mut form = Form::new()
            .part("file", Part::bytes(bytes).file_name(file_name))
            .text("api_key", self.credentials.api_key.clone())
            .text("timestamp", timestamp.clone())
            .text("signature", signature)
            .text("signature_algorithm", "sha256");
        if let Some(folder) = &self.folder {
            form = form.text("folder", folder.clone());
        }

        tracing::debug!(endpoint = %self.endpoint, "uploading cover to cloudinary");
        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|err| UploadError::Transport(err.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| UploadError::Transport(err.to_string()))?;
        parse_response(status, &body)
    }
}
