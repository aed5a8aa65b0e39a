// tests/support/mocks/uploader.rs
use async_trait::async_trait;
use showcase_admin::{
    application::ports::storage::{AssetUploader, UploadError},
    domain::shared::CoverUrl,
};
use std::{
    path::{Path, PathBuf},
    sync::Mutex,
    time::Duration,
};

pub const UPLOADED_URL: &str = "https://res.cloudinary.com/demo/image/upload/v1/showcase/cover.jpg";

#[derive(Debug, Clone)]
enum Script {
    Succeed(String),
    Fail,
    Stall(Duration),
}

/// Records every call; answers with the scripted outcome.
#[derive(Debug)]
pub struct ScriptedUploader {
    script: Mutex<Script>,
    calls: Mutex<Vec<Upload>>,
}

#[derive(Debug, Clone)]
pub struct Upload {
    pub path: PathBuf,
    /// Whether the spooled file was on disk when the upload ran.
    pub existed: bool,
    pub bytes: usize,
}

impl Default for ScriptedUploader {
    fn default() -> Self {
        Self::succeeding(UPLOADED_URL)
    }
}

impl ScriptedUploader {
    pub fn succeeding(url: &str) -> Self {
        Self::with(Script::Succeed(url.to_string()))
    }

    pub fn failing() -> Self {
        Self::with(Script::Fail)
    }

    pub fn stalling(delay: Duration) -> Self {
        Self::with(Script::Stall(delay))
    }

    fn with(script: Script) -> Self {
        Self {
            script: Mutex::new(script),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn fail_next(&self) {
        *self.script.lock().unwrap() = Script::Fail;
    }

    pub fn calls(&self) -> Vec<Upload> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl AssetUploader for ScriptedUploader {
    async fn upload(&self, file: &Path) -> Result<CoverUrl, UploadError> {
        let bytes = std::fs::read(file).map(|b| b.len());
        self.calls.lock().unwrap().push(Upload {
            path: file.to_path_buf(),
            existed: bytes.is_ok(),
            bytes: bytes.unwrap_or(0),
        });

        let script = self.script.lock().unwrap().clone();
        match script {
            Script::Succeed(url) => {
                CoverUrl::new(url).map_err(|err| UploadError::InvalidResponse(err.to_string()))
            }
            Script::Fail => Err(UploadError::Rejected {
                status: 500,
                message: "media service unavailable".into(),
            }),
            Script::Stall(delay) => {
                tokio::time::sleep(delay).await;
                Err(UploadError::Transport("stalled upload finished late".into()))
            }
        }
    }
}
