// src/application/commands/cover.rs
use crate::application::error::ValidationErrors;
use std::path::{Path, PathBuf};

const COVER_FIELD: &str = "cover";
const ACCEPTED_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/jpg"];
const ACCEPTED_EXTENSIONS: [&str; 3] = ["jpeg", "png", "jpg"];

/// A cover image received from the admin form and spooled to local disk.
#[derive(Debug, Clone)]
pub struct CoverFile {
    pub path: PathBuf,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub size: u64,
}

impl CoverFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn extension(&self) -> Option<String> {
        self.file_name
            .as_deref()
            .and_then(|name| Path::new(name).extension())
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CoverPolicy {
    pub max_bytes: u64,
}

pub const CAREER_COVER: CoverPolicy = CoverPolicy {
    max_bytes: 2048 * 1024,
};

pub const PRODUCT_COVER: CoverPolicy = CoverPolicy {
    max_bytes: 5120 * 1024,
};

impl CoverPolicy {
    pub fn require<'a>(&self, cover: Option<&'a CoverFile>) -> Result<&'a CoverFile, ValidationErrors> {
        match cover {
            Some(file) => self.check(file).map(|()| file),
            None => {
                let mut errors = ValidationErrors::new();
                errors.add(COVER_FIELD, "The cover field is required.");
                Err(errors)
            }
        }
    }

    pub fn optional<'a>(
        &self,
        cover: Option<&'a CoverFile>,
    ) -> Result<Option<&'a CoverFile>, ValidationErrors> {
        match cover {
            Some(file) => self.check(file).map(|()| Some(file)),
            None => Ok(None),
        }
    }

    fn check(&self, file: &CoverFile) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let type_ok = file
            .content_type
            .as_deref()
            .map(|ct| ACCEPTED_TYPES.contains(&ct.to_ascii_lowercase().as_str()))
            .unwrap_or(false);
        let extension_ok = file
            .extension()
            .map(|ext| ACCEPTED_EXTENSIONS.contains(&ext.as_str()))
            .unwrap_or(true);
        if !type_ok || !extension_ok {
            errors.add(COVER_FIELD, "The cover must be a file of type: jpeg, png, jpg.");
        }

        if file.size == 0 {
            errors.add(COVER_FIELD, "The cover must be an image.");
        } else if file.size > self.max_bytes {
            errors.add(
                COVER_FIELD,
                format!(
                    "The cover may not be greater than {} kilobytes.",
                    self.max_bytes / 1024
                ),
            );
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
