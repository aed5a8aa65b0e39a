use crate::domain::career::Career;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub cover: String,
    pub description: String,
    pub requirements: String,
    pub benefits: String,
    pub how_to_apply: String,
    pub creator_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Career> for CareerDto {
    fn from(career: Career) -> Self {
        Self {
            id: career.id.into(),
            title: career.title.into_inner(),
            slug: career.slug.into_inner(),
            cover: career.cover.into_inner(),
            description: career.description.into_inner(),
            requirements: career.requirements.into_inner(),
            benefits: career.benefits.into_inner(),
            how_to_apply: career.how_to_apply.into_inner(),
            creator_id: career.creator_id.into(),
            created_at: career.created_at,
            updated_at: career.updated_at,
        }
    }
}
