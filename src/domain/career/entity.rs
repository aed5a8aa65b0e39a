// src/domain/career/entity.rs
use crate::domain::career::value_objects::{CareerId, CareerTitle};
use crate::domain::shared::{CoverUrl, LongText, Record, Slug};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Career {
    pub id: CareerId,
    pub title: CareerTitle,
    pub slug: Slug,
    pub cover: CoverUrl,
    pub description: LongText,
    pub requirements: LongText,
    pub benefits: LongText,
    pub how_to_apply: LongText,
    pub creator_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewCareer {
    pub title: CareerTitle,
    pub slug: Slug,
    pub cover: CoverUrl,
    pub description: LongText,
    pub requirements: LongText,
    pub benefits: LongText,
    pub how_to_apply: LongText,
    pub creator_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full rewrite of a career's editable fields. `cover: None` keeps the stored URL.
#[derive(Debug, Clone)]
pub struct CareerUpdate {
    pub title: CareerTitle,
    pub slug: Slug,
    pub cover: Option<CoverUrl>,
    pub description: LongText,
    pub requirements: LongText,
    pub benefits: LongText,
    pub how_to_apply: LongText,
    pub creator_id: UserId,
    pub updated_at: DateTime<Utc>,
}

impl Record for Career {
    type Id = CareerId;
    type Draft = NewCareer;
    type Changes = CareerUpdate;

    const KIND: &'static str = "career";

    fn id(&self) -> CareerId {
        self.id
    }

    fn creator_id(&self) -> UserId {
        self.creator_id
    }

    fn cover(&self) -> &CoverUrl {
        &self.cover
    }
}
