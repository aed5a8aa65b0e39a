// src/infrastructure/repositories/postgres_career.rs
use super::{PgRecordTransaction, like_pattern, map_sqlx, to_total};
use crate::domain::career::{Career, CareerId, CareerTitle, CareerUpdate, NewCareer};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::shared::{
    CoverUrl, LongText, Page, PageRequest, RecordRepository, RecordTransaction, Slug,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresCareerRepository {
    pool: PgPool,
}

impl PostgresCareerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CareerRow {
    id: i64,
    title: String,
    slug: String,
    cover: String,
    description: String,
    requirements: String,
    benefits: String,
    how_to_apply: String,
    creator_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CareerRow> for Career {
    type Error = DomainError;

    fn try_from(row: CareerRow) -> Result<Self, Self::Error> {
        Ok(Career {
            id: CareerId::new(row.id)?,
            title: CareerTitle::new(row.title)?,
            slug: Slug::new(row.slug)?,
            cover: CoverUrl::new(row.cover)?,
            description: LongText::labelled(row.description, "description")?,
            requirements: LongText::labelled(row.requirements, "requirements")?,
            benefits: LongText::labelled(row.benefits, "benefits")?,
            how_to_apply: LongText::labelled(row.how_to_apply, "how_to_apply")?,
            creator_id: UserId::new(row.creator_id)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl RecordTransaction<Career> for PgRecordTransaction<Career> {
    async fn insert(&mut self, career: NewCareer) -> DomainResult<Career> {
        let NewCareer {
            title,
            slug,
            cover,
            description,
            requirements,
            benefits,
            how_to_apply,
            creator_id,
            created_at,
            updated_at,
        } = career;

        let row = sqlx::query_as::<_, CareerRow>(
            "INSERT INTO careers (title, slug, cover, description, requirements, benefits, how_to_apply, creator_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING id, title, slug, cover, description, requirements, benefits, how_to_apply, creator_id, created_at, updated_at",
        )
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(cover.as_str())
        .bind(description.as_str())
        .bind(requirements.as_str())
        .bind(benefits.as_str())
        .bind(how_to_apply.as_str())
        .bind(i64::from(creator_id))
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(map_sqlx)?;

        Career::try_from(row)
    }

    async fn update(&mut self, id: CareerId, update: CareerUpdate) -> DomainResult<Career> {
        let CareerUpdate {
            title,
            slug,
            cover,
            description,
            requirements,
            benefits,
            how_to_apply,
            creator_id,
            updated_at,
        } = update;

        // Last writer wins; there is no version column.
        let row = sqlx::query_as::<_, CareerRow>(
            "UPDATE careers
             SET title = $1, slug = $2, cover = COALESCE($3, cover), description = $4,
                 requirements = $5, benefits = $6, how_to_apply = $7, creator_id = $8, updated_at = $9
             WHERE id = $10
             RETURNING id, title, slug, cover, description, requirements, benefits, how_to_apply, creator_id, created_at, updated_at",
        )
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(cover.map(CoverUrl::into_inner))
        .bind(description.as_str())
        .bind(requirements.as_str())
        .bind(benefits.as_str())
        .bind(how_to_apply.as_str())
        .bind(i64::from(creator_id))
        .bind(updated_at)
        .bind(i64::from(id))
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_sqlx)?;

        let row = row.ok_or_else(|| DomainError::NotFound(format!("career {id} not found")))?;
        Career::try_from(row)
    }

    async fn commit(self: Box<Self>) -> DomainResult<()> {
        self.finish().await
    }
}

impl PostgresCareerRepository {
    fn apply_conditions(builder: &mut QueryBuilder<'_, Postgres>, owner: UserId, search: Option<&str>) {
        builder.push(" WHERE creator_id = ");
        builder.push_bind(i64::from(owner));

        if let Some(term) = search {
            builder.push(" AND title ILIKE ");
            builder.push_bind(like_pattern(term));
            builder.push(" ESCAPE '\\'");
        }
    }
}

#[async_trait]
impl RecordRepository<Career> for PostgresCareerRepository {
    async fn begin(&self) -> DomainResult<Box<dyn RecordTransaction<Career>>> {
        let tx = PgRecordTransaction::<Career>::begin(&self.pool).await?;
        Ok(Box::new(tx))
    }

    async fn find_by_id(&self, id: CareerId) -> DomainResult<Option<Career>> {
        let row = sqlx::query_as::<_, CareerRow>(
            "SELECT id, title, slug, cover, description, requirements, benefits, how_to_apply, creator_id, created_at, updated_at
             FROM careers WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Career::try_from).transpose()
    }

    async fn list_page(
        &self,
        owner: UserId,
        search: Option<&str>,
        page: PageRequest,
    ) -> DomainResult<Page<Career>> {
        let mut count: QueryBuilder<Postgres> = QueryBuilder::new("SELECT COUNT(*) FROM careers");
        Self::apply_conditions(&mut count, owner, search);
        let total: i64 = count
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT id, title, slug, cover, description, requirements, benefits, how_to_apply, creator_id, created_at, updated_at FROM careers",
        );
        Self::apply_conditions(&mut builder, owner, search);
        builder.push(" ORDER BY id ASC LIMIT ");
        builder.push_bind(i64::from(page.per_page()));
        builder.push(" OFFSET ");
        builder.push_bind(i64::try_from(page.offset()).unwrap_or(i64::MAX));

        let rows = builder
            .build_query_as::<CareerRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let careers = rows
            .into_iter()
            .map(Career::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(careers, to_total(total), page))
    }

    async fn delete(&self, id: CareerId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM careers WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("career {id} not found")));
        }
        Ok(())
    }
}
