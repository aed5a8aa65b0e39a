// src/infrastructure/repositories/postgres_product.rs
use super::{PgRecordTransaction, like_pattern, map_sqlx, to_total};
use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::product::{
    NewProduct, Price, Product, ProductAbout, ProductId, ProductName, ProductUpdate,
};
use crate::domain::shared::{CoverUrl, Page, PageRequest, RecordRepository, RecordTransaction, Slug};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    slug: String,
    cover: String,
    about: String,
    category_id: i64,
    price: i64,
    creator_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProductRow> for Product {
    type Error = DomainError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        Ok(Product {
            id: ProductId::new(row.id)?,
            name: ProductName::new(row.name)?,
            slug: Slug::new(row.slug)?,
            cover: CoverUrl::new(row.cover)?,
            about: ProductAbout::new(row.about)?,
            category_id: CategoryId::new(row.category_id)?,
            price: Price::new(row.price)?,
            creator_id: UserId::new(row.creator_id)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl RecordTransaction<Product> for PgRecordTransaction<Product> {
    async fn insert(&mut self, product: NewProduct) -> DomainResult<Product> {
        let NewProduct {
            name,
            slug,
            cover,
            about,
            category_id,
            price,
            creator_id,
            created_at,
            updated_at,
        } = product;

        let row = sqlx::query_as::<_, ProductRow>(
            "INSERT INTO products (name, slug, cover, about, category_id, price, creator_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING id, name, slug, cover, about, category_id, price, creator_id, created_at, updated_at",
        )
        .bind(name.as_str())
        .bind(slug.as_str())
        .bind(cover.as_str())
        .bind(about.as_str())
        .bind(i64::from(category_id))
        .bind(i64::from(price))
        .bind(i64::from(creator_id))
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(map_sqlx)?;

        Product::try_from(row)
    }

    async fn update(&mut self, id: ProductId, update: ProductUpdate) -> DomainResult<Product> {
        let ProductUpdate {
            name,
            slug,
            cover,
            about,
            category_id,
            price,
            creator_id,
            updated_at,
        } = update;

        let row = sqlx::query_as::<_, ProductRow>(
            "UPDATE products
             SET name = $1, slug = $2, cover = COALESCE($3, cover), about = $4,
                 category_id = $5, price = $6, creator_id = $7, updated_at = $8
             WHERE id = $9
             RETURNING id, name, slug, cover, about, category_id, price, creator_id, created_at, updated_at",
        )
        .bind(name.as_str())
        .bind(slug.as_str())
        .bind(cover.map(CoverUrl::into_inner))
        .bind(about.as_str())
        .bind(i64::from(category_id))
        .bind(i64::from(price))
        .bind(i64::from(creator_id))
        .bind(updated_at)
        .bind(i64::from(id))
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_sqlx)?;

        let row = row.ok_or_else(|| DomainError::NotFound(format!("product {id} not found")))?;
        Product::try_from(row)
    }

    async fn commit(self: Box<Self>) -> DomainResult<()> {
        self.finish().await
    }
}

impl PostgresProductRepository {
    /// Owner scoping always applies; the search alternatives are grouped.
    fn apply_conditions(builder: &mut QueryBuilder<'_, Postgres>, owner: UserId, search: Option<&str>) {
        builder.push(" WHERE p.creator_id = ");
        builder.push_bind(i64::from(owner));

        if let Some(term) = search {
            let pattern = like_pattern(term);
            builder.push(" AND (p.name ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" ESCAPE '\\' OR p.about ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(
                " ESCAPE '\\' OR EXISTS (SELECT 1 FROM categories c WHERE c.id = p.category_id AND c.name ILIKE ",
            );
            builder.push_bind(pattern);
            builder.push(" ESCAPE '\\'))");
        }
    }
}

#[async_trait]
impl RecordRepository<Product> for PostgresProductRepository {
    async fn begin(&self) -> DomainResult<Box<dyn RecordTransaction<Product>>> {
        let tx = PgRecordTransaction::<Product>::begin(&self.pool).await?;
        Ok(Box::new(tx))
    }

    async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, slug, cover, about, category_id, price, creator_id, created_at, updated_at
             FROM products WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Product::try_from).transpose()
    }

    async fn list_page(
        &self,
        owner: UserId,
        search: Option<&str>,
        page: PageRequest,
    ) -> DomainResult<Page<Product>> {
        let mut count: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM products p");
        Self::apply_conditions(&mut count, owner, search);
        let total: i64 = count
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT p.id, p.name, p.slug, p.cover, p.about, p.category_id, p.price, p.creator_id, p.created_at, p.updated_at FROM products p",
        );
        Self::apply_conditions(&mut builder, owner, search);
        builder.push(" ORDER BY p.id ASC LIMIT ");
        builder.push_bind(i64::from(page.per_page()));
        builder.push(" OFFSET ");
        builder.push_bind(i64::try_from(page.offset()).unwrap_or(i64::MAX));

        let rows = builder
            .build_query_as::<ProductRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let products = rows
            .into_iter()
            .map(Product::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(products, to_total(total), page))
    }

    async fn delete(&self, id: ProductId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("product {id} not found")));
        }
        Ok(())
    }
}
