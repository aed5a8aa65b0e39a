// tests/integration_repositories.rs
//! Postgres-backed repository checks. Run with RUN_DB_INTEGRATION=1 and DATABASE_URL set.
use chrono::Utc;
use showcase_admin::domain::{
    career::{Career, CareerId, CareerTitle, CareerUpdate, NewCareer},
    category::CategoryId,
    errors::DomainError,
    product::{NewProduct, Price, Product, ProductAbout, ProductId, ProductName},
    shared::{CoverUrl, LongText, PageRequest, RecordRepository, RecordTransaction, Slug},
    user::UserId,
};
use showcase_admin::infrastructure::{
    database::{init_pool, run_migrations},
    repositories::{PostgresCareerRepository, PostgresProductRepository},
};
use sqlx::PgPool;

async fn connect() -> Option<PgPool> {
    if std::env::var("RUN_DB_INTEGRATION").unwrap_or_default() != "1" {
        eprintln!("skipping integration test: set RUN_DB_INTEGRATION=1 and DATABASE_URL to run");
        return None;
    }

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");
    let pool = init_pool(&database_url).await.expect("init pool");
    run_migrations(&pool).await.expect("run migrations");
    Some(pool)
}

/// Creator ids no other run is likely to share.
fn fresh_owners() -> (i64, i64) {
    let base = 1_000_000 + (uuid::Uuid::new_v4().as_u128() % 1_000_000_000) as i64 * 2;
    (base, base + 1)
}

fn marker() -> String {
    uuid::Uuid::new_v4().simple().to_string()[..12].to_string()
}

async fn insert_category(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("INSERT INTO categories (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .expect("insert category")
}

fn new_product(name: &str, category_id: i64, creator_id: i64) -> NewProduct {
    let now = Utc::now();
    NewProduct {
        name: ProductName::new(name).unwrap(),
        slug: Slug::new(slug::slugify(name)).unwrap(),
        cover: CoverUrl::new("https://res.cloudinary.com/demo/image/upload/v1/product.jpg").unwrap(),
        about: ProductAbout::new("Stocked item").unwrap(),
        category_id: CategoryId::new(category_id).unwrap(),
        price: Price::new(1_000).unwrap(),
        creator_id: UserId::new(creator_id).unwrap(),
        created_at: now,
        updated_at: now,
    }
}

fn text(value: &str) -> LongText {
    LongText::new(value).unwrap()
}

fn new_career(title: &str, creator_id: i64) -> NewCareer {
    let now = Utc::now();
    NewCareer {
        title: CareerTitle::new(title).unwrap(),
        slug: Slug::new(slug::slugify(title)).unwrap(),
        cover: CoverUrl::new("https://res.cloudinary.com/demo/image/upload/v1/career.jpg").unwrap(),
        description: text("Own the admin backend"),
        requirements: text("Rust"),
        benefits: text("Remote"),
        how_to_apply: text("Email us"),
        creator_id: UserId::new(creator_id).unwrap(),
        created_at: now,
        updated_at: now,
    }
}

async fn insert_product(repo: &PostgresProductRepository, draft: NewProduct) -> Product {
    let mut tx = repo.begin().await.expect("begin");
    let product = tx.insert(draft).await.expect("insert product");
    tx.commit().await.expect("commit");
    product
}

async fn insert_career(repo: &PostgresCareerRepository, draft: NewCareer) -> Career {
    let mut tx = repo.begin().await.expect("begin");
    let career = tx.insert(draft).await.expect("insert career");
    tx.commit().await.expect("commit");
    career
}

async fn cleanup(pool: &PgPool, owners: (i64, i64)) {
    for table in ["products", "careers"] {
        sqlx::query(&format!("DELETE FROM {table} WHERE creator_id IN ($1, $2)"))
            .bind(owners.0)
            .bind(owners.1)
            .execute(pool)
            .await
            .expect("cleanup");
    }
}

#[tokio::test]
async fn category_search_stays_inside_the_owner_scope() {
    let Some(pool) = connect().await else {
        return;
    };
    let (owner, other) = fresh_owners();
    let tag = marker();
    let matching = insert_category(&pool, &format!("{tag} Keyboards")).await;
    let unrelated = insert_category(&pool, "Unrelated").await;
    let repo = PostgresProductRepository::new(pool.clone());

    let mine = insert_product(&repo, new_product("Mechanical Board", matching, owner)).await;
    insert_product(&repo, new_product("Office Chair", unrelated, owner)).await;
    insert_product(&repo, new_product("Foreign Board", matching, other)).await;

    let page = repo
        .list_page(UserId::new(owner).unwrap(), Some(&tag), PageRequest::first())
        .await
        .expect("list");

    assert_eq!(page.total, 1);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, mine.id);

    cleanup(&pool, (owner, other)).await;
    sqlx::query("DELETE FROM categories WHERE id IN ($1, $2)")
        .bind(matching)
        .bind(unrelated)
        .execute(&pool)
        .await
        .expect("cleanup categories");
}

#[tokio::test]
async fn like_metacharacters_in_search_are_literal() {
    let Some(pool) = connect().await else {
        return;
    };
    let (owner, other) = fresh_owners();
    let tag = marker();
    let category = insert_category(&pool, "Sale").await;
    let repo = PostgresProductRepository::new(pool.clone());
    insert_product(&repo, new_product(&format!("{tag} 50% off"), category, owner)).await;

    let owner_id = UserId::new(owner).unwrap();
    let literal = repo
        .list_page(owner_id, Some(&format!("{tag} 50%")), PageRequest::first())
        .await
        .expect("list");
    assert_eq!(literal.total, 1);

    let wildcard = repo
        .list_page(owner_id, Some(&format!("{tag} 5_%")), PageRequest::first())
        .await
        .expect("list");
    assert_eq!(wildcard.total, 0);

    cleanup(&pool, (owner, other)).await;
    sqlx::query("DELETE FROM categories WHERE id = $1")
        .bind(category)
        .execute(&pool)
        .await
        .expect("cleanup categories");
}

#[tokio::test]
async fn update_without_cover_keeps_stored_url() {
    let Some(pool) = connect().await else {
        return;
    };
    let (owner, other) = fresh_owners();
    let repo = PostgresCareerRepository::new(pool.clone());
    let created = insert_career(&repo, new_career("Backend Engineer", owner)).await;

    let mut tx = repo.begin().await.expect("begin");
    let updated = tx
        .update(
            created.id,
            CareerUpdate {
                title: CareerTitle::new("Platform Engineer").unwrap(),
                slug: Slug::new("platform-engineer").unwrap(),
                cover: None,
                description: text("Run the platform"),
                requirements: text("Rust, Postgres"),
                benefits: text("Remote"),
                how_to_apply: text("Email us"),
                creator_id: UserId::new(owner).unwrap(),
                updated_at: Utc::now(),
            },
        )
        .await
        .expect("update");
    tx.commit().await.expect("commit");

    assert_eq!(updated.cover, created.cover);
    let stored = repo
        .find_by_id(created.id)
        .await
        .expect("find")
        .expect("row exists");
    assert_eq!(stored.cover, created.cover);
    assert_eq!(stored.title.as_str(), "Platform Engineer");
    assert_eq!(stored.slug.as_str(), "platform-engineer");

    cleanup(&pool, (owner, other)).await;
}

#[tokio::test]
async fn dropped_transaction_leaves_no_row() {
    let Some(pool) = connect().await else {
        return;
    };
    let (owner, other) = fresh_owners();
    let repo = PostgresCareerRepository::new(pool.clone());

    let mut tx = repo.begin().await.expect("begin");
    let staged = tx
        .insert(new_career("Never Committed", owner))
        .await
        .expect("insert");
    drop(tx);

    let found = repo.find_by_id(staged.id).await.expect("find");
    assert!(found.is_none());

    let page = repo
        .list_page(UserId::new(owner).unwrap(), None, PageRequest::first())
        .await
        .expect("list");
    assert_eq!(page.total, 0);

    cleanup(&pool, (owner, other)).await;
}

#[tokio::test]
async fn deleting_a_missing_id_is_not_found() {
    let Some(pool) = connect().await else {
        return;
    };
    let products = PostgresProductRepository::new(pool.clone());
    let careers = PostgresCareerRepository::new(pool);

    let err = products
        .delete(ProductId::new(i64::MAX).unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));

    let err = careers
        .delete(CareerId::new(i64::MAX).unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}
