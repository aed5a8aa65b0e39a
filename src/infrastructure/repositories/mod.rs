// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_career;
mod postgres_category;
mod postgres_product;
mod transaction;

pub use error::map_sqlx;
pub use postgres_career::PostgresCareerRepository;
pub use postgres_category::PostgresCategoryRepository;
pub use postgres_product::PostgresProductRepository;
pub use transaction::PgRecordTransaction;

/// `%term%` for `ILIKE ... ESCAPE '\'`, with LIKE metacharacters in `term` escaped.
pub(crate) fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

pub(crate) fn to_total(count: i64) -> u64 {
    u64::try_from(count).unwrap_or(0)
}
