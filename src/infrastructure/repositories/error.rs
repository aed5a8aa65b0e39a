// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;

const CNT_PRODUCT_CATEGORY: &str = "products_category_id_fkey";
const CNT_PRODUCT_PRICE_CHECK: &str = "products_price_check";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_PRODUCT_CATEGORY => {
                        DomainError::Validation("referenced category does not exist".into())
                    }
                    CNT_PRODUCT_PRICE_CHECK => {
                        DomainError::Validation("price must be at least 0".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23503" => {
                        return DomainError::Validation("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("row not found".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}
