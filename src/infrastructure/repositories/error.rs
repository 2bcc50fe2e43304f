use crate::domain::errors::DomainError;

/// The existence check only reads, so every sqlx failure means storage is unavailable.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => DomainError::persistence(db_err.message()),
        sqlx::Error::PoolTimedOut => DomainError::persistence("connection pool timed out"),
        sqlx::Error::PoolClosed => DomainError::persistence("connection pool closed"),
        _ => DomainError::persistence(err.to_string()),
    }
}
