use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{DbErr, SqlErr};
use serde_json::json;
use thiserror::Error;

/// Failure kinds surfaced by the persistence layer.
///
/// Constraint violations reported by Postgres map to distinct variants so
/// callers can tell a duplicate key from a dangling reference without
/// parsing driver messages.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),

    #[error("not-null constraint violated: {0}")]
    NotNullViolation(String),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("password hashing failed")]
    Hash(#[from] bcrypt::BcryptError),

    #[error(transparent)]
    Database(DbErr),
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => AppError::UniqueViolation(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => AppError::ForeignKeyViolation(msg),
            _ => classify_message(err),
        }
    }
}

// `DbErr::sql_err` only understands errors sqlx could type; everything else
// falls back to the SQLSTATE / message text Postgres reports.
fn classify_message(err: DbErr) -> AppError {
    let msg = err.to_string();
    if msg.contains("23505") || msg.contains("duplicate key value") {
        AppError::UniqueViolation(msg)
    } else if msg.contains("23503") || msg.contains("violates foreign key constraint") {
        AppError::ForeignKeyViolation(msg)
    } else if msg.contains("23502") || msg.contains("violates not-null constraint") {
        AppError::NotNullViolation(msg)
    } else {
        AppError::Database(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::UniqueViolation(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::ForeignKeyViolation(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::NotNullViolation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            AppError::NotFound(what) => (StatusCode::NOT_FOUND, format!("{what} not found")),
            AppError::Hash(_) | AppError::Database(_) => {
                tracing::error!(error = %self, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::RuntimeErr;

    fn db_err(msg: &str) -> DbErr {
        DbErr::Query(RuntimeErr::Internal(msg.to_string()))
    }

    #[test]
    fn classifies_duplicate_keys() {
        let err = AppError::from(db_err(
            "error returned from database: duplicate key value violates unique constraint \"users_email_key\"",
        ));
        assert!(matches!(err, AppError::UniqueViolation(_)));
    }

    #[test]
    fn classifies_dangling_references() {
        let err = AppError::from(db_err(
            "error returned from database: insert or update on table \"employees\" violates foreign key constraint \"fk_employees_user\"",
        ));
        assert!(matches!(err, AppError::ForeignKeyViolation(_)));
    }

    #[test]
    fn classifies_missing_values() {
        let err = AppError::from(db_err(
            "error returned from database: null value in column \"name\" violates not-null constraint",
        ));
        assert!(matches!(err, AppError::NotNullViolation(_)));
    }

    #[test]
    fn classifies_by_sqlstate_code() {
        assert!(matches!(
            AppError::from(db_err("SQLSTATE 23505")),
            AppError::UniqueViolation(_)
        ));
        assert!(matches!(
            AppError::from(db_err("SQLSTATE 23503")),
            AppError::ForeignKeyViolation(_)
        ));
        assert!(matches!(
            AppError::from(db_err("SQLSTATE 23502")),
            AppError::NotNullViolation(_)
        ));
    }

    #[test]
    fn other_errors_stay_opaque() {
        let err = AppError::from(db_err("connection reset by peer"));
        assert!(matches!(err, AppError::Database(_)));
    }
}
