//! Classification of PostgreSQL driver errors into domain error kinds.
//!
//! The rest of the adapter funnels every `DbErr` through [`classify_db_err`]
//! so that callers above the repository port only ever see the closed
//! `DomainError` taxonomy, never a raw driver error.

use sea_orm::{DbErr, RuntimeErr};
use sqlx::postgres::PgDatabaseError;

use crate::error::DomainError;

/// SQLSTATE class 23: integrity constraint violations.
const UNIQUE_VIOLATION: &str = "23505";
const NOT_NULL_VIOLATION: &str = "23502";

/// Constraint names as created by the schema.
const PK_CONSTRAINT: &str = "users_pkey";
const USERNAME_CONSTRAINT: &str = "idx_username";
const EMAIL_CONSTRAINT: &str = "idx_email";

/// Map a SeaORM error to the domain error kind it represents.
///
/// Uniqueness violations are resolved to the specific conflict kind by
/// constraint name; not-null violations carry the offending column; a
/// record-not-found condition becomes `NotFound`. Anything unclassifiable
/// becomes `Internal` with the raw message preserved for diagnostic
/// logging only.
pub(crate) fn classify_db_err(err: DbErr) -> DomainError {
    match &err {
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => return DomainError::NotFound,
        _ => {}
    }

    if let Some(pg) = pg_error(&err) {
        match pg.code() {
            UNIQUE_VIOLATION => return classify_unique_violation(pg.constraint()),
            NOT_NULL_VIOLATION => {
                return DomainError::NotNullable {
                    field: not_null_field(pg.column()),
                }
            }
            _ => {}
        }
    }

    DomainError::Internal(err.to_string())
}

/// Dig the structured Postgres error out of the runtime wrappers.
///
/// Depending on where the pooling layer failed, the driver error may
/// surface wrapped as a statement error (`Exec`/`Query`) or as a
/// connection error (`Conn`); all three carry the same `PgDatabaseError`
/// underneath.
fn pg_error(err: &DbErr) -> Option<&PgDatabaseError> {
    let runtime = match err {
        DbErr::Exec(e) | DbErr::Query(e) | DbErr::Conn(e) => e,
        _ => return None,
    };

    match runtime {
        RuntimeErr::SqlxError(sqlx::Error::Database(db)) => {
            db.try_downcast_ref::<PgDatabaseError>()
        }
        _ => None,
    }
}

/// Resolve a unique-violation to the conflicting field.
///
/// An unrecognized constraint name still yields a conflict kind (the
/// engine reported one; succeeding silently is not an option). The name
/// itself is the best remaining hint for which field collided.
fn classify_unique_violation(constraint: Option<&str>) -> DomainError {
    match constraint {
        Some(PK_CONSTRAINT) => DomainError::IdInUse,
        Some(USERNAME_CONSTRAINT) => DomainError::UsernameInUse,
        Some(EMAIL_CONSTRAINT) => DomainError::EmailInUse,
        Some(name) if name.contains("username") => DomainError::UsernameInUse,
        Some(name) if name.contains("email") => DomainError::EmailInUse,
        _ => DomainError::IdInUse,
    }
}

/// Name the column behind a not-null violation, falling back to a generic
/// placeholder when the driver does not report a recognizable column.
fn not_null_field(column: Option<&str>) -> String {
    match column {
        Some(col @ ("id" | "name" | "username" | "email")) => col.to_string(),
        _ => "a column".to_string(),
    }
}
