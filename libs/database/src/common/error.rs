#[cfg(feature = "postgres")]
use sea_orm::DbErr;

/// Failures from connecting, probing or migrating the database
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[cfg(feature = "postgres")]
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] DbErr),

    #[cfg(feature = "postgres")]
    #[error("Health check failed: {0}")]
    HealthCheckFailed(#[source] DbErr),

    #[cfg(feature = "postgres")]
    #[error("Migrations for {app} failed: {source}")]
    MigrationFailed { app: String, source: DbErr },
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;
