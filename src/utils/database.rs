use crate::utils::config::DatabaseConfig;
use sqlx::{postgres::PgPoolOptions, PgPool};

#[derive(Clone)]
pub struct DatabaseConnection {
    pub pool: PgPool,
}

pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(config.url.as_str())
        .await
        .map(|pool| DatabaseConnection { pool })
        .map_err(|err| {
            tracing::error!("Error connecting to database: {}", err);
            err
        })
}

/// Builds a pool that only opens connections on first use.
pub fn connect_lazy(config: &DatabaseConfig) -> Result<DatabaseConnection, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_lazy(config.url.as_str())
        .map(|pool| DatabaseConnection { pool })
}

pub async fn migrate(db_conn: &DatabaseConnection) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!().run(&db_conn.pool).await.map_err(|err| {
        tracing::error!("Failed to run database migrations: {}", err);
        err
    })
}
