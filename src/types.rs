pub use crate::utils::database;
use crate::utils::config::{AppEnvironment, Config};
use async_trait::async_trait;
use std::fmt;

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u32,
    pub url: String,
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub db_conn: database::DatabaseConnection,
}

#[derive(Debug)]
pub enum Error {
    FailedToConnect(sqlx::Error),
    FailedToMigrate(sqlx::migrate::MigrateError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FailedToConnect(err) => write!(f, "Failed to connect to database: {err}"),
            Self::FailedToMigrate(err) => write!(f, "Failed to run database migrations: {err}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<Config> for AppContext {
    fn from(config: Config) -> Self {
        Self {
            host: config.app.host,
            environment: config.app.environment,
            port: config.app.port,
            url: config.app.url,
        }
    }
}

impl Context {
    /// Context whose pool has not connected yet; used where the database may be absent.
    pub fn lazy(config: Config) -> Result<Self, Error> {
        let db_conn = database::connect_lazy(&config.database).map_err(Error::FailedToConnect)?;

        Ok(Self {
            app: config.into(),
            db_conn,
        })
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Result<Context, Error>;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Result<Context, Error> {
        let db_conn = database::connect(&self.database)
            .await
            .map_err(Error::FailedToConnect)?;
        database::migrate(&db_conn)
            .await
            .map_err(Error::FailedToMigrate)?;

        tracing::debug!("Database connected and migrated");

        Ok(Context {
            app: self.into(),
            db_conn,
        })
    }
}
