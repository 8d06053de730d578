use std::time::Duration;

use log::{debug, warn};
use sqlx::{Any, AnyConnection, Connection};
use tokio::runtime::{Builder, Runtime};

use crate::account::Account;
use crate::config::Config;
use crate::error::StoreError;

const SELECT_CREDENTIALS: &str = "SELECT * FROM employer WHERE Name = ? AND password = ?";
const SELECT_USERNAME: &str = "SELECT * FROM employer WHERE Name = ?";
const INSERT_ACCOUNT: &str = "INSERT INTO employer (Name, password) VALUES (?, ?)";
const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS employer (\
    Name VARCHAR(255) NOT NULL UNIQUE, \
    password VARCHAR(255) NOT NULL)";
// MySQL's default collations ignore case and trailing spaces.
const CREATE_TABLE_MYSQL: &str = "CREATE TABLE IF NOT EXISTS employer (\
    Name VARCHAR(255) CHARACTER SET utf8mb4 COLLATE utf8mb4_bin NOT NULL UNIQUE, \
    password VARCHAR(255) CHARACTER SET utf8mb4 COLLATE utf8mb4_bin NOT NULL)";

/// Table DDL for the backend reported by `AnyConnection::backend_name`.
fn create_table_sql(backend: &str) -> &'static str {
    if backend.eq_ignore_ascii_case("mysql") {
        CREATE_TABLE_MYSQL
    } else {
        CREATE_TABLE
    }
}

/// Persistence for accounts. Every call is blocking.
pub trait CredentialStore {
    /// True when a stored account matches both fields exactly.
    fn verify(&self, username: &str, password: &str) -> Result<bool, StoreError>;

    fn username_exists(&self, username: &str) -> Result<bool, StoreError>;

    fn insert(&self, account: &Account) -> Result<(), StoreError>;
}

/// The `employer` table reached through sqlx's `Any` driver.
///
/// A connection is opened for each operation and closed when it finishes.
/// The async driver runs on a current-thread runtime owned by the store, so
/// callers block until the query completes.
pub struct SqlStore {
    url: String,
    connect_timeout: Option<Duration>,
    runtime: Runtime,
}

impl SqlStore {
    pub fn new(config: &Config) -> Result<Self, StoreError> {
        sqlx::any::install_default_drivers();
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(StoreError::Runtime)?;
        Ok(Self {
            url: config.database_url.clone(),
            connect_timeout: config.connect_timeout(),
            runtime,
        })
    }

    pub fn ensure_schema(&self) -> Result<(), StoreError> {
        self.runtime.block_on(async {
            let mut conn = self.connect().await?;
            let ddl = create_table_sql(conn.backend_name());
            let result = sqlx::query::<Any>(ddl)
                .execute(&mut conn)
                .await
                .map(|_| ())
                .map_err(StoreError::Query);
            close(conn).await;
            result
        })
    }

    async fn connect(&self) -> Result<AnyConnection, StoreError> {
        debug!("Opening database connection");
        let connecting = AnyConnection::connect(&self.url);
        match self.connect_timeout {
            Some(limit) => tokio::time::timeout(limit, connecting)
                .await
                .map_err(|_| StoreError::Timeout)?
                .map_err(StoreError::Connect),
            None => connecting.await.map_err(StoreError::Connect),
        }
    }

    async fn row_exists(&self, sql: &str, binds: &[&str]) -> Result<bool, StoreError> {
        let mut conn = self.connect().await?;
        let mut query = sqlx::query::<Any>(sql);
        for value in binds {
            query = query.bind(*value);
        }
        let result = query
            .fetch_optional(&mut conn)
            .await
            .map(|row| row.is_some())
            .map_err(StoreError::Query);
        close(conn).await;
        result
    }
}

impl CredentialStore for SqlStore {
    fn verify(&self, username: &str, password: &str) -> Result<bool, StoreError> {
        self.runtime
            .block_on(self.row_exists(SELECT_CREDENTIALS, &[username, password]))
    }

    fn username_exists(&self, username: &str) -> Result<bool, StoreError> {
        self.runtime.block_on(self.row_exists(SELECT_USERNAME, &[username]))
    }

    fn insert(&self, account: &Account) -> Result<(), StoreError> {
        self.runtime.block_on(async {
            let mut conn = self.connect().await?;
            let result = sqlx::query::<Any>(INSERT_ACCOUNT)
                .bind(account.username.as_str())
                .bind(account.password.as_str())
                .execute(&mut conn)
                .await
                .map(|_| ())
                .map_err(|err| {
                    let duplicate = err
                        .as_database_error()
                        .map_or(false, |db| db.is_unique_violation());
                    if duplicate {
                        StoreError::Duplicate
                    } else {
                        StoreError::Query(err)
                    }
                });
            close(conn).await;
            result
        })
    }
}

async fn close(conn: AnyConnection) {
    if let Err(err) = conn.close().await {
        warn!("Failed to close database connection: {}", err);
    }
}
