use crate::config::Config;
use crate::db::models::{NewPerson, PersonRecord};
use crate::db::schema::SQLITE_INIT;
use crate::error::{CadastroError, ConnectError};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::{debug, warn};

/// Primary result code for SQLITE_BUSY; extended codes share the low byte.
const SQLITE_BUSY: i32 = 5;

pub type SqlitePool = Pool<Sqlite>;

/// Open the pool described by `cfg`.
///
/// At least one connection is established before returning, so a bad URL,
/// missing directory or unreadable file fails here instead of on the first
/// request. `query_timeout` becomes SQLite's busy timeout.
pub async fn connect(cfg: &Config) -> Result<SqlitePool, ConnectError> {
    let options = SqliteConnectOptions::from_str(&cfg.database_url)?
        .create_if_missing(true)
        .busy_timeout(cfg.query_timeout());

    let mut pool = SqlitePoolOptions::new().max_connections(cfg.max_connections.max(1));
    // An in-memory database lives only as long as its connection.
    if cfg.database_url.contains(":memory:") {
        pool = pool.idle_timeout(None).max_lifetime(None);
    }

    let pool = pool.connect_with(options).await?;
    debug!(database_url = %cfg.database_url, "database pool ready");
    Ok(pool)
}

fn is_busy(err: &sqlx::Error) -> bool {
    let sqlx::Error::Database(db) = err else {
        return false;
    };
    db.code()
        .and_then(|code| code.parse::<i32>().ok())
        .is_some_and(|code| code & 0xff == SQLITE_BUSY)
}

#[derive(Clone)]
pub struct PersonStorage {
    pool: SqlitePool,
}

impl PersonStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), CadastroError> {
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Single autocommit INSERT. The id comes from `last_insert_rowid`.
    ///
    /// The wait on a locked database is bounded by SQLite's busy timeout, so
    /// `QueryTimeout` is only reported once the engine has abandoned the write.
    pub async fn insert(&self, person: NewPerson) -> Result<PersonRecord, CadastroError> {
        let result =
            sqlx::query("INSERT INTO pessoas (nome, telefone, observacao) VALUES (?, ?, ?)")
                .bind(person.name.as_str())
                .bind(person.phone.as_deref())
                .bind(person.note.as_deref())
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    if is_busy(&e) {
                        warn!(error = %e, "insert gave up waiting on a locked database");
                        CadastroError::QueryTimeout
                    } else {
                        CadastroError::Database(e)
                    }
                })?;

        Ok(PersonRecord::from_insert(result.last_insert_rowid(), person))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<PersonRecord>, CadastroError> {
        let record = sqlx::query_as::<_, PersonRecord>(
            "SELECT id, nome, telefone, observacao FROM pessoas WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record)
    }

    pub async fn ping(&self) -> Result<(), CadastroError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
