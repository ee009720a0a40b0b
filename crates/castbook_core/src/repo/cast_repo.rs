//! Cast store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide create / list / update / delete over the `casts` table.
//! - Own the table schema and its `PRAGMA user_version` stamp.
//!
//! # Invariants
//! - Every operation opens its own connection, runs exactly one statement,
//!   and drops the connection on every exit path. `initialize` also checks
//!   and stamps the schema version.
//! - Callers run `initialize` once before any other operation.
//! - `list_all` returns every row, ordered by `store_name, person_name`.
//! - Updating or deleting a missing id affects zero rows and succeeds.

use crate::model::cast::{CastDraft, CastId, CastRecord};
use log::{debug, error, info};
use rusqlite::types::ValueRef;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Schema revision stamped into `PRAGMA user_version` by `initialize`.
pub const SCHEMA_VERSION: u32 = 1;

const CREATE_SCHEMA_SQL: &str = "CREATE TABLE IF NOT EXISTS casts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    store_name TEXT NOT NULL,
    person_name TEXT NOT NULL,
    age INTEGER,
    note TEXT
);";

const CAST_SELECT_SQL: &str = "SELECT id, store_name, person_name, age, note FROM casts";

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

pub type RepoResult<T> = Result<T, RepoError>;

/// Store error for cast persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Sqlite(rusqlite::Error),
    /// The cast file was stamped by a newer build.
    UnsupportedSchemaVersion {
        file_version: u32,
        supported: u32,
    },
    /// A column holds a value of the wrong storage class.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                file_version,
                supported,
            } => write!(
                f,
                "cast file uses schema version {file_version}; this build reads up to {supported}"
            ),
            Self::InvalidData(message) => write!(f, "invalid persisted cast data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } | Self::InvalidData(_) => None,
        }
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Persistence contract for casts.
pub trait CastRepository {
    /// Ensures the backing schema exists. Never touches rows.
    fn initialize(&self) -> RepoResult<()>;
    /// Every cast, sorted by `(store_name, person_name)`.
    fn list_all(&self) -> RepoResult<Vec<CastRecord>>;
    /// Inserts one cast and returns its freshly allocated id.
    fn create(&self, draft: &CastDraft) -> RepoResult<CastId>;
    /// Overwrites every field of `id`; a missing id is a silent no-op.
    fn update(&self, id: CastId, draft: &CastDraft) -> RepoResult<()>;
    /// Removes `id`; a missing id is a silent no-op.
    fn delete(&self, id: CastId) -> RepoResult<()>;
}

/// SQLite-file-backed cast store.
///
/// Holds only the file path; connections are scoped to one call.
#[derive(Debug, Clone)]
pub struct SqliteCastStore {
    path: PathBuf,
}

impl SqliteCastStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn connect(&self) -> RepoResult<Connection> {
        let started_at = Instant::now();
        let opened = Connection::open(&self.path)
            .and_then(|conn| conn.busy_timeout(BUSY_TIMEOUT).map(|()| conn));

        match opened {
            Ok(conn) => {
                debug!(
                    "event=db_open module=repo status=ok duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(conn)
            }
            Err(err) => {
                error!(
                    "event=db_open module=repo status=error duration_ms={} path={} error={}",
                    started_at.elapsed().as_millis(),
                    self.path.display(),
                    err
                );
                Err(err.into())
            }
        }
    }
}

impl CastRepository for SqliteCastStore {
    fn initialize(&self) -> RepoResult<()> {
        let mut conn = self.connect()?;
        let file_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;

        if file_version > SCHEMA_VERSION {
            error!(
                "event=store_init module=repo status=error file_version={file_version} supported={SCHEMA_VERSION}"
            );
            return Err(RepoError::UnsupportedSchemaVersion {
                file_version,
                supported: SCHEMA_VERSION,
            });
        }
        if file_version < SCHEMA_VERSION {
            let tx = conn.transaction()?;
            tx.execute_batch(CREATE_SCHEMA_SQL)?;
            tx.pragma_update(None, "user_version", SCHEMA_VERSION)?;
            tx.commit()?;
        }

        info!(
            "event=store_init module=repo status=ok path={} schema_from={file_version} schema_to={SCHEMA_VERSION}",
            self.path.display()
        );
        Ok(())
    }

    fn list_all(&self) -> RepoResult<Vec<CastRecord>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!(
            "{CAST_SELECT_SQL} ORDER BY store_name ASC, person_name ASC;"
        ))?;
        let mut rows = stmt.query([])?;
        let mut casts = Vec::new();

        while let Some(row) = rows.next()? {
            casts.push(parse_cast_row(row)?);
        }

        debug!(
            "event=cast_list module=repo status=ok count={}",
            casts.len()
        );
        Ok(casts)
    }

    fn create(&self, draft: &CastDraft) -> RepoResult<CastId> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO casts (store_name, person_name, age, note)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                draft.store_name.as_str(),
                draft.person_name.as_str(),
                draft.age,
                draft.note.as_deref(),
            ],
        )?;
        let id = conn.last_insert_rowid();

        debug!("event=cast_create module=repo status=ok id={id}");
        Ok(id)
    }

    fn update(&self, id: CastId, draft: &CastDraft) -> RepoResult<()> {
        let conn = self.connect()?;
        let changed = conn.execute(
            "UPDATE casts
             SET
                store_name = ?1,
                person_name = ?2,
                age = ?3,
                note = ?4
             WHERE id = ?5;",
            params![
                draft.store_name.as_str(),
                draft.person_name.as_str(),
                draft.age,
                draft.note.as_deref(),
                id,
            ],
        )?;

        debug!("event=cast_update module=repo status=ok id={id} rows_affected={changed}");
        Ok(())
    }

    fn delete(&self, id: CastId) -> RepoResult<()> {
        let conn = self.connect()?;
        let changed = conn.execute("DELETE FROM casts WHERE id = ?1;", [id])?;

        debug!("event=cast_delete module=repo status=ok id={id} rows_affected={changed}");
        Ok(())
    }
}

fn parse_cast_row(row: &Row<'_>) -> RepoResult<CastRecord> {
    let id: CastId = row.get("id")?;

    let age = match row.get_ref("age")? {
        ValueRef::Null => None,
        ValueRef::Integer(value) => Some(value),
        other => {
            return Err(RepoError::InvalidData(format!(
                "{} value in casts.age for cast {id}",
                other.data_type()
            )));
        }
    };

    let note = row
        .get::<_, Option<String>>("note")?
        .filter(|value| !value.is_empty());

    Ok(CastRecord {
        id,
        store_name: row.get("store_name")?,
        person_name: row.get("person_name")?,
        age,
        note,
    })
}
