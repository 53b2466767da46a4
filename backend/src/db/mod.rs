//! # Dealer Store
//!
//! Document-style persistence for `Dealer` records on top of SQLite.
//!
//! Every dealer is stored as one JSON document in the `dealers` table. The
//! `state` column duplicates `location.state` so that the by-state lookup can
//! use an index instead of decoding every document. Rows come back in
//! insertion order (`rowid`).
//!
//! A single `Connection` is opened at startup and shared for the whole life of
//! the process. Calls are serialized through an async mutex, and the review
//! append runs its read-modify-write inside one transaction so two concurrent
//! submissions for the same dealer cannot overwrite each other.

use chrono::Utc;
use common::model::dealer::{Dealer, NewDealer};
use common::model::review::{NewReview, Review};
use rusqlite::{params, Connection, OptionalExtension};
use thiserror::Error;
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid dealer id `{0}`")]
    InvalidId(String),
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
    #[error("corrupt dealer document: {0}")]
    Document(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    /// Opens the store at `path`. `:memory:` gives a private in-memory store.
    pub fn new(path: &str) -> StoreResult<Self> {
        let conn = if path == ":memory:" {
            Connection::open_in_memory()?
        } else {
            Connection::open(path)?
        };
        Ok(Database {
            conn: Mutex::new(conn),
        })
    }

    pub async fn create_schema(&self) -> StoreResult<()> {
        let conn = self.conn.lock().await;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS dealers (
                id TEXT PRIMARY KEY,
                state TEXT NOT NULL,
                document TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_dealers_state ON dealers(state);",
        )?;
        Ok(())
    }

    /// Removes every dealer. Returns the number of removed records.
    pub async fn delete_all(&self) -> StoreResult<usize> {
        let conn = self.conn.lock().await;
        Ok(conn.execute("DELETE FROM dealers", [])?)
    }

    /// Inserts all dealers in one transaction, assigning ids to the dealers and
    /// their reviews and stamping every review with the current time.
    pub async fn insert_many(&self, dealers: Vec<NewDealer>) -> StoreResult<Vec<Dealer>> {
        let mut conn = self.conn.lock().await;
        let tx = conn.transaction()?;
        let now = Utc::now();

        let mut inserted = Vec::with_capacity(dealers.len());
        for new in dealers {
            let dealer = Dealer {
                id: new_id(),
                name: new.name,
                location: new.location,
                address: new.address,
                reviews: new
                    .reviews
                    .into_iter()
                    .map(|r| r.into_review(new_id(), now))
                    .collect(),
            };
            tx.execute(
                "INSERT INTO dealers (id, state, document) VALUES (?1, ?2, ?3)",
                params![
                    &dealer.id,
                    &dealer.location.state,
                    serde_json::to_string(&dealer)?
                ],
            )?;
            inserted.push(dealer);
        }
        tx.commit()?;

        Ok(inserted)
    }

    pub async fn find_all(&self) -> StoreResult<Vec<Dealer>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare("SELECT document FROM dealers ORDER BY rowid")?;
        let documents = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        decode_all(documents)
    }

    /// Looks a dealer up by id.
    ///
    /// Returns `Ok(None)` for a well-formed id with no match and
    /// `Err(StoreError::InvalidId)` when the id is not a valid store id.
    pub async fn find_by_id(&self, id: &str) -> StoreResult<Option<Dealer>> {
        let id = parse_id(id)?;
        let conn = self.conn.lock().await;
        load(&conn, &id)
    }

    /// Exact, case-sensitive match on `location.state`.
    pub async fn find_by_state(&self, state: &str) -> StoreResult<Vec<Dealer>> {
        let conn = self.conn.lock().await;
        let mut stmt =
            conn.prepare("SELECT document FROM dealers WHERE state = ?1 ORDER BY rowid")?;
        let documents = stmt
            .query_map(params![state], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        decode_all(documents)
    }

    /// Appends a review to the end of the dealer's `reviews` and persists the
    /// whole dealer, returning the updated review list.
    ///
    /// `Ok(None)` means the id is well-formed but matches no dealer.
    pub async fn append_review(
        &self,
        id: &str,
        review: NewReview,
    ) -> StoreResult<Option<Vec<Review>>> {
        let id = parse_id(id)?;
        let mut conn = self.conn.lock().await;
        let tx = conn.transaction()?;

        let Some(mut dealer) = load(&tx, &id)? else {
            return Ok(None);
        };
        dealer.reviews.push(review.into_review(new_id(), Utc::now()));
        save(&tx, &dealer)?;
        tx.commit()?;

        Ok(Some(dealer.reviews))
    }

    /// Runs raw SQL against the store connection.
    #[cfg(test)]
    pub(crate) async fn execute_batch(&self, sql: &str) -> StoreResult<()> {
        let conn = self.conn.lock().await;
        Ok(conn.execute_batch(sql)?)
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Normalizes any accepted UUID spelling to the hyphenated form used as key.
fn parse_id(id: &str) -> StoreResult<String> {
    Uuid::parse_str(id)
        .map(|uuid| uuid.hyphenated().to_string())
        .map_err(|_| StoreError::InvalidId(id.to_string()))
}

fn load(conn: &Connection, id: &str) -> StoreResult<Option<Dealer>> {
    let document: Option<String> = conn
        .query_row(
            "SELECT document FROM dealers WHERE id = ?1",
            params![id],
            |row| row.get(0),
        )
        .optional()?;
    match document {
        Some(doc) => Ok(Some(serde_json::from_str(&doc)?)),
        None => Ok(None),
    }
}

/// Whole-document replace. Returns `false` if no record with that id exists.
fn save(conn: &Connection, dealer: &Dealer) -> StoreResult<bool> {
    let changed = conn.execute(
        "UPDATE dealers SET state = ?1, document = ?2 WHERE id = ?3",
        params![
            &dealer.location.state,
            serde_json::to_string(dealer)?,
            &dealer.id
        ],
    )?;
    Ok(changed > 0)
}

fn decode_all(documents: Vec<String>) -> StoreResult<Vec<Dealer>> {
    documents
        .iter()
        .map(|doc| serde_json::from_str(doc).map_err(StoreError::from))
        .collect()
}
