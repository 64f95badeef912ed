//! Persistence for the five judging resources.
//!
//! Every table follows the same shape, so the CRUD logic lives once in
//! [`Repository`] and each table only supplies a [`Resource`] impl: its SQL,
//! its client-facing nouns, and how its validated draft binds to that SQL.

use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::{FromRow, PgConnection, PgPool, Postgres, Row};
use validator::ValidationErrors;

use crate::error::{Result, StorageError};

pub mod competition;
pub mod criteria;
pub mod event_type;
pub mod judge;
pub mod participant;
pub mod reference;

pub use competition::CompetitionResource;
pub use criteria::CriteriaResource;
pub use event_type::EventTypeResource;
pub use judge::JudgeResource;
pub use participant::ParticipantResource;
pub use reference::{Reference, Target};

pub type PgQuery<'q> = sqlx::query::Query<'q, Postgres, PgArguments>;

/// A validated, normalized request that can be bound to a write statement.
pub trait Draft: Send + Sync {
    /// Display name echoed back in confirmation messages.
    fn name(&self) -> &str;

    /// Name of the referenced row, when the client supplied one.
    fn reference_name(&self) -> Option<&str> {
        None
    }

    /// Binds the draft's own columns, in the order the resource's
    /// `INSERT_SQL` and `UPDATE_SQL` expect them.
    fn bind<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q>;
}

/// One managed table.
///
/// Bind order for `INSERT_SQL` is the draft's columns followed by the resolved
/// reference id (only when `REFERENCE` is set). `UPDATE_SQL` uses the same
/// order and takes the row id as its last parameter. `INSERT_SQL` must
/// return the new `id`.
pub trait Resource: Send + Sync + 'static {
    const TABLE: &'static str;
    /// Singular noun used mid-sentence, e.g. "event type".
    const NOUN: &'static str;
    /// Singular noun used to open a sentence, e.g. "Event type".
    const TITLE: &'static str;
    const PLURAL: &'static str;
    /// Verb for creation in messages, e.g. "create" or "add".
    const CREATE_VERB: &'static str;
    const CREATED_VERB: &'static str;
    /// Request fields in payload order; validation messages follow it.
    const FIELDS: &'static [&'static str];

    /// Message returned when a unique column rejects a write.
    const DUPLICATE: Option<&'static str> = None;
    const REFERENCE: Option<Reference> = None;

    const LIST_SQL: &'static str;
    const INSERT_SQL: &'static str;
    const UPDATE_SQL: &'static str;

    type Request: DeserializeOwned + Send + 'static;
    type Draft: Draft + 'static;
    type Record: for<'r> FromRow<'r, PgRow> + Serialize + Send + Unpin + 'static;

    fn normalize(request: Self::Request) -> std::result::Result<Self::Draft, ValidationErrors>;
}

/// CRUD over any [`Resource`]
pub struct Repository<'a, R> {
    pool: &'a PgPool,
    resource: PhantomData<R>,
}

impl<'a, R: Resource> Repository<'a, R> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self {
            pool,
            resource: PhantomData,
        }
    }

    /// All rows with their reference names joined in, in the resource's order
    pub async fn list(&self) -> Result<Vec<R::Record>> {
        let records = sqlx::query_as::<_, R::Record>(R::LIST_SQL)
            .fetch_all(self.pool)
            .await?;

        Ok(records)
    }

    /// Insert a row and return its id.
    ///
    /// The reference lookup and the insert share one transaction.
    pub async fn create(&self, draft: &R::Draft) -> Result<i32> {
        let mut tx = self.pool.begin().await?;

        let reference_id = resolve_reference::<R>(&mut tx, draft).await?;

        let mut query = draft.bind(sqlx::query(R::INSERT_SQL));
        if R::REFERENCE.is_some() {
            query = query.bind(reference_id);
        }

        let row = query
            .fetch_one(&mut *tx)
            .await
            .map_err(write_error::<R>)?;
        let id: i32 = row.try_get("id")?;

        tx.commit().await?;

        Ok(id)
    }

    /// Replace every column of an existing row and stamp `updated_at`
    pub async fn update(&self, id: i32, draft: &R::Draft) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let reference_id = resolve_reference::<R>(&mut tx, draft).await?;

        let mut query = draft.bind(sqlx::query(R::UPDATE_SQL));
        if R::REFERENCE.is_some() {
            query = query.bind(reference_id);
        }

        let result = query
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(write_error::<R>)?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        let sql = format!("DELETE FROM {} WHERE id = $1", R::TABLE);
        let result = sqlx::query(&sql).bind(id).execute(self.pool).await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}

async fn resolve_reference<R: Resource>(
    conn: &mut PgConnection,
    draft: &R::Draft,
) -> Result<Option<i32>> {
    let (Some(reference), Some(name)) = (R::REFERENCE, draft.reference_name()) else {
        return Ok(None);
    };

    let id = reference::resolve(conn, reference.target, name)
        .await
        .map_err(|source| StorageError::Lookup {
            target: reference.target,
            source,
        })?;

    match id {
        None if reference.required => Err(StorageError::InvalidReference(format!(
            "{} '{}' does not exist",
            reference.target.title(),
            name
        ))),
        id => Ok(id),
    }
}

fn write_error<R: Resource>(error: sqlx::Error) -> StorageError {
    let error = StorageError::from(error);
    match R::DUPLICATE {
        Some(message) if error.is_unique_violation() => StorageError::Duplicate(message),
        _ => error,
    }
}
