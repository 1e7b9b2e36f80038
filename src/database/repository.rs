/*!
 * Repository layer for post metadata.
 *
 * This module provides a high-level API over the `post_meta` table and
 * implements `MetaStore` so the bridge can persist layouts in SQLite.
 */

use anyhow::Result;
use log::debug;
use rusqlite::{Connection, OptionalExtension, params};

use super::connection::{DatabaseConnection, DatabaseStats};
use super::models::MetaRecord;
use crate::errors::StoreError;
use crate::layout::store::{MetaStore, PostId};

/// Repository for post metadata
#[derive(Clone)]
pub struct MetaRepository {
    /// Database connection
    db: DatabaseConnection,
}

fn sql_id(post_id: PostId) -> Result<i64> {
    i64::try_from(post_id).map_err(|_| anyhow::anyhow!("Post id {} is out of range", post_id))
}

impl MetaRepository {
    /// Create a new repository with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a repository with the default database location
    pub fn new_default() -> Result<Self> {
        let db = DatabaseConnection::new_default()?;
        Ok(Self::new(db))
    }

    /// Create a repository with an in-memory database (for testing)
    pub fn new_in_memory() -> Result<Self> {
        let db = DatabaseConnection::new_in_memory()?;
        Ok(Self::new(db))
    }

    /// Get a stored record
    pub fn get_record(&self, post_id: PostId, key: &str) -> Result<Option<MetaRecord>> {
        let id = sql_id(post_id)?;
        self.db.execute(|conn| Self::get_record_sync(conn, id, key))
    }

    fn get_record_sync(conn: &Connection, post_id: i64, key: &str) -> Result<Option<MetaRecord>> {
        let record = conn
            .query_row(
                r#"
                SELECT post_id, meta_key, meta_value, updated_at
                FROM post_meta WHERE post_id = ?1 AND meta_key = ?2
                "#,
                params![post_id, key],
                Self::map_record,
            )
            .optional()?;

        Ok(record)
    }

    fn map_record(row: &rusqlite::Row<'_>) -> rusqlite::Result<MetaRecord> {
        Ok(MetaRecord {
            post_id: row.get::<_, i64>(0)? as PostId,
            meta_key: row.get(1)?,
            meta_value: row.get(2)?,
            updated_at: row.get(3)?,
        })
    }

    /// Create or replace a value
    pub fn upsert(&self, post_id: PostId, key: &str, value: &str) -> Result<()> {
        let id = sql_id(post_id)?;
        self.db.execute(|conn| {
            conn.execute(
                r#"
                INSERT INTO post_meta (post_id, meta_key, meta_value, updated_at)
                VALUES (?1, ?2, ?3, datetime('now'))
                ON CONFLICT(post_id, meta_key)
                DO UPDATE SET meta_value = excluded.meta_value, updated_at = excluded.updated_at
                "#,
                params![id, key, value],
            )?;
            Ok(())
        })?;

        debug!("Stored '{}' for post {} ({} bytes)", key, post_id, value.len());
        Ok(())
    }

    /// Delete a value, returning whether it existed
    pub fn delete(&self, post_id: PostId, key: &str) -> Result<bool> {
        let id = sql_id(post_id)?;
        let removed = self.db.execute(|conn| {
            Ok(conn.execute(
                "DELETE FROM post_meta WHERE post_id = ?1 AND meta_key = ?2",
                params![id, key],
            )?)
        })?;
        Ok(removed > 0)
    }

    /// Posts that have a value under the given key, ascending
    pub fn posts_with_key(&self, key: &str) -> Result<Vec<PostId>> {
        self.db.execute(|conn| {
            let mut stmt = conn.prepare(
                "SELECT post_id FROM post_meta WHERE meta_key = ?1 ORDER BY post_id",
            )?;
            let ids = stmt
                .query_map([key], |row| row.get::<_, i64>(0))?
                .map(|id| id.map(|id| id as PostId))
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(ids)
        })
    }

    /// Storage statistics
    pub fn stats(&self) -> Result<DatabaseStats> {
        self.db.stats()
    }
}

impl MetaStore for MetaRepository {
    fn get_meta(&self, post_id: PostId, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.get_record(post_id, key)?.map(|r| r.meta_value))
    }

    fn set_meta(&self, post_id: PostId, key: &str, value: &str) -> Result<(), StoreError> {
        Ok(self.upsert(post_id, key, value)?)
    }
}
