//! Repository for the `authors` table.

use quotes_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::author::{Author, CreateAuthor};

/// Column list for `authors` queries.
const COLUMNS: &str = "id, name";

/// Provides data access for authors.
pub struct AuthorRepo;

impl AuthorRepo {
    /// Insert a new author and return the stored row.
    ///
    /// Runs in its own transaction: a duplicate name fails the insert and the
    /// transaction is rolled back on drop, leaving no partial write behind.
    pub async fn create(pool: &SqlitePool, input: &CreateAuthor) -> Result<Author, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("INSERT INTO authors (name) VALUES (?1) RETURNING {COLUMNS}");
        let author = sqlx::query_as::<_, Author>(&query)
            .bind(&input.name)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(author)
    }

    /// Find an author by id.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Author>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM authors WHERE id = ?1");
        sqlx::query_as::<_, Author>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all authors in id order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Author>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM authors ORDER BY id");
        sqlx::query_as::<_, Author>(&query).fetch_all(pool).await
    }

    /// Delete an author. Its quotes go with it through `ON DELETE CASCADE`.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM authors WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
