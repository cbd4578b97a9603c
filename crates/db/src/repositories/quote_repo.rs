//! Repository for the `quotes` table.
//!
//! Reads always join the owning author so callers can render the nested
//! author without a second round trip.

use quotes_core::types::DbId;
use sqlx::{Sqlite, SqlitePool};

use crate::models::quote::{CreateQuote, Quote, QuoteWithAuthor};

/// Column list for plain `quotes` queries.
const COLUMNS: &str = "id, author_id, text, rate";

/// Column list for `quotes` joined with `authors` (aliases `q` and `a`).
const JOINED_COLUMNS: &str = "\
    q.id AS id, q.author_id AS author_id, q.text AS text, q.rate AS rate, \
    a.name AS author_name";

/// Provides data access for quotes.
pub struct QuoteRepo;

impl QuoteRepo {
    /// List every quote with its author, in id order.
    pub async fn list_with_authors(pool: &SqlitePool) -> Result<Vec<QuoteWithAuthor>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM quotes q \
             JOIN authors a ON a.id = q.author_id \
             ORDER BY q.id"
        );
        sqlx::query_as::<_, QuoteWithAuthor>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a quote by id, joined with its author.
    pub async fn find_with_author(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<QuoteWithAuthor>, sqlx::Error> {
        Self::fetch_with_author(pool, id).await
    }

    /// List the quotes owned by one author, in id order.
    pub async fn list_by_author(
        pool: &SqlitePool,
        author_id: DbId,
    ) -> Result<Vec<Quote>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM quotes WHERE author_id = ?1 ORDER BY id");
        sqlx::query_as::<_, Quote>(&query)
            .bind(author_id)
            .fetch_all(pool)
            .await
    }

    /// Insert a quote under `author_id`. The rate comes from the column
    /// default.
    ///
    /// The author is not looked up first: an unknown `author_id` surfaces as
    /// a foreign key violation from the database.
    pub async fn create(
        pool: &SqlitePool,
        author_id: DbId,
        input: &CreateQuote,
    ) -> Result<QuoteWithAuthor, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let (id,): (DbId,) =
            sqlx::query_as("INSERT INTO quotes (author_id, text) VALUES (?1, ?2) RETURNING id")
                .bind(author_id)
                .bind(&input.text)
                .fetch_one(&mut *tx)
                .await?;

        let quote = Self::fetch_with_author(&mut *tx, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;

        tx.commit().await?;
        Ok(quote)
    }

    /// Partially update a quote.
    ///
    /// Uses `COALESCE` so only provided fields are changed. Returns `None` if
    /// the quote does not exist.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        author_id: Option<DbId>,
        text: Option<&str>,
    ) -> Result<Option<QuoteWithAuthor>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let result = sqlx::query(
            "UPDATE quotes SET \
                 author_id = COALESCE(?2, author_id), \
                 text = COALESCE(?3, text) \
             WHERE id = ?1",
        )
        .bind(id)
        .bind(author_id)
        .bind(text)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        let quote = Self::fetch_with_author(&mut *tx, id).await?;
        tx.commit().await?;
        Ok(quote)
    }

    /// Delete a quote, returning its last stored state.
    ///
    /// Returns `None` if the quote does not exist.
    pub async fn delete(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<QuoteWithAuthor>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let Some(quote) = Self::fetch_with_author(&mut *tx, id).await? else {
            return Ok(None);
        };

        sqlx::query("DELETE FROM quotes WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(quote))
    }

    async fn fetch_with_author<'e, E>(
        executor: E,
        id: DbId,
    ) -> Result<Option<QuoteWithAuthor>, sqlx::Error>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM quotes q \
             JOIN authors a ON a.id = q.author_id \
             WHERE q.id = ?1"
        );
        sqlx::query_as::<_, QuoteWithAuthor>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }
}
