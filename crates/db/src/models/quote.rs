//! Quote models and DTOs.

use quotes_core::types::DbId;
use serde::Deserialize;
use sqlx::FromRow;

use crate::models::author::Author;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `quotes` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Quote {
    pub id: DbId,
    pub author_id: DbId,
    pub text: String,
    pub rate: i64,
}

/// A quote joined with the name of its author.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct QuoteWithAuthor {
    pub id: DbId,
    pub author_id: DbId,
    pub text: String,
    pub rate: i64,
    pub author_name: String,
}

impl QuoteWithAuthor {
    /// The owning author as a standalone row.
    pub fn author(&self) -> Author {
        Author {
            id: self.author_id,
            name: self.author_name.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a quote under the author named in the path.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateQuote {
    pub text: String,
}

/// DTO for editing a quote. Absent, empty or zero fields leave the stored
/// value unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EditQuote {
    /// Id of the author to move the quote to.
    pub author: Option<DbId>,
    pub text: Option<String>,
}
