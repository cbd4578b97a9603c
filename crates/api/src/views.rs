//! JSON shapes returned by the API.
//!
//! Every scalar column is rendered as a string. A quote embeds its author in
//! place of the raw `author_id`; an author never lists its quotes.

use quotes_db::models::author::Author;
use quotes_db::models::quote::QuoteWithAuthor;
use serde::Serialize;

/// Serialized author: `{"id": "1", "name": "Mark Twain"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorView {
    pub id: String,
    pub name: String,
}

impl From<&Author> for AuthorView {
    fn from(author: &Author) -> Self {
        Self {
            id: author.id.to_string(),
            name: author.name.clone(),
        }
    }
}

/// Serialized quote with its author nested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteView {
    pub id: String,
    pub text: String,
    pub rate: String,
    pub author: AuthorView,
}

impl From<&QuoteWithAuthor> for QuoteView {
    fn from(quote: &QuoteWithAuthor) -> Self {
        Self {
            id: quote.id.to_string(),
            text: quote.text.clone(),
            rate: quote.rate.to_string(),
            author: AuthorView::from(&quote.author()),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn twain_quote() -> QuoteWithAuthor {
        QuoteWithAuthor {
            id: 1,
            author_id: 1,
            text: "Truth is stranger than fiction.".to_string(),
            rate: 0,
            author_name: "Mark Twain".to_string(),
        }
    }

    #[test]
    fn author_serializes_columns_as_strings() {
        let author = Author {
            id: 1,
            name: "Mark Twain".to_string(),
        };
        let value = serde_json::to_value(AuthorView::from(&author)).unwrap();
        assert_eq!(value, json!({"id": "1", "name": "Mark Twain"}));
    }

    #[test]
    fn quote_nests_author_and_drops_author_id() {
        let value = serde_json::to_value(QuoteView::from(&twain_quote())).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "1",
                "text": "Truth is stranger than fiction.",
                "rate": "0",
                "author": {"id": "1", "name": "Mark Twain"},
            })
        );
        assert!(value.get("author_id").is_none());
    }

    #[test]
    fn non_ascii_text_is_not_escaped() {
        let mut quote = twain_quote();
        quote.text = "Жизнь прекрасна".to_string();
        let body = serde_json::to_string(&QuoteView::from(&quote)).unwrap();
        assert!(body.contains("Жизнь прекрасна"));
    }
}
