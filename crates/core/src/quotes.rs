//! Column limits and input rules for authors and quotes.

use crate::error::CoreError;

/// Maximum length of `authors.name`.
pub const MAX_AUTHOR_NAME_LEN: usize = 32;

/// Maximum length of `quotes.text`.
pub const MAX_QUOTE_TEXT_LEN: usize = 255;

/// Rating stored for a freshly created quote.
pub const DEFAULT_RATE: i64 = 0;

/// Validate an author name.
///
/// Rules:
/// - must not be empty
/// - at most [`MAX_AUTHOR_NAME_LEN`] characters
pub fn validate_author_name(name: &str) -> Result<(), CoreError> {
    if name.is_empty() {
        return Err(CoreError::Validation(
            "Author name must not be empty".to_string(),
        ));
    }
    if name.chars().count() > MAX_AUTHOR_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Author name must not exceed {MAX_AUTHOR_NAME_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate quote text. Empty text is accepted; only the length is bounded.
pub fn validate_quote_text(text: &str) -> Result<(), CoreError> {
    if text.chars().count() > MAX_QUOTE_TEXT_LEN {
        return Err(CoreError::Validation(format!(
            "Quote text must not exceed {MAX_QUOTE_TEXT_LEN} characters"
        )));
    }
    Ok(())
}

/// Treat empty strings as absent, the way an edit request skips falsy fields.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Treat a zero id as absent.
pub fn non_zero(value: Option<i64>) -> Option<i64> {
    value.filter(|v| *v != 0)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    // -- validate_author_name -------------------------------------------------

    #[test]
    fn valid_author_name() {
        assert!(validate_author_name("Mark Twain").is_ok());
    }

    #[test]
    fn empty_author_name_rejected() {
        assert_matches!(validate_author_name(""), Err(CoreError::Validation(_)));
    }

    #[test]
    fn author_name_at_limit_accepted() {
        let name = "a".repeat(MAX_AUTHOR_NAME_LEN);
        assert!(validate_author_name(&name).is_ok());
    }

    #[test]
    fn author_name_over_limit_rejected() {
        let name = "a".repeat(MAX_AUTHOR_NAME_LEN + 1);
        assert_matches!(validate_author_name(&name), Err(CoreError::Validation(_)));
    }

    #[test]
    fn author_name_limit_counts_chars_not_bytes() {
        // 32 Cyrillic letters are 64 bytes in UTF-8.
        let name = "ж".repeat(MAX_AUTHOR_NAME_LEN);
        assert!(validate_author_name(&name).is_ok());
    }

    // -- validate_quote_text --------------------------------------------------

    #[test]
    fn empty_quote_text_accepted() {
        assert!(validate_quote_text("").is_ok());
    }

    #[test]
    fn quote_text_over_limit_rejected() {
        let text = "x".repeat(MAX_QUOTE_TEXT_LEN + 1);
        assert_matches!(validate_quote_text(&text), Err(CoreError::Validation(_)));
    }

    // -- falsy filters --------------------------------------------------------

    #[test]
    fn empty_string_is_absent() {
        assert_eq!(non_empty(Some("")), None);
        assert_eq!(non_empty(Some("new")), Some("new"));
        assert_eq!(non_empty(None), None);
    }

    #[test]
    fn zero_id_is_absent() {
        assert_eq!(non_zero(Some(0)), None);
        assert_eq!(non_zero(Some(3)), Some(3));
    }
}
