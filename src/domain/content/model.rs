use serde::{Deserialize, Serialize};

use super::error::ContentError;

/// Maximum number of characters a session's content may hold.
pub const MAX_CONTENT_CHARS: usize = 100_000;

/// A single block of plain text extracted from one input source.
///
/// Immutable once created; the only structural guarantee downstream stages
/// rely on is that the text is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content(String);

impl Content {
    pub fn new(text: String) -> Result<Self, ContentError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ContentError::EmptyContent);
        }
        if trimmed.chars().count() > MAX_CONTENT_CHARS {
            return Err(ContentError::TooLarge(trimmed.chars().count()));
        }
        Ok(Content(trimmed.to_string()))
    }

    pub fn text(&self) -> &str {
        &self.0
    }

    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl std::fmt::Display for Content {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_is_trimmed() {
        let content = Content::new("  hello world \n".to_string()).unwrap();
        assert_eq!(content.text(), "hello world");
    }

    #[test]
    fn test_empty_content_is_rejected() {
        assert!(matches!(
            Content::new("   \n\t ".to_string()),
            Err(ContentError::EmptyContent)
        ));
    }

    #[test]
    fn test_oversized_content_is_rejected() {
        let text = "a".repeat(MAX_CONTENT_CHARS + 1);
        assert!(matches!(
            Content::new(text),
            Err(ContentError::TooLarge(_))
        ));
    }
}
