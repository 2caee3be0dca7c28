//! Clip entry field types

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Maximum length for entry content (characters)
const MAX_CONTENT_LEN: usize = 10_000;

/// Maximum length for entry titles (characters)
const MAX_TITLE_LEN: usize = 500;

/// Kind of clipboard entry: plain text or a URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Text,
    Url,
}

impl EntryKind {
    /// Parse an entry kind from its wire literal.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        match value {
            "text" => Ok(Self::Text),
            "url" => Ok(Self::Url),
            other => Err(ValidationError::InvalidVariant {
                field: "type",
                value: other.to_string(),
            }),
        }
    }

    /// Get string representation (matches the storage check constraint).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Url => "url",
        }
    }
}

/// Validated clip content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryContent(String);

impl EntryContent {
    /// Create new entry content.
    ///
    /// # Rules
    /// - Must not be empty
    /// - Max 10000 characters
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "content" });
        }
        if s.chars().count() > MAX_CONTENT_LEN {
            return Err(ValidationError::TooLong {
                field: "content",
                max: MAX_CONTENT_LEN,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Get the content as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for EntryContent {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validated clip title (max 500 characters)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryTitle(String);

impl EntryTitle {
    /// Create a new entry title. Empty titles are allowed.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.chars().count() > MAX_TITLE_LEN {
            return Err(ValidationError::TooLong {
                field: "title",
                max: MAX_TITLE_LEN,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Get the title as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}
